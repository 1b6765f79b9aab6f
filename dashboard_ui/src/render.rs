//! egui painter backend for the dashboard's draw calls.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use dashboard_core::{
    canvas::{Canvas, Outline, TextAnchor},
    ParticleVertex, Point, Rect, Rgba,
};

use crate::resources::{ClockText, DashboardState};

/// Particles are painted as small discs of this radius.
const POINT_RADIUS: f32 = 1.0;

fn pos(p: Point) -> egui::Pos2 {
    egui::pos2(p.x, p.y)
}

fn color(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn rect(r: Rect) -> egui::Rect {
    egui::Rect::from_min_size(pos(r.min), egui::vec2(r.size.x, r.size.y))
}

fn stroke(outline: Option<Outline>) -> egui::Stroke {
    outline
        .map(|o| egui::Stroke::new(o.thickness, color(o.color)))
        .unwrap_or(egui::Stroke::NONE)
}

/// [`Canvas`] over an egui painter. Screen coordinates map 1:1 to egui points.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl Canvas for EguiCanvas<'_> {
    fn fill_vertical_gradient(&mut self, area: Rect, top: Rgba, bottom: Rgba) {
        let r = rect(area);
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(r.left_top(), color(top));
        mesh.colored_vertex(r.right_top(), color(top));
        mesh.colored_vertex(r.right_bottom(), color(bottom));
        mesh.colored_vertex(r.left_bottom(), color(bottom));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        self.painter.add(egui::Shape::mesh(mesh));
    }

    fn fill_rect(&mut self, area: Rect, fill: Rgba, outline: Option<Outline>) {
        self.painter.rect(rect(area), 0.0, color(fill), stroke(outline));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, fill: Rgba) {
        self.painter.circle_filled(pos(center), radius, color(fill));
    }

    fn points(&mut self, vertices: &[ParticleVertex]) {
        for v in vertices {
            self.painter
                .circle_filled(pos(v.position), POINT_RADIUS, color(v.color));
        }
    }

    fn text(&mut self, position: Point, text: &str, size: f32, fill: Rgba, anchor: TextAnchor) {
        let align = match anchor {
            TextAnchor::TopLeft => egui::Align2::LEFT_TOP,
            TextAnchor::Center => egui::Align2::CENTER_CENTER,
        };
        self.painter.text(
            pos(position),
            align,
            text,
            egui::FontId::proportional(size),
            color(fill),
        );
    }
}

/// Paint the whole dashboard on egui's background layer, under any egui UI.
pub fn render_dashboard_system(
    mut contexts: EguiContexts,
    state: Res<DashboardState>,
    clock: Res<ClockText>,
) {
    let ctx = match contexts.try_ctx_mut() {
        Some(c) => c,
        None => return,
    };
    let painter = ctx.layer_painter(egui::LayerId::background());
    let mut canvas = EguiCanvas::new(&painter);
    state.dashboard.draw(&mut canvas, &clock.0);
}
