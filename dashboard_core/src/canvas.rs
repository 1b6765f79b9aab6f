//! Drawing surface abstraction.
//!
//! Dashboard components never talk to a graphics toolkit directly: they emit
//! primitives into a [`Canvas`]. The desktop frontend implements it over an
//! egui painter; [`DrawList`] records the calls for tests and headless runs.

use crate::{
    particles::ParticleVertex,
    types::{Point, Rect, Rgba},
};

/// Where a text position is anchored relative to the rendered string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// Rectangle border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub thickness: f32,
    pub color: Rgba,
}

/// Immediate-mode 2D drawing target. Calls are painted in order.
pub trait Canvas {
    /// Fill `rect` with a vertical gradient from `top` to `bottom`.
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Rgba, bottom: Rgba);

    fn fill_rect(&mut self, rect: Rect, fill: Rgba, outline: Option<Outline>);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);

    /// Point sprites, one per vertex.
    fn points(&mut self, vertices: &[ParticleVertex]);

    fn text(&mut self, position: Point, text: &str, size: f32, color: Rgba, anchor: TextAnchor);
}

/// One recorded [`Canvas`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Gradient {
        rect: Rect,
        top: Rgba,
        bottom: Rgba,
    },
    Rect {
        rect: Rect,
        fill: Rgba,
        outline: Option<Outline>,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Rgba,
    },
    Points(Vec<ParticleVertex>),
    Text {
        position: Point,
        text: String,
        size: f32,
        color: Rgba,
        anchor: TextAnchor,
    },
}

/// A [`Canvas`] that records every call as a [`DrawCommand`].
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text strings in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Rgba, bottom: Rgba) {
        self.commands.push(DrawCommand::Gradient { rect, top, bottom });
    }

    fn fill_rect(&mut self, rect: Rect, fill: Rgba, outline: Option<Outline>) {
        self.commands.push(DrawCommand::Rect { rect, fill, outline });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn points(&mut self, vertices: &[ParticleVertex]) {
        self.commands.push(DrawCommand::Points(vertices.to_vec()));
    }

    fn text(&mut self, position: Point, text: &str, size: f32, color: Rgba, anchor: TextAnchor) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_owned(),
            size,
            color,
            anchor,
        });
    }
}
