//! Sidebar icon buttons: a square that lights up under the pointer.

use crate::{
    canvas::{Canvas, Outline, TextAnchor},
    types::{Point, Rect, Rgba},
};
use serde::{Deserialize, Serialize};

const IDLE_FILL: Rgba = Rgba::rgba(40, 40, 60, 180);
const HOVER_FILL: Rgba = Rgba::rgba(60, 60, 90, 220);
const BORDER: Outline = Outline {
    thickness: 1.0,
    color: Rgba::rgb(80, 80, 120),
};
const ICON_COLOR: Rgba = Rgba::rgb(150, 150, 180);

/// What is painted in the middle of the button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonIcon {
    /// Filled circle, radius a quarter of the button size
    Dot,
    /// Centered text label (e.g. "S" for settings)
    Glyph(String),
}

/// A hover-reactive square button. No click handling.
#[derive(Clone, Debug)]
pub struct IconButton {
    rect: Rect,
    icon: ButtonIcon,
    hovered: bool,
}

impl IconButton {
    pub fn new(position: Point, size: f32, icon: ButtonIcon) -> Self {
        Self {
            rect: Rect::square(position, size),
            icon,
            hovered: false,
        }
    }

    /// Recompute the hover flag for this frame.
    pub fn update(&mut self, pointer: Option<Point>) {
        self.hovered = pointer.is_some_and(|p| self.rect.contains(p));
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let fill = if self.hovered { HOVER_FILL } else { IDLE_FILL };
        canvas.fill_rect(self.rect, fill, Some(BORDER));

        let center = self.rect.center();
        let size = self.rect.size.x;
        match &self.icon {
            ButtonIcon::Dot => canvas.fill_circle(center, size / 4.0, ICON_COLOR),
            ButtonIcon::Glyph(label) => {
                canvas.text(center, label, size / 2.0, ICON_COLOR, TextAnchor::Center)
            }
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn icon(&self) -> &ButtonIcon {
        &self.icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, DrawList};

    fn button() -> IconButton {
        IconButton::new(Point::new(20.0, 100.0), 60.0, ButtonIcon::Dot)
    }

    #[test]
    fn hover_follows_pointer() {
        let mut b = button();
        b.update(Some(Point::new(50.0, 130.0)));
        assert!(b.is_hovered());
        b.update(Some(Point::new(500.0, 130.0)));
        assert!(!b.is_hovered());
    }

    #[test]
    fn left_and_top_edges_count_as_hover() {
        let mut b = button();
        b.update(Some(Point::new(20.0, 130.0)));
        assert!(b.is_hovered());
        b.update(Some(Point::new(50.0, 100.0)));
        assert!(b.is_hovered());
    }

    #[test]
    fn right_and_bottom_edges_do_not() {
        let mut b = button();
        b.update(Some(Point::new(80.0, 130.0)));
        assert!(!b.is_hovered());
        b.update(Some(Point::new(50.0, 160.0)));
        assert!(!b.is_hovered());
    }

    #[test]
    fn missing_pointer_clears_hover() {
        let mut b = button();
        b.update(Some(Point::new(50.0, 130.0)));
        b.update(None);
        assert!(!b.is_hovered());
    }

    #[test]
    fn draw_uses_hover_fill_then_icon() {
        let mut b = button();
        let mut list = DrawList::new();
        b.draw(&mut list);
        b.update(Some(Point::new(21.0, 101.0)));
        b.draw(&mut list);

        let fills: Vec<Rgba> = list
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { fill, .. } => Some(*fill),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![IDLE_FILL, HOVER_FILL]);
        assert!(matches!(
            list.commands[1],
            DrawCommand::Circle { radius, center, .. } if radius == 15.0 && center == Point::new(50.0, 130.0)
        ));
    }

    #[test]
    fn glyph_icon_is_centered_text() {
        let b = IconButton::new(Point::new(0.0, 0.0), 40.0, ButtonIcon::Glyph("S".into()));
        let mut list = DrawList::new();
        b.draw(&mut list);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["S"]);
        assert!(matches!(
            &list.commands[1],
            DrawCommand::Text { anchor: TextAnchor::Center, position, .. } if *position == Point::new(20.0, 20.0)
        ));
    }
}
