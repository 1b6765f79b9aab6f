//! Mock terminal panel: a bounded FIFO of system messages.

use crate::{
    canvas::{Canvas, Outline, TextAnchor},
    types::{point, Point, Rect, Rgba},
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const PANEL_FILL: Rgba = Rgba::rgba(0, 0, 0, 128);
const PANEL_BORDER: Outline = Outline {
    thickness: 1.0,
    color: Rgba::rgba(0, 255, 0, 100),
};
const TEXT_INSET: [f32; 2] = [10.0, 5.0];

/// Severity of a log line; selects the text color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    #[default]
    Info,
    Warning,
    Critical,
}

impl MessageKind {
    pub fn color(self) -> Rgba {
        match self {
            MessageKind::Info => Rgba::rgb(0, 255, 100),
            MessageKind::Warning => Rgba::rgb(255, 200, 60),
            MessageKind::Critical => Rgba::rgb(255, 80, 80),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl LogMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Info,
        }
    }
}

/// Bounded message panel. Oldest messages are evicted first.
#[derive(Clone, Debug)]
pub struct LogDisplay {
    max_lines: usize,
    rect: Rect,
    line_height: f32,
    font_size: f32,
    messages: VecDeque<LogMessage>,
}

impl LogDisplay {
    pub fn new(max_lines: usize, rect: Rect) -> Self {
        Self {
            max_lines,
            rect,
            line_height: 20.0,
            font_size: 14.0,
            messages: VecDeque::new(),
        }
    }

    pub fn with_text_metrics(mut self, line_height: f32, font_size: f32) -> Self {
        self.line_height = line_height;
        self.font_size = font_size;
        self
    }

    /// Append at the tail, evicting from the head past `max_lines`.
    pub fn add_message(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.push(LogMessage {
            text: text.into(),
            kind,
        });
    }

    pub fn push(&mut self, message: LogMessage) {
        self.messages.push_back(message);
        while self.messages.len() > self.max_lines {
            self.messages.pop_front();
        }
    }

    /// Panel background, then one line per message top to bottom.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_rect(self.rect, PANEL_FILL, Some(PANEL_BORDER));

        let mut cursor = self.rect.min + point(TEXT_INSET);
        for msg in &self.messages {
            canvas.text(
                cursor,
                &msg.text,
                self.font_size,
                msg.kind.color(),
                TextAnchor::TopLeft,
            );
            cursor.y += self.line_height;
        }
    }

    /// Messages, oldest first.
    pub fn messages(&self) -> impl ExactSizeIterator<Item = &LogMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}
