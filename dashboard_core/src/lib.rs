//! `dashboard_core` — Sunkist OS dashboard logic, independent of any GUI toolkit.
//!
//! # Module layout
//! - [`types`]      — Points, rectangles, colors
//! - [`canvas`]     — `Canvas` drawing trait + recording `DrawList`
//! - [`particles`]  — Fixed-size particle pool with pointer repulsion
//! - [`button`]     — Hover-reactive icon buttons
//! - [`log`]        — Bounded FIFO log panel
//! - [`status`]     — Synthetic status message feed
//! - [`background`] — Time-varying background gradient
//! - [`clock`]      — Wall-clock text
//! - [`config`]     — Serde configuration with the stock defaults
//! - [`font`]       — Font resource loading (the only fallible startup step)
//! - [`dashboard`]  — Per-frame driver composing all of the above
//! - [`error`]      — Error taxonomy

pub mod background;
pub mod button;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod font;
pub mod log;
pub mod particles;
pub mod status;
pub mod types;

pub use button::{ButtonIcon, IconButton};
pub use canvas::{Canvas, DrawCommand, DrawList, Outline, TextAnchor};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, FrameStats};
pub use error::DashboardError;
pub use font::FontResource;
pub use log::{LogDisplay, LogMessage, MessageKind};
pub use particles::{Particle, ParticleConfig, ParticleSystem, ParticleVertex};
pub use status::StatusFeed;
pub use types::{Point, Rect, Rgba};
