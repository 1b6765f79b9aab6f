//! `dashboard_ui` — Bevy desktop frontend for the Sunkist OS dashboard.
//!
//! All dashboard logic lives in `dashboard_core`; this crate only owns the
//! window, feeds the cursor and frame time in, and paints the core's draw
//! calls with an egui painter.
//!
//! # Architecture
//! - **Resources**: `DashboardState`, `ClockText`, `UiFont`
//! - **Systems** (in order): `install_font_system`, `refresh_clock_system`,
//!   `tick_dashboard_system`, `render_dashboard_system`

pub mod app;
pub mod render;
pub mod resources;
pub mod systems;
pub mod ui;

pub use app::run_dashboard_app;
