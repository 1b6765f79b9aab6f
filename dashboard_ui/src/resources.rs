//! Bevy resources shared across systems.

use bevy::prelude::*;
use dashboard_core::{Dashboard, FontResource};

/// The dashboard driver, ticked and painted once per frame.
#[derive(Resource)]
pub struct DashboardState {
    pub dashboard: Dashboard,
}

impl DashboardState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }
}

/// Wall-clock text, refreshed every frame.
#[derive(Resource, Default)]
pub struct ClockText(pub String);

/// Font bytes waiting to be handed to egui.
#[derive(Resource)]
pub struct UiFont {
    pub font: FontResource,
    /// Set once egui has the font; egui contexts only exist after the first
    /// frames, so installation is retried until then
    pub installed: bool,
}

impl UiFont {
    pub fn new(font: FontResource) -> Self {
        Self {
            font,
            installed: false,
        }
    }
}
