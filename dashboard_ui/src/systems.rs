//! Per-frame update systems.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use dashboard_core::{clock::local_timestamp, Point};

use crate::resources::{ClockText, DashboardState};

pub fn refresh_clock_system(mut clock: ResMut<ClockText>) {
    clock.0 = local_timestamp();
}

/// Feed frame time and cursor into the dashboard.
/// Window cursor coordinates are already top-left based, like the core's.
pub fn tick_dashboard_system(
    time: Res<Time>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut state: ResMut<DashboardState>,
) {
    let pointer = window_query
        .get_single()
        .ok()
        .and_then(Window::cursor_position)
        .map(|p| Point::new(p.x, p.y));

    state.dashboard.tick(time.delta_secs(), pointer);

    let stats = state.dashboard.stats();
    if stats.frames % 600 == 0 {
        tracing::debug!(
            frames = stats.frames,
            respawned = stats.particles_respawned,
            log_appends = stats.log_appends,
            "Dashboard heartbeat"
        );
    }
}
