use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_egui::EguiPlugin;
use dashboard_core::{Dashboard, DashboardConfig, FontResource};

use crate::{
    render::render_dashboard_system,
    resources::{ClockText, DashboardState, UiFont},
    systems::{refresh_clock_system, tick_dashboard_system},
    ui::install_font_system,
};

/// Background behind the gradient (visible for the first frame only).
const CLEAR_COLOR: Color = Color::srgb(15.0 / 255.0, 15.0 / 255.0, 25.0 / 255.0);

/// Open the dashboard window and run until it is closed.
pub fn run_dashboard_app(config: DashboardConfig, seed: u64, font: FontResource) {
    let primary_window = Window {
        title: config.window.title.clone(),
        resolution: (config.window.width, config.window.height).into(),
        resizable: false,
        // vsync doubles as the frame cap
        present_mode: PresentMode::AutoVsync,
        ..default()
    };
    let dashboard = Dashboard::new(config, seed);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(primary_window),
                    ..default()
                })
                // main() installs the tracing subscriber
                .disable::<LogPlugin>(),
        )
        .add_plugins(EguiPlugin)
        .insert_resource(DashboardState::new(dashboard))
        .insert_resource(ClockText::default())
        .insert_resource(UiFont::new(font))
        .insert_resource(ClearColor(CLEAR_COLOR))
        .add_systems(Startup, setup_camera)
        .add_systems(
            Update,
            (
                install_font_system,
                refresh_clock_system,
                tick_dashboard_system,
                render_dashboard_system,
            )
                .chain(),
        )
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d::default());
}
