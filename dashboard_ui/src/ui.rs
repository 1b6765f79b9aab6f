//! egui context setup.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::resources::UiFont;

/// Make the loaded font the first choice for every egui text style.
pub fn install_font_system(mut contexts: EguiContexts, mut ui_font: ResMut<UiFont>) {
    if ui_font.installed {
        return;
    }
    let ctx = match contexts.try_ctx_mut() {
        Some(c) => c,
        None => return,
    };

    let family = ui_font.font.name();
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        family.clone(),
        egui::FontData::from_owned(ui_font.font.bytes.clone()),
    );
    for slot in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(slot).or_default().insert(0, family.clone());
    }
    ctx.set_fonts(fonts);

    ui_font.installed = true;
    tracing::info!(%family, path = %ui_font.font.path.display(), "Dashboard font installed");
}
