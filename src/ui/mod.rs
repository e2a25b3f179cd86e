//! UI module providing the egui control surface.
//!
//! Every control emits `OrreryCommand`s; nothing here mutates shared state
//! directly.

mod controls;
pub mod icons;
pub mod theme;
mod tooltip;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::types::UiState;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .init_resource::<UiState>()
            .add_systems(Update, theme::apply_theme.run_if(resource_changed::<UiState>))
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    controls::speed_panel_system,
                    controls::control_buttons_system,
                    tooltip::tooltip_system,
                )
                    .after(icons::setup_fonts)
                    .run_if(icons::fonts_ready),
            );
    }
}
