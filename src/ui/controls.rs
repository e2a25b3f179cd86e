//! Planet speed sliders and the animation/display buttons.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::icons;
use crate::catalog::{BodyCatalog, MAX_ORBITAL_SPEED, MIN_ORBITAL_SPEED, ORBITAL_SPEED_STEP};
use crate::commands::OrreryCommand;
use crate::config::OrreryConfig;
use crate::types::{AnimationState, UiState};

/// Colors for the control surface.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 178);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
}

/// Slider panel: one orbital speed slider per planet.
///
/// A slider change is forwarded as a `SetOrbitalSpeed` command as-is; the
/// command handler validates it.
pub fn speed_panel_system(
    mut contexts: EguiContexts,
    catalog: Res<BodyCatalog>,
    ui_state: Res<UiState>,
    mut commands_out: MessageWriter<OrreryCommand>,
) {
    if !ui_state.panel_visible {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Planet Controls")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .collapsible(false)
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(10))
                .corner_radius(egui::CornerRadius::same(5)),
        )
        .show(ctx, |ui| {
            for (id, spec) in catalog.iter() {
                let mut speed = spec.orbital_speed;
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("{}:", spec.name)).color(colors::TEXT));
                    let slider = egui::Slider::new(&mut speed, MIN_ORBITAL_SPEED..=MAX_ORBITAL_SPEED)
                        .step_by(ORBITAL_SPEED_STEP as f64)
                        .fixed_decimals(4);
                    if ui.add(slider).changed() {
                        commands_out.write(OrreryCommand::SetOrbitalSpeed {
                            body: id,
                            value: speed,
                        });
                    }
                });
            }
        });
}

/// Buttons in the top-right corner: pause, and the display toggles the
/// configured UI variant offers.
pub fn control_buttons_system(
    mut contexts: EguiContexts,
    animation: Res<AnimationState>,
    ui_state: Res<UiState>,
    config: Res<OrreryConfig>,
    mut commands_out: MessageWriter<OrreryCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("control_buttons"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .show(ctx, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                let pause_icon = if animation.paused { icons::PLAY } else { icons::PAUSE };
                if ui
                    .button(format!("{pause_icon} {}", animation.pause_label()))
                    .on_hover_text("Space")
                    .clicked()
                {
                    commands_out.write(OrreryCommand::TogglePause);
                }

                if config.ui.show_panel_toggle {
                    let icon = if ui_state.panel_visible { icons::EYE_SLASH } else { icons::EYE };
                    if ui
                        .button(format!("{icon} {}", ui_state.panel_toggle_label()))
                        .clicked()
                    {
                        commands_out.write(OrreryCommand::ToggleControlPanel);
                    }
                }

                if config.ui.show_dark_mode_toggle {
                    let icon = if ui_state.dark_mode { icons::SUN } else { icons::MOON };
                    if ui
                        .button(format!("{icon} {}", ui_state.theme_toggle_label()))
                        .clicked()
                    {
                        commands_out.write(OrreryCommand::ToggleDarkMode);
                    }
                }
            });
        });
}
