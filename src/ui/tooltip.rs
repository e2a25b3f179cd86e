//! Hover tooltip drawing.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::theme::Theme;
use crate::render::Tooltip;
use crate::types::UiState;

/// Draw the hovered body's name next to the cursor.
pub fn tooltip_system(mut contexts: EguiContexts, tooltip: Res<Tooltip>, ui_state: Res<UiState>) {
    if !tooltip.visible {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let theme = Theme::for_mode(ui_state.dark_mode);

    egui::Area::new(egui::Id::new("body_tooltip"))
        .fixed_pos(egui::pos2(tooltip.position.x, tooltip.position.y))
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme.tooltip_fill)
                .inner_margin(egui::Margin::symmetric(8, 4))
                .corner_radius(egui::CornerRadius::same(4))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(tooltip.text.as_str())
                            .color(theme.tooltip_text)
                            .size(12.0),
                    );
                });
        });
}
