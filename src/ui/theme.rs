//! Dark and light colour themes.

use bevy::prelude::*;
use bevy_egui::egui::Color32;

use crate::types::UiState;

/// Colours that change with the dark/light toggle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub orbit: Color,
    pub tooltip_fill: Color32,
    pub tooltip_text: Color32,
}

impl Theme {
    pub const DARK: Theme = Theme {
        background: Color::BLACK,
        orbit: Color::srgb(0.2, 0.2, 0.2),
        tooltip_fill: Color32::from_rgba_premultiplied(0, 0, 0, 204),
        tooltip_text: Color32::WHITE,
    };

    pub const LIGHT: Theme = Theme {
        background: Color::srgb(0.94, 0.94, 0.94),
        orbit: Color::srgb(0.6, 0.6, 0.6),
        tooltip_fill: Color32::from_rgba_premultiplied(230, 230, 230, 230),
        tooltip_text: Color32::BLACK,
    };

    pub fn for_mode(dark_mode: bool) -> Theme {
        if dark_mode { Self::DARK } else { Self::LIGHT }
    }
}

/// Repaint the background whenever the theme changes.
pub fn apply_theme(ui_state: Res<UiState>, mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = Theme::for_mode(ui_state.dark_mode).background;
}
