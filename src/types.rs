//! Shared runtime state and system ordering.

use bevy::prelude::*;

/// Ordering of per-frame work.
///
/// Commands are applied before kinematics so a slider change takes effect
/// on the very next tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrrerySet {
    /// Keyboard and pointer handling that emits commands.
    Input,
    /// The single system that applies commands to shared state.
    Commands,
    /// Orbital and spin updates.
    Kinematics,
}

/// Whether the kinematics step runs this frame.
#[derive(Resource, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimationState {
    pub paused: bool,
}

impl AnimationState {
    /// Text for the pause button, describing what a click will do.
    pub fn pause_label(&self) -> &'static str {
        if self.paused {
            "Resume Animation"
        } else {
            "Pause Animation"
        }
    }
}

/// Run condition: kinematics only advance while unpaused.
pub fn animation_running(state: Res<AnimationState>) -> bool {
    !state.paused
}

/// Display-only UI state. Never affects kinematics.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Whether the speed slider panel is shown.
    pub panel_visible: bool,
    /// Dark background (default) or light background.
    pub dark_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            panel_visible: true,
            dark_mode: true,
        }
    }
}

impl UiState {
    pub fn panel_toggle_label(&self) -> &'static str {
        if self.panel_visible {
            "Hide Planet Controls"
        } else {
            "Show Planet Controls"
        }
    }

    pub fn theme_toggle_label(&self) -> &'static str {
        if self.dark_mode {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_label_reflects_state() {
        let mut state = AnimationState::default();
        assert_eq!(state.pause_label(), "Pause Animation");
        state.paused = true;
        assert_eq!(state.pause_label(), "Resume Animation");
    }

    #[test]
    fn test_ui_labels_reflect_state() {
        let mut ui = UiState::default();
        assert_eq!(ui.panel_toggle_label(), "Hide Planet Controls");
        assert_eq!(ui.theme_toggle_label(), "Light Mode");

        ui.panel_visible = false;
        ui.dark_mode = false;
        assert_eq!(ui.panel_toggle_label(), "Show Planet Controls");
        assert_eq!(ui.theme_toggle_label(), "Dark Mode");
    }
}
