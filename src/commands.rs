//! Command messages and the single system that applies them.
//!
//! Every input surface (sliders, buttons, keyboard) emits an
//! [`OrreryCommand`]; only [`apply_orrery_commands`] mutates the catalog,
//! the animation state and the UI state.

use bevy::prelude::*;

use crate::catalog::{BodyCatalog, BodyId};
use crate::types::{AnimationState, OrrerySet, UiState};

/// A request to change shared state.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum OrreryCommand {
    /// Overwrite one planet's orbital speed (radians per tick).
    SetOrbitalSpeed { body: BodyId, value: f32 },
    /// Flip between paused and running.
    TogglePause,
    /// Show or hide the speed slider panel.
    ToggleControlPanel,
    /// Swap dark and light themes.
    ToggleDarkMode,
}

/// Plugin registering commands and the state they act on.
pub struct CommandPlugin;

impl Plugin for CommandPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<OrreryCommand>()
            .init_resource::<AnimationState>()
            .init_resource::<UiState>()
            .configure_sets(
                Update,
                (OrrerySet::Input, OrrerySet::Commands, OrrerySet::Kinematics).chain(),
            )
            .add_systems(Update, apply_orrery_commands.in_set(OrrerySet::Commands));
    }
}

/// Apply all pending commands in arrival order.
pub fn apply_orrery_commands(
    mut messages: MessageReader<OrreryCommand>,
    mut catalog: ResMut<BodyCatalog>,
    mut animation: ResMut<AnimationState>,
    mut ui_state: ResMut<UiState>,
) {
    for command in messages.read() {
        match *command {
            OrreryCommand::SetOrbitalSpeed { body, value } => {
                match catalog.set_orbital_speed(body, value) {
                    Ok(stored) => debug!("Orbital speed of body {} set to {stored}", body.index()),
                    Err(err) => warn!("Rejected speed change: {err}"),
                }
            }
            OrreryCommand::TogglePause => {
                animation.paused = !animation.paused;
                info!(
                    "Animation {}",
                    if animation.paused { "paused" } else { "resumed" }
                );
            }
            OrreryCommand::ToggleControlPanel => {
                ui_state.panel_visible = !ui_state.panel_visible;
                info!(
                    "Planet controls {}",
                    if ui_state.panel_visible { "shown" } else { "hidden" }
                );
            }
            OrreryCommand::ToggleDarkMode => {
                ui_state.dark_mode = !ui_state.dark_mode;
                info!(
                    "Switched to {} mode",
                    if ui_state.dark_mode { "dark" } else { "light" }
                );
            }
        }
    }
}
