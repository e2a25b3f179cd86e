//! Keyboard shortcuts and window resize handling.

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::camera::MainCamera;
use crate::commands::OrreryCommand;
use crate::types::OrrerySet;

/// Plugin providing keyboard input and resize handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (keyboard_shortcuts, handle_window_resized).in_set(OrrerySet::Input),
        );
    }
}

/// Width over height, falling back to square for a collapsed window.
pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    if width > 0.0 && height > 0.0 {
        width / height
    } else {
        1.0
    }
}

/// Space toggles the animation, like the pause button.
fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut commands_out: MessageWriter<OrreryCommand>) {
    if keys.just_pressed(KeyCode::Space) {
        commands_out.write(OrreryCommand::TogglePause);
    }
}

/// Keep the camera's aspect ratio in step with the window on every resize.
///
/// Bevy's camera update also tracks the viewport; this applies the same
/// ratio in the input stage so the projection is current for picking in
/// the frame the resize arrives.
fn handle_window_resized(
    mut resized: MessageReader<WindowResized>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    let Some(event) = resized.read().last() else {
        return;
    };

    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };

    if let Projection::Perspective(ref mut perspective) = *projection {
        perspective.aspect_ratio = aspect_ratio(event.width, event.height);
        debug!(
            "Viewport resized to {}x{} (aspect {:.3})",
            event.width, event.height, perspective.aspect_ratio
        );
    }
}
