//! Orrery - Solar System Visualization
//!
//! A library crate providing the scene, kinematics and interaction
//! components, for the desktop app and for integration tests.

pub mod camera;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod input;
pub mod kinematics;
pub mod render;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

use bevy::prelude::*;

use camera::CameraPlugin;
use catalog::BodyCatalog;
use commands::CommandPlugin;
use config::OrreryConfig;
use input::InputPlugin;
use kinematics::KinematicsPlugin;
use render::RenderPlugin;
use ui::UiPlugin;

/// Everything the visualization needs on top of `DefaultPlugins` and
/// `EguiPlugin`.
///
/// Resources inserted before this plugin (catalog, config) are kept;
/// otherwise the standard catalog and the environment config are used.
pub struct OrreryPlugin;

impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<OrreryConfig>() {
            app.insert_resource(OrreryConfig::from_env());
        }

        app.init_resource::<BodyCatalog>().add_plugins((
            CommandPlugin,
            KinematicsPlugin,
            CameraPlugin,
            InputPlugin,
            RenderPlugin,
            UiPlugin,
        ));
    }
}
