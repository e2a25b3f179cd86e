//! Orrery - Solar System Visualization
//!
//! A desktop application showing the sun and planets on circular orbits,
//! with per-planet speed controls and hover tooltips.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::OrreryPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(OrreryPlugin)
        .run();
}
