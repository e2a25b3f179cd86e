//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use orrery::catalog::{BodyCatalog, BodyId};
use orrery::commands::{CommandPlugin, OrreryCommand};
use orrery::config::OrreryConfig;
use orrery::kinematics::{KinematicsPlugin, PlanetSpin, PlanetState};
use orrery::render::asteroids::AsteroidBeltPlugin;
use orrery::render::background::BackgroundPlugin;
use orrery::render::bodies::CelestialBodyPlugin;

/// Entities standing in for one planet: its orbit group and its mesh.
pub struct TestPlanet {
    pub body: BodyId,
    pub group: Entity,
    pub mesh: Entity,
}

/// Headless app running commands and kinematics, no rendering.
pub fn headless_app(catalog: BodyCatalog) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(catalog)
        .add_plugins((CommandPlugin, KinematicsPlugin));
    app
}

/// Headless app running the real scene builders plus commands and
/// kinematics. Assets are registered but nothing is rendered.
pub fn scene_app(config: OrreryConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default(), TransformPlugin))
        .init_asset::<Mesh>()
        .init_asset::<Image>()
        .init_asset::<StandardMaterial>()
        .insert_resource(BodyCatalog::default())
        .insert_resource(config)
        .add_plugins((
            CommandPlugin,
            KinematicsPlugin,
            CelestialBodyPlugin,
            BackgroundPlugin,
            AsteroidBeltPlugin,
        ));
    app
}

/// Spawn the group/mesh pair the scene builder would create for `name`.
pub fn spawn_planet(app: &mut App, name: &str) -> TestPlanet {
    let body = app
        .world()
        .resource::<BodyCatalog>()
        .find(name)
        .unwrap_or_else(|| panic!("{name} missing from catalog"));

    let group = app
        .world_mut()
        .spawn((Transform::IDENTITY, PlanetState::new(body)))
        .id();
    let mesh = app
        .world_mut()
        .spawn((Transform::IDENTITY, PlanetSpin { body }))
        .id();

    TestPlanet { body, group, mesh }
}

pub fn send(app: &mut App, command: OrreryCommand) {
    app.world_mut()
        .resource_mut::<Messages<OrreryCommand>>()
        .write(command);
}

pub fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

pub fn orbital_angle(app: &App, planet: &TestPlanet) -> f32 {
    app.world()
        .get::<PlanetState>(planet.group)
        .expect("group has PlanetState")
        .orbital_angle
}

pub fn orbital_speed(app: &App, planet: &TestPlanet) -> f32 {
    app.world()
        .resource::<BodyCatalog>()
        .get(planet.body)
        .expect("body in catalog")
        .orbital_speed
}
