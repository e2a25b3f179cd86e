//! Asteroid belt between the orbits of Mars and Jupiter.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::catalog::BodyCatalog;
use crate::config::OrreryConfig;
use crate::render::rng_streams;

/// Plugin spawning the asteroid belt.
pub struct AsteroidBeltPlugin;

impl Plugin for AsteroidBeltPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_asteroid_belt);
    }
}

/// Marker for belt asteroids. Purely decorative: not pickable, not animated.
#[derive(Component)]
pub struct BeltAsteroid;

/// Region the belt is sampled from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeltShape {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Maximum distance above or below the orbital plane.
    pub half_thickness: f32,
}

/// Sample `count` asteroid positions: uniform angle, uniform radial
/// distance and uniform height within `shape`.
///
/// A negative or non-finite thickness flattens the belt into the orbital
/// plane; reversed radii are swapped.
pub fn generate_asteroid_belt<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    shape: &BeltShape,
) -> Vec<Vec3> {
    let inner = shape.inner_radius.min(shape.outer_radius);
    let outer = shape.inner_radius.max(shape.outer_radius);
    let half_thickness = if shape.half_thickness.is_finite() {
        shape.half_thickness.max(0.0)
    } else {
        0.0
    };

    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU);
            let distance = rng.gen_range(inner..=outer);
            let height = rng.gen_range(-half_thickness..=half_thickness);
            Vec3::new(distance * angle.cos(), height, distance * angle.sin())
        })
        .collect()
}

fn spawn_asteroid_belt(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalog: Res<BodyCatalog>,
    config: Res<OrreryConfig>,
) {
    let (inner_radius, outer_radius) = match catalog.asteroid_belt_bounds(config.belt_margin) {
        Ok(bounds) => bounds,
        Err(err) => {
            warn!("Skipping asteroid belt: {err}");
            return;
        }
    };
    let shape = BeltShape {
        inner_radius,
        outer_radius,
        half_thickness: config.belt_half_thickness,
    };

    let mut rng = config.rng(rng_streams::ASTEROID_BELT);
    let positions = generate_asteroid_belt(&mut rng, config.asteroid_count, &shape);

    // One shared mesh and material for the whole belt
    let mesh = meshes.add(Sphere::new(config.asteroid_radius).mesh().uv(8, 8));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x88, 0x88, 0x88),
        ..default()
    });

    for position in &positions {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(*position),
            BeltAsteroid,
        ));
    }

    info!(
        "Spawned {} asteroids between r={} and r={}",
        positions.len(),
        inner_radius,
        outer_radius
    );
}
