//! Sun and planet spawning.
//!
//! Each planet gets an orbit group at the origin carrying its
//! [`PlanetState`]; the planet sphere (and ring, if any) are children offset
//! along +X by the orbital distance, so rotating the group revolves them.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::catalog::{BodyCatalog, BodyId, CelestialBodySpec};
use crate::kinematics::{PlanetSpin, PlanetState};

/// Marker for the sun entity.
#[derive(Component)]
pub struct Sun;

/// A pickable planet sphere.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PlanetMesh {
    pub body: BodyId,
    /// Sphere radius, used for ray hit-testing.
    pub radius: f32,
}

/// A planet's ring. Not pickable.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlanetRing {
    pub body: BodyId,
}

/// Sphere tessellation for planets and the sun.
const SPHERE_SECTORS: u32 = 32;
const SPHERE_STACKS: u32 = 32;

/// Local transforms of a planet's children inside its orbit group.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyLayout {
    pub planet: Transform,
    pub ring: Option<Transform>,
}

impl BodyLayout {
    pub fn for_spec(spec: &CelestialBodySpec) -> Self {
        let offset = Vec3::new(spec.distance, 0.0, 0.0);
        Self {
            planet: Transform::from_translation(offset),
            // Annulus meshes face +Z; a quarter turn about X lays them in
            // the orbital plane.
            ring: spec.ring.as_ref().map(|_| {
                Transform::from_translation(offset).with_rotation(Quat::from_rotation_x(FRAC_PI_2))
            }),
        }
    }
}

/// Plugin providing sun and planet spawning.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_sun, spawn_planets));
    }
}

/// Spawn the unlit, textured sun at the origin.
fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    catalog: Res<BodyCatalog>,
) {
    let sun = catalog.sun();

    let mesh = meshes.add(Sphere::new(sun.radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(asset_server.load(sun.texture.clone())),
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Sun,
        Name::new("Sun"),
    ));

    info!("Spawned sun (radius {})", sun.radius);
}

/// Spawn one orbit group per catalog planet.
fn spawn_planets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    catalog: Res<BodyCatalog>,
) {
    for (id, spec) in catalog.iter() {
        let layout = BodyLayout::for_spec(spec);

        // Textures load in the background; the white base colour shows
        // until they arrive.
        let planet_mesh = meshes.add(Sphere::new(spec.radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS));
        let planet_material = materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load(spec.texture.clone())),
            perceptual_roughness: 0.9,
            ..default()
        });

        let ring = spec.ring.as_ref().zip(layout.ring).map(|(ring, transform)| {
            let mesh = meshes.add(Annulus::new(ring.inner_radius, ring.outer_radius));
            let material = materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(ring.texture.clone())),
                alpha_mode: AlphaMode::Blend,
                double_sided: true,
                cull_mode: None,
                unlit: true,
                ..default()
            });
            (mesh, material, transform)
        });

        commands
            .spawn((
                Transform::IDENTITY,
                Visibility::default(),
                PlanetState::new(id),
                Name::new(format!("{} orbit", spec.name)),
            ))
            .with_children(|group| {
                group.spawn((
                    Mesh3d(planet_mesh),
                    MeshMaterial3d(planet_material),
                    layout.planet,
                    PlanetMesh {
                        body: id,
                        radius: spec.radius,
                    },
                    PlanetSpin { body: id },
                    Name::new(spec.name.clone()),
                ));

                if let Some((mesh, material, transform)) = ring {
                    group.spawn((
                        Mesh3d(mesh),
                        MeshMaterial3d(material),
                        transform,
                        PlanetRing { body: id },
                        Name::new(format!("{} ring", spec.name)),
                    ));
                }
            });
    }

    info!("Spawned {} planets", catalog.len());
}
