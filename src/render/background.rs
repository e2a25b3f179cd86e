//! Background rendering for the solar system visualization.
//!
//! Provides starfield and lighting systems.

use bevy::asset::RenderAssetUsages;
use bevy::light::GlobalAmbientLight;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use rand::Rng;

use crate::config::OrreryConfig;
use crate::render::rng_streams;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// Marker for the starfield point cloud.
#[derive(Component)]
pub struct Starfield {
    pub count: usize,
}

/// Scatter `count` points uniformly in an axis-aligned cube of side `extent`
/// centred at the origin.
///
/// A negative or non-finite `extent` collapses the cube to the origin.
pub fn generate_starfield<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: f32) -> Vec<Vec3> {
    let half = if extent.is_finite() { (extent * 0.5).max(0.0) } else { 0.0 };
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            )
        })
        .collect()
}

/// Spawn the starfield as a single point-list mesh.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<OrreryConfig>,
) {
    let mut rng = config.rng(rng_streams::STARFIELD);
    let stars = generate_starfield(&mut rng, config.star_count, config.starfield_extent);

    let positions: Vec<[f32; 3]> = stars.iter().map(|p| p.to_array()).collect();
    let mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions);

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Starfield { count: stars.len() },
        Name::new("Starfield"),
    ));

    info!("Spawned {} background stars", stars.len());
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    // Key light above and to the side of the orbital plane
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: 10_000_000.0,
            range: 500.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(50.0, 50.0, 50.0),
    ));

    // Flat ambient term so night sides are not pure black
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb_u8(0x33, 0x33, 0x33),
        brightness: 1000.0,
        ..default()
    });

    info!("Scene lighting initialized");
}
