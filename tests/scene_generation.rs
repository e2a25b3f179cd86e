//! Scene construction tests.
//!
//! Layout is deterministic for the fixed catalog; the starfield and the
//! asteroid belt are random, so only cardinality and bounds are checked.

use bevy::prelude::*;
use orrery::catalog::{BodyCatalog, CelestialBodySpec, SunSpec};
use orrery::config::OrreryConfig;
use orrery::render::BodyLayout;
use orrery::render::asteroids::{BeltShape, generate_asteroid_belt};
use orrery::render::background::generate_starfield;
use orrery::render::orbits::{OrbitPaths, build_orbit_paths, orbit_path_points};
use orrery::render::rng_streams;

fn belt_shape(catalog: &BodyCatalog, config: &OrreryConfig) -> BeltShape {
    let (inner_radius, outer_radius) = catalog
        .asteroid_belt_bounds(config.belt_margin)
        .expect("catalog has Mars and Jupiter");
    BeltShape {
        inner_radius,
        outer_radius,
        half_thickness: config.belt_half_thickness,
    }
}

#[test]
fn test_starfield_has_ten_thousand_stars_in_cube() {
    let config = OrreryConfig::default();
    let mut rng = config.rng(rng_streams::STARFIELD);
    let stars = generate_starfield(&mut rng, config.star_count, config.starfield_extent);

    assert_eq!(stars.len(), 10_000);
    assert!(stars.iter().all(|s| s.abs().max_element() <= 1000.0));
}

#[test]
fn test_asteroid_belt_between_mars_and_jupiter() {
    // Mars at 30, Jupiter at 45, margin 5
    let catalog = BodyCatalog::default();
    let config = OrreryConfig::default();
    let shape = belt_shape(&catalog, &config);
    assert_eq!((shape.inner_radius, shape.outer_radius), (35.0, 40.0));

    let mut rng = config.rng(rng_streams::ASTEROID_BELT);
    let belt = generate_asteroid_belt(&mut rng, config.asteroid_count, &shape);

    assert_eq!(belt.len(), 5_000);
    for p in &belt {
        let r = Vec2::new(p.x, p.z).length();
        assert!(r >= 35.0 - 1e-3 && r <= 40.0 + 1e-3, "radius {r} outside belt");
        assert!(p.y.abs() <= 2.5, "height {} outside belt", p.y);
    }
}

#[test]
fn test_belt_follows_custom_catalog() {
    let planets = vec![
        CelestialBodySpec::planet("Mars", 0.5, "mars.jpg", 50.0, 0.01, 0.01),
        CelestialBodySpec::planet("Jupiter", 4.0, "jupiter.jpg", 80.0, 0.01, 0.01),
    ];
    let catalog = BodyCatalog::new(SunSpec::default(), planets).unwrap();
    let config = OrreryConfig {
        seed: Some(11),
        ..Default::default()
    };
    let shape = belt_shape(&catalog, &config);

    let mut rng = config.rng(rng_streams::ASTEROID_BELT);
    for p in generate_asteroid_belt(&mut rng, 500, &shape) {
        let r = Vec2::new(p.x, p.z).length();
        assert!(r >= 55.0 - 1e-3 && r <= 75.0 + 1e-3);
    }
}

#[test]
fn test_seeded_scene_is_reproducible() {
    let config = OrreryConfig {
        seed: Some(2024),
        ..Default::default()
    };
    let a = generate_starfield(&mut config.rng(rng_streams::STARFIELD), 100, 2000.0);
    let b = generate_starfield(&mut config.rng(rng_streams::STARFIELD), 100, 2000.0);
    assert_eq!(a, b);
}

#[test]
fn test_layout_is_deterministic_for_catalog() {
    let catalog = BodyCatalog::default();
    let layouts: Vec<_> = catalog.iter().map(|(_, spec)| BodyLayout::for_spec(spec)).collect();

    assert_eq!(layouts.len(), 8);
    for ((_, spec), layout) in catalog.iter().zip(&layouts) {
        assert_eq!(layout.planet.translation, Vec3::new(spec.distance, 0.0, 0.0));
        assert_eq!(layout.ring.is_some(), spec.ring.is_some());
    }
}

#[test]
fn test_orbit_path_per_body() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(BodyCatalog::default())
        .insert_resource(OrreryConfig::default())
        .init_resource::<OrbitPaths>()
        .add_systems(Startup, build_orbit_paths);

    app.update();

    let paths = &app.world().resource::<OrbitPaths>().paths;
    assert_eq!(paths.len(), 8);
    for (_, points) in paths {
        assert_eq!(points.len(), 361);
        assert_eq!(points.first(), points.last());
    }
}

#[test]
fn test_orbit_path_radius() {
    for p in orbit_path_points(90.0, 360) {
        assert!((Vec2::new(p.x, p.z).length() - 90.0).abs() < 1e-3);
    }
}
