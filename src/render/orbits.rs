//! Orbit path rendering using Bevy Gizmos.
//!
//! Each planet's circular orbit is sampled once at startup into a closed
//! polyline and redrawn every frame in a dim, theme-dependent colour.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::catalog::{BodyCatalog, BodyId};
use crate::config::OrreryConfig;
use crate::types::UiState;
use crate::ui::theme::Theme;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPaths>()
            .add_systems(Startup, build_orbit_paths)
            .add_systems(Update, draw_orbit_paths);
    }
}

/// Pre-sampled orbit polylines, one per planet.
#[derive(Resource, Default, Debug)]
pub struct OrbitPaths {
    pub paths: Vec<(BodyId, Vec<Vec3>)>,
}

/// Sample a circle of radius `distance` in the orbital plane.
///
/// Returns `segments + 1` points; the last repeats the first so the
/// polyline closes.
pub fn orbit_path_points(distance: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = (i % segments) as f32 / segments as f32 * TAU;
            Vec3::new(distance * angle.cos(), 0.0, distance * angle.sin())
        })
        .collect()
}

/// Sample every planet's orbit once.
pub fn build_orbit_paths(
    catalog: Res<BodyCatalog>,
    config: Res<OrreryConfig>,
    mut orbit_paths: ResMut<OrbitPaths>,
) {
    orbit_paths.paths = catalog
        .iter()
        .map(|(id, spec)| (id, orbit_path_points(spec.distance, config.orbit_samples)))
        .collect();

    info!("Sampled {} orbit paths", orbit_paths.paths.len());
}

fn draw_orbit_paths(mut gizmos: Gizmos, orbit_paths: Res<OrbitPaths>, ui_state: Res<UiState>) {
    let color = Theme::for_mode(ui_state.dark_mode).orbit;
    for (_, points) in &orbit_paths.paths {
        gizmos.linestrip(points.iter().copied(), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_degree_sampling_has_361_points() {
        let points = orbit_path_points(25.0, 360);
        assert_eq!(points.len(), 361);
        assert_eq!(points.first(), points.last());
    }

    #[test]
    fn test_points_lie_on_circle() {
        for p in orbit_path_points(45.0, 360) {
            assert_relative_eq!(Vec2::new(p.x, p.z).length(), 45.0, epsilon = 1e-3);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_first_point_on_positive_x() {
        let points = orbit_path_points(15.0, 360);
        assert_eq!(points[0], Vec3::new(15.0, 0.0, 0.0));
    }
}
