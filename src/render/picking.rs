//! Hover picking for planet tooltips.
//!
//! On cursor movement the cursor is converted to normalized device
//! coordinates, a ray is cast from the camera through it, and the nearest
//! planet sphere hit (if any) drives the tooltip. Only planet spheres are
//! tested; the sun, rings, stars, asteroids and orbit lines are ignored.

use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow};
use bevy_egui::EguiContexts;

use crate::camera::MainCamera;
use crate::catalog::{BodyCatalog, BodyId};
use crate::render::bodies::PlanetMesh;
use crate::types::OrrerySet;

/// Screen-space offset of the tooltip from the cursor, in logical pixels.
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

/// Plugin providing hover picking.
pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Tooltip>()
            .add_systems(Update, update_hover_tooltip.in_set(OrrerySet::Input));
    }
}

/// Tooltip content and placement, drawn by the UI layer.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    /// Top-left corner in logical window pixels.
    pub position: Vec2,
}

impl Tooltip {
    /// Show `text` next to the cursor.
    pub fn show(&mut self, text: &str, cursor: Vec2) {
        self.visible = true;
        self.text.clear();
        self.text.push_str(text);
        self.position = cursor + TOOLTIP_OFFSET;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Convert a cursor position (origin top-left, y down) to normalized device
/// coordinates (origin centre, y up, both axes in [-1, 1]).
pub fn ndc_from_cursor(cursor: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        cursor.x / window_size.x * 2.0 - 1.0,
        -(cursor.y / window_size.y) * 2.0 + 1.0,
    )
}

/// Distance along a ray to the first intersection with a sphere.
///
/// `direction` must be normalized. Returns `None` for a miss or a sphere
/// entirely behind the origin; an origin inside the sphere reports the exit
/// point.
pub fn ray_sphere_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let t_closest = to_center.dot(direction);
    let closest_sq = to_center.length_squared() - t_closest * t_closest;
    let radius_sq = radius * radius;

    if closest_sq > radius_sq {
        return None;
    }

    let half_chord = (radius_sq - closest_sq).sqrt();
    let entry = t_closest - half_chord;
    let exit = t_closest + half_chord;

    if entry >= 0.0 {
        Some(entry)
    } else if exit >= 0.0 {
        Some(exit)
    } else {
        None
    }
}

/// Nearest sphere hit along a ray among `candidates` of `(key, center, radius)`.
pub fn pick_nearest<K>(
    origin: Vec3,
    direction: Vec3,
    candidates: impl IntoIterator<Item = (K, Vec3, f32)>,
) -> Option<(K, f32)> {
    let mut closest: Option<(K, f32)> = None;

    for (key, center, radius) in candidates {
        let Some(distance) = ray_sphere_distance(origin, direction, center, radius) else {
            continue;
        };
        if closest.as_ref().is_none_or(|(_, d)| distance < *d) {
            closest = Some((key, distance));
        }
    }

    closest
}

/// Build a world-space ray through a point given in normalized device
/// coordinates.
pub fn ray_from_ndc(clip_from_view: Mat4, camera_transform: &GlobalTransform, ndc: Vec2) -> Option<Ray3d> {
    let world_from_ndc = camera_transform.to_matrix() * clip_from_view.inverse();
    // Reverse-Z: the near plane sits at depth 1
    let near = world_from_ndc.project_point3(ndc.extend(1.0));
    let far = world_from_ndc.project_point3(ndc.extend(f32::EPSILON));
    if !near.is_finite() || !far.is_finite() {
        return None;
    }
    let direction = Dir3::new(far - near).ok()?;
    Some(Ray3d::new(near, direction))
}

/// Planet under `cursor`, if any, given the camera's projection and pose.
pub fn hover_planet<'a>(
    clip_from_view: Mat4,
    camera_transform: &GlobalTransform,
    window_size: Vec2,
    cursor: Vec2,
    planets: impl IntoIterator<Item = (&'a PlanetMesh, &'a GlobalTransform)>,
) -> Option<BodyId> {
    let ndc = ndc_from_cursor(cursor, window_size);
    let ray = ray_from_ndc(clip_from_view, camera_transform, ndc)?;

    pick_nearest(
        ray.origin,
        *ray.direction,
        planets.into_iter().map(|(planet, transform)| {
            // The mesh radius is scaled by any transform scale
            let scale = transform.compute_transform().scale.max_element();
            (planet.body, transform.translation(), planet.radius * scale)
        }),
    )
    .map(|(body, _)| body)
}

/// Update the tooltip from the latest cursor movement.
fn update_hover_tooltip(
    mut cursor_moved: MessageReader<CursorMoved>,
    mut cursor_left: MessageReader<CursorLeft>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    planets: Query<(&PlanetMesh, &GlobalTransform)>,
    catalog: Res<BodyCatalog>,
    mut tooltip: ResMut<Tooltip>,
    mut contexts: EguiContexts,
) {
    if cursor_left.read().last().is_some() {
        tooltip.hide();
    }

    let Some(cursor) = cursor_moved.read().last().map(|moved| moved.position) else {
        return;
    };

    // Controls take precedence over the scene
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        tooltip.hide();
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let hit = hover_planet(
        camera.clip_from_view(),
        camera_transform,
        Vec2::new(window.width(), window.height()),
        cursor,
        planets.iter(),
    );

    match hit.and_then(|body| catalog.get(body)) {
        Some(spec) => tooltip.show(&spec.name, cursor),
        None => tooltip.hide(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ndc_corners_and_centre() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(ndc_from_cursor(Vec2::new(0.0, 0.0), size), Vec2::new(-1.0, 1.0));
        assert_eq!(ndc_from_cursor(Vec2::new(800.0, 600.0), size), Vec2::new(1.0, -1.0));
        assert_eq!(ndc_from_cursor(Vec2::new(400.0, 300.0), size), Vec2::ZERO);
    }

    #[test]
    fn test_ray_hits_sphere_front() {
        let d = ray_sphere_distance(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 10.0), 2.0);
        assert_relative_eq!(d.unwrap(), 8.0, epsilon = 1e-5);
    }

    #[test]
    fn test_ray_misses_sphere() {
        let d = ray_sphere_distance(Vec3::ZERO, Vec3::Z, Vec3::new(5.0, 0.0, 10.0), 2.0);
        assert!(d.is_none());
    }

    #[test]
    fn test_sphere_behind_ray_is_ignored() {
        let d = ray_sphere_distance(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -10.0), 2.0);
        assert!(d.is_none());
    }

    #[test]
    fn test_centre_ray_looks_down_view_axis() {
        let clip_from_view = Mat4::perspective_infinite_reverse_rh(75f32.to_radians(), 1.5, 0.1);
        let camera = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, 10.0));

        let ray = ray_from_ndc(clip_from_view, &camera, Vec2::ZERO).unwrap();
        assert_relative_eq!(ray.origin.z, 9.9, epsilon = 1e-4);
        assert_relative_eq!(ray.direction.z, -1.0, epsilon = 1e-5);

        // Upper-right corner tilts the ray up and right
        let corner = ray_from_ndc(clip_from_view, &camera, Vec2::ONE).unwrap();
        assert!(corner.direction.x > 0.0 && corner.direction.y > 0.0);
    }

    #[test]
    fn test_tooltip_show_offsets_and_hide() {
        let mut tooltip = Tooltip::default();
        tooltip.show("Mars", Vec2::new(100.0, 50.0));
        assert!(tooltip.visible);
        assert_eq!(tooltip.text, "Mars");
        assert_eq!(tooltip.position, Vec2::new(110.0, 60.0));

        tooltip.hide();
        assert!(!tooltip.visible);
    }
}
