//! Camera system for the solar system visualization.
//!
//! A perspective camera orbiting the origin: left-drag rotates, the scroll
//! wheel zooms. Motion is damped so the view eases to a stop.

use std::f32::consts::FRAC_PI_2;

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::types::OrrerySet;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;

/// Near and far clipping distances.
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Starting eye position.
pub const INITIAL_EYE: Vec3 = Vec3::new(0.0, 50.0, 100.0);

/// Closest allowed distance from the origin.
pub const MIN_DISTANCE: f32 = 20.0;

/// Furthest allowed distance from the origin.
pub const MAX_DISTANCE: f32 = 500.0;

/// Fraction of orbit/zoom velocity shed each frame.
pub const DAMPING_FACTOR: f32 = 0.05;

/// Radians of rotation per pixel of drag.
pub const ROTATE_SPEED: f32 = 0.005;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Keeps the camera off the poles, where `looking_at` degenerates.
const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Spherical camera state around the origin.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Angle about +Y, zero looking down -Z.
    pub yaw: f32,
    /// Elevation above the orbital plane.
    pub pitch: f32,
    pub distance: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    zoom_velocity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_eye(INITIAL_EYE)
    }
}

impl OrbitCamera {
    /// Camera state looking at the origin from `eye`.
    pub fn from_eye(eye: Vec3) -> Self {
        let distance = eye.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let horizontal = Vec2::new(eye.x, eye.z).length();
        Self {
            yaw: eye.x.atan2(eye.z),
            pitch: eye.y.atan2(horizontal).clamp(-MAX_PITCH, MAX_PITCH),
            distance,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            zoom_velocity: 0.0,
        }
    }

    /// Feed one frame of input: mouse drag in pixels, scroll in lines.
    pub fn push_input(&mut self, drag: Vec2, scroll: f32) {
        self.yaw_velocity -= drag.x * ROTATE_SPEED;
        self.pitch_velocity += drag.y * ROTATE_SPEED;
        self.zoom_velocity -= scroll * ZOOM_SPEED;
    }

    /// Apply the damped velocities for one frame.
    pub fn step(&mut self) {
        self.yaw += self.yaw_velocity * DAMPING_FACTOR;
        self.pitch = (self.pitch + self.pitch_velocity * DAMPING_FACTOR).clamp(-MAX_PITCH, MAX_PITCH);
        self.distance = (self.distance * (1.0 + self.zoom_velocity * DAMPING_FACTOR))
            .clamp(MIN_DISTANCE, MAX_DISTANCE);

        let keep = 1.0 - DAMPING_FACTOR;
        self.yaw_velocity *= keep;
        self.pitch_velocity *= keep;
        self.zoom_velocity *= keep;
    }

    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        Vec3::new(
            horizontal * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            horizontal * self.yaw.cos(),
        )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (orbit_camera_input.in_set(OrrerySet::Input), apply_orbit_camera).chain(),
            );
    }
}

/// Spawn the main camera with perspective projection.
fn setup_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        orbit.transform(),
        MainCamera,
    ));
}

/// Collect drag and scroll input for the orbit camera.
fn orbit_camera_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut orbit: ResMut<OrbitCamera>,
    mut contexts: EguiContexts,
) {
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    let drag = if mouse_buttons.pressed(MouseButton::Left) {
        mouse_motion.delta
    } else {
        Vec2::ZERO
    };

    if drag != Vec2::ZERO || mouse_scroll.delta.y != 0.0 {
        orbit.push_input(drag, mouse_scroll.delta.y);
    }
}

/// Ease the camera toward rest and write its transform.
fn apply_orbit_camera(
    mut orbit: ResMut<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    orbit.step();

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = orbit.transform();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_eye_round_trips() {
        let eye = OrbitCamera::default().eye();
        assert_relative_eq!(eye.x, INITIAL_EYE.x, epsilon = 1e-3);
        assert_relative_eq!(eye.y, INITIAL_EYE.y, epsilon = 1e-3);
        assert_relative_eq!(eye.z, INITIAL_EYE.z, epsilon = 1e-3);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..500 {
            orbit.push_input(Vec2::ZERO, 10.0);
            orbit.step();
        }
        assert_eq!(orbit.distance, MIN_DISTANCE);

        for _ in 0..500 {
            orbit.push_input(Vec2::ZERO, -10.0);
            orbit.step();
        }
        assert_eq!(orbit.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_motion_decays_without_input() {
        let mut orbit = OrbitCamera::default();
        orbit.push_input(Vec2::new(100.0, 0.0), 0.0);
        orbit.step();
        let after_first = orbit.yaw;

        for _ in 0..1000 {
            orbit.step();
        }
        let settled = orbit.yaw;
        orbit.step();
        assert!(after_first != 0.0);
        assert_relative_eq!(orbit.yaw, settled, epsilon = 1e-6);
    }

    #[test]
    fn test_pitch_never_reaches_pole() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..200 {
            orbit.push_input(Vec2::new(0.0, 1000.0), 0.0);
            orbit.step();
        }
        assert!(orbit.pitch < FRAC_PI_2);
        assert!(orbit.eye().is_finite());
    }
}
