//! Per-tick orbital and spin updates.
//!
//! Revolution is done by rotating each planet's orbit group about +Y rather
//! than recomputing Cartesian positions. The group rotation is assigned from
//! the accumulated angle every tick; the planet's own spin is accumulated
//! incrementally on its transform.

#[cfg(test)]
mod proptest_kinematics;

use bevy::prelude::*;

use crate::catalog::{BodyCatalog, BodyId};
use crate::types::{AnimationState, OrrerySet, animation_running};

/// Runtime orbit state, attached to a planet's orbit group.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct PlanetState {
    pub body: BodyId,
    /// Accumulated revolution in radians. Unbounded; wraps through the
    /// rotation it produces.
    pub orbital_angle: f32,
}

impl PlanetState {
    pub fn new(body: BodyId) -> Self {
        Self {
            body,
            orbital_angle: 0.0,
        }
    }

    /// Add one tick of revolution and return the new angle.
    pub fn advance(&mut self, orbital_speed: f32) -> f32 {
        self.orbital_angle += orbital_speed;
        self.orbital_angle
    }

    /// Rotation of the orbit group for the current angle.
    pub fn rotation(&self) -> Quat {
        orbit_rotation(self.orbital_angle)
    }
}

/// Marks a planet mesh whose own spin follows the catalog's rotation speed.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanetSpin {
    pub body: BodyId,
}

/// Rotation about the vertical axis by `angle` radians.
pub fn orbit_rotation(angle: f32) -> Quat {
    Quat::from_rotation_y(angle)
}

/// Plugin advancing orbits while the animation is running.
pub struct KinematicsPlugin;

impl Plugin for KinematicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationState>().add_systems(
            Update,
            (advance_orbits, spin_planets)
                .in_set(OrrerySet::Kinematics)
                .run_if(animation_running),
        );
    }
}

/// Revolve every orbit group by its planet's orbital speed.
pub fn advance_orbits(
    catalog: Res<BodyCatalog>,
    mut groups: Query<(&mut PlanetState, &mut Transform)>,
) {
    for (mut state, mut transform) in groups.iter_mut() {
        let Some(spec) = catalog.get(state.body) else {
            continue;
        };
        state.advance(spec.orbital_speed);
        transform.rotation = state.rotation();
    }
}

/// Spin every planet mesh about its own vertical axis.
pub fn spin_planets(catalog: Res<BodyCatalog>, mut planets: Query<(&PlanetSpin, &mut Transform)>) {
    for (spin, mut transform) in planets.iter_mut() {
        let Some(spec) = catalog.get(spin.body) else {
            continue;
        };
        transform.rotate_local_y(spec.rotation_speed);
    }
}
