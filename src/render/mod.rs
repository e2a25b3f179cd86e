//! Scene construction for the solar system visualization.
//!
//! This module spawns the sun, the planets and their orbit groups, and the
//! decorative elements: starfield, orbit paths, asteroid belt and lighting.
//! It also owns pointer picking for hover tooltips.

pub mod asteroids;
pub mod background;
pub mod bodies;
pub mod orbits;
pub mod picking;

use bevy::prelude::*;

use self::asteroids::AsteroidBeltPlugin;
use self::background::BackgroundPlugin;
use self::bodies::CelestialBodyPlugin;
use self::orbits::OrbitPathPlugin;
use self::picking::PickingPlugin;

// Re-export for use in other modules
pub use self::bodies::{BodyLayout, PlanetMesh, PlanetRing, Sun};
pub use self::picking::Tooltip;

/// Plugin aggregating all scene construction and picking.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CelestialBodyPlugin,
            BackgroundPlugin,
            OrbitPathPlugin,
            AsteroidBeltPlugin,
            PickingPlugin,
        ));
    }
}

/// Random streams for the scene's randomized elements.
pub mod rng_streams {
    pub const STARFIELD: u64 = 0;
    pub const ASTEROID_BELT: u64 = 1;
}
