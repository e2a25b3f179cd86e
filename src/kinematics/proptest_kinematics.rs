//! Property-based tests for orbit accumulation using proptest.

use bevy::prelude::*;
use proptest::prelude::*;

use super::{PlanetState, orbit_rotation};
use crate::catalog::{BodyId, MAX_ORBITAL_SPEED};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// N ticks at constant speed s leave the angle at N*s.
    #[test]
    fn prop_angle_is_ticks_times_speed(
        speed in 0.0f32..=MAX_ORBITAL_SPEED,
        ticks in 0usize..2000,
    ) {
        let mut state = PlanetState::new(BodyId(0));
        for _ in 0..ticks {
            state.advance(speed);
        }

        let expected = ticks as f32 * speed;
        // f32 accumulation error grows with the tick count
        let tolerance = 1e-5 + expected * 5e-4;
        prop_assert!(
            (state.orbital_angle - expected).abs() <= tolerance,
            "angle {} vs expected {} after {} ticks at {}",
            state.orbital_angle, expected, ticks, speed
        );
    }

    /// The angle never decreases for non-negative speeds.
    #[test]
    fn prop_angle_is_monotonic(speeds in proptest::collection::vec(0.0f32..=MAX_ORBITAL_SPEED, 1..200)) {
        let mut state = PlanetState::new(BodyId(0));
        let mut previous = state.orbital_angle;
        for speed in speeds {
            let angle = state.advance(speed);
            prop_assert!(angle >= previous);
            previous = angle;
        }
    }

    /// The orbit group keeps the planet on its circle at every angle.
    #[test]
    fn prop_rotation_preserves_orbital_radius(
        angle in -100.0f32..100.0,
        distance in 1.0f32..100.0,
    ) {
        let p = orbit_rotation(angle) * Vec3::new(distance, 0.0, 0.0);
        prop_assert!((p.length() - distance).abs() < distance * 1e-4);
        prop_assert!(p.y.abs() < 1e-3);
    }
}
