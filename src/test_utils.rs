//! Test utilities for catalog and kinematics tests.

/// Fixtures for creating test catalogs.
pub mod fixtures {
    use crate::catalog::{BodyCatalog, CelestialBodySpec, SunSpec};

    /// A catalog with one planet and no asteroid belt anchors.
    pub fn single_planet_catalog() -> BodyCatalog {
        BodyCatalog::new(
            SunSpec::default(),
            vec![CelestialBodySpec::planet("Solo", 1.0, "textures/solo.jpg", 20.0, 0.02, 0.01)],
        )
        .expect("fixture catalog is valid")
    }
}
