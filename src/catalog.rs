//! Body catalog: static descriptive data for the sun and the planets.
//!
//! The catalog is fixed at startup. The only runtime write path is
//! [`BodyCatalog::set_orbital_speed`], driven by UI commands.

use bevy::prelude::*;

/// Lowest orbital speed a slider can select (radians per tick).
pub const MIN_ORBITAL_SPEED: f32 = 0.0;

/// Highest orbital speed a slider can select (radians per tick).
pub const MAX_ORBITAL_SPEED: f32 = 0.1;

/// Slider increment for orbital speed.
pub const ORBITAL_SPEED_STEP: f32 = 0.0001;

/// Errors raised when building or mutating the catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("unknown body id {0}")]
    UnknownBody(usize),

    #[error("orbital speed for {name} must be finite (got {value})")]
    NonFiniteSpeed { name: String, value: f32 },

    #[error("orbital speed of {name} must be finite and non-negative (got {value})")]
    InvalidOrbitalSpeed { name: String, value: f32 },

    #[error("radius of {name} must be positive (got {value})")]
    InvalidRadius { name: String, value: f32 },

    #[error("orbital distance of {name} must be positive (got {value})")]
    InvalidDistance { name: String, value: f32 },

    #[error("rotation speed of {name} must be finite and non-negative (got {value})")]
    InvalidRotationSpeed { name: String, value: f32 },

    #[error("ring of {name} needs inner radius {inner} < outer radius {outer}")]
    InvalidRing { name: String, inner: f32, outer: f32 },

    #[error("duplicate body name {0}")]
    DuplicateName(String),

    #[error("no body named {0} in catalog")]
    MissingBody(String),

    #[error("asteroid belt range is empty ({inner}..{outer})")]
    EmptyBelt { inner: f32, outer: f32 },
}

/// Index of a planet in the catalog's fixed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Flat ring around a planet, lying in its orbital plane.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSpec {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Asset path of the ring texture (alpha mapped).
    pub texture: String,
}

/// Descriptive data for one planet.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBodySpec {
    /// Unique display name, shown in tooltips and slider labels.
    pub name: String,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Asset path of the surface texture.
    pub texture: String,
    /// Orbital radius from the origin in scene units.
    pub distance: f32,
    /// Radians of revolution per tick. Mutable through commands only.
    pub orbital_speed: f32,
    /// Radians of self-spin per tick.
    pub rotation_speed: f32,
    pub ring: Option<RingSpec>,
}

impl CelestialBodySpec {
    pub fn planet(
        name: &str,
        radius: f32,
        texture: &str,
        distance: f32,
        orbital_speed: f32,
        rotation_speed: f32,
    ) -> Self {
        Self {
            name: name.to_string(),
            radius,
            texture: texture.to_string(),
            distance,
            orbital_speed,
            rotation_speed,
            ring: None,
        }
    }

    pub fn with_ring(mut self, inner_radius: f32, outer_radius: f32, texture: &str) -> Self {
        self.ring = Some(RingSpec {
            inner_radius,
            outer_radius,
            texture: texture.to_string(),
        });
        self
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if !(self.radius > 0.0) {
            return Err(CatalogError::InvalidRadius {
                name: self.name.clone(),
                value: self.radius,
            });
        }
        if !(self.distance > 0.0) {
            return Err(CatalogError::InvalidDistance {
                name: self.name.clone(),
                value: self.distance,
            });
        }
        if !self.orbital_speed.is_finite() || self.orbital_speed < 0.0 {
            return Err(CatalogError::InvalidOrbitalSpeed {
                name: self.name.clone(),
                value: self.orbital_speed,
            });
        }
        if !self.rotation_speed.is_finite() || self.rotation_speed < 0.0 {
            return Err(CatalogError::InvalidRotationSpeed {
                name: self.name.clone(),
                value: self.rotation_speed,
            });
        }
        if let Some(ring) = &self.ring
            && !(ring.inner_radius < ring.outer_radius)
        {
            return Err(CatalogError::InvalidRing {
                name: self.name.clone(),
                inner: ring.inner_radius,
                outer: ring.outer_radius,
            });
        }
        Ok(())
    }
}

/// The sun: emissive, fixed at the origin, never picked by hover.
#[derive(Clone, Debug, PartialEq)]
pub struct SunSpec {
    pub radius: f32,
    pub texture: String,
}

impl Default for SunSpec {
    fn default() -> Self {
        Self {
            radius: 10.0,
            texture: "textures/2k_sun.jpg".to_string(),
        }
    }
}

/// Ordered planet catalog plus the sun.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct BodyCatalog {
    sun: SunSpec,
    planets: Vec<CelestialBodySpec>,
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self {
            sun: SunSpec::default(),
            planets: standard_planets(),
        }
    }
}

impl BodyCatalog {
    /// Build a catalog, rejecting bodies that could not be rendered sensibly.
    pub fn new(sun: SunSpec, planets: Vec<CelestialBodySpec>) -> Result<Self, CatalogError> {
        if !(sun.radius > 0.0) {
            return Err(CatalogError::InvalidRadius {
                name: "Sun".to_string(),
                value: sun.radius,
            });
        }
        for (i, spec) in planets.iter().enumerate() {
            spec.validate()?;
            if planets[..i].iter().any(|other| other.name == spec.name) {
                return Err(CatalogError::DuplicateName(spec.name.clone()));
            }
        }
        Ok(Self { sun, planets })
    }

    pub fn sun(&self) -> &SunSpec {
        &self.sun
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBodySpec> {
        self.planets.get(id.0)
    }

    /// Planets in catalog order with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CelestialBodySpec)> {
        self.planets
            .iter()
            .enumerate()
            .map(|(i, spec)| (BodyId(i), spec))
    }

    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.planets
            .iter()
            .position(|spec| spec.name == name)
            .map(BodyId)
    }

    /// Overwrite a planet's orbital speed.
    ///
    /// Non-finite values are rejected; finite values are clamped to the
    /// slider range. Returns the stored speed.
    pub fn set_orbital_speed(&mut self, id: BodyId, value: f32) -> Result<f32, CatalogError> {
        let spec = self
            .planets
            .get_mut(id.0)
            .ok_or(CatalogError::UnknownBody(id.0))?;

        if !value.is_finite() {
            return Err(CatalogError::NonFiniteSpeed {
                name: spec.name.clone(),
                value,
            });
        }

        let clamped = value.clamp(MIN_ORBITAL_SPEED, MAX_ORBITAL_SPEED);
        spec.orbital_speed = clamped;
        Ok(clamped)
    }

    /// Radial range of the asteroid belt: between Mars and Jupiter, pulled in
    /// by `margin` on both sides.
    pub fn asteroid_belt_bounds(&self, margin: f32) -> Result<(f32, f32), CatalogError> {
        let distance_of = |name: &str| {
            self.find(name)
                .and_then(|id| self.get(id))
                .map(|spec| spec.distance)
                .ok_or_else(|| CatalogError::MissingBody(name.to_string()))
        };

        let inner = distance_of("Mars")? + margin;
        let outer = distance_of("Jupiter")? - margin;
        if !(inner <= outer) {
            return Err(CatalogError::EmptyBelt { inner, outer });
        }
        Ok((inner, outer))
    }
}

/// Mercury through Neptune, scaled for display rather than realism.
pub fn standard_planets() -> Vec<CelestialBodySpec> {
    vec![
        CelestialBodySpec::planet("Mercury", 0.3, "textures/2k_mercury.jpg", 15.0, 0.04, 0.01),
        CelestialBodySpec::planet("Venus", 0.8, "textures/2k_venus_surface.jpg", 20.0, 0.015, 0.01),
        CelestialBodySpec::planet("Earth", 0.9, "textures/2k_earth_daymap.jpg", 25.0, 0.01, 0.02),
        CelestialBodySpec::planet("Mars", 0.5, "textures/2k_mars.jpg", 30.0, 0.008, 0.025),
        CelestialBodySpec::planet("Jupiter", 4.0, "textures/2k_jupiter.jpg", 45.0, 0.004, 0.05),
        CelestialBodySpec::planet("Saturn", 3.5, "textures/2k_saturn.jpg", 60.0, 0.003, 0.04)
            .with_ring(4.0, 5.0, "textures/2k_saturn_ring_alpha.png"),
        CelestialBodySpec::planet("Uranus", 2.5, "textures/2k_uranus.jpg", 75.0, 0.002, 0.03),
        CelestialBodySpec::planet("Neptune", 2.4, "textures/2k_neptune.jpg", 90.0, 0.001, 0.035),
    ]
}
