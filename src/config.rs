//! Scene configuration.
//!
//! Defaults reproduce the standard scene. `ORRERY_SEED` pins the random
//! starfield and asteroid belt, `ORRERY_UI` picks which display toggles exist.

use std::str::FromStr;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Environment variable holding a `u64` seed for scene randomness.
pub const SEED_ENV: &str = "ORRERY_SEED";

/// Environment variable selecting the UI variant (`panel`, `dark-mode`, `both`).
pub const UI_ENV: &str = "ORRERY_UI";

/// Errors from parsing configuration overrides.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid seed {0:?} (expected an unsigned integer)")]
    InvalidSeed(String),

    #[error("unknown UI variant {0:?} (expected panel, dark-mode or both)")]
    UnknownUiVariant(String),
}

/// Which display toggles the control surface offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiVariant {
    /// Button hiding/showing the speed slider panel.
    pub show_panel_toggle: bool,
    /// Button swapping the dark/light theme.
    pub show_dark_mode_toggle: bool,
}

impl Default for UiVariant {
    fn default() -> Self {
        Self {
            show_panel_toggle: true,
            show_dark_mode_toggle: true,
        }
    }
}

impl FromStr for UiVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "panel" => Ok(Self {
                show_panel_toggle: true,
                show_dark_mode_toggle: false,
            }),
            "dark-mode" | "dark" => Ok(Self {
                show_panel_toggle: false,
                show_dark_mode_toggle: true,
            }),
            "both" => Ok(Self::default()),
            _ => Err(ConfigError::UnknownUiVariant(s.to_string())),
        }
    }
}

/// Scene construction parameters.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OrreryConfig {
    /// Number of background stars.
    pub star_count: usize,
    /// Side length of the cube the stars are scattered in.
    pub starfield_extent: f32,
    /// Number of asteroids in the belt.
    pub asteroid_count: usize,
    /// Gap kept between the belt and the Mars/Jupiter orbits.
    pub belt_margin: f32,
    /// Maximum vertical offset of an asteroid from the orbital plane.
    pub belt_half_thickness: f32,
    pub asteroid_radius: f32,
    /// Segments per orbit path (one point per segment plus the closing point).
    pub orbit_samples: u32,
    /// Fixed seed for starfield and belt; `None` draws from entropy.
    pub seed: Option<u64>,
    pub ui: UiVariant,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            star_count: 10_000,
            starfield_extent: 2000.0,
            asteroid_count: 5_000,
            belt_margin: 5.0,
            belt_half_thickness: 2.5,
            asteroid_radius: 0.1,
            orbit_samples: 360,
            seed: None,
            ui: UiVariant::default(),
        }
    }
}

impl OrreryConfig {
    /// Defaults with environment overrides applied.
    ///
    /// Invalid overrides are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(SEED_ENV) {
            match parse_seed(&raw) {
                Ok(seed) => config.seed = Some(seed),
                Err(err) => warn!("Ignoring {SEED_ENV}: {err}"),
            }
        }

        if let Ok(raw) = std::env::var(UI_ENV) {
            match raw.parse::<UiVariant>() {
                Ok(ui) => config.ui = ui,
                Err(err) => warn!("Ignoring {UI_ENV}: {err}"),
            }
        }

        config
    }

    /// RNG for one randomized scene element.
    ///
    /// With a fixed seed each `stream` gets its own reproducible sequence so
    /// the starfield and the belt do not mirror each other.
    pub fn rng(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_entropy(),
        }
    }
}

pub fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidSeed(raw.to_string()))
}
