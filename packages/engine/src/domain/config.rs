//! Simulation settings
//!
//! Loaded from JSON by hosts (`SimConfig::from_json`) or built in code.
//! Missing fields fall back to the defaults below.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::elements::{Kind, FLUID_MAX, FLUID_MIN};
use crate::error::{EngineError, Result};

pub const DEFAULT_WIDTH: u32 = 100;
pub const DEFAULT_HEIGHT: u32 = 80;
pub const DEFAULT_FILL_RATIO: f64 = 0.45;
pub const DEFAULT_ITERATIONS: u32 = 15;
pub const DEFAULT_SEED: u64 = 12345;

/// Inclusive bounds for fluid amounts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FluidBounds {
    pub min: f32,
    pub max: f32,
}

impl FluidBounds {
    #[inline]
    pub fn contains(&self, amount: f32) -> bool {
        amount >= self.min && amount <= self.max
    }

    /// Pull an amount back inside the bounds (float drift).
    #[inline]
    pub fn clamp(&self, amount: f32) -> f32 {
        amount.clamp(self.min, self.max)
    }
}

impl Default for FluidBounds {
    fn default() -> Self {
        Self { min: FLUID_MIN, max: FLUID_MAX }
    }
}

/// Inclusive tick range a gas countdown is sampled from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeRange {
    pub min: u32,
    pub max: u32,
}

impl LifetimeRange {
    pub const DARK: LifetimeRange = LifetimeRange { min: 10, max: 20 };
    pub const LIGHT: LifetimeRange = LifetimeRange { min: 7, max: 10 };

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }

    #[inline]
    pub fn contains(&self, ticks: u32) -> bool {
        ticks >= self.min && ticks <= self.max
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    /// Probability of an interior cell starting as wall.
    pub fill_ratio: f64,
    /// Smoothing passes of the cave automaton.
    pub iterations: u32,
    pub seed: u64,
    pub fluid: FluidBounds,
    pub dark_gas_lifetime: LifetimeRange,
    pub light_gas_lifetime: LifetimeRange,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill_ratio: DEFAULT_FILL_RATIO,
            iterations: DEFAULT_ITERATIONS,
            seed: DEFAULT_SEED,
            fluid: FluidBounds::default(),
            dark_gas_lifetime: LifetimeRange::DARK,
            light_gas_lifetime: LifetimeRange::LIGHT,
        }
    }
}

impl SimConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions { width: self.width, height: self.height });
        }
        let FluidBounds { min, max } = self.fluid;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min < max) {
            return Err(EngineError::InvalidConfig(format!(
                "fluid bounds must satisfy 0 < min < max, got [{}, {}]",
                min, max
            )));
        }
        for (name, range) in [
            ("dark_gas_lifetime", self.dark_gas_lifetime),
            ("light_gas_lifetime", self.light_gas_lifetime),
        ] {
            if range.min == 0 || range.min > range.max {
                return Err(EngineError::InvalidConfig(format!(
                    "{} must satisfy 1 <= min <= max, got [{}, {}]",
                    name, range.min, range.max
                )));
            }
        }
        Ok(())
    }

    /// Countdown range for a gas kind, `None` for anything else.
    pub fn lifetime_range(&self, kind: Kind) -> Option<LifetimeRange> {
        match kind {
            Kind::GasDark => Some(self.dark_gas_lifetime),
            Kind::GasLight => Some(self.light_gas_lifetime),
            _ => None,
        }
    }
}
