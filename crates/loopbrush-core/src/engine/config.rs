use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::ConformationError;

pub const DEFAULT_LINEAR_DENSITY: f64 = 1.0;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelixConfig {
    pub radius: f64,
    pub step: f64,
    #[serde(default = "default_linear_density")]
    pub linear_density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushConfig {
    pub helix: HelixConfig,
    #[serde(default)]
    pub random_loop_orientations: bool,
    #[serde(default)]
    pub backbone_jitter: f64,
}

fn default_linear_density() -> f64 {
    DEFAULT_LINEAR_DENSITY
}

impl BrushConfig {
    pub(crate) fn validate(&self) -> Result<(), ConformationError> {
        require_positive("helix_radius", self.helix.radius)?;
        require_positive("helix_step", self.helix.step)?;
        require_positive("linear_density", self.helix.linear_density)?;
        if !self.backbone_jitter.is_finite() || self.backbone_jitter < 0.0 {
            return Err(ConformationError::InvalidParameter {
                name: "backbone_jitter",
                reason: format!(
                    "expected a finite non-negative value, got {}",
                    self.backbone_jitter
                ),
            });
        }
        Ok(())
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ConformationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConformationError::InvalidParameter {
            name,
            reason: format!("expected a positive finite value, got {value}"),
        })
    }
}

#[derive(Default)]
pub struct BrushConfigBuilder {
    helix_radius: Option<f64>,
    helix_step: Option<f64>,
    linear_density: Option<f64>,
    random_loop_orientations: Option<bool>,
    backbone_jitter: Option<f64>,
}

impl BrushConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn helix_radius(mut self, radius: f64) -> Self {
        self.helix_radius = Some(radius);
        self
    }
    pub fn helix_step(mut self, step: f64) -> Self {
        self.helix_step = Some(step);
        self
    }
    pub fn linear_density(mut self, density: f64) -> Self {
        self.linear_density = Some(density);
        self
    }
    pub fn random_loop_orientations(mut self, randomize: bool) -> Self {
        self.random_loop_orientations = Some(randomize);
        self
    }
    pub fn backbone_jitter(mut self, jitter: f64) -> Self {
        self.backbone_jitter = Some(jitter);
        self
    }

    pub fn build(self) -> Result<BrushConfig, ConfigError> {
        Ok(BrushConfig {
            helix: HelixConfig {
                radius: self
                    .helix_radius
                    .ok_or(ConfigError::MissingParameter("helix_radius"))?,
                step: self
                    .helix_step
                    .ok_or(ConfigError::MissingParameter("helix_step"))?,
                linear_density: self.linear_density.unwrap_or(DEFAULT_LINEAR_DENSITY),
            },
            random_loop_orientations: self.random_loop_orientations.unwrap_or(false),
            backbone_jitter: self.backbone_jitter.unwrap_or(0.0),
        })
    }
}
