use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::data::model::{PayloadRange, SiteSelection};

/// Command line configuration for the dashboard.
#[derive(Debug, Clone, Parser)]
#[command(name = "launch-dash", version, about = "SpaceX launch records dashboard")]
pub struct Config {
    /// Launch dataset to load at startup (.csv, .json or .parquet).
    #[arg(env = "LAUNCH_DASH_DATA")]
    pub data: Option<PathBuf>,

    /// Initial site selection; `ALL` selects every site.
    #[arg(long, default_value = SiteSelection::ALL_VALUE)]
    pub site: SiteSelection,

    /// Lower end of the payload slider (kg).
    #[arg(long, default_value_t = 0.0)]
    pub slider_min: f64,

    /// Upper end of the payload slider (kg).
    #[arg(long, default_value_t = 10_000.0)]
    pub slider_max: f64,

    /// Payload slider step (kg).
    #[arg(long, default_value_t = 1_000.0)]
    pub slider_step: f64,

    /// Initial window width.
    #[arg(long, default_value_t = 1200.0)]
    pub width: f32,

    /// Initial window height.
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,
}

impl Config {
    pub fn slider(&self) -> Result<SliderConfig> {
        SliderConfig::new(self.slider_min, self.slider_max, self.slider_step)
    }
}

/// Domain and step of the payload range slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
        }
    }
}

impl SliderConfig {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            bail!("slider bounds must be finite numbers");
        }
        if min >= max {
            bail!("slider min ({min}) must be below slider max ({max})");
        }
        if step <= 0.0 {
            bail!("slider step must be positive, got {step}");
        }
        Ok(Self { min, max, step })
    }

    /// Stretch the domain so it covers `bounds`, keeping the step.
    pub fn widened_to(&self, bounds: Option<PayloadRange>) -> SliderConfig {
        match bounds {
            Some(b) if !b.is_inverted() => SliderConfig {
                min: self.min.min(b.low),
                max: self.max.max(b.high),
                step: self.step,
            },
            _ => *self,
        }
    }

    /// Tick positions for the slider scale, `min` and `max` included.
    pub fn marks(&self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.min, self.max];
        }
        let span = self.max - self.min;
        (0..count)
            .map(|i| self.min + span * i as f64 / (count - 1) as f64)
            .collect()
    }
}
