use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ChartError, ConfigError};
use crate::input::{validate_location, validate_utc_offset};
use crate::types::GeoLocation;
use crate::wheel::WheelStyle;

/// Defaults applied when a birth-data field is not given explicitly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub utc_offset_hours: f64,
    pub location: GeoLocation,
    pub wheel: WheelStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: 0.0,
            location: GeoLocation::default(),
            wheel: WheelStyle::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ChartConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        validate_utc_offset(self.utc_offset_hours)?;
        validate_location(self.location.latitude, self.location.longitude)?;
        if !(self.wheel.size.is_finite() && self.wheel.size > 0.0) {
            return Err(ChartError::InvalidWheelSize(self.wheel.size));
        }
        Ok(())
    }
}
