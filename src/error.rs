use thiserror::Error;

/// Latitudes closer than this to +/-90 degrees are treated as the pole.
pub const POLE_TOLERANCE_DEG: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// The ecliptic meets the horizon ambiguously at the poles.
    #[error("ascendant is undefined at latitude {latitude}° (pole)")]
    UndefinedAtPole { latitude: f64 },

    #[error("latitude {0}° is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0}° is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("UTC offset {0} h is outside [-12, 14]")]
    UtcOffsetOutOfRange(f64),

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),

    #[error("wheel size {0} must be positive")]
    InvalidWheelSize(f64),

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(#[from] ChartError),
}
