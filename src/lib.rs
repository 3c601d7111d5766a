pub mod angles;
pub mod chart;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod geometry;
pub mod input;
pub mod julian;
pub mod types;
pub mod wheel;
pub mod zodiac;

pub use angles::{angular_difference, deg_to_rad, normalize_angle, rad_to_deg};

pub use chart::{chart_at, compute_chart, compute_natal_chart};

pub use config::ChartConfig;

pub use ephemeris::{
    earth_eccentricity, greenwich_mean_sidereal_time, julian_centuries, local_sidereal_time,
    obliquity_ecliptic, sun_apparent_longitude,
};

pub use error::{ChartError, ConfigError, POLE_TOLERANCE_DEG};

pub use geometry::{
    ascendant_from_sidereal, ascendant_longitude, equal_house_cusps, house_of,
    midheaven_from_sidereal, midheaven_longitude,
};

pub use input::{parse_date, parse_time, BirthData};

pub use julian::{julian_day, J2000};

pub use types::{ChartResult, GeoLocation, Instant, ZodiacPosition, HOUSE_COUNT};

pub use wheel::{angle_from_longitude, render_wheel_svg, WheelStyle};

pub use zodiac::{format_degree_minute, zodiac_sign, ZodiacSign};
