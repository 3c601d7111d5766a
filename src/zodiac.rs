use std::fmt;

use serde::Serialize;

use crate::angles::normalize_angle;
use crate::types::ZodiacPosition;

pub const DEGREES_PER_SIGN: f64 = 30.0;
const ARCMIN_PER_SIGN: u32 = 30 * 60;

/// The twelve tropical signs, 30 degrees each, starting at 0° Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Aries => '\u{2648}',
            Self::Taurus => '\u{2649}',
            Self::Gemini => '\u{264A}',
            Self::Cancer => '\u{264B}',
            Self::Leo => '\u{264C}',
            Self::Virgo => '\u{264D}',
            Self::Libra => '\u{264E}',
            Self::Scorpio => '\u{264F}',
            Self::Sagittarius => '\u{2650}',
            Self::Capricorn => '\u{2651}',
            Self::Aquarius => '\u{2652}',
            Self::Pisces => '\u{2653}',
        }
    }

    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * DEGREES_PER_SIGN
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

pub fn zodiac_sign(deg: f64) -> ZodiacSign {
    let idx = (normalize_angle(deg) / DEGREES_PER_SIGN).floor() as usize % 12;
    ZodiacSign::ALL[idx]
}

// A rounded 60' carries into the next degree; the last degree of a sign clamps at 29°59'.
pub fn format_degree_minute(deg: f64) -> ZodiacPosition {
    let d = normalize_angle(deg);
    let sign = zodiac_sign(d);
    let offset = d - sign.start_longitude();
    let total = ((offset * 60.0).round().max(0.0) as u32).min(ARCMIN_PER_SIGN - 1);
    ZodiacPosition {
        sign,
        degrees: (total / 60) as u8,
        minutes: (total % 60) as u8,
    }
}

impl ZodiacPosition {
    /// Longitude in degrees recovered from the rounded parts.
    pub fn to_longitude(&self) -> f64 {
        self.sign.start_longitude() + self.degrees as f64 + self.minutes as f64 / 60.0
    }
}

impl fmt::Display for ZodiacPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{:02}' {}", self.degrees, self.minutes, self.sign)
    }
}
