// src/noyau/mode.rs
//
// Mode d’angle (RAD/DEG). Passé explicitement à l’évaluation : pas d’état global.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    /// Bascule RAD <-> DEG.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Radians => Self::Degrees,
            Self::Degrees => Self::Radians,
        };
    }

    /// Angle saisi -> radians (sin/cos/tan).
    pub(crate) fn vers_radians(self, x: f64) -> f64 {
        match self {
            Self::Radians => x,
            Self::Degrees => x.to_radians(),
        }
    }

    /// Radians -> angle affiché (asin/acos/atan).
    pub(crate) fn depuis_radians(self, x: f64) -> f64 {
        match self {
            Self::Radians => x,
            Self::Degrees => x.to_degrees(),
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radians => write!(f, "RAD"),
            Self::Degrees => write!(f, "DEG"),
        }
    }
}

impl FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rad" | "radians" => Ok(Self::Radians),
            "deg" | "degrees" | "degres" | "degrés" => Ok(Self::Degrees),
            autre => Err(format!("mode inconnu: {autre} (rad | deg)")),
        }
    }
}
