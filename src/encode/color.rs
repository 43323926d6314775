//! Diverging color scale for z-scores.

use std::fmt;

use serde::{Serialize, Serializer};

use super::round_half_up;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
    pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    /// Fill for districts without data (#cccccc).
    pub const NO_DATA: Rgb = Rgb { r: 204, g: 204, b: 204 };

    /// Format as CSS hex: #rrggbb
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Squared euclidean distance in RGB space.
    pub fn distance_sq(&self, other: &Rgb) -> u32 {
        let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2) as u32;
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Z-scores beyond this magnitude saturate the scale.
pub const Z_LIMIT: f64 = 3.0;

/// Blue-white-red ramp for a z-score, symmetric about zero.
/// Blue below the mean, white at the mean, red above it; NaN and `None` are gray.
pub fn color_for(z: Option<f64>) -> Rgb {
    let Some(z) = z.filter(|z| !z.is_nan()) else { return Rgb::NO_DATA };

    // Map [-3, 3] onto [0, 1].
    let t = (z.clamp(-Z_LIMIT, Z_LIMIT) + Z_LIMIT) / (2.0 * Z_LIMIT);

    if t < 0.5 {
        let i = round_half_up(255.0 * (t * 2.0)) as u8;
        Rgb { r: i, g: i, b: 255 }
    } else {
        let i = round_half_up(255.0 * ((1.0 - t) * 2.0)) as u8;
        Rgb { r: 255, g: i, b: i }
    }
}
