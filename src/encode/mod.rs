mod category;
mod color;
mod number;

pub use category::{category_for, Category};
pub use color::{color_for, Rgb, Z_LIMIT};
pub use number::{format_number, format_z};

/// Round to the nearest integer, ties toward positive infinity.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    let f = x.floor();
    if x - f >= 0.5 { f + 1.0 } else { f }
}
