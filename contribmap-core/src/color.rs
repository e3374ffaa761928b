use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Fill for countries without contributors.
pub const EMPTY: Rgb = Rgb(255, 255, 255);
/// Lightest shade, used for the smallest non-zero count.
pub const LIGHT: Rgb = Rgb(147, 197, 253);
/// Darkest shade, reached at the maximum count.
pub const DARK: Rgb = Rgb(30, 64, 175);

/// Logarithmic position of `count` between 1 and `max_count`, in `[0, 1]`.
///
/// A log scale keeps a handful of very large countries from washing every
/// other country out to the lightest shade.
pub fn intensity(count: u64, max_count: u64) -> f64 {
    if max_count > 1 && count > 1 {
        ((count as f64).ln() / (max_count as f64).ln()).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Heatmap color for `count` given the largest count on the map.
pub fn scale(count: u64, max_count: u64) -> Rgb {
    if count == 0 {
        return EMPTY;
    }

    let t = intensity(count, max_count);
    // Truncation, not rounding, so the anchors are hit exactly.
    let channel = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t) as u8;

    Rgb(
        channel(LIGHT.0, DARK.0),
        channel(LIGHT.1, DARK.1),
        channel(LIGHT.2, DARK.2),
    )
}
