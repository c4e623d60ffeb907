//! Normalized color distance metrics.

use crate::color::Color;

/// Sum of squared channel differences between black and white.
const MAX_SQUARED: f64 = 3.0 * 255.0 * 255.0;

/// Distance metric used when comparing colors under a tolerance.
///
/// Both metrics are zero for identical colors, symmetric, and grow with
/// every per-channel difference; they differ only in scale, so a tolerance
/// is meaningful relative to one metric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    /// `sqrt(dr² + dg² + db²) / sqrt(3·255²)`: linear in channel difference.
    #[default]
    Euclidean,
    /// `(dr² + dg² + db²) / (3·255²)`: the squared form, which treats small
    /// differences as much closer than `Euclidean` does.
    SquaredEuclidean,
}

impl Metric {
    /// Returns the distance between `a` and `b` in `[0, 1]`.
    #[inline]
    pub fn distance(self, a: Color, b: Color) -> f64 {
        let squared = squared_channel_distance(a, b) as f64 / MAX_SQUARED;
        match self {
            Metric::Euclidean => squared.sqrt(),
            Metric::SquaredEuclidean => squared,
        }
    }
}

/// Returns the normalized Euclidean distance between two colors.
#[inline]
pub fn distance(a: Color, b: Color) -> f64 {
    Metric::Euclidean.distance(a, b)
}

#[inline]
fn squared_channel_distance(a: Color, b: Color) -> u32 {
    let dr = a.r.abs_diff(b.r) as u32;
    let dg = a.g.abs_diff(b.g) as u32;
    let db = a.b.abs_diff(b.b) as u32;
    dr * dr + dg * dg + db * db
}

#[cfg(test)]
mod tests {
    use super::{distance, Metric};
    use crate::color::Color;

    #[test]
    fn black_to_white_is_one() {
        assert!((distance(Color::BLACK, Color::WHITE) - 1.0).abs() < 1e-12);
        let squared = Metric::SquaredEuclidean.distance(Color::BLACK, Color::WHITE);
        assert!((squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn identical_colors_are_zero() {
        let c = Color::rgb(12, 200, 99);
        assert_eq!(distance(c, c), 0.0);
        assert_eq!(Metric::SquaredEuclidean.distance(c, c), 0.0);
    }

    #[test]
    fn aqua_and_aquamarine_are_close() {
        let aqua = Color::rgb(0x00, 0xFF, 0xFF);
        let aquamarine = Color::rgb(0x7F, 0xFF, 0xD4);
        // 127² + 43² = 17978
        let squared = Metric::SquaredEuclidean.distance(aqua, aquamarine);
        assert!((squared - 17978.0 / 195075.0).abs() < 1e-12);
        assert!(squared < 0.1);
        assert!(distance(aqua, aquamarine) > 0.1);
    }

    #[test]
    fn single_channel_difference_is_linear_for_euclidean() {
        let d = distance(Color::rgb(0, 0, 0), Color::rgb(255, 0, 0));
        assert!((d - 1.0 / 3.0f64.sqrt()).abs() < 1e-12);
    }
}
