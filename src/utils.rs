use std::cmp::Ordering;

use geo::Coordinate;

/// Compare by `x` alone.
///
/// Coordinates reaching the sweep are validated to be finite, so
/// incomparable values only arise from misuse; they compare equal
/// to keep sorting stable.
#[inline]
pub(crate) fn cmp_x(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[inline]
pub(crate) fn is_finite(coord: &Coordinate<f64>) -> bool {
    coord.x.is_finite() && coord.y.is_finite()
}
