use geo::Coordinate;

use crate::vertex::Vertex;

/// Intersect the directed segments `p1 → p2` and `p3 → p4`.
///
/// Solves `p1 + g (p2 - p1) = p3 + h (p4 - p3)` and accepts the
/// solution when both `g` and `h` lie in `[0, 1]`. Parallel or
/// collinear segments have a zero denominator; the resulting
/// infinite or NaN parameters fail the interval test.
///
/// A crossing at the *start* of a segment whose start vertex is
/// already an intersection (`g == 0` with `p1`, or `h == 0` with
/// `p3`) is not reported again. Coincidence with the end of a
/// segment is not checked.
///
/// The returned vertex is interpolated along `p1 → p2` and is marked
/// as an intersection.
pub fn intersect(p1: &Vertex, p2: &Vertex, p3: &Vertex, p4: &Vertex) -> Option<Vertex> {
    let (g, h) = parameters(p1.coord, p2.coord, p3.coord, p4.coord);

    if !((0. ..=1.).contains(&g) && (0. ..=1.).contains(&h)) {
        return None;
    }
    if (g == 0. && p1.is_intersection) || (h == 0. && p3.is_intersection) {
        return None;
    }

    let d = p2.coord - p1.coord;
    Some(Vertex::intersection(Coordinate {
        x: p1.coord.x + g * d.x,
        y: p1.coord.y + g * d.y,
    }))
}

/// Parameters `(g, h)` of the intersection of the two supporting lines.
#[inline]
fn parameters(
    p1: Coordinate<f64>,
    p2: Coordinate<f64>,
    p3: Coordinate<f64>,
    p4: Coordinate<f64>,
) -> (f64, f64) {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let r = p3 - p1;
    let denom = cross(d1, d2);
    (cross(r, d2) / denom, cross(r, d1) / denom)
}

#[inline]
fn cross(a: Coordinate<f64>, b: Coordinate<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::random::uniform_line;
    use geo::Rect;

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::new(Coordinate { x, y })
    }

    fn ix(x: f64, y: f64) -> Vertex {
        Vertex::intersection(Coordinate { x, y })
    }

    #[test]
    fn diagonals_cross_at_center() {
        let pt = intersect(&v(0., 0.), &v(10., 10.), &v(0., 10.), &v(10., 0.)).unwrap();
        assert!(pt.is_intersection);
        assert_relative_eq!(pt.x(), 5.);
        assert_relative_eq!(pt.y(), 5.);
    }

    #[test]
    fn parallel_and_collinear_segments_do_not_cross() {
        assert_eq!(
            intersect(&v(0., 0.), &v(10., 0.), &v(0., 1.), &v(10., 1.)),
            None
        );
        assert_eq!(
            intersect(&v(0., 0.), &v(10., 0.), &v(5., 0.), &v(15., 0.)),
            None
        );
        // Degenerate zero-length segment.
        assert_eq!(
            intersect(&v(1., 1.), &v(1., 1.), &v(0., 0.), &v(2., 2.)),
            None
        );
    }

    #[test]
    fn disjoint_segments_do_not_cross() {
        assert_eq!(
            intersect(&v(0., 0.), &v(1., 1.), &v(3., 0.), &v(2., 1.)),
            None
        );
    }

    #[test]
    fn touching_endpoints_are_reported() {
        let pt = intersect(&v(0., 0.), &v(5., 5.), &v(5., 5.), &v(10., 0.)).unwrap();
        assert_eq!(pt.coord, Coordinate { x: 5., y: 5. });
    }

    #[test]
    fn start_on_known_intersection_is_suppressed() {
        // `g == 0` with `p1` already an intersection.
        assert_eq!(
            intersect(&ix(5., 5.), &v(10., 10.), &v(0., 10.), &v(10., 0.)),
            None
        );
        // `h == 0` with `p3` already an intersection.
        assert_eq!(
            intersect(&v(0., 10.), &v(10., 0.), &ix(5., 5.), &v(10., 10.)),
            None
        );
    }

    #[test]
    fn end_on_known_intersection_is_reported() {
        // Same geometry as the suppressed case, but the known
        // intersection is the segment's end (`g == 1`).
        let pt = intersect(&v(0., 0.), &ix(5., 5.), &v(0., 10.), &v(10., 0.)).unwrap();
        assert_relative_eq!(pt.x(), 5.);
        assert_relative_eq!(pt.y(), 5.);

        let pt = intersect(&v(0., 10.), &v(10., 0.), &v(0., 0.), &ix(5., 5.)).unwrap();
        assert_relative_eq!(pt.x(), 5.);
        assert_relative_eq!(pt.y(), 5.);
    }

    #[test]
    fn argument_order_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = Rect::new([0., 0.], [100., 100.]);
        let mut hits = 0;
        for _ in 0..500 {
            let a = uniform_line(&mut rng, bounds);
            let b = uniform_line(&mut rng, bounds);
            let (p1, p2, p3, p4): (Vertex, Vertex, Vertex, Vertex) =
                (a.start.into(), a.end.into(), b.start.into(), b.end.into());

            let fwd = intersect(&p1, &p2, &p3, &p4);
            let bwd = intersect(&p3, &p4, &p1, &p2);
            assert_eq!(fwd.is_some(), bwd.is_some());
            if let (Some(f), Some(b)) = (fwd, bwd) {
                hits += 1;
                assert_relative_eq!(f.x(), b.x(), epsilon = 1e-9);
                assert_relative_eq!(f.y(), b.y(), epsilon = 1e-9);
            }
        }
        assert!(hits > 0);
    }
}
