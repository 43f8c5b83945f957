#![allow(dead_code)]

use std::f64::consts::PI;

use geo::{Coordinate, Line, LineString, Rect};

use rand::Rng;
use rand_distr::Standard;

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coordinate<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    let dims = bounds.max() - bounds.min();
    Coordinate {
        x: bounds.min().x + dims.x * coords[0],
        y: bounds.min().y + dims.y * coords[1],
    }
}

#[inline]
pub fn uniform_line<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Line<f64> {
    Line::new(uniform_point(rng, bounds), uniform_point(rng, bounds))
}

/// A lane-like polyline: `steps` moves of `step_len` in random
/// directions from a uniform start point.
pub fn random_walk<R: Rng>(
    rng: &mut R,
    bounds: Rect<f64>,
    steps: usize,
    step_len: f64,
) -> LineString<f64> {
    let mut pt = uniform_point(rng, bounds);
    let mut coords = Vec::with_capacity(steps + 1);
    coords.push(pt);
    for _ in 0..steps {
        let angle = rng.sample::<f64, _>(Standard) * 2. * PI;
        pt = Coordinate {
            x: pt.x + step_len * angle.cos(),
            y: pt.y + step_len * angle.sin(),
        };
        coords.push(pt);
    }
    LineString(coords)
}
