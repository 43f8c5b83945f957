use geo::Coordinate;
use log::debug;

use super::{chain::Keys, Chain, RunTies};
use crate::{
    error::{Error, Result},
    utils::is_finite,
    vertex::{Vertex, Vertices},
};

/// Split a polyline into x-monotone chains.
///
/// Uses the default [`RunTies`] policy. See [`decompose_with`].
pub fn decompose(storage: &mut Vertices, points: &[Coordinate<f64>]) -> Result<Vec<Chain>> {
    decompose_with(storage, points, RunTies::default())
}

/// Split a polyline into the fewest x-monotone chains.
///
/// Repeatedly peels the longest monotone prefix off the remaining
/// points. The direction of a run is fixed by its first two points;
/// `ties` decides whether equal `x` continues a descending run.
/// Descending runs are reversed so every chain is stored ascending.
/// Consecutive chains share their pivot point by value: the last
/// point of one chain is the first point of the next.
///
/// Vertices are allocated in `storage`. Fails if there are fewer
/// than two points or any coordinate is not finite.
pub fn decompose_with(
    storage: &mut Vertices,
    points: &[Coordinate<f64>],
    ties: RunTies,
) -> Result<Vec<Chain>> {
    let n = points.len();
    if n < 2 {
        return Err(Error::TooFewPoints { len: n });
    }
    if let Some(index) = points.iter().position(|c| !is_finite(c)) {
        let Coordinate { x, y } = points[index];
        return Err(Error::NonFiniteCoordinate { index, x, y });
    }

    let mut chains = vec![];
    let mut start = 0;
    loop {
        let descending = points[start].x > points[start + 1].x;

        // `end` is the index of the last point in the run.
        let mut end = start + 1;
        while end + 1 < n && ties.continues(points[end].x, points[end + 1].x, descending) {
            end += 1;
        }

        let run = &points[start..=end];
        let keys: Keys = if descending {
            run.iter().rev().map(|&c| storage.insert(Vertex::new(c))).collect()
        } else {
            run.iter().map(|&c| storage.insert(Vertex::new(c))).collect()
        };
        debug!(
            "decompose: run {start}..={end} ({dir})",
            dir = if descending { "descending" } else { "ascending" }
        );
        chains.push(Chain::new(keys, descending));

        if end == n - 1 {
            break;
        }
        start = end;
    }
    Ok(chains)
}
