//! Grouping of coincident crossings into junctions.
//!
//! The sweep reports one vertex per crossing chain pair, so three
//! lanes meeting at a point yield up to three vertices at (nearly)
//! the same location. This module runs after the sweep and merges
//! such vertices into a single [`Junction`] with the set of incident
//! lanes. It never alters the chains.

use geo::Coordinate;
use itertools::Itertools;
use rstar::{PointDistance, RTree, RTreeObject, AABB};
use smallvec::SmallVec;

use crate::{crossings::Crossing, monotone::Chain, vertex::VertexKey, Vertices};

/// A graph vertex formed by one or more coincident crossings.
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    /// Index of the junction in the returned list.
    pub id: usize,
    /// Location of the first crossing of the group.
    pub coord: Coordinate<f64>,
    /// Crossing vertices merged into this junction.
    pub vertices: SmallVec<[VertexKey; 2]>,
    /// Sorted indices of the lanes (chain sources) meeting here.
    pub lanes: Vec<usize>,
}

struct GeomWithData<T>([f64; 2], T);

impl<T> RTreeObject for GeomWithData<T> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.0)
    }
}

impl<T> PointDistance for GeomWithData<T> {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.0[0] - point[0];
        let dy = self.0[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Group `crossings` lying within `tolerance` of each other.
///
/// Crossings are visited in discovery order; each one not yet
/// assigned seeds a junction that absorbs every unassigned crossing
/// within `tolerance` of it. A tolerance of zero only merges
/// crossings at identical coordinates.
pub fn junctions(
    storage: &Vertices,
    chains: &[Chain],
    crossings: &[Crossing],
    tolerance: f64,
) -> Vec<Junction> {
    let tree = RTree::bulk_load(
        crossings
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let coord = storage[c.vertex].coord;
                GeomWithData([coord.x, coord.y], i)
            })
            .collect(),
    );
    let max_dist_2 = (tolerance * tolerance).max(f64::MIN_POSITIVE);

    let mut assigned = vec![false; crossings.len()];
    let mut out = vec![];
    for (seed, crossing) in crossings.iter().enumerate() {
        if assigned[seed] {
            continue;
        }
        let coord = storage[crossing.vertex].coord;
        let members: Vec<usize> = tree
            .locate_within_distance([coord.x, coord.y], max_dist_2)
            .map(|g| g.1)
            .chain(std::iter::once(seed))
            .filter(|&i| !assigned[i])
            .sorted()
            .dedup()
            .collect();

        for &i in &members {
            assigned[i] = true;
        }
        let lanes = members
            .iter()
            .flat_map(|&i| {
                let (a, b) = crossings[i].chains;
                [chains[a].source(), chains[b].source()]
            })
            .sorted()
            .dedup()
            .collect();

        out.push(Junction {
            id: out.len(),
            coord,
            vertices: members.iter().map(|&i| crossings[i].vertex).collect(),
            lanes,
        });
    }
    out
}
