//! Turns waterway lane centerlines into a planar graph.
//!
//! 1. [Monotone Decomposition](#monotone-decomposition)
//! 1. [Lane Crossings](#lane-crossings)
//! 1. [Junctions](#junctions)
//!
//! # Monotone Decomposition
//!
//! [`decompose`] splits a polyline into the fewest x-monotone
//! [`Chain`]s, each stored in ascending `x`. Chains reference their
//! vertices by [`VertexKey`] into a shared [`Vertices`] arena.
//!
//! # Lane Crossings
//!
//! [`sweep`] advances a sweep-line over a set of chains from left to
//! right. Each time a chain moves on to a new segment, the segment
//! is tested against the current segment of every other chain in
//! play. A crossing creates one vertex which is spliced into both
//! chains, so the two lanes share it by key. For step-wise control
//! or a vertex limit, use [`Sweep`] directly.
//!
//! ```rust
//! use geo::Coordinate;
//! use waterway_crossings::{decompose, sweep, Vertices};
//!
//! let mut vertices = Vertices::new();
//! let mut chains = vec![];
//! for line in [[(0., 0.), (10., 10.)], [(0., 10.), (10., 0.)]] {
//!     let pts: Vec<_> = line.iter().map(|&(x, y)| Coordinate { x, y }).collect();
//!     chains.extend(decompose(&mut vertices, &pts).unwrap());
//! }
//! let crossings = sweep(&mut vertices, &mut chains);
//! assert_eq!(crossings.len(), 1);
//! assert!(chains.iter().all(|c| c.vertices().contains(&crossings[0])));
//! ```
//!
//! The sweep reports crossings pairwise; it does not merge crossings
//! of several chains at the same point.
//!
//! # Junctions
//!
//! [`junctions`] groups coincident crossings into [`Junction`]s with
//! the set of incident lanes. [`Network`] runs the whole pipeline
//! over a batch of [`Lane`]s.
mod error;
pub use error::{Error, Result};

mod vertex;
pub use vertex::{Vertex, VertexKey, Vertices};

pub mod monotone;
pub use monotone::{decompose, decompose_with, Chain, RunTies};

mod segment;
pub use segment::intersect;

pub mod crossings;
pub use crossings::{sweep, Crossing, Sweep, SweepOptions};

pub mod junctions;
pub use junctions::{junctions, Junction};

mod lane;
pub use lane::Lane;

pub mod network;
pub use network::{Config, LanePolicy, Network};

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;

pub(crate) mod utils;
