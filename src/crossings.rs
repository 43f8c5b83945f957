mod sweep;
pub use sweep::Sweep;

use crate::{monotone::Chain, vertex::VertexKey, Vertices};

/// A crossing discovered by the sweep.
///
/// The `vertex` has been spliced into both chains; `chains.0` is the
/// chain that was being advanced and `chains.1` the candidate it was
/// tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    pub vertex: VertexKey,
    pub chains: (usize, usize),
}

/// Options for a [`Sweep`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOptions {
    /// Fail with [`crate::Error::ChainOverflow`] instead of growing a
    /// chain past this many vertices. Unlimited if `None`.
    pub max_chain_vertices: Option<usize>,
}

/// Find all crossings among `chains`.
///
/// Every crossing vertex is spliced into both chains involved and
/// its key is returned, in discovery order. Crossings at the same
/// location found by different chain pairs are reported separately.
pub fn sweep(storage: &mut Vertices, chains: &mut [Chain]) -> Vec<VertexKey> {
    match Sweep::new(storage, chains).run() {
        Ok(crossings) => crossings.into_iter().map(|c| c.vertex).collect(),
        Err(e) => unreachable!("sweep without a vertex limit failed: {e}"),
    }
}
