use log::{debug, trace};

use super::{Crossing, SweepOptions};
use crate::{
    error::{Error, Result},
    monotone::Chain,
    segment::intersect,
    utils::cmp_x,
    vertex::Vertices,
};

/// Sweep over a set of monotone chains, splicing in every crossing.
///
/// Maintains the active chains (every chain not yet exhausted,
/// ordered by the `x` of the vertex under its cursor) and the
/// candidate chains (those advanced at least once). Each step
/// advances the left-most active chain by one vertex and tests its
/// new segment against the current segment of every candidate.
///
/// The ordering uses `x` alone and a stable sort, so chains tied
/// in `x` keep their relative order. All state is local to the
/// value; independent chain sets can be swept separately.
pub struct Sweep<'a> {
    storage: &'a mut Vertices,
    chains: &'a mut [Chain],
    active: Vec<usize>,
    candidates: Vec<usize>,
    max_chain_vertices: Option<usize>,
    steps: usize,
}

impl<'a> Sweep<'a> {
    pub fn new(storage: &'a mut Vertices, chains: &'a mut [Chain]) -> Self {
        Self::with_options(storage, chains, SweepOptions::default())
    }

    /// Set up the sweep; every chain's cursor is reset to zero.
    pub fn with_options(
        storage: &'a mut Vertices,
        chains: &'a mut [Chain],
        options: SweepOptions,
    ) -> Self {
        for chain in chains.iter_mut() {
            chain.rewind();
        }
        let mut sweep = Sweep {
            active: (0..chains.len()).collect(),
            candidates: Vec::with_capacity(chains.len()),
            storage,
            chains,
            max_chain_vertices: options.max_chain_vertices,
            steps: 0,
        };
        sweep.sort_active();
        sweep
    }

    /// Number of steps processed so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether every chain has been exhausted.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.active.is_empty()
    }

    /// Process one step of the sweep.
    ///
    /// Calls `cb` for each crossing found, in discovery order.
    /// Returns `false` once there is nothing left to process.
    pub fn next_event<F: FnMut(Crossing)>(&mut self, mut cb: F) -> Result<bool> {
        let idx = match self.active.first() {
            Some(&idx) => idx,
            None => return Ok(false),
        };
        self.steps += 1;
        self.chains[idx].advance();
        trace!("step {}: advance chain {idx} to {}", self.steps, self.chains[idx].cursor());

        if self.chains[idx].is_done() {
            trace!("chain {idx}: exhausted");
            self.candidates.retain(|&c| c != idx);
            self.active.remove(0);
            return Ok(true);
        }

        if !self.candidates.contains(&idx) {
            self.candidates.push(idx);
        }
        for pos in 0..self.candidates.len() {
            let other = self.candidates[pos];
            if other == idx {
                continue;
            }
            let segments = (self.chains[idx].segment(), self.chains[other].segment());
            let (seg, other_seg) = match segments {
                (Some(a), Some(b)) => (a, b),
                _ => continue,
            };
            let found = intersect(
                &self.storage[seg.0],
                &self.storage[seg.1],
                &self.storage[other_seg.0],
                &self.storage[other_seg.1],
            );
            if let Some(vertex) = found {
                self.check_capacity(idx)?;
                self.check_capacity(other)?;

                let key = self.storage.insert(vertex);
                self.chains[idx].splice(key);
                self.chains[other].splice(key);
                debug!(
                    "crossing: chains {idx} and {other} at ({x}, {y})",
                    x = vertex.x(),
                    y = vertex.y()
                );
                cb(Crossing {
                    vertex: key,
                    chains: (idx, other),
                });
            }
        }

        self.sort_active();
        Ok(true)
    }

    /// Run the sweep to completion, returning all crossings.
    pub fn run(mut self) -> Result<Vec<Crossing>> {
        let mut crossings = vec![];
        while self.next_event(|c| crossings.push(c))? {}
        debug!(
            "sweep: {n} crossings in {steps} steps",
            n = crossings.len(),
            steps = self.steps
        );
        Ok(crossings)
    }

    fn check_capacity(&self, chain: usize) -> Result<()> {
        match self.max_chain_vertices {
            Some(limit) if self.chains[chain].len() >= limit => {
                Err(Error::ChainOverflow { chain, limit })
            }
            _ => Ok(()),
        }
    }

    fn sort_active(&mut self) {
        let storage = &*self.storage;
        let chains = &*self.chains;
        self.active
            .sort_by(|&a, &b| cmp_x(chains[a].current_x(storage), chains[b].current_x(storage)));
    }
}
