use std::{collections::HashSet, ops::Range};

use log::{debug, info, warn};

use crate::{
    crossings::{Crossing, Sweep, SweepOptions},
    error::Result,
    junctions::{junctions, Junction},
    lane::Lane,
    monotone::{decompose_with, Chain, RunTies},
    vertex::{VertexKey, Vertices},
};

/// What to do with a lane that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePolicy {
    /// Fail the whole build.
    Abort,
    /// Log a warning and leave the lane out of the network.
    Skip,
}

impl Default for LanePolicy {
    fn default() -> Self {
        LanePolicy::Abort
    }
}

/// Settings for [`Network::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub run_ties: RunTies,
    pub lane_policy: LanePolicy,
    /// See [`SweepOptions::max_chain_vertices`].
    pub max_chain_vertices: Option<usize>,
    /// Crossings closer than this are merged into one junction.
    pub junction_tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            run_ties: RunTies::default(),
            lane_policy: LanePolicy::default(),
            max_chain_vertices: None,
            junction_tolerance: 1e-9,
        }
    }
}

/// Lanes cut into chains with every crossing spliced in.
#[derive(Debug, Clone)]
pub struct Network {
    storage: Vertices,
    chains: Vec<Chain>,
    lane_chains: Vec<Range<usize>>,
    crossings: Vec<Crossing>,
    junctions: Vec<Junction>,
    joins: HashSet<VertexKey>,
    skipped: Vec<usize>,
}

impl Network {
    /// Decompose `lanes`, sweep them together and group the crossings.
    ///
    /// Lane indices used throughout (chain sources, junction lanes)
    /// are positions in `lanes`.
    pub fn build(lanes: &[Lane], config: &Config) -> Result<Self> {
        let mut storage = Vertices::with_capacity(lanes.iter().map(|l| l.points().len()).sum());
        let mut chains = vec![];
        let mut lane_chains = Vec::with_capacity(lanes.len());
        let mut skipped = vec![];

        for (idx, lane) in lanes.iter().enumerate() {
            let start = chains.len();
            let decomposed = lane
                .validate()
                .and_then(|_| decompose_with(&mut storage, lane.points(), config.run_ties));
            match decomposed {
                Ok(cut) => {
                    debug!("lane {id}: {n} chain(s)", id = lane.lane_id, n = cut.len());
                    chains.extend(cut.into_iter().map(|mut chain| {
                        chain.set_source(idx);
                        chain
                    }));
                }
                Err(e) => match config.lane_policy {
                    LanePolicy::Abort => return Err(e),
                    LanePolicy::Skip => {
                        warn!("skipping lane: {e}");
                        skipped.push(idx);
                    }
                },
            }
            lane_chains.push(start..chains.len());
        }
        info!(
            "decomposed {n} lane(s) into {m} chain(s), {s} skipped",
            n = lanes.len(),
            m = chains.len(),
            s = skipped.len()
        );

        let options = SweepOptions {
            max_chain_vertices: config.max_chain_vertices,
        };
        let crossings = Sweep::with_options(&mut storage, &mut chains, options).run()?;

        let tolerance = config.junction_tolerance;
        let (joined, between): (Vec<Crossing>, Vec<Crossing>) = crossings
            .iter()
            .partition(|c| is_join(&storage, &chains, c, tolerance));
        let joins: HashSet<_> = joined.iter().map(|c| c.vertex).collect();
        let junctions = junctions(&storage, &chains, &between, tolerance);
        info!(
            "found {n} crossing(s) forming {m} junction(s), {j} at chain joins",
            n = crossings.len(),
            m = junctions.len(),
            j = joins.len()
        );

        Ok(Network {
            storage,
            chains,
            lane_chains,
            crossings,
            junctions,
            joins,
            skipped,
        })
    }

    /// Get a reference to the network's vertices.
    pub fn vertices(&self) -> &Vertices {
        &self.storage
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn crossings(&self) -> &[Crossing] {
        &self.crossings
    }

    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    /// Whether `key` is a touch between consecutive chains of one lane
    /// at the point where the lane was cut. Such crossings stay in
    /// [`Network::crossings`] and in the chains but form no junction.
    pub fn is_join(&self, key: VertexKey) -> bool {
        self.joins.contains(&key)
    }

    /// Indices of lanes left out under [`LanePolicy::Skip`].
    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }

    /// Chains cut from lane `lane`, in lane order.
    pub fn lane_chains(&self, lane: usize) -> Option<&[Chain]> {
        self.lane_chains
            .get(lane)
            .map(|range| &self.chains[range.clone()])
    }

    /// Vertices of lane `lane` in its original direction.
    ///
    /// Includes the spliced crossing vertices except those at chain
    /// joins; the pivot repeated between consecutive chains appears
    /// once. Empty for a skipped lane.
    pub fn lane_path(&self, lane: usize) -> Option<Vec<VertexKey>> {
        let chains = self.lane_chains(lane)?;
        let mut path = vec![];
        for (i, chain) in chains.iter().enumerate() {
            path.extend(
                chain
                    .source_order()
                    .skip(if i == 0 { 0 } else { 1 })
                    .filter(|key| !self.joins.contains(key)),
            );
        }
        Some(path)
    }
}

/// Whether `crossing` is two consecutive chains of one lane touching
/// at their shared pivot.
///
/// Chains of a lane are stored contiguously in lane order, and
/// splicing never moves a chain's end points, so the pivot is the
/// last vertex of the earlier chain in source order.
fn is_join(storage: &Vertices, chains: &[Chain], crossing: &Crossing, tolerance: f64) -> bool {
    let (a, b) = crossing.chains;
    let (lo, hi) = (a.min(b), a.max(b));
    if hi != lo + 1 || chains[lo].source() != chains[hi].source() {
        return false;
    }
    let pivot = match chains[lo].source_order().last() {
        Some(key) => storage[key].coord,
        None => return false,
    };
    let at = storage[crossing.vertex].coord;
    let (dx, dy) = (at.x - pivot.x, at.y - pivot.y);
    dx * dx + dy * dy <= tolerance * tolerance
}
