use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    vertex::{VertexKey, Vertices},
};

const CHAIN_STACK_SIZE: usize = 16;
pub(crate) type Keys = SmallVec<[VertexKey; CHAIN_STACK_SIZE]>;

/// An x-monotone run of vertices with a sweep cursor.
///
/// Vertices are stored in ascending `x` regardless of the direction
/// of the source polyline; `reversed` records whether the run was
/// flipped. The sequence only grows: the sweep splices crossing
/// vertices in at the cursor and never removes any.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    vertices: Keys,
    cursor: usize,
    reversed: bool,
    source: usize,
}

impl Chain {
    pub(crate) fn new(vertices: Keys, reversed: bool) -> Self {
        debug_assert!(vertices.len() > 1);
        Chain {
            vertices,
            cursor: 0,
            reversed,
            source: 0,
        }
    }

    /// Build a chain directly from vertex keys.
    ///
    /// Useful for sweeping hand-assembled chains, e.g. ones sharing a
    /// vertex. Fails unless there are at least two keys in ascending
    /// `x`.
    pub fn from_keys<I>(storage: &Vertices, keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = VertexKey>,
    {
        let keys: Keys = keys.into_iter().collect();
        if keys.len() < 2 {
            return Err(Error::TooFewPoints { len: keys.len() });
        }
        if let Some(pos) = keys.windows(2).position(|w| storage[w[0]].x() > storage[w[1]].x()) {
            return Err(Error::NotMonotone { index: pos + 1 });
        }
        Ok(Chain::new(keys, false))
    }

    /// Get the chain's vertex keys.
    #[inline]
    pub fn vertices(&self) -> &[VertexKey] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get the chain's cursor.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the stored order is the reverse of the source polyline.
    #[inline]
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    /// Index of the polyline this chain was cut from.
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    pub(crate) fn set_source(&mut self, source: usize) {
        self.source = source;
    }

    /// The cursor has moved past the last vertex.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.cursor >= self.vertices.len()
    }

    /// Vertex at the cursor, if any.
    #[inline]
    pub fn current(&self) -> Option<VertexKey> {
        self.vertices.get(self.cursor).copied()
    }

    /// The segment ending at the cursor.
    ///
    /// `None` before the first advance and once the chain is done.
    pub fn segment(&self) -> Option<(VertexKey, VertexKey)> {
        if self.cursor == 0 {
            return None;
        }
        Some((self.vertices[self.cursor - 1], self.current()?))
    }

    /// Iterate the vertex keys in the source polyline's direction.
    pub fn source_order(&self) -> impl Iterator<Item = VertexKey> + '_ {
        let keys = self.vertices.iter().copied();
        let (fwd, rev) = if self.reversed {
            (None, Some(keys.rev()))
        } else {
            (Some(keys), None)
        };
        fwd.into_iter().flatten().chain(rev.into_iter().flatten())
    }

    /// `x` of the vertex at the cursor.
    pub(crate) fn current_x(&self, storage: &Vertices) -> f64 {
        self.current()
            .map(|key| storage[key].x())
            .unwrap_or(f64::INFINITY)
    }

    pub(crate) fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn advance(&mut self) {
        debug_assert!(!self.is_done());
        self.cursor += 1;
    }

    /// Insert `key` at the cursor, shifting the rest right.
    pub(crate) fn splice(&mut self, key: VertexKey) {
        debug_assert!(!self.is_done());
        self.vertices.insert(self.cursor, key);
    }
}
