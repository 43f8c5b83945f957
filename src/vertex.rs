use std::ops::Index;

use geo::Coordinate;
use slab::Slab;

/// A point of a chain.
///
/// Vertices copied from the input polyline have `is_intersection`
/// unset; the sweep synthesizes vertices with the flag set whenever
/// two chain segments cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub coord: Coordinate<f64>,
    pub is_intersection: bool,
}

impl Vertex {
    /// Create a vertex originating from the source polyline.
    #[inline]
    pub fn new(coord: Coordinate<f64>) -> Self {
        Vertex {
            coord,
            is_intersection: false,
        }
    }

    /// Create a vertex synthesized at a crossing.
    #[inline]
    pub fn intersection(coord: Coordinate<f64>) -> Self {
        Vertex {
            coord,
            is_intersection: true,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coord.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coord.y
    }
}

impl From<Coordinate<f64>> for Vertex {
    fn from(coord: Coordinate<f64>) -> Self {
        Vertex::new(coord)
    }
}

/// Handle to a [`Vertex`] stored in [`Vertices`].
///
/// Two chains meeting at a crossing hold the same key, which is how
/// later stages recover the lanes incident to a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexKey(usize);

impl VertexKey {
    /// Get the key's index into the arena.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Arena owning every vertex referenced by a set of chains.
///
/// Vertices are never removed, so keys stay valid for the arena's
/// lifetime.
#[derive(Debug, Default, Clone)]
pub struct Vertices {
    storage: Slab<Vertex>,
}

impl Vertices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(size: usize) -> Self {
        Vertices {
            storage: Slab::with_capacity(size),
        }
    }

    /// Store `vertex` and return its key.
    pub fn insert(&mut self, vertex: Vertex) -> VertexKey {
        VertexKey(self.storage.insert(vertex))
    }

    #[inline]
    pub fn get(&self, key: VertexKey) -> Option<&Vertex> {
        self.storage.get(key.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Iterate over all vertices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexKey, &Vertex)> + '_ {
        self.storage.iter().map(|(idx, v)| (VertexKey(idx), v))
    }
}

impl Index<VertexKey> for Vertices {
    type Output = Vertex;

    #[inline]
    fn index(&self, key: VertexKey) -> &Self::Output {
        &self.storage[key.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_address_inserted_vertices() {
        let mut vertices = Vertices::new();
        let a = vertices.insert(Coordinate { x: 1., y: 2. }.into());
        let b = vertices.insert(Vertex::intersection(Coordinate { x: 3., y: 4. }));

        assert_ne!(a, b);
        assert_eq!(vertices.len(), 2);
        assert!(!vertices[a].is_intersection);
        assert!(vertices[b].is_intersection);
        assert_eq!(vertices[b].x(), 3.);
        assert_eq!(vertices.get(b).map(|v| v.y()), Some(4.));

        let keys: Vec<_> = vertices.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![a, b]);
    }
}
