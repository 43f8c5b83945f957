use geo::{Coordinate, LineString};

use crate::{
    error::{Error, Result},
    utils::is_finite,
};

/// A navigable lane: the centerline of a dredged channel.
///
/// Coordinates must already be in the planar frame shared by all
/// lanes of a network.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub id: u64,
    pub lane_id: String,
    /// Maintained depth of the channel.
    pub depth: f64,
    pub coordinates: LineString<f64>,
}

impl Lane {
    pub fn new<S: Into<String>>(
        id: u64,
        lane_id: S,
        depth: f64,
        coordinates: LineString<f64>,
    ) -> Self {
        Lane {
            id,
            lane_id: lane_id.into(),
            depth,
            coordinates,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Coordinate<f64>] {
        &self.coordinates.0
    }

    /// Check the lane can be decomposed.
    ///
    /// Errors name the lane through [`Error::Lane`].
    pub fn validate(&self) -> Result<()> {
        let points = self.points();
        if points.len() < 2 {
            return Err(Error::TooFewPoints { len: points.len() }.in_lane(&self.lane_id));
        }
        if let Some(index) = points.iter().position(|c| !is_finite(c)) {
            let Coordinate { x, y } = points[index];
            return Err(Error::NonFiniteCoordinate { index, x, y }.in_lane(&self.lane_id));
        }
        Ok(())
    }
}
