use thiserror::Error;

/// Errors raised while preparing or sweeping lane geometry.
#[derive(Debug, Error)]
pub enum Error {
    /// A polyline needs at least two points to form a run.
    #[error("polyline has {len} point(s); at least 2 are required")]
    TooFewPoints { len: usize },

    #[error("coordinate {index} is not finite: ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },

    /// Hand-built chain keys are out of `x` order at `index`.
    #[error("chain vertex {index} is left of its predecessor")]
    NotMonotone { index: usize },

    /// Wraps an input error with the lane it was found in.
    #[error("lane {lane_id}: {source}")]
    Lane {
        lane_id: String,
        #[source]
        source: Box<Error>,
    },

    /// A splice would grow a chain past the configured vertex limit.
    #[error("chain {chain} would exceed the limit of {limit} vertices")]
    ChainOverflow { chain: usize, limit: usize },
}

impl Error {
    pub(crate) fn in_lane(self, lane_id: &str) -> Self {
        Error::Lane {
            lane_id: lane_id.to_owned(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
