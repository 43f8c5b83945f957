mod chain;
pub use chain::Chain;

mod chains;
pub use chains::{decompose, decompose_with};

/// Policy for equal `x` values while extending a run.
///
/// Ascending runs always absorb a point with the same `x` as its
/// predecessor. Descending runs differ by policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunTies {
    /// A tie ends a descending run. This matches the lane data the
    /// network was originally built from.
    Asymmetric,
    /// A tie continues a run in either direction, which can produce
    /// fewer chains.
    NonStrict,
}

impl Default for RunTies {
    fn default() -> Self {
        RunTies::Asymmetric
    }
}

impl RunTies {
    /// Whether `next` continues a run whose last point is `prev`.
    #[inline]
    fn continues(self, prev: f64, next: f64, descending: bool) -> bool {
        match (descending, self) {
            (false, _) => prev <= next,
            (true, RunTies::Asymmetric) => prev > next,
            (true, RunTies::NonStrict) => prev >= next,
        }
    }
}
