pub mod errors;
pub mod io;
pub mod rank;
pub mod sim;
pub mod stats;
pub mod types;

pub use errors::*;
pub use io::*;
pub use rank::*;
pub use stats::*;
pub use types::*;

pub type Score = f64;
pub type Probability = f64;
pub type Page = String;
pub type PageId = usize;

/// Damping factor used by the driver unless told otherwise
pub const DEFAULT_DAMPING: f64 = 0.85;
/// Length of the random walk used by the driver unless told otherwise
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Algorithm to use when ranking pages
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RankingAlg {
    /// Random surfer simulation. Ranks are visit frequencies over a walk of `samples` pages.
    /// Uses a fresh OS-seeded generator if `seed` is `None`.
    Sampling { samples: usize, seed: Option<u64> },
    /// Fixed-point iteration of the PageRank equation until every page moves less than
    /// `tolerance` in one sweep.
    Iteration { tolerance: f64 },
}
