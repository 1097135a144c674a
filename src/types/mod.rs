mod graph;
mod rank_vector;

pub use graph::*;
pub use rank_vector::*;

use crate::{Page, Score};

/// (Page, Score)
pub type PageRanking = (Page, Score);
