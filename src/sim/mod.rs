//! Batch evaluation of how closely the random walk approximates the iterated ranks

mod common;
mod io;

pub use common::*;
pub use io::*;
