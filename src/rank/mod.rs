mod iterative;
mod ranking;
mod sampling;
mod transition;
mod util;

pub use iterative::*;
pub use ranking::*;
pub use sampling::*;
pub use transition::*;
pub(crate) use util::*;
