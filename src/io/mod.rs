mod corpus;
mod report;

pub use corpus::*;
pub use report::*;
