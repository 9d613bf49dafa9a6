pub mod heap;
pub mod min_scan;
pub mod traits;

pub use traits::{Route, ShortestPathAlgorithm, ShortestPathResult};
