//! Breadth-first search on compressed sparse row graphs, with a
//! direction-optimizing parallel kernel that switches between top-down and
//! bottom-up expansion at level boundaries.

pub mod algo;
pub mod graph;
pub mod utils;

mod error;
pub use error::Error;

pub mod prelude {
    pub use crate::algo::bfs::{validate, ParHybrid, Seq};
    pub use crate::graph::CsrGraph;
    pub use crate::utils::{Distances, Threads, UNREACHED};
    pub use crate::Error;
}
