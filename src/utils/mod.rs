mod distances;
pub use distances::{Distances, UNREACHED};

mod threadpool;
pub use threadpool::Threads;
