/// Worker-pool configuration for the parallel visits.
///
/// The number of workers is fixed when the pool is built. [`Threads::Default`]
/// lets `rayon` size the pool, which honors the `RAYON_NUM_THREADS`
/// environment variable; [`Threads::NumThreads`] pins an explicit count.
#[derive(Debug, Clone, Copy)]
pub enum Threads {
    Default,
    NumThreads(usize),
}

impl Threads {
    pub fn build(self) -> rayon::ThreadPool {
        match self {
            Self::Default => rayon::ThreadPoolBuilder::new()
                .build()
                .expect("Should be able to build default threadpool"),
            Self::NumThreads(num_threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .unwrap_or_else(|_| {
                    panic!(
                        "Should be able to build custom threadpool with {} threads",
                        num_threads
                    )
                }),
        }
    }
}

/// Builds a [`rayon::ThreadPool`]: `threads![]` for the default worker count,
/// `threads![n]` for an explicit one.
#[macro_export]
macro_rules! threads {
    () => {
        $crate::utils::Threads::Default.build()
    };
    ($num_threads:expr) => {
        $crate::utils::Threads::NumThreads($num_threads).build()
    };
}
