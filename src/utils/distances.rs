use std::sync::atomic::{AtomicUsize, Ordering};

/// Sentinel distance of a node that has not been reached yet.
pub const UNREACHED: usize = usize::MAX;

/// A vector of node distances supporting concurrent compare-and-set claims.
///
/// This is the only shared mutable state of the visit kernels: a node is
/// claimed by the one thread whose [`cas`](Distances::cas) from [`UNREACHED`]
/// succeeds, and that thread is the unique one that enqueues it for the next
/// level. The vector is allocated by the caller, sized to the number of nodes,
/// and owned by the caller after the visit returns.
///
/// Memory-order requirements are mild: the kernels only need writes that
/// precede a level barrier to be visible after it, and the barrier itself
/// (the end of a `rayon` parallel region) provides that, so all element
/// operations take an explicit [`Ordering`] and are typically used with
/// [`Ordering::Relaxed`].
pub struct Distances {
    dist: Box<[AtomicUsize]>,
}

impl Distances {
    /// Creates a vector of `len` distances, all [`UNREACHED`].
    pub fn new(len: usize) -> Self {
        let mut dist = Vec::with_capacity(len);
        dist.resize_with(len, || AtomicUsize::new(UNREACHED));
        Self {
            dist: dist.into_boxed_slice(),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Returns whether the vector is empty.
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Returns the distance of `node`.
    #[inline(always)]
    pub fn load(&self, node: usize, order: Ordering) -> usize {
        self.dist[node].load(order)
    }

    /// Publishes `value` as the distance of `node`.
    #[inline(always)]
    pub fn store(&self, node: usize, value: usize, order: Ordering) {
        self.dist[node].store(value, order)
    }

    /// Atomically replaces the distance of `node` with `new` if it currently
    /// equals `expected`, returning whether the claim succeeded.
    #[inline(always)]
    pub fn cas(&self, node: usize, expected: usize, new: usize, order: Ordering) -> bool {
        self.dist[node]
            .compare_exchange(expected, new, order, Ordering::Relaxed)
            .is_ok()
    }

    /// Sets every element to `value`.
    pub fn fill(&self, value: usize) {
        for d in self.dist.iter() {
            d.store(value, Ordering::Relaxed);
        }
    }

    /// The underlying atomic slice, for parallel iteration.
    pub fn as_slice(&self) -> &[AtomicUsize] {
        &self.dist
    }

    /// Copies the current distances into a plain vector.
    pub fn snapshot(&self) -> Vec<usize> {
        self.dist
            .iter()
            .map(|d| d.load(Ordering::Relaxed))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_is_unreached() {
        let dist = Distances::new(4);
        assert_eq!(dist.len(), 4);
        assert_eq!(dist.snapshot(), vec![UNREACHED; 4]);
    }

    #[test]
    fn test_cas_claims_once() {
        let dist = Distances::new(2);
        assert!(dist.cas(1, UNREACHED, 3, Ordering::Relaxed));
        assert!(!dist.cas(1, UNREACHED, 5, Ordering::Relaxed));
        assert_eq!(dist.load(1, Ordering::Relaxed), 3);
        assert_eq!(dist.load(0, Ordering::Relaxed), UNREACHED);
    }

    #[test]
    fn test_fill() {
        let dist = Distances::new(3);
        dist.store(0, 7, Ordering::Relaxed);
        dist.fill(UNREACHED);
        assert_eq!(dist.snapshot(), vec![UNREACHED; 3]);
    }
}
