//! Monotonic allocation of record identifiers.

use std::sync::atomic::{AtomicU64, Ordering};

/// Allocator handing out identifiers in increasing order, starting at 0.
///
/// A value is never handed out twice, also under concurrent allocation.
#[derive(Debug, Default)]
pub struct Sequence {
    next: AtomicU64,
}

impl Sequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence whose first allocated value is `first`.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn generate(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
