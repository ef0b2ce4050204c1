use std::iter::FusedIterator;

// ============================================================================
// Lazy Fibonacci Sequence
// ============================================================================

/// Lazy, restartable producer of the Fibonacci sequence $F(0), F(1), \dots$
///
/// Values are produced on demand by explicit pulls; only the current pair is
/// kept in memory. The sequence is unbounded in principle and ends only
/// where the `u64` domain does: after $F(93)$, the last term that fits,
/// `next` returns `None`.
///
/// # Example
///
/// ```
/// use fibolab_core::FibIter;
///
/// let mut seq = FibIter::new();
/// let first: Vec<u64> = seq.by_ref().take(7).collect();
/// assert_eq!(first, [0, 1, 1, 2, 3, 5, 8]);
///
/// seq.restart();
/// assert_eq!(seq.next(), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct FibIter {
    current: Option<u64>,
    next: Option<u64>,
    position: u64,
}

impl FibIter {
    /// Creates a sequence positioned at $F(0)$.
    pub fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
            position: 0,
        }
    }

    /// Rewinds the sequence to $F(0)$.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Index of the value the next pull will produce.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }
}

impl Default for FibIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIter {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current?;

        // F(n+2) = F(n) + F(n+1); None once it leaves u64.
        let after = self.next.and_then(|next| value.checked_add(next));
        self.current = std::mem::replace(&mut self.next, after);
        self.position += 1;

        Some(value)
    }
}

impl FusedIterator for FibIter {}
