//! Append-only log of per-swap price snapshots.

use crate::domain::PriceSnapshot;

/// Ordered sequence of price snapshots, one per executed swap.
///
/// The log always starts with the 1:1 [`PriceSnapshot::INITIAL`] entry and
/// is never empty.  Storage is unbounded; a display layer that only wants
/// the most recent entries can use [`last_n`](HistoryLog::last_n).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryLog {
    snapshots: Vec<PriceSnapshot>,
}

impl HistoryLog {
    /// Creates a history seeded with the initial 1:1 snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: vec![PriceSnapshot::INITIAL],
        }
    }

    /// Returns all snapshots in execution order, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &[PriceSnapshot] {
        &self.snapshots
    }

    /// Returns the most recent snapshot.
    #[must_use]
    pub fn latest(&self) -> &PriceSnapshot {
        // The log is seeded at construction and reseeded on reset.
        self.snapshots.last().unwrap_or(&PriceSnapshot::INITIAL)
    }

    /// Returns the snapshot before the latest, if any swap has executed.
    #[must_use]
    pub fn previous(&self) -> Option<&PriceSnapshot> {
        let len = self.snapshots.len();
        if len < 2 {
            return None;
        }
        self.snapshots.get(len - 2)
    }

    /// Returns up to the `n` most recent snapshots, oldest first.
    #[must_use]
    pub fn last_n(&self, n: usize) -> &[PriceSnapshot] {
        let start = self.snapshots.len().saturating_sub(n);
        &self.snapshots[start..]
    }

    /// Returns the number of swaps executed so far (the seed entry does not
    /// count).
    #[must_use]
    pub fn swap_count(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    /// Appends the snapshot produced by an executed swap.
    pub(crate) fn record(&mut self, snapshot: PriceSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Clears the log back to the single initial snapshot.
    pub(crate) fn reset(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(PriceSnapshot::INITIAL);
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
