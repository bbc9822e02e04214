use thiserror::Error;

/// Errors reported by [`crate::FlowLayout`] placement queries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The query named an item index outside the laid-out range.
    ///
    /// Indexes are never silently clamped; `count` is the number of items
    /// covered by the last reload.
    #[error("item index {index} out of range (count: {count})")]
    OutOfRangeItem { index: usize, count: usize },

    /// The query arrived before the first successful reload.
    #[error("layout queried before the first reload")]
    NotPrepared,
}
