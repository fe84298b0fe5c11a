//! Run result types

/// Outcome of one invocation: the computed total and how long it took
///
/// Only ever rendered as text; never persisted structurally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    /// Sum of `price * quantity` over every resolvable line item
    pub total_sales: f64,

    /// Wall-clock seconds from before loading to after aggregation
    pub elapsed_seconds: f64,
}

/// Per-run counters collected by the aggregator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalesTally {
    /// Running total over priced items
    pub total: f64,

    /// Line items that contributed to the total
    pub priced_items: usize,

    /// Line items skipped because a field could not be extracted
    pub invalid_items: usize,

    /// Line items skipped because their product is not in the index
    pub unknown_products: usize,

    /// Transactions skipped wholesale because `items` was unusable
    pub skipped_transactions: usize,
}
