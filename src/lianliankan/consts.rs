/// Attempt budget for the constrained (anti-clustering) generation strategy.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Attempt budget for the fallback shuffle-and-validate strategy.
pub const MAX_FALLBACK_ATTEMPTS: usize = 100;

/// A fallback candidate at or above this complexity is accepted immediately.
pub const TARGET_COMPLEXITY: f64 = 0.7;

/// A cell is rejected for a kind once this many of its 8 neighbours hold that kind.
pub const CLUSTER_LIMIT: usize = 2;

/// Complexity weights: two-corner paths dominate, straight paths detract.
pub const TWO_CORNER_WEIGHT: f64 = 0.6;
pub const ONE_CORNER_WEIGHT: f64 = 0.3;
pub const STRAIGHT_WEIGHT: f64 = 0.1;
