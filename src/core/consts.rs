// Tuning knobs for the generator. The retry bounds live in RetryLimits so
// callers can override them; these stay fixed across every caller.

/// Obstacle density for single-box boards.
pub const SPARSE_OBSTACLE_DENSITY: f64 = 0.05;
/// Obstacle density once more than one box is in play.
pub const DENSE_OBSTACLE_DENSITY: f64 = 0.15;
/// Signed jitter applied to the obstacle count.
pub const OBSTACLE_JITTER: i32 = 2;

/// Spread between the sub-seeds derived for consecutive attempts.
pub const ATTEMPT_SEED_STRIDE: u64 = 113;

/// Percentage of scramble steps that pull when a box is in reach.
pub const PULL_BIAS_PERCENT: i32 = 95;
/// An accepted scramble must have pulled at least this often per box.
pub const MIN_PULLS_PER_BOX: u32 = 3;
