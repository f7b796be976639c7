use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Floor,
    Wall,
    Target,
}

/// Grid coordinates, x growing rightward and y growing downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A finished level. The map is terrain only: boxes and the player are
/// tracked by position and never baked into the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelData {
    pub map: Vec<Vec<Cell>>,
    pub player: Vec2,
    pub boxes: Vec<Vec2>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub width: i32,
    pub height: i32,
    pub box_count: usize,
    /// Scramble step budget; `None` picks `box_count * 100 + 200`.
    pub steps: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Retry bounds for a single generation attempt. The defaults are the
/// empirically chosen values; treat them as a starting point, not a law.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryLimits {
    pub spot_samples: u32,
    pub collision_retries: u32,
    pub max_attempts: u32,
}

/// Why one attempt was discarded. `generate` recovers from every variant
/// internally; this surfaces only through `run_attempt`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttemptError {
    #[error("no free cell for box {box_index} after {retries} retries")]
    PlacementExhausted { box_index: usize, retries: u32 },
    #[error("scramble rejected: {boxes_on_target} boxes still on targets, {pull_count} pulls")]
    ScrambleRejected {
        boxes_on_target: usize,
        pull_count: u32,
    },
}
