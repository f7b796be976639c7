mod campaign;
mod consts;
mod generate;
mod model_helpers;
mod models;
mod placement;
mod rng;
mod scramble;
mod terrain;

pub use campaign::{CAMPAIGN_LENGTH, campaign_config, campaign_level, campaign_seed};
pub use consts::*;
pub use generate::{Attempt, generate, generate_with_limits, run_attempt};
pub use model_helpers::{cell_at, is_walkable};
pub use models::{
    AttemptError, Cell, Difficulty, Direction, GeneratorConfig, LevelData, RetryLimits, Vec2,
};
pub use rng::Lcg;
pub use scramble::{ScrambleMove, ScrambleOutcome, scramble};

pub(crate) use placement::place_entities;
pub(crate) use terrain::synthesize_terrain;

#[cfg(test)]
pub(crate) use generate::fallback_level;
