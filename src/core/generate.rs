use crate::core::{
    ATTEMPT_SEED_STRIDE, AttemptError, Cell, GeneratorConfig, Lcg, LevelData, MIN_PULLS_PER_BOX,
    RetryLimits, ScrambleMove, Vec2, place_entities, scramble, synthesize_terrain,
};

/// An accepted attempt. `moves` is the scramble walk that produced the
/// level; replayed last-to-first as pushes it solves the level, so callers
/// wanting a reference solution can keep it.
pub struct Attempt {
    pub level: LevelData,
    pub moves: Vec<ScrambleMove>,
    pub pull_count: u32,
}

/// One full terrain -> placement -> scramble pass on a fresh generator, so
/// any attempt can be reproduced from its sub-seed alone.
pub fn run_attempt(
    attempt_seed: u64,
    config: &GeneratorConfig,
    limits: &RetryLimits,
) -> Result<Attempt, AttemptError> {
    let mut rng = Lcg::new(attempt_seed);
    let mut map = synthesize_terrain(config.width, config.height, config.box_count, &mut rng);
    let start = place_entities(&mut map, config.box_count, limits, &mut rng)?;
    let outcome = scramble(
        &map,
        start.player,
        &start.boxes,
        config.steps_or_default(),
        &mut rng,
    );

    // A level that is already half-solved, or that only saw a handful of
    // incidental pulls, is not worth serving.
    let boxes_on_target = outcome
        .boxes
        .iter()
        .filter(|b| map[b.y as usize][b.x as usize] == Cell::Target)
        .count();
    if boxes_on_target > 0 || outcome.pull_count < MIN_PULLS_PER_BOX * config.box_count as u32 {
        return Err(AttemptError::ScrambleRejected {
            boxes_on_target,
            pull_count: outcome.pull_count,
        });
    }

    Ok(Attempt {
        level: LevelData {
            map,
            player: outcome.player,
            boxes: outcome.boxes,
        },
        moves: outcome.moves,
        pull_count: outcome.pull_count,
    })
}

/// Generate a level. Total: on pathological configs this degrades to the
/// fixed fallback level instead of failing.
pub fn generate(seed: u64, config: impl Into<GeneratorConfig>) -> LevelData {
    generate_with_limits(seed, config, RetryLimits::default())
}

/// Same loop with explicit retry tunables.
pub fn generate_with_limits(
    seed: u64,
    config: impl Into<GeneratorConfig>,
    limits: RetryLimits,
) -> LevelData {
    let config = config.into();

    for attempt in 1..=limits.max_attempts {
        let attempt_seed = seed.wrapping_add(u64::from(attempt) * ATTEMPT_SEED_STRIDE);
        match run_attempt(attempt_seed, &config, &limits) {
            Ok(accepted) => {
                log::debug!(
                    "seed {seed}: accepted attempt {attempt} with {} pulls",
                    accepted.pull_count
                );
                return accepted.level;
            }
            Err(err) => log::trace!("seed {seed}: attempt {attempt} rejected: {err}"),
        }
    }

    log::warn!(
        "seed {seed}: exhausted {} attempts for {config:?}, serving the fallback level",
        limits.max_attempts
    );
    fallback_level()
}

/// Hand-authored 7x5 room, one push away from solved. Has no randomness
/// and cannot fail, which is what keeps `generate` total.
pub(crate) fn fallback_level() -> LevelData {
    let width = 7;
    let height = 5;
    let mut map = vec![vec![Cell::Wall; width]; height];
    for row in map.iter_mut().take(height - 1).skip(1) {
        for cell in row.iter_mut().take(width - 1).skip(1) {
            *cell = Cell::Floor;
        }
    }
    map[2][2] = Cell::Target;

    LevelData {
        map,
        player: Vec2 { x: 1, y: 1 },
        boxes: vec![Vec2 { x: 3, y: 2 }],
    }
}
