use crate::core::{GeneratorConfig, LevelData, generate};

/// Length of the shipped campaign. Levels past the end reuse the last
/// config tier, so callers may keep counting upward.
pub const CAMPAIGN_LENGTH: u32 = 60;

const CAMPAIGN_SEED_BASE: u64 = 123;
const CAMPAIGN_SEED_STRIDE: u64 = 777;

/// Difficulty ramp for the campaign. Level numbers start at 1.
pub fn campaign_config(level_number: u32) -> GeneratorConfig {
    match level_number {
        0..=5 => GeneratorConfig {
            width: 7,
            height: 7,
            box_count: 1,
            steps: None,
        },
        6..=10 => GeneratorConfig {
            width: 8,
            height: 8,
            box_count: 2,
            steps: None,
        },
        11..=20 => GeneratorConfig {
            width: 8,
            height: 8,
            box_count: 3,
            steps: Some(300),
        },
        21..=30 => GeneratorConfig {
            width: 9,
            height: 9,
            box_count: 3,
            steps: None,
        },
        31..=40 => GeneratorConfig {
            width: 10,
            height: 10,
            box_count: 4,
            steps: None,
        },
        41..=50 => GeneratorConfig {
            width: 10,
            height: 10,
            box_count: 4,
            steps: Some(300),
        },
        _ => GeneratorConfig {
            width: 10,
            height: 10,
            box_count: 5,
            steps: Some(400),
        },
    }
}

pub fn campaign_seed(level_number: u32) -> u64 {
    u64::from(level_number.saturating_sub(1)) * CAMPAIGN_SEED_STRIDE + CAMPAIGN_SEED_BASE
}

pub fn campaign_level(level_number: u32) -> LevelData {
    generate(campaign_seed(level_number), campaign_config(level_number))
}
