use clap::Parser;
use log::debug;
use rand::Rng;
use sokogen::console_interface::render_level_to_string;
use sokogen::core::{Difficulty, GeneratorConfig, LevelData, campaign_level, generate};

/// Deterministic Sokoban level generator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Options {
    /// Base seed; picked at random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Named difficulty preset.
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Explicit grid width, overriding the preset.
    #[arg(long, requires = "height", requires = "boxes")]
    width: Option<i32>,

    /// Explicit grid height.
    #[arg(long)]
    height: Option<i32>,

    /// Explicit box count.
    #[arg(long)]
    boxes: Option<usize>,

    /// Scramble step budget; defaults to boxes * 100 + 200.
    #[arg(long)]
    steps: Option<u32>,

    /// Generate the campaign level with this number instead.
    #[arg(long, conflicts_with_all = ["seed", "width"])]
    campaign: Option<u32>,

    /// How many consecutive levels to emit.
    #[arg(short, long, default_value_t = 1)]
    count: u32,

    /// Emit JSON instead of ASCII art.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let options = Options::parse();

    let base_seed = options
        .seed
        .unwrap_or_else(|| rand::rng().random_range(0..1_000_000));

    for index in 0..options.count {
        let level = if let Some(number) = options.campaign {
            campaign_level(number + index)
        } else {
            let seed = base_seed.wrapping_add(u64::from(index));
            debug!("generating level {} from seed {seed}", index + 1);
            generate(seed, config_from_options(&options))
        };
        print_level(&level, options.json)?;
    }

    Ok(())
}

fn config_from_options(options: &Options) -> GeneratorConfig {
    match (options.width, options.height, options.boxes) {
        (Some(width), Some(height), Some(box_count)) => GeneratorConfig {
            width,
            height,
            box_count,
            steps: options.steps,
        },
        _ => {
            let mut config = GeneratorConfig::from(options.difficulty);
            if options.steps.is_some() {
                config.steps = options.steps;
            }
            config
        }
    }
}

fn print_level(level: &LevelData, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(level)?);
    } else {
        println!("{}", render_level_to_string(level));
    }
    Ok(())
}
