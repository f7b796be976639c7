#[cfg(test)]
mod test {
    use crate::core::{
        ATTEMPT_SEED_STRIDE, Cell, Difficulty, Direction, GeneratorConfig, LevelData, RetryLimits,
        Vec2, fallback_level, generate, generate_with_limits, run_attempt,
    };
    use crate::test::test_util::{assert_structurally_valid, push_step, replay_reversed};
    use proptest::prelude::*;

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            width: 7,
            height: 7,
            box_count: 1,
            steps: Some(100),
        }
    }

    #[test]
    fn same_seed_and_config_replays_identically() {
        let first = generate(123, small_config());
        for _ in 0..10 {
            assert_eq!(first, generate(123, small_config()));
        }
    }

    #[test]
    fn interleaved_calls_do_not_leak_state() {
        let first = generate(1, small_config());
        let _ = generate(2, small_config());
        let _ = generate(3, Difficulty::Medium);
        assert_eq!(first, generate(1, small_config()));
    }

    #[test]
    fn generated_levels_are_structurally_valid() {
        let config = GeneratorConfig {
            width: 8,
            height: 8,
            box_count: 2,
            steps: None,
        };
        for seed in 0..25 {
            let level = generate(seed, config);
            assert_structurally_valid(&level);
            if level != fallback_level() {
                assert_eq!(level.boxes.len(), 2, "seed {seed}");
                for &b in &level.boxes {
                    assert_ne!(
                        level.map[b.y as usize][b.x as usize],
                        Cell::Target,
                        "seed {seed} is already half-solved"
                    );
                }
            }
        }
    }

    #[test]
    fn accepted_attempts_replay_to_solved() {
        let config = GeneratorConfig {
            width: 8,
            height: 8,
            box_count: 2,
            steps: None,
        };
        let limits = RetryLimits::default();
        let mut verified = 0;

        for seed in 0..20u64 {
            for attempt in 1..=limits.max_attempts {
                let attempt_seed = seed.wrapping_add(u64::from(attempt) * ATTEMPT_SEED_STRIDE);
                let Ok(accepted) = run_attempt(attempt_seed, &config, &limits) else {
                    continue;
                };

                let (_, end_boxes) = replay_reversed(&accepted.level, &accepted.moves);
                let targets = accepted.level.targets();
                assert_eq!(end_boxes.len(), targets.len());
                for b in &end_boxes {
                    assert!(targets.contains(b), "box off target after replay, seed {seed}");
                }
                verified += 1;
                break;
            }
        }

        assert!(verified > 0, "no attempt accepted for any seed");
    }

    #[test]
    fn impossible_config_serves_the_fallback() {
        // 3x3 leaves a single interior cell: nowhere to put a box.
        let config = GeneratorConfig {
            width: 3,
            height: 3,
            box_count: 1,
            steps: Some(10),
        };
        let level = generate(0, config);
        assert_eq!(level, fallback_level());
        assert_structurally_valid(&level);
    }

    #[test]
    fn attempt_cap_is_honored_cheaply() {
        let config = GeneratorConfig {
            width: 3,
            height: 3,
            box_count: 1,
            steps: Some(10),
        };
        let limits = RetryLimits {
            max_attempts: 5,
            ..RetryLimits::default()
        };
        assert_eq!(generate_with_limits(9, config, limits), fallback_level());
    }

    #[test]
    fn fallback_is_one_push_from_solved() {
        let level = fallback_level();
        assert_structurally_valid(&level);

        let mut player = level.player;
        let mut boxes = level.boxes.clone();
        let walk = [
            Direction::Down,
            Direction::Down,
            Direction::Right,
            Direction::Right,
            Direction::Right,
            Direction::Up,
        ];
        for dir in walk {
            push_step(&level, &mut player, &mut boxes, dir);
        }
        assert_eq!(player, Vec2 { x: 4, y: 2 });

        push_step(&level, &mut player, &mut boxes, Direction::Left);
        assert_eq!(boxes, vec![Vec2 { x: 2, y: 2 }]);
        assert!(
            LevelData {
                boxes,
                ..level.clone()
            }
            .is_solved()
        );
    }

    #[test]
    fn difficulty_presets_map_to_fixed_configs() {
        assert_eq!(
            GeneratorConfig::from(Difficulty::Easy),
            GeneratorConfig {
                width: 8,
                height: 8,
                box_count: 2,
                steps: Some(100),
            }
        );
        assert_eq!(
            GeneratorConfig::from(Difficulty::Medium),
            GeneratorConfig {
                width: 10,
                height: 10,
                box_count: 3,
                steps: Some(300),
            }
        );
        assert_eq!(
            GeneratorConfig::from(Difficulty::Hard),
            GeneratorConfig {
                width: 12,
                height: 12,
                box_count: 4,
                steps: Some(500),
            }
        );
    }

    #[test]
    fn default_step_budget_scales_with_box_count() {
        let config = GeneratorConfig {
            width: 9,
            height: 9,
            box_count: 3,
            steps: None,
        };
        assert_eq!(config.steps_or_default(), 500);
        assert_eq!(
            GeneratorConfig {
                steps: Some(50),
                ..config
            }
            .steps_or_default(),
            50
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn any_seed_yields_a_valid_deterministic_level(
            seed in any::<u64>(),
            width in 6i32..=10,
            height in 6i32..=10,
            box_count in 1usize..=3,
        ) {
            let config = GeneratorConfig { width, height, box_count, steps: None };
            let level = generate(seed, config);
            assert_structurally_valid(&level);
            prop_assert_eq!(&level, &generate(seed, config));
        }
    }
}
