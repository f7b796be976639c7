use crate::core::{Cell, Direction, Lcg, PULL_BIAS_PERCENT, Vec2, is_walkable};

/// One effective step of the scramble walk, in the player's movement
/// direction. Blocked steps are not recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrambleMove {
    /// The player stepped away from a box, dragging it into the vacated cell.
    Pull(Direction),
    /// The player stepped with no box contact.
    Walk(Direction),
}

#[derive(Clone, Debug)]
pub struct ScrambleOutcome {
    pub player: Vec2,
    pub boxes: Vec<Vec2>,
    pub moves: Vec<ScrambleMove>,
    pub pull_count: u32,
}

struct PullCandidate {
    box_index: usize,
    back: Vec2,
    dir: Direction,
}

/// Random walk backwards from the solved state. A pull is the exact
/// time-reversal of a push, so every state this reaches is solvable:
/// replaying the recorded moves last-to-first as pushes returns each box
/// to its target.
pub fn scramble(
    map: &[Vec<Cell>],
    start_player: Vec2,
    start_boxes: &[Vec2],
    steps: u32,
    rng: &mut Lcg,
) -> ScrambleOutcome {
    let mut player = start_player;
    let mut boxes = start_boxes.to_vec();
    let mut moves = Vec::new();
    let mut pull_count = 0;

    for _ in 0..steps {
        let candidates: Vec<PullCandidate> = boxes
            .iter()
            .enumerate()
            .filter_map(|(box_index, &b)| {
                let delta = player - b;
                if delta.x.abs() + delta.y.abs() != 1 {
                    return None;
                }
                // The cell the player backs into must be open ground.
                let back = player + delta;
                if !is_walkable(map, back) || boxes.contains(&back) {
                    return None;
                }
                let dir = Direction::from_offset(delta)?;
                Some(PullCandidate {
                    box_index,
                    back,
                    dir,
                })
            })
            .collect();

        // Pulling is heavily favored over wandering; free movement alone
        // would leave the boxes clustered around their targets.
        if !candidates.is_empty() && rng.next_int(0, 100) < PULL_BIAS_PERCENT {
            let pick = &candidates[rng.next_int(0, candidates.len() as i32 - 1) as usize];
            boxes[pick.box_index] = player;
            player = pick.back;
            moves.push(ScrambleMove::Pull(pick.dir));
            pull_count += 1;
            continue;
        }

        let dir = Direction::ALL[rng.next_int(0, 3) as usize];
        let next = player + dir.offset();
        if is_walkable(map, next) && !boxes.contains(&next) {
            player = next;
            moves.push(ScrambleMove::Walk(dir));
        }
    }

    ScrambleOutcome {
        player,
        boxes,
        moves,
        pull_count,
    }
}
