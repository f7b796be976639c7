use crate::core::{AttemptError, Cell, Lcg, RetryLimits, Vec2};

pub struct Placement {
    pub player: Vec2,
    pub boxes: Vec<Vec2>,
}

/// Samples random interior coordinates until a bare floor cell turns up.
/// (1, 1) is the soft fallback when every sample misses; a bad spot gets
/// caught by the collision checks downstream and aborts the attempt.
fn get_empty_spot(map: &[Vec<Cell>], samples: u32, rng: &mut Lcg) -> Vec2 {
    let width = map[0].len() as i32;
    let height = map.len() as i32;
    for _ in 0..samples {
        let x = rng.next_int(1, width - 2);
        let y = rng.next_int(1, height - 2);
        if map[y as usize][x as usize] == Cell::Floor {
            return Vec2 { x, y };
        }
    }
    Vec2 { x: 1, y: 1 }
}

/// Drops the player and `box_count` boxes onto distinct floor cells. Each
/// box cell doubles as its own target, so the board starts solved and the
/// scramble can walk it backwards from there.
pub fn place_entities(
    map: &mut [Vec<Cell>],
    box_count: usize,
    limits: &RetryLimits,
    rng: &mut Lcg,
) -> Result<Placement, AttemptError> {
    let player = get_empty_spot(map, limits.spot_samples, rng);

    let mut boxes: Vec<Vec2> = Vec::with_capacity(box_count);
    for box_index in 0..box_count {
        let mut pos = get_empty_spot(map, limits.spot_samples, rng);
        let mut tries = 0;
        while (pos == player || boxes.contains(&pos)) && tries < limits.collision_retries {
            pos = get_empty_spot(map, limits.spot_samples, rng);
            tries += 1;
        }
        if tries >= limits.collision_retries {
            return Err(AttemptError::PlacementExhausted {
                box_index,
                retries: tries,
            });
        }
        map[pos.y as usize][pos.x as usize] = Cell::Target;
        boxes.push(pos);
    }

    Ok(Placement { player, boxes })
}
