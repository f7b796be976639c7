use crate::core::{
    Cell, DENSE_OBSTACLE_DENSITY, Lcg, OBSTACLE_JITTER, SPARSE_OBSTACLE_DENSITY,
};

/// Bordered rectangle with random interior walls. Density drops for
/// single-box boards so the lone box has room to travel. Interior
/// connectivity is not guaranteed; a choked board simply fails the
/// scramble acceptance check and the attempt is retried.
pub fn synthesize_terrain(width: i32, height: i32, box_count: usize, rng: &mut Lcg) -> Vec<Vec<Cell>> {
    let mut map = vec![vec![Cell::Wall; width as usize]; height as usize];
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            map[y as usize][x as usize] = Cell::Floor;
        }
    }

    let density = if box_count == 1 {
        SPARSE_OBSTACLE_DENSITY
    } else {
        DENSE_OBSTACLE_DENSITY
    };
    let base = (f64::from(width) * f64::from(height) * density) as i32;
    let obstacle_count = base + rng.next_int(-OBSTACLE_JITTER, OBSTACLE_JITTER);

    // Landing on an existing wall is a harmless no-op.
    for _ in 0..obstacle_count.max(0) {
        let x = rng.next_int(1, width - 2);
        let y = rng.next_int(1, height - 2);
        map[y as usize][x as usize] = Cell::Wall;
    }

    map
}
