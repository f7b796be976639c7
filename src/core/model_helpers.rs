use crate::core::{Cell, Difficulty, Direction, GeneratorConfig, LevelData, RetryLimits, Vec2};

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Direction {
    /// Order matters: the scramble indexes into this with its roll.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn from_offset(delta: Vec2) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.offset() == delta)
    }
}

impl Cell {
    pub fn is_walkable(self) -> bool {
        self != Cell::Wall
    }
}

pub fn cell_at(map: &[Vec<Cell>], pos: Vec2) -> Option<Cell> {
    if pos.x < 0 || pos.y < 0 {
        return None;
    }
    map.get(pos.y as usize)?.get(pos.x as usize).copied()
}

/// In bounds and not a wall. Targets count as walkable ground.
pub fn is_walkable(map: &[Vec<Cell>], pos: Vec2) -> bool {
    cell_at(map, pos).is_some_and(Cell::is_walkable)
}

impl LevelData {
    pub fn width(&self) -> i32 {
        self.map.first().map_or(0, |row| row.len() as i32)
    }

    pub fn height(&self) -> i32 {
        self.map.len() as i32
    }

    pub fn targets(&self) -> Vec<Vec2> {
        let mut targets = Vec::new();
        for (y, row) in self.map.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                if c == Cell::Target {
                    targets.push(Vec2 {
                        x: x as i32,
                        y: y as i32,
                    });
                }
            }
        }
        targets
    }

    pub fn is_walkable(&self, pos: Vec2) -> bool {
        is_walkable(&self.map, pos)
    }

    pub fn has_box_at(&self, pos: Vec2) -> bool {
        self.boxes.contains(&pos)
    }

    pub fn is_solved(&self) -> bool {
        self.targets().iter().all(|t| self.boxes.contains(t))
    }
}

impl GeneratorConfig {
    pub fn steps_or_default(&self) -> u32 {
        self.steps.unwrap_or(self.box_count as u32 * 100 + 200)
    }
}

impl From<Difficulty> for GeneratorConfig {
    fn from(difficulty: Difficulty) -> GeneratorConfig {
        match difficulty {
            Difficulty::Easy => GeneratorConfig {
                width: 8,
                height: 8,
                box_count: 2,
                steps: Some(100),
            },
            Difficulty::Medium => GeneratorConfig {
                width: 10,
                height: 10,
                box_count: 3,
                steps: Some(300),
            },
            Difficulty::Hard => GeneratorConfig {
                width: 12,
                height: 12,
                box_count: 4,
                steps: Some(500),
            },
        }
    }
}

impl Default for RetryLimits {
    fn default() -> RetryLimits {
        RetryLimits {
            spot_samples: 100,
            collision_retries: 50,
            max_attempts: 500,
        }
    }
}
