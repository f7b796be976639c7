// Text notation for levels: '#' wall, ' ' floor, '.' target, '$' box,
// '*' box on target, '@' player, '+' player on target.

use crate::core::Cell::{Floor, Target, Wall};
use crate::core::{Cell, LevelData, Vec2};

pub fn render_level_to_string(level: &LevelData) -> String {
    let mut result = String::new();
    for (y, row) in level.map.iter().enumerate() {
        for (x, &c) in row.iter().enumerate() {
            let pos = Vec2 {
                x: x as i32,
                y: y as i32,
            };
            let has_player = pos == level.player;
            let has_box = level.boxes.contains(&pos);
            let ch = match c {
                Wall => '#',
                Floor => {
                    if has_player {
                        '@'
                    } else if has_box {
                        '$'
                    } else {
                        ' '
                    }
                }
                Target => {
                    if has_player {
                        '+'
                    } else if has_box {
                        '*'
                    } else {
                        '.'
                    }
                }
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

/// Reads the same notation back. Unknown characters become floor; short
/// rows are padded with floor to the widest line.
pub fn parse_level(s: &str) -> LevelData {
    let mut map: Vec<Vec<Cell>> = Vec::new();
    let mut player = Vec2 { x: 0, y: 0 };
    let mut boxes: Vec<Vec2> = Vec::new();
    let max_width = s.lines().map(|line| line.len()).max().unwrap_or(0);

    let mut y = 0;
    for line in s.lines() {
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for (x, ch) in line.chars().enumerate() {
            let pos = Vec2 { x: x as i32, y };
            let c = match ch {
                '#' => Wall,
                '.' => Target,
                '$' => {
                    boxes.push(pos);
                    Floor
                }
                '*' => {
                    boxes.push(pos);
                    Target
                }
                '@' => {
                    player = pos;
                    Floor
                }
                '+' => {
                    player = pos;
                    Target
                }
                _ => Floor,
            };
            row.push(c);
        }
        while row.len() < max_width {
            row.push(Floor);
        }
        map.push(row);
        y += 1;
    }

    LevelData { map, player, boxes }
}
