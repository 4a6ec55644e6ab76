use rand::Rng;
use ratatui::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrickKind {
    Normal,
    Steel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    MultiBall,
    WidePaddle,
}

/// One brick in a level layout: grid position plus static attributes.
/// Pixel placement is the engine's job.
#[derive(Clone, Copy, Debug)]
pub struct BrickSpec {
    pub row: u16,
    pub col: u16,
    pub kind: BrickKind,
    pub color: Color,
    pub power_up: Option<PowerUpKind>,
}

pub const LEVEL_COUNT: usize = 8;

const STEEL_COLOR: Color = Color::Rgb(107, 114, 128);

fn push_row<R: Rng>(
    out: &mut Vec<BrickSpec>,
    rng: &mut R,
    row: u16,
    cols: &[u16],
    kind: BrickKind,
    color: Color,
    power_cols: &[u16],
) {
    for &col in cols {
        let power_up = if power_cols.contains(&col) {
            // Which power-up a brick hides is rolled per session
            Some(if rng.gen_bool(0.5) {
                PowerUpKind::MultiBall
            } else {
                PowerUpKind::WidePaddle
            })
        } else {
            None
        };
        out.push(BrickSpec {
            row,
            col,
            kind,
            color,
            power_up,
        });
    }
}

/// Build the brick layout for a 1-based level number. Returns None past the
/// last level.
pub fn build_level<R: Rng>(level: usize, rng: &mut R) -> Option<Vec<BrickSpec>> {
    use BrickKind::{Normal, Steel};

    let full: Vec<u16> = (0..10).collect();
    let mut bricks = Vec::new();
    let b = &mut bricks;

    match level {
        // Simple rows
        1 => {
            push_row(b, rng, 0, &full, Normal, Color::Rgb(6, 182, 212), &[4, 5]);
            push_row(b, rng, 1, &full, Normal, Color::Rgb(14, 165, 233), &[]);
            push_row(b, rng, 2, &full, Normal, Color::Rgb(56, 189, 248), &[]);
        }
        // Pyramid
        2 => {
            push_row(b, rng, 0, &[4, 5], Normal, Color::Rgb(245, 158, 11), &[]);
            push_row(b, rng, 1, &[3, 4, 5, 6], Normal, Color::Rgb(245, 158, 11), &[4]);
            push_row(b, rng, 2, &[2, 3, 4, 5, 6, 7], Normal, Color::Rgb(251, 146, 60), &[]);
            push_row(b, rng, 3, &[1, 2, 3, 4, 5, 6, 7, 8], Normal, Color::Rgb(251, 146, 60), &[5]);
            push_row(b, rng, 4, &full, Normal, Color::Rgb(251, 191, 36), &[]);
        }
        // Diamond with a steel core
        3 => {
            push_row(b, rng, 0, &[4, 5], Normal, Color::Rgb(16, 185, 129), &[]);
            push_row(b, rng, 1, &[3, 4, 5, 6], Normal, Color::Rgb(16, 185, 129), &[]);
            push_row(b, rng, 2, &[2, 3, 4, 5, 6, 7], Steel, STEEL_COLOR, &[]);
            push_row(b, rng, 3, &[3, 4, 5, 6], Normal, Color::Rgb(52, 211, 153), &[]);
            push_row(b, rng, 4, &[4, 5], Normal, Color::Rgb(52, 211, 153), &[4]);
        }
        // Checkerboard
        4 => {
            push_row(b, rng, 0, &[0, 2, 4, 6, 8], Normal, Color::Rgb(236, 72, 153), &[]);
            push_row(b, rng, 1, &[1, 3, 5, 7, 9], Normal, Color::Rgb(244, 114, 182), &[5]);
            push_row(b, rng, 2, &[0, 2, 4, 6, 8], Steel, STEEL_COLOR, &[]);
            push_row(b, rng, 3, &[1, 3, 5, 7, 9], Normal, Color::Rgb(244, 114, 182), &[3]);
            push_row(b, rng, 4, &[0, 2, 4, 6, 8], Normal, Color::Rgb(236, 72, 153), &[]);
        }
        // Castle
        5 => {
            push_row(b, rng, 0, &[0, 1, 3, 4, 5, 6, 8, 9], Steel, STEEL_COLOR, &[]);
            push_row(b, rng, 1, &full, Normal, Color::Rgb(139, 92, 246), &[5]);
            push_row(b, rng, 2, &full, Normal, Color::Rgb(167, 139, 250), &[]);
            push_row(b, rng, 3, &[1, 2, 3, 4, 5, 6, 7, 8], Normal, Color::Rgb(196, 181, 253), &[4, 6]);
            push_row(b, rng, 4, &[2, 3, 4, 5, 6, 7], Normal, Color::Rgb(221, 214, 254), &[]);
        }
        // Wave pattern
        6 => {
            push_row(b, rng, 0, &[1, 2, 3, 7, 8, 9], Normal, Color::Rgb(20, 184, 166), &[]);
            push_row(b, rng, 1, &[0, 1, 4, 5, 6, 9], Normal, Color::Rgb(45, 212, 191), &[5]);
            push_row(b, rng, 2, &[0, 2, 3, 4, 6, 7, 8], Steel, STEEL_COLOR, &[]);
            push_row(b, rng, 3, &[1, 2, 5, 6, 7, 8], Normal, Color::Rgb(94, 234, 212), &[6]);
            push_row(b, rng, 4, &[0, 3, 4, 5, 9], Normal, Color::Rgb(153, 246, 228), &[]);
        }
        // X pattern
        7 => {
            push_row(b, rng, 0, &[0, 1, 8, 9], Normal, Color::Rgb(249, 115, 22), &[]);
            push_row(b, rng, 1, &[2, 3, 6, 7], Normal, Color::Rgb(251, 146, 60), &[3]);
            push_row(b, rng, 2, &[4, 5], Steel, STEEL_COLOR, &[]);
            push_row(b, rng, 3, &[2, 3, 6, 7], Normal, Color::Rgb(253, 186, 116), &[6]);
            push_row(b, rng, 4, &[0, 1, 8, 9], Normal, Color::Rgb(254, 215, 170), &[]);
            push_row(b, rng, 5, &[2, 3, 6, 7], Normal, Color::Rgb(251, 146, 60), &[]);
            push_row(b, rng, 6, &[4, 5], Normal, Color::Rgb(249, 115, 22), &[4]);
        }
        // Final challenge
        8 => {
            push_row(b, rng, 0, &full, Steel, STEEL_COLOR, &[]);
            push_row(b, rng, 1, &[0, 2, 3, 4, 5, 6, 7, 9], Normal, Color::Rgb(239, 68, 68), &[4, 5]);
            push_row(b, rng, 2, &[0, 1, 3, 4, 5, 6, 8, 9], Normal, Color::Rgb(248, 113, 113), &[]);
            push_row(b, rng, 3, &[0, 2, 3, 4, 5, 6, 7, 9], Steel, STEEL_COLOR, &[]);
            push_row(b, rng, 4, &[0, 1, 2, 4, 5, 7, 8, 9], Normal, Color::Rgb(252, 165, 165), &[5]);
            push_row(b, rng, 5, &[1, 2, 3, 4, 5, 6, 7, 8], Normal, Color::Rgb(254, 202, 202), &[]);
            push_row(b, rng, 6, &[2, 3, 4, 5, 6, 7], Steel, STEEL_COLOR, &[]);
            push_row(b, rng, 7, &[3, 4, 5, 6], Normal, Color::Rgb(239, 68, 68), &[4]);
        }
        _ => return None,
    }

    Some(bricks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_level_builds() {
        let mut rng = StdRng::seed_from_u64(7);
        for level in 1..=LEVEL_COUNT {
            let bricks = build_level(level, &mut rng).unwrap();
            assert!(!bricks.is_empty(), "level {} is empty", level);
            // Every level must be completable: at least one normal brick
            assert!(bricks.iter().any(|s| s.kind == BrickKind::Normal));
        }
        assert!(build_level(LEVEL_COUNT + 1, &mut rng).is_none());
        assert!(build_level(0, &mut rng).is_none());
    }

    #[test]
    fn test_bricks_fit_the_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        for level in 1..=LEVEL_COUNT {
            for spec in build_level(level, &mut rng).unwrap() {
                assert!(spec.col < 10);
                assert!(spec.row < 8);
            }
        }
    }
}
