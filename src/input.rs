use crossterm::event::KeyCode;

/// Normalized input vocabulary shared by all three games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    /// Launch / start / confirm, depending on the game's state.
    Action,
    Pause,
}

/// Map a key press to the symbolic vocabulary. Keys outside the fixed set
/// yield nothing and are left to the menu layer.
pub fn control_for_key(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Control::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Control::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Control::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Control::Right),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Control::Action),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Control::Pause),
        _ => None,
    }
}

/// A grid/board direction, extracted from the directional controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn from_control(control: Control) -> Option<Direction> {
        match control {
            Control::Up => Some(Direction::Up),
            Control::Down => Some(Direction::Down),
            Control::Left => Some(Direction::Left),
            Control::Right => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit step as (dx, dy) with y growing downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Dominant-axis displacement, in surface units, a press-release pair must
/// exceed to count as a swipe.
pub const SWIPE_MIN_DISTANCE: f32 = 50.0;

/// Turns a press → release pair of surface positions into a direction.
///
/// The dominant axis decides the direction; ties and short gestures yield
/// nothing. Callers pass positions already scaled to the drawing surface so
/// the distance threshold keeps its meaning on any terminal size.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    origin: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
    }

    pub fn end(&mut self, x: f32, y: f32) -> Option<Control> {
        let (ox, oy) = self.origin.take()?;
        let dx = x - ox;
        let dy = y - oy;
        if dx.abs() > dy.abs() {
            // Strictly greater: a gesture of exactly the threshold is a tap
            if dx.abs() <= SWIPE_MIN_DISTANCE {
                return None;
            }
            Some(if dx > 0.0 {
                Control::Right
            } else {
                Control::Left
            })
        } else if dy.abs() > dx.abs() {
            if dy.abs() <= SWIPE_MIN_DISTANCE {
                return None;
            }
            Some(if dy > 0.0 { Control::Down } else { Control::Up })
        } else {
            // Perfect diagonal: no dominant axis
            None
        }
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(control_for_key(KeyCode::Up), Some(Control::Up));
        assert_eq!(control_for_key(KeyCode::Char('a')), Some(Control::Left));
        assert_eq!(control_for_key(KeyCode::Char(' ')), Some(Control::Action));
        assert_eq!(control_for_key(KeyCode::Char('p')), Some(Control::Pause));
        assert_eq!(control_for_key(KeyCode::Char('x')), None);
        assert_eq!(control_for_key(KeyCode::Esc), None);
    }

    #[test]
    fn test_swipe_directions() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.end(200.0, 110.0), Some(Control::Right));

        swipe.begin(400.0, 300.0);
        assert_eq!(swipe.end(400.0, 180.0), Some(Control::Up));

        swipe.begin(400.0, 300.0);
        assert_eq!(swipe.end(320.0, 290.0), Some(Control::Left));
    }

    #[test]
    fn test_short_or_ambiguous_swipes_yield_nothing() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.end(130.0, 100.0), None);

        // Exactly the threshold is still too short; just past it counts
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.end(100.0 + SWIPE_MIN_DISTANCE, 100.0), None);
        swipe.begin(100.0, 100.0);
        assert_eq!(
            swipe.end(100.0 + SWIPE_MIN_DISTANCE + 0.1, 100.0),
            Some(Control::Right)
        );

        // Exact diagonal has no dominant axis
        swipe.begin(0.0, 0.0);
        assert_eq!(swipe.end(80.0, 80.0), None);

        // Release without a press
        assert_eq!(swipe.end(500.0, 500.0), None);
    }

    #[test]
    fn test_swipe_origin_is_consumed() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(0.0, 0.0);
        assert_eq!(swipe.end(200.0, 0.0), Some(Control::Right));
        assert_eq!(swipe.end(400.0, 0.0), None);
    }
}
