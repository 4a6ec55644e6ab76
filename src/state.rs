/// The five phases every game in the suite moves through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Start,
    Playing,
    Paused,
    GameOver,
    Won,
}

/// Shared state machine composed into each game engine.
///
/// Only the legal edges ever fire; anything else is a silent no-op so
/// callers don't need to pre-check before requesting a transition.
#[derive(Clone, Copy, Debug)]
pub struct StateMachine {
    current: GameStatus,
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            current: GameStatus::Start,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.current == GameStatus::Playing
    }

    /// Start → Playing.
    pub fn start(&mut self) -> bool {
        self.transition(GameStatus::Start, GameStatus::Playing)
    }

    /// Playing → Paused.
    pub fn pause(&mut self) -> bool {
        self.transition(GameStatus::Playing, GameStatus::Paused)
    }

    /// Paused → Playing.
    pub fn resume(&mut self) -> bool {
        self.transition(GameStatus::Paused, GameStatus::Playing)
    }

    /// Playing → GameOver.
    pub fn end(&mut self) -> bool {
        self.transition(GameStatus::Playing, GameStatus::GameOver)
    }

    /// Playing → Won.
    pub fn win(&mut self) -> bool {
        self.transition(GameStatus::Playing, GameStatus::Won)
    }

    /// Won → Playing, for games that support post-win play.
    pub fn continue_playing(&mut self) -> bool {
        self.transition(GameStatus::Won, GameStatus::Playing)
    }

    /// Any state → Start.
    pub fn reset(&mut self) {
        self.current = GameStatus::Start;
    }

    fn transition(&mut self, from: GameStatus, to: GameStatus) -> bool {
        if self.current == from {
            self.current = to;
            true
        } else {
            false
        }
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_path() {
        let mut sm = StateMachine::new();
        assert_eq!(sm.status(), GameStatus::Start);
        assert!(sm.start());
        assert!(sm.pause());
        assert!(sm.resume());
        assert!(sm.win());
        assert!(sm.continue_playing());
        assert!(sm.end());
        sm.reset();
        assert_eq!(sm.status(), GameStatus::Start);
    }

    #[test]
    fn test_illegal_transitions_are_noops() {
        let mut sm = StateMachine::new();
        assert!(!sm.pause());
        assert!(!sm.resume());
        assert!(!sm.end());
        assert!(!sm.win());
        assert!(!sm.continue_playing());
        assert_eq!(sm.status(), GameStatus::Start);

        sm.start();
        sm.end();
        // GameOver is terminal until reset
        assert!(!sm.start());
        assert!(!sm.pause());
        assert!(!sm.win());
        assert_eq!(sm.status(), GameStatus::GameOver);
        sm.reset();
        assert!(sm.start());
    }

    #[test]
    fn test_continue_only_from_won() {
        let mut sm = StateMachine::new();
        sm.start();
        assert!(!sm.continue_playing());
        sm.win();
        assert!(sm.continue_playing());
        assert!(sm.is_playing());
    }
}
