use std::fs;
use std::path::PathBuf;

/// Identity of each game in the suite, used as the persistence key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameId {
    Brickrush,
    Puzzle1024,
    Snake,
}

impl GameId {
    pub fn storage_key(&self) -> &'static str {
        match self {
            GameId::Brickrush => "brickrush",
            GameId::Puzzle1024 => "puzzle1024",
            GameId::Snake => "snake",
        }
    }

}

/// Best score for one game, write-through persisted as a decimal string in
/// a `<key>.score` file next to the executable.
///
/// Persistence is best-effort: a missing or unwritable file degrades to
/// session-only tracking, a corrupt file reads as 0. Nothing here can fail
/// the caller.
pub struct BestScore {
    best: u32,
    path: Option<PathBuf>,
}

impl BestScore {
    pub fn load(id: GameId) -> Self {
        let path = Self::score_path(id);
        let best = path.as_deref().map_or(0, |p| {
            fs::read_to_string(p)
                .ok()
                .and_then(|s| s.trim().parse::<u32>().ok())
                .unwrap_or(0)
        });
        Self { best, path }
    }

    /// Memory-only store, used when no filesystem location is available
    /// (and by tests).
    pub fn in_memory() -> Self {
        Self {
            best: 0,
            path: None,
        }
    }

    fn score_path(id: GameId) -> Option<PathBuf> {
        // Store next to the executable
        let exe = std::env::current_exe().ok()?;
        let dir = exe.parent()?;
        Some(dir.join(format!("{}.score", id.storage_key())))
    }

    pub fn get(&self) -> u32 {
        self.best
    }

    /// Persist `candidate` if it beats the stored best. Returns true only
    /// on strict improvement; otherwise nothing is written.
    pub fn record(&mut self, candidate: u32) -> bool {
        if candidate <= self.best {
            return false;
        }
        self.best = candidate;
        if let Some(path) = &self.path {
            let _ = fs::write(path, candidate.to_string());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_contract() {
        let mut store = BestScore::in_memory();
        assert_eq!(store.get(), 0);
        assert!(store.record(10));
        assert_eq!(store.get(), 10);
        // Equal and lower candidates are rejected without clobbering
        assert!(!store.record(10));
        assert!(!store.record(5));
        assert_eq!(store.get(), 10);
        assert!(store.record(11));
        assert_eq!(store.get(), 11);
    }

    #[test]
    fn test_zero_never_improves() {
        let mut store = BestScore::in_memory();
        assert!(!store.record(0));
        assert_eq!(store.get(), 0);
    }

    #[test]
    fn test_storage_keys_are_distinct() {
        let keys = [
            GameId::Brickrush.storage_key(),
            GameId::Puzzle1024.storage_key(),
            GameId::Snake.storage_key(),
        ];
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
        assert_ne!(keys[0], keys[2]);
    }
}
