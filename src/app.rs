use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal;
use ratatui::style::Color;

use crate::games::brickrush::{Brickrush, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::games::puzzle::Puzzle1024;
use crate::games::snake::Snake;
use crate::games::Game;
use crate::input::{control_for_key, Control, SwipeTracker};

const GAME_COUNT: usize = 3;

#[derive(Clone, Copy, PartialEq)]
pub enum Tab {
    Home,
    Brickrush,
    Puzzle,
    Snake,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Home, Tab::Brickrush, Tab::Puzzle, Tab::Snake]
    }

    pub fn title(&self) -> &str {
        match self {
            Tab::Home => " Home ",
            Tab::Brickrush => " Brickrush ",
            Tab::Puzzle => " 1024 ",
            Tab::Snake => " Snake ",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Brickrush => 1,
            Tab::Puzzle => 2,
            Tab::Snake => 3,
        }
    }

    /// Accent color, matching the palette of each game's own renderer.
    pub fn accent(&self) -> Color {
        match self {
            Tab::Home => Color::Rgb(170, 160, 255),
            Tab::Brickrush => Color::Rgb(6, 182, 212),
            Tab::Puzzle => Color::Rgb(251, 191, 36),
            Tab::Snake => Color::Rgb(74, 222, 128),
        }
    }

    fn for_game(idx: usize) -> Tab {
        match idx {
            0 => Tab::Brickrush,
            1 => Tab::Puzzle,
            2 => Tab::Snake,
            _ => Tab::Home,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub current_tab: Tab,
    pub selected_game: usize, // 0-2 for home screen game selection
    pub brickrush: Brickrush,
    pub puzzle: Puzzle1024,
    pub snake: Snake,
    swipe: SwipeTracker,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            current_tab: Tab::Home,
            selected_game: 0,
            brickrush: Brickrush::new(),
            puzzle: Puzzle1024::new(),
            snake: Snake::new(),
            swipe: SwipeTracker::new(),
        }
    }

    fn active_game_mut(&mut self) -> Option<&mut dyn Game> {
        match self.current_tab {
            Tab::Home => None,
            Tab::Brickrush => Some(&mut self.brickrush),
            Tab::Puzzle => Some(&mut self.puzzle),
            Tab::Snake => Some(&mut self.snake),
        }
    }

    pub fn on_tick(&mut self, dt: f32) {
        if let Some(game) = self.active_game_mut() {
            game.update(dt);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                if matches!(self.current_tab, Tab::Home) {
                    self.should_quit = true;
                    return;
                }
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.prev_tab();
                } else {
                    self.next_tab();
                }
                return;
            }
            KeyCode::BackTab => {
                self.prev_tab();
                return;
            }
            KeyCode::Esc => {
                if !matches!(self.current_tab, Tab::Home) {
                    self.swipe.cancel();
                    self.current_tab = Tab::Home;
                    return;
                }
            }
            _ => {}
        }

        // Home screen shortcuts and navigation
        if matches!(self.current_tab, Tab::Home) && key.modifiers.is_empty() {
            match key.code {
                KeyCode::Char('1') => {
                    self.current_tab = Tab::Brickrush;
                    return;
                }
                KeyCode::Char('2') => {
                    self.current_tab = Tab::Puzzle;
                    return;
                }
                KeyCode::Char('3') => {
                    self.current_tab = Tab::Snake;
                    return;
                }
                // One row of three tiles
                KeyCode::Right | KeyCode::Down => {
                    self.selected_game = (self.selected_game + 1) % GAME_COUNT;
                    return;
                }
                KeyCode::Left | KeyCode::Up => {
                    self.selected_game = (self.selected_game + GAME_COUNT - 1) % GAME_COUNT;
                    return;
                }
                // Enter launches the selected game
                KeyCode::Enter => {
                    self.current_tab = Tab::for_game(self.selected_game);
                    return;
                }
                _ => {}
            }
        }

        // 'r' restarts the active game from scratch
        if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
            && !matches!(self.current_tab, Tab::Home)
        {
            if let Some(game) = self.active_game_mut() {
                game.reset();
            }
            return;
        }

        // Forward to the active game's control vocabulary
        if let Some(control) = control_for_key(key.code) {
            if let Some(game) = self.active_game_mut() {
                game.handle_control(control);
            }
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = surface_position(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match self.current_tab {
                // Tap launches, and the press position drags the paddle along
                Tab::Brickrush => {
                    self.brickrush.track_pointer(x);
                    self.brickrush.handle_control(Control::Action);
                }
                Tab::Puzzle | Tab::Snake => self.swipe.begin(x, y),
                Tab::Home => {}
            },
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                if self.current_tab == Tab::Brickrush {
                    self.brickrush.track_pointer(x);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(control) = self.swipe.end(x, y) {
                    if let Some(game) = self.active_game_mut() {
                        game.handle_control(control);
                    }
                }
            }
            _ => {}
        }
    }

    fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = self.current_tab.index();
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = self.current_tab.index();
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }
}

/// Map a terminal cell to the games' nominal drawing surface so gesture
/// thresholds and paddle tracking behave the same on any terminal size.
fn surface_position(column: u16, row: u16) -> (f32, f32) {
    let (cols, rows) = terminal::size().unwrap_or((80, 24));
    let x = (column as f32 + 0.5) / cols.max(1) as f32 * SURFACE_WIDTH;
    let y = (row as f32 + 0.5) / rows.max(1) as f32 * SURFACE_HEIGHT;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameStatus;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut app = App::new();
        assert_eq!(app.current_tab.index(), 0);
        for expected in [1, 2, 3, 0] {
            app.on_key(key(KeyCode::Tab));
            assert_eq!(app.current_tab.index(), expected);
        }
        app.on_key(key(KeyCode::BackTab));
        assert_eq!(app.current_tab.index(), 3);
    }

    #[test]
    fn test_each_tab_has_its_own_accent() {
        let accents: Vec<Color> = Tab::all().iter().map(|t| t.accent()).collect();
        for (i, a) in accents.iter().enumerate() {
            for b in accents.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        app.current_tab = Tab::Snake;
        // 'q' only quits from the home screen
        app.on_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);

        app.current_tab = Tab::Home;
        app.on_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new();
        app.current_tab = Tab::Brickrush;
        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        app.on_key(ctrl_c);
        assert!(app.should_quit);
    }

    #[test]
    fn test_home_selection_and_launch() {
        let mut app = App::new();
        app.on_key(key(KeyCode::Right));
        app.on_key(key(KeyCode::Right));
        assert_eq!(app.selected_game, 2);
        app.on_key(key(KeyCode::Right));
        assert_eq!(app.selected_game, 0);
        app.on_key(key(KeyCode::Left));
        assert_eq!(app.selected_game, 2);

        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.current_tab.index(), Tab::Snake.index());

        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.current_tab.index(), Tab::Home.index());
    }

    #[test]
    fn test_keys_reach_the_active_game() {
        let mut app = App::new();
        app.current_tab = Tab::Puzzle;
        assert_eq!(app.puzzle.status(), GameStatus::Start);
        app.on_key(key(KeyCode::Char(' ')));
        assert_eq!(app.puzzle.status(), GameStatus::Playing);
        // The other games are untouched
        assert_eq!(app.snake.status(), GameStatus::Start);
        assert_eq!(app.brickrush.status(), GameStatus::Start);
    }

    #[test]
    fn test_r_restarts_active_game() {
        let mut app = App::new();
        app.current_tab = Tab::Snake;
        app.on_key(key(KeyCode::Char(' ')));
        assert_eq!(app.snake.status(), GameStatus::Playing);
        app.on_key(key(KeyCode::Char('r')));
        assert_eq!(app.snake.status(), GameStatus::Start);
    }
}
