use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
// The board's Direction comes from the input layer; alias ratatui's.
use ratatui::layout::Direction as LayoutDirection;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::games::Game;
use crate::input::{Control, Direction};
use crate::scores::{BestScore, GameId};
use crate::state::{GameStatus, StateMachine};

const GRID_SIZE: usize = 4;
const WIN_VALUE: u32 = 1024;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tile {
    value: u32,
    /// Stable identity so the renderer can track a tile across moves.
    id: u64,
    /// Set on the tile a merge produced, cleared at the next move.
    merged: bool,
}

type Line4 = [Option<Tile>; GRID_SIZE];

pub struct Puzzle1024 {
    state: StateMachine,
    best: BestScore,
    rng: StdRng,
    grid: [Line4; GRID_SIZE],
    score: u32,
    has_won: bool,
    next_id: u64,
}

impl Puzzle1024 {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut game = Self {
            state: StateMachine::new(),
            best: BestScore::load(GameId::Puzzle1024),
            rng,
            grid: [[None; GRID_SIZE]; GRID_SIZE],
            score: 0,
            has_won: false,
            next_id: 0,
        };
        game.init_session();
        game
    }

    fn init_session(&mut self) {
        self.grid = [[None; GRID_SIZE]; GRID_SIZE];
        self.score = 0;
        self.has_won = false;
        self.spawn_tile();
        self.spawn_tile();
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                if self.grid[r][c].is_none() {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    /// Place one tile in a uniformly random empty cell: 2 at 90%, 4 at 10%.
    fn spawn_tile(&mut self) {
        let cells = self.empty_cells();
        if cells.is_empty() {
            return;
        }
        let (r, c) = cells[self.rng.gen_range(0..cells.len())];
        let value = if self.rng.gen_bool(0.9) { 2 } else { 4 };
        let id = self.alloc_id();
        self.grid[r][c] = Some(Tile {
            value,
            id,
            merged: false,
        });
    }

    /// Cell coordinates of one line in traversal order: the leading edge
    /// (the edge tiles slide toward) comes first.
    fn line_cells(dir: Direction, idx: usize) -> [(usize, usize); GRID_SIZE] {
        let mut cells = [(0, 0); GRID_SIZE];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = match dir {
                Direction::Left => (idx, i),
                Direction::Right => (idx, GRID_SIZE - 1 - i),
                Direction::Up => (i, idx),
                Direction::Down => (GRID_SIZE - 1 - i, idx),
            };
        }
        cells
    }

    /// Compact toward the front, merge equal adjacent pairs once, re-pad.
    /// Returns the new line, the score gained, and whether a merge hit the
    /// winning value.
    fn merge_line(&mut self, line: Line4) -> (Line4, u32, bool) {
        let tiles: Vec<Tile> = line.iter().flatten().copied().collect();
        let mut out: Line4 = [None; GRID_SIZE];
        let mut gained = 0;
        let mut hit_win = false;

        let mut i = 0;
        let mut pos = 0;
        while i < tiles.len() {
            if i + 1 < tiles.len() && tiles[i].value == tiles[i + 1].value {
                let value = tiles[i].value * 2;
                let id = self.alloc_id();
                out[pos] = Some(Tile {
                    value,
                    id,
                    merged: true,
                });
                gained += value;
                if value == WIN_VALUE {
                    hit_win = true;
                }
                i += 2;
            } else {
                out[pos] = Some(tiles[i]);
                i += 1;
            }
            pos += 1;
        }
        (out, gained, hit_win)
    }

    fn shift(&mut self, dir: Direction) {
        if !self.state.is_playing() {
            return;
        }

        for row in self.grid.iter_mut() {
            for tile in row.iter_mut().flatten() {
                tile.merged = false;
            }
        }

        let mut moved = false;
        let mut gained_total = 0;
        let mut won_now = false;

        for idx in 0..GRID_SIZE {
            let cells = Self::line_cells(dir, idx);
            let line = cells.map(|(r, c)| self.grid[r][c]);
            let (new_line, gained, hit_win) = self.merge_line(line);
            if values_of(&line) != values_of(&new_line) {
                moved = true;
            }
            gained_total += gained;
            won_now |= hit_win;
            for (i, (r, c)) in cells.iter().enumerate() {
                self.grid[*r][*c] = new_line[i];
            }
        }

        if !moved {
            return;
        }

        self.score += gained_total;
        self.spawn_tile();

        if won_now && !self.has_won {
            self.has_won = true;
            self.best.record(self.score);
            self.state.win();
        }
        if !self.can_move() {
            self.best.record(self.score);
            // A no-op if the win above already left Playing
            self.state.end();
        }
    }

    /// A move exists iff some cell is empty or two orthogonal neighbors
    /// share a value.
    fn can_move(&self) -> bool {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let Some(tile) = self.grid[r][c] else {
                    return true;
                };
                if c + 1 < GRID_SIZE
                    && self.grid[r][c + 1].is_some_and(|t| t.value == tile.value)
                {
                    return true;
                }
                if r + 1 < GRID_SIZE
                    && self.grid[r + 1][c].is_some_and(|t| t.value == tile.value)
                {
                    return true;
                }
            }
        }
        false
    }

    fn restart(&mut self) {
        self.state.reset();
        self.init_session();
        self.state.start();
    }

    #[cfg(test)]
    fn tile_sum(&self) -> u32 {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .map(|t| t.value)
            .sum()
    }

    #[cfg(test)]
    fn set_row(&mut self, r: usize, values: [u32; GRID_SIZE]) {
        for (c, &v) in values.iter().enumerate() {
            self.grid[r][c] = if v == 0 {
                None
            } else {
                let id = self.alloc_id();
                Some(Tile {
                    value: v,
                    id,
                    merged: false,
                })
            };
        }
    }
}

fn values_of(line: &Line4) -> [Option<u32>; GRID_SIZE] {
    line.map(|t| t.map(|t| t.value))
}

impl Game for Puzzle1024 {
    fn update(&mut self, _dt: f32) {
        // Purely input-driven: nothing advances between moves.
    }

    fn handle_control(&mut self, control: Control) {
        match self.state.status() {
            GameStatus::Start => {
                if control == Control::Action {
                    self.state.start();
                }
            }
            GameStatus::Playing => {
                if let Some(dir) = Direction::from_control(control) {
                    self.shift(dir);
                } else if control == Control::Pause {
                    self.state.pause();
                }
            }
            GameStatus::Paused => {
                if control == Control::Pause {
                    self.state.resume();
                }
            }
            GameStatus::Won => {
                // Keep playing past the winning tile
                if control == Control::Action {
                    self.state.continue_playing();
                }
            }
            GameStatus::GameOver => {
                if control == Control::Action {
                    self.restart();
                }
            }
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        render_puzzle(self, frame, area);
    }

    fn reset(&mut self) {
        self.state.reset();
        self.init_session();
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn best_score(&self) -> u32 {
        self.best.get()
    }

    fn status(&self) -> GameStatus {
        self.state.status()
    }
}

fn tile_colors(value: u32) -> (Color, Color) {
    // (background, foreground)
    match value {
        2 => (Color::Rgb(191, 219, 254), Color::Rgb(31, 41, 55)),
        4 => (Color::Rgb(147, 197, 253), Color::Rgb(31, 41, 55)),
        8 => (Color::Rgb(34, 211, 238), Color::White),
        16 => (Color::Rgb(6, 182, 212), Color::White),
        32 => (Color::Rgb(20, 184, 166), Color::White),
        64 => (Color::Rgb(13, 148, 136), Color::White),
        128 => (Color::Rgb(251, 146, 60), Color::White),
        256 => (Color::Rgb(249, 115, 22), Color::White),
        512 => (Color::Rgb(244, 114, 182), Color::White),
        1024 => (Color::Rgb(6, 182, 212), Color::White),
        2048 => (Color::Rgb(236, 72, 153), Color::White),
        _ => (Color::Rgb(168, 85, 247), Color::White),
    }
}

fn render_puzzle(game: &Puzzle1024, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(245, 158, 11)))
        .title(" 🔢 1024 ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(251, 191, 36))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);

    let status = Line::from(vec![
        Span::styled(
            format!(" Score: {} ", game.score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("🏆 Best: {} ", game.best.get()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled("Goal: 1024 ", Style::default().fg(Color::Green)),
    ]);
    frame.render_widget(Paragraph::new(status), chunks[0]);

    frame.render_widget(Paragraph::new(render_board(game, chunks[1])), chunks[1]);

    let help = match game.status() {
        GameStatus::Start => Line::from(vec![
            Span::styled(
                " SPACE Start ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "│ ←↑↓→ / Swipe Slide tiles │ P Pause │ Esc Menu",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        GameStatus::Playing => Line::from(vec![Span::styled(
            " ←↑↓→ / Swipe Slide tiles │ P Pause │ R Restart │ Esc Menu",
            Style::default().fg(Color::DarkGray),
        )]),
        GameStatus::Paused => Line::from(vec![Span::styled(
            " ⏸ PAUSED - Press P to resume ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        GameStatus::Won => Line::from(vec![
            Span::styled(
                " 🎉 1024! ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "SPACE Keep going │ R Restart │ Esc Menu",
                Style::default().fg(Color::Gray),
            ),
        ]),
        GameStatus::GameOver => Line::from(vec![
            Span::styled(
                " 💀 NO MOVES LEFT! ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("Score: {} │ SPACE Play again │ Esc Menu", game.score),
                Style::default().fg(Color::Gray),
            ),
        ]),
    };
    frame.render_widget(Paragraph::new(help), chunks[2]);
}

fn render_board(game: &Puzzle1024, area: Rect) -> Vec<Line<'static>> {
    let cell_w = ((area.width as usize / GRID_SIZE).min(12)).max(4);
    let cell_h = ((area.height as usize / GRID_SIZE).min(3)).max(1);
    let pad_left = (area.width as usize).saturating_sub(cell_w * GRID_SIZE) / 2;

    let mut lines = Vec::new();
    for r in 0..GRID_SIZE {
        for sub in 0..cell_h {
            let mut spans = vec![Span::raw(" ".repeat(pad_left))];
            for c in 0..GRID_SIZE {
                let span = match game.grid[r][c] {
                    Some(tile) => {
                        let (bg, fg) = tile_colors(tile.value);
                        let mut style = Style::default().bg(bg).fg(fg);
                        if tile.merged {
                            style = style.add_modifier(Modifier::BOLD);
                        }
                        let text = if sub == cell_h / 2 {
                            format!("{:^width$}", tile.value, width = cell_w)
                        } else {
                            " ".repeat(cell_w)
                        };
                        Span::styled(text, style)
                    }
                    None => Span::styled(
                        " ".repeat(cell_w),
                        Style::default().bg(Color::Rgb(30, 30, 45)),
                    ),
                };
                spans.push(span);
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_game() -> Puzzle1024 {
        let mut game = Puzzle1024::seeded(42);
        game.best = BestScore::in_memory();
        game.handle_control(Control::Action);
        assert_eq!(game.status(), GameStatus::Playing);
        game
    }

    fn clear_grid(game: &mut Puzzle1024) {
        game.grid = [[None; GRID_SIZE]; GRID_SIZE];
        game.score = 0;
    }

    #[test]
    fn test_session_starts_with_two_tiles() {
        let game = playing_game();
        let count = game.grid.iter().flatten().flatten().count();
        assert_eq!(count, 2);
        for tile in game.grid.iter().flatten().flatten() {
            assert!(tile.value == 2 || tile.value == 4);
        }
    }

    #[test]
    fn test_merge_pair_left() {
        let mut game = playing_game();
        clear_grid(&mut game);
        game.set_row(0, [2, 2, 0, 0]);

        game.shift(Direction::Left);

        assert_eq!(game.grid[0][0].unwrap().value, 4);
        assert!(game.grid[0][0].unwrap().merged);
        assert_eq!(game.score(), 4);
        // The merged tile plus exactly one spawned tile
        assert_eq!(game.grid.iter().flatten().flatten().count(), 2);
    }

    #[test]
    fn test_merge_consumes_pairs_once() {
        let mut game = playing_game();
        clear_grid(&mut game);
        // [4,4,8,8] must become [8,16], not cascade into [16,16] or [32]
        game.set_row(1, [4, 4, 8, 8]);

        game.shift(Direction::Left);

        assert_eq!(game.grid[1][0].unwrap().value, 8);
        assert_eq!(game.grid[1][1].unwrap().value, 16);
        assert_eq!(game.score(), 24);
    }

    #[test]
    fn test_right_and_down_traverse_from_their_edge() {
        let mut game = playing_game();
        clear_grid(&mut game);
        // [2,2,2,_] right-shifted merges the two rightmost
        game.set_row(2, [2, 2, 2, 0]);

        game.shift(Direction::Right);

        assert_eq!(game.grid[2][3].unwrap().value, 4);
        assert_eq!(game.grid[2][2].unwrap().value, 2);
        assert!(game.grid[2][1].is_none() || game.grid[2][1].unwrap().value <= 4);
    }

    #[test]
    fn test_unchanged_move_spawns_nothing() {
        let mut game = playing_game();
        clear_grid(&mut game);
        game.set_row(0, [2, 4, 8, 16]);

        game.shift(Direction::Left);

        assert_eq!(game.grid.iter().flatten().flatten().count(), 4);
        assert_eq!(game.score(), 0);
        assert_eq!(values_of(&game.grid[0]), [Some(2), Some(4), Some(8), Some(16)]);
    }

    #[test]
    fn test_value_conservation_per_move() {
        let mut game = playing_game();
        for dir in [
            Direction::Left,
            Direction::Down,
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Up,
        ] {
            let before = game.tile_sum();
            let count_before = game.grid.iter().flatten().flatten().count();
            game.shift(dir);
            let delta = game.tile_sum() - before;
            // Merges conserve tile total, so the delta is the spawned tile
            // (or zero when the board didn't change)
            assert!(delta == 0 || delta == 2 || delta == 4, "delta {}", delta);
            if delta == 0 {
                assert_eq!(game.grid.iter().flatten().flatten().count(), count_before);
            }
        }
    }

    #[test]
    fn test_can_move_equivalence() {
        let mut game = playing_game();

        // Empty cells present: movable
        assert!(game.can_move());

        // Full, no equal neighbors: stuck
        clear_grid(&mut game);
        game.set_row(0, [2, 4, 2, 4]);
        game.set_row(1, [4, 2, 4, 2]);
        game.set_row(2, [2, 4, 2, 4]);
        game.set_row(3, [4, 2, 4, 2]);
        assert!(!game.can_move());

        // Full with one horizontal pair: movable
        game.set_row(3, [4, 4, 8, 2]);
        assert!(game.can_move());

        // Full with only a vertical pair: movable
        game.set_row(2, [8, 16, 8, 16]);
        game.set_row(3, [8, 32, 16, 32]);
        assert!(game.can_move());
    }

    #[test]
    fn test_win_once_then_continue() {
        let mut game = playing_game();
        clear_grid(&mut game);
        game.set_row(0, [512, 512, 0, 0]);

        game.shift(Direction::Left);

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.grid[0][0].unwrap().value, 1024);
        assert_eq!(game.best_score(), 1024);

        // Moves are ignored while in Won
        let frozen = game.tile_sum();
        game.handle_control(Control::Left);
        assert_eq!(game.tile_sum(), frozen);

        game.handle_control(Control::Action);
        assert_eq!(game.status(), GameStatus::Playing);

        // A second 1024 merge must not re-trigger the win screen
        clear_grid(&mut game);
        game.set_row(0, [512, 512, 0, 0]);
        game.shift(Direction::Left);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_stuck_board_ends_session() {
        let mut game = playing_game();
        clear_grid(&mut game);
        game.set_row(0, [2, 4, 2, 4]);
        game.set_row(1, [4, 2, 4, 2]);
        game.set_row(2, [2, 4, 2, 64]);
        game.set_row(3, [8, 16, 0, 32]);
        game.score = 50;

        // Row 3 compacts to [8,16,32,_]; the spawn fills the last hole and
        // no merge remains whatever value it rolls
        game.shift(Direction::Left);

        assert_eq!(game.status(), GameStatus::GameOver);
        assert_eq!(game.best_score(), 50);
        assert!(!game.can_move());
    }

    #[test]
    fn test_input_ignored_before_start() {
        let mut game = Puzzle1024::seeded(7);
        let sum = game.tile_sum();
        game.handle_control(Control::Left);
        game.handle_control(Control::Up);
        assert_eq!(game.status(), GameStatus::Start);
        assert_eq!(game.tile_sum(), sum);
    }
}
