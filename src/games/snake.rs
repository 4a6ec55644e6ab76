use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::layout::Direction as LayoutDirection;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::event::FixedStep;
use crate::games::Game;
use crate::input::{Control, Direction};
use crate::scores::{BestScore, GameId};
use crate::state::{GameStatus, StateMachine};

pub const GRID_WIDTH: i32 = 20;
pub const GRID_HEIGHT: i32 = 20;

const BASE_STEP_SECS: f32 = 0.15;
const MIN_STEP_SECS: f32 = 0.06;
/// Each full 50 points shaves this much off the step interval.
const STEP_SECS_PER_TIER: f32 = 0.01;
const TIER_POINTS: u32 = 50;

const FOOD_POINTS: u32 = 10;
const BONUS_POINTS: u32 = 50;
const BONUS_DELAY_MIN: f32 = 5.0;
const BONUS_DELAY_MAX: f32 = 10.0;
const BONUS_LIFETIME: f32 = 5.0;
const PLACEMENT_ATTEMPTS: u32 = 100;

type Cell = (i32, i32);

pub struct Snake {
    state: StateMachine,
    best: BestScore,
    rng: StdRng,
    /// Head first.
    body: Vec<Cell>,
    dir: Direction,
    pending_dir: Option<Direction>,
    food: Cell,
    bonus: Option<Cell>,
    /// Seconds until a scheduled bonus appears. None while a bonus is on the
    /// board or nothing is scheduled.
    bonus_spawn_in: Option<f32>,
    /// Seconds until the on-board bonus disappears.
    bonus_expire_in: Option<f32>,
    step: FixedStep,
    score: u32,
}

impl Snake {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut game = Self {
            state: StateMachine::new(),
            best: BestScore::load(GameId::Snake),
            rng,
            body: Vec::new(),
            dir: Direction::Right,
            pending_dir: None,
            food: (0, 0),
            bonus: None,
            bonus_spawn_in: None,
            bonus_expire_in: None,
            step: FixedStep::new(BASE_STEP_SECS),
            score: 0,
        };
        game.init_session();
        game
    }

    fn init_session(&mut self) {
        self.body = vec![(10, 10), (9, 10), (8, 10)];
        self.dir = Direction::Right;
        self.pending_dir = None;
        self.bonus = None;
        self.bonus_spawn_in = None;
        self.bonus_expire_in = None;
        self.score = 0;
        self.step = FixedStep::new(BASE_STEP_SECS);
        self.food = self.place_item();
    }

    /// Pick a cell off the body, the food, and the bonus. Random probing up
    /// to the attempt cap, then the last roll is accepted as-is.
    fn place_item(&mut self) -> Cell {
        let mut cell = (0, 0);
        for _ in 0..PLACEMENT_ATTEMPTS {
            cell = (
                self.rng.gen_range(0..GRID_WIDTH),
                self.rng.gen_range(0..GRID_HEIGHT),
            );
            if !self.body.contains(&cell) && cell != self.food && self.bonus != Some(cell) {
                return cell;
            }
        }
        cell
    }

    fn step_interval(&self) -> f32 {
        let tiers = (self.score / TIER_POINTS) as f32;
        (BASE_STEP_SECS - tiers * STEP_SECS_PER_TIER).max(MIN_STEP_SECS)
    }

    fn buffer_direction(&mut self, dir: Direction) {
        // Reversing into yourself is never meant; swallow it
        if dir != self.dir.opposite() {
            self.pending_dir = Some(dir);
        }
    }

    fn advance(&mut self) {
        if let Some(dir) = self.pending_dir.take() {
            if dir != self.dir.opposite() {
                self.dir = dir;
            }
        }

        let (dx, dy) = self.dir.delta();
        let head = self.body[0];
        let next = (head.0 + dx, head.1 + dy);

        let out_of_bounds =
            next.0 < 0 || next.0 >= GRID_WIDTH || next.1 < 0 || next.1 >= GRID_HEIGHT;
        if out_of_bounds || self.body.contains(&next) {
            self.best.record(self.score);
            self.state.end();
            return;
        }

        self.body.insert(0, next);

        if next == self.food {
            self.score += FOOD_POINTS;
            self.food = self.place_item();
            self.step.set_interval(self.step_interval());
            if self.bonus.is_none() && self.bonus_spawn_in.is_none() {
                self.bonus_spawn_in =
                    Some(self.rng.gen_range(BONUS_DELAY_MIN..BONUS_DELAY_MAX));
            }
        } else if self.bonus == Some(next) {
            self.score += BONUS_POINTS;
            self.bonus = None;
            self.bonus_expire_in = None;
            self.step.set_interval(self.step_interval());
        } else {
            self.body.pop();
        }
    }

    fn run_bonus_timers(&mut self, dt: f32) {
        if let Some(remaining) = self.bonus_spawn_in {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.bonus_spawn_in = None;
                self.bonus = Some(self.place_item());
                // The lifetime starts counting on the next tick
                self.bonus_expire_in = Some(BONUS_LIFETIME);
            } else {
                self.bonus_spawn_in = Some(remaining);
            }
            return;
        }
        if let Some(remaining) = self.bonus_expire_in {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.bonus = None;
                self.bonus_expire_in = None;
            } else {
                self.bonus_expire_in = Some(remaining);
            }
        }
    }

    fn restart(&mut self) {
        self.state.reset();
        self.init_session();
        self.state.start();
    }

    pub fn length(&self) -> usize {
        self.body.len()
    }
}

impl Game for Snake {
    fn update(&mut self, dt: f32) {
        if !self.state.is_playing() || dt <= 0.0 {
            return;
        }
        self.run_bonus_timers(dt);
        if self.step.tick(dt) {
            self.advance();
        }
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
                    self.buffer_direction(dir);
                } else if control == Control::Pause {
                    self.state.pause();
                }
            }
            GameStatus::Paused => {
                if control == Control::Pause {
                    self.state.resume();
                }
            }
            GameStatus::GameOver => {
                if control == Control::Action {
                    self.restart();
                }
            }
            GameStatus::Won => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        render_snake(self, frame, area);
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

fn render_snake(game: &Snake, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(34, 197, 94)))
        .title(" 🐍 Snake ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(74, 222, 128))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(inner);

    let speed = (1.0 / game.step.interval()).round() as u32;
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
        Span::styled(
            format!("Length: {} ", game.length()),
            Style::default().fg(Color::Green),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Speed: {}/s ", speed),
            Style::default().fg(Color::Magenta),
        ),
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
                "│ ←↑↓→ / Swipe Steer │ P Pause │ Esc Menu",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        GameStatus::Playing => Line::from(vec![Span::styled(
            " ←↑↓→ / Swipe Steer │ P Pause │ R Restart │ Esc Menu",
            Style::default().fg(Color::DarkGray),
        )]),
        GameStatus::Paused => Line::from(vec![Span::styled(
            " ⏸ PAUSED - Press P to resume ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        GameStatus::GameOver | GameStatus::Won => Line::from(vec![
            Span::styled(
                " 💀 GAME OVER! ",
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

fn render_board(game: &Snake, area: Rect) -> Vec<Line<'static>> {
    // Two columns per cell keeps the board roughly square in a terminal
    let cell_w = ((area.width as usize / GRID_WIDTH as usize).min(2)).max(1);
    let rows = (area.height as usize).min(GRID_HEIGHT as usize);
    let pad_left = (area.width as usize).saturating_sub(cell_w * GRID_WIDTH as usize) / 2;

    let head = game.body.first().copied();
    let mut lines = Vec::with_capacity(rows);
    for y in 0..rows as i32 {
        let mut spans = vec![Span::raw(" ".repeat(pad_left))];
        for x in 0..GRID_WIDTH {
            let cell = (x, y);
            let span = if head == Some(cell) {
                Span::styled(
                    "█".repeat(cell_w),
                    Style::default().fg(Color::Rgb(74, 222, 128)),
                )
            } else if game.body.contains(&cell) {
                Span::styled(
                    "█".repeat(cell_w),
                    Style::default().fg(Color::Rgb(34, 197, 94)),
                )
            } else if cell == game.food {
                Span::styled(
                    format!("{:^width$}", "●", width = cell_w),
                    Style::default().fg(Color::Red),
                )
            } else if game.bonus == Some(cell) {
                Span::styled(
                    format!("{:^width$}", "★", width = cell_w),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    "·".repeat(cell_w),
                    Style::default().fg(Color::Rgb(40, 40, 55)),
                )
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }
    lines
}
