use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::games::levels::{self, BrickKind, BrickSpec, PowerUpKind};
use crate::games::Game;
use crate::input::Control;
use crate::scores::{BestScore, GameId};
use crate::state::{GameStatus, StateMachine};

// The engine works in a fixed virtual surface; the renderer scales it to
// whatever terminal area it gets.
pub const SURFACE_WIDTH: f32 = 800.0;
pub const SURFACE_HEIGHT: f32 = 600.0;

const PADDLE_WIDTH: f32 = 100.0;
const PADDLE_WIDE_WIDTH: f32 = 150.0;
const PADDLE_HEIGHT: f32 = 15.0;
const PADDLE_Y: f32 = SURFACE_HEIGHT - 40.0;
const PADDLE_KEY_STEP: f32 = 40.0;
const BALL_RADIUS: f32 = 8.0;
const BALL_SPEED: f32 = 300.0;
const SPIN_FACTOR: f32 = 0.5;
const BRICK_WIDTH: f32 = 75.0;
const BRICK_HEIGHT: f32 = 25.0;
const BRICK_PADDING: f32 = 5.0;
const BRICK_OFFSET_TOP: f32 = 50.0;
const BRICK_OFFSET_LEFT: f32 = 35.0;
const POWER_UP_SIZE: f32 = 20.0;
const POWER_UP_FALL_SPEED: f32 = 100.0;
const WIDE_PADDLE_SECS: f32 = 10.0;
const POINTS_PER_BRICK: u32 = 10;
const START_LIVES: u32 = 3;

#[derive(Clone, Copy)]
struct Paddle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Paddle {
    fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

#[derive(Clone, Copy)]
struct Ball {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    launched: bool,
}

struct Brick {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    kind: BrickKind,
    color: Color,
    destroyed: bool,
    power_up: Option<PowerUpKind>,
}

struct PowerUpDrop {
    x: f32,
    y: f32,
    kind: PowerUpKind,
}

pub struct Brickrush {
    state: StateMachine,
    best: BestScore,
    rng: StdRng,
    score: u32,
    lives: u32,
    level: usize,
    paddle: Paddle,
    balls: Vec<Ball>,
    bricks: Vec<Brick>,
    drops: Vec<PowerUpDrop>,
    /// Seconds until the widened paddle reverts; 0 when inactive.
    wide_timer: f32,
}

impl Brickrush {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut game = Self {
            state: StateMachine::new(),
            best: BestScore::load(GameId::Brickrush),
            rng,
            score: 0,
            lives: START_LIVES,
            level: 1,
            paddle: Paddle {
                x: SURFACE_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
                y: PADDLE_Y,
                width: PADDLE_WIDTH,
                height: PADDLE_HEIGHT,
            },
            balls: Vec::new(),
            bricks: Vec::new(),
            drops: Vec::new(),
            wide_timer: 0.0,
        };
        game.init_session();
        game
    }

    fn init_session(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.level = 1;
        self.paddle = Paddle {
            x: SURFACE_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        };
        self.drops.clear();
        self.wide_timer = 0.0;
        let specs = levels::build_level(1, &mut self.rng).unwrap_or_default();
        self.install_bricks(&specs);
        self.spawn_ball();
    }

    fn install_bricks(&mut self, specs: &[BrickSpec]) {
        self.bricks = specs
            .iter()
            .map(|s| Brick {
                x: s.col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT,
                y: s.row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
                width: BRICK_WIDTH,
                height: BRICK_HEIGHT,
                kind: s.kind,
                color: s.color,
                destroyed: false,
                power_up: s.power_up,
            })
            .collect();
    }

    /// Replace all balls with a single un-launched one riding the paddle.
    fn spawn_ball(&mut self) {
        self.balls = vec![Ball {
            x: self.paddle.center(),
            y: self.paddle.y - BALL_RADIUS,
            vx: 0.0,
            vy: 0.0,
            launched: false,
        }];
    }

    fn launch_balls(&mut self) {
        for ball in self.balls.iter_mut().filter(|b| !b.launched) {
            // Uniform angle within 30 degrees either side of straight up
            let angle = self
                .rng
                .gen_range(-std::f32::consts::FRAC_PI_6..std::f32::consts::FRAC_PI_6);
            ball.vx = angle.sin() * BALL_SPEED;
            ball.vy = -angle.cos() * BALL_SPEED;
            ball.launched = true;
        }
    }

    fn move_paddle_to(&mut self, center_x: f32) {
        self.paddle.x =
            (center_x - self.paddle.width / 2.0).clamp(0.0, SURFACE_WIDTH - self.paddle.width);
    }

    /// Continuous pointer tracking (mouse / touch drag).
    pub fn track_pointer(&mut self, x: f32) {
        if self.state.is_playing() {
            self.move_paddle_to(x);
        }
    }

    fn nudge_paddle(&mut self, dir: f32) {
        self.move_paddle_to(self.paddle.center() + dir * PADDLE_KEY_STEP);
    }

    fn move_balls(&mut self, dt: f32) {
        let mut balls = std::mem::take(&mut self.balls);

        for ball in balls.iter_mut() {
            if !ball.launched {
                ball.x = self.paddle.center();
                ball.y = self.paddle.y - BALL_RADIUS;
                continue;
            }

            ball.x += ball.vx * dt;
            ball.y += ball.vy * dt;

            // Side and top walls reflect, clamping back inside
            if ball.x - BALL_RADIUS < 0.0 || ball.x + BALL_RADIUS > SURFACE_WIDTH {
                ball.vx = -ball.vx;
                ball.x = ball.x.clamp(BALL_RADIUS, SURFACE_WIDTH - BALL_RADIUS);
            }
            if ball.y - BALL_RADIUS < 0.0 {
                ball.vy = -ball.vy;
                ball.y = BALL_RADIUS;
            }

            // Paddle: always send the ball back up, with spin from the
            // contact point across the paddle face
            if ball.y + BALL_RADIUS > self.paddle.y
                && ball.y - BALL_RADIUS < self.paddle.y + self.paddle.height
                && ball.x > self.paddle.x
                && ball.x < self.paddle.x + self.paddle.width
            {
                ball.vy = -ball.vy.abs();
                let hit_pos = (ball.x - self.paddle.x) / self.paddle.width - 0.5;
                ball.vx += hit_pos * BALL_SPEED * SPIN_FACTOR;
                ball.y = self.paddle.y - BALL_RADIUS;
            }
        }

        // Balls past the bottom edge are gone
        balls.retain(|b| b.y - BALL_RADIUS <= SURFACE_HEIGHT);

        for ball in balls.iter_mut() {
            if ball.launched {
                self.collide_bricks(ball);
            }
        }

        self.balls = balls;
    }

    fn collide_bricks(&mut self, ball: &mut Ball) {
        let hit = self.bricks.iter().position(|brick| {
            !brick.destroyed
                && ball.x + BALL_RADIUS > brick.x
                && ball.x - BALL_RADIUS < brick.x + brick.width
                && ball.y + BALL_RADIUS > brick.y
                && ball.y - BALL_RADIUS < brick.y + brick.height
        });
        let Some(idx) = hit else { return };

        ball.vy = -ball.vy;

        if self.bricks[idx].kind == BrickKind::Steel {
            return;
        }

        let brick = &mut self.bricks[idx];
        brick.destroyed = true;
        let (drop_x, drop_y) = (brick.x + brick.width / 2.0, brick.y);
        let power_up = brick.power_up;

        self.score += self.level as u32 * POINTS_PER_BRICK;
        if let Some(kind) = power_up {
            self.drops.push(PowerUpDrop {
                x: drop_x,
                y: drop_y,
                kind,
            });
        }
    }

    fn update_drops(&mut self, dt: f32) {
        let paddle = self.paddle;
        let mut caught = Vec::new();

        self.drops.retain_mut(|drop| {
            drop.y += POWER_UP_FALL_SPEED * dt;
            let on_paddle = drop.y + POWER_UP_SIZE > paddle.y
                && drop.y < paddle.y + paddle.height
                && drop.x + POWER_UP_SIZE > paddle.x
                && drop.x < paddle.x + paddle.width;
            if on_paddle {
                caught.push(drop.kind);
                return false;
            }
            drop.y <= SURFACE_HEIGHT
        });

        for kind in caught {
            self.apply_power_up(kind);
        }
    }

    fn apply_power_up(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::MultiBall => {
                // Fan each launched ball into three. Clones are appended
                // after this tick's collision pass, so they only start
                // interacting with the world next tick.
                let mut clones = Vec::new();
                for ball in self.balls.iter().filter(|b| b.launched) {
                    clones.push(rotated(ball, std::f32::consts::FRAC_PI_6));
                    clones.push(rotated(ball, -std::f32::consts::FRAC_PI_6));
                }
                self.balls.extend(clones);
            }
            PowerUpKind::WidePaddle => {
                let center = self.paddle.center();
                self.paddle.width = PADDLE_WIDE_WIDTH;
                self.move_paddle_to(center);
                self.wide_timer = WIDE_PADDLE_SECS;
            }
        }
    }

    fn update_wide_timer(&mut self, dt: f32) {
        if self.wide_timer > 0.0 {
            self.wide_timer -= dt;
            if self.wide_timer <= 0.0 {
                self.wide_timer = 0.0;
                let center = self.paddle.center();
                self.paddle.width = PADDLE_WIDTH;
                self.move_paddle_to(center);
            }
        }
    }

    fn check_level_complete(&mut self) {
        let normals_left = self
            .bricks
            .iter()
            .any(|b| !b.destroyed && b.kind == BrickKind::Normal);
        if normals_left {
            return;
        }

        let next = self.level + 1;
        match levels::build_level(next, &mut self.rng) {
            Some(specs) => {
                self.level = next;
                self.install_bricks(&specs);
                self.drops.clear();
                self.spawn_ball();
            }
            None => {
                // Cleared the last level
                self.best.record(self.score);
                self.state.win();
            }
        }
    }

    fn restart(&mut self) {
        self.state.reset();
        self.init_session();
        self.state.start();
    }
}

fn rotated(ball: &Ball, angle: f32) -> Ball {
    let (sin, cos) = angle.sin_cos();
    Ball {
        vx: ball.vx * cos - ball.vy * sin,
        vy: ball.vx * sin + ball.vy * cos,
        ..*ball
    }
}

impl Game for Brickrush {
    fn update(&mut self, dt: f32) {
        if !self.state.is_playing() || dt <= 0.0 {
            return;
        }

        self.update_wide_timer(dt);
        self.move_balls(dt);

        if self.balls.is_empty() {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.best.record(self.score);
                self.state.end();
                return;
            }
            self.spawn_ball();
        }

        self.update_drops(dt);
        self.check_level_complete();
    }

    fn handle_control(&mut self, control: Control) {
        match self.state.status() {
            GameStatus::Start => {
                if control == Control::Action {
                    self.state.start();
                }
            }
            GameStatus::Playing => match control {
                Control::Left => self.nudge_paddle(-1.0),
                Control::Right => self.nudge_paddle(1.0),
                Control::Action => self.launch_balls(),
                Control::Pause => {
                    self.state.pause();
                }
                _ => {}
            },
            GameStatus::Paused => {
                if control == Control::Pause {
                    self.state.resume();
                }
            }
            GameStatus::GameOver | GameStatus::Won => {
                if control == Control::Action {
                    self.restart();
                }
            }
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        render_brickrush(self, frame, area);
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

fn render_brickrush(game: &Brickrush, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(6, 182, 212)))
        .title(" 🧱 Brickrush ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(80, 220, 240))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
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
            format!("Lives: {} ", "♥ ".repeat(game.lives as usize)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Level: {}/{} ", game.level, levels::LEVEL_COUNT),
            Style::default().fg(Color::Green),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("🏆 Best: {} ", game.best.get()),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), chunks[0]);

    let lines = render_field(game, chunks[1].width as usize, chunks[1].height as usize);
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    let help = match game.status() {
        GameStatus::Start => Line::from(vec![
            Span::styled(
                " SPACE Start ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "│ ←→ / Mouse Move paddle │ P Pause │ Esc Menu",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        GameStatus::Playing => Line::from(vec![Span::styled(
            " ←→ / Mouse Move paddle │ SPACE Launch │ P Pause │ R Restart │ Esc Menu",
            Style::default().fg(Color::DarkGray),
        )]),
        GameStatus::Paused => Line::from(vec![Span::styled(
            " ⏸ PAUSED - Press P to resume ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        GameStatus::GameOver => Line::from(vec![
            Span::styled(
                " 💀 GAME OVER! ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("Score: {} │ SPACE Play again │ Esc Menu", game.score),
                Style::default().fg(Color::Gray),
            ),
        ]),
        GameStatus::Won => Line::from(vec![
            Span::styled(
                " 🎉 ALL LEVELS CLEARED! ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("Score: {} │ SPACE Play again │ Esc Menu", game.score),
                Style::default().fg(Color::Gray),
            ),
        ]),
    };
    frame.render_widget(Paragraph::new(help), chunks[2]);
}

fn render_field(game: &Brickrush, w: usize, h: usize) -> Vec<Line<'static>> {
    if w == 0 || h == 0 {
        return Vec::new();
    }
    let bg = Color::Rgb(10, 10, 20);
    let sx = w as f32 / SURFACE_WIDTH;
    let sy = h as f32 / SURFACE_HEIGHT;

    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(bg)); w]; h];

    for brick in game.bricks.iter().filter(|b| !b.destroyed) {
        let x0 = (brick.x * sx) as usize;
        let x1 = (((brick.x + brick.width) * sx) as usize).min(w);
        let y = (brick.y * sy) as usize;
        if y >= h {
            continue;
        }
        let ch = if brick.kind == BrickKind::Steel { '▒' } else { '█' };
        for cell in grid[y][x0..x1.max(x0)].iter_mut() {
            *cell = (ch, Style::default().fg(brick.color).bg(bg));
        }
    }

    for drop in &game.drops {
        let x = (drop.x * sx) as usize;
        let y = (drop.y * sy) as usize;
        if x < w && y < h {
            let color = match drop.kind {
                PowerUpKind::MultiBall => Color::Rgb(80, 200, 255),
                PowerUpKind::WidePaddle => Color::Rgb(255, 200, 80),
            };
            grid[y][x] = ('▼', Style::default().fg(color).bg(bg).add_modifier(Modifier::BOLD));
        }
    }

    let px0 = (game.paddle.x * sx) as usize;
    let px1 = (((game.paddle.x + game.paddle.width) * sx) as usize).min(w);
    let py = (game.paddle.y * sy) as usize;
    if py < h {
        for cell in grid[py][px0..px1.max(px0)].iter_mut() {
            *cell = (
                '═',
                Style::default()
                    .fg(Color::Rgb(180, 200, 255))
                    .bg(Color::Rgb(30, 50, 120))
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    for ball in &game.balls {
        let x = (ball.x * sx) as usize;
        let y = (ball.y * sy) as usize;
        if x < w && y < h {
            grid[y][x] = (
                '●',
                Style::default().fg(Color::White).bg(bg).add_modifier(Modifier::BOLD),
            );
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_game() -> Brickrush {
        let mut game = Brickrush::seeded(42);
        // Keep test runs independent of any score file next to the binary
        game.best = BestScore::in_memory();
        game.handle_control(Control::Action);
        assert_eq!(game.status(), GameStatus::Playing);
        game
    }

    fn speed(ball: &Ball) -> f32 {
        (ball.vx * ball.vx + ball.vy * ball.vy).sqrt()
    }

    #[test]
    fn test_launch_angle_within_cone() {
        let mut game = playing_game();
        game.launch_balls();
        let ball = game.balls[0];
        assert!(ball.launched);
        assert!(ball.vy < 0.0);
        assert!((speed(&ball) - BALL_SPEED).abs() < 0.001);
        // |vx| <= sin(30°) * speed
        assert!(ball.vx.abs() <= BALL_SPEED * 0.5 + 0.001);
    }

    #[test]
    fn test_brick_hit_destroys_scores_and_reflects() {
        let mut game = playing_game();
        // First level-1 brick sits at (35, 50), 75x25
        let brick = &game.bricks[0];
        let (bx, by, bw, bh) = (brick.x, brick.y, brick.width, brick.height);
        game.balls[0] = Ball {
            x: bx + bw / 2.0,
            y: by + bh + BALL_RADIUS + 2.0,
            vx: 0.0,
            vy: -200.0,
            launched: true,
        };
        game.update(0.016);
        assert!(game.bricks[0].destroyed);
        assert_eq!(game.score(), 10); // level 1 × 10
        assert_eq!(game.balls[0].vy, 200.0);
    }

    #[test]
    fn test_steel_brick_absorbs_hit() {
        let mut game = playing_game();
        game.bricks[0].kind = BrickKind::Steel;
        let (bx, by, bh) = (game.bricks[0].x, game.bricks[0].y, game.bricks[0].height);
        game.balls[0] = Ball {
            x: bx + 10.0,
            y: by + bh + BALL_RADIUS + 2.0,
            vx: 0.0,
            vy: -200.0,
            launched: true,
        };
        game.update(0.016);
        assert!(!game.bricks[0].destroyed);
        assert_eq!(game.score(), 0);
        assert_eq!(game.balls[0].vy, 200.0);
    }

    #[test]
    fn test_wall_reflection_preserves_speed() {
        let mut game = playing_game();
        game.balls[0] = Ball {
            x: BALL_RADIUS + 1.0,
            y: 300.0,
            vx: -200.0,
            vy: 150.0,
            launched: true,
        };
        let before = speed(&game.balls[0]);
        game.update(0.016);
        let after = speed(&game.balls[0]);
        assert!((before - after).abs() < 0.001);
        assert!(game.balls[0].vx > 0.0);
    }

    #[test]
    fn test_lost_ball_consumes_life_and_respawns() {
        let mut game = playing_game();
        game.balls[0] = Ball {
            x: 400.0,
            y: SURFACE_HEIGHT + 30.0,
            vx: 0.0,
            vy: 300.0,
            launched: true,
        };
        game.update(0.016);
        assert_eq!(game.lives, START_LIVES - 1);
        assert_eq!(game.balls.len(), 1);
        assert!(!game.balls[0].launched);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_zero_lives_ends_session() {
        let mut game = playing_game();
        game.lives = 1;
        game.score = 123;
        game.balls[0] = Ball {
            x: 400.0,
            y: SURFACE_HEIGHT + 30.0,
            vx: 0.0,
            vy: 300.0,
            launched: true,
        };
        game.update(0.016);
        assert_eq!(game.status(), GameStatus::GameOver);
        assert_eq!(game.best_score(), 123);
    }

    #[test]
    fn test_multiball_fans_into_three() {
        let mut game = playing_game();
        game.balls[0] = Ball {
            x: 400.0,
            y: 300.0,
            vx: 0.0,
            vy: -BALL_SPEED,
            launched: true,
        };
        game.apply_power_up(PowerUpKind::MultiBall);
        assert_eq!(game.balls.len(), 3);
        for ball in &game.balls {
            assert!((speed(ball) - BALL_SPEED).abs() < 0.001);
        }
        // The clones diverge left and right of the original heading
        assert!(game.balls[1].vx * game.balls[2].vx < 0.0);
    }

    #[test]
    fn test_wide_paddle_reverts_after_timeout() {
        let mut game = playing_game();
        game.apply_power_up(PowerUpKind::WidePaddle);
        assert_eq!(game.paddle.width, PADDLE_WIDE_WIDTH);
        for _ in 0..((WIDE_PADDLE_SECS / 0.1) as usize + 1) {
            game.update(0.1);
        }
        assert_eq!(game.paddle.width, PADDLE_WIDTH);
    }

    #[test]
    fn test_level_advance_resets_ball() {
        let mut game = playing_game();
        game.launch_balls();
        for brick in game.bricks.iter_mut() {
            if brick.kind == BrickKind::Normal {
                brick.destroyed = true;
            }
        }
        game.update(0.001);
        assert_eq!(game.level, 2);
        assert_eq!(game.balls.len(), 1);
        assert!(!game.balls[0].launched);
        assert!(game.bricks.iter().any(|b| !b.destroyed));
    }

    #[test]
    fn test_clearing_last_level_wins() {
        let mut game = playing_game();
        game.level = levels::LEVEL_COUNT;
        game.score = 999;
        for brick in game.bricks.iter_mut() {
            if brick.kind == BrickKind::Normal {
                brick.destroyed = true;
            }
        }
        game.update(0.001);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.best_score(), 999);
    }

    #[test]
    fn test_paddle_spin_depends_on_contact_point() {
        let mut game = playing_game();
        let paddle_x = game.paddle.x;
        // Hit near the left edge of the paddle: spin goes left
        game.balls[0] = Ball {
            x: paddle_x + 10.0,
            y: game.paddle.y - BALL_RADIUS - 1.0,
            vx: 0.0,
            vy: 200.0,
            launched: true,
        };
        game.update(0.016);
        assert!(game.balls[0].vy < 0.0);
        assert!(game.balls[0].vx < 0.0);
    }

    #[test]
    fn test_input_ignored_when_not_playing() {
        let mut game = Brickrush::seeded(42);
        assert_eq!(game.status(), GameStatus::Start);
        game.handle_control(Control::Left);
        game.handle_control(Control::Pause);
        assert_eq!(game.status(), GameStatus::Start);
        assert!(!game.balls[0].launched);
    }

    #[test]
    fn test_pointer_tracking_clamps_to_surface() {
        let mut game = playing_game();
        game.track_pointer(-100.0);
        assert_eq!(game.paddle.x, 0.0);
        game.track_pointer(SURFACE_WIDTH + 100.0);
        assert_eq!(game.paddle.x, SURFACE_WIDTH - game.paddle.width);
    }
}
