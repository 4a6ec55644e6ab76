pub mod brickrush;
pub mod levels;
pub mod puzzle;
pub mod snake;

use ratatui::prelude::*;

use crate::input::Control;
use crate::state::GameStatus;

pub trait Game {
    /// Advance the simulation by `dt` seconds of wall-clock time.
    fn update(&mut self, dt: f32);
    /// Feed one normalized input event. Engines ignore controls their
    /// current status does not accept.
    fn handle_control(&mut self, control: Control);
    fn render(&self, frame: &mut Frame, area: Rect);
    /// Back to the Start state with a fresh session.
    fn reset(&mut self);
    fn score(&self) -> u32;
    fn best_score(&self) -> u32;
    fn status(&self) -> GameStatus;
}
