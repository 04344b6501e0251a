//! Presentation adapters
//!
//! The controller drives a [`Presenter`] and never reads anything back
//! except the answer to a confirmation prompt.

mod recording;
mod terminal;
pub mod theme;
pub mod tile;

pub use recording::{PresenterCall, RecordingPresenter};
pub use terminal::TerminalPresenter;
pub use theme::{Cursor, HighlightColor, Theme};
pub use tile::{calc_tile_type, TileType};

use crate::board::PositionedCharacter;
use crate::core::types::Cell;

/// Everything the game needs from a user interface
#[allow(async_fn_in_trait)]
pub trait Presenter {
    /// Draw every living unit
    fn render(&mut self, positions: &[PositionedCharacter]);

    fn set_theme(&mut self, theme: Theme);

    fn highlight_cell(&mut self, cell: Cell, color: HighlightColor);

    fn clear_highlight(&mut self, cell: Cell);

    fn show_tooltip(&mut self, text: &str, cell: Cell);

    fn hide_tooltip(&mut self, cell: Cell);

    fn set_cursor(&mut self, cursor: Cursor);

    fn show_message(&mut self, text: &str);

    fn show_error(&mut self, text: &str);

    fn update_score(&mut self, current: u32, max: u32);

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Display a damage number; resolves once the display has finished
    async fn show_damage(&mut self, cell: Cell, amount: f64);
}
