//! Text board for a terminal
//!
//! Draws the 8x8 board with crossterm colours. Commands are batched with
//! `queue!` and flushed once per draw. Write failures are logged and dropped.

use std::collections::HashMap;
use std::io::{self, BufRead, Stdout, Write};
use std::time::Duration;

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use tracing::warn;

use crate::board::PositionedCharacter;
use crate::core::constants::BOARD_SIZE;
use crate::core::types::{Cell, Side};
use crate::presentation::tile::calc_tile_type;
use crate::presentation::{Cursor, HighlightColor, Presenter, Theme};

pub struct TerminalPresenter<W: Write = Stdout> {
    writer: W,
    theme: Theme,
    damage_delay: Duration,
    highlights: HashMap<Cell, HighlightColor>,
    units: Vec<PositionedCharacter>,
    tooltip: Option<(Cell, String)>,
}

impl TerminalPresenter<Stdout> {
    pub fn stdout(damage_delay: Duration) -> Self {
        Self::new(io::stdout(), damage_delay)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(writer: W, damage_delay: Duration) -> Self {
        Self {
            writer,
            theme: Theme::default(),
            damage_delay,
            highlights: HashMap::new(),
            units: Vec::new(),
            tooltip: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn theme_colors(&self) -> (Color, Color) {
        match self.theme {
            Theme::Prairie => (Color::DarkGreen, Color::Green),
            Theme::Desert => (Color::DarkYellow, Color::Yellow),
            Theme::Arctic => (Color::DarkCyan, Color::White),
            Theme::Mountain => (Color::DarkGrey, Color::Grey),
        }
    }

    fn glyph(unit: &PositionedCharacter) -> char {
        let tag = unit.character.character_type().tag();
        let c = tag.chars().next().unwrap_or('?');
        match unit.side() {
            Side::Player => c.to_ascii_uppercase(),
            Side::Enemy => c.to_ascii_lowercase(),
        }
    }

    fn draw_board(&mut self) -> io::Result<()> {
        let (frame, text) = self.theme_colors();
        let border = "─".repeat(BOARD_SIZE * 3);

        queue!(
            self.writer,
            SetForegroundColor(frame),
            Print(format!("  {}\r\n", self.theme)),
            Print(format!("┌{border}┐\r\n"))
        )?;

        for cell in 0..BOARD_SIZE * BOARD_SIZE {
            let tile = calc_tile_type(cell, BOARD_SIZE);
            if tile.is_left_edge() {
                queue!(self.writer, SetForegroundColor(frame), Print("│"))?;
            }

            let glyph = self
                .units
                .iter()
                .find(|u| u.cell == cell)
                .map_or('.', Self::glyph);
            let background = match self.highlights.get(&cell) {
                Some(HighlightColor::Yellow) => Some(Color::DarkYellow),
                Some(HighlightColor::Green) => Some(Color::DarkGreen),
                Some(HighlightColor::Red) => Some(Color::DarkRed),
                None => None,
            };

            if let Some(bg) = background {
                queue!(self.writer, SetBackgroundColor(bg))?;
            }
            queue!(
                self.writer,
                SetForegroundColor(text),
                Print(format!(" {glyph} ")),
                ResetColor
            )?;

            if tile.is_right_edge() {
                queue!(
                    self.writer,
                    SetForegroundColor(frame),
                    Print(format!("│ {}\r\n", cell - (BOARD_SIZE - 1)))
                )?;
            }
        }

        queue!(
            self.writer,
            SetForegroundColor(frame),
            Print(format!("└{border}┘\r\n")),
            ResetColor
        )?;
        self.writer.flush()
    }

    fn line(&mut self, color: Color, text: &str) {
        let result = queue!(
            self.writer,
            SetForegroundColor(color),
            Print(text),
            Print("\r\n"),
            ResetColor
        )
        .and_then(|_| self.writer.flush());
        if let Err(e) = result {
            warn!("terminal write failed: {}", e);
        }
    }

    fn redraw(&mut self) {
        if let Err(e) = self.draw_board() {
            warn!("terminal draw failed: {}", e);
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, positions: &[PositionedCharacter]) {
        self.units = positions.to_vec();
        self.redraw();
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.highlights.clear();
    }

    fn highlight_cell(&mut self, cell: Cell, color: HighlightColor) {
        self.highlights.insert(cell, color);
    }

    fn clear_highlight(&mut self, cell: Cell) {
        self.highlights.remove(&cell);
    }

    fn show_tooltip(&mut self, text: &str, cell: Cell) {
        self.tooltip = Some((cell, text.to_string()));
        self.line(Color::Cyan, &format!("[{cell}] {text}"));
    }

    fn hide_tooltip(&mut self, cell: Cell) {
        if matches!(&self.tooltip, Some((c, _)) if *c == cell) {
            self.tooltip = None;
        }
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        let hint = match cursor {
            Cursor::Auto => return,
            Cursor::Pointer => "can act here",
            Cursor::Crosshair => "can attack here",
            Cursor::NotAllowed => "not allowed",
        };
        self.line(Color::DarkGrey, hint);
    }

    fn show_message(&mut self, text: &str) {
        self.line(Color::Green, text);
    }

    fn show_error(&mut self, text: &str) {
        self.line(Color::Red, text);
    }

    fn update_score(&mut self, current: u32, max: u32) {
        self.line(Color::Magenta, &format!("score {current}  best {max}"));
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.line(Color::Yellow, &format!("{prompt} [y/N]"));
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(e) => {
                warn!("failed to read confirmation: {}", e);
                false
            }
        }
    }

    async fn show_damage(&mut self, cell: Cell, amount: f64) {
        self.line(Color::Red, &format!("-{amount} at {cell}"));
        tokio::time::sleep(self.damage_delay).await;
        self.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Character, CharacterType};

    fn output(presenter: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_render_draws_units() {
        let mut presenter = TerminalPresenter::new(Vec::new(), Duration::ZERO);
        let units = vec![
            PositionedCharacter::new(Character::new(CharacterType::Bowman, 1), 0),
            PositionedCharacter::new(Character::new(CharacterType::Vampire, 1), 7),
        ];
        presenter.render(&units);

        let text = output(presenter);
        assert!(text.contains(" B "));
        assert!(text.contains(" v "));
        assert!(text.contains("prairie"));
    }

    #[test]
    fn test_theme_name_in_header() {
        let mut presenter = TerminalPresenter::new(Vec::new(), Duration::ZERO);
        presenter.set_theme(Theme::Arctic);
        presenter.render(&[]);
        assert!(output(presenter).contains("arctic"));
    }

    #[tokio::test]
    async fn test_damage_line() {
        let mut presenter = TerminalPresenter::new(Vec::new(), Duration::ZERO);
        presenter.show_damage(19, 2.5).await;
        assert!(output(presenter).contains("-2.5 at 19"));
    }
}
