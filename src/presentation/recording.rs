//! Presenter that records every call, for tests and headless runs

use crate::board::PositionedCharacter;
use crate::core::types::Cell;
use crate::presentation::{Cursor, HighlightColor, Presenter, Theme};

/// One recorded adapter call
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    Render { units: usize },
    SetTheme(Theme),
    Highlight(Cell, HighlightColor),
    ClearHighlight(Cell),
    ShowTooltip(String, Cell),
    HideTooltip(Cell),
    SetCursor(Cursor),
    Message(String),
    Error(String),
    Score { current: u32, max: u32 },
    Confirm(String),
    Damage(Cell, f64),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<PresenterCall>,
    /// Answer returned by [`Presenter::confirm`]
    pub confirm_answer: bool,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(confirm_answer: bool) -> Self {
        Self {
            calls: Vec::new(),
            confirm_answer,
        }
    }

    pub fn errors(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PresenterCall::Error(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PresenterCall::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn damages(&self) -> Vec<(Cell, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PresenterCall::Damage(cell, amount) => Some((*cell, *amount)),
                _ => None,
            })
            .collect()
    }

    pub fn last_cursor(&self) -> Option<Cursor> {
        self.calls.iter().rev().find_map(|c| match c {
            PresenterCall::SetCursor(cursor) => Some(*cursor),
            _ => None,
        })
    }

    pub fn last_theme(&self) -> Option<Theme> {
        self.calls.iter().rev().find_map(|c| match c {
            PresenterCall::SetTheme(theme) => Some(*theme),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, positions: &[PositionedCharacter]) {
        self.calls.push(PresenterCall::Render {
            units: positions.len(),
        });
    }

    fn set_theme(&mut self, theme: Theme) {
        self.calls.push(PresenterCall::SetTheme(theme));
    }

    fn highlight_cell(&mut self, cell: Cell, color: HighlightColor) {
        self.calls.push(PresenterCall::Highlight(cell, color));
    }

    fn clear_highlight(&mut self, cell: Cell) {
        self.calls.push(PresenterCall::ClearHighlight(cell));
    }

    fn show_tooltip(&mut self, text: &str, cell: Cell) {
        self.calls.push(PresenterCall::ShowTooltip(text.to_string(), cell));
    }

    fn hide_tooltip(&mut self, cell: Cell) {
        self.calls.push(PresenterCall::HideTooltip(cell));
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.calls.push(PresenterCall::SetCursor(cursor));
    }

    fn show_message(&mut self, text: &str) {
        self.calls.push(PresenterCall::Message(text.to_string()));
    }

    fn show_error(&mut self, text: &str) {
        self.calls.push(PresenterCall::Error(text.to_string()));
    }

    fn update_score(&mut self, current: u32, max: u32) {
        self.calls.push(PresenterCall::Score { current, max });
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.calls.push(PresenterCall::Confirm(prompt.to_string()));
        self.confirm_answer
    }

    async fn show_damage(&mut self, cell: Cell, amount: f64) {
        self.calls.push(PresenterCall::Damage(cell, amount));
    }
}
