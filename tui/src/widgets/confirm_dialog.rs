use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    prelude::{Buffer, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use tab_set::{ConfirmPrompt, PendingRemoval};

use crate::utils::{KeyEventExt, RectExt};

use super::KeyEventHandler;

/// Modal yes/no question drawn over the form.
pub struct ConfirmDialog<'a> {
    prompt: &'a ConfirmPrompt,
}

impl<'a> ConfirmDialog<'a> {
    pub const fn new(prompt: &'a ConfirmPrompt) -> Self {
        Self { prompt }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.inner_centered(60, 30);
        Clear.render(area, buf);

        let block = Block::new()
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(Style::default().yellow())
            .title(Line::from(self.prompt.title.as_str()).bold())
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(inner);

        Paragraph::new(self.prompt.description.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(rows[0], buf);

        Paragraph::new(Line::from(vec![
            Span::raw("[y] ").dark_gray(),
            Span::raw(self.prompt.confirm_text.as_str()).bold().on_blue(),
            Span::raw("      "),
            Span::raw("[n] ").dark_gray(),
            Span::raw(self.prompt.cancel_text.as_str()).bold(),
        ]))
        .alignment(Alignment::Center)
        .render(rows[1], buf);
    }
}

/// Tab removal waiting for an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pending: PendingRemoval,
}

impl From<PendingRemoval> for ConfirmDialogState {
    fn from(pending: PendingRemoval) -> Self {
        Self { pending }
    }
}

impl ConfirmDialogState {
    pub const fn prompt(&self) -> &ConfirmPrompt {
        self.pending.prompt()
    }

    pub fn into_pending(self) -> PendingRemoval {
        self.pending
    }
}

impl KeyEventHandler for ConfirmDialogState {
    /// `true` to remove the tab.
    type Action = bool;

    fn handle_key_event(&mut self, event: &KeyEvent) -> Option<Self::Action> {
        if event.has_pressed(KeyCode::Char('y'))
            || event.has_pressed(KeyCode::Char('Y'))
            || event.has_pressed(KeyCode::Enter)
        {
            Some(true)
        } else if event.has_pressed(KeyCode::Char('n'))
            || event.has_pressed(KeyCode::Char('N'))
            || event.has_pressed(KeyCode::Esc)
        {
            Some(false)
        } else {
            None
        }
    }
}
