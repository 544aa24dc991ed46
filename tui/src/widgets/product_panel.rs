use crossterm::event::{KeyCode, KeyEvent};
use itertools::Itertools;
use ratatui::{
    layout::{Constraint, Layout},
    prelude::{Buffer, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::{
    form::{Field, Product},
    utils::KeyEventExt,
};

use super::KeyEventHandler;

const FIELD_HEIGHT: u16 = 3;
const CURSOR: &str = "▏";

/// Fields of the product under the active tab.
pub struct ProductPanel<'a> {
    product: &'a Product,
    tab_title: &'a str,
}

impl<'a> ProductPanel<'a> {
    pub const fn new(product: &'a Product, tab_title: &'a str) -> Self {
        Self { product, tab_title }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProductPanelState {
    focus: Field,
    show_errors: bool,
}

impl ProductPanelState {
    pub const fn focus(&self) -> Field {
        self.focus
    }

    /// Errors stay hidden until the first submit attempt.
    pub fn show_errors(&mut self) {
        self.show_errors = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Backspace,
    Submit,
}

impl KeyEventHandler for ProductPanelState {
    type Action = Edit;

    fn handle_key_event(&mut self, event: &KeyEvent) -> Option<Self::Action> {
        if event.has_pressed(KeyCode::Tab) || event.has_pressed(KeyCode::Down) {
            self.focus = self.focus.next();
        } else if event.has_pressed(KeyCode::BackTab) || event.has_pressed(KeyCode::Up) {
            self.focus = self.focus.prev();
        } else if event.has_pressed(KeyCode::Backspace) {
            return Some(Edit::Backspace);
        } else if event.has_pressed(KeyCode::Enter) {
            return Some(Edit::Submit);
        } else if let Some(c) = event.typed_char() {
            return Some(Edit::Insert(c));
        }
        None
    }
}

impl StatefulWidget for ProductPanel<'_> {
    type State = ProductPanelState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::new()
            .borders(Borders::ALL)
            .border_style(Style::default().dark_gray())
            .title(Line::from(self.tab_title).bold().yellow());
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical(
            Field::ALL
                .iter()
                .map(|_| Constraint::Length(FIELD_HEIGHT))
                .chain([Constraint::Fill(1)]),
        )
        .split(inner);

        for (field, area) in Field::ALL.into_iter().zip(rows.iter()) {
            let focused = field == state.focus;

            let mut value = vec![Span::raw(self.product.field(field))];
            if focused {
                value.push(Span::raw(CURSOR).yellow());
            }

            let border_style = if focused {
                Style::default().yellow()
            } else {
                Style::default().dark_gray()
            };

            Paragraph::new(Line::from(value))
                .block(
                    Block::new()
                        .borders(Borders::ALL)
                        .border_style(border_style)
                        .title(field.label()),
                )
                .render(*area, buf);
        }

        if state.show_errors {
            let errors = self
                .product
                .errors()
                .iter()
                .map(|error| Line::from(format!("{}: {error}", error.field())).red())
                .collect_vec();

            if let Some(area) = rows.last() {
                Paragraph::new(errors).render(*area, buf);
            }
        }
    }
}
