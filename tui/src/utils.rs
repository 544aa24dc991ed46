use crossterm::event::{self, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub trait KeyEventExt {
    fn has_pressed(&self, code: KeyCode) -> bool;
    fn has_pressed_ctrl(&self, c: char) -> bool;
    /// Printable character typed without a command modifier.
    fn typed_char(&self) -> Option<char>;
}

impl KeyEventExt for event::KeyEvent {
    fn has_pressed(&self, code: KeyCode) -> bool {
        (self.kind, self.code) == (KeyEventKind::Press, code)
            && !self.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn has_pressed_ctrl(&self, c: char) -> bool {
        (self.kind, self.code) == (KeyEventKind::Press, KeyCode::Char(c))
            && self.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn typed_char(&self) -> Option<char> {
        match (self.kind, self.code) {
            (KeyEventKind::Press, KeyCode::Char(c))
                if !self
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        }
    }
}

pub trait RectExt {
    fn inner_centered(self, percent_x: u16, percent_y: u16) -> Self;
}

impl RectExt for Rect {
    fn inner_centered(self, percent_x: u16, percent_y: u16) -> Self {
        assert!(percent_x <= 100);
        assert!(percent_y <= 100);

        let area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(self)[1];

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(area)[1]
    }
}
