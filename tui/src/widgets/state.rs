use crossterm::event::KeyEvent;

/// Widget state that reacts to keys and reports what the app should do about them.
pub trait KeyEventHandler {
    type Action;

    fn handle_key_event(&mut self, event: &KeyEvent) -> Option<Self::Action>;
}
