use std::{fmt::Display, io::Stdout};

use color_eyre::eyre;
use crossterm::event::{self, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};
use tab_set::{TabId, TabsOptions};

use crate::{
    form::{self, Field, ProductTabs},
    mode::Mode,
    utils::KeyEventExt,
    widgets::{
        ConfirmDialog, Edit, KeyEventHandler, ProductPanel, ProductPanelState, TabStrip,
        TabStripState,
    },
};

type Terminal = ratatui::Terminal<ratatui::backend::CrosstermBackend<Stdout>>;

const ADD_LABEL: &str = "+ Add product";
const REMOVE_LABEL: &str = "×";
const HELP: &str =
    "^T add  ^W close  PgUp/PgDn switch  ^←/^→ scroll  Tab next field  Enter submit  Esc quit";

pub struct App;

impl App {
    pub fn run(terminal: &mut Terminal, options: TabsOptions) -> eyre::Result<()> {
        let mut state = AppState::new(options)?;

        while !state.quit {
            terminal.draw(|f| state.draw(f))?;

            Self::handle_key_events(&mut state)?;

            state.update();
        }

        Ok(())
    }

    fn handle_key_events(state: &mut AppState) -> std::io::Result<()> {
        if event::poll(std::time::Duration::from_millis(16))? {
            if let event::Event::Key(key) = event::read()? {
                state.handle_key_event(&key);
            }
        }
        Ok(())
    }
}

pub struct AppState {
    quit: bool,
    mode: Mode,
    products: ProductTabs,
    strip: TabStripState,
    panel: ProductPanelState,
    status: Status,
}

impl AppState {
    fn new(options: TabsOptions) -> eyre::Result<Self> {
        Ok(Self {
            quit: false,
            mode: Mode::default(),
            products: ProductTabs::new(options, Vec::new())?,
            strip: TabStripState::default(),
            panel: ProductPanelState::default(),
            status: Status::Help,
        })
    }

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

        if let Some(id) = self.products.take_scroll_request() {
            self.strip.scroll_to(id.index());
        }

        let view = self.products.view();
        frame.render_stateful_widget(
            TabStrip::new(&view)
                .add_label(ADD_LABEL)
                .remove_label(REMOVE_LABEL),
            rows[0],
            &mut self.strip,
        );
        self.products.set_extents(self.strip.extents());

        if let Some(product) = self.products.active_entry() {
            frame.render_stateful_widget(
                ProductPanel::new(product, self.products.tabs().typed_title()),
                rows[1],
                &mut self.panel,
            );
        }

        frame.render_widget(Paragraph::new(self.status.line()), rows[2]);

        if let Mode::Confirming(dialog) = &self.mode {
            frame.render_widget(ConfirmDialog::new(dialog.prompt()), frame.size());
        }
    }

    fn handle_key_event(&mut self, key: &event::KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.has_pressed_ctrl('c') {
            self.quit = true;
        } else if let Mode::Confirming(ref mut dialog) = self.mode {
            if let Some(confirmed) = dialog.handle_key_event(key) {
                self.finish_removal(confirmed);
            }
        } else if key.has_pressed(KeyCode::Esc) {
            self.quit = true;
        } else if key.has_pressed_ctrl('t') {
            self.add_tab();
        } else if key.has_pressed_ctrl('w') {
            self.request_removal();
        } else if key.has_pressed(KeyCode::PageUp) {
            self.select(|index| index.checked_sub(1));
        } else if key.has_pressed(KeyCode::PageDown) {
            self.select(|index| index.checked_add(1));
        } else if key.code == KeyCode::Left && key.modifiers.contains(event::KeyModifiers::CONTROL)
        {
            self.strip.scroll_left();
        } else if key.code == KeyCode::Right && key.modifiers.contains(event::KeyModifiers::CONTROL)
        {
            self.strip.scroll_right();
        } else if let Some(edit) = self.panel.handle_key_event(key) {
            self.edit(edit);
        }
    }

    fn add_tab(&mut self) {
        self.status = match self.products.add_new_tab() {
            Some(id) => Status::Added(id),
            None => Status::LimitReached,
        };
    }

    fn request_removal(&mut self) {
        let id = self.products.tabs().active_tab_id();
        if let Some(pending) = self.products.request_removal(id) {
            self.mode = Mode::Confirming(pending.into());
        }
    }

    fn finish_removal(&mut self, confirmed: bool) {
        let Ok(dialog) = std::mem::take(&mut self.mode).into_confirming() else {
            return;
        };

        let pending = dialog.into_pending();
        let id = pending.id();
        if self.products.resolve_removal(pending, confirmed) {
            self.status = Status::Removed(id);
        }
    }

    fn select(&mut self, step: impl FnOnce(usize) -> Option<usize>) {
        let current = self.products.tabs().active_index();
        if let Some(index) = step(current) {
            if self.products.set_active_tab_id(TabId::new(index)) {
                self.strip.scroll_to(index);
            }
        }
    }

    fn edit(&mut self, edit: Edit) {
        let focus = self.panel.focus();

        if edit == Edit::Submit {
            self.submit();
            return;
        }

        let Some(product) = self.products.active_entry_mut() else {
            return;
        };

        let value = product.field_mut(focus);
        match edit {
            Edit::Insert(c) => value.push(c),
            Edit::Backspace => {
                value.pop();
            }
            Edit::Submit => {}
        }

        // The product name doubles as the tab title.
        if focus == Field::Name {
            let name = product.name.clone();
            self.products.set_tab_title(name);
        }
    }

    fn submit(&mut self) {
        match form::validate(self.products.fields()) {
            Ok(products) => {
                tracing::info!(?products, "Submitted products");
                self.status = Status::Submitted(products.len());
            }
            Err(error) => {
                tracing::debug!(%error, "Rejected submit");
                self.panel.show_errors();
                self.status = Status::Invalid(error.to_string());
            }
        }
    }

    fn update(&mut self) {
        self.products.update();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Help,
    Added(TabId),
    LimitReached,
    Removed(TabId),
    Submitted(usize),
    Invalid(String),
}

impl Status {
    fn line(&self) -> Line<'_> {
        match self {
            Self::Help => Line::from(Span::raw(HELP).dark_gray()),
            Self::Invalid(_) | Self::LimitReached => Line::from(self.to_string()).red(),
            _ => Line::from(self.to_string()).green(),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Help => f.write_str(HELP),
            Self::Added(id) => write!(f, "Added {id}"),
            Self::LimitReached => f.write_str("Tab limit reached"),
            Self::Removed(id) => write!(f, "Removed {id}"),
            Self::Submitted(count) => write!(f, "Submitted {count} product(s)"),
            Self::Invalid(error) => f.write_str(error),
        }
    }
}
