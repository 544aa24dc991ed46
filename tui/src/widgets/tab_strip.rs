use itertools::Itertools;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    prelude::{Buffer, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use tab_set::{
    strip::{self, Corner, Corners},
    Extents, TabsView,
};

const ADD_LABEL: &str = "+ Add new tab";
const REMOVE_LABEL: &str = "×";
const HINT_WIDTH: u16 = 3;
// Borders and one cell of padding on each side.
const HEADER_CHROME: usize = 4;

/// Browser-like tab headers with scroll hints and an add button.
pub struct TabStrip<'a> {
    view: &'a TabsView,
    add_label: &'a str,
    remove_label: &'a str,
}

impl<'a> TabStrip<'a> {
    pub const fn new(view: &'a TabsView) -> Self {
        Self {
            view,
            add_label: ADD_LABEL,
            remove_label: REMOVE_LABEL,
        }
    }

    pub const fn add_label(mut self, label: &'a str) -> Self {
        self.add_label = label;
        self
    }

    pub const fn remove_label(mut self, label: &'a str) -> Self {
        self.remove_label = label;
        self
    }

    fn header_width(&self, title: &str) -> u16 {
        let mut width = Span::raw(title).width() + HEADER_CHROME;
        if self.view.removable() {
            width += Span::raw(self.remove_label).width() + 1;
        }
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    fn render_header(&self, index: usize, overflowing: bool, area: Rect, buf: &mut Buffer) {
        let tab = &self.view.tabs[index];
        let active = index == self.view.active;

        let border_style = if active {
            Style::default().yellow()
        } else {
            Style::default().dark_gray()
        };
        let title = if active {
            Span::raw(tab.title()).bold().yellow()
        } else {
            Span::raw(tab.title())
        };

        let mut spans = vec![title];
        if self.view.removable() {
            spans.push(Span::raw(" "));
            spans.push(Span::raw(self.remove_label).red());
        }

        let block = Block::new()
            .borders(Borders::ALL)
            .border_set(border_set(Corners::for_header(
                index,
                self.view.len(),
                overflowing,
            )))
            .border_style(border_style);

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }

    fn render_add_button(&self, area: Rect, buf: &mut Buffer) {
        let label = if self.view.max_reached {
            Span::raw(self.add_label).dark_gray().dim()
        } else {
            Span::raw(self.add_label).green()
        };

        Paragraph::new(Line::from(label))
            .alignment(Alignment::Center)
            .block(
                Block::new()
                    .borders(Borders::ALL)
                    .border_set(symbols::border::ROUNDED)
                    .border_style(Style::default().dark_gray()),
            )
            .render(area, buf);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TabStripState {
    offset: usize,
    scroll_target: Option<usize>,
    extents: Extents,
}

impl TabStripState {
    /// Measured on the last render.
    pub const fn extents(&self) -> Extents {
        self.extents
    }

    /// Make the tab at `index` visible on the next render.
    pub fn scroll_to(&mut self, index: usize) {
        self.scroll_target = Some(index);
    }

    pub fn scroll_left(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_right(&mut self) {
        // Clamped to the last tab on render.
        self.offset = self.offset.saturating_add(1);
    }
}

impl StatefulWidget for TabStrip<'_> {
    type State = TabStripState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let add_width = u16::try_from(Span::raw(self.add_label).width() + HEADER_CHROME)
            .unwrap_or(u16::MAX);
        let [strip_area, add_area] = split(
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(add_width)]),
            area,
        );

        let widths = self
            .view
            .tabs
            .iter()
            .map(|tab| self.header_width(tab.title()))
            .collect_vec();

        // Measured for the controller, which decides on overflow for the next frame.
        state.extents = Extents::new(
            strip_area.width.into(),
            widths.last().copied().unwrap_or_default().into(),
        );
        let overflowing = self.view.overflowing;

        // Scroll hints take the outer corners of the strip.
        let (headers_area, hints) = if overflowing {
            let [left, middle, right] = split(
                Layout::horizontal([
                    Constraint::Length(HINT_WIDTH),
                    Constraint::Fill(1),
                    Constraint::Length(HINT_WIDTH),
                ]),
                strip_area,
            );
            (middle, Some((left, right)))
        } else {
            (strip_area, None)
        };

        let widths = widths.into_iter().map(u32::from).collect_vec();
        let available = u32::from(headers_area.width);

        if let Some(target) = state.scroll_target.take() {
            state.offset = strip::scroll_into_view(target, state.offset, &widths, available);
        }
        let visible = strip::visible_range(&widths, state.offset, available);
        state.offset = visible.start;

        let mut x = headers_area.x;
        for index in visible.clone() {
            let width = u16::try_from(widths[index])
                .unwrap_or(u16::MAX)
                .min(headers_area.right().saturating_sub(x));
            let header = Rect::new(x, headers_area.y, width, headers_area.height);
            self.render_header(index, overflowing, header, buf);
            x = x.saturating_add(width);
        }

        if let Some((left, right)) = hints {
            render_hint("‹", visible.start > 0, left, buf);
            render_hint("›", visible.end < widths.len(), right, buf);
        }

        self.render_add_button(add_area, buf);
    }
}

fn render_hint(symbol: &str, enabled: bool, area: Rect, buf: &mut Buffer) {
    let symbol = if enabled {
        Span::raw(symbol).bold()
    } else {
        Span::raw(symbol).dark_gray()
    };

    Paragraph::new(Line::from(symbol))
        .alignment(Alignment::Center)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .border_set(symbols::border::ROUNDED)
                .border_style(Style::default().dark_gray()),
        )
        .render(area, buf);
}

fn border_set(corners: Corners) -> symbols::border::Set {
    let (top_left, bottom_left) = match corners.left {
        Corner::Rounded => (
            symbols::line::ROUNDED_TOP_LEFT,
            symbols::line::ROUNDED_BOTTOM_LEFT,
        ),
        Corner::Square => (
            symbols::line::NORMAL.top_left,
            symbols::line::NORMAL.bottom_left,
        ),
    };
    let (top_right, bottom_right) = match corners.right {
        Corner::Rounded => (
            symbols::line::ROUNDED_TOP_RIGHT,
            symbols::line::ROUNDED_BOTTOM_RIGHT,
        ),
        Corner::Square => (
            symbols::line::NORMAL.top_right,
            symbols::line::NORMAL.bottom_right,
        ),
    };

    symbols::border::Set {
        top_left,
        top_right,
        bottom_left,
        bottom_right,
        ..symbols::border::PLAIN
    }
}

fn split<const N: usize>(layout: Layout, area: Rect) -> [Rect; N] {
    let rects = layout.split(area);
    std::array::from_fn(|i| rects.get(i).copied().unwrap_or_default())
}
