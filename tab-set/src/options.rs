use std::time::Duration;

pub const DEFAULT_MAX_ITEMS: usize = 5;
pub const DEFAULT_TITLE: &str = "New Tab";

const TITLE_DELAY: Duration = Duration::from_millis(500);
const SCROLL_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsOptions {
    /// Tab count ceiling, `None` for unbounded.
    pub max_items: Option<usize>,
    /// Quiet period before a staged title is committed.
    pub title_delay: Duration,
    /// Quiet period after a tab set change before scrolling the active tab into view.
    pub scroll_delay: Duration,
    pub default_title: String,
}

impl Default for TabsOptions {
    fn default() -> Self {
        Self {
            max_items: Some(DEFAULT_MAX_ITEMS),
            title_delay: TITLE_DELAY,
            scroll_delay: SCROLL_DELAY,
            default_title: DEFAULT_TITLE.to_owned(),
        }
    }
}

impl TabsOptions {
    #[must_use]
    pub fn with_max_items(mut self, max_items: impl Into<Option<usize>>) -> Self {
        // A tab set always holds one tab, a lower ceiling makes no sense.
        self.max_items = max_items.into().map(|max| max.max(1));
        self
    }

    #[must_use]
    pub fn unbounded(self) -> Self {
        Self {
            max_items: None,
            ..self
        }
    }

    #[must_use]
    pub fn with_title_delay(mut self, delay: Duration) -> Self {
        self.title_delay = delay;
        self
    }

    #[must_use]
    pub fn with_scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = delay;
        self
    }

    #[must_use]
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }
}
