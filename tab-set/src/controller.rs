use std::sync::Arc;

use debounce::Debouncer;
use itertools::Itertools;

use crate::{Extents, TabId, TabKey, TabsOptions};

pub type TabTitle = Arc<str>;
pub type Tabs = Arc<[Tab]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    key: TabKey,
    title: TabTitle,
}

impl Tab {
    #[must_use]
    pub const fn key(&self) -> TabKey {
        self.key
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Ordered set of tabs with an active pointer, the state behind a browser-like tab strip.
///
/// The set is never empty. It is replaced wholesale on every change, so snapshots
/// taken with [`TabsController::snapshot`] never observe later mutations.
///
/// Title edits and scroll-into-view requests are debounced; call
/// [`TabsController::update`] from the event loop to apply the ones that fired.
/// Mutating operations schedule timers and must run within a tokio runtime.
#[derive(Debug)]
pub struct TabsController {
    tabs: Tabs,
    active: TabKey,
    next_key: u64,
    options: TabsOptions,
    max_reached: bool,
    typed_title: Option<String>,
    title_commit: Debouncer<String>,
    scroll_trigger: Debouncer<()>,
    scroll_request: Option<TabKey>,
    extents: Extents,
}

impl Default for TabsController {
    fn default() -> Self {
        Self::new(TabsOptions::default())
    }
}

/// Controller's read model
impl TabsController {
    #[must_use]
    pub fn new(options: TabsOptions) -> Self {
        let first = Tab {
            key: TabKey(0),
            title: options.default_title.as_str().into(),
        };

        let mut controller = Self {
            tabs: Arc::new([first]),
            active: TabKey(0),
            next_key: 1,
            title_commit: Debouncer::new(options.title_delay),
            scroll_trigger: Debouncer::new(options.scroll_delay),
            options,
            max_reached: false,
            typed_title: None,
            scroll_request: None,
            extents: Extents::default(),
        };
        controller.max_reached = controller.compute_max_reached();
        controller
    }

    #[must_use]
    pub const fn options(&self) -> &TabsOptions {
        &self.options
    }

    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    #[must_use]
    pub fn snapshot(&self) -> Tabs {
        Arc::clone(&self.tabs)
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.index_of(self.active)
            .unwrap_or_else(|| self.tabs.len() - 1)
    }

    #[must_use]
    pub fn active_tab_id(&self) -> TabId {
        TabId::new(self.active_index())
    }

    #[must_use]
    pub const fn active_key(&self) -> TabKey {
        self.active
    }

    /// Committed title of the active tab.
    #[must_use]
    pub fn tab_title(&self) -> &str {
        self.tabs[self.active_index()].title()
    }

    /// Title as typed: the staged value while a commit is pending, the committed one otherwise.
    #[must_use]
    pub fn typed_title(&self) -> &str {
        self.typed_title
            .as_deref()
            .unwrap_or_else(|| self.tab_title())
    }

    #[must_use]
    pub const fn is_max_item_reached(&self) -> bool {
        self.max_reached
    }

    #[must_use]
    pub fn is_removable(&self) -> bool {
        self.tabs.len() > 1
    }

    #[must_use]
    pub fn is_tab_intersect_with_root_el(&self) -> bool {
        self.extents.overflows(self.tabs.len())
    }

    #[must_use]
    pub const fn extents(&self) -> Extents {
        self.extents
    }

    #[must_use]
    pub fn is_title_pending(&self) -> bool {
        self.title_commit.is_pending()
    }

    #[must_use]
    pub fn view(&self) -> TabsView {
        TabsView {
            tabs: self.snapshot(),
            active: self.active_index(),
            max_reached: self.max_reached,
            overflowing: self.is_tab_intersect_with_root_el(),
        }
    }

    fn index_of(&self, key: TabKey) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.key == key)
    }

    fn compute_max_reached(&self) -> bool {
        self.options
            .max_items
            .is_some_and(|max| self.tabs.len() >= max)
    }
}

/// Controller's operations
impl TabsController {
    /// Append a tab with the default title and make it active.
    ///
    /// Does nothing once the ceiling is reached.
    pub fn add_new_tab(&mut self) -> Option<TabId> {
        if self.max_reached {
            tracing::debug!(total = self.tabs.len(), "Refused to add a tab, ceiling reached");
            return None;
        }

        let tab = Tab {
            key: self.generate_key(),
            title: self.options.default_title.as_str().into(),
        };
        self.active = tab.key;
        self.tabs = self.tabs.iter().cloned().chain([tab]).collect_vec().into();
        self.max_reached = self.compute_max_reached();
        self.scroll_trigger.set(());

        let id = self.active_tab_id();
        tracing::debug!(%id, total = self.tabs.len(), "Added tab");
        Some(id)
    }

    /// Remove the tab at `id` and select the last remaining tab.
    ///
    /// Refuses to remove the only tab or an unknown one.
    pub fn remove_tab(&mut self, id: TabId) -> bool {
        if !self.is_removable() {
            tracing::debug!(%id, "Refused to remove the last tab");
            return false;
        }
        if id.index() >= self.tabs.len() {
            tracing::debug!(%id, total = self.tabs.len(), "Refused to remove unknown tab");
            return false;
        }

        let mut tabs = self.tabs.to_vec();
        tabs.remove(id.index());
        self.tabs = tabs.into();

        // Selection always moves to the last tab, not to a neighbour of the removed one.
        self.active = self.tabs[self.tabs.len() - 1].key;
        self.max_reached = self.compute_max_reached();
        self.scroll_trigger.set(());

        tracing::debug!(%id, total = self.tabs.len(), "Removed tab");
        true
    }

    pub fn set_active_tab_id(&mut self, id: TabId) -> bool {
        let Some(tab) = self.tabs.get(id.index()) else {
            tracing::debug!(%id, "Ignored selection of unknown tab");
            return false;
        };
        self.active = tab.key;
        true
    }

    /// Stage a rename of the active tab.
    ///
    /// The value is committed after the title delay passes without another call,
    /// into whichever tab is active at that moment.
    pub fn set_tab_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.typed_title = Some(title.clone());
        self.title_commit.set(title);
    }

    /// Rendering layer reports the measured widths here.
    pub fn set_extents(&mut self, extents: Extents) {
        self.extents = extents;
    }

    /// Active tab to scroll into view, requested after the tab set changed.
    pub fn take_scroll_request(&mut self) -> Option<TabId> {
        let key = self.scroll_request.take()?;
        self.index_of(key).map(TabId::new)
    }

    /// Apply debounced effects whose timers have elapsed.
    pub fn update(&mut self) {
        if let Some(title) = self.title_commit.try_next() {
            self.commit_title(title);
        }

        if self.scroll_trigger.try_next().is_some() {
            self.scroll_request = Some(self.active);
        }
    }

    fn commit_title(&mut self, title: String) {
        // A newer value may have been staged after this one fired.
        if !self.title_commit.is_pending() || self.typed_title.as_deref() == Some(title.as_str()) {
            self.typed_title = None;
        }

        if title.trim().is_empty() {
            tracing::debug!("Discarded blank tab title");
            return;
        }

        let index = self.active_index();
        let title: TabTitle = title.into();

        self.tabs = self
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                if i == index {
                    Tab {
                        key: tab.key,
                        title: Arc::clone(&title),
                    }
                } else {
                    tab.clone()
                }
            })
            .collect_vec()
            .into();
        self.scroll_trigger.set(());

        tracing::debug!(index, %title, "Committed tab title");
    }

    fn generate_key(&mut self) -> TabKey {
        let key = TabKey(self.next_key);
        self.next_key += 1;
        key
    }
}

/// Read-only state handed to the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsView {
    pub tabs: Tabs,
    pub active: usize,
    pub max_reached: bool,
    pub overflowing: bool,
}

impl TabsView {
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    #[must_use]
    pub fn removable(&self) -> bool {
        self.tabs.len() > 1
    }
}
