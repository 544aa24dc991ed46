use std::future::Future;

use crate::{Extents, TabId, TabsController, TabsOptions, TabsView};

/// Ordered form entries kept in lockstep with the tabs, one entry per tab at the same index.
pub trait FieldArray {
    type Entry;

    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<&Self::Entry>;
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Entry>;
    fn append(&mut self, entry: Self::Entry);
    fn remove(&mut self, index: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> FieldArray for Vec<T> {
    type Entry = T;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn append(&mut self, entry: T) {
        self.push(entry);
    }

    fn remove(&mut self, index: usize) {
        Self::remove(self, index);
    }
}

/// Yes/no question asked before a tab and its entry are deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub description: String,
    pub confirm_text: String,
    pub cancel_text: String,
}

impl Default for ConfirmPrompt {
    fn default() -> Self {
        Self {
            title: "Do you want to delete the tab?".to_owned(),
            description: "If you delete the tab, you will lose all the data under the tab."
                .to_owned(),
            confirm_text: "Yes".to_owned(),
            cancel_text: "No".to_owned(),
        }
    }
}

/// External confirm-or-cancel step.
pub trait Confirm {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> impl Future<Output = bool>;
}

/// Removal waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    id: TabId,
    prompt: ConfirmPrompt,
}

impl PendingRemoval {
    #[must_use]
    pub const fn id(&self) -> TabId {
        self.id
    }

    #[must_use]
    pub const fn prompt(&self) -> &ConfirmPrompt {
        &self.prompt
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("A new tab set has 1 tab, but the field array has {0} entries")]
    Misaligned(usize),
}

/// Tabs bound to a field array.
///
/// Adding and removing tabs goes through this type only, so both sides always have the
/// same length and entry `i` belongs to tab `i`.
#[derive(Debug)]
pub struct TabbedFieldArray<F> {
    tabs: TabsController,
    fields: F,
    prompt: ConfirmPrompt,
}

impl<F> TabbedFieldArray<F>
where
    F: FieldArray,
    F::Entry: Default,
{
    /// Bind `fields` to a fresh tab set; an empty array gets its first entry.
    pub fn new(options: TabsOptions, mut fields: F) -> Result<Self, SyncError> {
        if fields.is_empty() {
            fields.append(F::Entry::default());
        }
        if fields.len() != 1 {
            return Err(SyncError::Misaligned(fields.len()));
        }

        Ok(Self {
            tabs: TabsController::new(options),
            fields,
            prompt: ConfirmPrompt::default(),
        })
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: ConfirmPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    #[must_use]
    pub const fn tabs(&self) -> &TabsController {
        &self.tabs
    }

    #[must_use]
    pub const fn fields(&self) -> &F {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> F {
        self.fields
    }

    #[must_use]
    pub fn view(&self) -> TabsView {
        self.tabs.view()
    }

    /// Entry of the active tab, addressed by the active index as of now.
    #[must_use]
    pub fn active_entry(&self) -> Option<&F::Entry> {
        self.fields.get(self.tabs.active_index())
    }

    pub fn active_entry_mut(&mut self) -> Option<&mut F::Entry> {
        self.fields.get_mut(self.tabs.active_index())
    }

    pub fn add_new_tab(&mut self) -> Option<TabId> {
        let id = self.tabs.add_new_tab()?;
        self.fields.append(F::Entry::default());
        debug_assert_eq!(self.tabs.total_items(), self.fields.len());
        Some(id)
    }

    /// Start removing the tab at `id`; `None` when it cannot be removed.
    #[must_use]
    pub fn request_removal(&self, id: TabId) -> Option<PendingRemoval> {
        if !self.tabs.is_removable() || id.index() >= self.tabs.total_items() {
            tracing::debug!(%id, "Tab is not removable");
            return None;
        }

        Some(PendingRemoval {
            id,
            prompt: self.prompt.clone(),
        })
    }

    /// Finish a removal with the user's answer. A decline leaves everything as it was.
    pub fn resolve_removal(&mut self, pending: PendingRemoval, confirmed: bool) -> bool {
        let id = pending.id;

        if !confirmed {
            tracing::debug!(%id, "Tab removal declined");
            return false;
        }

        if !self.tabs.remove_tab(id) {
            return false;
        }
        self.fields.remove(id.index());
        debug_assert_eq!(self.tabs.total_items(), self.fields.len());
        true
    }

    /// Ask `confirm` and remove the tab with its entry when the answer is yes.
    pub async fn remove_tab_with<C>(&mut self, id: TabId, confirm: &mut C) -> bool
    where
        C: Confirm,
    {
        let Some(pending) = self.request_removal(id) else {
            return false;
        };
        let confirmed = confirm.confirm(pending.prompt()).await;
        self.resolve_removal(pending, confirmed)
    }

    pub fn set_active_tab_id(&mut self, id: TabId) -> bool {
        self.tabs.set_active_tab_id(id)
    }

    pub fn set_tab_title(&mut self, title: impl Into<String>) {
        self.tabs.set_tab_title(title);
    }

    pub fn set_extents(&mut self, extents: Extents) {
        self.tabs.set_extents(extents);
    }

    pub fn take_scroll_request(&mut self) -> Option<TabId> {
        self.tabs.take_scroll_request()
    }

    pub fn update(&mut self) {
        self.tabs.update();
    }
}
