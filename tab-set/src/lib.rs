mod controller;
mod extents;
mod id;
mod options;
pub mod strip;
mod sync;

pub use controller::{Tab, TabTitle, Tabs, TabsController, TabsView};
pub use extents::Extents;
pub use id::{ParseTabIdError, TabId, TabKey};
pub use options::TabsOptions;
pub use sync::{
    Confirm, ConfirmPrompt, FieldArray, PendingRemoval, SyncError, TabbedFieldArray,
};
