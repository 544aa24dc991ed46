mod confirm_dialog;
mod product_panel;
mod state;
mod tab_strip;

pub use confirm_dialog::{ConfirmDialog, ConfirmDialogState};
pub use product_panel::{Edit, ProductPanel, ProductPanelState};
pub use state::KeyEventHandler;
pub use tab_strip::{TabStrip, TabStripState};
