use crate::widgets::ConfirmDialogState;

/// Where key events go.
#[derive(Debug, Default, enum_as_inner::EnumAsInner)]
pub enum Mode {
    #[default]
    Editing,
    Confirming(ConfirmDialogState),
}
