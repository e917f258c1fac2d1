use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalIntent {
    /// The card's edit action.
    Open,
    /// The close control or a successful save.
    Close,
    /// Click outside the modal. Does not close it.
    BackdropClick,
    /// Advance the slide-in.
    AnimationTick,
}

impl Intent for ModalIntent {}
