use crate::model::CandidateImage;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// A typed character, applied to the focused text field.
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// A selected file passed validation.
    ImageAccepted(CandidateImage),
    SubmitStarted,
    /// The save finished without closing the modal (failure, or a save sent
    /// from an earlier opening). The draft stays.
    SubmitSettled,
    /// Discard everything (modal closed).
    Reset,
}

impl Intent for FormIntent {}
