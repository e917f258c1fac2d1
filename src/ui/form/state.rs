use crate::model::EditDraft;
use crate::ui::mvi::UiState;

/// Focusable controls in the edit form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    ImagePath,
    Save,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::ImagePath,
            FormField::ImagePath => FormField::Save,
            FormField::Save => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Save,
            FormField::ImagePath => FormField::Name,
            FormField::Save => FormField::ImagePath,
        }
    }
}

/// The edit form: the draft plus what is needed to type into it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub draft: EditDraft,
    pub focus: FormField,
    /// Path typed into the image field; becomes the draft's image only once
    /// selected and validated.
    pub image_input: String,
    /// A save is outstanding.
    pub saving: bool,
}

impl UiState for FormState {}
