use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormField, FormState};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Input(ch) => {
                match state.focus {
                    FormField::Name => state.draft.name.push(ch),
                    FormField::ImagePath => state.image_input.push(ch),
                    FormField::Save => {}
                }
                state
            }
            FormIntent::Backspace => {
                match state.focus {
                    FormField::Name => {
                        state.draft.name.pop();
                    }
                    FormField::ImagePath => {
                        state.image_input.pop();
                    }
                    FormField::Save => {}
                }
                state
            }
            FormIntent::FocusNext => FormState {
                focus: state.focus.next(),
                ..state
            },
            FormIntent::FocusPrev => FormState {
                focus: state.focus.prev(),
                ..state
            },
            FormIntent::ImageAccepted(image) => {
                state.draft.image = Some(image);
                state
            }
            FormIntent::SubmitStarted => FormState {
                saving: true,
                ..state
            },
            FormIntent::SubmitSettled => FormState {
                saving: false,
                ..state
            },
            FormIntent::Reset => FormState::default(),
        }
    }
}
