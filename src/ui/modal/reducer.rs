use crate::ui::mvi::Reducer;

use super::intent::ModalIntent;
use super::state::{ModalState, SLIDE_FRAMES};

pub struct ModalReducer;

impl Reducer for ModalReducer {
    type State = ModalState;
    type Intent = ModalIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (ModalState::Closed, ModalIntent::Open) => ModalState::Open {
                slide: SLIDE_FRAMES,
            },
            (ModalState::Open { .. }, ModalIntent::Close) => ModalState::Closed,
            (ModalState::Open { slide }, ModalIntent::AnimationTick) => ModalState::Open {
                slide: slide.saturating_sub(1),
            },
            (state, _) => state,
        }
    }
}
