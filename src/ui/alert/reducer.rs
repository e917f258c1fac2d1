//! Reducer for the alert slot.

use crate::ui::mvi::Reducer;

use super::intent::{AlertIntent, DismissReason};
use super::state::AlertState;

/// Last writer wins: there is no queue, and a new `Show` drops the previous
/// notification along with its pending deadline.
pub struct AlertReducer;

impl Reducer for AlertReducer {
    type State = AlertState;
    type Intent = AlertIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AlertIntent::Show { notification, now } => AlertState::showing(notification, now),

            AlertIntent::Hide => AlertState::default(),

            AlertIntent::Dismiss {
                reason: DismissReason::ClickAway,
            } => state,

            AlertIntent::Dismiss {
                reason: DismissReason::CloseButton,
            } => Self::reduce(state, AlertIntent::Hide),

            AlertIntent::Expire { now } => {
                if state.is_expired(now) {
                    AlertState::default()
                } else {
                    state
                }
            }
        }
    }
}
