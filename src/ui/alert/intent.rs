//! Intents for the alert slot.

use crate::ui::mvi::Intent;
use std::time::Instant;

use super::state::AlertNotification;

/// How the user tried to dismiss a visible alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Explicit close action (close key or a click on the toast itself).
    CloseButton,
    /// Pointer or focus went elsewhere. Never hides the alert.
    ClickAway,
}

#[derive(Debug, Clone)]
pub enum AlertIntent {
    /// Replace whatever is showing. `now` anchors the auto-dismiss deadline.
    Show {
        notification: AlertNotification,
        now: Instant,
    },

    /// Hide and reset to defaults.
    Hide,

    /// User dismissal, filtered by reason.
    Dismiss { reason: DismissReason },

    /// Clock tick; hides the alert once its deadline has passed.
    Expire { now: Instant },
}

impl Intent for AlertIntent {}
