//! State for the transient notification (toast).

use crate::ui::mvi::UiState;
use std::time::{Duration, Instant};

/// Auto-dismiss delay used for every alert the app raises.
pub const ALERT_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Error,
    Info,
    #[default]
    Success,
    Warning,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Info => "Info",
            Severity::Success => "Success",
            Severity::Warning => "Warning",
        }
    }
}

/// The single notification slot.
///
/// `Default` is the hidden state: success severity, empty message, no
/// auto-dismiss.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertNotification {
    pub visible: bool,
    pub severity: Severity,
    pub message: String,
    pub auto_dismiss: Option<Duration>,
}

impl AlertNotification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            visible: true,
            severity,
            message: message.into(),
            auto_dismiss: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message).with_auto_dismiss(ALERT_DURATION)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message).with_auto_dismiss(ALERT_DURATION)
    }

    pub fn with_auto_dismiss(mut self, after: Duration) -> Self {
        self.auto_dismiss = Some(after);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertState {
    notification: AlertNotification,
    /// When the current notification hides itself, if it auto-dismisses.
    expires_at: Option<Instant>,
}

impl UiState for AlertState {}

impl AlertState {
    pub(super) fn showing(notification: AlertNotification, now: Instant) -> Self {
        let expires_at = notification.auto_dismiss.map(|after| now + after);
        Self {
            notification: AlertNotification {
                visible: true,
                ..notification
            },
            expires_at,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.notification.visible
    }

    pub fn notification(&self) -> &AlertNotification {
        &self.notification
    }

    pub fn severity(&self) -> Severity {
        self.notification.severity
    }

    pub fn message(&self) -> &str {
        &self.notification.message
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    pub(super) fn is_expired(&self, now: Instant) -> bool {
        self.is_visible() && self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}
