use crate::api::ApiError;
use crate::model::{CandidateImage, EditDraft, SelectedFile, UserProfile, INVALID_IMAGE_MESSAGE};
use crate::ui::alert::{
    toast_rect, AlertIntent, AlertNotification, AlertReducer, AlertState, DismissReason,
};
use crate::ui::form::{expiry, FormIntent, FormReducer, FormState};
use crate::ui::layout::contains;
use crate::ui::modal::{modal_rect, ModalIntent, ModalReducer, ModalState};
use crate::ui::mvi::Reducer;
use crate::ui::profile::{ProfileIntent, ProfileReducer, ProfileState};
use chrono::{DateTime, Local, TimeZone};
use ratatui::layout::Rect;
use std::time::Instant;
use tokio::sync::mpsc;

/// Message of the alert raised after a successful save.
pub const SAVED_MESSAGE: &str = "saved successfully";

/// Work the UI asks the API worker to do.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    FetchProfile {
        generation: u64,
    },
    SaveProfile {
        generation: u64,
        draft: EditDraft,
        valid_until: String,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns every state slice and sequences the side effects between them.
///
/// All methods run on the UI thread. API calls leave as `UiCommand`s and
/// come back as `on_profile_fetched` / `on_profile_saved`, tagged with the
/// generation that issued them; anything from another generation or
/// arriving after `teardown` is dropped.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    ticks: usize,
    generation: u64,
    torn_down: bool,
    /// Bumped each time the modal opens.
    modal_session: u64,
    /// Modal session of the outstanding save. Lives here rather than in the
    /// form slice because closing the modal resets the form.
    save_in_flight: Option<u64>,
    profile: ProfileState,
    alert: AlertState,
    modal: ModalState,
    form: FormState,
    command_sender: Option<UiCommandSender>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            size: None,
            ticks: 0,
            generation: 0,
            torn_down: false,
            modal_session: 0,
            save_in_flight: None,
            profile: ProfileState::default(),
            alert: AlertState::default(),
            modal: ModalState::default(),
            form: FormState::default(),
            command_sender: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_saving(&self) -> bool {
        self.save_in_flight.is_some()
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    // ========================================================================
    // Profile data store
    // ========================================================================

    /// Initial load, issued once when the UI comes up.
    pub fn start(&mut self) {
        self.refresh();
    }

    /// Issues a `GET /user`. Overlapping refreshes are not coalesced.
    pub fn refresh(&mut self) {
        if self.torn_down {
            return;
        }
        self.dispatch_profile(ProfileIntent::RefreshStarted);
        let command = UiCommand::FetchProfile {
            generation: self.generation,
        };
        if !self.send_command(command) {
            self.dispatch_profile(ProfileIntent::Failed);
            self.show_alert(AlertNotification::error(ApiError::Network.user_message()));
        }
    }

    pub fn on_profile_fetched(&mut self, generation: u64, result: Result<UserProfile, ApiError>) {
        if self.is_stale(generation) {
            tracing::debug!(generation, "dropping stale profile fetch");
            return;
        }

        match result {
            Ok(profile) => self.dispatch_profile(ProfileIntent::Loaded { profile }),
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "profile fetch failed");
                self.dispatch_profile(ProfileIntent::Failed);
                self.show_alert(AlertNotification::error(err.user_message()));
            }
        }
    }

    // ========================================================================
    // Modal lifecycle
    // ========================================================================

    /// The card's edit action. Always starts from a blank draft.
    ///
    /// Reopening while an earlier save is outstanding shows it as saving, so
    /// the new draft cannot be submitted until that save settles.
    pub fn open_modal(&mut self) {
        if self.modal.is_open() {
            return;
        }
        self.modal_session = self.modal_session.wrapping_add(1);
        self.dispatch_form(FormIntent::Reset);
        self.dispatch_modal(ModalIntent::Open);
        if self.save_in_flight.is_some() {
            self.dispatch_form(FormIntent::SubmitStarted);
        }
    }

    /// The modal's close control. Discards the draft.
    pub fn close_modal(&mut self) {
        self.dispatch_modal(ModalIntent::Close);
        self.dispatch_form(FormIntent::Reset);
    }

    // ========================================================================
    // Form pipeline
    // ========================================================================

    pub fn type_char(&mut self, ch: char) {
        if self.modal.is_open() {
            self.dispatch_form(FormIntent::Input(ch));
        }
    }

    pub fn backspace(&mut self) {
        if self.modal.is_open() {
            self.dispatch_form(FormIntent::Backspace);
        }
    }

    pub fn focus_next(&mut self) {
        if self.modal.is_open() {
            self.dispatch_form(FormIntent::FocusNext);
        }
    }

    pub fn focus_prev(&mut self) {
        if self.modal.is_open() {
            self.dispatch_form(FormIntent::FocusPrev);
        }
    }

    /// Selects the file typed into the image field.
    pub fn select_image(&mut self) {
        let path = self.form.image_input.trim();
        if path.is_empty() {
            return;
        }
        let file = SelectedFile::from_path(path);
        self.select_file(file);
    }

    /// Accepts `file` into the draft only if it is declared as an image.
    pub fn select_file(&mut self, file: SelectedFile) {
        if !self.modal.is_open() {
            return;
        }
        match CandidateImage::try_from(file) {
            Ok(image) => {
                tracing::debug!(media_type = image.media_type(), "image selected");
                self.dispatch_form(FormIntent::ImageAccepted(image));
            }
            Err(rejected) => {
                tracing::info!(media_type = %rejected.media_type, "rejected non-image file");
                self.show_alert(AlertNotification::error(INVALID_IMAGE_MESSAGE));
            }
        }
    }

    pub fn submit(&mut self) {
        self.submit_at(&Local::now());
    }

    /// Sends the draft with a validity of one year from `now`.
    ///
    /// Ignored while the modal is closed or a save is already outstanding,
    /// including one sent before the modal was closed and reopened.
    pub fn submit_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        if self.torn_down || !self.modal.is_open() || self.save_in_flight.is_some() {
            return;
        }

        let valid_until = expiry::valid_until_from(now);
        self.dispatch_form(FormIntent::SubmitStarted);
        let command = UiCommand::SaveProfile {
            generation: self.generation,
            draft: self.form.draft.clone(),
            valid_until,
        };
        if self.send_command(command) {
            self.save_in_flight = Some(self.modal_session);
        } else {
            self.dispatch_form(FormIntent::SubmitSettled);
            self.show_alert(AlertNotification::error(ApiError::Network.user_message()));
        }
    }

    /// Save completion. Success closes the modal and only then refetches.
    ///
    /// A modal reopened after the save was sent holds a different draft; it
    /// stays open and only leaves the saving state.
    pub fn on_profile_saved(&mut self, generation: u64, result: Result<(), ApiError>) {
        if self.is_stale(generation) {
            tracing::debug!(generation, "dropping stale save result");
            return;
        }

        let same_session = self.save_in_flight.take() == Some(self.modal_session);
        match result {
            Ok(()) => {
                tracing::info!("profile saved");
                self.show_alert(AlertNotification::success(SAVED_MESSAGE));
                if same_session {
                    self.close_modal();
                } else {
                    self.dispatch_form(FormIntent::SubmitSettled);
                }
                self.refresh();
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "profile save failed");
                self.dispatch_form(FormIntent::SubmitSettled);
                self.show_alert(AlertNotification::error(err.user_message()));
            }
        }
    }

    // ========================================================================
    // Alert
    // ========================================================================

    /// An explicit close is a plain `Hide`; a click-away goes to the reducer,
    /// which ignores it.
    pub fn dismiss_alert(&mut self, reason: DismissReason) {
        let intent = match reason {
            DismissReason::CloseButton => AlertIntent::Hide,
            DismissReason::ClickAway => AlertIntent::Dismiss { reason },
        };
        self.dispatch_alert(intent);
    }

    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    pub fn on_tick_at(&mut self, now: Instant) {
        self.ticks = self.ticks.wrapping_add(1);
        self.dispatch_alert(AlertIntent::Expire { now });
        self.dispatch_modal(ModalIntent::AnimationTick);
    }

    /// Left click at a screen cell.
    ///
    /// A click on the toast closes it; a click anywhere else is a click-away
    /// and leaves it alone. Clicks outside the modal never close it.
    pub fn on_click(&mut self, column: u16, row: u16) {
        let Some((cols, rows)) = self.size else {
            return;
        };
        let area = Rect::new(0, 0, cols, rows);

        if let Some(toast) = toast_rect(area, &self.alert) {
            if contains(toast, column, row) {
                self.dismiss_alert(DismissReason::CloseButton);
                return;
            }
            self.dismiss_alert(DismissReason::ClickAway);
        }

        if let Some(modal) = modal_rect(area, &self.modal) {
            if !contains(modal, column, row) {
                self.dispatch_modal(ModalIntent::BackdropClick);
            }
        }
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    /// Marks the app as gone. Later completions become no-ops.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.generation = self.generation.wrapping_add(1);
        tracing::debug!(generation = self.generation, "app torn down");
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.torn_down || generation != self.generation
    }

    fn show_alert(&mut self, notification: AlertNotification) {
        self.dispatch_alert(AlertIntent::Show {
            notification,
            now: Instant::now(),
        });
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::warn!(?command, "no API worker attached");
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "failed to queue API command");
                false
            }
        }
    }

    fn dispatch_profile(&mut self, intent: ProfileIntent) {
        dispatch_mvi!(self, profile, ProfileReducer, intent);
    }

    fn dispatch_alert(&mut self, intent: AlertIntent) {
        dispatch_mvi!(self, alert, AlertReducer, intent);
    }

    fn dispatch_modal(&mut self, intent: ModalIntent) {
        dispatch_mvi!(self, modal, ModalReducer, intent);
    }

    fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }
}
