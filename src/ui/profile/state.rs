use crate::model::UserProfile;
use crate::ui::mvi::UiState;

/// Last successfully fetched profile.
///
/// `profile` is `None` until the first fetch succeeds and is never cleared by
/// a failed fetch afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    /// Number of fetches currently outstanding. Overlapping refreshes are not
    /// coalesced, so this can exceed one.
    pub in_flight: usize,
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}
