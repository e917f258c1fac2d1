use crate::model::UserProfile;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// A `GET /user` has been issued.
    RefreshStarted,
    /// A fetch succeeded; the profile is replaced wholesale.
    Loaded { profile: UserProfile },
    /// A fetch failed; the stale profile stays.
    Failed,
}

impl Intent for ProfileIntent {}
