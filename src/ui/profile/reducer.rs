use crate::ui::mvi::Reducer;

use super::intent::ProfileIntent;
use super::state::ProfileState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::RefreshStarted => ProfileState {
                in_flight: state.in_flight + 1,
                ..state
            },
            ProfileIntent::Loaded { profile } => ProfileState {
                profile: Some(profile),
                in_flight: state.in_flight.saturating_sub(1),
            },
            ProfileIntent::Failed => ProfileState {
                in_flight: state.in_flight.saturating_sub(1),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserProfile;

    fn profile(name: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            profile_image: "https://cdn.example.com/p.png".to_string(),
            valid_until: "10 de mar. de 2025".to_string(),
        }
    }

    #[test]
    fn loaded_replaces_profile() {
        let state = ProfileReducer::reduce(ProfileState::default(), ProfileIntent::RefreshStarted);
        assert!(state.is_loading());
        let state = ProfileReducer::reduce(state, ProfileIntent::Loaded { profile: profile("Ana") });
        assert!(!state.is_loading());
        assert_eq!(state.profile, Some(profile("Ana")));
    }

    #[test]
    fn failure_keeps_stale_profile() {
        let state = ProfileState {
            profile: Some(profile("Ana")),
            in_flight: 1,
        };
        let state = ProfileReducer::reduce(state, ProfileIntent::Failed);
        assert_eq!(state.profile, Some(profile("Ana")));
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn failure_before_first_load_leaves_none() {
        let state = ProfileReducer::reduce(ProfileState::default(), ProfileIntent::RefreshStarted);
        let state = ProfileReducer::reduce(state, ProfileIntent::Failed);
        assert_eq!(state.profile, None);
    }

    #[test]
    fn identical_loads_are_idempotent() {
        let once = ProfileReducer::reduce(
            ProfileState::default(),
            ProfileIntent::Loaded { profile: profile("Ana") },
        );
        let twice = ProfileReducer::reduce(
            once.clone(),
            ProfileIntent::Loaded { profile: profile("Ana") },
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn overlapping_refreshes_are_counted() {
        let state = ProfileReducer::reduce(ProfileState::default(), ProfileIntent::RefreshStarted);
        let state = ProfileReducer::reduce(state, ProfileIntent::RefreshStarted);
        assert_eq!(state.in_flight, 2);
        let state = ProfileReducer::reduce(state, ProfileIntent::Failed);
        assert!(state.is_loading());
    }
}
