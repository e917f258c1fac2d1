use crate::ui::mvi::UiState;

/// Ticks the slide-in takes to settle.
pub const SLIDE_FRAMES: u8 = 4;

/// Visibility of the edit modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        /// Remaining slide-in frames; 0 once settled. Presentation only.
        slide: u8,
    },
}

impl UiState for ModalState {}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn slide(&self) -> u8 {
        match self {
            Self::Open { slide } => *slide,
            Self::Closed => 0,
        }
    }
}
