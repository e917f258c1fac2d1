//! The profile card. Pure view over the profile slice.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::model::UserProfile;
use crate::ui::form::expiry::valid_until_now;
use crate::ui::layout::centered_fixed;
use crate::ui::theme::{BRAND_GREEN, HEADER_TEXT, MUTED_TEXT};

pub const PLACEHOLDER_NAME: &str = "Your name";
pub const PLACEHOLDER_PHOTO: &str = "placeholder avatar";

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 15;

/// What the card shows, derived from the current profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub photo: String,
    pub valid_until: String,
}

impl CardView {
    /// Before the first successful fetch the card shows placeholders, and
    /// the validity a save made right now would get.
    pub fn from_profile(profile: Option<&UserProfile>) -> Self {
        match profile {
            Some(profile) => Self {
                name: profile.name.clone(),
                photo: profile.profile_image.clone(),
                valid_until: profile.valid_until.clone(),
            },
            None => Self {
                name: PLACEHOLDER_NAME.to_string(),
                photo: PLACEHOLDER_PHOTO.to_string(),
                valid_until: valid_until_now(),
            },
        }
    }
}

pub fn render_card(frame: &mut Frame, area: Rect, view: &CardView) {
    let card = centered_fixed(CARD_WIDTH, CARD_HEIGHT, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BRAND_GREEN));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let width = inner.width.saturating_sub(2) as usize;
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("( ◉ )", Style::default().fg(BRAND_GREEN))),
        Line::from(Span::styled(ellipsize(&view.photo, width), label)),
        Line::from(""),
        Line::from(Span::styled("Name", label)),
        Line::from(Span::styled(ellipsize(&view.name, width), value)),
        Line::from(""),
        Line::from(Span::styled("Valid until:", label)),
        Line::from(Span::styled(view.valid_until.clone(), value)),
        Line::from(""),
        Line::from(Span::styled(
            " Edit details [e] ",
            Style::default()
                .fg(HEADER_TEXT)
                .bg(BRAND_GREEN)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Truncates to `max` characters with a trailing ellipsis.
fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
