//! Toast rendering, anchored bottom-center above the footer.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::layout_regions;
use crate::ui::theme::{severity_color, TOAST_TEXT};

use super::state::AlertState;

const TOAST_HEIGHT: u16 = 3;
const TOAST_MIN_WIDTH: u16 = 24;
const TOAST_MAX_WIDTH: u16 = 64;

/// Where the toast is drawn inside `area`, or `None` when hidden.
///
/// Also used for hit-testing mouse clicks.
pub fn toast_rect(area: Rect, state: &AlertState) -> Option<Rect> {
    if !state.is_visible() {
        return None;
    }

    let (_, body, _) = layout_regions(area);
    // label + ": " + message + close hint + borders
    let wanted = state.severity().label().len() + state.message().chars().count() + 16;
    let wanted = u16::try_from(wanted).unwrap_or(u16::MAX);
    let width = wanted
        .clamp(TOAST_MIN_WIDTH, TOAST_MAX_WIDTH)
        .min(body.width);
    let height = TOAST_HEIGHT.min(body.height);

    Some(Rect {
        x: body.x + (body.width.saturating_sub(width)) / 2,
        y: body.y + body.height.saturating_sub(height),
        width,
        height,
    })
}

pub fn render_toast(frame: &mut Frame, state: &AlertState) {
    let Some(area) = toast_rect(frame.area(), state) else {
        return;
    };

    let color = severity_color(state.severity());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let line = Line::from(vec![
        Span::styled(
            format!("{}: ", state.severity().label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(state.message().to_string(), Style::default().fg(TOAST_TEXT)),
        Span::styled("  [^X]", Style::default().fg(TOAST_TEXT).add_modifier(Modifier::DIM)),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
