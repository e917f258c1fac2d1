//! Rendering of the edit modal.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::form::{FormField, FormState};
use crate::ui::layout::centered_fixed;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_GREEN, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

use super::state::ModalState;

const DIALOG_WIDTH: u16 = 52;
const DIALOG_HEIGHT: u16 = 13;

/// Rows the dialog moves per remaining slide frame.
const SLIDE_STEP: u16 = 2;

/// Area of the modal inside `area`, including the slide-in offset.
pub fn modal_rect(area: Rect, state: &ModalState) -> Option<Rect> {
    if !state.is_open() {
        return None;
    }
    let mut rect = centered_fixed(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    let bottom = area.y + area.height;
    let offset = u16::from(state.slide()) * SLIDE_STEP;
    rect.y = (rect.y + offset).min(bottom.saturating_sub(rect.height));
    Some(rect)
}

pub fn render_edit_modal(frame: &mut Frame, state: &ModalState, form: &FormState) {
    let Some(area) = modal_rect(frame.area(), state) else {
        return;
    };

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Edit ")
        .title_alignment(Alignment::Left)
        .title(Line::from(" [Esc] ✕ ").alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field_width = inner.width.saturating_sub(4) as usize;
    let lines = vec![
        Line::from(""),
        label_line("Full name"),
        input_line(&form.draft.name, field_width, form.focus == FormField::Name),
        Line::from(""),
        label_line("Change image"),
        input_line(&form.image_input, field_width, form.focus == FormField::ImagePath),
        image_status_line(form),
        Line::from(""),
        save_line(form),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn label_line(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", label),
        Style::default().fg(MUTED_TEXT),
    ))
}

fn input_line(value: &str, width: usize, focused: bool) -> Line<'static> {
    let visible = tail(value, width.saturating_sub(1));
    let cursor = if focused { "▏" } else { " " };
    let padding = width.saturating_sub(visible.chars().count() + 1);
    let style = if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{}{}{}", visible, cursor, " ".repeat(padding)), style),
    ])
}

fn image_status_line(form: &FormState) -> Line<'static> {
    let text = match &form.draft.image {
        Some(image) => format!("  ✓ {} ({})", image.file_name(), image.media_type()),
        None => "  no image selected (Enter to select)".to_string(),
    };
    Line::from(Span::styled(
        text,
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
    ))
}

fn save_line(form: &FormState) -> Line<'static> {
    let label = if form.saving { " Saving... " } else { " Save " };
    let style = if form.focus == FormField::Save {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(BRAND_GREEN)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD)
    };
    Line::from(vec![Span::raw("  "), Span::styled(label, style)])
}

/// Last `max` characters of `value`, so the cursor end stays visible.
fn tail(value: &str, max: usize) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(max)).collect()
}
