use crate::ui::theme::{BRAND_GREEN, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Brand line above the card, with a spinner while a fetch is outstanding.
pub struct Header {
    loading: bool,
    tick: usize,
}

impl Header {
    pub fn new(loading: bool, tick: usize) -> Self {
        Self { loading, tick }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled(
                "Passe",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Verde",
                Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
            ),
        ];
        if self.loading {
            let spinner = SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()];
            spans.push(Span::styled(
                format!("  {} loading", spinner),
                Style::default().fg(MUTED_TEXT),
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
