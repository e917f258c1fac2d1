use crate::ui::alert::render_toast;
use crate::ui::app::App;
use crate::ui::card::{render_card, CardView};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::modal::render_edit_modal;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.profile().is_loading(), app.ticks());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let card = CardView::from_profile(app.profile().profile.as_ref());
    render_card(frame, body, &card);

    let footer_widget = Footer::new(app.modal().is_open());
    frame.render_widget(footer_widget.widget(footer), footer);

    // Overlays, bottom to top
    render_edit_modal(frame, app.modal(), app.form());
    render_toast(frame, app.alert());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserProfile;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn empty_card_shows_placeholder_name() {
        let app = App::new();
        assert!(screen_text(&app).contains("Your name"));
    }

    #[test]
    fn loaded_profile_is_drawn() {
        let mut app = App::new();
        app.on_profile_fetched(
            0,
            Ok(UserProfile {
                name: "Ana".into(),
                profile_image: "https://cdn/a.png".into(),
                valid_until: "10 de mar. de 2025".into(),
            }),
        );
        let text = screen_text(&app);
        assert!(text.contains("Ana"));
        assert!(text.contains("10 de mar. de 2025"));
    }

    #[test]
    fn open_modal_is_drawn() {
        let mut app = App::new();
        app.open_modal();
        assert!(screen_text(&app).contains("Full name"));
    }
}
