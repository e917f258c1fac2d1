use crate::ui::app::App;
use crate::ui::alert::DismissReason;
use crate::ui::form::FormField;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Ctrl+X is the toast's close control, wherever focus is.
    if is_ctrl_char(key, 'x') {
        app.dismiss_alert(DismissReason::CloseButton);
        return;
    }

    if app.modal().is_open() {
        handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('e') | KeyCode::Char('E') => app.open_modal(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.refresh(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_modal(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter => match app.form().focus {
            FormField::ImagePath => app.select_image(),
            FormField::Name | FormField::Save => app.submit(),
        },
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.type_char(ch),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
