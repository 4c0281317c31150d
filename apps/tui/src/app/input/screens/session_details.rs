use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_session_details_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Backspace => {
            app.session_detail = None;
            app.screen = AppScreen::Schedule;
        }
        KeyCode::Char('f') => app.toggle_favorite(),
        _ => {}
    }
}
