use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

#[allow(clippy::missing_const_for_fn)]
pub fn handle_speaker_details_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Esc | KeyCode::Backspace) {
        app.screen = AppScreen::Speakers;
    }
}
