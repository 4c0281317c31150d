use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_speakers_input(app: &mut App, key: KeyCode) {
    let total_rows = app.speakers().len();

    match key {
        KeyCode::Esc => app.screen = AppScreen::Schedule,
        KeyCode::Up => {
            app.selected_speaker_index = wrap_decrement(app.selected_speaker_index, total_rows);
        }
        KeyCode::Down => {
            app.selected_speaker_index = wrap_increment(app.selected_speaker_index, total_rows);
        }
        KeyCode::Home => app.selected_speaker_index = 0,
        KeyCode::End => app.selected_speaker_index = total_rows.saturating_sub(1),
        KeyCode::Enter => {
            if total_rows > 0 {
                app.screen = AppScreen::SpeakerDetails;
            }
        }
        _ => {}
    }
}
