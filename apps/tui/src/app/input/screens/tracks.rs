use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_tracks_input(app: &mut App, key: KeyCode) {
    let total_rows = app.tracks().len();

    match key {
        KeyCode::Esc => app.screen = AppScreen::Schedule,
        KeyCode::Up => {
            app.selected_track_index = wrap_decrement(app.selected_track_index, total_rows);
        }
        KeyCode::Down => {
            app.selected_track_index = wrap_increment(app.selected_track_index, total_rows);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected_track(),
        KeyCode::Char('a') => {
            app.exclude_tracks.clear();
            app.refresh_timeline();
        }
        _ => {}
    }
}
