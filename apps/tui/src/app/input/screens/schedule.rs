use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_schedule_input(app: &mut App, key: KeyCode) {
    if app.search_active {
        handle_search_input(app, key);
        return;
    }

    let total_rows = app.timeline.as_ref().map_or(0, |day| day.shown_sessions);

    match key {
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        KeyCode::Esc => {
            if !app.query.is_empty() {
                app.query.clear();
                app.refresh_timeline();
            }
        }
        KeyCode::Left => app.prev_day(),
        KeyCode::Right => app.next_day(),
        KeyCode::Up => {
            app.selected_session_index = wrap_decrement(app.selected_session_index, total_rows);
        }
        KeyCode::Down => {
            app.selected_session_index = wrap_increment(app.selected_session_index, total_rows);
        }
        KeyCode::Enter => app.open_selected_session(),
        KeyCode::Char('s') => app.toggle_segment(),
        KeyCode::Char('f') => app.toggle_favorite(),
        KeyCode::Char('t') => {
            app.selected_track_index = 0;
            app.screen = AppScreen::Tracks;
        }
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.search_active = false;
            app.query.clear();
        }
        KeyCode::Enter => {
            app.search_active = false;
        }
        KeyCode::Backspace => {
            app.query.pop();
        }
        KeyCode::Char(ch) => {
            app.query.push(ch);
        }
        _ => return,
    }

    app.selected_session_index = 0;
    app.refresh_timeline();
}
