use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_map_input(app: &mut App, key: KeyCode) {
    let total_markers = app.map_page.markers().len();

    match key {
        KeyCode::Esc => app.screen = AppScreen::Schedule,
        KeyCode::Tab | KeyCode::Down | KeyCode::Right => {
            app.selected_marker_index = wrap_increment(app.selected_marker_index, total_markers);
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Left => {
            app.selected_marker_index = wrap_decrement(app.selected_marker_index, total_markers);
        }
        KeyCode::Enter => app.click_selected_marker(),
        KeyCode::Char('+' | '=') => app.map_page.widget_mut().zoom_in(),
        KeyCode::Char('-') => app.map_page.widget_mut().zoom_out(),
        _ => {}
    }
}
