use crate::app::state::App;
use crossterm::event::KeyCode;

/// Opens or closes the help popup. While it is open every other key is swallowed.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    let toggles = match key {
        KeyCode::F(1) => true,
        KeyCode::Char('?') => !app.search_active,
        _ => false,
    };

    if toggles {
        app.show_help = !app.show_help;
    } else if app.show_help && matches!(key, KeyCode::Esc | KeyCode::Char('q')) {
        app.show_help = false;
        return true;
    }

    toggles || app.show_help
}
