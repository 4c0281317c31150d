mod helpers;
pub mod screens;

use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub async fn handle_input(app: &mut App, key: KeyCode) {
    if screens::help::handle_help_toggle(app, key) {
        return;
    }

    // Typing into the search box must not trigger navigation shortcuts.
    if !app.search_active && handle_global_input(app, key).await {
        return;
    }

    match app.screen {
        AppScreen::Schedule => screens::schedule::handle_schedule_input(app, key),
        AppScreen::SessionDetails => screens::session_details::handle_session_details_input(app, key),
        AppScreen::Speakers => screens::speakers::handle_speakers_input(app, key),
        AppScreen::SpeakerDetails => screens::speaker_details::handle_speaker_details_input(app, key),
        AppScreen::Tracks => screens::tracks::handle_tracks_input(app, key),
        AppScreen::Map => screens::map::handle_map_input(app, key),
    }
}

async fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('1') => app.screen = AppScreen::Schedule,
        KeyCode::Char('2') => app.screen = AppScreen::Speakers,
        KeyCode::Char('3') => app.show_map(),
        KeyCode::Char('r') => app.reload().await,
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference_companion::config::AppConfig;
    use conference_companion::data::{source_for, ConferenceData};
    use conference_companion::favorites::UserFavorites;
    use std::sync::Arc;

    fn idle_app() -> App {
        let favorites = Arc::new(UserFavorites::new());
        let provider = Arc::new(ConferenceData::new(
            source_for("does/not/exist.json"),
            favorites.clone(),
        ));
        App::new(provider, favorites, &AppConfig::default())
    }

    #[tokio::test]
    async fn help_popup_swallows_keys_until_closed() {
        let mut app = idle_app();

        handle_input(&mut app, KeyCode::Char('?')).await;
        assert!(app.show_help);

        handle_input(&mut app, KeyCode::Char('2')).await;
        assert_eq!(app.screen, AppScreen::Schedule);

        handle_input(&mut app, KeyCode::Esc).await;
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[tokio::test]
    async fn search_box_takes_shortcut_characters() {
        let mut app = idle_app();

        handle_input(&mut app, KeyCode::Char('/')).await;
        for ch in "q?2".chars() {
            handle_input(&mut app, KeyCode::Char(ch)).await;
        }

        assert!(app.running);
        assert!(!app.show_help);
        assert_eq!(app.query, "q?2");

        handle_input(&mut app, KeyCode::Enter).await;
        handle_input(&mut app, KeyCode::Char('q')).await;
        assert!(!app.running);
    }
}
