use crate::data::models::{ScheduleDay, Session};
use crate::domain::Segment;
use crate::favorites::Favorites;

/// Splits free text into lower-cased search words.
///
/// Commas, periods and hyphens separate words just like whitespace does.
pub fn query_words(query_text: &str) -> Vec<String> {
    query_text
        .to_lowercase()
        .replace([',', '.', '-'], " ")
        .split_whitespace()
        .map(ToString::to_string)
        .collect()
}

/// Whether a session passes the text, track and segment tests.
pub fn is_visible(
    session: &Session,
    query_words: &[String],
    exclude_tracks: &[String],
    segment: Segment,
    favorites: &dyn Favorites,
) -> bool {
    let matches_query_text = query_words.is_empty() || {
        let name = session.name.to_lowercase();
        query_words
            .iter()
            .any(|word| name.contains(word.to_lowercase().as_str()))
    };

    let matches_tracks = session
        .tracks
        .iter()
        .any(|track| !exclude_tracks.contains(track));

    let matches_segment = match segment {
        Segment::Favorites => favorites.has_favorite(&session.name),
        Segment::All => true,
    };

    matches_query_text && matches_tracks && matches_segment
}

/// Writes `session.hide` from [`is_visible`].
pub fn filter_session(
    session: &mut Session,
    query_words: &[String],
    exclude_tracks: &[String],
    segment: Segment,
    favorites: &dyn Favorites,
) {
    session.hide = !is_visible(session, query_words, exclude_tracks, segment, favorites);
}

/// Recomputes visibility for a whole day and returns the number of visible sessions.
pub fn filter_day(
    day: &mut ScheduleDay,
    query_words: &[String],
    exclude_tracks: &[String],
    segment: Segment,
    favorites: &dyn Favorites,
) -> usize {
    day.shown_sessions = 0;

    for group in &mut day.groups {
        group.hide = true;
        for session in &mut group.sessions {
            filter_session(session, query_words, exclude_tracks, segment, favorites);
            if !session.hide {
                group.hide = false;
                day.shown_sessions += 1;
            }
        }
    }

    day.shown_sessions
}
