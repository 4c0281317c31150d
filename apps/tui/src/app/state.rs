use std::sync::Arc;

use conference_companion::config::AppConfig;
use conference_companion::data::{Conference, ConferenceData, ScheduleDay, Session, Speaker};
use conference_companion::favorites::UserFavorites;
use conference_companion::map::{MapEvent, MapPage, MapState};
use conference_companion::Segment;

use crate::ui::widgets::map_canvas::CanvasMap;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Schedule,
    SessionDetails,
    Speakers,
    SpeakerDetails,
    Tracks,
    Map,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub status_message: String,
    pub provider: Arc<ConferenceData>,
    pub favorites: Arc<UserFavorites>,
    /// The aggregate the views were last built from.
    pub conference: Option<Arc<Conference>>,
    pub day_index: usize,
    pub query: String,
    pub search_active: bool,
    pub exclude_tracks: Vec<String>,
    pub segment: Segment,
    pub timeline: Option<ScheduleDay>,
    pub selected_session_index: usize,
    pub session_detail: Option<Session>,
    pub selected_speaker_index: usize,
    pub selected_track_index: usize,
    pub map_page: MapPage<CanvasMap>,
    pub selected_marker_index: usize,
    pub map_error: Option<String>,
}

impl App {
    pub fn new(provider: Arc<ConferenceData>, favorites: Arc<UserFavorites>, config: &AppConfig) -> Self {
        Self {
            running: true,
            screen: AppScreen::Schedule,
            show_help: false,
            status_message: "Loading conference data...".to_string(),
            provider,
            favorites,
            conference: None,
            day_index: 0,
            query: String::new(),
            search_active: false,
            exclude_tracks: Vec::new(),
            segment: Segment::All,
            timeline: None,
            selected_session_index: 0,
            session_detail: None,
            selected_speaker_index: 0,
            selected_track_index: 0,
            map_page: MapPage::new(CanvasMap::new(), config.center_fallback, config.map_zoom),
            selected_marker_index: 0,
            map_error: None,
        }
    }

    /// Called once per frame: picks up new data and forwards map notifications.
    pub fn update(&mut self) {
        self.sync_data();

        if let Some(event) = self.map_page.widget_mut().poll_idle() {
            self.map_page.handle_event(event);
        }
    }

    /// Rebuilds the views when the provider has published a new aggregate.
    pub fn sync_data(&mut self) {
        let Some(latest) = self.provider.current() else {
            return;
        };

        let unchanged = self
            .conference
            .as_ref()
            .is_some_and(|seen| Arc::ptr_eq(seen, &latest));
        if unchanged {
            return;
        }

        let days = latest.schedule.len();
        self.day_index = self.day_index.min(days.saturating_sub(1));
        self.selected_speaker_index = self
            .selected_speaker_index
            .min(latest.speakers.len().saturating_sub(1));
        self.exclude_tracks.retain(|track| latest.tracks.contains(track));
        self.status_message = format!(
            "Loaded {} days, {} speakers, {} locations",
            days,
            latest.speakers.len(),
            latest.map.len()
        );
        self.conference = Some(latest);

        self.refresh_timeline();
        if self.screen == AppScreen::Map {
            self.activate_map();
        }
    }

    pub fn refresh_timeline(&mut self) {
        self.timeline = self.provider.timeline(
            self.day_index,
            &self.query,
            &self.exclude_tracks,
            self.segment,
        );

        let shown = self.timeline.as_ref().map_or(0, |day| day.shown_sessions);
        self.selected_session_index = self.selected_session_index.min(shown.saturating_sub(1));
    }

    pub fn day_count(&self) -> usize {
        self.conference.as_ref().map_or(0, |data| data.schedule.len())
    }

    pub fn next_day(&mut self) {
        if self.day_index + 1 < self.day_count() {
            self.day_index += 1;
            self.selected_session_index = 0;
            self.refresh_timeline();
        }
    }

    pub fn prev_day(&mut self) {
        if self.day_index > 0 {
            self.day_index -= 1;
            self.selected_session_index = 0;
            self.refresh_timeline();
        }
    }

    pub fn toggle_segment(&mut self) {
        self.segment = self.segment.toggled();
        self.selected_session_index = 0;
        self.refresh_timeline();
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.timeline
            .as_ref()?
            .visible_sessions()
            .nth(self.selected_session_index)
            .map(|(_, session)| session)
    }

    pub fn open_selected_session(&mut self) {
        if let Some(session) = self.selected_session().cloned() {
            self.session_detail = Some(session);
            self.screen = AppScreen::SessionDetails;
        }
    }

    /// Toggles the favorite flag on the session being looked at.
    pub fn toggle_favorite(&mut self) {
        let name = match self.screen {
            AppScreen::SessionDetails => self.session_detail.as_ref().map(|s| s.name.clone()),
            _ => self.selected_session().map(|s| s.name.clone()),
        };
        let Some(name) = name else {
            return;
        };

        self.status_message = if self.favorites.toggle_favorite(&name) {
            format!("Added {name} to favorites")
        } else {
            format!("Removed {name} from favorites")
        };
        self.refresh_timeline();
    }

    pub fn is_favorite(&self, session_name: &str) -> bool {
        use conference_companion::favorites::Favorites;
        self.favorites.has_favorite(session_name)
    }

    pub fn tracks(&self) -> &[String] {
        self.conference
            .as_ref()
            .map(|data| data.tracks.as_slice())
            .unwrap_or_default()
    }

    pub fn toggle_selected_track(&mut self) {
        let Some(track) = self.tracks().get(self.selected_track_index).cloned() else {
            return;
        };

        if let Some(position) = self.exclude_tracks.iter().position(|t| *t == track) {
            self.exclude_tracks.remove(position);
        } else {
            self.exclude_tracks.push(track);
        }
        self.selected_session_index = 0;
        self.refresh_timeline();
    }

    pub fn speakers(&self) -> &[Speaker] {
        self.conference
            .as_ref()
            .map(|data| data.speakers.as_slice())
            .unwrap_or_default()
    }

    pub fn selected_speaker(&self) -> Option<&Speaker> {
        self.speakers().get(self.selected_speaker_index)
    }

    pub fn speakers_of(&self, session: &Session) -> Vec<&Speaker> {
        self.conference
            .as_ref()
            .map(|data| data.speakers_of(session))
            .unwrap_or_default()
    }

    pub fn sessions_of(&self, speaker: &Speaker) -> Vec<&Session> {
        self.conference
            .as_ref()
            .map(|data| data.sessions_of(speaker))
            .unwrap_or_default()
    }

    pub async fn reload(&mut self) {
        self.status_message = "Refreshing conference data...".to_string();
        match self.provider.try_refresh().await {
            Ok(_) => self.sync_data(),
            Err(e) => {
                tracing::error!(error = %e, "manual refresh failed");
                self.status_message = format!("Refresh failed: {e}");
            }
        }
    }

    pub fn show_map(&mut self) {
        self.screen = AppScreen::Map;
        self.activate_map();
    }

    /// Places the map markers the first time map points are available.
    ///
    /// The points come from the aggregate `sync_data` already holds, which is
    /// the first published value when this runs before any refresh. Later
    /// aggregates never re-place markers: `MapPage::place` only acts once.
    pub fn activate_map(&mut self) {
        if self.map_page.state() != MapState::NotLoaded || self.map_error.is_some() {
            return;
        }

        let Some(points) = self.conference.as_ref().map(|data| data.map.clone()) else {
            return;
        };

        if let Err(e) = self.map_page.place(&points) {
            self.map_error = Some(e.to_string());
        }
    }

    pub fn click_selected_marker(&mut self) {
        if let Some(marker) = self.map_page.markers().get(self.selected_marker_index).copied() {
            self.map_page.handle_event(MapEvent::MarkerClicked(marker));
        }
    }
}
