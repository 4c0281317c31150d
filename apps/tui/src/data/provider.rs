use std::sync::Arc;

use tracing::{debug, error, info};

use crate::data::error::ConferenceError;
use crate::data::filter::{filter_day, filter_session, query_words};
use crate::data::linking::link;
use crate::data::models::{Conference, Location, ScheduleDay, Session, Speaker};
use crate::data::source::DataSource;
use crate::data::store::{LatestValue, Subscription};
use crate::domain::Segment;
use crate::favorites::Favorites;

/// Single source of truth for conference data.
///
/// Every view is projected from the latest successfully fetched aggregate.
/// Until the first fetch succeeds the views return `None`.
pub struct ConferenceData {
    source: Arc<dyn DataSource>,
    favorites: Arc<dyn Favorites>,
    latest: LatestValue<Arc<Conference>>,
}

impl std::fmt::Debug for ConferenceData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConferenceData")
            .field("source", &self.source.describe())
            .field("loaded", &self.latest.get().is_some())
            .finish_non_exhaustive()
    }
}

impl ConferenceData {
    /// Creates an empty provider. Nothing is fetched until [`Self::refresh`].
    pub fn new(source: Arc<dyn DataSource>, favorites: Arc<dyn Favorites>) -> Self {
        Self {
            source,
            favorites,
            latest: LatestValue::new(),
        }
    }

    /// Creates a provider and kicks off the initial fetch on the current runtime.
    pub fn start(source: Arc<dyn DataSource>, favorites: Arc<dyn Favorites>) -> Arc<Self> {
        let provider = Arc::new(Self::new(source, favorites));
        let initial = Arc::clone(&provider);
        tokio::spawn(async move { initial.refresh().await });
        provider
    }

    /// Fetches, links and publishes a new aggregate.
    ///
    /// On failure nothing is published and the previous aggregate stays current.
    pub async fn try_refresh(&self) -> Result<Arc<Conference>, ConferenceError> {
        debug!(source = %self.source.describe(), "fetching conference data");
        let body = self.source.load().await?;
        let raw: Conference = serde_json::from_str(&body)?;
        let data = Arc::new(link(raw));

        self.latest.publish(Arc::clone(&data));
        info!(
            sessions = data
                .schedule
                .iter()
                .flat_map(|day| &day.groups)
                .map(|group| group.sessions.len())
                .sum::<usize>(),
            speakers = data.speakers.len(),
            locations = data.map.len(),
            "published conference data"
        );

        Ok(data)
    }

    /// Like [`Self::try_refresh`], reporting failures to the log instead of the caller.
    pub async fn refresh(&self) {
        if let Err(e) = self.try_refresh().await {
            error!(source = %self.source.describe(), error = %e, "conference data refresh failed");
        }
    }

    pub fn current(&self) -> Option<Arc<Conference>> {
        self.latest.get()
    }

    /// Observes the current aggregate, then every later successful refresh.
    pub fn subscribe(&self) -> Subscription<Arc<Conference>> {
        self.latest.subscribe()
    }

    /// Waits for the first aggregate. `None` only if the provider goes away first.
    pub async fn first(&self) -> Option<Arc<Conference>> {
        self.subscribe().next().await
    }

    /// The selected day with visibility recomputed for the given filters.
    ///
    /// Returns an owned copy; the shared aggregate is left untouched.
    pub fn timeline(
        &self,
        day_index: usize,
        query_text: &str,
        exclude_tracks: &[String],
        segment: Segment,
    ) -> Option<ScheduleDay> {
        let data = self.current()?;
        let mut day = data.schedule.get(day_index)?.clone();
        let words = query_words(query_text);

        filter_day(
            &mut day,
            &words,
            exclude_tracks,
            segment,
            self.favorites.as_ref(),
        );

        Some(day)
    }

    pub fn speakers(&self) -> Option<Vec<Speaker>> {
        self.current().map(|data| data.speakers.clone())
    }

    pub fn tracks(&self) -> Option<Vec<String>> {
        self.current().map(|data| data.tracks.clone())
    }

    pub fn map(&self) -> Option<Vec<Location>> {
        self.current().map(|data| data.map.clone())
    }

    /// One-shot: waits for the first aggregate and returns its map points.
    pub async fn first_map(&self) -> Option<Vec<Location>> {
        self.first().await.map(|data| data.map.clone())
    }

    /// Sets `session.hide` against this provider's favorites.
    pub fn filter_session(
        &self,
        session: &mut Session,
        query_words: &[String],
        exclude_tracks: &[String],
        segment: Segment,
    ) {
        filter_session(
            session,
            query_words,
            exclude_tracks,
            segment,
            self.favorites.as_ref(),
        );
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::source::testing::StaticSource;
    use crate::favorites::UserFavorites;
    use std::time::Duration;
    use tokio::time::timeout;

    pub const DOCUMENT: &str = r#"{
        "schedule": [
            {
                "date": "2047-05-17",
                "groups": [
                    {
                        "time": "9:00 am",
                        "sessions": [
                            {"name": "Breakfast", "location": "Hallway", "timeStart": "9:00 am", "timeEnd": "9:30 am", "tracks": ["Food"]},
                            {"name": "Intro to Widgets", "location": "Room A", "timeStart": "9:30 am", "timeEnd": "10:00 am", "tracks": ["Tech"], "speakerNames": ["Zoe Adams"]}
                        ]
                    },
                    {
                        "time": "10:00 am",
                        "sessions": [
                            {"name": "Widget Testing", "location": "Room A", "timeStart": "10:00 am", "timeEnd": "11:00 am", "tracks": ["Tech", "Testing"], "speakerNames": ["Zoe Adams", "Amy Zillow"]},
                            {"name": "Design Systems", "location": "Room B", "timeStart": "10:00 am", "timeEnd": "11:00 am", "tracks": ["Design"], "speakerNames": ["Amy Zillow", "Ghost Speaker"]}
                        ]
                    },
                    {
                        "time": "11:00 am",
                        "sessions": [
                            {"name": "Lunch", "location": "Hallway", "timeStart": "11:00 am", "timeEnd": "12:00 pm", "tracks": ["Food"]}
                        ]
                    }
                ]
            },
            {
                "date": "2047-05-18",
                "groups": [
                    {
                        "time": "9:00 am",
                        "sessions": [
                            {"name": "Closing Keynote", "location": "Hall", "timeStart": "9:00 am", "timeEnd": "10:00 am", "tracks": ["General"], "speakerNames": ["Amy Zillow"]}
                        ]
                    }
                ]
            }
        ],
        "speakers": [
            {"name": "Amy Zillow", "profilePic": "amy.jpg", "twitter": "amyz", "about": "Designer."},
            {"name": "Zoe Adams", "profilePic": "zoe.jpg", "twitter": "zoea", "about": "Engineer."}
        ],
        "map": [
            {"name": "Cafe", "lat": 43.0721, "lng": -89.3814},
            {"name": "Convention Center", "lat": 43.0716, "lng": -89.3801, "center": true}
        ]
    }"#;

    fn provider(source: Arc<StaticSource>, favorites: Arc<UserFavorites>) -> ConferenceData {
        ConferenceData::new(source, favorites)
    }

    #[tokio::test]
    async fn views_are_empty_before_first_fetch() {
        let data = provider(
            Arc::new(StaticSource::new(DOCUMENT)),
            Arc::new(UserFavorites::new()),
        );

        assert!(data.current().is_none());
        assert!(data.speakers().is_none());
        assert!(data.tracks().is_none());
        assert!(data.map().is_none());
        assert!(data.timeline(0, "", &[], Segment::All).is_none());
    }

    #[tokio::test]
    async fn refresh_publishes_linked_views() -> Result<(), Box<dyn std::error::Error>> {
        let data = provider(
            Arc::new(StaticSource::new(DOCUMENT)),
            Arc::new(UserFavorites::new()),
        );
        data.try_refresh().await?;

        let speakers = data.speakers().unwrap_or_default();
        let names: Vec<_> = speakers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Zoe Adams", "Amy Zillow"]);
        assert_eq!(speakers[1].sessions.len(), 3);

        assert_eq!(
            data.tracks().unwrap_or_default(),
            ["Design", "Food", "General", "Tech", "Testing"]
        );
        assert_eq!(data.map().map(|m| m.len()), Some(2));

        Ok(())
    }

    #[tokio::test]
    async fn failed_refresh_keeps_last_good_value() -> Result<(), Box<dyn std::error::Error>> {
        let source = Arc::new(StaticSource::new(DOCUMENT));
        let data = provider(Arc::clone(&source), Arc::new(UserFavorites::new()));

        data.refresh().await;
        let before = data.current();
        assert!(before.is_some());

        source.set(Some("{ not json"));
        assert!(matches!(
            data.try_refresh().await,
            Err(ConferenceError::Parse(_))
        ));
        source.set(None);
        data.refresh().await;

        let after = data.current();
        assert!(matches!((&before, &after), (Some(a), Some(b)) if Arc::ptr_eq(a, b)));

        Ok(())
    }

    #[tokio::test]
    async fn failed_first_fetch_publishes_nothing() {
        let data = provider(
            Arc::new(StaticSource::unavailable()),
            Arc::new(UserFavorites::new()),
        );
        data.refresh().await;

        assert!(data.current().is_none());
        let waited = timeout(Duration::from_millis(20), data.first_map()).await;
        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn repeated_refresh_is_identical() -> Result<(), Box<dyn std::error::Error>> {
        let data = provider(
            Arc::new(StaticSource::new(DOCUMENT)),
            Arc::new(UserFavorites::new()),
        );

        let first = data.try_refresh().await?;
        let second = data.try_refresh().await?;

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(first.as_ref())?,
            serde_json::to_string(second.as_ref())?
        );

        Ok(())
    }

    #[tokio::test]
    async fn subscribers_see_each_successful_refresh() -> Result<(), Box<dyn std::error::Error>> {
        let source = Arc::new(StaticSource::unavailable());
        let data = provider(Arc::clone(&source), Arc::new(UserFavorites::new()));
        let mut updates = data.subscribe();

        data.refresh().await;
        assert!(!updates.has_update());

        source.set(Some(DOCUMENT));
        data.refresh().await;
        let first = timeout(Duration::from_secs(1), updates.next()).await?;
        assert_eq!(first.map(|d| d.schedule.len()), Some(2));

        data.refresh().await;
        assert!(updates.has_update());

        Ok(())
    }

    #[tokio::test]
    async fn start_fetches_once_on_construction() -> Result<(), Box<dyn std::error::Error>> {
        let data = ConferenceData::start(
            Arc::new(StaticSource::new(DOCUMENT)),
            Arc::new(UserFavorites::new()),
        );

        let map = timeout(Duration::from_secs(1), data.first_map()).await?;
        assert_eq!(
            map.and_then(|m| m.into_iter().find(|l| l.center)).map(|l| l.name),
            Some("Convention Center".to_string())
        );

        Ok(())
    }

    #[tokio::test]
    async fn timeline_counts_visible_sessions() -> Result<(), Box<dyn std::error::Error>> {
        let data = provider(
            Arc::new(StaticSource::new(DOCUMENT)),
            Arc::new(UserFavorites::new()),
        );
        data.try_refresh().await?;

        let day = data
            .timeline(0, "widget", &[], Segment::All)
            .ok_or("missing day")?;

        assert_eq!(day.shown_sessions, 2);
        assert!(!day.groups[0].hide);
        assert!(!day.groups[1].hide);
        assert!(day.groups[2].hide);
        assert!(day.groups[0].sessions[0].hide);
        assert!(!day.groups[0].sessions[1].hide);

        let untouched = data.current().ok_or("missing data")?;
        assert!(!untouched.schedule[0].groups[2].hide);
        assert_eq!(untouched.schedule[0].shown_sessions, 0);

        Ok(())
    }

    #[tokio::test]
    async fn timeline_applies_tracks_and_favorites() -> Result<(), Box<dyn std::error::Error>> {
        let favorites = Arc::new(UserFavorites::with_names(["Lunch", "Design Systems"]));
        let data = provider(Arc::new(StaticSource::new(DOCUMENT)), Arc::clone(&favorites));
        data.try_refresh().await?;

        let excluded = vec!["Food".to_string()];
        let day = data
            .timeline(0, "", &excluded, Segment::Favorites)
            .ok_or("missing day")?;

        let visible: Vec<_> = day.visible_sessions().map(|(_, s)| s.name.as_str()).collect();
        assert_eq!(visible, ["Design Systems"]);
        assert_eq!(day.shown_sessions, 1);

        assert!(data.timeline(7, "", &[], Segment::All).is_none());

        Ok(())
    }

    #[tokio::test]
    async fn filter_session_consults_injected_favorites() -> Result<(), Box<dyn std::error::Error>> {
        let favorites = Arc::new(UserFavorites::new());
        let data = provider(Arc::new(StaticSource::new(DOCUMENT)), Arc::clone(&favorites));
        let conference = data.try_refresh().await?;
        let mut lunch = conference.schedule[0].groups[2].sessions[0].clone();

        data.filter_session(&mut lunch, &[], &[], Segment::Favorites);
        assert!(lunch.hide);

        favorites.add_favorite("Lunch");
        data.filter_session(&mut lunch, &[], &[], Segment::Favorites);
        assert!(!lunch.hide);

        Ok(())
    }
}
