use color_eyre::Result;
use conference_companion::config::AppConfig;
use conference_companion::data::{Conference, ConferenceData, ScheduleDay};
use conference_companion::favorites::UserFavorites;
use conference_companion::map::resolve_center;
use conference_companion::Segment;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::ui;

/// Filters applied to the headless schedule listing.
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub json: bool,
    pub day: usize,
    pub query: String,
    pub exclude_tracks: Vec<String>,
    pub segment: Segment,
}

/// Loads the conference once, prints it and exits.
pub async fn run_headless(
    provider: &ConferenceData,
    favorites: &UserFavorites,
    config: &AppConfig,
    options: &HeadlessOptions,
) -> Result<()> {
    let data = provider.try_refresh().await?;
    let report = build_report(provider, favorites, config, options, &data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn build_report(
    provider: &ConferenceData,
    favorites: &UserFavorites,
    config: &AppConfig,
    options: &HeadlessOptions,
    data: &Conference,
) -> HeadlessReport {
    let timeline = provider.timeline(
        options.day,
        &options.query,
        &options.exclude_tracks,
        options.segment,
    );

    let center = match resolve_center(&data.map, config.center_fallback) {
        Ok(location) => Some(location.name.clone()),
        Err(e) => {
            tracing::warn!(error = %e, "venue map has no usable center");
            None
        }
    };

    HeadlessReport {
        days: data.schedule.iter().map(ScheduleDay::label).collect(),
        day: timeline.map(|day| day_report(data, &day)),
        speakers: data
            .speakers
            .iter()
            .map(|speaker| HeadlessSpeaker {
                name: speaker.name.clone(),
                sessions: data
                    .sessions_of(speaker)
                    .iter()
                    .map(|session| session.name.clone())
                    .collect(),
            })
            .collect(),
        tracks: data.tracks.clone(),
        favorites: favorites.names(),
        map_center: center,
        locations: data.map.iter().map(|location| location.name.clone()).collect(),
    }
}

fn day_report(data: &Conference, day: &ScheduleDay) -> HeadlessDay {
    HeadlessDay {
        label: day.label(),
        shown_sessions: day.shown_sessions,
        sessions: day
            .visible_sessions()
            .map(|(group, session)| HeadlessSession {
                time: group.time.clone(),
                name: session.name.clone(),
                location: session.location.clone(),
                tracks: session.tracks.clone(),
                speakers: data
                    .speakers_of(session)
                    .iter()
                    .map(|speaker| speaker.name.clone())
                    .collect(),
            })
            .collect(),
    }
}

fn print_report(report: &HeadlessReport) {
    println!("\nConference Schedule");
    println!("===================");

    match &report.day {
        Some(day) => {
            println!("{} ({} sessions shown)", day.label, day.shown_sessions);
            for session in &day.sessions {
                let speakers = if session.speakers.is_empty() {
                    String::new()
                } else {
                    format!(" - {}", session.speakers.join(", "))
                };
                println!(
                    "- {} | {} | {} [{}]{speakers}",
                    session.time,
                    session.name,
                    session.location,
                    session.tracks.join(", ")
                );
            }
        }
        None => println!("No such day; the schedule has {} day(s)", report.days.len()),
    }

    println!("\nSpeakers:");
    for speaker in &report.speakers {
        println!("- {} ({} sessions)", speaker.name, speaker.sessions.len());
    }

    println!("\nTracks: {}", report.tracks.join(", "));

    if !report.favorites.is_empty() {
        println!("Favorites: {}", report.favorites.join(", "));
    }

    println!(
        "\nVenue map: {} locations, centered on {}",
        report.locations.len(),
        report.map_center.as_deref().unwrap_or("(none)")
    );
}

#[derive(Debug, serde::Serialize)]
struct HeadlessReport {
    days: Vec<String>,
    day: Option<HeadlessDay>,
    speakers: Vec<HeadlessSpeaker>,
    tracks: Vec<String>,
    favorites: Vec<String>,
    map_center: Option<String>,
    locations: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessDay {
    label: String,
    shown_sessions: usize,
    sessions: Vec<HeadlessSession>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessSession {
    time: String,
    name: String,
    location: String,
    tracks: Vec<String>,
    speakers: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessSpeaker {
    name: String,
    sessions: Vec<String>,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

    while app.running {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code).await;
            }
            Ok(Event::Resize(_, _)) => {
                // redrawn on the next iteration
            }
            Ok(_) => {}
            Err(e) => tracing::debug!(error = %e, "failed to read terminal event"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference_companion::data::DataSource;
    use conference_companion::data::ConferenceError;
    use std::sync::Arc;

    const DOCUMENT: &str = r#"{
        "schedule": [{"date": "2047-05-17", "groups": [
            {"time": "9:00 am", "sessions": [
                {"name": "Breakfast", "location": "Hall", "timeStart": "9:00 am", "timeEnd": "9:30 am", "tracks": ["Food"]},
                {"name": "Keynote", "location": "Hall", "timeStart": "9:30 am", "timeEnd": "10:30 am", "tracks": ["General"], "speakerNames": ["Zoe Adams"]}
            ]}
        ]}],
        "speakers": [{"name": "Zoe Adams"}],
        "map": [{"name": "Hall", "lat": 43.07, "lng": -89.38}]
    }"#;

    struct Fixed;

    #[async_trait::async_trait]
    impl DataSource for Fixed {
        async fn load(&self) -> Result<String, ConferenceError> {
            Ok(DOCUMENT.to_string())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    #[tokio::test]
    async fn report_lists_filtered_day_and_links() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let favorites = Arc::new(UserFavorites::new());
        let provider = ConferenceData::new(Arc::new(Fixed), favorites.clone());
        let data = provider.try_refresh().await?;
        let options = HeadlessOptions {
            exclude_tracks: vec!["Food".to_string()],
            ..HeadlessOptions::default()
        };

        let report = build_report(&provider, &favorites, &AppConfig::default(), &options, &data);

        let day = report.day.as_ref().ok_or("missing day")?;
        assert_eq!(day.shown_sessions, 1);
        assert_eq!(day.sessions[0].name, "Keynote");
        assert_eq!(day.sessions[0].speakers, ["Zoe Adams"]);
        assert_eq!(report.speakers[0].sessions, ["Keynote"]);
        assert_eq!(report.tracks, ["Food", "General"]);
        // no location is flagged, so the first point stands in
        assert_eq!(report.map_center.as_deref(), Some("Hall"));
        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_day_has_no_listing() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let favorites = Arc::new(UserFavorites::new());
        let provider = ConferenceData::new(Arc::new(Fixed), favorites.clone());
        let data = provider.try_refresh().await?;
        let options = HeadlessOptions {
            day: 5,
            ..HeadlessOptions::default()
        };

        let report = build_report(&provider, &favorites, &AppConfig::default(), &options, &data);

        assert!(report.day.is_none());
        assert_eq!(report.days.len(), 1);
        Ok(())
    }
}
