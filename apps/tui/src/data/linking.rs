use std::collections::{BTreeSet, HashMap};

use crate::data::models::{Conference, SessionRef, Speaker};

/// Turns a freshly parsed document into the navigable aggregate.
///
/// Speakers are sorted by last name, every `speakerNames` entry that matches a
/// speaker by exact name becomes a link in both directions, and the distinct
/// session tracks are collected in sorted order. Derived fields already present
/// on the input are discarded, so linking an already linked aggregate yields the
/// same result.
pub fn link(mut data: Conference) -> Conference {
    sort_speakers(&mut data.speakers);

    let mut by_name: HashMap<String, usize> = HashMap::new();
    for (index, speaker) in data.speakers.iter_mut().enumerate() {
        speaker.sessions.clear();
        by_name.entry(speaker.name.clone()).or_insert(index);
    }

    let mut tracks = BTreeSet::new();
    let mut links = Vec::new();

    for (day_index, day) in data.schedule.iter_mut().enumerate() {
        day.shown_sessions = 0;
        for (group_index, group) in day.groups.iter_mut().enumerate() {
            group.hide = false;
            for (session_index, session) in group.sessions.iter_mut().enumerate() {
                let at = SessionRef {
                    day: day_index,
                    group: group_index,
                    session: session_index,
                };

                session.hide = false;
                session.speakers = session
                    .speaker_names
                    .iter()
                    .filter_map(|name| by_name.get(name).copied())
                    .collect();
                links.extend(session.speakers.iter().map(|speaker| (*speaker, at)));

                tracks.extend(session.tracks.iter().cloned());
            }
        }
    }

    for (speaker, at) in links {
        data.speakers[speaker].sessions.push(at);
    }

    data.tracks = tracks.into_iter().collect();

    tracing::debug!(
        speakers = data.speakers.len(),
        tracks = data.tracks.len(),
        days = data.schedule.len(),
        "linked conference data"
    );

    data
}

/// Stable sort by last name, compared case-sensitively.
pub fn sort_speakers(speakers: &mut [Speaker]) {
    speakers.sort_by(|a, b| a.last_name().cmp(b.last_name()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::{ScheduleDay, ScheduleGroup, Session};

    fn speaker(name: &str) -> Speaker {
        Speaker {
            id: None,
            name: name.to_string(),
            profile_pic: String::new(),
            twitter: String::new(),
            about: String::new(),
            title: None,
            location: None,
            email: None,
            phone: None,
            sessions: Vec::new(),
        }
    }

    fn session(name: &str, tracks: &[&str], speakers: &[&str]) -> Session {
        Session {
            id: None,
            name: name.to_string(),
            location: "Room 1".to_string(),
            description: None,
            time_start: "9:00 am".to_string(),
            time_end: "10:00 am".to_string(),
            tracks: tracks.iter().map(ToString::to_string).collect(),
            speaker_names: speakers.iter().map(ToString::to_string).collect(),
            speakers: Vec::new(),
            hide: false,
        }
    }

    fn conference() -> Conference {
        Conference {
            schedule: vec![ScheduleDay {
                date: "2047-05-17".to_string(),
                groups: vec![
                    ScheduleGroup {
                        time: "9:00 am".to_string(),
                        sessions: vec![
                            session("Keynote", &["General"], &["Zoe Adams", "Amy Zillow"]),
                            session("Rust Tooling", &["Tech", "Tools"], &["Amy Zillow", "Nobody Here"]),
                        ],
                        hide: false,
                    },
                    ScheduleGroup {
                        time: "10:00 am".to_string(),
                        sessions: vec![session("Lunch", &["Food", "General"], &[])],
                        hide: false,
                    },
                ],
                shown_sessions: 0,
            }],
            speakers: vec![speaker("Amy Zillow"), speaker("Zoe Adams")],
            map: Vec::new(),
            tracks: Vec::new(),
        }
    }

    fn names<'a>(data: &'a Conference, indices: &[usize]) -> Vec<&'a str> {
        indices
            .iter()
            .map(|index| data.speakers[*index].name.as_str())
            .collect()
    }

    #[test]
    fn links_sessions_and_speakers_both_ways() {
        let data = link(conference());
        let keynote = &data.schedule[0].groups[0].sessions[0];

        assert_eq!(names(&data, &keynote.speakers), ["Zoe Adams", "Amy Zillow"]);

        let keynote_ref = SessionRef {
            day: 0,
            group: 0,
            session: 0,
        };
        for speaker in data.speakers_of(keynote) {
            assert!(speaker.sessions.contains(&keynote_ref), "{}", speaker.name);
        }

        let amy = data.speaker_named("Amy Zillow").map(|s| {
            data.sessions_of(s)
                .into_iter()
                .map(|session| session.name.as_str())
                .collect::<Vec<_>>()
        });
        assert_eq!(amy, Some(vec!["Keynote", "Rust Tooling"]));
    }

    #[test]
    fn unmatched_speaker_names_are_dropped() {
        let data = link(conference());
        let tooling = &data.schedule[0].groups[0].sessions[1];

        assert_eq!(names(&data, &tooling.speakers), ["Amy Zillow"]);
        assert_eq!(tooling.speaker_names.len(), 2);
    }

    #[test]
    fn tracks_are_distinct_and_sorted() {
        let data = link(conference());
        assert_eq!(data.tracks, ["Food", "General", "Tech", "Tools"]);
    }

    #[test]
    fn speakers_are_ordered_by_last_name() {
        let data = link(conference());
        let order: Vec<_> = data.speakers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, ["Zoe Adams", "Amy Zillow"]);
    }

    #[test]
    fn last_name_comparison_is_case_sensitive() {
        let mut speakers = vec![speaker("Ann apple"), speaker("Bob Zed")];
        sort_speakers(&mut speakers);
        assert_eq!(speakers[0].name, "Bob Zed");
    }

    #[test]
    fn relinking_is_idempotent() {
        let once = link(conference());
        let twice = link(once.clone());
        assert_eq!(once, twice);
        assert_eq!(link(conference()), once);
    }
}
