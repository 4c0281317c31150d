use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A point of interest on the venue map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub center: bool,
}

impl Location {
    pub const fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Position of a session inside `Conference::schedule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SessionRef {
    pub day: usize,
    pub group: usize,
    pub session: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub about: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Filled in by linking; never read from the document.
    #[serde(skip_deserializing)]
    pub sessions: Vec<SessionRef>,
}

impl Speaker {
    /// Last whitespace-delimited token of the name.
    pub fn last_name(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub time_start: String,
    pub time_end: String,
    #[serde(default)]
    pub tracks: Vec<String>,
    #[serde(default)]
    pub speaker_names: Vec<String>,
    /// Indices into `Conference::speakers`, filled in by linking.
    #[serde(skip_deserializing)]
    pub speakers: Vec<usize>,
    #[serde(skip_deserializing)]
    pub hide: bool,
}

/// Sessions sharing a start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleGroup {
    pub time: String,
    pub sessions: Vec<Session>,
    #[serde(skip_deserializing)]
    pub hide: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub date: String,
    pub groups: Vec<ScheduleGroup>,
    #[serde(skip_deserializing)]
    pub shown_sessions: usize,
}

impl ScheduleDay {
    /// Human readable date, falling back to the raw string when it is not ISO formatted.
    pub fn label(&self) -> String {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_or_else(
            |_| self.date.clone(),
            |date| date.format("%A, %B %-d").to_string(),
        )
    }

    pub fn visible_sessions(&self) -> impl Iterator<Item = (&ScheduleGroup, &Session)> + '_ {
        self.groups
            .iter()
            .filter(|group| !group.hide)
            .flat_map(|group| {
                group
                    .sessions
                    .iter()
                    .filter(|session| !session.hide)
                    .map(move |session| (group, session))
            })
    }
}

/// The whole conference document, linked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    pub schedule: Vec<ScheduleDay>,
    pub speakers: Vec<Speaker>,
    pub map: Vec<Location>,
    #[serde(skip_deserializing)]
    pub tracks: Vec<String>,
}

impl Conference {
    pub fn session(&self, at: SessionRef) -> Option<&Session> {
        self.schedule
            .get(at.day)?
            .groups
            .get(at.group)?
            .sessions
            .get(at.session)
    }

    pub fn sessions_of(&self, speaker: &Speaker) -> Vec<&Session> {
        speaker
            .sessions
            .iter()
            .filter_map(|at| self.session(*at))
            .collect()
    }

    pub fn speakers_of(&self, session: &Session) -> Vec<&Speaker> {
        session
            .speakers
            .iter()
            .filter_map(|index| self.speakers.get(*index))
            .collect()
    }

    pub fn speaker_named(&self, name: &str) -> Option<&Speaker> {
        self.speakers.iter().find(|speaker| speaker.name == name)
    }

    /// The location flagged as the map center, if the document has one.
    pub fn center(&self) -> Option<&Location> {
        self.map.iter().find(|location| location.center)
    }
}
