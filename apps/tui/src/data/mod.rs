pub mod error;
pub mod filter;
pub mod linking;
pub mod models;
pub mod provider;
pub mod source;
pub mod store;

pub use error::ConferenceError;
pub use models::{Conference, LatLng, Location, ScheduleDay, ScheduleGroup, Session, SessionRef, Speaker};
pub use provider::ConferenceData;
pub use source::{source_for, DataSource, FileSource, HttpSource};
pub use store::{LatestValue, Subscription};
