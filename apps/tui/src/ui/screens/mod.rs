pub mod help;
pub mod map;
pub mod schedule;
pub mod session_details;
pub mod speaker_details;
pub mod speakers;
pub mod tracks;
