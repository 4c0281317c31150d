use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "conference_companion",
    version,
    about = "Conference schedule, speakers and venue map"
)]
pub struct CliArgs {
    /// Print the schedule and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// URL or path of the conference document
    #[arg(long, value_name = "URL|PATH")]
    pub data: Option<String>,

    /// Day to show in headless mode (0-based)
    #[arg(long, default_value_t = 0)]
    pub day: usize,

    /// Only show sessions whose name contains any of the words
    #[arg(long, default_value = "")]
    pub query: String,

    /// Hide sessions that carry this track (repeatable)
    #[arg(long = "exclude-track", value_name = "TRACK")]
    pub exclude_tracks: Vec<String>,

    /// `all` or `favorites`
    #[arg(long, default_value = "all")]
    pub segment: String,

    /// Mark a session as favorite by name (repeatable)
    #[arg(long = "favorite", value_name = "SESSION")]
    pub favorites: Vec<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var("CONFERENCE_DATA", data);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
