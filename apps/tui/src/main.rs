mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use std::sync::Arc;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use conference_companion::config::init_app_config;
use conference_companion::data::{source_for, ConferenceData, DataSource};
use conference_companion::favorites::UserFavorites;
use conference_companion::logging::{self, LogTarget};
use conference_companion::Segment;
use event::HeadlessOptions;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config()?;

    let headless = args.headless || !is_terminal();
    let target = if headless {
        LogTarget::Stderr
    } else {
        LogTarget::File(&config.log_file)
    };
    logging::init(target, config.debug)?;

    let favorites = Arc::new(UserFavorites::with_names(args.favorites.iter().cloned()));
    let source = source_for(&config.data_location);
    tracing::info!(source = %source.describe(), headless, "starting");

    if headless {
        let provider = ConferenceData::new(source, favorites.clone());
        let options = HeadlessOptions {
            json: args.json,
            day: args.day,
            query: args.query.clone(),
            exclude_tracks: args.exclude_tracks.clone(),
            segment: Segment::parse(&args.segment),
        };
        return event::run_headless(&provider, &favorites, &config, &options).await;
    }

    let provider = ConferenceData::start(source, favorites.clone());
    let mut app = App::new(provider, favorites, &config);

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup_terminal_state(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
