use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::domain::CenterFallback;
use crate::map::DEFAULT_ZOOM;

pub const DEFAULT_DATA_LOCATION: &str = "assets/data/data.json";
pub const DEFAULT_LOG_FILE: &str = "conference.log";

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// URL or filesystem path of the conference document.
    pub data_location: String,
    pub map_zoom: u8,
    pub center_fallback: CenterFallback,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_location: DEFAULT_DATA_LOCATION.to_string(),
            map_zoom: DEFAULT_ZOOM,
            center_fallback: CenterFallback::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            debug: false,
        }
    }
}

/// Initializes the application configuration
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    from_lookup(|key| env::var(key).ok())
}

/// Builds the configuration from any key lookup.
pub fn from_lookup<F>(lookup: F) -> color_eyre::eyre::Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = AppConfig::default();

    let data_location = lookup("CONFERENCE_DATA")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(defaults.data_location);

    let map_zoom = match lookup("MAP_ZOOM") {
        Some(value) => value
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|zoom| *zoom <= 22)
            .ok_or_else(|| color_eyre::eyre::eyre!("MAP_ZOOM must be 0-22, got {value:?}"))?,
        None => defaults.map_zoom,
    };

    let center_fallback = match lookup("MAP_CENTER_FALLBACK") {
        Some(value) => CenterFallback::parse(&value).ok_or_else(|| {
            color_eyre::eyre::eyre!("MAP_CENTER_FALLBACK must be `first` or `strict`, got {value:?}")
        })?,
        None => defaults.center_fallback,
    };

    let log_file = lookup("CONFERENCE_LOG").map_or(defaults.log_file, PathBuf::from);

    let debug = lookup("DEBUG").is_some_and(|value| !matches!(value.trim(), "" | "0" | "false"));

    Ok(AppConfig {
        data_location,
        map_zoom,
        center_fallback,
        log_file,
        debug,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() -> color_eyre::eyre::Result<()> {
        let config = from_lookup(lookup(&[]))?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.data_location, "assets/data/data.json");
        assert_eq!(config.map_zoom, 16);
        Ok(())
    }

    #[test]
    fn reads_overrides() -> color_eyre::eyre::Result<()> {
        let config = from_lookup(lookup(&[
            ("CONFERENCE_DATA", "https://example.com/data.json"),
            ("MAP_ZOOM", "14"),
            ("MAP_CENTER_FALLBACK", "strict"),
            ("CONFERENCE_LOG", "/tmp/companion.log"),
            ("DEBUG", "1"),
        ]))?;

        assert_eq!(config.data_location, "https://example.com/data.json");
        assert_eq!(config.map_zoom, 14);
        assert_eq!(config.center_fallback, CenterFallback::Strict);
        assert_eq!(config.log_file, PathBuf::from("/tmp/companion.log"));
        assert!(config.debug);
        Ok(())
    }

    #[test]
    fn rejects_bad_values() {
        assert!(from_lookup(lookup(&[("MAP_ZOOM", "99")])).is_err());
        assert!(from_lookup(lookup(&[("MAP_ZOOM", "close")])).is_err());
        assert!(from_lookup(lookup(&[("MAP_CENTER_FALLBACK", "nearest")])).is_err());
    }

    #[test]
    fn debug_flag_treats_zero_as_off() -> color_eyre::eyre::Result<()> {
        assert!(!from_lookup(lookup(&[("DEBUG", "0")]))?.debug);
        assert!(!from_lookup(lookup(&[("DEBUG", "false")]))?.debug);
        assert!(from_lookup(lookup(&[("DEBUG", "yes")]))?.debug);
        Ok(())
    }
}
