use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub http: Http,
    pub log: Log,
    pub views: Views,
}

#[derive(Debug, Deserialize)]
pub struct Http {
    pub address: String,
    pub tls: Option<Tls>,
}

#[derive(Debug, Deserialize)]
pub struct Tls {
    pub cert_path: String,
    pub key_path: String,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
    /// Overrides the build profile for the console facade.
    pub development: Option<bool>,
}

impl Log {
    pub fn is_development(&self) -> bool {
        self.development.unwrap_or(cfg!(debug_assertions))
    }
}

#[derive(Debug, Deserialize)]
pub struct Views {
    pub backend: String, // "fake" or "fs"
    pub root: String,
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bundled_settings() {
        let dev = parse_settings(Some("settings/dev.toml")).unwrap();
        assert_eq!(dev.views.backend, "fake");
        assert!(dev.http.tls.is_none());
        assert!(dev.log.is_development());

        let release = parse_settings(Some("settings/release.toml")).unwrap();
        assert_eq!(release.views.backend, "fs");
        assert!(!release.log.is_development());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(parse_settings(Some("")).is_err());
        assert!(parse_settings(Some("settings/missing.toml")).is_err());
    }

    #[test]
    fn development_defaults_to_build_profile() {
        let log = Log {
            filter: "info".to_string(),
            development: None,
        };
        assert_eq!(log.is_development(), cfg!(debug_assertions));
    }
}
