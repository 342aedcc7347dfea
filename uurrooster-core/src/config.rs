//! Store configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{UurroosterError, UurroosterResult};
use crate::fixture::Fixture;

const ENV_PREFIX: &str = "UURROOSTER";

fn default_load_delay() -> String {
    "0s".to_string()
}

/// Raw shape of ~/.config/uurrooster/config.toml
#[derive(Deserialize)]
struct RawConfig {
    fixture_path: Option<PathBuf>,

    /// humantime duration, e.g. "2s"
    #[serde(default = "default_load_delay")]
    load_delay: String,
}

/// Where the fixture lives and how `EventStore::load_data` behaves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreConfig {
    /// None loads the bundled fixture
    pub fixture_path: Option<PathBuf>,
    /// Pause before reading the fixture. Zero unless configured.
    pub load_delay: Duration,
}

impl StoreConfig {
    pub fn config_path() -> UurroosterResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| UurroosterError::Config("Could not determine config directory".into()))?
            .join("uurrooster");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default config path. A missing file yields defaults.
    pub fn load() -> UurroosterResult<Self> {
        Self::from_file(&Self::config_path()?)
    }

    /// Load from `path` with `UURROOSTER_*` environment overrides.
    pub fn from_file(path: &Path) -> UurroosterResult<Self> {
        Self::from_sources(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn from_sources(path: &Path, env: Environment) -> UurroosterResult<Self> {
        let raw: RawConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| UurroosterError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| UurroosterError::Config(e.to_string()))?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> UurroosterResult<Self> {
        let fixture_path = raw
            .fixture_path
            .map(|p| PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned()));

        let load_delay = humantime::parse_duration(&raw.load_delay).map_err(|e| {
            UurroosterError::Config(format!("Invalid load_delay '{}': {e}", raw.load_delay))
        })?;

        Ok(StoreConfig {
            fixture_path,
            load_delay,
        })
    }

    pub fn fixture(&self) -> Fixture {
        match &self.fixture_path {
            Some(path) => Fixture::new(path),
            None => Fixture::Bundled,
        }
    }

    pub fn with_fixture_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;

    /// Environment source fed from a map instead of the process environment
    fn fake_env(vars: &[(&str, &str)]) -> Environment {
        let map: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            StoreConfig::from_sources(&dir.path().join("config.toml"), fake_env(&[])).unwrap();

        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.fixture(), Fixture::Bundled);
    }

    #[test]
    fn test_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "fixture_path = \"/data/rooster.json\"\nload_delay = \"2s\"\n",
        )
        .unwrap();

        let config = StoreConfig::from_sources(&path, fake_env(&[])).unwrap();

        assert_eq!(config.fixture_path, Some(PathBuf::from("/data/rooster.json")));
        assert_eq!(config.load_delay, Duration::from_secs(2));
        assert_eq!(config.fixture(), Fixture::new("/data/rooster.json"));
    }

    #[test]
    fn test_env_overrides_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "fixture_path = \"/data/rooster.json\"\nload_delay = \"2s\"\n",
        )
        .unwrap();

        let env = fake_env(&[
            ("UURROOSTER_FIXTURE_PATH", "/srv/other.json"),
            ("UURROOSTER_LOAD_DELAY", "500ms"),
        ]);
        let config = StoreConfig::from_sources(&path, env).unwrap();

        assert_eq!(config.fixture_path, Some(PathBuf::from("/srv/other.json")));
        assert_eq!(config.load_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_unprefixed_env_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let env = fake_env(&[("FIXTURE_PATH", "/srv/other.json")]);

        let config = StoreConfig::from_sources(&dir.path().join("config.toml"), env).unwrap();

        assert_eq!(config.fixture_path, None);
    }

    #[test]
    fn test_invalid_delay_is_config_error() {
        let raw = RawConfig {
            fixture_path: None,
            load_delay: "soon".to_string(),
        };

        assert!(matches!(
            StoreConfig::from_raw(raw),
            Err(UurroosterError::Config(_))
        ));
    }

    #[test]
    fn test_tilde_is_expanded() {
        let raw = RawConfig {
            fixture_path: Some(PathBuf::from("~/uurrooster.json")),
            load_delay: default_load_delay(),
        };

        let config = StoreConfig::from_raw(raw).unwrap();

        let path = config.fixture_path.unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
    }
}
