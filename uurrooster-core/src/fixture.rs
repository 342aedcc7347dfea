//! Reading the schedule fixture.

use std::fmt;
use std::path::PathBuf;

use crate::error::UurroosterResult;
use crate::event::Event;
use crate::record::{self, EventRecord};

/// File name of the bundled fixture
pub const DEFAULT_FIXTURE_NAME: &str = "uurrooster.json";

/// Fixture compiled into the binary, used when no path is configured
pub const BUNDLED_FIXTURE: &str = include_str!("../fixtures/uurrooster.json");

/// A JSON array of `EventRecord`s, either bundled or read from disk.
#[derive(Debug, Clone, PartialEq)]
pub enum Fixture {
    Bundled,
    File(PathBuf),
}

impl Fixture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Fixture::File(path.into())
    }

    pub async fn read_records(&self) -> UurroosterResult<Vec<EventRecord>> {
        match self {
            Fixture::Bundled => record::parse_records(BUNDLED_FIXTURE),
            Fixture::File(path) => {
                let content = tokio::fs::read_to_string(path).await?;
                record::parse_records(&content)
            }
        }
    }

    /// Read and convert every record. Fails on the first record that
    /// doesn't convert.
    pub async fn load_events(&self) -> UurroosterResult<Vec<Event>> {
        self.read_records()
            .await?
            .iter()
            .map(EventRecord::to_event)
            .collect()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Fixture::Bundled
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Fixture::Bundled => write!(f, "bundled {}", DEFAULT_FIXTURE_NAME),
            Fixture::File(path) => write!(f, "{}", path.display()),
        }
    }
}
