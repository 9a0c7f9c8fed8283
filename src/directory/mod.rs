// Developer directory: the remote service that owns developer records.
//
// Contract:
//
//   GET /devs
//     Response: [ developer, ... ]            (full population)
//
//   GET /search?latitude=<deg>&longitude=<deg>&techs=<text>
//     Response: [ developer, ... ]            (geospatial + tag match)
//
// Both responses use the same record shape; see `types::WireDeveloper`.

pub mod client;
pub mod types;

pub use client::HttpDirectory;
pub use types::{Coordinate, Developer, DeveloperId, RecordError};

use async_trait::async_trait;

/// Parameters of a filtered search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Raw filter text. Empty means no technology constraint; the server
    /// decides how commas are interpreted.
    pub techs: String,
}

impl SearchQuery {
    pub fn new(center: Coordinate, techs: impl Into<String>) -> Self {
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            techs: techs.into(),
        }
    }
}

/// A population or search query that did not produce a developer list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("developer directory unreachable: {0}")]
    Transport(String),

    #[error("developer directory returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode developer list: {0}")]
    Decode(String),
}

/// The queries a discovery session needs from the directory.
#[async_trait]
pub trait DeveloperDirectory: Send + Sync {
    /// Every known developer, independent of location.
    async fn fetch_population(&self) -> Result<Vec<Developer>, QueryError>;

    /// Developers near `query`'s center that match its technology filter.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Developer>, QueryError>;
}
