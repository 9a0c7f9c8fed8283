// Developer records as returned by the developer-directory service
//
// Wire records are deserialized loosely (`WireDeveloper`) and then validated
// into `Developer`. Nothing untyped crosses into the session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a developer record (the directory's `_id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeveloperId(String);

impl DeveloperId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeveloperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for DeveloperId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A validated developer, as held by a discovery session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Developer {
    pub id: DeveloperId,
    pub name: String,
    /// Handle passed to the profile surface when the developer is selected.
    pub github_username: String,
    pub bio: String,
    pub avatar_url: String,
    pub techs: Vec<String>,
    pub position: Coordinate,
}

impl Developer {
    /// Technologies as shown in a marker callout.
    pub fn techs_label(&self) -> String {
        self.techs.join(", ")
    }
}

/// GeoJSON point. `coordinates` is `[longitude, latitude]`.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePoint {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub coordinates: Vec<f64>,
}

/// Developer record exactly as the directory serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireDeveloper {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub github_username: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub techs: Option<Vec<String>>,
    pub location: Option<WirePoint>,
}

/// Why a wire record was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("location is not a [longitude, latitude] pair")]
    MalformedLocation,

    #[error("location out of range")]
    LocationOutOfRange,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RecordError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(RecordError::MissingField(field)),
    }
}

impl TryFrom<WirePoint> for Coordinate {
    type Error = RecordError;

    fn try_from(point: WirePoint) -> Result<Self, Self::Error> {
        if let Some(kind) = point.kind.as_deref() {
            if kind != "Point" {
                return Err(RecordError::MalformedLocation);
            }
        }
        let (longitude, latitude) = match point.coordinates.as_slice() {
            [lon, lat] => (*lon, *lat),
            _ => return Err(RecordError::MalformedLocation),
        };
        let coordinate = Coordinate::new(latitude, longitude);
        if !coordinate.is_valid() {
            return Err(RecordError::LocationOutOfRange);
        }
        Ok(coordinate)
    }
}

impl TryFrom<WireDeveloper> for Developer {
    type Error = RecordError;

    fn try_from(wire: WireDeveloper) -> Result<Self, Self::Error> {
        let id = required(wire.id, "_id")?;
        let name = required(wire.name, "name")?;
        let github_username = required(wire.github_username, "github_username")?;
        let avatar_url = required(wire.avatar_url, "avatar_url")?;
        let position: Coordinate = wire
            .location
            .ok_or(RecordError::MissingField("location"))?
            .try_into()?;

        Ok(Developer {
            id: DeveloperId::new(id),
            name,
            github_username,
            bio: wire.bio.unwrap_or_default(),
            avatar_url,
            techs: wire.techs.unwrap_or_default(),
            position,
        })
    }
}
