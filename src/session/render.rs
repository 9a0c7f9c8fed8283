// Render boundary: what a map surface draws for a session, and where a
// selected developer is sent.

use serde::Serialize;
use tracing::debug;

use crate::config::constants::DEFAULT_PROFILE_BASE_URL;
use crate::directory::{Coordinate, Developer, DeveloperId};
use crate::location::Viewport;

/// Text shown when a marker is tapped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callout {
    pub name: String,
    pub bio: String,
    pub techs: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Identity of the marker across developer-set replacements.
    pub key: DeveloperId,
    pub coordinate: Coordinate,
    pub avatar_url: String,
    pub callout: Callout,
}

impl From<&Developer> for Marker {
    fn from(dev: &Developer) -> Self {
        Self {
            key: dev.id.clone(),
            coordinate: dev.position,
            avatar_url: dev.avatar_url.clone(),
            callout: Callout {
                name: dev.name.clone(),
                bio: dev.bio.clone(),
                techs: dev.techs_label(),
            },
        }
    }
}

/// Everything a map surface needs for one draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFrame {
    pub viewport: Viewport,
    pub markers: Vec<Marker>,
}

impl MapFrame {
    /// Returns `None` without a viewport: no map is drawn before location
    /// resolves, whatever the developer set holds.
    pub fn build(viewport: Option<Viewport>, developers: &[Developer]) -> Option<Self> {
        let viewport = viewport?;
        Some(Self {
            viewport,
            markers: developers.iter().map(Marker::from).collect(),
        })
    }

    pub fn marker(&self, key: &DeveloperId) -> Option<&Marker> {
        self.markers.iter().find(|m| &m.key == key)
    }
}

/// Displays a developer's external profile. Receives the developer's
/// GitHub username.
pub trait ProfileNavigator: Send + Sync {
    fn navigate_to_profile(&self, username: &str);
}

/// Navigator for hosts without a profile surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNavigation;

impl ProfileNavigator for NoNavigation {
    fn navigate_to_profile(&self, username: &str) {
        debug!("No profile surface; ignoring selection of {}", username);
    }
}

/// Public profile page of `username` under `base_url`.
pub fn profile_url(base_url: &str, username: &str) -> String {
    let base = if base_url.trim().is_empty() {
        DEFAULT_PROFILE_BASE_URL
    } else {
        base_url
    };
    format!("{}/{}", base.trim_end_matches('/'), username.trim())
}
