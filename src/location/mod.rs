// Location: one-shot device position used to seed the initial viewport.
//
// The platform (permission prompt + position fix) sits behind the
// `PlatformLocation` trait. There is no continuous tracking: a session asks
// for a position once, at startup.

pub mod platform;
pub mod viewport;

pub use platform::{FixedPosition, NoLocation, PermissionStatus, PlatformLocation};
pub use viewport::{Span, Viewport};

use std::sync::Arc;
use tracing::{debug, info};

/// Location could not seed a viewport. Never fatal to a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
}

/// Resolves the device position into an initial viewport.
#[derive(Clone)]
pub struct LocationProvider {
    platform: Arc<dyn PlatformLocation>,
    span: Span,
}

impl LocationProvider {
    pub fn new(platform: Arc<dyn PlatformLocation>) -> Self {
        Self {
            platform,
            span: Span::default(),
        }
    }

    /// Override the span of the resolved viewport.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Ask for permission, then take a single high-accuracy fix.
    ///
    /// Both steps may suspend for as long as the platform needs (for example
    /// while the user answers a permission prompt). A failed fix is returned,
    /// not retried.
    pub async fn resolve_initial_position(&self) -> Result<Viewport, LocationError> {
        match self.platform.request_permission().await {
            PermissionStatus::Granted => {}
            PermissionStatus::Denied => {
                info!("Location permission denied; continuing without a map");
                return Err(LocationError::PermissionDenied);
            }
        }

        let center = self.platform.current_position().await?;
        if !center.is_valid() {
            return Err(LocationError::PositionUnavailable(format!(
                "platform reported an invalid coordinate ({})",
                center
            )));
        }

        debug!("Resolved initial position {}", center);
        Ok(Viewport::new(center, self.span))
    }
}
