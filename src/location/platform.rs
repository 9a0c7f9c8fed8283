// Platform location capability and the implementations shipped with the crate.

use async_trait::async_trait;

use super::LocationError;
use crate::directory::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// The host platform's permission and position-fix subsystem.
#[async_trait]
pub trait PlatformLocation: Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;

    /// A single fix at the platform's highest accuracy.
    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// Always grants and reports the same coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition {
    position: Coordinate,
}

impl FixedPosition {
    pub fn new(position: Coordinate) -> Self {
        Self { position }
    }
}

#[async_trait]
impl PlatformLocation for FixedPosition {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Ok(self.position)
    }
}

/// A platform without location: permission is always denied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

#[async_trait]
impl PlatformLocation for NoLocation {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Denied
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}
