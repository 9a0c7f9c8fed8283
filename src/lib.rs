// Devscout - find developers near you by the technologies they use
// Library exports

pub mod cli;
pub mod config;
pub mod directory;
pub mod location;
pub mod logging;
pub mod session;

pub use directory::{Coordinate, Developer, DeveloperDirectory, DeveloperId, QueryError};
pub use location::{LocationError, LocationProvider, Span, Viewport};
pub use session::{DiscoverySession, SessionError, SessionEvent, SessionPhase};
