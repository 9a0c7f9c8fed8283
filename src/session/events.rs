// Completion events posted by a discovery session

use crate::directory::QueryError;
use crate::location::{LocationError, Viewport};

use super::state::Generation;

/// Which query a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Population,
    Search,
}

/// Reported on the session's event channel as each operation completes.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    PopulationLoaded { count: usize },
    PopulationFailed(QueryError),
    Located(Viewport),
    /// Permission denied or no fix; the session continues without a map.
    LocationUnavailable(LocationError),
    SearchApplied { count: usize },
    SearchFailed(QueryError),
    /// A response arrived after a newer one was already shown.
    ResponseDiscarded {
        kind: QueryKind,
        generation: Generation,
    },
}

impl SessionEvent {
    /// True for events that end a startup task. Each of the two startup
    /// tasks posts exactly one.
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            SessionEvent::PopulationLoaded { .. }
                | SessionEvent::PopulationFailed(_)
                | SessionEvent::Located(_)
                | SessionEvent::LocationUnavailable(_)
                | SessionEvent::ResponseDiscarded {
                    kind: QueryKind::Population,
                    ..
                }
        )
    }
}
