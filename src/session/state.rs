// Discovery session state and response-ordering rules

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::directory::Developer;
use crate::location::Viewport;

/// How responses that complete out of order are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Only a response newer (by issue order) than the one on screen is
    /// applied. A slow early request cannot overwrite a later one.
    #[default]
    LatestIssued,
    /// Whatever completes last wins, regardless of when it was issued.
    LatestCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No viewport, nothing fetched yet.
    Uninitialized,
    /// Developers fetched but no viewport, so no map.
    PopulatedUnlocated,
    /// Viewport present; filtered search is available.
    Active,
}

/// Issue-order stamp of a query. Zero means "nothing applied yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Generation(u64);

/// Point-in-time copy of a session, cheap to clone.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub viewport: Option<Viewport>,
    pub filter: String,
    pub developers: Arc<[Developer]>,
    pub generation: Generation,
}

#[derive(Debug)]
pub struct SessionState {
    viewport: Option<Viewport>,
    filter: String,
    developers: Arc<[Developer]>,
    last_issued: Generation,
    displayed: Generation,
    ordering: ResponseOrdering,
}

impl SessionState {
    pub fn new(ordering: ResponseOrdering) -> Self {
        Self {
            viewport: None,
            filter: String::new(),
            developers: Arc::from(Vec::new()),
            last_issued: Generation::default(),
            displayed: Generation::default(),
            ordering,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.viewport.is_some() {
            SessionPhase::Active
        } else if self.displayed > Generation::default() {
            SessionPhase::PopulatedUnlocated
        } else {
            SessionPhase::Uninitialized
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
    }

    pub fn developers(&self) -> Arc<[Developer]> {
        Arc::clone(&self.developers)
    }

    /// Stamp a new outgoing query.
    pub fn issue(&mut self) -> Generation {
        self.last_issued = Generation(self.last_issued.0 + 1);
        self.last_issued
    }

    /// Replace the developer set with a response stamped `generation`.
    ///
    /// Returns false when the response is stale under the current ordering
    /// and was dropped; the developer set is then untouched.
    pub fn apply(&mut self, generation: Generation, developers: Vec<Developer>) -> bool {
        if self.ordering == ResponseOrdering::LatestIssued && generation <= self.displayed {
            return false;
        }
        self.developers = Arc::from(developers);
        self.displayed = generation;
        true
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            viewport: self.viewport,
            filter: self.filter.clone(),
            developers: self.developers(),
            generation: self.displayed,
        }
    }
}
