// Discovery session: the state behind one map screen.
//
// A session owns the viewport, the technology filter and the developer set
// being rendered. `start()` launches the population fetch and location
// resolution as two independent tasks; each writes its own slice of state
// and posts a `SessionEvent` when done. Filtered searches are user-triggered
// and replace the developer set wholesale.

pub mod events;
pub mod render;
pub mod state;

pub use events::{QueryKind, SessionEvent};
pub use render::{profile_url, Callout, MapFrame, Marker, NoNavigation, ProfileNavigator};
pub use state::{Generation, ResponseOrdering, SessionPhase, SessionSnapshot, SessionState};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::directory::{Developer, DeveloperDirectory, DeveloperId, QueryError, SearchQuery};
use crate::location::{LocationProvider, Viewport};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Search and viewport updates need a resolved viewport. Hosts should
    /// disable the search control until `can_search()` is true.
    #[error("no viewport yet; location has not resolved")]
    NoViewport,

    #[error("session already started")]
    AlreadyStarted,

    #[error("developer {0} is not in the current developer set")]
    UnknownDeveloper(String),

    #[error("query failed: {0}")]
    QueryFailed(#[from] QueryError),
}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The response replaced the developer set.
    Applied { count: usize },
    /// A newer response was already on screen; this one was dropped.
    Stale,
}

/// Handles of the two startup tasks. They run independently; awaiting one
/// never waits on the other.
pub struct StartupTasks {
    pub population: JoinHandle<()>,
    pub location: JoinHandle<()>,
}

pub struct DiscoverySession {
    id: Uuid,
    directory: Arc<dyn DeveloperDirectory>,
    location: LocationProvider,
    navigator: Arc<dyn ProfileNavigator>,
    state: Arc<RwLock<SessionState>>,
    events: mpsc::UnboundedSender<SessionEvent>,
    started: AtomicBool,
}

impl DiscoverySession {
    /// Create a session and the receiving end of its event channel.
    pub fn new(
        directory: Arc<dyn DeveloperDirectory>,
        location: LocationProvider,
        navigator: Arc<dyn ProfileNavigator>,
        ordering: ResponseOrdering,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let session = Self {
            id: Uuid::new_v4(),
            directory,
            location,
            navigator,
            state: Arc::new(RwLock::new(SessionState::new(ordering))),
            events,
            started: AtomicBool::new(false),
        };
        (session, rx)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Launch the population fetch and location resolution.
    ///
    /// Location is resolved at most once per session, so a second call is
    /// rejected.
    pub async fn start(&self) -> Result<StartupTasks, SessionError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(SessionError::AlreadyStarted);
        }

        // Stamped before spawning so searches issued afterwards are newer.
        let generation = self.state.write().await.issue();
        debug!(session = %self.id, "Starting discovery session");

        let population = {
            let directory = Arc::clone(&self.directory);
            let state = Arc::clone(&self.state);
            let events = self.events.clone();
            let session = self.id;
            tokio::spawn(async move {
                let event = match directory.fetch_population().await {
                    Ok(developers) => {
                        let count = developers.len();
                        if state.write().await.apply(generation, developers) {
                            info!(session = %session, "Loaded {} developers", count);
                            SessionEvent::PopulationLoaded { count }
                        } else {
                            debug!(session = %session, "Population response superseded");
                            SessionEvent::ResponseDiscarded {
                                kind: QueryKind::Population,
                                generation,
                            }
                        }
                    }
                    Err(e) => {
                        warn!(session = %session, "Population fetch failed: {}", e);
                        SessionEvent::PopulationFailed(e)
                    }
                };
                let _ = events.send(event);
            })
        };

        let location = {
            let provider = self.location.clone();
            let state = Arc::clone(&self.state);
            let events = self.events.clone();
            let session = self.id;
            tokio::spawn(async move {
                let event = match provider.resolve_initial_position().await {
                    Ok(viewport) => {
                        state.write().await.set_viewport(viewport);
                        info!(session = %session, "Viewport centered on {}", viewport.center);
                        SessionEvent::Located(viewport)
                    }
                    Err(e) => {
                        info!(session = %session, "No initial viewport: {}", e);
                        SessionEvent::LocationUnavailable(e)
                    }
                };
                let _ = events.send(event);
            })
        };

        Ok(StartupTasks {
            population,
            location,
        })
    }

    /// Record a viewport produced by map interaction. Last write wins; no
    /// query is issued.
    pub async fn on_viewport_changed(&self, viewport: Viewport) -> Result<(), SessionError> {
        let mut state = self.state.write().await;
        if state.viewport().is_none() {
            return Err(SessionError::NoViewport);
        }
        state.set_viewport(viewport);
        Ok(())
    }

    /// Replace the technology filter. No query is issued.
    pub async fn on_filter_text_changed(&self, text: impl Into<String>) {
        self.state.write().await.set_filter(text.into());
    }

    /// Search around the current viewport center with the current filter.
    ///
    /// On success the response replaces the developer set unless a newer
    /// response is already shown (see `ResponseOrdering`). On failure the
    /// developer set is left as it was.
    pub async fn search(&self) -> Result<SearchOutcome, SessionError> {
        let (query, generation) = {
            let mut state = self.state.write().await;
            let viewport = state.viewport().ok_or(SessionError::NoViewport)?;
            let query = SearchQuery::new(viewport.center, state.filter());
            (query, state.issue())
        };
        debug!(
            session = %self.id,
            "Searching near {}, {} for {:?}",
            query.latitude,
            query.longitude,
            query.techs
        );

        match self.directory.search(&query).await {
            Ok(developers) => {
                let count = developers.len();
                let applied = self.state.write().await.apply(generation, developers);
                if applied {
                    let _ = self.events.send(SessionEvent::SearchApplied { count });
                    Ok(SearchOutcome::Applied { count })
                } else {
                    debug!(session = %self.id, "Search response superseded");
                    let _ = self.events.send(SessionEvent::ResponseDiscarded {
                        kind: QueryKind::Search,
                        generation,
                    });
                    Ok(SearchOutcome::Stale)
                }
            }
            Err(e) => {
                warn!(session = %self.id, "Search failed: {}", e);
                let _ = self.events.send(SessionEvent::SearchFailed(e.clone()));
                Err(e.into())
            }
        }
    }

    /// Hand the selected developer's username to the profile navigator.
    pub async fn select(&self, id: &DeveloperId) -> Result<(), SessionError> {
        let username = {
            let state = self.state.read().await;
            let developers = state.developers();
            let developer = developers
                .iter()
                .find(|d| &d.id == id)
                .ok_or_else(|| SessionError::UnknownDeveloper(id.to_string()))?;
            developer.github_username.clone()
        };
        self.navigator.navigate_to_profile(&username);
        Ok(())
    }

    pub async fn render(&self) -> Option<MapFrame> {
        let state = self.state.read().await;
        MapFrame::build(state.viewport(), &state.developers())
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.read().await.snapshot()
    }

    pub async fn phase(&self) -> SessionPhase {
        self.state.read().await.phase()
    }

    pub async fn can_search(&self) -> bool {
        self.phase().await == SessionPhase::Active
    }

    pub async fn viewport(&self) -> Option<Viewport> {
        self.state.read().await.viewport()
    }

    pub async fn filter(&self) -> String {
        self.state.read().await.filter().to_string()
    }

    pub async fn developers(&self) -> Arc<[Developer]> {
        self.state.read().await.developers()
    }
}
