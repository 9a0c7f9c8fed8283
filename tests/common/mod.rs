// Shared fakes for session integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

use devscout::directory::SearchQuery;
use devscout::location::{PermissionStatus, PlatformLocation};
use devscout::session::{ProfileNavigator, SessionEvent};
use devscout::{Coordinate, Developer, DeveloperDirectory, DeveloperId, LocationError, QueryError};

pub fn dev(id: &str, latitude: f64, longitude: f64) -> Developer {
    Developer {
        id: DeveloperId::new(id),
        name: format!("Dev {}", id),
        github_username: format!("{}-gh", id),
        bio: format!("bio of {}", id),
        avatar_url: format!("https://avatars.example/{}", id),
        techs: vec!["Rust".to_string(), "Go".to_string()],
        position: Coordinate::new(latitude, longitude),
    }
}

pub fn ids(developers: &[Developer]) -> Vec<String> {
    developers.iter().map(|d| d.id.to_string()).collect()
}

/// Next event on the channel, failing the test if none arrives.
pub async fn next_event(rx: &mut mpsc::UnboundedReceiver<SessionEvent>) -> SessionEvent {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for a session event")
        .expect("event channel closed")
}

type Reply = Result<Vec<Developer>, QueryError>;

struct Scripted {
    reply: Reply,
    gate: Option<oneshot::Receiver<()>>,
}

/// Directory whose replies are scripted per call and optionally held back
/// until the test releases them.
#[derive(Default)]
pub struct FakeDirectory {
    population: Mutex<Option<Scripted>>,
    searches: Mutex<VecDeque<Scripted>>,
    queries: Mutex<Vec<SearchQuery>>,
    population_calls: AtomicUsize,
    search_calls: AtomicUsize,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_population(self, reply: Reply) -> Self {
        *self.population.lock().unwrap() = Some(Scripted { reply, gate: None });
        self
    }

    /// Population reply that is only delivered once the sender fires.
    pub fn with_gated_population(self, reply: Reply) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        *self.population.lock().unwrap() = Some(Scripted {
            reply,
            gate: Some(rx),
        });
        (self, tx)
    }

    pub fn push_search(&self, reply: Reply) {
        self.searches
            .lock()
            .unwrap()
            .push_back(Scripted { reply, gate: None });
    }

    pub fn push_gated_search(&self, reply: Reply) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.searches.lock().unwrap().push_back(Scripted {
            reply,
            gate: Some(rx),
        });
        tx
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn population_calls(&self) -> usize {
        self.population_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Yield until `n` searches have reached the directory.
    pub async fn wait_for_searches(&self, n: usize) {
        while self.search_calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

async fn deliver(scripted: Option<Scripted>) -> Reply {
    match scripted {
        Some(Scripted { reply, gate }) => {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            reply
        }
        None => Ok(Vec::new()),
    }
}

#[async_trait]
impl DeveloperDirectory for FakeDirectory {
    async fn fetch_population(&self) -> Result<Vec<Developer>, QueryError> {
        self.population_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.population.lock().unwrap().take();
        deliver(scripted).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Developer>, QueryError> {
        self.queries.lock().unwrap().push(query.clone());
        let scripted = self.searches.lock().unwrap().pop_front();
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        deliver(scripted).await
    }
}

/// Platform whose permission prompt is never answered.
pub struct PendingLocation;

#[async_trait]
impl PlatformLocation for PendingLocation {
    async fn request_permission(&self) -> PermissionStatus {
        std::future::pending().await
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        std::future::pending().await
    }
}

/// Platform that grants permission but cannot get a fix.
pub struct BrokenGps;

#[async_trait]
impl PlatformLocation for BrokenGps {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::PositionUnavailable("no satellites".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ProfileNavigator for RecordingNavigator {
    fn navigate_to_profile(&self, username: &str) {
        self.opened.lock().unwrap().push(username.to_string());
    }
}
