// Profile navigator for the terminal: collects profile URLs to print.

use std::sync::Mutex;

use crate::session::{profile_url, ProfileNavigator};

pub struct PrintNavigator {
    base_url: String,
    opened: Mutex<Vec<String>>,
}

impl PrintNavigator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            opened: Mutex::new(Vec::new()),
        }
    }

    /// Profile URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl ProfileNavigator for PrintNavigator {
    fn navigate_to_profile(&self, username: &str) {
        let url = profile_url(&self.base_url, username);
        tracing::debug!("Opening profile {}", url);
        if let Ok(mut urls) = self.opened.lock() {
            urls.push(url);
        }
    }
}
