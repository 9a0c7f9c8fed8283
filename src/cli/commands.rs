// Subcommand handling

use anyhow::{Context, Result};
use clap::Args;
use std::fmt::Write as _;
use std::sync::Arc;

use super::navigator::PrintNavigator;
use crate::config::Config;
use crate::directory::{Coordinate, Developer, DeveloperDirectory, DeveloperId, HttpDirectory, SearchQuery};
use crate::location::{FixedPosition, LocationProvider, NoLocation, PlatformLocation};
use crate::session::{profile_url, DiscoverySession, MapFrame, SearchOutcome, SessionEvent};

#[derive(Debug, Clone, Args)]
pub struct BrowseArgs {
    /// Device position as "LAT,LON" (defaults to `location` in the config)
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    pub at: Option<Coordinate>,

    /// Technologies to search for around the resolved position
    #[arg(long)]
    pub techs: Option<String>,

    /// Developer id to open the profile of after loading
    #[arg(long)]
    pub select: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Comma-separated technologies (empty matches any)
    #[arg(long, default_value = "")]
    pub techs: String,
}

/// Parse "LAT,LON" in decimal degrees.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, String> {
    let (lat, lon) = input
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{}'", input))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;
    let coordinate = Coordinate::new(lat, lon);
    if !coordinate.is_valid() {
        return Err(format!("coordinate out of range: {}", coordinate));
    }
    Ok(coordinate)
}

/// Run a full discovery session and describe what a map would show.
pub async fn browse(config: &Config, args: BrowseArgs) -> Result<String> {
    let directory = Arc::new(HttpDirectory::from_config(&config.api)?);
    let platform: Arc<dyn PlatformLocation> =
        match args.at.or_else(|| config.location.fixed_position()) {
            Some(position) => Arc::new(FixedPosition::new(position)),
            None => Arc::new(NoLocation),
        };
    let location = LocationProvider::new(platform).with_span(config.location.span());
    let navigator = Arc::new(PrintNavigator::new(&config.profile.base_url));

    let (session, mut events) = DiscoverySession::new(
        directory,
        location,
        navigator.clone(),
        config.session.response_ordering,
    );
    session
        .start()
        .await
        .context("Failed to start discovery session")?;

    let mut out = String::new();
    let mut pending = 2;
    while pending > 0 {
        let Some(event) = events.recv().await else {
            break;
        };
        if !event.is_startup() {
            continue;
        }
        pending -= 1;
        match event {
            SessionEvent::PopulationFailed(e) => {
                let _ = writeln!(out, "Could not load developers: {}", e);
            }
            SessionEvent::LocationUnavailable(e) => {
                let _ = writeln!(out, "No map ({})", e);
            }
            _ => {}
        }
    }

    if let Some(techs) = args.techs {
        session.on_filter_text_changed(techs).await;
        if session.can_search().await {
            match session.search().await {
                Ok(SearchOutcome::Applied { count }) => {
                    let _ = writeln!(out, "Search matched {} developers", count);
                }
                Ok(SearchOutcome::Stale) => {}
                Err(e) => {
                    let _ = writeln!(out, "Search failed, showing previous results: {}", e);
                }
            }
        } else {
            let _ = writeln!(out, "Search needs a position; pass --at LAT,LON");
        }
    }

    match session.render().await {
        Some(frame) => out.push_str(&format_frame(&frame)),
        None => out.push_str(&format_developers(&session.developers().await)),
    }

    if let Some(id) = args.select {
        match session.select(&DeveloperId::new(id)).await {
            Ok(()) => {
                for url in navigator.opened() {
                    let _ = writeln!(out, "Profile: {}", url);
                }
            }
            Err(e) => {
                let _ = writeln!(out, "{}", e);
            }
        }
    }

    Ok(out)
}

/// One-shot filtered search, without a session.
pub async fn search(config: &Config, args: SearchArgs) -> Result<String> {
    let center = Coordinate::new(args.lat, args.lon);
    if !center.is_valid() {
        anyhow::bail!("coordinate out of range: {}", center);
    }
    let directory = HttpDirectory::from_config(&config.api)?;
    let developers = directory
        .search(&SearchQuery::new(center, args.techs))
        .await
        .context("Search failed")?;
    Ok(format_developers(&developers))
}

pub fn profile(config: &Config, username: &str) -> String {
    profile_url(&config.profile.base_url, username)
}

pub fn format_developers(developers: &[Developer]) -> String {
    if developers.is_empty() {
        return "No developers found.\n".to_string();
    }
    let mut out = String::new();
    for dev in developers {
        let _ = writeln!(
            out,
            "{:<26} {:<24} ({}) [{}]",
            dev.id,
            dev.name,
            dev.position,
            dev.techs_label()
        );
        if !dev.bio.is_empty() {
            let _ = writeln!(out, "    {}", dev.bio);
        }
    }
    out
}

pub fn format_frame(frame: &MapFrame) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Map centered on {} (span {} x {}), {} markers",
        frame.viewport.center,
        frame.viewport.span.latitude_delta,
        frame.viewport.span.longitude_delta,
        frame.markers.len()
    );
    for marker in &frame.markers {
        let _ = writeln!(
            out,
            "  @ {}  {} [{}]  {}",
            marker.coordinate, marker.callout.name, marker.callout.techs, marker.key
        );
    }
    out
}
