//! Web-side itinerary loading
//!
//! Provides the browser implementation of the core loader trait and
//! re-exports the core types for the components.

use std::sync::Arc;

use once_cell::sync::Lazy;

// Re-export all types from wayfarer-core
pub use wayfarer_core::*;

const ITINERARY_JSON: &str = include_str!("../static/assets/data/itinerary.json");

/// Loader backed by the itinerary JSON embedded at build time.
pub struct WebItineraryLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Itinerary error: {0}")]
    Itinerary(#[from] ItineraryError),
}

impl ItineraryLoader for WebItineraryLoader {
    type Error = WebDataError;

    fn load_itinerary(&self) -> Result<Itinerary, Self::Error> {
        Ok(Itinerary::from_json(ITINERARY_JSON)?)
    }
}

static VIEWER_CONFIG: Lazy<ViewerConfig> = Lazy::new(ViewerConfig::load_from_static);

/// Parse the embedded itinerary.
///
/// # Errors
///
/// Returns an error if the embedded itinerary is malformed or empty.
pub fn load_itinerary() -> Result<Arc<Itinerary>, WebDataError> {
    WebItineraryLoader.load_itinerary().map(Arc::new)
}

/// Viewer tuning parsed from the bundled `viewer.json`.
#[must_use]
pub fn viewer_config() -> &'static ViewerConfig {
    &VIEWER_CONFIG
}
