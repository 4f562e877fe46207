//! Error types for itinerary loading
use thiserror::Error;

/// Failures that can occur while loading itinerary content.
#[derive(Debug, Error)]
pub enum ItineraryError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("itinerary has no days")]
    Empty,
}
