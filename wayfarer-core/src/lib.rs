//! Wayfarer core
//!
//! Platform-agnostic view-state synchronization for the Wayfarer itinerary
//! viewer: day selection, derived view model, map adapter contract and the
//! background decoration crossfade. This crate has no UI or browser
//! dependencies.

pub mod config;
pub mod data;
pub mod decoration;
pub mod error;
pub mod map;
pub mod recording;
pub mod selection;
pub mod session;
pub mod theme;
pub mod view_model;
pub mod viewer;

// Re-export commonly used types
pub use config::ViewerConfig;
pub use data::{Activity, ActivityKind, Coords, Itinerary, ItineraryDay};
pub use decoration::{DecorationController, DecorationPhase, Theme, Transition, TransitionTicket};
pub use error::ItineraryError;
pub use map::{GeoBounds, MapAdapter, MapRenderer, MarkerIcon, RouteStyle, SyncReport, route_styles};
pub use selection::DaySelection;
pub use session::{ViewState, ViewerSession};
pub use theme::{CardStyle, PatternKind, ThemeColor};
pub use view_model::{City, Emphasis, ViewModel, Waypoints, emphasis_for, unique_cities, waypoints};
pub use viewer::{Viewer, ViewerUpdate};

/// Trait for abstracting itinerary loading.
/// Platform-specific implementations should provide this
pub trait ItineraryLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the ordered day sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the itinerary cannot be read or parsed.
    fn load_itinerary(&self) -> Result<Itinerary, Self::Error>;
}

/// Loader for the itinerary bundled with the web assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledItinerary;

impl ItineraryLoader for BundledItinerary {
    type Error = ItineraryError;

    fn load_itinerary(&self) -> Result<Itinerary, Self::Error> {
        Itinerary::load_from_static()
    }
}
