//! Itinerary sources for the tester
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use wayfarer_core::{BundledItinerary, Itinerary, ItineraryError, ItineraryLoader};

#[derive(Debug, thiserror::Error)]
pub enum FileLoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Itinerary(#[from] ItineraryError),
}

/// Itinerary JSON read from disk.
#[derive(Debug, Clone)]
pub struct FileItinerary {
    path: PathBuf,
}

impl FileItinerary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ItineraryLoader for FileItinerary {
    type Error = FileLoadError;

    fn load_itinerary(&self) -> Result<Itinerary, Self::Error> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| FileLoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(Itinerary::from_json(&json)?)
    }
}

/// Load from `path`, or the itinerary bundled with the web assets.
pub fn load(path: Option<&Path>) -> Result<Itinerary> {
    match path {
        Some(path) => FileItinerary::new(path)
            .load_itinerary()
            .with_context(|| format!("loading itinerary from {}", path.display())),
        None => BundledItinerary
            .load_itinerary()
            .context("loading bundled itinerary"),
    }
}
