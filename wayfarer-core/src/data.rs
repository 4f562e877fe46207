//! Itinerary content: days, activities and coordinates
use serde::{Deserialize, Serialize};

use crate::error::ItineraryError;
use crate::theme::ThemeColor;

const DEFAULT_ITINERARY_DATA: &str =
    include_str!("../../wayfarer-web/static/assets/data/itinerary.json");

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and inside the WGS84 range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// What kind of thing happens during an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    TravelTrain,
    TravelBus,
    TravelPlane,
    Explore,
    Stay,
    Experience,
    Departure,
    Arrival,
}

impl ActivityKind {
    #[must_use]
    pub const fn is_travel(self) -> bool {
        matches!(self, Self::TravelTrain | Self::TravelBus | Self::TravelPlane)
    }

    /// Short label used for icon titles and screen readers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TravelTrain => "Train",
            Self::TravelBus => "Bus",
            Self::TravelPlane => "Flight",
            Self::Explore => "Explore",
            Self::Stay => "Stay",
            Self::Experience => "Experience",
            Self::Departure => "Departure",
            Self::Arrival => "Arrival",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub description: String,
    #[serde(default)]
    pub time: Option<String>,
}

/// One day of the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub date: String,
    pub title: String,
    pub city: String,
    pub color: ThemeColor,
    #[serde(default)]
    pub activities: Vec<Activity>,
    pub coords: Coords,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
}

impl ItineraryDay {
    /// Image reference, treating an empty string as absent.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.trim().is_empty())
    }
}

#[derive(Deserialize)]
struct RawItinerary {
    #[serde(default)]
    title: String,
    days: Vec<ItineraryDay>,
}

/// The full, immutable day sequence. Always holds at least one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    title: String,
    days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// Build an itinerary from an ordered day list.
    ///
    /// # Errors
    ///
    /// Returns [`ItineraryError::Empty`] when `days` is empty.
    pub fn new(title: impl Into<String>, days: Vec<ItineraryDay>) -> Result<Self, ItineraryError> {
        if days.is_empty() {
            return Err(ItineraryError::Empty);
        }
        Ok(Self {
            title: title.into(),
            days,
        })
    }

    /// Parse an itinerary document of the form `{"title": .., "days": [..]}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or contains no days.
    pub fn from_json(json: &str) -> Result<Self, ItineraryError> {
        let raw: RawItinerary = serde_json::from_str(json)?;
        Self::new(raw.title, raw.days)
    }

    /// Load the itinerary bundled with the web assets.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled asset fails to parse.
    pub fn load_from_static() -> Result<Self, ItineraryError> {
        Self::from_json(DEFAULT_ITINERARY_DATA)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn days(&self) -> &[ItineraryDay] {
        &self.days
    }

    #[must_use]
    pub fn day(&self, index: usize) -> Option<&ItineraryDay> {
        self.days.get(index)
    }

    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn day(number: u32, city: &str, color: &str, coords: Coords) -> ItineraryDay {
        ItineraryDay {
            day: number,
            date: format!("Day {number}"),
            title: format!("{city} day {number}"),
            city: city.to_string(),
            color: ThemeColor::from(color),
            activities: vec![Activity {
                kind: ActivityKind::Explore,
                description: format!("Walk around {city}"),
                time: None,
            }],
            coords,
            image: None,
        }
    }

    pub const X: Coords = Coords::new(26.9124, 75.7873);
    pub const Y: Coords = Coords::new(24.5854, 73.7125);
    pub const Z: Coords = Coords::new(26.2389, 73.0243);

    pub fn itinerary(cities: &[&str]) -> Itinerary {
        let days = cities
            .iter()
            .zip(1_u32..)
            .map(|(city, number)| {
                let (coords, color) = match *city {
                    "X" => (X, "rose"),
                    "Y" => (Y, "sky"),
                    _ => (Z, "amber"),
                };
                day(number, city, color, coords)
            })
            .collect();
        Itinerary::new("Fixture", days).unwrap()
    }
}
