//! Values derived from the itinerary, the selected day and the hovered city.
//!
//! Everything here is recomputed from scratch on every change. The data set
//! is small and static, so there is no caching or incremental update.
use serde::Serialize;
use smallvec::SmallVec;

use crate::data::{Coords, Itinerary, ItineraryDay};
use crate::decoration::Theme;
use crate::theme::ThemeColor;

/// Route path between the previous distinct city and the active one.
/// Either empty or exactly two points.
pub type Waypoints = SmallVec<[Coords; 2]>;

/// A visited city, taken from the first day that mentions it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub name: String,
    pub coords: Coords,
    pub color: ThemeColor,
}

/// Visual weight of a city marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Emphasis {
    Default,
    Highlighted,
    Active,
}

impl Emphasis {
    #[must_use]
    pub const fn scale(self) -> f64 {
        match self {
            Self::Default => 1.0,
            Self::Highlighted => 1.3,
            Self::Active => 1.6,
        }
    }

    /// Stacking offset; higher draws on top.
    #[must_use]
    pub const fn z_offset(self) -> i32 {
        match self {
            Self::Default => 0,
            Self::Highlighted => 1000,
            Self::Active => 2000,
        }
    }
}

/// Deduplicate cities by name, keeping first-appearance order.
#[must_use]
pub fn unique_cities(days: &[ItineraryDay]) -> Vec<City> {
    let mut cities: Vec<City> = Vec::new();
    for day in days {
        if cities.iter().any(|c| c.name == day.city) {
            continue;
        }
        cities.push(City {
            name: day.city.clone(),
            coords: day.coords,
            color: day.color.clone(),
        });
    }
    cities
}

/// Two-point path from the nearest earlier day in a different city to the
/// day at `index`. Empty on the first day, or while no earlier day differs.
#[must_use]
pub fn waypoints(days: &[ItineraryDay], index: usize) -> Waypoints {
    let Some(current) = days.get(index) else {
        return Waypoints::new();
    };
    let previous = days[..index]
        .iter()
        .rev()
        .find(|day| day.city != current.city);
    match previous {
        Some(prev) if prev.city != current.city => {
            SmallVec::from_buf([prev.coords, current.coords])
        }
        _ => Waypoints::new(),
    }
}

/// Active outranks highlighted, so hovering the active city keeps it active.
#[must_use]
pub fn emphasis_for(city: &str, active_city: &str, hovered: Option<&str>) -> Emphasis {
    if city == active_city {
        Emphasis::Active
    } else if hovered == Some(city) {
        Emphasis::Highlighted
    } else {
        Emphasis::Default
    }
}

/// Snapshot consumed by the map adapter and the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub day_index: usize,
    pub active_day: ItineraryDay,
    pub cities: Vec<City>,
    pub waypoints: Waypoints,
    pub hovered_city: Option<String>,
}

impl ViewModel {
    /// Derive the view for `index` (clamped) and the hovered city.
    #[must_use]
    pub fn derive(itinerary: &Itinerary, index: usize, hovered_city: Option<&str>) -> Self {
        let days = itinerary.days();
        let day_index = index.min(days.len().saturating_sub(1));
        Self {
            day_index,
            active_day: days[day_index].clone(),
            cities: unique_cities(days),
            waypoints: waypoints(days, day_index),
            hovered_city: hovered_city.map(str::to_string),
        }
    }

    #[must_use]
    pub fn active_city(&self) -> &str {
        &self.active_day.city
    }

    #[must_use]
    pub fn emphasis(&self, city: &str) -> Emphasis {
        emphasis_for(city, self.active_city(), self.hovered_city.as_deref())
    }

    /// Cities paired with their current emphasis, in marker order.
    pub fn marker_states(&self) -> impl Iterator<Item = (&City, Emphasis)> + '_ {
        self.cities.iter().map(|city| (city, self.emphasis(&city.name)))
    }

    #[must_use]
    pub fn has_route(&self) -> bool {
        self.waypoints.len() == 2
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::of_day(&self.active_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{X, Y, Z, itinerary};

    fn names(cities: &[City]) -> Vec<&str> {
        cities.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn cities_keep_first_appearance_order() {
        let trip = itinerary(&["X", "Y", "X"]);
        let cities = unique_cities(trip.days());
        assert_eq!(names(&cities), ["X", "Y"]);
        assert_eq!(cities[0].coords, X);
    }

    #[test]
    fn city_takes_color_from_first_mention() {
        let mut trip_days = itinerary(&["X", "Y"]).days().to_vec();
        let mut revisit = trip_days[0].clone();
        revisit.color = ThemeColor::from("slate");
        trip_days.push(revisit);
        let cities = unique_cities(&trip_days);
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].color, ThemeColor::from("rose"));
    }

    #[test]
    fn no_waypoints_on_first_day() {
        let trip = itinerary(&["X", "Y"]);
        assert!(waypoints(trip.days(), 0).is_empty());
    }

    #[test]
    fn waypoints_skip_same_city_stays() {
        let trip = itinerary(&["X", "X", "Y"]);
        assert!(waypoints(trip.days(), 1).is_empty());
        assert_eq!(waypoints(trip.days(), 2).as_slice(), &[X, Y]);
    }

    #[test]
    fn waypoints_use_nearest_distinct_predecessor() {
        let trip = itinerary(&["X", "Y", "Y", "Z", "Z"]);
        assert_eq!(waypoints(trip.days(), 3).as_slice(), &[Y, Z]);
        assert_eq!(waypoints(trip.days(), 4).as_slice(), &[Y, Z]);
    }

    #[test]
    fn waypoints_out_of_range_are_empty() {
        let trip = itinerary(&["X", "Y"]);
        assert!(waypoints(trip.days(), 9).is_empty());
    }

    #[test]
    fn active_outranks_highlighted() {
        assert_eq!(emphasis_for("X", "X", Some("X")), Emphasis::Active);
        assert_eq!(emphasis_for("Y", "X", Some("Y")), Emphasis::Highlighted);
        assert_eq!(emphasis_for("Y", "X", None), Emphasis::Default);
        assert_eq!(emphasis_for("Y", "X", Some("Z")), Emphasis::Default);
    }

    #[test]
    fn emphasis_scales_and_stacks_in_order() {
        assert!(Emphasis::Active.scale() > Emphasis::Highlighted.scale());
        assert!(Emphasis::Highlighted.scale() > Emphasis::Default.scale());
        assert!(Emphasis::Active.z_offset() > Emphasis::Highlighted.z_offset());
        assert_eq!(Emphasis::Default.z_offset(), 0);
    }

    #[test]
    fn derive_is_idempotent() {
        let trip = itinerary(&["X", "X", "Y", "Z"]);
        let first = ViewModel::derive(&trip, 2, Some("Z"));
        let second = ViewModel::derive(&trip, 2, Some("Z"));
        assert_eq!(first, second);
        assert!(first.has_route());
        assert_eq!(first.active_city(), "Y");
    }

    #[test]
    fn derive_clamps_index() {
        let trip = itinerary(&["X", "Y"]);
        let vm = ViewModel::derive(&trip, 40, None);
        assert_eq!(vm.day_index, 1);
        assert_eq!(vm.active_city(), "Y");
    }

    #[test]
    fn marker_states_follow_city_order() {
        let trip = itinerary(&["X", "Y", "Z"]);
        let vm = ViewModel::derive(&trip, 1, Some("Z"));
        let states: Vec<_> = vm
            .marker_states()
            .map(|(city, emphasis)| (city.name.as_str(), emphasis))
            .collect();
        assert_eq!(
            states,
            [
                ("X", Emphasis::Default),
                ("Y", Emphasis::Active),
                ("Z", Emphasis::Highlighted)
            ]
        );
    }
}
