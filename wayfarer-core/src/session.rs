//! Mutable view state over an immutable itinerary
use std::sync::Arc;

use serde::Serialize;

use crate::data::{Itinerary, ItineraryDay};
use crate::selection::DaySelection;
use crate::view_model::ViewModel;

/// The only mutable state of a viewing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub current_day_index: usize,
    pub highlighted_city: Option<String>,
}

/// Day selection plus hover, bound to one itinerary.
///
/// Mutations go through [`ViewerSession::go_to`], [`ViewerSession::next`],
/// [`ViewerSession::prev`] and [`ViewerSession::hover`]; each reports whether
/// anything changed so callers can skip redundant recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSession {
    itinerary: Arc<Itinerary>,
    selection: DaySelection,
    hovered: Option<String>,
}

impl ViewerSession {
    #[must_use]
    pub fn new(itinerary: Arc<Itinerary>) -> Self {
        let selection = DaySelection::new(itinerary.day_count());
        Self {
            itinerary,
            selection,
            hovered: None,
        }
    }

    #[must_use]
    pub fn itinerary(&self) -> &Arc<Itinerary> {
        &self.itinerary
    }

    #[must_use]
    pub const fn selection(&self) -> DaySelection {
        self.selection
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.selection.index()
    }

    #[must_use]
    pub fn hovered_city(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    #[must_use]
    pub fn active_day(&self) -> &ItineraryDay {
        &self.itinerary.days()[self.selection.index()]
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        ViewState {
            current_day_index: self.selection.index(),
            highlighted_city: self.hovered.clone(),
        }
    }

    pub fn go_to(&mut self, index: isize) -> bool {
        self.selection.go_to(index)
    }

    pub fn next(&mut self) -> bool {
        self.selection.next()
    }

    pub fn prev(&mut self) -> bool {
        self.selection.prev()
    }

    /// Set or clear the hovered city name.
    pub fn hover(&mut self, city: Option<&str>) -> bool {
        if self.hovered.as_deref() == city {
            return false;
        }
        self.hovered = city.map(str::to_string);
        true
    }

    #[must_use]
    pub fn view_model(&self) -> ViewModel {
        ViewModel::derive(&self.itinerary, self.selection.index(), self.hovered.as_deref())
    }
}

impl From<Itinerary> for ViewerSession {
    fn from(itinerary: Itinerary) -> Self {
        Self::new(Arc::new(itinerary))
    }
}
