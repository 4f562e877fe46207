//! In-memory [`MapRenderer`] that records every call it receives.
//!
//! Used by the unit tests and by the headless tester to observe what the
//! adapter would have asked a real map to do.
use serde::Serialize;

use crate::data::Coords;
use crate::map::{GeoBounds, MapRenderer, MarkerIcon, RouteStyle};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MapCall {
    CreateMarker { id: usize, city: String, coords: Coords },
    SetEmphasis { marker: usize, scale: f64, z_offset: i32 },
    DrawRoute { id: usize, points: Vec<Coords>, layers: usize },
    RemoveRoute(usize),
    FlyTo { coords: Coords, min_zoom: f64, duration_ms: u32 },
    FitBounds(GeoBounds),
    SetTint { color_hex: String, opacity: f64 },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    ready: bool,
    next_marker: usize,
    next_route: usize,
    live_routes: Vec<usize>,
    calls: Vec<MapCall>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn ready() -> Self {
        Self {
            ready: true,
            ..Self::default()
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    #[must_use]
    pub fn calls(&self) -> &[MapCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&MapCall) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(call)).count()
    }

    /// Routes drawn and not yet removed.
    #[must_use]
    pub fn live_routes(&self) -> &[usize] {
        &self.live_routes
    }
}

impl MapRenderer for RecordingRenderer {
    type Marker = usize;
    type Route = usize;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn create_marker(&mut self, coords: Coords, icon: &MarkerIcon) -> Option<usize> {
        let id = self.next_marker;
        self.next_marker += 1;
        self.calls.push(MapCall::CreateMarker {
            id,
            city: icon.label.clone(),
            coords,
        });
        Some(id)
    }

    fn set_marker_emphasis(&mut self, marker: &usize, scale: f64, z_offset: i32) {
        self.calls.push(MapCall::SetEmphasis {
            marker: *marker,
            scale,
            z_offset,
        });
    }

    fn draw_route(&mut self, points: &[Coords], styles: &[RouteStyle]) -> Option<usize> {
        let id = self.next_route;
        self.next_route += 1;
        self.live_routes.push(id);
        self.calls.push(MapCall::DrawRoute {
            id,
            points: points.to_vec(),
            layers: styles.len(),
        });
        Some(id)
    }

    fn remove_route(&mut self, route: usize) {
        self.live_routes.retain(|id| *id != route);
        self.calls.push(MapCall::RemoveRoute(route));
    }

    fn fly_to(&mut self, coords: Coords, min_zoom: f64, duration_ms: u32) {
        self.calls.push(MapCall::FlyTo {
            coords,
            min_zoom,
            duration_ms,
        });
    }

    fn fit_bounds(&mut self, bounds: GeoBounds) {
        self.calls.push(MapCall::FitBounds(bounds));
    }

    fn set_tint(&mut self, color_hex: &str, opacity: f64) {
        self.calls.push(MapCall::SetTint {
            color_hex: color_hex.to_string(),
            opacity,
        });
    }
}
