//! Map adapter: turns view models into calls on a rendering collaborator.
//!
//! The renderer owns tiles, gestures and animation. The adapter only decides
//! *what* must change between two view models and issues the matching calls:
//! markers are created once per city and afterwards only restyled, the route
//! overlay is torn down and rebuilt whenever its path or color changes, and
//! the camera is asked to fly whenever the active coordinates move.
use serde::Serialize;

use crate::config::ViewerConfig;
use crate::data::Coords;
use crate::theme::ThemeColor;
use crate::view_model::{Emphasis, ViewModel, Waypoints};

/// Pin appearance for a city marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerIcon {
    pub label: String,
    pub color_hex: &'static str,
}

/// One stroke of a layered route line. Layers are drawn in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStyle {
    pub color: String,
    pub opacity: f64,
    pub weight: u32,
    pub dash_array: Option<String>,
}

/// White casing under a dashed line in the day's color.
#[must_use]
pub fn route_styles(color: &ThemeColor, config: &ViewerConfig) -> [RouteStyle; 2] {
    [
        RouteStyle {
            color: "white".to_string(),
            opacity: 0.8,
            weight: 8,
            dash_array: None,
        },
        RouteStyle {
            color: color.map_hex().to_string(),
            opacity: 1.0,
            weight: 5,
            dash_array: Some(config.route_dash.clone()),
        },
    ]
}

/// Axis-aligned lat/lng box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Smallest box containing every valid point; `None` if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Coords>) -> Option<Self> {
        points
            .into_iter()
            .filter(|c| c.is_valid())
            .fold(None, |acc: Option<Self>, c| {
                Some(acc.map_or(
                    Self {
                        south: c.lat,
                        west: c.lng,
                        north: c.lat,
                        east: c.lng,
                    },
                    |b| Self {
                        south: b.south.min(c.lat),
                        west: b.west.min(c.lng),
                        north: b.north.max(c.lat),
                        east: b.east.max(c.lng),
                    },
                ))
            })
    }

    /// Grow each side by `ratio` of the box's extent.
    #[must_use]
    pub fn pad(self, ratio: f64) -> Self {
        let lat_buffer = (self.north - self.south).abs() * ratio;
        let lng_buffer = (self.east - self.west).abs() * ratio;
        Self {
            south: (self.south - lat_buffer).max(-90.0),
            west: (self.west - lng_buffer).max(-180.0),
            north: (self.north + lat_buffer).min(90.0),
            east: (self.east + lng_buffer).min(180.0),
        }
    }

    #[must_use]
    pub fn contains(&self, coords: Coords) -> bool {
        (self.south..=self.north).contains(&coords.lat)
            && (self.west..=self.east).contains(&coords.lng)
    }
}

/// Capabilities of the map rendering collaborator.
///
/// Implementations may be unavailable (not yet mounted); the adapter checks
/// [`MapRenderer::is_ready`] before every sync and does nothing until it
/// reports true.
pub trait MapRenderer {
    type Marker;
    type Route;

    fn is_ready(&self) -> bool;

    fn create_marker(&mut self, coords: Coords, icon: &MarkerIcon) -> Option<Self::Marker>;

    fn set_marker_emphasis(&mut self, marker: &Self::Marker, scale: f64, z_offset: i32);

    fn draw_route(&mut self, points: &[Coords], styles: &[RouteStyle]) -> Option<Self::Route>;

    fn remove_route(&mut self, route: Self::Route);

    /// Animate toward `coords`, ending no further out than `min_zoom`.
    fn fly_to(&mut self, coords: Coords, min_zoom: f64, duration_ms: u32);

    fn fit_bounds(&mut self, bounds: GeoBounds);

    fn set_tint(&mut self, color_hex: &str, opacity: f64);
}

/// What one [`MapAdapter::sync`] pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub renderer_ready: bool,
    pub markers_created: usize,
    pub markers_skipped: usize,
    pub emphasis_updates: usize,
    pub route_removed: bool,
    pub route_drawn: bool,
    pub camera_moved: bool,
    pub bounds_fitted: bool,
    pub tint_changed: bool,
}

impl SyncReport {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        let idle = Self {
            renderer_ready: self.renderer_ready,
            ..Self::default()
        };
        *self == idle
    }
}

struct PlacedMarker<M> {
    city: String,
    handle: M,
    applied: Option<Emphasis>,
}

#[derive(Debug, Clone, PartialEq)]
struct RouteKey {
    waypoints: Waypoints,
    color: ThemeColor,
}

/// Keeps a [`MapRenderer`] in step with successive view models.
pub struct MapAdapter<R: MapRenderer> {
    renderer: R,
    config: ViewerConfig,
    markers: Vec<PlacedMarker<R::Marker>>,
    attempted: Vec<String>,
    bounds_fitted: bool,
    route: Option<R::Route>,
    route_key: Option<RouteKey>,
    camera_day: Option<usize>,
    tint: Option<ThemeColor>,
}

impl<R: MapRenderer> MapAdapter<R> {
    pub fn new(renderer: R, config: ViewerConfig) -> Self {
        Self {
            renderer,
            config,
            markers: Vec::new(),
            attempted: Vec::new(),
            bounds_fitted: false,
            route: None,
            route_key: None,
            camera_day: None,
            tint: None,
        }
    }

    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub const fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn has_route(&self) -> bool {
        self.route.is_some()
    }

    /// Bring the map in line with `vm`.
    pub fn sync(&mut self, vm: &ViewModel) -> SyncReport {
        let mut report = SyncReport::default();
        if !self.renderer.is_ready() {
            log::debug!("map: renderer not ready, skipping sync for day {}", vm.day_index);
            return report;
        }
        report.renderer_ready = true;

        self.place_markers(vm, &mut report);
        self.apply_emphasis(vm, &mut report);
        self.sync_route(vm, &mut report);
        self.sync_camera(vm, &mut report);
        self.sync_tint(vm, &mut report);
        report
    }

    fn place_markers(&mut self, vm: &ViewModel, report: &mut SyncReport) {
        for city in &vm.cities {
            if self.attempted.iter().any(|name| *name == city.name) {
                continue;
            }
            self.attempted.push(city.name.clone());
            if !city.coords.is_valid() {
                log::warn!("map: skipping marker for {} with invalid coordinates", city.name);
                report.markers_skipped += 1;
                continue;
            }
            let icon = MarkerIcon {
                label: city.name.clone(),
                color_hex: city.color.map_hex(),
            };
            match self.renderer.create_marker(city.coords, &icon) {
                Some(handle) => {
                    self.markers.push(PlacedMarker {
                        city: city.name.clone(),
                        handle,
                        applied: None,
                    });
                    report.markers_created += 1;
                }
                None => {
                    log::warn!("map: renderer refused marker for {}", city.name);
                    report.markers_skipped += 1;
                }
            }
        }

        if !self.bounds_fitted
            && let Some(bounds) = GeoBounds::from_points(vm.cities.iter().map(|c| &c.coords))
        {
            self.renderer
                .fit_bounds(bounds.pad(self.config.fit_bounds_padding));
            self.bounds_fitted = true;
            report.bounds_fitted = true;
        }
    }

    fn apply_emphasis(&mut self, vm: &ViewModel, report: &mut SyncReport) {
        for marker in &mut self.markers {
            let emphasis = vm.emphasis(&marker.city);
            if marker.applied == Some(emphasis) {
                continue;
            }
            self.renderer
                .set_marker_emphasis(&marker.handle, emphasis.scale(), emphasis.z_offset());
            marker.applied = Some(emphasis);
            report.emphasis_updates += 1;
        }
    }

    fn sync_route(&mut self, vm: &ViewModel, report: &mut SyncReport) {
        let key = RouteKey {
            waypoints: vm.waypoints.clone(),
            color: vm.active_day.color.clone(),
        };
        if self.route_key.as_ref() == Some(&key) {
            return;
        }
        if let Some(route) = self.route.take() {
            self.renderer.remove_route(route);
            report.route_removed = true;
        }
        if key.waypoints.len() == 2 && key.waypoints.iter().all(Coords::is_valid) {
            let styles = route_styles(&key.color, &self.config);
            self.route = self.renderer.draw_route(&key.waypoints, &styles);
            report.route_drawn = self.route.is_some();
            log::debug!(
                "map: route drawn to {} ({})",
                vm.active_city(),
                if report.route_drawn { "ok" } else { "refused" }
            );
        }
        self.route_key = Some(key);
    }

    /// Fly on every day change, even between days in the same city, so a
    /// map the user panned away is re-centred. Hover-only syncs keep the day.
    fn sync_camera(&mut self, vm: &ViewModel, report: &mut SyncReport) {
        let target = vm.active_day.coords;
        if !target.is_valid() || self.camera_day == Some(vm.day_index) {
            return;
        }
        self.renderer
            .fly_to(target, self.config.min_zoom, self.config.fly_duration_ms);
        self.camera_day = Some(vm.day_index);
        report.camera_moved = true;
    }

    fn sync_tint(&mut self, vm: &ViewModel, report: &mut SyncReport) {
        let color = &vm.active_day.color;
        if self.tint.as_ref() == Some(color) {
            return;
        }
        self.renderer
            .set_tint(color.map_hex(), self.config.tint_opacity);
        self.tint = Some(color.clone());
        report.tint_changed = true;
    }
}
