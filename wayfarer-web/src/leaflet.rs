//! Leaflet-backed [`MapRenderer`].
//!
//! Leaflet (and optionally the Leaflet Routing Machine plugin) is loaded from
//! a CDN by `index.html`, so the bindings below resolve the global `L` at call
//! time. Until it is present the renderer reports itself as not ready and the
//! adapter leaves it alone.
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom::{console_error, js_error_message};
use crate::itinerary::{Coords, GeoBounds, MapRenderer, MarkerIcon, RouteStyle};

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const PIN_PATH: &str = "M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z";

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container: &HtmlElement, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = getZoom)]
    fn get_zoom(this: &LeafletMap) -> f64;

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to(this: &LeafletMap, center: &JsValue, zoom: f64, options: &JsValue);

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue);

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMap, layer: &Layer);

    #[wasm_bindgen(method, js_name = removeControl)]
    fn remove_control(this: &LeafletMap, control: &Layer);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    /// Anything with `addTo(map)`: layers and controls alike.
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = zoom)]
    fn zoom_control(options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = polyline)]
    fn polyline(points: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group(layers: &js_sys::Array) -> Layer;

    #[wasm_bindgen(extends = Layer)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(point: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setZIndexOffset)]
    fn set_z_index_offset(this: &Marker, offset: i32);

    #[wasm_bindgen(method, js_name = getElement)]
    fn get_element(this: &Marker) -> Option<HtmlElement>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    scroll_wheel_zoom: bool,
    zoom_control: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions {
    max_zoom: u8,
    attribution: &'static str,
}

#[derive(Serialize)]
struct ControlOptions {
    position: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DivIconOptions {
    html: String,
    class_name: &'static str,
    icon_size: [u32; 2],
    icon_anchor: [u32; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PathOptions<'a> {
    color: &'a str,
    opacity: f64,
    weight: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    dash_array: Option<&'a str>,
}

impl<'a> From<&'a RouteStyle> for PathOptions<'a> {
    fn from(style: &'a RouteStyle) -> Self {
        Self {
            color: &style.color,
            opacity: style.opacity,
            weight: style.weight,
            dash_array: style.dash_array.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct FlyOptions {
    animate: bool,
    duration: f64,
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).unwrap_or_else(|err| {
        console_error(&format!("leaflet: cannot encode options: {err}"));
        JsValue::UNDEFINED
    })
}

fn lat_lng(coords: Coords) -> JsValue {
    to_js(&[coords.lat, coords.lng])
}

fn global(path: &[&str]) -> Option<JsValue> {
    let mut value: JsValue = js_sys::global().into();
    for key in path {
        value = js_sys::Reflect::get(&value, &JsValue::from_str(key)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
    }
    Some(value)
}

/// Whether the Leaflet global has been loaded.
#[must_use]
pub fn leaflet_available() -> bool {
    global(&["L", "map"]).is_some()
}

fn routing_control_factory() -> Option<js_sys::Function> {
    global(&["L", "Routing", "control"])?.dyn_into().ok()
}

/// Route overlay: a routed control when the routing plugin is loaded, else
/// straight polylines.
pub enum RouteLayer {
    Routed(Layer),
    Lines(Layer),
}

/// Leaflet map bound to a container element plus the tint overlay drawn
/// above it.
pub struct LeafletRenderer {
    container: HtmlElement,
    tint: Option<HtmlElement>,
    map: Option<LeafletMap>,
}

impl LeafletRenderer {
    #[must_use]
    pub const fn new(container: HtmlElement, tint: Option<HtmlElement>) -> Self {
        Self {
            container,
            tint,
            map: None,
        }
    }

    /// Create the Leaflet map if it does not exist yet and Leaflet is loaded.
    /// Returns whether a map is available afterwards.
    pub fn ensure_map(&mut self) -> bool {
        if self.map.is_some() {
            return true;
        }
        if !leaflet_available() {
            log::debug!("leaflet: global L not loaded yet");
            return false;
        }
        let options = to_js(&MapOptions {
            scroll_wheel_zoom: false,
            zoom_control: false,
        });
        let map = match create_map(&self.container, &options) {
            Ok(map) => map,
            Err(err) => {
                console_error(&format!("leaflet: map creation failed: {}", js_error_message(&err)));
                return false;
            }
        };
        zoom_control(&to_js(&ControlOptions {
            position: "topright",
        }))
        .add_to(&map);
        tile_layer(
            TILE_URL,
            &to_js(&TileOptions {
                max_zoom: 18,
                attribution: TILE_ATTRIBUTION,
            }),
        )
        .add_to(&map);
        self.map = Some(map);
        true
    }

    /// Tear the map down; the renderer is not ready afterwards.
    pub fn destroy(&mut self) {
        if let Some(map) = self.map.take() {
            map.remove();
        }
    }

    fn routed(
        map: &LeafletMap,
        factory: &js_sys::Function,
        points: &[Coords],
        styles: &[RouteStyle],
    ) -> Option<Layer> {
        let options = js_sys::Object::new();
        let waypoints: js_sys::Array = points.iter().map(|c| lat_lng(*c)).collect();
        let line_styles: js_sys::Array = styles
            .iter()
            .map(|style| to_js(&PathOptions::from(style)))
            .collect();
        let line_options = js_sys::Object::new();
        let entries: [(&str, JsValue); 5] = [
            ("waypoints", waypoints.into()),
            ("routeWhileDragging", JsValue::FALSE),
            ("show", JsValue::FALSE),
            ("createMarker", js_sys::Function::new_no_args("return null;").into()),
            ("lineOptions", line_options.clone().into()),
        ];
        js_sys::Reflect::set(&line_options, &"styles".into(), &line_styles).ok()?;
        for (key, value) in entries {
            js_sys::Reflect::set(&options, &key.into(), &value).ok()?;
        }
        match factory.call1(&JsValue::NULL, &options) {
            Ok(control) => Some(control.unchecked_into::<Layer>().add_to(map)),
            Err(err) => {
                console_error(&format!("leaflet: routing control failed: {}", js_error_message(&err)));
                None
            }
        }
    }
}

impl Drop for LeafletRenderer {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl MapRenderer for LeafletRenderer {
    type Marker = Marker;
    type Route = RouteLayer;

    fn is_ready(&self) -> bool {
        self.map.is_some()
    }

    fn create_marker(&mut self, coords: Coords, icon: &MarkerIcon) -> Option<Marker> {
        let map = self.map.as_ref()?;
        let html = format!(
            "<div style=\"color: {}\"><svg viewBox=\"0 0 24 24\" class=\"w-8 h-8 drop-shadow-lg transition-transform duration-200\" \
             style=\"transform-origin: 50% 100%\"><path fill=\"currentColor\" d=\"{PIN_PATH}\"></path></svg></div>",
            icon.color_hex
        );
        let div = div_icon(&to_js(&DivIconOptions {
            html,
            class_name: "",
            icon_size: [32, 32],
            icon_anchor: [16, 32],
        }));
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"icon".into(), &div).ok()?;
        js_sys::Reflect::set(&options, &"title".into(), &JsValue::from_str(&icon.label)).ok()?;
        js_sys::Reflect::set(&options, &"alt".into(), &JsValue::from_str(&icon.label)).ok()?;
        let marker = marker(&lat_lng(coords), &options);
        marker.add_to(map);
        Some(marker)
    }

    fn set_marker_emphasis(&mut self, marker: &Marker, scale: f64, z_offset: i32) {
        marker.set_z_index_offset(z_offset);
        // Leaflet positions the icon element with its own transform; scale
        // the pin inside it instead.
        let pin = marker
            .get_element()
            .and_then(|el| el.query_selector("svg").ok().flatten());
        if let Some(pin) = pin {
            let style = format!("transform-origin: 50% 100%; transform: scale({scale})");
            if let Err(err) = pin.set_attribute("style", &style) {
                log::warn!("leaflet: cannot restyle marker: {}", js_error_message(&err));
            }
        }
    }

    fn draw_route(&mut self, points: &[Coords], styles: &[RouteStyle]) -> Option<RouteLayer> {
        let map = self.map.as_ref()?;
        if points.len() < 2 {
            return None;
        }
        if let Some(factory) = routing_control_factory() {
            return Self::routed(map, &factory, points, styles).map(RouteLayer::Routed);
        }
        let path: js_sys::Array = points.iter().map(|c| lat_lng(*c)).collect();
        let lines: js_sys::Array = styles
            .iter()
            .map(|style| JsValue::from(polyline(&path, &to_js(&PathOptions::from(style)))))
            .collect();
        Some(RouteLayer::Lines(layer_group(&lines).add_to(map)))
    }

    fn remove_route(&mut self, route: RouteLayer) {
        let Some(map) = self.map.as_ref() else {
            return;
        };
        match route {
            RouteLayer::Routed(control) => map.remove_control(&control),
            RouteLayer::Lines(layer) => map.remove_layer(&layer),
        }
    }

    fn fly_to(&mut self, coords: Coords, min_zoom: f64, duration_ms: u32) {
        let Some(map) = self.map.as_ref() else {
            return;
        };
        // getZoom() is NaN before the first view is set; max() then picks min_zoom.
        let zoom = map.get_zoom().max(min_zoom);
        let options = to_js(&FlyOptions {
            animate: true,
            duration: f64::from(duration_ms) / 1000.0,
        });
        map.fly_to(&lat_lng(coords), zoom, &options);
    }

    fn fit_bounds(&mut self, bounds: GeoBounds) {
        if let Some(map) = self.map.as_ref() {
            let corners = to_js(&[[bounds.south, bounds.west], [bounds.north, bounds.east]]);
            map.fit_bounds(&corners);
        }
    }

    fn set_tint(&mut self, color_hex: &str, opacity: f64) {
        let Some(tint) = self.tint.as_ref() else {
            return;
        };
        let style = tint.style();
        let opacity = opacity.to_string();
        for (property, value) in [("background-color", color_hex), ("opacity", opacity.as_str())] {
            if let Err(err) = style.set_property(property, value) {
                log::warn!("leaflet: cannot set tint {property}: {}", js_error_message(&err));
            }
        }
    }
}
