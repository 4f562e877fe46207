//! Viewer tuning knobs loaded from the bundled `viewer.json`
use serde::{Deserialize, Serialize};

const DEFAULT_VIEWER_DATA: &str = include_str!("../../wayfarer-web/static/assets/data/viewer.json");

/// Shortest and longest crossfade the decoration layer accepts.
pub const FADE_RANGE_MS: (u32, u32) = (500, 1000);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Camera never flies in closer than this zoom level floor.
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f64,
    #[serde(default = "default_fly_duration_ms")]
    pub fly_duration_ms: u32,
    /// Fraction of the marker bounds added on every side when fitting.
    #[serde(default = "default_fit_bounds_padding")]
    pub fit_bounds_padding: f64,
    #[serde(default = "default_tint_opacity")]
    pub tint_opacity: f64,
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u32,
    #[serde(default = "default_route_dash")]
    pub route_dash: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_zoom: default_min_zoom(),
            fly_duration_ms: default_fly_duration_ms(),
            fit_bounds_padding: default_fit_bounds_padding(),
            tint_opacity: default_tint_opacity(),
            fade_ms: default_fade_ms(),
            route_dash: default_route_dash(),
        }
    }
}

impl ViewerConfig {
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json_or_default(DEFAULT_VIEWER_DATA)
    }

    /// Parse viewer tuning, falling back to the defaults on malformed input.
    #[must_use]
    pub fn from_json_or_default(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|err| {
            log::warn!("viewer config: {err}; using defaults");
            Self::default()
        })
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }

    /// Crossfade duration clamped into [`FADE_RANGE_MS`].
    #[must_use]
    pub fn fade_duration_ms(&self) -> u32 {
        self.fade_ms.clamp(FADE_RANGE_MS.0, FADE_RANGE_MS.1)
    }
}

const fn default_min_zoom() -> f64 {
    10.0
}

const fn default_fly_duration_ms() -> u32 {
    1500
}

const fn default_fit_bounds_padding() -> f64 {
    0.5
}

const fn default_tint_opacity() -> f64 {
    0.15
}

const fn default_fade_ms() -> u32 {
    700
}

fn default_route_dash() -> String {
    "10, 10".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        assert_eq!(ViewerConfig::from_json_or_default("{ nope"), ViewerConfig::default());
        let partial = ViewerConfig::from_json_or_default(r#"{"min_zoom": 12}"#);
        assert!((partial.min_zoom - 12.0).abs() < f64::EPSILON);
        assert_eq!(partial.fly_duration_ms, 1500);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let cfg: ViewerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ViewerConfig::default());
        assert!((cfg.min_zoom - 10.0).abs() < f64::EPSILON);
        assert_eq!(cfg.fly_duration_ms, 1500);
        assert_eq!(cfg.route_dash, "10, 10");
    }

    #[test]
    fn fade_duration_is_clamped() {
        let mut cfg = ViewerConfig::default();
        cfg.fade_ms = 50;
        assert_eq!(cfg.fade_duration_ms(), 500);
        cfg.fade_ms = 5_000;
        assert_eq!(cfg.fade_duration_ms(), 1000);
        cfg.fade_ms = 800;
        assert_eq!(cfg.fade_duration_ms(), 800);
    }

    #[test]
    fn bundled_config_parses() {
        let raw: Result<ViewerConfig, _> = serde_json::from_str(DEFAULT_VIEWER_DATA);
        assert!(raw.is_ok());
        assert_eq!(ViewerConfig::default_config(), raw.unwrap());
    }
}
