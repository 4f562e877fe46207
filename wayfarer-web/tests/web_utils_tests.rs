use wayfarer_web::a11y::{day_status, go_to_day_label};
use wayfarer_web::app::{animation_css, header_text_class, page_background_class};
use wayfarer_web::components::pattern::{PatternWeight, tile_path};
use wayfarer_web::itinerary::{PatternKind, Theme, viewer_config};
use wayfarer_web::paths::{asset_path, image_url};

#[test]
fn image_urls_resolve_against_asset_base() {
    assert!(image_url("static/img/jaipur.jpg").ends_with("/static/img/jaipur.jpg"));
    assert_eq!(
        image_url("https://example.org/fort.jpg"),
        "https://example.org/fort.jpg"
    );
    assert!(asset_path("/static/assets/data/itinerary.json").ends_with("static/assets/data/itinerary.json"));
}

#[test]
fn status_and_labels_are_human_numbered() {
    assert_eq!(go_to_day_label(9), "Go to day 10");
    assert!(day_status(10, 10, "Delhi", "Home").starts_with("Day 10 of 10"));
}

#[test]
fn bundled_viewer_config_is_in_range() {
    let config = viewer_config();
    let fade = config.fade_duration_ms();
    assert!((500..=1000).contains(&fade));
    assert!((config.tint_opacity - 0.15).abs() < f64::EPSILON);
}

#[test]
fn animations_cover_both_fade_directions() {
    let css = animation_css();
    assert!(css.contains("animate-fade-in") && css.contains("animate-fade-out"));
    assert!(css.contains("animate-card-enter"));
}

#[test]
fn page_tone_follows_theme() {
    assert_eq!(page_background_class(&Theme::pattern("white")), "bg-white");
    assert_eq!(header_text_class(&Theme::pattern("sky")), "text-white");
}

#[test]
fn every_pattern_has_a_tile() {
    let kinds = [
        PatternKind::Waves,
        PatternKind::Scales,
        PatternKind::Corners,
        PatternKind::Steps,
        PatternKind::Zigzag,
        PatternKind::Swell,
        PatternKind::Lines,
    ];
    for kind in kinds {
        assert!(!tile_path(kind, PatternWeight::Bold).is_empty(), "{kind:?}");
    }
}
