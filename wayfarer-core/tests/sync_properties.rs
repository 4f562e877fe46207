use std::sync::Arc;

use wayfarer_core::recording::{MapCall, RecordingRenderer};
use wayfarer_core::{
    Activity, ActivityKind, Coords, DecorationPhase, Emphasis, Itinerary, ItineraryDay,
    ThemeColor, Viewer, ViewerConfig, ViewerSession,
};

fn day(number: u32, city: &str, color: &str, lat: f64, lng: f64) -> ItineraryDay {
    ItineraryDay {
        day: number,
        date: format!("{number} Dec"),
        title: format!("Day in {city}"),
        city: city.to_string(),
        color: ThemeColor::from(color),
        activities: vec![Activity {
            kind: ActivityKind::Stay,
            description: "Hotel".into(),
            time: None,
        }],
        coords: Coords::new(lat, lng),
        image: None,
    }
}

fn trip() -> Itinerary {
    Itinerary::new(
        "Loop",
        vec![
            day(1, "Delhi", "white", 28.61, 77.21),
            day(2, "Jaipur", "rose", 26.91, 75.79),
            day(3, "Jaipur", "rose", 26.91, 75.79),
            day(4, "Jodhpur", "sky", 26.24, 73.02),
            day(5, "Delhi", "slate", 28.61, 77.21),
        ],
    )
    .unwrap()
}

#[test]
fn go_to_always_lands_on_clamped_index() {
    let itinerary = Arc::new(trip());
    let last = itinerary.day_count() - 1;
    for request in -20_isize..20 {
        let mut session = ViewerSession::new(Arc::clone(&itinerary));
        session.go_to(request);
        let expected = usize::try_from(request.max(0)).unwrap().min(last);
        assert_eq!(session.current_index(), expected, "request {request}");
    }
}

#[test]
fn city_list_is_deduplicated_in_first_appearance_order() {
    let vm = ViewerSession::from(trip()).view_model();
    let names: Vec<_> = vm.cities.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Delhi", "Jaipur", "Jodhpur"]);
    assert_eq!(vm.cities[0].color, ThemeColor::from("white"));
}

#[test]
fn waypoints_follow_city_transitions_only() {
    let mut session = ViewerSession::from(trip());
    let mut routes = Vec::new();
    loop {
        routes.push(session.view_model().waypoints.len());
        if !session.next() {
            break;
        }
    }
    assert_eq!(routes, [0, 2, 2, 2, 2]);

    session.go_to(2);
    let vm = session.view_model();
    assert_eq!(vm.waypoints[0], Coords::new(28.61, 77.21));
    assert_eq!(vm.waypoints[1], Coords::new(26.91, 75.79));
}

#[test]
fn hovering_the_active_city_keeps_it_active() {
    let mut session = ViewerSession::from(trip());
    session.go_to(1);
    session.hover(Some("Jaipur"));
    let vm = session.view_model();
    assert_eq!(vm.emphasis("Jaipur"), Emphasis::Active);
    assert_eq!(vm.emphasis("Delhi"), Emphasis::Default);
}

#[test]
fn full_walk_creates_each_marker_once_and_never_leaks_routes() {
    let mut viewer = Viewer::new(
        Arc::new(trip()),
        RecordingRenderer::ready(),
        ViewerConfig::default(),
    );
    viewer.refresh();
    for step in 0..4_u64 {
        viewer.on_next(step * 50);
        assert!(viewer.map().renderer().live_routes().len() <= 1);
    }
    for step in 0..4_u64 {
        viewer.on_prev(1_000 + step * 50);
        assert!(viewer.map().renderer().live_routes().len() <= 1);
    }
    let creates = viewer
        .map()
        .renderer()
        .count(|c| matches!(c, MapCall::CreateMarker { .. }));
    assert_eq!(creates, 3);
    assert!(viewer.map().renderer().live_routes().is_empty());
}

#[test]
fn rapid_day_changes_restart_the_crossfade() {
    let mut viewer = Viewer::new(
        Arc::new(trip()),
        RecordingRenderer::ready(),
        ViewerConfig::default(),
    );
    let first = viewer.on_next(0).transition.unwrap();
    viewer.on_select_day(3, 100);
    assert_eq!(
        viewer.decoration().previous().map(|t| t.color.as_str()),
        Some("rose")
    );
    assert_eq!(viewer.decoration().current().color.as_str(), "sky");
    assert!(!viewer.on_transition_elapsed(first.ticket));
    assert_eq!(viewer.decoration().phase(), DecorationPhase::Transitioning);
    assert!(viewer.tick(100 + u64::from(viewer.decoration().fade_ms())));
    assert_eq!(viewer.decoration().phase(), DecorationPhase::Stable);
}
