//! Invariants checked after every simulated event.
//!
//! Each check returns a human readable failure instead of panicking so a
//! scenario can report every broken iteration.
use std::collections::HashMap;

use wayfarer_core::recording::{MapCall, RecordingRenderer};
use wayfarer_core::{
    DecorationPhase, Emphasis, MapRenderer, Theme, ViewModel, Viewer, unique_cities,
};

pub type CheckResult = Result<(), String>;

pub fn check_all(viewer: &Viewer<RecordingRenderer>) -> CheckResult {
    check_selection(viewer)?;
    check_derivation(viewer)?;
    check_markers(viewer)?;
    check_emphasis(viewer)?;
    check_route(viewer)?;
    check_tint(viewer)?;
    check_decoration(viewer)
}

pub fn check_selection(viewer: &Viewer<RecordingRenderer>) -> CheckResult {
    let session = viewer.session();
    let count = session.itinerary().day_count();
    if session.current_index() >= count {
        return Err(format!(
            "day index {} out of range for {count} days",
            session.current_index()
        ));
    }
    Ok(())
}

/// The view model is a pure function of the view state.
pub fn check_derivation(viewer: &Viewer<RecordingRenderer>) -> CheckResult {
    let vm = viewer.view_model();
    if vm != viewer.view_model() {
        return Err("view model differs between two derivations".into());
    }
    let expected = unique_cities(viewer.session().itinerary().days());
    if vm.cities != expected {
        return Err(format!(
            "city list {:?} differs from first-appearance order",
            names(&vm)
        ));
    }
    match vm.waypoints.as_slice() {
        [] => Ok(()),
        [from, to] if *to == vm.active_day.coords && *from != *to => Ok(()),
        [from, to] if *to == vm.active_day.coords => Err(format!(
            "route for day {} starts and ends at {from:?}",
            vm.active_day.day
        )),
        other => Err(format!(
            "day {} has malformed waypoints {other:?}",
            vm.active_day.day
        )),
    }
}

/// One marker per unique city with valid coordinates, never recreated.
pub fn check_markers(viewer: &Viewer<RecordingRenderer>) -> CheckResult {
    let renderer = viewer.map().renderer();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for call in renderer.calls() {
        if let MapCall::CreateMarker { city, .. } = call {
            *seen.entry(city.as_str()).or_default() += 1;
        }
    }
    if let Some((city, times)) = seen.iter().find(|(_, times)| **times > 1) {
        return Err(format!("marker for {city} created {times} times"));
    }
    if synced(renderer) {
        let expected = viewer
            .view_model()
            .cities
            .iter()
            .filter(|c| c.coords.is_valid())
            .count();
        if seen.len() != expected {
            return Err(format!("{} markers placed, expected {expected}", seen.len()));
        }
    }
    Ok(())
}

/// The last emphasis sent for each marker matches the view model.
pub fn check_emphasis(viewer: &Viewer<RecordingRenderer>) -> CheckResult {
    let vm = viewer.view_model();
    let mut cities: HashMap<usize, &str> = HashMap::new();
    let mut applied: HashMap<usize, (f64, i32)> = HashMap::new();
    for call in viewer.map().renderer().calls() {
        match call {
            MapCall::CreateMarker { id, city, .. } => {
                cities.insert(*id, city.as_str());
            }
            MapCall::SetEmphasis {
                marker,
                scale,
                z_offset,
            } => {
                applied.insert(*marker, (*scale, *z_offset));
            }
            _ => {}
        }
    }
    for (id, city) in cities {
        let expected = vm.emphasis(city);
        let Some(&(scale, z_offset)) = applied.get(&id) else {
            return Err(format!("marker for {city} never styled"));
        };
        if (scale - expected.scale()).abs() > f64::EPSILON || z_offset != expected.z_offset() {
            return Err(format!(
                "marker for {city} shows scale {scale} z {z_offset}, expected {expected:?}"
            ));
        }
        if city == vm.active_city() && expected != Emphasis::Active {
            return Err(format!("active city {city} is not emphasised as active"));
        }
    }
    Ok(())
}

/// At most one route is live, and only when the day has waypoints.
pub fn check_route(viewer: &Viewer<RecordingRenderer>) -> CheckResult {
    let live = viewer.map().renderer().live_routes().len();
    if live > 1 {
        return Err(format!("{live} routes on the map at once"));
    }
    if !synced(viewer.map().renderer()) {
        return Ok(());
    }
    let vm = viewer.view_model();
    let wants_route = vm.waypoints.len() == 2 && vm.waypoints.iter().all(|c| c.is_valid());
    if wants_route != (live == 1) {
        return Err(format!(
            "day {} in {}: route live = {}, waypoints = {}",
            vm.active_day.day,
            vm.active_city(),
            live == 1,
            vm.waypoints.len()
        ));
    }
    Ok(())
}

/// The tint carries the active day's color at the configured opacity, and is
/// only re-sent when the color changes.
pub fn check_tint(viewer: &Viewer<RecordingRenderer>) -> CheckResult {
    let renderer = viewer.map().renderer();
    if !synced(renderer) {
        return Ok(());
    }
    let tints: Vec<(&str, f64)> = renderer
        .calls()
        .iter()
        .filter_map(|call| match call {
            MapCall::SetTint { color_hex, opacity } => Some((color_hex.as_str(), *opacity)),
            _ => None,
        })
        .collect();
    if let Some(pair) = tints.windows(2).find(|pair| pair[0].0 == pair[1].0) {
        return Err(format!("tint {} sent twice in a row", pair[0].0));
    }
    let expected = viewer.session().active_day().color.map_hex();
    let opacity = viewer.map().config().tint_opacity;
    match tints.last() {
        Some(&(color, applied)) if color == expected && (applied - opacity).abs() < f64::EPSILON => {
            Ok(())
        }
        Some(&(color, applied)) => Err(format!(
            "tint is {color} at {applied}, expected {expected} at {opacity}"
        )),
        None => Err("synced map never received a tint".into()),
    }
}

/// The incoming theme is always the active day's; a fade never pairs two
/// themes of the same color.
pub fn check_decoration(viewer: &Viewer<RecordingRenderer>) -> CheckResult {
    let decoration = viewer.decoration();
    let expected = Theme::of_day(viewer.session().active_day());
    if *decoration.current() != expected {
        return Err(format!(
            "decoration shows {} while day is {}",
            decoration.current().color,
            expected.color
        ));
    }
    match (decoration.phase(), decoration.previous()) {
        (DecorationPhase::Stable, None) => Ok(()),
        (DecorationPhase::Transitioning, Some(previous)) if previous.color != expected.color => Ok(()),
        (DecorationPhase::Transitioning, Some(_)) => Err("fade between same-color themes".into()),
        (phase, previous) => Err(format!(
            "inconsistent decoration: {phase:?} with previous {previous:?}"
        )),
    }
}

fn names(vm: &ViewModel) -> Vec<&str> {
    vm.cities.iter().map(|c| c.name.as_str()).collect()
}

/// Marker and route counts are only meaningful once a ready sync has run.
fn synced(renderer: &RecordingRenderer) -> bool {
    renderer.is_ready() && !renderer.calls().is_empty()
}
