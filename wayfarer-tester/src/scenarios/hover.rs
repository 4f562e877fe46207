use wayfarer_core::Emphasis;

use super::ScenarioRun;
use crate::checks::CheckResult;

pub fn run(run: &mut ScenarioRun) -> CheckResult {
    let names: Vec<String> = run
        .viewer
        .view_model()
        .cities
        .iter()
        .map(|c| c.name.clone())
        .collect();

    for day in 0..run.day_count() {
        run.viewer
            .on_select_day(isize::try_from(day).unwrap_or(isize::MAX), run.now_ms);
        for name in &names {
            let update = run.viewer.on_hover_city(Some(name.as_str()));
            if update.transition.is_some() {
                return Err(format!("hovering {name} started a crossfade"));
            }
            let vm = run.viewer.view_model();
            let expected = if *name == vm.active_city() {
                Emphasis::Active
            } else {
                Emphasis::Highlighted
            };
            if vm.emphasis(name) != expected {
                return Err(format!("day {day}: hovered {name} is {:?}", vm.emphasis(name)));
            }
            run.check(&format!("day {day} hover {name}"))?;
        }
        run.viewer.on_hover_city(None);
        let vm = run.viewer.view_model();
        if vm.marker_states().any(|(_, e)| e == Emphasis::Highlighted) {
            return Err(format!("day {day}: highlight survived hover end"));
        }
        run.check(&format!("day {day} hover cleared"))?;
    }
    Ok(())
}
