use wayfarer_core::recording::MapCall;

use super::ScenarioRun;
use crate::checks::CheckResult;

pub fn run(run: &mut ScenarioRun) -> CheckResult {
    run.check("initial")?;
    if run.viewer.on_prev(run.now_ms).changed {
        return Err("prev on the first day moved the selection".into());
    }

    let last = run.day_count() - 1;
    for expected in 1..=last {
        run.advance(250);
        let update = run.viewer.on_next(run.now_ms);
        if !update.changed || run.viewer.session().current_index() != expected {
            return Err(format!("next did not reach day index {expected}"));
        }
        run.check(&format!("forward to {expected}"))?;
        expect_camera_on_active_day(run)?;
    }
    if run.viewer.on_next(run.now_ms).changed {
        return Err("next on the last day moved the selection".into());
    }

    for expected in (0..last).rev() {
        run.advance(250);
        run.viewer.on_prev(run.now_ms);
        if run.viewer.session().current_index() != expected {
            return Err(format!("prev did not reach day index {expected}"));
        }
        run.check(&format!("back to {expected}"))?;
    }
    Ok(())
}

/// The latest camera request targets the active day whenever it moved.
fn expect_camera_on_active_day(run: &ScenarioRun) -> CheckResult {
    let target = run.viewer.session().active_day().coords;
    let last_fly = run
        .viewer
        .map()
        .renderer()
        .calls()
        .iter()
        .rev()
        .find_map(|call| match call {
            MapCall::FlyTo { coords, .. } => Some(*coords),
            _ => None,
        });
    match last_fly {
        Some(coords) if coords == target => Ok(()),
        Some(coords) => Err(format!("camera at {coords:?}, day is at {target:?}")),
        None => Err("camera never moved".into()),
    }
}
