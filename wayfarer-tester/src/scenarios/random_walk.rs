use rand::Rng;

use super::ScenarioRun;
use crate::checks::CheckResult;

const STEPS: usize = 200;

pub fn run(run: &mut ScenarioRun) -> CheckResult {
    let names: Vec<String> = run
        .viewer
        .view_model()
        .cities
        .iter()
        .map(|c| c.name.clone())
        .collect();
    let span = isize::try_from(run.day_count()).unwrap_or(isize::MAX);
    let mut pending = Vec::new();

    for step in 0..STEPS {
        let label = match run.rng.gen_range(0..7) {
            0 | 1 => {
                let update = run.viewer.on_next(run.now_ms);
                pending.extend(update.transition);
                "next"
            }
            2 => {
                let update = run.viewer.on_prev(run.now_ms);
                pending.extend(update.transition);
                "prev"
            }
            3 => {
                let index = run.rng.gen_range(-1..=span);
                let update = run.viewer.on_select_day(index, run.now_ms);
                pending.extend(update.transition);
                "select"
            }
            4 => {
                let pick = run.rng.gen_range(0..=names.len());
                run.viewer.on_hover_city(names.get(pick).map(String::as_str));
                "hover"
            }
            5 => {
                // Timers may fire late and out of order.
                if !pending.is_empty() {
                    let at = run.rng.gen_range(0..pending.len());
                    let transition = pending.swap_remove(at);
                    run.viewer.on_transition_elapsed(transition.ticket);
                }
                "timer"
            }
            _ => {
                let ms = run.rng.gen_range(0..1_200);
                run.advance(ms);
                "clock"
            }
        };
        run.check(&format!("step {step} ({label})"))?;
    }
    Ok(())
}
