use rand::Rng;

use super::ScenarioRun;
use crate::checks::CheckResult;

const JUMPS: usize = 40;

pub fn run(run: &mut ScenarioRun) -> CheckResult {
    let count = run.day_count();
    let span = isize::try_from(count).unwrap_or(isize::MAX);
    for jump in 0..JUMPS {
        let request = run.rng.gen_range(-span * 2..span * 3);
        run.advance(100);
        run.viewer.on_select_day(request, run.now_ms);
        let expected = usize::try_from(request.max(0)).unwrap_or(0).min(count - 1);
        let actual = run.viewer.session().current_index();
        if actual != expected {
            return Err(format!(
                "jump {jump}: go_to({request}) landed on {actual}, expected {expected}"
            ));
        }
        run.check(&format!("jump {jump} to {request}"))?;

        let before = run.viewer.view_model();
        if run.viewer.on_select_day(request, run.now_ms).changed {
            return Err(format!("re-selecting {request} reported a change"));
        }
        if run.viewer.view_model() != before {
            return Err(format!("re-selecting {request} changed the view model"));
        }
    }
    Ok(())
}
