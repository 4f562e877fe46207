use wayfarer_core::DecorationPhase;

use super::ScenarioRun;
use crate::checks::CheckResult;

/// Finds two consecutive theme changes and fires them inside one fade.
pub fn run(run: &mut ScenarioRun) -> CheckResult {
    let fade = u64::from(run.viewer.decoration().fade_ms());
    let mut stale = Vec::new();

    for _ in 1..run.day_count() {
        let outgoing = run.viewer.decoration().current().clone();
        run.advance(fade / 4);
        let update = run.viewer.on_next(run.now_ms);
        let Some(transition) = update.transition else {
            if run.viewer.decoration().current().color != outgoing.color {
                return Err("theme color changed without a transition".into());
            }
            continue;
        };
        if run.viewer.decoration().previous() != Some(&outgoing) {
            return Err(format!(
                "fade starts from {:?}, expected {}",
                run.viewer.decoration().previous().map(|t| t.color.to_string()),
                outgoing.color
            ));
        }
        if transition.duration_ms != run.viewer.decoration().fade_ms() {
            return Err("transition duration differs from configured fade".into());
        }
        for ticket in stale.drain(..) {
            if run.viewer.on_transition_elapsed(ticket) {
                return Err(format!("stale ticket {ticket:?} completed the fade"));
            }
        }
        stale.push(transition.ticket);
        run.check("mid-fade")?;
    }

    run.advance(fade);
    if run.viewer.decoration().phase() != DecorationPhase::Stable {
        return Err("fade still running past its deadline".into());
    }
    for ticket in stale {
        if run.viewer.on_transition_elapsed(ticket) {
            return Err("completed fade accepted its ticket twice".into());
        }
    }
    run.check("settled")
}
