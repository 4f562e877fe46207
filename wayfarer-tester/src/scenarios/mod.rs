//! Scenario catalog
//!
//! A scenario drives one [`ScenarioRun`] through a sequence of presentation
//! events, checking invariants along the way.
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wayfarer_core::recording::RecordingRenderer;
use wayfarer_core::{Itinerary, Viewer, ViewerConfig};

use crate::checks::{CheckResult, check_all};

mod clamp;
mod crossfade;
mod hover;
mod random_walk;
mod walk;

/// Simulated viewer plus the clock and randomness a scenario may use.
pub struct ScenarioRun {
    pub viewer: Viewer<RecordingRenderer>,
    pub rng: ChaCha8Rng,
    pub now_ms: u64,
}

impl ScenarioRun {
    pub fn new(itinerary: Arc<Itinerary>, config: ViewerConfig, seed: u64) -> Self {
        let mut viewer = Viewer::new(itinerary, RecordingRenderer::ready(), config);
        viewer.refresh();
        Self {
            viewer,
            rng: ChaCha8Rng::seed_from_u64(seed),
            now_ms: 0,
        }
    }

    /// Move the simulated clock forward and let the decoration catch up.
    pub fn advance(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
        self.viewer.tick(self.now_ms);
    }

    pub fn day_count(&self) -> usize {
        self.viewer.session().itinerary().day_count()
    }

    /// Run every invariant, tagging a failure with `step`.
    pub fn check(&self, step: &str) -> CheckResult {
        check_all(&self.viewer).map_err(|err| format!("{step}: {err}"))
    }
}

pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    run: fn(&mut ScenarioRun) -> CheckResult,
}

impl Scenario {
    pub fn run(&self, run: &mut ScenarioRun) -> CheckResult {
        (self.run)(run)
    }
}

const CATALOG: &[Scenario] = &[
    Scenario {
        key: "walk",
        description: "Step forward through every day, then back to the first",
        run: walk::run,
    },
    Scenario {
        key: "clamp",
        description: "Jump to random in- and out-of-range day indices",
        run: clamp::run,
    },
    Scenario {
        key: "hover",
        description: "Hover every city on every day and check marker emphasis",
        run: hover::run,
    },
    Scenario {
        key: "crossfade",
        description: "Change days faster than the fade and check stale timers are ignored",
        run: crossfade::run,
    },
    Scenario {
        key: "random-walk",
        description: "Seeded random mix of navigation, hover and clock events",
        run: random_walk::run,
    },
];

pub fn get_scenario(key: &str) -> Option<&'static Scenario> {
    CATALOG.iter().find(|s| s.key == key)
}

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.description))
}

pub fn all_keys() -> Vec<String> {
    CATALOG.iter().map(|s| s.key.to_string()).collect()
}
