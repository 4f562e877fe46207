use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::Colorize;
use serde::Serialize;
use wayfarer_core::{Itinerary, ViewerConfig};

use crate::scenarios::{Scenario, ScenarioRun};

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

/// Runs scenarios against fresh simulated viewers.
pub struct ViewerTester {
    itinerary: Arc<Itinerary>,
    config: ViewerConfig,
    verbose: bool,
}

impl ViewerTester {
    pub fn new(itinerary: Arc<Itinerary>, config: ViewerConfig, verbose: bool) -> Self {
        Self {
            itinerary,
            config,
            verbose,
        }
    }

    pub fn run_scenario(
        &self,
        scenario: &Scenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.key.bright_white()
                    );
                }
                self.run_single(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single(&self, scenario: &Scenario, seed: u64, iterations: usize) -> ScenarioResult {
        let mut failures = Vec::new();
        let mut durations = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let start = Instant::now();
            let mut run = ScenarioRun::new(
                Arc::clone(&self.itinerary),
                self.config.clone(),
                iteration_seed,
            );
            let outcome = scenario.run(&mut run);
            durations.push(start.elapsed());

            if let Err(err) = outcome {
                log::debug!("{} seed {iteration_seed} failed: {err}", scenario.key);
                failures.push(format!(
                    "Iteration {} (seed {iteration_seed}, {} map calls): {err}",
                    i + 1,
                    run.viewer.map().renderer().calls().len()
                ));
            } else if self.verbose {
                println!("  ✅ Iteration {} passed", i + 1);
            }
        }

        let average_duration = if durations.is_empty() {
            Duration::ZERO
        } else {
            durations.iter().sum::<Duration>() / u32::try_from(durations.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.key.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: iterations - failures.len(),
            failures,
            average_duration,
        }
    }
}

mod duration_serde {
    use serde::{Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::get_scenario;

    fn tester() -> ViewerTester {
        ViewerTester::new(
            Arc::new(Itinerary::load_from_static().unwrap()),
            ViewerConfig::default(),
            false,
        )
    }

    #[test]
    fn one_result_per_seed() {
        let scenario = get_scenario("walk").unwrap();
        let results = tester().run_scenario(scenario, &[1, 2, 3], 2);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.passed && r.successful_iterations == 2));
    }

    #[test]
    fn results_serialize_durations_as_numbers() {
        let scenario = get_scenario("clamp").unwrap();
        let results = tester().run_scenario(scenario, &[7], 1);
        let json = serde_json::to_value(&results[0]).unwrap();
        assert!(json["average_duration"].is_u64());
        assert_eq!(json["scenario_name"], "clamp");
    }
}
