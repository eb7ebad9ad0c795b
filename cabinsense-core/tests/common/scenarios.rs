//! Pre-built sessions mirroring how the cabin controller drives the wearable

use super::Step;

/// Walk through every scenario, least severe first (the demo sequence)
pub fn severity_walk(samples_per_scenario: usize) -> Vec<Step> {
    vec![
        Step::Switch("normal"),
        Step::Sample(samples_per_scenario),
        Step::Switch("moderate"),
        Step::Sample(samples_per_scenario),
        Step::Switch("bad"),
        Step::Sample(samples_per_scenario),
    ]
}

/// Calm drive interrupted by a stress event, then recovery
pub fn stress_event() -> Vec<Step> {
    vec![
        Step::Sample(30),
        Step::Switch("BAD"),
        Step::Sample(10),
        Step::Switch("moderate"),
        Step::Sample(10),
        Step::Switch("NORMAL"),
        Step::Sample(30),
    ]
}

/// Dashboard sends a few commands the simulator does not know
pub fn noisy_commands() -> Vec<Step> {
    vec![
        Step::Sample(5),
        Step::Switch("drowsy"),
        Step::Sample(5),
        Step::Switch("moderate"),
        Step::Sample(5),
        Step::Switch(""),
        Step::Sample(5),
        Step::Switch("severe"),
        Step::Sample(5),
    ]
}

/// Rapid flipping with a single sample per scenario
pub fn rapid_switching(rounds: usize) -> Vec<Step> {
    let ids = ["normal", "bad", "moderate"];
    (0..rounds)
        .flat_map(|i| [Step::Switch(ids[i % ids.len()]), Step::Sample(1)])
        .collect()
}
