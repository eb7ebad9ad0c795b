//! Common test utilities for simulator integration tests
//!
//! This module provides:
//! - Seeded engine constructors on reproducible clocks
//! - Scripted scenario sessions (switch, sample, switch, ...)
//! - Assertion helpers for bounds and continuity

#![allow(dead_code)]

use cabinsense_core::constants::DEFAULT_SAMPLE_INTERVAL_US;
use cabinsense_core::{
    DataRecord, Scenario, SimulatorConfig, SimulatorEngine, SteppedClock, Timestamp,
};

pub mod harness;
pub mod scenarios;

/// 2024-03-09T14:02:11.000000 UTC
pub const SESSION_START: Timestamp = 1_709_992_931_000_000;

/// One-second polling, like the cabin decision loop
pub const POLL_INTERVAL_US: u64 = DEFAULT_SAMPLE_INTERVAL_US;

/// Seeded engine whose clock ticks once per second from `SESSION_START`
pub fn seeded_engine(seed: u64) -> SimulatorEngine<SteppedClock> {
    SimulatorEngine::with_clock(
        SimulatorConfig::default().with_seed(seed),
        SteppedClock::per_second(SESSION_START),
    )
}

/// Step in a scripted session
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Request a scenario change by wire identifier
    Switch(&'static str),
    /// Pull this many records
    Sample(usize),
}

/// Records emitted by a script, grouped by the switch that preceded them
#[derive(Debug, Default)]
pub struct SessionLog {
    pub segments: Vec<Segment>,
    pub rejected: Vec<&'static str>,
}

#[derive(Debug)]
pub struct Segment {
    pub scenario: Scenario,
    pub records: Vec<DataRecord>,
}

impl SessionLog {
    pub fn all_records(&self) -> impl Iterator<Item = &DataRecord> {
        self.segments.iter().flat_map(|s| s.records.iter())
    }

    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.records.len()).sum()
    }
}

/// Drive an engine through a script
///
/// Rejected switches are logged and the session continues in the previous
/// scenario, the way the cabin controller treats a bad dashboard command.
pub fn run_script<C: cabinsense_core::TimeSource>(
    engine: &mut SimulatorEngine<C>,
    script: &[Step],
) -> SessionLog {
    let mut log = SessionLog::default();
    log.segments.push(Segment { scenario: engine.scenario(), records: Vec::new() });

    for step in script {
        match *step {
            Step::Switch(id) => match engine.set_scenario(id) {
                Ok(()) => log.segments.push(Segment {
                    scenario: engine.scenario(),
                    records: Vec::new(),
                }),
                Err(_) => log.rejected.push(id),
            },
            Step::Sample(count) => {
                let segment = log.segments.last_mut().expect("segment exists");
                segment.records.extend((0..count).map(|_| engine.get_data()));
            }
        }
    }

    log
}

/// Assert a record lies inside its scenario's declared bounds
#[macro_export]
macro_rules! assert_within_scenario {
    ($record:expr) => {
        let record = &$record;
        let profile = record.scenario.profile();
        assert!(
            profile.heart_rate.contains(record.heart_rate),
            "heart rate {} outside {:?} for {}",
            record.heart_rate, profile.heart_rate, record.scenario
        );
        assert!(
            profile.stress.contains(record.stress_level),
            "stress {} outside [{}, {}] for {}",
            record.stress_level, profile.stress.min(), profile.stress.max(), record.scenario
        );
    };
}
