//! Engine shared between callers
//!
//! The engine itself is single-owner. When an embedding system polls one
//! simulated device from several threads (a decision loop plus a dashboard
//! refresh, say), wrap it in [`SharedSimulator`]: every operation runs under
//! one mutex, so no caller can observe a half-updated smoothing state.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::engine::{LastEmitted, SimulatorEngine};
use crate::errors::SimulatorResult;
use crate::record::DataRecord;
use crate::scenario::Scenario;
use crate::time::TimeSource;

/// Cloneable handle to one mutex-guarded engine
#[derive(Debug)]
pub struct SharedSimulator<C: TimeSource> {
    inner: Arc<Mutex<SimulatorEngine<C>>>,
}

impl<C: TimeSource> Clone for SharedSimulator<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: TimeSource> SharedSimulator<C> {
    /// Take ownership of `engine` and share it
    pub fn new(engine: SimulatorEngine<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// See [`SimulatorEngine::set_scenario`]
    pub fn set_scenario(&self, id: &str) -> SimulatorResult<()> {
        self.lock().set_scenario(id)
    }

    /// See [`SimulatorEngine::set_scenario_id`]
    pub fn set_scenario_id(&self, scenario: Scenario) {
        self.lock().set_scenario_id(scenario)
    }

    /// See [`SimulatorEngine::get_data`]
    pub fn get_data(&self) -> DataRecord {
        self.lock().get_data()
    }

    /// Active scenario
    pub fn scenario(&self) -> Scenario {
        self.lock().scenario()
    }

    /// Last reading kept for smoothing
    pub fn last_emitted(&self) -> Option<LastEmitted> {
        self.lock().last_emitted()
    }

    /// Records produced across all handles
    pub fn readings_emitted(&self) -> u64 {
        self.lock().readings_emitted()
    }

    /// Run several operations under one lock acquisition
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut SimulatorEngine<C>) -> R) -> R {
        f(&mut self.lock())
    }

    // Engine updates are single assignments after all arithmetic, so a
    // panic elsewhere cannot leave them half-written; recover from poison.
    fn lock(&self) -> MutexGuard<'_, SimulatorEngine<C>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<C: TimeSource> From<SimulatorEngine<C>> for SharedSimulator<C> {
    fn from(engine: SimulatorEngine<C>) -> Self {
        Self::new(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SimulatorConfig;
    use crate::time::SystemClock;
    use std::thread;

    #[test]
    fn threads_share_one_device() {
        let shared = SharedSimulator::new(SimulatorEngine::with_seed(21));
        shared.set_scenario("moderate").unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let device = shared.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|_| device.get_data())
                        .all(|r| (83..=107).contains(&r.heart_rate))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(shared.readings_emitted(), 100);
    }

    #[test]
    fn rejected_change_keeps_scenario() {
        let shared: SharedSimulator<SystemClock> =
            SimulatorEngine::with_config(SimulatorConfig::default().with_seed(22)).into();
        assert!(shared.set_scenario("unknown").is_err());
        assert_eq!(shared.scenario(), Scenario::Normal);
    }

    #[test]
    fn with_engine_batches_calls() {
        let shared = SharedSimulator::new(SimulatorEngine::with_seed(23));
        let (first, second) = shared.with_engine(|engine| {
            engine.set_scenario_id(Scenario::Bad);
            (engine.get_data(), engine.get_data())
        });
        assert_eq!(first.scenario, Scenario::Bad);
        assert_eq!(second.scenario, Scenario::Bad);
        assert!(shared.last_emitted().is_some());
    }
}
