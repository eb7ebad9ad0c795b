//! Simulator Engine
//!
//! ## Overview
//!
//! The engine stands in for a wearable: each call to [`SimulatorEngine::get_data`]
//! returns one heart-rate/stress reading for the active scenario. The only
//! state it keeps between calls is the active scenario, the last emitted
//! pair, and its own random generator.
//!
//! ## Generation
//!
//! ```text
//!            ┌──────────────┐   candidate   ┌───────────┐  blended  ┌─────────┐
//! scenario ─▶│ uniform draw │──────────────▶│   blend   │──────────▶│  clamp  │─▶ record
//!            └──────────────┘               │ 0.7 · prev│           └─────────┘
//!                                           │+0.3 · cand│
//!                             last emitted ─▶└───────────┘
//! ```
//!
//! 1. Draw a heart rate uniformly from the scenario's bpm range.
//! 2. Draw a stress level uniformly from the scenario's range on the
//!    one-decimal grid.
//! 3. If a previous reading exists, blend towards it, round, and clamp back
//!    into range.
//! 4. Classify stress with the global thresholds.
//! 5. Remember the emitted pair.
//! 6. Stamp the record.
//!
//! ## Scenario Changes
//!
//! Switching scenario clears the smoothing memory. A scenario change models
//! a real shift in the occupant's state, so the next reading is drawn fresh
//! inside the new bounds instead of crawling over from the old range.
//!
//! ## Determinism
//!
//! Each engine owns a seedable generator. Two engines built with the same
//! seed and driven through the same calls emit identical readings; only the
//! timestamps differ, and those can be pinned with [`FixedClock`] or
//! [`SteppedClock`].
//!
//! ```rust
//! use cabinsense_core::{SimulatorEngine, StressCategory};
//!
//! let mut engine = SimulatorEngine::with_seed(42);
//! engine.set_scenario("bad")?;
//!
//! let record = engine.get_data();
//! assert!((97..=133).contains(&record.heart_rate));
//! assert_eq!(record.stress_category, StressCategory::High);
//! # Ok::<(), cabinsense_core::SimulatorError>(())
//! ```
//!
//! [`FixedClock`]: crate::time::FixedClock
//! [`SteppedClock`]: crate::time::SteppedClock

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::smoothing::{
    DEFAULT_PREVIOUS_WEIGHT, STRESS_DECIMAL_SCALE, STRESS_ROUNDING_SLACK_PCT,
};
use crate::errors::SimulatorResult;
use crate::record::{DataRecord, StressCategory};
use crate::scenario::{Scenario, ScenarioCatalog, ScenarioProfile};
use crate::time::TimeSource;

#[cfg(feature = "std")]
use crate::time::SystemClock;

/// Run-time configuration for one engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorConfig {
    /// Generator seed; `None` seeds from entropy (or the clock without std)
    pub seed: Option<u64>,

    /// Weight of the previous reading in the blend (0.0-1.0)
    ///
    /// 0.0 disables smoothing, 1.0 freezes the first reading.
    pub previous_weight: f64,

    /// Scenario active at construction
    pub initial_scenario: Scenario,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            previous_weight: DEFAULT_PREVIOUS_WEIGHT,
            initial_scenario: ScenarioCatalog::least_severe(),
        }
    }
}

impl SimulatorConfig {
    /// Fix the generator seed for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the smoothing weight, clamped to [0, 1]
    ///
    /// A NaN weight keeps the default.
    pub fn with_previous_weight(mut self, weight: f64) -> Self {
        self.previous_weight = sanitize_weight(weight);
        self
    }

    /// Scenario the engine starts in
    pub fn with_initial_scenario(mut self, scenario: Scenario) -> Self {
        self.initial_scenario = scenario;
        self
    }
}

/// Most recently emitted reading, kept for smoothing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LastEmitted {
    /// Heart rate (bpm)
    pub heart_rate: u16,
    /// Stress level (%), one decimal
    pub stress_level: f64,
}

/// Largest change between consecutive readings within one scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuityBound {
    /// Maximum heart-rate step (bpm)
    pub heart_rate_bpm: u16,
    /// Maximum stress step (%)
    pub stress_pct: f64,
}

/// Scenario-driven biometric generator
#[derive(Debug)]
pub struct SimulatorEngine<C: TimeSource> {
    rng: StdRng,
    clock: C,
    previous_weight: f64,
    scenario: Scenario,
    last: Option<LastEmitted>,
    emitted: u64,
}

#[cfg(feature = "std")]
impl SimulatorEngine<SystemClock> {
    /// Engine on the system clock, seeded from entropy, in the least severe scenario
    pub fn new() -> Self {
        Self::with_config(SimulatorConfig::default())
    }

    /// Engine on the system clock with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(SimulatorConfig::default().with_seed(seed))
    }

    /// Engine on the system clock from an explicit configuration
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

#[cfg(feature = "std")]
impl Default for SimulatorEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TimeSource> SimulatorEngine<C> {
    /// Engine stamping records from `clock`
    ///
    /// The configured weight is sanitized here as well, so a config built
    /// as a struct literal gets the same clamping as `with_previous_weight`.
    pub fn with_clock(config: SimulatorConfig, clock: C) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => entropy_rng(&clock),
        };

        Self {
            rng,
            clock,
            previous_weight: sanitize_weight(config.previous_weight),
            scenario: config.initial_scenario,
            last: None,
            emitted: 0,
        }
    }

    /// Switch scenario by wire identifier
    ///
    /// Fails with `UnknownScenario` and leaves the engine untouched if `id`
    /// is not in the catalog.
    pub fn set_scenario(&mut self, id: &str) -> SimulatorResult<()> {
        match id.parse::<Scenario>() {
            Ok(scenario) => {
                self.set_scenario_id(scenario);
                Ok(())
            }
            Err(err) => {
                log_warn!("Rejected scenario change to '{}' (active: {})", id, self.scenario);
                Err(err)
            }
        }
    }

    /// Switch scenario and clear the smoothing memory
    pub fn set_scenario_id(&mut self, scenario: Scenario) {
        log_info!("Scenario changed to {}: {}", scenario, scenario.profile().description);

        self.scenario = scenario;
        self.last = None;
    }

    /// Produce one reading for the active scenario
    pub fn get_data(&mut self) -> DataRecord {
        let profile = self.scenario.profile();

        let candidate_hr = self
            .rng
            .gen_range(profile.heart_rate.min_bpm..=profile.heart_rate.max_bpm);
        let candidate_tenths = self
            .rng
            .gen_range(profile.stress.min_tenths()..=profile.stress.max_tenths());
        let candidate_stress = candidate_tenths as f64 / STRESS_DECIMAL_SCALE;

        let (heart_rate, stress_level) = match self.last {
            Some(last) => (
                self.blend_heart_rate(profile, last.heart_rate, candidate_hr),
                self.blend_stress(profile, last.stress_level, candidate_stress),
            ),
            None => (candidate_hr, candidate_stress),
        };

        self.last = Some(LastEmitted { heart_rate, stress_level });
        self.emitted += 1;

        let record = DataRecord {
            timestamp: self.clock.now(),
            heart_rate,
            stress_level,
            stress_category: StressCategory::from_stress_level(stress_level),
            scenario: self.scenario,
            description: profile.description,
        };

        log_trace!("{}", record);
        record
    }

    /// Forget the last reading so the next one is drawn fresh
    pub fn reset(&mut self) {
        if self.last.take().is_some() {
            log_debug!("Smoothing memory cleared for {}", self.scenario);
        }
    }

    /// Active scenario
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Catalog entry of the active scenario
    pub fn profile(&self) -> &'static ScenarioProfile {
        self.scenario.profile()
    }

    /// Reading the next one will be blended with, if any
    pub fn last_emitted(&self) -> Option<LastEmitted> {
        self.last
    }

    /// Number of records this engine has produced
    pub fn readings_emitted(&self) -> u64 {
        self.emitted
    }

    /// Effective smoothing weight, always within [0, 1]
    pub fn previous_weight(&self) -> f64 {
        self.previous_weight
    }

    /// Clock stamping the records
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Largest step between consecutive readings of the active scenario
    pub fn continuity_bound(&self) -> ContinuityBound {
        let profile = self.profile();
        let fresh_weight = 1.0 - self.previous_weight;
        ContinuityBound {
            heart_rate_bpm: libm::ceil(fresh_weight * profile.heart_rate.width() as f64) as u16,
            stress_pct: fresh_weight * profile.stress.width() + STRESS_ROUNDING_SLACK_PCT,
        }
    }

    fn blend_heart_rate(&self, profile: &ScenarioProfile, previous: u16, candidate: u16) -> u16 {
        let blended = self.blend(previous as f64, candidate as f64);
        // Convex blend of two in-range values, so the cast cannot wrap
        profile.heart_rate.clamp(libm::round(blended) as u16)
    }

    fn blend_stress(&self, profile: &ScenarioProfile, previous: f64, candidate: f64) -> f64 {
        let blended = self.blend(previous, candidate);
        let snapped = libm::round(blended * STRESS_DECIMAL_SCALE) / STRESS_DECIMAL_SCALE;
        profile.stress.clamp(snapped)
    }

    fn blend(&self, previous: f64, candidate: f64) -> f64 {
        self.previous_weight * previous + (1.0 - self.previous_weight) * candidate
    }
}

// NaN keeps the default; anything else is clamped to [0, 1]
fn sanitize_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        DEFAULT_PREVIOUS_WEIGHT
    } else {
        weight.clamp(0.0, 1.0)
    }
}

#[cfg(feature = "std")]
fn entropy_rng<C: TimeSource>(_clock: &C) -> StdRng {
    StdRng::from_entropy()
}

#[cfg(not(feature = "std"))]
fn entropy_rng<C: TimeSource>(clock: &C) -> StdRng {
    StdRng::seed_from_u64(clock.now())
}
