//! Scenario Catalog
//!
//! ## Overview
//!
//! A scenario is a named physiological state profile: the heart-rate and
//! stress bounds a healthy adult occupies while calm, mildly uncomfortable,
//! or severely uncomfortable. The catalog is a static table; nothing mutates
//! it at run time, and a malformed entry fails the build.
//!
//! ```text
//! severity ─────────────────────────────────────────────▶
//!   normal        moderate            bad
//!   HR  64─80     HR  83─107          HR  97─133
//!   SL  15─35     SL  45─75           SL  75─95
//! ```
//!
//! Ranges may overlap (a `moderate` and a `bad` occupant can share a heart
//! rate of 100 bpm) but the table is ordered by increasing severity.
//!
//! ## Identifiers
//!
//! The wire identifiers are `normal`, `moderate` and `bad`. Parsing trims
//! whitespace and ignores ASCII case, since cabin control commands arrive as
//! `"NORMAL"`. Anything else is an `UnknownScenario` error.
//!
//! ```rust
//! use cabinsense_core::{Scenario, ScenarioCatalog};
//!
//! let profile = ScenarioCatalog::lookup("BAD")?;
//! assert_eq!(profile.scenario, Scenario::Bad);
//! assert!(profile.heart_rate.contains(120));
//! # Ok::<(), cabinsense_core::SimulatorError>(())
//! ```

use core::fmt;
use core::str::FromStr;

use crate::constants::smoothing::STRESS_DECIMAL_SCALE;
use crate::constants::stress::STRESS_MAX_TENTHS;
use crate::errors::{SimulatorError, SimulatorResult};

/// Physiological scenario identifier, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Scenario {
    /// Relaxed occupant
    #[default]
    Normal,
    /// Mild discomfort
    Moderate,
    /// Severe discomfort
    Bad,
}

impl Scenario {
    /// Every scenario, least severe first
    pub const ALL: [Scenario; 3] = [Scenario::Normal, Scenario::Moderate, Scenario::Bad];

    /// Wire identifier
    pub const fn name(&self) -> &'static str {
        match self {
            Scenario::Normal => "normal",
            Scenario::Moderate => "moderate",
            Scenario::Bad => "bad",
        }
    }

    /// Static profile for this scenario
    pub fn profile(&self) -> &'static ScenarioProfile {
        match self {
            Scenario::Normal => &CATALOG[0],
            Scenario::Moderate => &CATALOG[1],
            Scenario::Bad => &CATALOG[2],
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = SimulatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(id))
            .ok_or_else(|| SimulatorError::unknown_scenario(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scenario {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Closed heart-rate interval in beats per minute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartRateRange {
    /// Lowest heart rate the scenario emits
    pub min_bpm: u16,
    /// Highest heart rate the scenario emits
    pub max_bpm: u16,
}

impl HeartRateRange {
    /// Build a range, failing const evaluation if `min >= max`
    pub const fn new(min_bpm: u16, max_bpm: u16) -> Self {
        assert!(min_bpm < max_bpm, "heart-rate lower bound must be below upper bound");
        Self { min_bpm, max_bpm }
    }

    /// Whether `bpm` lies within the closed range
    pub const fn contains(&self, bpm: u16) -> bool {
        self.min_bpm <= bpm && bpm <= self.max_bpm
    }

    /// Range width in bpm
    pub const fn width(&self) -> u16 {
        self.max_bpm - self.min_bpm
    }

    /// Clamp a (possibly blended) value into the range
    pub fn clamp(&self, bpm: u16) -> u16 {
        bpm.clamp(self.min_bpm, self.max_bpm)
    }
}

/// Closed stress interval, stored in tenths of a percent
///
/// Integer storage keeps the one-decimal grid exact and lets the catalog be
/// checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressRange {
    min_tenths: u16,
    max_tenths: u16,
}

impl StressRange {
    /// Build a range from tenths of a percent, failing const evaluation on
    /// inverted bounds or bounds above 100%
    pub const fn from_tenths(min_tenths: u16, max_tenths: u16) -> Self {
        assert!(min_tenths < max_tenths, "stress lower bound must be below upper bound");
        assert!(max_tenths <= STRESS_MAX_TENTHS, "stress upper bound must not exceed 100%");
        Self { min_tenths, max_tenths }
    }

    /// Build a range from whole percentages
    pub const fn from_percent(min_pct: u8, max_pct: u8) -> Self {
        Self::from_tenths(min_pct as u16 * 10, max_pct as u16 * 10)
    }

    /// Lower bound (%)
    pub fn min(&self) -> f64 {
        self.min_tenths as f64 / STRESS_DECIMAL_SCALE
    }

    /// Upper bound (%)
    pub fn max(&self) -> f64 {
        self.max_tenths as f64 / STRESS_DECIMAL_SCALE
    }

    /// Lower bound in tenths of a percent
    pub const fn min_tenths(&self) -> u16 {
        self.min_tenths
    }

    /// Upper bound in tenths of a percent
    pub const fn max_tenths(&self) -> u16 {
        self.max_tenths
    }

    /// Range width (%)
    pub fn width(&self) -> f64 {
        self.max() - self.min()
    }

    /// Whether `stress_pct` lies within the closed range (false for NaN)
    pub fn contains(&self, stress_pct: f64) -> bool {
        self.min() <= stress_pct && stress_pct <= self.max()
    }

    /// Clamp a (possibly blended) value into the range
    pub fn clamp(&self, stress_pct: f64) -> f64 {
        stress_pct.clamp(self.min(), self.max())
    }
}

/// Bounds and description for one scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioProfile {
    /// Scenario this entry describes
    pub scenario: Scenario,
    /// Heart-rate bounds (bpm)
    pub heart_rate: HeartRateRange,
    /// Stress bounds (%)
    pub stress: StressRange,
    /// Human-readable state, copied into every record
    pub description: &'static str,
}

/// The fixed scenario table, least severe first
///
/// Bounds derive from a baseline and spread per scenario (72 ± 8 bpm and
/// 25 ± 10 % for a relaxed occupant).
static CATALOG: [ScenarioProfile; 3] = [
    ScenarioProfile {
        scenario: Scenario::Normal,
        heart_rate: HeartRateRange::new(64, 80),
        stress: StressRange::from_percent(15, 35),
        description: "Relaxed and comfortable state",
    },
    ScenarioProfile {
        scenario: Scenario::Moderate,
        heart_rate: HeartRateRange::new(83, 107),
        stress: StressRange::from_percent(45, 75),
        description: "Moderate stress, slightly uncomfortable",
    },
    ScenarioProfile {
        scenario: Scenario::Bad,
        heart_rate: HeartRateRange::new(97, 133),
        stress: StressRange::from_percent(75, 95),
        description: "High stress, very uncomfortable",
    },
];

/// Read-only access to the scenario table
pub struct ScenarioCatalog;

impl ScenarioCatalog {
    /// Look up a profile by wire identifier
    pub fn lookup(id: &str) -> SimulatorResult<&'static ScenarioProfile> {
        id.parse::<Scenario>().map(|scenario| scenario.profile())
    }

    /// Profile for a known scenario
    pub fn get(scenario: Scenario) -> &'static ScenarioProfile {
        scenario.profile()
    }

    /// The least severe scenario, used when an engine is created
    pub const fn least_severe() -> Scenario {
        Scenario::Normal
    }

    /// All profiles, least severe first
    pub fn iter() -> impl Iterator<Item = &'static ScenarioProfile> {
        CATALOG.iter()
    }

    /// Re-check table invariants
    ///
    /// Returns the first scenario whose entry is malformed or out of
    /// severity order.
    pub fn validate() -> Result<(), Scenario> {
        let mut previous: Option<&ScenarioProfile> = None;
        for profile in CATALOG.iter() {
            let hr = profile.heart_rate;
            let stress = profile.stress;
            let well_formed = hr.min_bpm < hr.max_bpm
                && stress.min_tenths < stress.max_tenths
                && stress.max_tenths <= STRESS_MAX_TENTHS
                && !profile.description.is_empty();
            let ordered = previous.map_or(true, |prev| {
                prev.scenario < profile.scenario
                    && prev.heart_rate.min_bpm <= hr.min_bpm
                    && prev.stress.min_tenths <= stress.min_tenths
            });
            if !well_formed || !ordered {
                return Err(profile.scenario);
            }
            previous = Some(profile);
        }
        Ok(())
    }
}
