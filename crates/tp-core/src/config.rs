//! Simulation configuration.
//!
//! Configuration arrives as JSON (from a file, the command line, or a stored
//! scenario) and is deserialized into [`RawPlazaConfig`], where every field is
//! optional.  [`PlazaConfig::try_from`] then validates each field and fails on
//! the first one that is missing or out of range, naming it:
//!
//! ```json
//! {
//!   "automaticBooths": 2,
//!   "manualBooths": 1,
//!   "durationTicks": 600,
//!   "vehiclesPerMinute": 12,
//!   "electronicPercentage": 70,
//!   "trafficPattern": "rush_hour"
//! }
//! ```
//!
//! `trafficPattern` may be omitted and defaults to `stable`.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, Tick};

// ── TrafficPattern ────────────────────────────────────────────────────────────

/// Shape of the arrival rate over the run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficPattern {
    /// The nominal rate applies to every tick.
    #[default]
    Stable,
    /// Double rate in the first and last quarter of the run, half rate in
    /// between.
    RushHour,
}

impl TrafficPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficPattern::Stable   => "stable",
            TrafficPattern::RushHour => "rush_hour",
        }
    }

    /// Arrival rate (vehicles per minute) in effect at `tick` of a run lasting
    /// `duration_ticks`.
    ///
    /// Rush hour compares against the quarter marks with strict inequalities,
    /// so a tick sitting exactly on the 25 % or 75 % mark gets the halved rate.
    pub fn effective_rate(self, nominal: f64, tick: Tick, duration_ticks: u64) -> f64 {
        match self {
            TrafficPattern::Stable => nominal,
            TrafficPattern::RushHour => {
                let t = tick.0 as f64;
                let d = duration_ticks as f64;
                if t < d * 0.25 || t > d * 0.75 {
                    nominal * 2.0
                } else {
                    nominal / 2.0
                }
            }
        }
    }
}

impl FromStr for TrafficPattern {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim() {
            "stable" => Ok(TrafficPattern::Stable),
            "rush_hour" | "rush-hour" => Ok(TrafficPattern::RushHour),
            other => Err(CoreError::InvalidField {
                field:  "trafficPattern",
                reason: format!("expected \"stable\" or \"rush_hour\", got {other:?}"),
            }),
        }
    }
}

impl fmt::Display for TrafficPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RawPlazaConfig ────────────────────────────────────────────────────────────

/// Configuration exactly as supplied by the caller, before validation.
///
/// Integer fields are signed so that a negative count is reported as an
/// invalid field rather than an opaque deserialization failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlazaConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_booths:      Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_booths:         Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ticks:        Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicles_per_minute:   Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electronic_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_pattern:       Option<String>,
}

impl RawPlazaConfig {
    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> CoreResult<Self> {
        serde_json::from_str(s).map_err(|e| CoreError::Parse(e.to_string()))
    }

    /// Parse from any JSON `Read` source.
    pub fn from_reader<R: Read>(reader: R) -> CoreResult<Self> {
        serde_json::from_reader(reader).map_err(|e| CoreError::Parse(e.to_string()))
    }

    /// Parse from a JSON file.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

impl From<&PlazaConfig> for RawPlazaConfig {
    fn from(config: &PlazaConfig) -> Self {
        Self {
            automatic_booths:      Some(config.automatic_booths as i64),
            manual_booths:         Some(config.manual_booths as i64),
            duration_ticks:        Some(config.duration_ticks as i64),
            vehicles_per_minute:   Some(config.vehicles_per_minute),
            electronic_percentage: Some(config.electronic_percentage),
            traffic_pattern:       Some(config.traffic_pattern.as_str().to_owned()),
        }
    }
}

// ── PlazaConfig ───────────────────────────────────────────────────────────────

/// Validated configuration for one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlazaConfig {
    /// Number of electronic-only fast booths.
    pub automatic_booths:      u32,
    /// Number of slow booths accepting any payment.
    pub manual_booths:         u32,
    /// Total ticks to simulate.
    pub duration_ticks:        u64,
    /// Nominal arrival rate, vehicles per minute.  Finite and `>= 0`.
    pub vehicles_per_minute:   f64,
    /// Share of arrivals paying electronically, in `[0, 100]`.
    pub electronic_percentage: f64,
    pub traffic_pattern:       TrafficPattern,
}

impl PlazaConfig {
    /// Parse and validate a JSON string in one step.
    pub fn from_json_str(s: &str) -> CoreResult<Self> {
        RawPlazaConfig::from_json_str(s)?.try_into()
    }

    /// Parse and validate a JSON file in one step.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        RawPlazaConfig::from_path(path)?.try_into()
    }

    /// Total booths of both kinds.
    #[inline]
    pub fn booth_count(&self) -> usize {
        self.automatic_booths as usize + self.manual_booths as usize
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.duration_ticks)
    }
}

impl TryFrom<RawPlazaConfig> for PlazaConfig {
    type Error = CoreError;

    fn try_from(raw: RawPlazaConfig) -> CoreResult<Self> {
        let automatic_booths = booth_count("automaticBooths", raw.automatic_booths)?;
        let manual_booths    = booth_count("manualBooths", raw.manual_booths)?;

        let duration = raw.duration_ticks.ok_or(CoreError::MissingField("durationTicks"))?;
        let duration_ticks = u64::try_from(duration).map_err(|_| CoreError::InvalidField {
            field:  "durationTicks",
            reason: format!("must be >= 0, got {duration}"),
        })?;

        let rate = raw.vehicles_per_minute.ok_or(CoreError::MissingField("vehiclesPerMinute"))?;
        if !rate.is_finite() || rate < 0.0 {
            return Err(CoreError::InvalidField {
                field:  "vehiclesPerMinute",
                reason: format!("must be a finite number >= 0, got {rate}"),
            });
        }

        let pct = raw
            .electronic_percentage
            .ok_or(CoreError::MissingField("electronicPercentage"))?;
        if !(0.0..=100.0).contains(&pct) {
            return Err(CoreError::InvalidField {
                field:  "electronicPercentage",
                reason: format!("must lie in [0, 100], got {pct}"),
            });
        }

        let traffic_pattern = match raw.traffic_pattern.as_deref() {
            None    => TrafficPattern::default(),
            Some(s) => s.parse()?,
        };

        Ok(PlazaConfig {
            automatic_booths,
            manual_booths,
            duration_ticks,
            vehicles_per_minute: rate,
            electronic_percentage: pct,
            traffic_pattern,
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn booth_count(field: &'static str, value: Option<i64>) -> CoreResult<u32> {
    let n = value.ok_or(CoreError::MissingField(field))?;
    u32::try_from(n).map_err(|_| CoreError::InvalidField {
        field,
        reason: format!("must be an integer in [0, {}], got {n}", u32::MAX),
    })
}
