//! # Design Settings
//!
//! Defaults that apply across every request: which standard breaker sizing
//! falls back to, voltage-drop limits per standard, and the NEC termination
//! temperature column. The engine keeps no state of its own, so callers pass
//! these explicitly (the plain entry points use `DesignSettings::default()`).
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "default_breaker_standard": "IEC",
//!   "voltage_drop_limits": { "nec_pct": 3.0 },
//!   "nec_termination_rating": "60C"
//! }
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::standards::{Standard, TemperatureRating};

/// Project-wide sizing defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Standard used when a breaker request names none
    pub default_breaker_standard: Standard,

    /// Voltage-drop limits applied when a request sets none
    pub voltage_drop_limits: VoltageDropLimits,

    /// NEC ampacity column (termination rating, NEC 110.14(C))
    pub nec_termination_rating: TemperatureRating,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            default_breaker_standard: Standard::Iec,
            voltage_drop_limits: VoltageDropLimits::default(),
            nec_termination_rating: TemperatureRating::C75,
        }
    }
}

impl DesignSettings {
    /// Voltage-drop limit (%) for a standard
    pub fn voltage_drop_limit_pct(&self, standard: Standard) -> f64 {
        let limits = &self.voltage_drop_limits;
        match standard {
            Standard::Nec => limits.nec_pct,
            Standard::Iec => limits.iec_pct,
            Standard::DcAutomotive => limits.dc_automotive_pct,
            Standard::DcMarine => limits.dc_marine_pct,
            Standard::DcSolar => limits.dc_solar_pct,
        }
    }

    /// Temperature column used when a conductor request names none
    pub fn default_temperature_rating(&self, standard: Standard) -> TemperatureRating {
        match standard {
            Standard::Nec => self.nec_termination_rating,
            Standard::Iec => TemperatureRating::C70,
            Standard::DcAutomotive | Standard::DcMarine => TemperatureRating::C105,
            Standard::DcSolar => TemperatureRating::C90,
        }
    }
}

/// Maximum voltage drop, percent of supply voltage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoltageDropLimits {
    /// Feeder plus branch circuit (NEC 210.19 informational note)
    pub nec_pct: f64,
    /// IEC 60364-5-52 Annex G, other uses
    pub iec_pct: f64,
    pub dc_automotive_pct: f64,
    /// ABYC E-11 critical circuits
    pub dc_marine_pct: f64,
    pub dc_solar_pct: f64,
}

impl Default for VoltageDropLimits {
    fn default() -> Self {
        VoltageDropLimits {
            nec_pct: 5.0,
            iec_pct: 5.0,
            dc_automotive_pct: 3.0,
            dc_marine_pct: 3.0,
            dc_solar_pct: 3.0,
        }
    }
}
