//! # Circuit Parameters
//!
//! Load and environment descriptions shared by the conductor and breaker
//! requests. Both structs are flattened into the request records, so the
//! JSON stays a single flat object:
//!
//! ```json
//! {
//!   "standard": "NEC",
//!   "load_current_a": 20.0,
//!   "voltage_v": 120.0,
//!   "voltage_system": "single_phase",
//!   "ambient_temp": 86.0,
//!   "ambient_unit": "fahrenheit",
//!   "duty_cycle": "continuous",
//!   "grouped_conductors": 3
//! }
//! ```
//!
//! A load is given either as a current or as a power plus voltage, never both.

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::standards::{InstallationMethod, Standard};
use crate::units::TemperatureUnit;

// ============================================================================
// Voltage System
// ============================================================================

/// Supply arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VoltageSystem {
    #[default]
    SinglePhase,
    ThreePhase,
    Dc,
}

impl VoltageSystem {
    /// Multiplier `k` in `Vdrop = k * I * L * R`
    pub fn drop_multiplier(&self) -> f64 {
        match self {
            VoltageSystem::SinglePhase | VoltageSystem::Dc => 2.0,
            VoltageSystem::ThreePhase => 3f64.sqrt(),
        }
    }

    /// Current-carrying conductors per circuit
    pub fn loaded_conductors(&self) -> u32 {
        match self {
            VoltageSystem::SinglePhase | VoltageSystem::Dc => 2,
            VoltageSystem::ThreePhase => 3,
        }
    }

    /// DC standards always size as DC
    pub fn effective_for(self, standard: Standard) -> VoltageSystem {
        if standard.is_dc() {
            VoltageSystem::Dc
        } else {
            self
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VoltageSystem::SinglePhase => "Single-phase AC",
            VoltageSystem::ThreePhase => "Three-phase AC",
            VoltageSystem::Dc => "DC",
        }
    }
}

impl std::fmt::Display for VoltageSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Duty Cycle
// ============================================================================

/// Whether the load runs for three hours or more
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DutyCycle {
    /// Maximum current for 3 hours or more
    #[default]
    Continuous,
    Intermittent,
}

impl DutyCycle {
    /// Conductor sizing multiplier (NEC 210.19(A)(1))
    pub fn conductor_factor(&self) -> f64 {
        match self {
            DutyCycle::Continuous => 1.25,
            DutyCycle::Intermittent => 1.00,
        }
    }

    /// Protective device safety factor
    pub fn safety_factor(&self) -> f64 {
        match self {
            DutyCycle::Continuous => 1.25,
            DutyCycle::Intermittent => 1.15,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DutyCycle::Continuous => "Continuous",
            DutyCycle::Intermittent => "Intermittent",
        }
    }
}

impl std::fmt::Display for DutyCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Application Type
// ============================================================================

/// What the circuit feeds; drives the breaker environment factor, automotive
/// fuse substitution and the solar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationType {
    #[default]
    General,
    Residential,
    Commercial,
    Industrial,
    Outdoor,
    Led,
    Automotive,
    Marine,
    Solar,
}

impl ApplicationType {
    /// Breaker environment factor
    pub fn environment_factor(&self) -> f64 {
        match self {
            ApplicationType::Marine => 1.10,
            ApplicationType::Outdoor => 1.05,
            _ => 1.00,
        }
    }

    /// Applications eligible for automotive fuse substitution
    pub fn uses_automotive_fuses(&self) -> bool {
        matches!(
            self,
            ApplicationType::Automotive | ApplicationType::Marine | ApplicationType::Led
        )
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ApplicationType::General => "General",
            ApplicationType::Residential => "Residential",
            ApplicationType::Commercial => "Commercial",
            ApplicationType::Industrial => "Industrial",
            ApplicationType::Outdoor => "Outdoor",
            ApplicationType::Led => "LED lighting",
            ApplicationType::Automotive => "Automotive",
            ApplicationType::Marine => "Marine",
            ApplicationType::Solar => "Solar PV",
        }
    }
}

impl std::fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Load
// ============================================================================

/// Electrical load: a current, or a power at a voltage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoadInput {
    /// Load current (A)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_current_a: Option<f64>,

    /// Load power (W)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_power_w: Option<f64>,

    /// Supply voltage (V); line-to-line for three-phase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage_v: Option<f64>,

    #[serde(default)]
    pub voltage_system: VoltageSystem,

    /// AC power factor, 1.0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_factor: Option<f64>,
}

impl LoadInput {
    /// Load given directly as a current
    pub fn current(load_current_a: f64, voltage_v: f64, voltage_system: VoltageSystem) -> Self {
        LoadInput {
            load_current_a: Some(load_current_a),
            voltage_v: Some(voltage_v),
            voltage_system,
            ..Default::default()
        }
    }

    /// Load given as a power at a voltage
    pub fn power(load_power_w: f64, voltage_v: f64, voltage_system: VoltageSystem) -> Self {
        LoadInput {
            load_power_w: Some(load_power_w),
            voltage_v: Some(voltage_v),
            voltage_system,
            ..Default::default()
        }
    }

    /// Power factor in effect
    pub fn power_factor(&self) -> f64 {
        self.power_factor.unwrap_or(1.0)
    }

    /// Load current in amperes, converting from power when needed.
    ///
    /// `P/V` for DC, `P/(V*pf)` for single-phase, `P/(sqrt(3)*V*pf)` for
    /// three-phase. None when the load is not fully specified.
    pub fn current_a(&self, system: VoltageSystem) -> Option<f64> {
        if let Some(current) = self.load_current_a {
            return Some(current);
        }
        let power = self.load_power_w?;
        let voltage = self.voltage_v?;
        let pf = self.power_factor();
        let current = match system {
            VoltageSystem::Dc => power / voltage,
            VoltageSystem::SinglePhase => power / (voltage * pf),
            VoltageSystem::ThreePhase => power / (3f64.sqrt() * voltage * pf),
        };
        Some(current)
    }

    /// Every problem with the load, in field order.
    ///
    /// `require_load` is false only for requests that carry their current
    /// elsewhere (solar breakers).
    pub fn validation_errors(&self, standard: Option<Standard>, require_load: bool) -> Vec<CalcError> {
        let mut errors = Vec::new();

        match (self.load_current_a, self.load_power_w) {
            (Some(current), Some(power)) => errors.push(CalcError::invalid_input(
                "load_current_a/load_power_w",
                format!("{current} A and {power} W"),
                "Supply either a load current or a load power, not both",
            )),
            (None, None) if require_load => {
                errors.push(CalcError::missing_field("load_current_a or load_power_w"))
            }
            _ => {}
        }

        if let Some(current) = self.load_current_a {
            if !(current.is_finite() && current > 0.0) {
                errors.push(CalcError::invalid_input(
                    "load_current_a",
                    current.to_string(),
                    "Load current must be positive",
                ));
            }
        }
        if let Some(power) = self.load_power_w {
            if !(power.is_finite() && power > 0.0) {
                errors.push(CalcError::invalid_input(
                    "load_power_w",
                    power.to_string(),
                    "Load power must be positive",
                ));
            }
        }

        match self.voltage_v {
            Some(voltage) if !(voltage.is_finite() && voltage > 0.0) => {
                errors.push(CalcError::invalid_input(
                    "voltage_v",
                    voltage.to_string(),
                    "Voltage must be positive",
                ))
            }
            None if require_load || self.load_power_w.is_some() => {
                errors.push(CalcError::missing_field("voltage_v"))
            }
            _ => {}
        }

        if let Some(pf) = self.power_factor {
            if !(pf > 0.0 && pf <= 1.0) {
                errors.push(CalcError::invalid_input(
                    "power_factor",
                    pf.to_string(),
                    "Power factor must be in (0, 1]",
                ));
            }
        }

        if let Some(standard) = standard {
            if standard.is_dc() && self.voltage_system == VoltageSystem::ThreePhase {
                errors.push(CalcError::invalid_input(
                    "voltage_system",
                    "three_phase",
                    format!("{standard} circuits are DC"),
                ));
            }
        }

        errors
    }
}

// ============================================================================
// Environment
// ============================================================================

fn default_ambient_c() -> f64 {
    30.0
}

fn default_grouped_conductors() -> u32 {
    1
}

/// Installation environment of the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentInput {
    /// Ambient temperature in `ambient_unit`; 30 when absent
    #[serde(default = "default_ambient_c", alias = "ambient_temp_c")]
    pub ambient_temp: f64,

    /// Unit of `ambient_temp`; Celsius when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_unit: Option<TemperatureUnit>,

    /// Installation method; each standard has its own default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_method: Option<InstallationMethod>,

    #[serde(default)]
    pub duty_cycle: DutyCycle,

    /// Current-carrying conductors run together (raceway, bundle or group)
    #[serde(default = "default_grouped_conductors")]
    pub grouped_conductors: u32,
}

impl Default for EnvironmentInput {
    fn default() -> Self {
        EnvironmentInput {
            ambient_temp: default_ambient_c(),
            ambient_unit: None,
            installation_method: None,
            duty_cycle: DutyCycle::default(),
            grouped_conductors: default_grouped_conductors(),
        }
    }
}

/// Ambient range accepted on input (°C)
pub const AMBIENT_RANGE_C: (f64, f64) = (-50.0, 100.0);

impl EnvironmentInput {
    /// Ambient temperature in Celsius
    pub fn ambient_c(&self) -> f64 {
        self.ambient_unit
            .unwrap_or_default()
            .to_celsius(self.ambient_temp)
            .0
    }

    /// Installation method in effect for a standard
    pub fn method_for(&self, standard: Standard) -> InstallationMethod {
        self.installation_method
            .unwrap_or_else(|| InstallationMethod::default_for(standard.family()))
    }

    pub fn validation_errors(&self, standard: Option<Standard>) -> Vec<CalcError> {
        let mut errors = Vec::new();
        let (low, high) = AMBIENT_RANGE_C;
        let ambient_c = self.ambient_c();
        if !(ambient_c >= low && ambient_c <= high) {
            errors.push(CalcError::invalid_input(
                "ambient_temp",
                format!(
                    "{}{}",
                    self.ambient_temp,
                    self.ambient_unit.unwrap_or_default().symbol()
                ),
                format!("Ambient temperature must be between {low} and {high} °C"),
            ));
        }
        if self.grouped_conductors == 0 {
            errors.push(CalcError::invalid_input(
                "grouped_conductors",
                "0",
                "At least one conductor is required",
            ));
        }
        if let (Some(standard), Some(method)) = (standard, self.installation_method) {
            if !InstallationMethod::supported_by(standard.family()).contains(&method) {
                errors.push(CalcError::invalid_input(
                    "installation_method",
                    format!("{method:?}"),
                    format!("Not an installation method {standard} tables cover"),
                ));
            }
        }
        errors
    }
}
