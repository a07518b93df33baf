//! # Conductor Sizing
//!
//! Selects the smallest conductor whose derated ampacity carries the design
//! current and whose voltage drop stays within the limit.
//!
//! ## Method
//!
//! 1. Design current `I_d = I_load × F` where `F` is 1.25 for continuous
//!    loads, 1.00 for intermittent loads and 1.56 for DC-solar circuits
//! 2. Derating `D` from [`crate::derating::compose`]
//! 3. Walk the standard's table ascending; accept the first size with
//!    `I_base × D ≥ I_d` and `k × I_load × L × R / V ≤ limit`
//!
//! `k` is 2 for single-phase and DC, √3 for three-phase. Voltage drop uses the
//! actual load current, not the design current.
//!
//! ## Example
//!
//! ```rust
//! use wire_core::calculations::conductor::ConductorInput;
//! use wire_core::circuit::{LoadInput, VoltageSystem};
//! use wire_core::size_conductor;
//!
//! let input = ConductorInput {
//!     standard: Some("NEC".to_string()),
//!     load: LoadInput::current(20.0, 120.0, VoltageSystem::SinglePhase),
//!     length: Some(75.0),
//!     ..Default::default()
//! };
//! let result = size_conductor(&input).unwrap();
//! assert_eq!(result.size.label(), "12 AWG");
//! ```

use serde::{Deserialize, Serialize};

use crate::circuit::{EnvironmentInput, LoadInput};
use crate::compliance::{ComplianceCheck, ComplianceEvaluator, ComplianceReport};
use crate::derating::{self, DeratingConditions, DeratingFactors};
use crate::errors::{CalcError, CalcResult};
use crate::settings::DesignSettings;
use crate::standards::{
    code_ref, dc, iec, nec, ConductorMaterial, InstallationMethod, Standard, TableFamily,
    TemperatureRating, UnitSystem, WireSize,
};
use crate::units::LengthUnit;

/// NEC 690.8(A)/(B): 125% for irradiance times 125% for continuous duty
pub const PV_CURRENT_MULTIPLIER: f64 = 1.56;

/// Input parameters for sizing a conductor.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Kitchen receptacles",
///   "standard": "NEC",
///   "load_current_a": 20.0,
///   "voltage_v": 120.0,
///   "length": 75.0,
///   "material": "copper",
///   "ambient_temp": 30.0,
///   "grouped_conductors": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConductorInput {
    /// User label for this circuit
    #[serde(default)]
    pub label: String,

    /// Standard identifier (e.g. "NEC", "IEC", "DC-MARINE")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,

    #[serde(flatten)]
    pub load: LoadInput,

    /// One-way circuit length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    /// Unit of `length`; the standard's native unit when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_unit: Option<LengthUnit>,

    #[serde(default)]
    pub material: ConductorMaterial,

    /// Ampacity column; the standard's default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_rating: Option<TemperatureRating>,

    #[serde(flatten)]
    pub environment: EnvironmentInput,

    /// Voltage-drop limit (%); the settings' limit for the standard when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage_drop_limit_pct: Option<f64>,
}

impl ConductorInput {
    /// Every validation problem, given the already-parsed standard
    pub fn validation_errors(&self, standard: Option<Standard>, settings: &DesignSettings) -> Vec<CalcError> {
        let mut errors = Vec::new();
        if self.standard.is_none() {
            errors.push(CalcError::missing_field("standard"));
        }
        errors.extend(self.load.validation_errors(standard, true));

        match self.length {
            None => errors.push(CalcError::missing_field("length")),
            Some(length) if !(length.is_finite() && length > 0.0) => {
                errors.push(CalcError::invalid_input(
                    "length",
                    length.to_string(),
                    "Circuit length must be positive",
                ))
            }
            _ => {}
        }

        errors.extend(self.environment.validation_errors(standard));

        if let Some(limit) = self.voltage_drop_limit_pct {
            if !(limit > 0.0 && limit <= 100.0) {
                errors.push(CalcError::invalid_input(
                    "voltage_drop_limit_pct",
                    limit.to_string(),
                    "Voltage-drop limit must be in (0, 100] percent",
                ));
            }
        }

        if let Some(standard) = standard {
            let rating = self.rating(standard, settings);
            if !TemperatureRating::supported_by(standard.family()).contains(&rating) {
                errors.push(CalcError::invalid_input(
                    "temperature_rating",
                    rating.to_string(),
                    format!("{standard} tables have no {rating} column"),
                ));
            }
            if self.material == ConductorMaterial::Aluminum
                && standard.family() == TableFamily::LowVoltageDc
            {
                errors.push(CalcError::invalid_input(
                    "material",
                    "aluminum",
                    format!("{standard} wiring must be copper"),
                ));
            }
        }
        errors
    }

    /// Temperature column in effect
    pub fn rating(&self, standard: Standard, settings: &DesignSettings) -> TemperatureRating {
        self.temperature_rating
            .unwrap_or_else(|| settings.default_temperature_rating(standard))
    }
}

/// Conductor sizing results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConductorResult {
    pub label: String,
    pub standard: Standard,
    pub unit_system: UnitSystem,

    // === Selection ===
    /// Selected conductor size
    pub size: WireSize,
    /// Conductor cross-section (mm²)
    pub area_mm2: f64,
    pub temperature_rating: TemperatureRating,
    pub installation_method: InstallationMethod,
    pub material: ConductorMaterial,

    // === Current ===
    /// Actual load current (A)
    pub load_current_a: f64,
    /// Multiplier from load current to design current
    pub current_factor: f64,
    /// Current the conductor must carry after derating (A)
    pub design_current_a: f64,
    /// Table ampacity of the selected size (A)
    pub base_ampacity_a: f64,
    /// Base ampacity × composed derating (A)
    pub adjusted_ampacity_a: f64,
    pub derating: DeratingFactors,

    // === Voltage Drop ===
    pub voltage_drop_v: f64,
    pub voltage_drop_pct: f64,
    pub voltage_drop_limit_pct: f64,

    // === Run ===
    /// Length as supplied
    pub length: f64,
    pub length_unit: LengthUnit,
    /// Length normalized to metres
    pub length_m: f64,

    pub compliance: ComplianceReport,
    pub code_references: Vec<String>,
}

impl ConductorResult {
    pub fn is_compliant(&self) -> bool {
        self.compliance.compliant
    }
}

// ============================================================================
// Selection
// ============================================================================

/// One row of a standard's conductor table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub size: WireSize,
    pub base_ampacity_a: f64,
    pub resistance_ohm_per_m: f64,
}

/// Constraints every candidate is tested against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionCriteria {
    pub design_current_a: f64,
    pub derating: f64,
    pub load_current_a: f64,
    pub length_m: f64,
    pub voltage_v: f64,
    pub drop_multiplier: f64,
    /// Multiplier on the table (copper) resistance
    pub resistance_factor: f64,
    pub voltage_drop_limit_pct: f64,
}

impl SelectionCriteria {
    /// Voltage drop in volts across a candidate
    pub fn voltage_drop_v(&self, candidate: &Candidate) -> f64 {
        self.drop_multiplier
            * self.load_current_a
            * self.length_m
            * candidate.resistance_ohm_per_m
            * self.resistance_factor
    }
}

/// A candidate that met both constraints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub candidate: Candidate,
    pub adjusted_ampacity_a: f64,
    pub voltage_drop_v: f64,
    pub voltage_drop_pct: f64,
}

/// Smallest candidate meeting ampacity and voltage drop.
///
/// `candidates` must be ascending by size.
pub fn select_smallest(candidates: &[Candidate], criteria: &SelectionCriteria) -> CalcResult<Selection> {
    let evaluate = |candidate: &Candidate| {
        let adjusted_ampacity_a = candidate.base_ampacity_a * criteria.derating;
        let voltage_drop_v = criteria.voltage_drop_v(candidate);
        Selection {
            candidate: *candidate,
            adjusted_ampacity_a,
            voltage_drop_v,
            voltage_drop_pct: voltage_drop_v / criteria.voltage_v * 100.0,
        }
    };
    let ampacity_ok = |s: &Selection| s.adjusted_ampacity_a >= criteria.design_current_a;
    let drop_ok = |s: &Selection| s.voltage_drop_pct <= criteria.voltage_drop_limit_pct;

    if let Some(selection) = candidates
        .iter()
        .map(evaluate)
        .find(|s| ampacity_ok(s) && drop_ok(s))
    {
        return Ok(selection);
    }

    let largest = candidates
        .last()
        .ok_or_else(|| CalcError::table_lookup("conductor table", "any size"))?;
    let at_largest = evaluate(largest);
    let mut failed_constraints = Vec::new();
    if !ampacity_ok(&at_largest) {
        failed_constraints.push("ampacity".to_string());
    }
    if !drop_ok(&at_largest) {
        failed_constraints.push("voltage drop".to_string());
    }
    Err(CalcError::NoSuitableConductor {
        largest_checked: largest.size.label(),
        failed_constraints,
        required_current_a: criteria.design_current_a,
    })
}

/// The standard's conductor table as candidates, ascending
pub fn candidates(
    standard: Standard,
    rating: TemperatureRating,
    method: InstallationMethod,
    loaded_conductors: u32,
) -> Vec<Candidate> {
    match standard.family() {
        TableFamily::Nec => nec::AMPACITY_310_16
            .iter()
            .filter_map(|row| {
                Some(Candidate {
                    size: row.size.into(),
                    base_ampacity_a: row.ampacity(rating)?,
                    resistance_ohm_per_m: nec::resistance_ohm_per_m(row.size)?,
                })
            })
            .collect(),
        TableFamily::Iec => iec::AMPACITY
            .iter()
            .filter_map(|row| {
                Some(Candidate {
                    size: row.size.into(),
                    base_ampacity_a: row.ampacity(rating, method, loaded_conductors)?,
                    resistance_ohm_per_m: iec::resistance_ohm_per_m(row.size)?,
                })
            })
            .collect(),
        TableFamily::LowVoltageDc => dc::AMPACITY_105C
            .iter()
            .filter_map(|&(size, ampacity)| {
                Some(Candidate {
                    size: size.into(),
                    base_ampacity_a: ampacity,
                    resistance_ohm_per_m: dc::resistance_ohm_per_m(size)?,
                })
            })
            .collect(),
    }
}

fn code_references(standard: Standard) -> Vec<String> {
    let refs: &[&str] = match standard {
        Standard::Nec => &[
            code_ref::NEC_AMPACITY,
            code_ref::NEC_AMBIENT,
            code_ref::NEC_GROUPING,
            code_ref::NEC_CONTINUOUS,
            code_ref::NEC_RESISTANCE,
        ],
        Standard::DcSolar => &[
            code_ref::NEC_AMPACITY,
            code_ref::NEC_AMBIENT,
            code_ref::NEC_PV_CURRENT,
            code_ref::NEC_RESISTANCE,
        ],
        Standard::Iec => &[
            code_ref::IEC_AMPACITY,
            code_ref::IEC_AMBIENT,
            code_ref::IEC_GROUPING,
            code_ref::IEC_RESISTANCE,
        ],
        Standard::DcAutomotive | Standard::DcMarine => &[
            code_ref::DC_AMPACITY,
            code_ref::NEC_AMBIENT,
            code_ref::NEC_RESISTANCE,
        ],
    };
    refs.iter().map(|r| r.to_string()).collect()
}

/// Size a conductor for an already-validated input.
pub(crate) fn calculate(
    input: &ConductorInput,
    standard: Standard,
    settings: &DesignSettings,
) -> CalcResult<ConductorResult> {
    let system = input.load.voltage_system.effective_for(standard);
    let load_current_a = input
        .load
        .current_a(system)
        .ok_or_else(|| CalcError::missing_field("load_current_a or load_power_w"))?;
    let voltage_v = input
        .load
        .voltage_v
        .ok_or_else(|| CalcError::missing_field("voltage_v"))?;
    let length = input.length.ok_or_else(|| CalcError::missing_field("length"))?;
    let length_unit = input.length_unit.unwrap_or_else(|| standard.length_unit());
    let length_m = length_unit.to_meters(length).value();

    let rating = input.rating(standard, settings);
    let method = input.environment.method_for(standard);
    let voltage_drop_limit_pct = input
        .voltage_drop_limit_pct
        .unwrap_or_else(|| settings.voltage_drop_limit_pct(standard));

    let current_factor = match standard {
        Standard::DcSolar => PV_CURRENT_MULTIPLIER,
        _ => input.environment.duty_cycle.conductor_factor(),
    };
    let design_current_a = load_current_a * current_factor;

    let derating = derating::compose(&DeratingConditions {
        family: standard.family(),
        ambient_c: input.environment.ambient_c(),
        rating,
        grouped_conductors: input.environment.grouped_conductors,
        loaded_per_circuit: system.loaded_conductors(),
        method,
        material: input.material,
    });

    let criteria = SelectionCriteria {
        design_current_a,
        derating: derating.composed,
        load_current_a,
        length_m,
        voltage_v,
        drop_multiplier: system.drop_multiplier(),
        resistance_factor: input.material.resistance_factor(),
        voltage_drop_limit_pct,
    };
    let table = candidates(standard, rating, method, system.loaded_conductors());
    let selection = select_smallest(&table, &criteria)?;

    tracing::debug!(
        %standard,
        size = %selection.candidate.size,
        design_current_a,
        voltage_drop_pct = selection.voltage_drop_pct,
        "conductor selected"
    );

    let compliance = ComplianceEvaluator::new()
        .check(
            ComplianceCheck::Ampacity,
            selection.adjusted_ampacity_a >= design_current_a,
            format!(
                "{:.1} A adjusted ampacity below {design_current_a:.1} A",
                selection.adjusted_ampacity_a
            ),
        )
        .check(
            ComplianceCheck::VoltageDrop,
            selection.voltage_drop_pct <= voltage_drop_limit_pct,
            format!(
                "{:.2}% exceeds {voltage_drop_limit_pct}%",
                selection.voltage_drop_pct
            ),
        )
        .check(
            ComplianceCheck::Temperature,
            derating.temperature_in_table,
            format!(
                "{:.1}°C ambient is outside the {rating} correction table",
                derating.effective_ambient_c
            ),
        )
        .finish();

    Ok(ConductorResult {
        label: input.label.clone(),
        standard,
        unit_system: standard.unit_system(),
        size: selection.candidate.size,
        area_mm2: selection.candidate.size.area_mm2(),
        temperature_rating: rating,
        installation_method: method,
        material: input.material,
        load_current_a,
        current_factor,
        design_current_a,
        base_ampacity_a: selection.candidate.base_ampacity_a,
        adjusted_ampacity_a: selection.adjusted_ampacity_a,
        derating,
        voltage_drop_v: selection.voltage_drop_v,
        voltage_drop_pct: selection.voltage_drop_pct,
        voltage_drop_limit_pct,
        length,
        length_unit,
        length_m,
        compliance,
        code_references: code_references(standard),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::VoltageSystem;
    use crate::standards::{AwgSize, MetricSize};
    use approx::assert_relative_eq;

    fn nec_input(current: f64, length_ft: f64) -> ConductorInput {
        ConductorInput {
            label: "Test".to_string(),
            standard: Some("NEC".to_string()),
            load: LoadInput::current(current, 120.0, VoltageSystem::SinglePhase),
            length: Some(length_ft),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_smallest_takes_first_passing() {
        let table = candidates(
            Standard::Nec,
            TemperatureRating::C75,
            InstallationMethod::Conduit,
            2,
        );
        let criteria = SelectionCriteria {
            design_current_a: 30.0,
            derating: 1.0,
            load_current_a: 24.0,
            length_m: 1.0,
            voltage_v: 120.0,
            drop_multiplier: 2.0,
            resistance_factor: 1.0,
            voltage_drop_limit_pct: 5.0,
        };
        let selection = select_smallest(&table, &criteria).unwrap();
        assert_eq!(selection.candidate.size, WireSize::Awg(AwgSize::Awg10));
    }

    #[test]
    fn test_voltage_drop_can_govern() {
        let settings = DesignSettings::default();
        let short = calculate(&nec_input(20.0, 25.0), Standard::Nec, &settings).unwrap();
        let long = calculate(&nec_input(20.0, 250.0), Standard::Nec, &settings).unwrap();
        assert_eq!(short.size, WireSize::Awg(AwgSize::Awg12));
        assert!(long.size.area_mm2() > short.size.area_mm2());
        assert!(long.voltage_drop_pct <= 5.0);
    }

    #[test]
    fn test_no_suitable_conductor_reports_failures() {
        let settings = DesignSettings::default();
        let err = calculate(&nec_input(900.0, 50.0), Standard::Nec, &settings).unwrap_err();
        match err {
            CalcError::NoSuitableConductor {
                largest_checked,
                failed_constraints,
                ..
            } => {
                assert_eq!(largest_checked, "500 kcmil");
                assert!(failed_constraints.contains(&"ampacity".to_string()));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_iec_three_phase_uses_three_loaded_columns() {
        let input = ConductorInput {
            standard: Some("IEC".to_string()),
            load: LoadInput::current(16.0, 400.0, VoltageSystem::ThreePhase),
            length: Some(10.0),
            ..Default::default()
        };
        let result = calculate(&input, Standard::Iec, &DesignSettings::default()).unwrap();
        // 20 A design current: 2.5 mm² B1 three-loaded is 21 A
        assert_eq!(result.size, WireSize::Metric(MetricSize::Mm2_5));
        assert_eq!(result.base_ampacity_a, 21.0);
        assert_relative_eq!(
            result.voltage_drop_v,
            3f64.sqrt() * 16.0 * 10.0 * 0.00741,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_aluminum_upsizes() {
        let settings = DesignSettings::default();
        let mut input = nec_input(40.0, 20.0);
        let copper = calculate(&input, Standard::Nec, &settings).unwrap();
        input.material = ConductorMaterial::Aluminum;
        let aluminum = calculate(&input, Standard::Nec, &settings).unwrap();
        assert!(aluminum.size.area_mm2() > copper.size.area_mm2());
    }

    #[test]
    fn test_solar_multiplier() {
        let input = ConductorInput {
            standard: Some("DC-SOLAR".to_string()),
            load: LoadInput::current(10.0, 48.0, VoltageSystem::Dc),
            length: Some(10.0),
            ..Default::default()
        };
        let result = calculate(&input, Standard::DcSolar, &DesignSettings::default()).unwrap();
        assert_relative_eq!(result.design_current_a, 15.6);
        assert_eq!(result.temperature_rating, TemperatureRating::C90);
    }

    #[test]
    fn test_validation_collects_all() {
        let input = ConductorInput {
            standard: Some("DC-MARINE".to_string()),
            material: ConductorMaterial::Aluminum,
            temperature_rating: Some(TemperatureRating::C60),
            ..Default::default()
        };
        let errors = input.validation_errors(Some(Standard::DcMarine), &DesignSettings::default());
        // load, voltage, length, rating, material
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_hot_ambient_flags_temperature() {
        let mut input = nec_input(10.0, 20.0);
        input.environment.ambient_temp = 80.0;
        let result = calculate(&input, Standard::Nec, &DesignSettings::default()).unwrap();
        assert_eq!(result.compliance.flags.temperature, Some(false));
        assert!(!result.is_compliant());
        assert_eq!(result.derating.fell_open.len(), 1);
    }
}
