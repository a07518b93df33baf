//! # Breaker and Fuse Sizing
//!
//! Selects the smallest catalog rating at or above the adjusted design
//! current.
//!
//! ## Adjusted Current
//!
//! ```text
//! I_adj = I_load × F_safety × F_environment × F_temperature
//! ```
//!
//! | Factor        | Value                                         |
//! |---------------|-----------------------------------------------|
//! | F_safety      | continuous 1.25, intermittent 1.15            |
//! | F_environment | marine 1.10, outdoor 1.05, otherwise 1.00     |
//! | F_temperature | 1.10 above 40°C ambient, otherwise 1.00       |
//!
//! ## Sub-rules
//!
//! - **Automotive fuses**: automotive, marine and LED loads on a 12, 24 or
//!   48 V system with `I_adj ≤ 120 A` take an ATO/ATC blade or MAXI fuse,
//!   whatever the requested standard.
//!   These fuses are rated 32 V DC, so a 48 V substitution is flagged on
//!   the application check.
//! - **Solar**: the current is the array short-circuit current times 1.56
//!   (NEC 690.8, DC-solar) or 1.375 (IEC). Parallel strings add panel
//!   currents, series strings do not.
//!
//! ## Catalogs
//!
//! NEC and DC-solar use NEC 240.6(A); IEC uses IEC 60898-1/60947-2;
//! DC-automotive and DC-marine circuits outside the automotive rule use ANL
//! fuses.

use serde::{Deserialize, Serialize};

use crate::circuit::{ApplicationType, EnvironmentInput, LoadInput};
use crate::compliance::{ComplianceCheck, ComplianceEvaluator, ComplianceReport};
use crate::errors::{CalcError, CalcResult};
use crate::standards::dc::{self, AutomotiveFuse};
use crate::standards::{code_ref, iec, nec, Standard, TableFamily};

/// Ambient above which the temperature factor applies (°C)
pub const HOT_AMBIENT_C: f64 = 40.0;

/// Temperature factor for hot ambients
pub const HOT_AMBIENT_FACTOR: f64 = 1.10;

/// PV multiplier for NEC-based standards (690.8(A) × 690.8(B))
pub const PV_MULTIPLIER_NEC: f64 = 1.56;

/// PV multiplier for IEC 62548
pub const PV_MULTIPLIER_IEC: f64 = 1.375;

/// How the panels of a solar array are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StringConfiguration {
    /// Panel currents add
    #[default]
    Parallel,
    /// Panel current holds
    Series,
}

/// Input parameters for sizing a breaker or fuse.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Roof array",
///   "standard": "NEC",
///   "application": "solar",
///   "panel_isc_a": 9.5,
///   "number_of_panels": 2,
///   "string_configuration": "parallel"
/// }
/// ```
///
/// When `standard` is absent the settings' default breaker standard (IEC)
/// is used and the result says so.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BreakerInput {
    #[serde(default)]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,

    #[serde(flatten)]
    pub load: LoadInput,

    #[serde(default)]
    pub application: ApplicationType,

    #[serde(flatten)]
    pub environment: EnvironmentInput,

    /// Total array short-circuit current (A)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_circuit_current_a: Option<f64>,

    /// Short-circuit current of one panel (A)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_isc_a: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_panels: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_configuration: Option<StringConfiguration>,

    /// Ampacity of the protected conductor, enables the coordination check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductor_ampacity_a: Option<f64>,
}

impl BreakerInput {
    pub fn is_solar(&self) -> bool {
        self.application == ApplicationType::Solar
    }

    /// Every validation problem, given the already-resolved standard
    pub fn validation_errors(&self, standard: Option<Standard>) -> Vec<CalcError> {
        let mut errors = self.load.validation_errors(standard, !self.is_solar());
        errors.extend(self.environment.validation_errors(standard));

        if self.is_solar() {
            let panel_data = self.panel_isc_a.is_some() || self.number_of_panels.is_some();
            match (self.short_circuit_current_a, panel_data) {
                (Some(_), true) => errors.push(CalcError::invalid_input(
                    "short_circuit_current_a",
                    "with panel_isc_a/number_of_panels",
                    "Give the array short-circuit current or the per-panel data, not both",
                )),
                (None, false) => errors.push(CalcError::missing_field(
                    "short_circuit_current_a or panel_isc_a with number_of_panels",
                )),
                (None, true) => {
                    if self.panel_isc_a.is_none() {
                        errors.push(CalcError::missing_field("panel_isc_a"));
                    }
                    if self.number_of_panels.is_none() {
                        errors.push(CalcError::missing_field("number_of_panels"));
                    }
                }
                (Some(_), false) => {}
            }
            for (field, value) in [
                ("short_circuit_current_a", self.short_circuit_current_a),
                ("panel_isc_a", self.panel_isc_a),
            ] {
                if let Some(value) = value {
                    if !(value.is_finite() && value > 0.0) {
                        errors.push(CalcError::invalid_input(
                            field,
                            value.to_string(),
                            "Short-circuit current must be positive",
                        ));
                    }
                }
            }
            if self.number_of_panels == Some(0) {
                errors.push(CalcError::invalid_input(
                    "number_of_panels",
                    "0",
                    "At least one panel is required",
                ));
            }
            if let Some(value) = self.load.load_current_a.map(|a| format!("{a} A")).or_else(|| {
                self.load.load_power_w.map(|w| format!("{w} W"))
            }) {
                errors.push(CalcError::invalid_input(
                    "load_current_a/load_power_w",
                    value,
                    "Solar circuits are sized from short-circuit current; omit the load",
                ));
            }
        }

        if let Some(ampacity) = self.conductor_ampacity_a {
            if !(ampacity.is_finite() && ampacity > 0.0) {
                errors.push(CalcError::invalid_input(
                    "conductor_ampacity_a",
                    ampacity.to_string(),
                    "Conductor ampacity must be positive",
                ));
            }
        }
        errors
    }
}

/// Kind of protective device selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectionDevice {
    CircuitBreaker,
    BladeFuse,
    MaxiFuse,
    AnlFuse,
}

impl ProtectionDevice {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProtectionDevice::CircuitBreaker => "Circuit breaker",
            ProtectionDevice::BladeFuse => AutomotiveFuse::Blade.display_name(),
            ProtectionDevice::MaxiFuse => AutomotiveFuse::Maxi.display_name(),
            ProtectionDevice::AnlFuse => "ANL fuse",
        }
    }

    /// Highest DC system voltage the device is rated to interrupt, when limited.
    ///
    /// SAE J2077 blade and MAXI fuses carry a 32 V DC rating.
    pub fn max_voltage_dc(&self) -> Option<f64> {
        match self {
            ProtectionDevice::BladeFuse | ProtectionDevice::MaxiFuse => Some(dc::AUTOMOTIVE_FUSE_MAX_V),
            ProtectionDevice::CircuitBreaker | ProtectionDevice::AnlFuse => None,
        }
    }

    /// Rated operating ambient range (°C)
    pub fn operating_range_c(&self) -> (f64, f64) {
        match self {
            ProtectionDevice::CircuitBreaker => (-25.0, 55.0),
            ProtectionDevice::BladeFuse | ProtectionDevice::MaxiFuse | ProtectionDevice::AnlFuse => {
                (-40.0, 85.0)
            }
        }
    }
}

impl From<AutomotiveFuse> for ProtectionDevice {
    fn from(fuse: AutomotiveFuse) -> Self {
        match fuse {
            AutomotiveFuse::Blade => ProtectionDevice::BladeFuse,
            AutomotiveFuse::Maxi => ProtectionDevice::MaxiFuse,
        }
    }
}

impl std::fmt::Display for ProtectionDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How the solar current was derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSummary {
    /// Array short-circuit current (A)
    pub total_isc_a: f64,
    pub multiplier: f64,
    pub string_configuration: StringConfiguration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_panels: Option<u32>,
}

/// Breaker/fuse sizing results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakerResult {
    pub label: String,
    /// Standard the request resolved to
    pub standard: Standard,
    /// True when the request named no standard and the default was used
    pub standard_defaulted: bool,

    // === Selection ===
    pub device: ProtectionDevice,
    /// Catalog the rating came from
    pub catalog: String,
    /// Selected rating (A)
    pub rating_a: f64,
    /// The automotive fuse catalog replaced the standard's catalog
    pub automotive_substitution: bool,

    // === Current ===
    /// Load current, or array short-circuit current for solar (A)
    pub base_current_a: f64,
    pub safety_factor: f64,
    pub environment_factor: f64,
    pub temperature_factor: f64,
    /// Current the rating must cover (A)
    pub adjusted_current_a: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub solar: Option<SolarSummary>,

    pub compliance: ComplianceReport,
    pub code_references: Vec<String>,
}

impl BreakerResult {
    pub fn is_compliant(&self) -> bool {
        self.compliance.compliant
    }
}

/// A discrete ratings catalog
#[derive(Debug, Clone, Copy)]
struct Catalog {
    name: &'static str,
    device: ProtectionDevice,
    ratings_a: &'static [f64],
}

impl Catalog {
    fn for_standard(standard: Standard) -> Catalog {
        match standard.family() {
            TableFamily::Nec => Catalog {
                name: code_ref::NEC_OCPD_RATINGS,
                device: ProtectionDevice::CircuitBreaker,
                ratings_a: nec::BREAKER_RATINGS_A,
            },
            TableFamily::Iec => Catalog {
                name: code_ref::IEC_RATINGS,
                device: ProtectionDevice::CircuitBreaker,
                ratings_a: iec::BREAKER_RATINGS_A,
            },
            TableFamily::LowVoltageDc => Catalog {
                name: code_ref::DC_FUSES,
                device: ProtectionDevice::AnlFuse,
                ratings_a: dc::ANL_FUSES_A,
            },
        }
    }

    fn select(&self, current_a: f64) -> CalcResult<f64> {
        self.ratings_a
            .iter()
            .copied()
            .find(|&rating| rating >= current_a)
            .ok_or_else(|| CalcError::NoSuitableProtection {
                catalog: self.name.to_string(),
                required_current_a: current_a,
                largest_rating_a: self.ratings_a.last().copied().unwrap_or(0.0),
            })
    }
}

/// True when the system voltage is one of the automotive nominal voltages
pub fn is_automotive_voltage(voltage_v: f64) -> bool {
    dc::AUTOMOTIVE_VOLTAGES
        .iter()
        .any(|nominal| (nominal - voltage_v).abs() < 1e-6)
}

/// Whether the automotive fuse catalog replaces the standard's catalog
pub fn automotive_substitution_applies(
    application: ApplicationType,
    voltage_v: Option<f64>,
    adjusted_current_a: f64,
) -> bool {
    application.uses_automotive_fuses()
        && voltage_v.is_some_and(is_automotive_voltage)
        && adjusted_current_a <= dc::AUTOMOTIVE_CURRENT_CEILING_A
}

/// Coordination with the protected conductor (NEC 240.4(B), IEC 433.1)
pub fn coordinates_with_conductor(standard: Standard, rating_a: f64, ampacity_a: f64) -> bool {
    if rating_a <= ampacity_a {
        return true;
    }
    match standard.family() {
        TableFamily::Nec => {
            let next_standard = nec::BREAKER_RATINGS_A
                .iter()
                .copied()
                .find(|&r| r >= ampacity_a);
            rating_a <= nec::NEXT_SIZE_UP_LIMIT_A && next_standard == Some(rating_a)
        }
        TableFamily::Iec | TableFamily::LowVoltageDc => false,
    }
}

fn solar_summary(input: &BreakerInput, standard: Standard) -> CalcResult<SolarSummary> {
    let string_configuration = input.string_configuration.unwrap_or_default();
    let total_isc_a = match input.short_circuit_current_a {
        Some(total) => total,
        None => {
            let panel_isc = input
                .panel_isc_a
                .ok_or_else(|| CalcError::missing_field("panel_isc_a"))?;
            let panels = input
                .number_of_panels
                .ok_or_else(|| CalcError::missing_field("number_of_panels"))?;
            match string_configuration {
                StringConfiguration::Parallel => panel_isc * f64::from(panels),
                StringConfiguration::Series => panel_isc,
            }
        }
    };
    let multiplier = match standard.family() {
        TableFamily::Iec => PV_MULTIPLIER_IEC,
        TableFamily::Nec | TableFamily::LowVoltageDc => PV_MULTIPLIER_NEC,
    };
    Ok(SolarSummary {
        total_isc_a,
        multiplier,
        string_configuration,
        number_of_panels: input.number_of_panels,
    })
}

/// Size a breaker or fuse for an already-validated input.
pub(crate) fn calculate(
    input: &BreakerInput,
    standard: Standard,
    standard_defaulted: bool,
) -> CalcResult<BreakerResult> {
    let ambient_c = input.environment.ambient_c();

    let (base_current_a, safety_factor, environment_factor, temperature_factor, solar) =
        if input.is_solar() {
            let summary = solar_summary(input, standard)?;
            (summary.total_isc_a, summary.multiplier, 1.0, 1.0, Some(summary))
        } else {
            let system = input.load.voltage_system.effective_for(standard);
            let current = input
                .load
                .current_a(system)
                .ok_or_else(|| CalcError::missing_field("load_current_a or load_power_w"))?;
            let temperature_factor = if ambient_c > HOT_AMBIENT_C {
                HOT_AMBIENT_FACTOR
            } else {
                1.0
            };
            (
                current,
                input.environment.duty_cycle.safety_factor(),
                input.application.environment_factor(),
                temperature_factor,
                None,
            )
        };
    let adjusted_current_a = base_current_a * safety_factor * environment_factor * temperature_factor;

    let automotive_substitution =
        automotive_substitution_applies(input.application, input.load.voltage_v, adjusted_current_a);

    let (device, catalog, rating_a) = if automotive_substitution {
        let (fuse, rating) = dc::automotive_fuse(adjusted_current_a).ok_or_else(|| {
            CalcError::NoSuitableProtection {
                catalog: code_ref::AUTOMOTIVE_FUSES.to_string(),
                required_current_a: adjusted_current_a,
                largest_rating_a: dc::AUTOMOTIVE_CURRENT_CEILING_A,
            }
        })?;
        tracing::debug!(%standard, rating, "automotive fuse substituted");
        (ProtectionDevice::from(fuse), code_ref::AUTOMOTIVE_FUSES, rating)
    } else {
        let catalog = Catalog::for_standard(standard);
        let rating = catalog.select(adjusted_current_a)?;
        (catalog.device, catalog.name, rating)
    };

    tracing::debug!(
        %standard,
        standard_defaulted,
        adjusted_current_a,
        rating_a,
        "protection selected"
    );

    let (min_c, max_c) = device.operating_range_c();
    // only the automotive fuse catalog carries a voltage limit of its own
    let voltage_rating = match (automotive_substitution, device.max_voltage_dc(), input.load.voltage_v) {
        (true, Some(max_v), Some(system_v)) => Some((max_v, system_v)),
        _ => None,
    };
    let compliance = ComplianceEvaluator::new()
        .check(
            ComplianceCheck::Ampacity,
            rating_a >= adjusted_current_a,
            format!("{rating_a} A rating below {adjusted_current_a:.2} A"),
        )
        .check(
            ComplianceCheck::Temperature,
            (min_c..=max_c).contains(&ambient_c),
            format!("{ambient_c}°C is outside the {device} range {min_c}..{max_c}°C"),
        )
        .check_if(
            voltage_rating.is_some(),
            ComplianceCheck::Application,
            voltage_rating.is_some_and(|(max_v, system_v)| system_v <= max_v),
            format!(
                "{device} is rated {} V DC, below the {} V system",
                voltage_rating.map_or(0.0, |(max_v, _)| max_v),
                voltage_rating.map_or(0.0, |(_, system_v)| system_v),
            ),
        );
    let compliance = match input.conductor_ampacity_a {
        Some(ampacity) => compliance.check(
            ComplianceCheck::Coordination,
            coordinates_with_conductor(standard, rating_a, ampacity),
            format!("{rating_a} A device exceeds the {ampacity} A conductor"),
        ),
        None => compliance,
    }
    .finish();

    let mut code_references = vec![catalog.to_string()];
    if solar.is_some() {
        code_references.push(
            match standard.family() {
                TableFamily::Iec => code_ref::IEC_PV_CURRENT,
                _ => code_ref::NEC_PV_CURRENT,
            }
            .to_string(),
        );
    }
    if input.conductor_ampacity_a.is_some() {
        code_references.push(
            match standard.family() {
                TableFamily::Iec => code_ref::IEC_COORDINATION,
                _ => code_ref::NEC_CONDUCTOR_PROTECTION,
            }
            .to_string(),
        );
    }

    Ok(BreakerResult {
        label: input.label.clone(),
        standard,
        standard_defaulted,
        device,
        catalog: catalog.to_string(),
        rating_a,
        automotive_substitution,
        base_current_a,
        safety_factor,
        environment_factor,
        temperature_factor,
        adjusted_current_a,
        solar,
        compliance,
        code_references,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{DutyCycle, VoltageSystem};
    use approx::assert_relative_eq;

    fn load_input(current: f64, voltage: f64) -> BreakerInput {
        BreakerInput {
            load: LoadInput::current(current, voltage, VoltageSystem::SinglePhase),
            ..Default::default()
        }
    }

    #[test]
    fn test_adjusted_current_factors() {
        let mut input = load_input(40.0, 230.0);
        input.application = ApplicationType::Marine;
        input.environment.ambient_temp = 45.0;
        let result = calculate(&input, Standard::Iec, false).unwrap();
        assert_relative_eq!(result.adjusted_current_a, 40.0 * 1.25 * 1.10 * 1.10, epsilon = 1e-9);
        assert_eq!(result.rating_a, 63.0);
        assert!(!result.automotive_substitution);
    }

    #[test]
    fn test_intermittent_safety_factor() {
        let mut input = load_input(20.0, 120.0);
        input.environment.duty_cycle = DutyCycle::Intermittent;
        let result = calculate(&input, Standard::Nec, false).unwrap();
        assert_relative_eq!(result.adjusted_current_a, 23.0, epsilon = 1e-9);
        assert_eq!(result.rating_a, 25.0);
    }

    #[test]
    fn test_automotive_substitution_boundaries() {
        assert!(automotive_substitution_applies(ApplicationType::Led, Some(24.0), 120.0));
        assert!(!automotive_substitution_applies(ApplicationType::Led, Some(24.0), 120.5));
        assert!(!automotive_substitution_applies(ApplicationType::Automotive, Some(36.0), 10.0));
        assert!(!automotive_substitution_applies(ApplicationType::General, Some(12.0), 10.0));
        assert!(!automotive_substitution_applies(ApplicationType::Marine, None, 10.0));
    }

    #[test]
    fn test_automotive_fuse_voltage_rating() {
        let mut input = load_input(20.0, 12.0);
        input.application = ApplicationType::Automotive;
        let result = calculate(&input, Standard::DcAutomotive, false).unwrap();
        assert_eq!(result.compliance.flags.application, Some(true));
        assert!(result.is_compliant());

        // 48 V qualifies for substitution but exceeds the 32 V fuse rating
        let mut input = load_input(20.0, 48.0);
        input.application = ApplicationType::Led;
        let result = calculate(&input, Standard::DcAutomotive, false).unwrap();
        assert!(result.automotive_substitution);
        assert_eq!(result.compliance.flags.application, Some(false));
        assert!(!result.is_compliant());
        assert!(result.compliance.issues[0].contains("32 V"));
    }

    #[test]
    fn test_application_flag_absent_without_substitution() {
        let result = calculate(&load_input(20.0, 120.0), Standard::Nec, false).unwrap();
        assert_eq!(result.compliance.flags.application, None);
    }

    #[test]
    fn test_large_automotive_load_uses_standard_catalog() {
        let mut input = load_input(150.0, 12.0);
        input.application = ApplicationType::Automotive;
        let result = calculate(&input, Standard::DcAutomotive, false).unwrap();
        assert!(!result.automotive_substitution);
        assert_eq!(result.device, ProtectionDevice::AnlFuse);
        assert_eq!(result.rating_a, 200.0);
    }

    #[test]
    fn test_series_string_holds_current() {
        let input = BreakerInput {
            application: ApplicationType::Solar,
            panel_isc_a: Some(9.5),
            number_of_panels: Some(2),
            string_configuration: Some(StringConfiguration::Series),
            ..Default::default()
        };
        let result = calculate(&input, Standard::Nec, false).unwrap();
        assert_relative_eq!(result.adjusted_current_a, 14.82, epsilon = 1e-9);
        assert_eq!(result.rating_a, 15.0);
    }

    #[test]
    fn test_iec_solar_multiplier() {
        let input = BreakerInput {
            application: ApplicationType::Solar,
            short_circuit_current_a: Some(10.0),
            ..Default::default()
        };
        let result = calculate(&input, Standard::Iec, false).unwrap();
        assert_relative_eq!(result.adjusted_current_a, 13.75, epsilon = 1e-9);
        assert_eq!(result.rating_a, 16.0);
        // the PV multiplier is already in the rating; no separate rule applies
        assert_eq!(result.compliance.flags.application, None);
    }

    #[test]
    fn test_solar_without_isc_fails_validation() {
        let input = BreakerInput {
            application: ApplicationType::Solar,
            ..Default::default()
        };
        let errors = input.validation_errors(Some(Standard::Nec));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_solar_rejects_load_fields() {
        let mut input = BreakerInput {
            application: ApplicationType::Solar,
            short_circuit_current_a: Some(19.0),
            load: LoadInput::current(40.0, 48.0, VoltageSystem::Dc),
            ..Default::default()
        };
        let errors = input.validation_errors(Some(Standard::Nec));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_code(), "INVALID_INPUT");
        assert!(errors[0].to_string().contains("40 A"));

        input.load = LoadInput::power(900.0, 48.0, VoltageSystem::Dc);
        let errors = input.validation_errors(Some(Standard::Nec));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("900 W"));

        // voltage alone is not a load
        input.load = LoadInput {
            voltage_v: Some(48.0),
            ..Default::default()
        };
        assert!(input.validation_errors(Some(Standard::Nec)).is_empty());
    }

    #[test]
    fn test_no_suitable_protection() {
        let err = calculate(&load_input(6000.0, 480.0), Standard::Nec, false).unwrap_err();
        assert_eq!(err.error_code(), "NO_SUITABLE_PROTECTION");
    }

    #[test]
    fn test_coordination() {
        // 240.4(B): 65 A conductor may take the next standard size, 70 A
        assert!(coordinates_with_conductor(Standard::Nec, 70.0, 65.0));
        assert!(!coordinates_with_conductor(Standard::Nec, 80.0, 65.0));
        assert!(!coordinates_with_conductor(Standard::Iec, 25.0, 24.0));
        assert!(coordinates_with_conductor(Standard::Iec, 20.0, 24.0));

        let mut input = load_input(20.0, 120.0);
        input.conductor_ampacity_a = Some(20.0);
        let result = calculate(&input, Standard::Nec, false).unwrap();
        assert_eq!(result.compliance.flags.coordination, Some(false));
        assert!(!result.is_compliant());
    }

    #[test]
    fn test_breaker_temperature_range() {
        let mut input = load_input(10.0, 230.0);
        input.environment.ambient_temp = 60.0;
        let result = calculate(&input, Standard::Iec, false).unwrap();
        assert_eq!(result.compliance.flags.temperature, Some(false));
    }
}
