//! # Electrical Standards
//!
//! Standard identifiers, the keys the standards tables are indexed by, and
//! the static tables themselves (one submodule per table family).
//!
//! ## Supported Standards
//!
//! | Identifier      | Table family    | Units    |
//! |-----------------|-----------------|----------|
//! | `NEC`           | NEC             | imperial |
//! | `IEC`           | IEC             | metric   |
//! | `DC-AUTOMOTIVE` | low-voltage DC  | imperial |
//! | `DC-MARINE`     | low-voltage DC  | imperial |
//! | `DC-SOLAR`      | NEC Article 690 | imperial |
//!
//! Tables are read-only after initialization and shared by every call.

pub mod dc;
pub mod iec;
pub mod nec;
pub mod sizes;

pub use sizes::{AwgSize, MetricSize, WireSize};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::units::LengthUnit;

// ============================================================================
// Code Section References
// ============================================================================

/// Code section references cited on results, for traceability.
pub mod code_ref {
    /// NEC conductor ampacity table
    pub const NEC_AMPACITY: &str = "NEC Table 310.16";
    /// NEC ambient temperature correction
    pub const NEC_AMBIENT: &str = "NEC Table 310.15(B)(1)";
    /// NEC rooftop ambient adder
    pub const NEC_ROOFTOP: &str = "NEC 310.15(B)(2)";
    /// NEC adjustment for more than three current-carrying conductors
    pub const NEC_GROUPING: &str = "NEC Table 310.15(C)(1)";
    /// NEC conductor resistance
    pub const NEC_RESISTANCE: &str = "NEC Chapter 9 Table 8";
    /// NEC continuous load sizing
    pub const NEC_CONTINUOUS: &str = "NEC 210.19(A)(1)";
    /// NEC standard overcurrent device ratings
    pub const NEC_OCPD_RATINGS: &str = "NEC 240.6(A)";
    /// NEC protection of conductors
    pub const NEC_CONDUCTOR_PROTECTION: &str = "NEC 240.4(B)";
    /// NEC PV circuit current multipliers
    pub const NEC_PV_CURRENT: &str = "NEC 690.8";
    /// NEC conduit fill
    pub const NEC_CONDUIT_FILL: &str = "NEC Chapter 9 Tables 1, 4, 5";

    /// IEC current-carrying capacities
    pub const IEC_AMPACITY: &str = "IEC 60364-5-52 Tables B.52.4/B.52.5";
    /// IEC ambient correction
    pub const IEC_AMBIENT: &str = "IEC 60364-5-52 Table B.52.14";
    /// IEC grouping correction
    pub const IEC_GROUPING: &str = "IEC 60364-5-52 Table B.52.17";
    /// IEC conductor resistance
    pub const IEC_RESISTANCE: &str = "IEC 60228 class 2";
    /// IEC breaker ratings
    pub const IEC_RATINGS: &str = "IEC 60898-1 / IEC 60947-2";
    /// IEC coordination between conductor and protective device
    pub const IEC_COORDINATION: &str = "IEC 60364-4-43 433.1";
    /// IEC PV overcurrent protection
    pub const IEC_PV_CURRENT: &str = "IEC 62548";
    /// IEC conduit dimensions
    pub const IEC_CONDUIT: &str = "EN 61386";

    /// Low-voltage DC conductor ampacity
    pub const DC_AMPACITY: &str = "ABYC E-11 Table VI";
    /// Automotive blade and MAXI fuses
    pub const AUTOMOTIVE_FUSES: &str = "SAE J2077";
    /// ANL fuses for low-voltage DC
    pub const DC_FUSES: &str = "ANL fuse catalog";
}

// ============================================================================
// Standard Identifiers
// ============================================================================

/// A supported electrical standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standard {
    /// NFPA 70 National Electrical Code
    #[serde(rename = "NEC")]
    Nec,
    /// IEC 60364 low-voltage installations
    #[serde(rename = "IEC")]
    Iec,
    /// 12/24/48 V automotive DC systems
    #[serde(rename = "DC-AUTOMOTIVE")]
    DcAutomotive,
    /// Low-voltage DC systems on boats (ABYC E-11)
    #[serde(rename = "DC-MARINE")]
    DcMarine,
    /// Photovoltaic DC circuits (NEC Article 690)
    #[serde(rename = "DC-SOLAR")]
    DcSolar,
}

impl Standard {
    /// All supported standards
    pub const ALL: [Standard; 5] = [
        Standard::Nec,
        Standard::Iec,
        Standard::DcAutomotive,
        Standard::DcMarine,
        Standard::DcSolar,
    ];

    /// Canonical identifier
    pub fn id(&self) -> &'static str {
        match self {
            Standard::Nec => "NEC",
            Standard::Iec => "IEC",
            Standard::DcAutomotive => "DC-AUTOMOTIVE",
            Standard::DcMarine => "DC-MARINE",
            Standard::DcSolar => "DC-SOLAR",
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Standard::Nec => "NEC (NFPA 70)",
            Standard::Iec => "IEC 60364",
            Standard::DcAutomotive => "DC automotive",
            Standard::DcMarine => "DC marine (ABYC E-11)",
            Standard::DcSolar => "DC solar (NEC 690)",
        }
    }

    /// Which set of tables this standard sizes against
    pub fn family(&self) -> TableFamily {
        match self {
            Standard::Nec | Standard::DcSolar => TableFamily::Nec,
            Standard::Iec => TableFamily::Iec,
            Standard::DcAutomotive | Standard::DcMarine => TableFamily::LowVoltageDc,
        }
    }

    /// Native unit system
    pub fn unit_system(&self) -> UnitSystem {
        match self.family() {
            TableFamily::Iec => UnitSystem::Metric,
            TableFamily::Nec | TableFamily::LowVoltageDc => UnitSystem::Imperial,
        }
    }

    /// Native unit for circuit lengths
    pub fn length_unit(&self) -> LengthUnit {
        match self.unit_system() {
            UnitSystem::Metric => LengthUnit::Meters,
            UnitSystem::Imperial => LengthUnit::Feet,
        }
    }

    /// True for the DC-application variants
    pub fn is_dc(&self) -> bool {
        matches!(
            self,
            Standard::DcAutomotive | Standard::DcMarine | Standard::DcSolar
        )
    }

    /// Comma-separated list of accepted identifiers, for error messages
    pub fn supported_ids() -> String {
        Standard::ALL
            .iter()
            .map(Standard::id)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Standard {
    type Err = CalcError;

    /// Case-insensitive; `_` and spaces are accepted in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['_', ' '], "-");
        Standard::ALL
            .into_iter()
            .find(|standard| standard.id() == normalized)
            .ok_or_else(|| CalcError::unsupported_standard(s, Standard::supported_ids()))
    }
}

impl std::fmt::Display for Standard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The table set a standard sizes against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableFamily {
    Nec,
    Iec,
    LowVoltageDc,
}

/// Unit system for sizes, lengths and areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Imperial,
    Metric,
}

// ============================================================================
// Table Keys
// ============================================================================

/// Conductor insulation temperature rating (ampacity column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureRating {
    #[serde(rename = "60C")]
    C60,
    #[serde(rename = "70C")]
    C70,
    #[serde(rename = "75C")]
    C75,
    #[serde(rename = "90C")]
    C90,
    #[serde(rename = "105C")]
    C105,
}

impl TemperatureRating {
    /// Maximum conductor temperature in °C
    pub fn celsius(&self) -> f64 {
        match self {
            TemperatureRating::C60 => 60.0,
            TemperatureRating::C70 => 70.0,
            TemperatureRating::C75 => 75.0,
            TemperatureRating::C90 => 90.0,
            TemperatureRating::C105 => 105.0,
        }
    }

    /// Ratings with an ampacity column in this family's tables
    pub fn supported_by(family: TableFamily) -> &'static [TemperatureRating] {
        match family {
            TableFamily::Nec => &[
                TemperatureRating::C60,
                TemperatureRating::C75,
                TemperatureRating::C90,
            ],
            TableFamily::Iec => &[TemperatureRating::C70, TemperatureRating::C90],
            TableFamily::LowVoltageDc => &[TemperatureRating::C105],
        }
    }
}

impl std::fmt::Display for TemperatureRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°C", self.celsius())
    }
}

/// Conductor material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConductorMaterial {
    #[default]
    Copper,
    Aluminum,
}

impl ConductorMaterial {
    /// Ampacity multiplier relative to the copper tables
    pub fn ampacity_factor(&self) -> f64 {
        match self {
            ConductorMaterial::Copper => 1.0,
            ConductorMaterial::Aluminum => 0.78,
        }
    }

    /// Resistance multiplier relative to the copper tables
    pub fn resistance_factor(&self) -> f64 {
        match self {
            ConductorMaterial::Copper => 1.0,
            ConductorMaterial::Aluminum => 1.64,
        }
    }
}

/// Installation method
///
/// IEC reference methods select the ampacity column directly; the generic
/// methods map onto the family's tables (see each table module).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallationMethod {
    /// Insulated conductors in conduit in a thermally insulated wall
    A1,
    /// Multi-core cable in conduit in a thermally insulated wall
    A2,
    /// Insulated conductors in conduit on a wall
    B1,
    /// Multi-core cable in conduit on a wall
    B2,
    /// Cable clipped direct to a wall
    C,
    /// Multi-core cable in free air
    E,
    /// Raceway, cable or earth (generic)
    Conduit,
    /// Free air (generic)
    FreeAir,
    /// Raceway exposed to sunlight on a rooftop
    RooftopConduit,
    /// Inside a boat's engine space
    EngineSpace,
}

impl InstallationMethod {
    /// Methods accepted by each table family
    pub fn supported_by(family: TableFamily) -> &'static [InstallationMethod] {
        match family {
            TableFamily::Nec => &[InstallationMethod::Conduit, InstallationMethod::RooftopConduit],
            TableFamily::Iec => &[
                InstallationMethod::A1,
                InstallationMethod::A2,
                InstallationMethod::B1,
                InstallationMethod::B2,
                InstallationMethod::C,
                InstallationMethod::E,
                InstallationMethod::Conduit,
                InstallationMethod::FreeAir,
            ],
            TableFamily::LowVoltageDc => &[
                InstallationMethod::Conduit,
                InstallationMethod::FreeAir,
                InstallationMethod::EngineSpace,
            ],
        }
    }

    /// Default method for a family when the caller gives none
    pub fn default_for(family: TableFamily) -> InstallationMethod {
        match family {
            TableFamily::Iec => InstallationMethod::B1,
            TableFamily::Nec | TableFamily::LowVoltageDc => InstallationMethod::Conduit,
        }
    }
}

/// Conductor insulation type (keys the insulated-area tables)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum InsulationType {
    /// THHN/THWN (and TFFN for 18/16 AWG)
    #[default]
    Thhn,
    Thw,
    Xhhw,
    /// PVC single-core (H07V-R)
    Pvc,
    /// XLPE / LSZH single-core (H07Z-R)
    Xlpe,
}

impl InsulationType {
    /// Equivalent insulation in the other unit system's tables
    pub fn for_system(&self, system: UnitSystem) -> InsulationType {
        match (self, system) {
            (InsulationType::Thhn | InsulationType::Thw, UnitSystem::Metric) => InsulationType::Pvc,
            (InsulationType::Xhhw, UnitSystem::Metric) => InsulationType::Xlpe,
            (InsulationType::Pvc, UnitSystem::Imperial) => InsulationType::Thw,
            (InsulationType::Xlpe, UnitSystem::Imperial) => InsulationType::Xhhw,
            _ => *self,
        }
    }
}

/// Conduit type
///
/// IEC catalogs map PVC types to rigid PVC conduit and EMT/RMC to steel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConduitType {
    #[serde(rename = "EMT")]
    Emt,
    #[serde(rename = "RMC")]
    Rmc,
    #[serde(rename = "PVC-40")]
    PvcSch40,
    #[serde(rename = "PVC-80")]
    PvcSch80,
}

impl ConduitType {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            ConduitType::Emt => "EMT",
            ConduitType::Rmc => "Rigid metal conduit",
            ConduitType::PvcSch40 => "PVC Schedule 40",
            ConduitType::PvcSch80 => "PVC Schedule 80",
        }
    }
}

/// Catalog entry shared by every conduit table, areas normalized to mm²
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConduitCatalogEntry {
    /// Trade size designation (e.g. "3/4\"", "25 mm")
    pub trade_size: &'static str,
    /// Internal cross-sectional area (mm²)
    pub internal_area_mm2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("nec".parse::<Standard>().unwrap(), Standard::Nec);
        assert_eq!("dc_marine".parse::<Standard>().unwrap(), Standard::DcMarine);
        assert_eq!(" DC-Solar ".parse::<Standard>().unwrap(), Standard::DcSolar);
    }

    #[test]
    fn test_unsupported_standard_names_received_value() {
        let err = "CEC".parse::<Standard>().unwrap_err();
        match err {
            CalcError::UnsupportedStandard { received, supported } => {
                assert_eq!(received, "CEC");
                assert!(supported.contains("IEC"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_families_and_units() {
        assert_eq!(Standard::DcSolar.family(), TableFamily::Nec);
        assert_eq!(Standard::DcMarine.family(), TableFamily::LowVoltageDc);
        assert_eq!(Standard::Iec.length_unit(), LengthUnit::Meters);
        assert_eq!(Standard::DcAutomotive.length_unit(), LengthUnit::Feet);
    }

    #[test]
    fn test_serialization_uses_identifier() {
        assert_eq!(serde_json::to_string(&Standard::DcAutomotive).unwrap(), "\"DC-AUTOMOTIVE\"");
        let rating: TemperatureRating = serde_json::from_str("\"75C\"").unwrap();
        assert_eq!(rating, TemperatureRating::C75);
    }

    #[test]
    fn test_insulation_maps_across_systems() {
        assert_eq!(InsulationType::Thhn.for_system(UnitSystem::Metric), InsulationType::Pvc);
        assert_eq!(InsulationType::Xlpe.for_system(UnitSystem::Imperial), InsulationType::Xhhw);
        assert_eq!(InsulationType::Thw.for_system(UnitSystem::Imperial), InsulationType::Thw);
    }
}
