//! # Conduit Fill
//!
//! Selects the smallest conduit trade size whose fill stays within the
//! allowable percentage for the number of conductors it carries.
//!
//! ## Method
//!
//! ```text
//! A_required = Σ (A_insulated × count) × (1 + reserve / 100)
//! fill       = A_required / A_conduit × 100
//! ```
//!
//! | Conductors | NEC (Ch. 9 Table 1) | IEC practice |
//! |------------|---------------------|--------------|
//! | 1          | 53%                 | 50%          |
//! | 2          | 31%                 | 33%          |
//! | 3+         | 40%                 | 45%          |
//!
//! NEC nipples of 24 in or less may be filled to 60%.
//!
//! ## Unit systems
//!
//! Sizes given in the other system are converted to the nearest equivalent
//! before areas are looked up (6 AWG sizes as 16 mm² under IEC), and the
//! insulation maps across (THHN becomes PVC). Each conversion is listed on
//! the result. The conversion is lossy.

use serde::{Deserialize, Serialize};

use crate::compliance::{ComplianceCheck, ComplianceEvaluator, ComplianceReport};
use crate::errors::{CalcError, CalcResult};
use crate::standards::{
    code_ref, iec, nec, ConduitCatalogEntry, ConduitType, InsulationType, Standard, TableFamily,
    UnitSystem, WireSize,
};
use crate::units::{SqIn, SqMm};

/// One group of identical conductors.
///
/// `size` accepts any spelling [`WireSize::from_str_flexible`] does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEntry {
    pub size: String,
    pub count: u32,
    /// THHN (imperial) or PVC (metric) when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insulation: Option<InsulationType>,
}

impl WireEntry {
    pub fn new(size: impl Into<String>, count: u32) -> Self {
        WireEntry {
            size: size.into(),
            count,
            insulation: None,
        }
    }
}

/// Input parameters for a conduit fill calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "standard": "NEC",
///   "conduit_type": "PVC-40",
///   "wires": [
///     { "size": "6 AWG", "count": 3, "insulation": "THHN" },
///     { "size": "16 AWG", "count": 1 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConduitInput {
    #[serde(default)]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conduit_type: Option<ConduitType>,

    #[serde(default)]
    pub wires: Vec<WireEntry>,

    /// Extra area held back for future conductors (% of the conductor area)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future_fill_reserve_pct: Option<f64>,

    /// Conduit nipple of 24 in or less (NEC only)
    #[serde(default)]
    pub nipple: bool,
}

/// Most conductors one request may place in a single conduit
pub const MAX_CONDUCTORS: u64 = 1_000;

impl ConduitInput {
    /// Total conductor count across all entries, free of overflow
    pub fn total_conductors(&self) -> u64 {
        self.wires.iter().map(|w| u64::from(w.count)).sum()
    }

    /// Every validation problem, given the already-parsed standard
    pub fn validation_errors(&self, standard: Option<Standard>) -> Vec<CalcError> {
        let mut errors = Vec::new();
        if self.standard.is_none() {
            errors.push(CalcError::missing_field("standard"));
        }
        if self.conduit_type.is_none() {
            errors.push(CalcError::missing_field("conduit_type"));
        }
        if self.wires.is_empty() {
            errors.push(CalcError::missing_field("wires"));
        }
        for (i, wire) in self.wires.iter().enumerate() {
            if let Err(err) = WireSize::from_str_flexible(&wire.size) {
                errors.push(CalcError::invalid_input(
                    format!("wires[{i}].size"),
                    wire.size.clone(),
                    err.to_string(),
                ));
            }
            if wire.count == 0 {
                errors.push(CalcError::invalid_input(
                    format!("wires[{i}].count"),
                    "0",
                    "Count must be at least 1",
                ));
            }
        }
        let total = self.total_conductors();
        if total > MAX_CONDUCTORS {
            errors.push(CalcError::invalid_input(
                "wires",
                format!("{total} conductors"),
                format!("At most {MAX_CONDUCTORS} conductors fit one calculation"),
            ));
        }
        if let Some(reserve) = self.future_fill_reserve_pct {
            if !(reserve.is_finite() && (0.0..=100.0).contains(&reserve)) {
                errors.push(CalcError::invalid_input(
                    "future_fill_reserve_pct",
                    reserve.to_string(),
                    "Reserve must be between 0 and 100 percent",
                ));
            }
        }
        if let Some(standard) = standard {
            if self.nipple && standard.family() == TableFamily::Iec {
                errors.push(CalcError::invalid_input(
                    "nipple",
                    "true",
                    "The nipple allowance is an NEC rule",
                ));
            }
        }
        errors
    }
}

/// A wire entry as sized, after any conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFill {
    pub size: WireSize,
    pub count: u32,
    pub insulation: InsulationType,
    /// Insulated area of one conductor (mm²)
    pub area_each_mm2: f64,
    /// Size as given, when it was converted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_from: Option<String>,
}

/// Conduit fill results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConduitResult {
    pub label: String,
    pub standard: Standard,
    pub unit_system: UnitSystem,

    // === Selection ===
    pub conduit_type: ConduitType,
    pub trade_size: String,
    pub internal_area_mm2: f64,
    pub internal_area_in2: f64,

    // === Fill ===
    pub conductor_count: u32,
    /// Insulated conductor area including any reserve (mm²)
    pub required_area_mm2: f64,
    pub required_area_in2: f64,
    pub fill_pct: f64,
    pub allowable_fill_pct: f64,

    pub wires: Vec<WireFill>,
    /// Human-readable list of size and insulation conversions
    pub conversions: Vec<String>,

    pub compliance: ComplianceReport,
    pub code_references: Vec<String>,
}

impl ConduitResult {
    pub fn is_compliant(&self) -> bool {
        self.compliance.compliant
    }
}

/// Insulated area of one conductor in the matching table
fn insulated_area_mm2(size: WireSize, insulation: InsulationType) -> CalcResult<f64> {
    let area = match size {
        WireSize::Awg(awg) => nec::insulated_area_mm2(awg, insulation),
        WireSize::Metric(metric) => iec::insulated_area_mm2(metric, insulation),
    };
    area.ok_or_else(|| {
        CalcError::table_lookup(
            "insulated conductor areas",
            format!("{size} {insulation:?}"),
        )
    })
}

/// Resolve wire entries into the target unit system.
///
/// Sizes and insulation types from the other system are replaced by their
/// nearest equivalents, and each replacement is described in the second
/// returned list.
pub fn convert_wires(wires: &[WireEntry], system: UnitSystem) -> CalcResult<(Vec<WireFill>, Vec<String>)> {
    let mut fills = Vec::with_capacity(wires.len());
    let mut conversions = Vec::new();

    for wire in wires {
        let given = WireSize::from_str_flexible(&wire.size)?;
        let size = given.to_system(system);
        let converted_from = (size != given).then(|| {
            conversions.push(format!("{given} -> {size}"));
            given.label()
        });

        let requested = wire.insulation.unwrap_or(match system {
            UnitSystem::Imperial => InsulationType::Thhn,
            UnitSystem::Metric => InsulationType::Pvc,
        });
        let insulation = requested.for_system(system);
        if insulation != requested {
            conversions.push(format!("{requested:?} -> {insulation:?} insulation ({size})"));
        }

        fills.push(WireFill {
            size,
            count: wire.count,
            insulation,
            area_each_mm2: insulated_area_mm2(size, insulation)?,
            converted_from,
        });
    }
    Ok((fills, conversions))
}

fn catalog_for(standard: Standard, conduit_type: ConduitType) -> &'static [ConduitCatalogEntry] {
    match standard.family() {
        TableFamily::Iec => iec::conduit_catalog(conduit_type),
        TableFamily::Nec | TableFamily::LowVoltageDc => nec::conduit_catalog(conduit_type),
    }
}

/// Compute conduit fill for an already-validated input.
pub(crate) fn calculate(input: &ConduitInput, standard: Standard) -> CalcResult<ConduitResult> {
    let conduit_type = input
        .conduit_type
        .ok_or_else(|| CalcError::missing_field("conduit_type"))?;
    let system = standard.unit_system();
    let (wires, conversions) = convert_wires(&input.wires, system)?;

    let conductor_count = u32::try_from(input.total_conductors())
        .ok()
        .filter(|&count| u64::from(count) <= MAX_CONDUCTORS)
        .ok_or_else(|| {
            CalcError::invalid_input(
                "wires",
                input.total_conductors().to_string(),
                format!("At most {MAX_CONDUCTORS} conductors fit one calculation"),
            )
        })?;
    let conductor_area_mm2: f64 = wires
        .iter()
        .map(|w| w.area_each_mm2 * f64::from(w.count))
        .sum();
    let reserve = input.future_fill_reserve_pct.unwrap_or(0.0);
    let required_area_mm2 = conductor_area_mm2 * (1.0 + reserve / 100.0);

    let allowable_fill_pct = match standard.family() {
        TableFamily::Iec => iec::allowable_fill_pct(conductor_count),
        TableFamily::Nec | TableFamily::LowVoltageDc => {
            nec::allowable_fill_pct(conductor_count, input.nipple)
        }
    };

    let catalog = catalog_for(standard, conduit_type);
    let fill_of = |entry: &ConduitCatalogEntry| required_area_mm2 / entry.internal_area_mm2 * 100.0;
    let selected = catalog
        .iter()
        .find(|entry| fill_of(entry) <= allowable_fill_pct);
    let entry = match selected {
        Some(entry) => entry,
        None => {
            let largest = catalog
                .last()
                .ok_or_else(|| CalcError::table_lookup("conduit catalog", conduit_type.display_name()))?;
            return Err(CalcError::NoSuitableConduit {
                largest_trade_size: largest.trade_size.to_string(),
                fill_pct_at_largest: fill_of(largest),
                allowable_fill_pct,
            });
        }
    };
    let fill_pct = fill_of(entry);

    tracing::debug!(
        %standard,
        trade_size = entry.trade_size,
        fill_pct,
        conversions = conversions.len(),
        "conduit selected"
    );

    let compliance = ComplianceEvaluator::new()
        .check(
            ComplianceCheck::Fill,
            fill_pct <= allowable_fill_pct,
            format!("{fill_pct:.1}% fill exceeds {allowable_fill_pct}%"),
        )
        .finish();

    let code_reference = match standard.family() {
        TableFamily::Iec => code_ref::IEC_CONDUIT,
        TableFamily::Nec | TableFamily::LowVoltageDc => code_ref::NEC_CONDUIT_FILL,
    };

    Ok(ConduitResult {
        label: input.label.clone(),
        standard,
        unit_system: system,
        conduit_type,
        trade_size: entry.trade_size.to_string(),
        internal_area_mm2: entry.internal_area_mm2,
        internal_area_in2: SqIn::from(SqMm(entry.internal_area_mm2)).value(),
        conductor_count,
        required_area_mm2,
        required_area_in2: SqIn::from(SqMm(required_area_mm2)).value(),
        fill_pct,
        allowable_fill_pct,
        wires,
        conversions,
        compliance,
        code_references: vec![code_reference.to_string()],
    })
}
