//! # Derating Factors
//!
//! Correction factors applied to a conductor's base (table) ampacity:
//!
//! ```text
//! I_adjusted = I_base × F_temp × F_group × F_install × F_material
//! ```
//!
//! ## Factor Summary
//!
//! | Factor     | NEC                  | IEC                    | Low-voltage DC      |
//! |------------|----------------------|------------------------|---------------------|
//! | F_temp     | Table 310.15(B)(1)   | Table B.52.14          | 310.15(B) formula   |
//! | F_group    | Table 310.15(C)(1)   | Table B.52.17          | ABYC bundling       |
//! | F_install  | 1.00                 | 1.00 (in the columns)  | engine space 0.85   |
//! | F_material | Cu 1.00, Al 0.78     | Cu 1.00, Al 0.78       | Cu 1.00, Al 0.78    |
//!
//! ## Lookup misses
//!
//! A temperature lookup that misses its table (ambient beyond the last row
//! for the insulation rating) yields a neutral 1.00. The miss is recorded in
//! `fell_open` and clears `temperature_in_table`, which the compliance
//! evaluator reports as a failed temperature check. Installation factors are
//! keyed exactly; keys without an entry are neutral and are not misses.

use serde::{Deserialize, Serialize};

use crate::standards::{
    code_ref, dc, iec, nec, ConductorMaterial, InstallationMethod, TableFamily, TemperatureRating,
};

/// Everything the factor lookups are keyed by
#[derive(Debug, Clone, PartialEq)]
pub struct DeratingConditions {
    pub family: TableFamily,
    pub ambient_c: f64,
    pub rating: TemperatureRating,
    /// Current-carrying conductors in the raceway or bundle
    pub grouped_conductors: u32,
    /// Current-carrying conductors per circuit (converts conductors to IEC circuits)
    pub loaded_per_circuit: u32,
    pub method: InstallationMethod,
    pub material: ConductorMaterial,
}

/// Composed derating with its constituents, for auditing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeratingFactors {
    /// Ambient temperature correction
    pub temperature: f64,
    /// Grouping / bundling adjustment
    pub grouping: f64,
    /// Installation location factor
    pub installation: f64,
    /// Conductor material factor
    pub material: f64,
    /// Product of all factors
    pub composed: f64,
    /// Ambient used for the lookup, after any rooftop adder (°C)
    pub effective_ambient_c: f64,
    /// False when the ambient lookup missed its table
    pub temperature_in_table: bool,
    /// Lookups that missed their table and fell back to 1.00
    pub fell_open: Vec<String>,
}

impl DeratingFactors {
    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        let mut report = format!(
            "Derating Factors (ambient {:.1}°C)\n\
             ================================================\n\
             F_temp     (Temperature)  = {:.3}\n\
             F_group    (Grouping)     = {:.3}\n\
             F_install  (Installation) = {:.3}\n\
             F_material (Material)     = {:.3}\n\
             ------------------------------------------------\n\
             Composed                  = {:.3}",
            self.effective_ambient_c,
            self.temperature,
            self.grouping,
            self.installation,
            self.material,
            self.composed,
        );
        for miss in &self.fell_open {
            report.push_str(&format!("\n  ! {miss} (used 1.00)"));
        }
        report
    }
}

/// Look up and multiply every factor for the given conditions
pub fn compose(conditions: &DeratingConditions) -> DeratingFactors {
    let mut fell_open = Vec::new();

    let effective_ambient_c = match (conditions.family, conditions.method) {
        (TableFamily::Nec, InstallationMethod::RooftopConduit) => {
            conditions.ambient_c + nec::ROOFTOP_ADDER_C
        }
        _ => conditions.ambient_c,
    };

    let (temperature_lookup, table) = match conditions.family {
        TableFamily::Nec => (
            nec::ambient_correction(effective_ambient_c, conditions.rating),
            code_ref::NEC_AMBIENT,
        ),
        TableFamily::Iec => (
            iec::ambient_correction(effective_ambient_c, conditions.rating),
            code_ref::IEC_AMBIENT,
        ),
        TableFamily::LowVoltageDc => (
            dc::ambient_correction(effective_ambient_c, conditions.rating.celsius()),
            code_ref::NEC_AMBIENT,
        ),
    };
    let temperature_in_table = temperature_lookup.is_some();
    let temperature = temperature_lookup.unwrap_or_else(|| {
        let miss = format!(
            "{table}: no correction for {effective_ambient_c:.1}°C with {} insulation",
            conditions.rating
        );
        tracing::debug!(%miss, "temperature lookup fell open");
        fell_open.push(miss);
        1.0
    });

    let grouping = match conditions.family {
        TableFamily::Nec => nec::grouping_adjustment(conditions.grouped_conductors),
        TableFamily::Iec => {
            let circuits = conditions
                .grouped_conductors
                .div_ceil(conditions.loaded_per_circuit.max(1));
            iec::grouping_factor(circuits)
        }
        TableFamily::LowVoltageDc => dc::bundling_factor(conditions.grouped_conductors),
    };

    let installation = match (conditions.family, conditions.method) {
        (TableFamily::LowVoltageDc, InstallationMethod::EngineSpace) => dc::ENGINE_SPACE_FACTOR,
        _ => 1.0,
    };

    let material = conditions.material.ampacity_factor();

    DeratingFactors {
        temperature,
        grouping,
        installation,
        material,
        composed: temperature * grouping * installation * material,
        effective_ambient_c,
        temperature_in_table,
        fell_open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn nec_conditions(ambient_c: f64, grouped: u32) -> DeratingConditions {
        DeratingConditions {
            family: TableFamily::Nec,
            ambient_c,
            rating: TemperatureRating::C75,
            grouped_conductors: grouped,
            loaded_per_circuit: 2,
            method: InstallationMethod::Conduit,
            material: ConductorMaterial::Copper,
        }
    }

    #[test]
    fn test_neutral_conditions() {
        let factors = compose(&nec_conditions(30.0, 3));
        assert_eq!(factors.composed, 1.0);
        assert!(factors.temperature_in_table);
        assert!(factors.fell_open.is_empty());
    }

    #[test]
    fn test_composition_is_product() {
        let mut conditions = nec_conditions(40.0, 6);
        conditions.material = ConductorMaterial::Aluminum;
        let factors = compose(&conditions);
        assert_relative_eq!(factors.composed, 0.88 * 0.8 * 0.78, epsilon = 1e-12);
    }

    #[test]
    fn test_rooftop_adder() {
        let mut conditions = nec_conditions(30.0, 1);
        conditions.method = InstallationMethod::RooftopConduit;
        let factors = compose(&conditions);
        assert_eq!(factors.effective_ambient_c, 63.0);
        assert_eq!(factors.temperature, 0.47);
    }

    #[test]
    fn test_out_of_table_falls_open() {
        let factors = compose(&nec_conditions(80.0, 1));
        assert_eq!(factors.temperature, 1.0);
        assert!(!factors.temperature_in_table);
        assert_eq!(factors.fell_open.len(), 1);
        assert!(factors.format_report().contains("used 1.00"));
    }

    #[test]
    fn test_iec_groups_by_circuit() {
        let conditions = DeratingConditions {
            family: TableFamily::Iec,
            ambient_c: 30.0,
            rating: TemperatureRating::C70,
            grouped_conductors: 6,
            loaded_per_circuit: 2,
            method: InstallationMethod::B1,
            material: ConductorMaterial::Copper,
        };
        // six conductors, two per circuit
        assert_eq!(compose(&conditions).grouping, 0.7);
    }

    #[test]
    fn test_engine_space() {
        let conditions = DeratingConditions {
            family: TableFamily::LowVoltageDc,
            ambient_c: 30.0,
            rating: TemperatureRating::C105,
            grouped_conductors: 1,
            loaded_per_circuit: 2,
            method: InstallationMethod::EngineSpace,
            material: ConductorMaterial::Copper,
        };
        let factors = compose(&conditions);
        assert_eq!(factors.installation, 0.85);
        assert_relative_eq!(factors.composed, 0.85);
    }
}
