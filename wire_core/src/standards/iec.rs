//! IEC Tables (IEC 60364-5-52, IEC 60228, EN 61386)
//!
//! Copper current-carrying capacities by reference installation method,
//! correction factors, conductor resistance, single-core outer diameters,
//! conduit inner diameters and protective device ratings.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{
    ConduitCatalogEntry, ConduitType, InstallationMethod, InsulationType, MetricSize,
    TemperatureRating,
};
use crate::units::SqMm;

// ============================================================================
// Tables B.52.4 / B.52.5 - Current-Carrying Capacity
// ============================================================================

/// One conductor size across every reference method.
///
/// Each array is indexed by method column: A1, A2, B1, B2, C, E.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmpacityRow {
    pub size: MetricSize,
    /// PVC (70°C), two loaded conductors
    pub pvc_2: [f64; 6],
    /// PVC (70°C), three loaded conductors
    pub pvc_3: [f64; 6],
    /// XLPE/EPR (90°C), two loaded conductors
    pub xlpe_2: [f64; 6],
    /// XLPE/EPR (90°C), three loaded conductors
    pub xlpe_3: [f64; 6],
}

/// Copper capacities at 30°C ambient, ascending by size
pub const AMPACITY: &[AmpacityRow] = &[
    AmpacityRow {
        size: MetricSize::Mm1_5,
        pvc_2: [14.5, 14.0, 17.5, 16.5, 19.5, 22.0],
        pvc_3: [13.5, 13.0, 15.5, 15.0, 17.5, 18.5],
        xlpe_2: [19.0, 18.5, 23.0, 22.0, 24.0, 26.0],
        xlpe_3: [17.0, 16.5, 20.0, 19.5, 22.0, 23.0],
    },
    AmpacityRow {
        size: MetricSize::Mm2_5,
        pvc_2: [19.5, 18.5, 24.0, 23.0, 27.0, 30.0],
        pvc_3: [18.0, 17.5, 21.0, 20.0, 24.0, 25.0],
        xlpe_2: [26.0, 25.0, 31.0, 30.0, 33.0, 36.0],
        xlpe_3: [23.0, 22.0, 28.0, 26.0, 30.0, 32.0],
    },
    AmpacityRow {
        size: MetricSize::Mm4,
        pvc_2: [26.0, 25.0, 32.0, 30.0, 36.0, 40.0],
        pvc_3: [24.0, 23.0, 28.0, 27.0, 32.0, 34.0],
        xlpe_2: [35.0, 33.0, 42.0, 40.0, 45.0, 49.0],
        xlpe_3: [31.0, 30.0, 37.0, 35.0, 40.0, 42.0],
    },
    AmpacityRow {
        size: MetricSize::Mm6,
        pvc_2: [34.0, 32.0, 41.0, 38.0, 46.0, 51.0],
        pvc_3: [31.0, 29.0, 36.0, 34.0, 41.0, 43.0],
        xlpe_2: [45.0, 42.0, 54.0, 51.0, 58.0, 63.0],
        xlpe_3: [40.0, 38.0, 48.0, 44.0, 52.0, 54.0],
    },
    AmpacityRow {
        size: MetricSize::Mm10,
        pvc_2: [46.0, 43.0, 57.0, 52.0, 63.0, 70.0],
        pvc_3: [42.0, 39.0, 50.0, 46.0, 57.0, 60.0],
        xlpe_2: [61.0, 57.0, 75.0, 69.0, 80.0, 86.0],
        xlpe_3: [54.0, 51.0, 66.0, 60.0, 71.0, 75.0],
    },
    AmpacityRow {
        size: MetricSize::Mm16,
        pvc_2: [61.0, 57.0, 76.0, 69.0, 85.0, 94.0],
        pvc_3: [56.0, 52.0, 68.0, 62.0, 76.0, 80.0],
        xlpe_2: [81.0, 76.0, 100.0, 91.0, 107.0, 115.0],
        xlpe_3: [73.0, 68.0, 88.0, 80.0, 96.0, 100.0],
    },
    AmpacityRow {
        size: MetricSize::Mm25,
        pvc_2: [80.0, 75.0, 101.0, 90.0, 112.0, 119.0],
        pvc_3: [73.0, 68.0, 89.0, 80.0, 96.0, 101.0],
        xlpe_2: [106.0, 99.0, 133.0, 119.0, 138.0, 149.0],
        xlpe_3: [95.0, 89.0, 117.0, 105.0, 119.0, 127.0],
    },
    AmpacityRow {
        size: MetricSize::Mm35,
        pvc_2: [99.0, 92.0, 125.0, 111.0, 138.0, 148.0],
        pvc_3: [89.0, 83.0, 110.0, 99.0, 119.0, 126.0],
        xlpe_2: [131.0, 121.0, 164.0, 146.0, 171.0, 185.0],
        xlpe_3: [117.0, 109.0, 144.0, 128.0, 147.0, 158.0],
    },
    AmpacityRow {
        size: MetricSize::Mm50,
        pvc_2: [119.0, 110.0, 151.0, 133.0, 168.0, 180.0],
        pvc_3: [108.0, 99.0, 134.0, 118.0, 144.0, 153.0],
        xlpe_2: [158.0, 145.0, 198.0, 175.0, 209.0, 225.0],
        xlpe_3: [141.0, 130.0, 175.0, 154.0, 179.0, 192.0],
    },
    AmpacityRow {
        size: MetricSize::Mm70,
        pvc_2: [151.0, 139.0, 192.0, 168.0, 213.0, 232.0],
        pvc_3: [136.0, 125.0, 171.0, 149.0, 184.0, 196.0],
        xlpe_2: [200.0, 183.0, 253.0, 221.0, 269.0, 289.0],
        xlpe_3: [179.0, 164.0, 222.0, 194.0, 229.0, 246.0],
    },
    AmpacityRow {
        size: MetricSize::Mm95,
        pvc_2: [182.0, 167.0, 232.0, 201.0, 258.0, 282.0],
        pvc_3: [164.0, 150.0, 207.0, 179.0, 223.0, 238.0],
        xlpe_2: [241.0, 220.0, 306.0, 265.0, 328.0, 352.0],
        xlpe_3: [216.0, 197.0, 269.0, 233.0, 278.0, 298.0],
    },
    AmpacityRow {
        size: MetricSize::Mm120,
        pvc_2: [210.0, 192.0, 269.0, 232.0, 299.0, 328.0],
        pvc_3: [188.0, 172.0, 239.0, 206.0, 259.0, 276.0],
        xlpe_2: [278.0, 253.0, 354.0, 305.0, 382.0, 410.0],
        xlpe_3: [249.0, 227.0, 312.0, 268.0, 322.0, 346.0],
    },
    AmpacityRow {
        size: MetricSize::Mm150,
        pvc_2: [240.0, 219.0, 300.0, 258.0, 344.0, 379.0],
        pvc_3: [216.0, 196.0, 262.0, 225.0, 299.0, 319.0],
        xlpe_2: [318.0, 290.0, 393.0, 334.0, 441.0, 473.0],
        xlpe_3: [285.0, 259.0, 342.0, 300.0, 371.0, 399.0],
    },
    AmpacityRow {
        size: MetricSize::Mm185,
        pvc_2: [273.0, 248.0, 341.0, 294.0, 392.0, 434.0],
        pvc_3: [245.0, 223.0, 296.0, 255.0, 341.0, 364.0],
        xlpe_2: [362.0, 329.0, 449.0, 384.0, 506.0, 542.0],
        xlpe_3: [324.0, 295.0, 384.0, 340.0, 424.0, 456.0],
    },
    AmpacityRow {
        size: MetricSize::Mm240,
        pvc_2: [321.0, 291.0, 400.0, 344.0, 461.0, 514.0],
        pvc_3: [286.0, 261.0, 346.0, 297.0, 403.0, 430.0],
        xlpe_2: [424.0, 386.0, 528.0, 459.0, 599.0, 641.0],
        xlpe_3: [380.0, 346.0, 450.0, 398.0, 500.0, 538.0],
    },
];

/// Column index for an installation method.
///
/// The generic methods map to their closest reference method: conduit to
/// B1, free air to E.
pub fn method_column(method: InstallationMethod) -> Option<usize> {
    match method {
        InstallationMethod::A1 => Some(0),
        InstallationMethod::A2 => Some(1),
        InstallationMethod::B1 | InstallationMethod::Conduit => Some(2),
        InstallationMethod::B2 => Some(3),
        InstallationMethod::C => Some(4),
        InstallationMethod::E | InstallationMethod::FreeAir => Some(5),
        InstallationMethod::RooftopConduit | InstallationMethod::EngineSpace => None,
    }
}

impl AmpacityRow {
    /// Capacity for an insulation rating, method and loaded-conductor count
    pub fn ampacity(
        &self,
        rating: TemperatureRating,
        method: InstallationMethod,
        loaded_conductors: u32,
    ) -> Option<f64> {
        let column = method_column(method)?;
        let three_loaded = loaded_conductors >= 3;
        let values = match (rating, three_loaded) {
            (TemperatureRating::C70, false) => &self.pvc_2,
            (TemperatureRating::C70, true) => &self.pvc_3,
            (TemperatureRating::C90, false) => &self.xlpe_2,
            (TemperatureRating::C90, true) => &self.xlpe_3,
            _ => return None,
        };
        Some(values[column])
    }
}

// ============================================================================
// IEC 60228 - Conductor Resistance
// ============================================================================

/// Class 2 stranded copper at 20°C, Ω/km
pub const RESISTANCE_OHM_PER_KM: &[(MetricSize, f64)] = &[
    (MetricSize::Mm0_5, 36.0),
    (MetricSize::Mm0_75, 24.5),
    (MetricSize::Mm1, 18.1),
    (MetricSize::Mm1_5, 12.1),
    (MetricSize::Mm2_5, 7.41),
    (MetricSize::Mm4, 4.61),
    (MetricSize::Mm6, 3.08),
    (MetricSize::Mm10, 1.83),
    (MetricSize::Mm16, 1.15),
    (MetricSize::Mm25, 0.727),
    (MetricSize::Mm35, 0.524),
    (MetricSize::Mm50, 0.387),
    (MetricSize::Mm70, 0.268),
    (MetricSize::Mm95, 0.193),
    (MetricSize::Mm120, 0.153),
    (MetricSize::Mm150, 0.124),
    (MetricSize::Mm185, 0.0991),
    (MetricSize::Mm240, 0.0754),
];

/// Copper resistance in Ω per metre of conductor
pub fn resistance_ohm_per_m(size: MetricSize) -> Option<f64> {
    RESISTANCE_OHM_PER_KM
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, ohm_per_km)| ohm_per_km / 1000.0)
}

// ============================================================================
// Table B.52.14 - Ambient Temperature Correction
// ============================================================================

/// Ambient (°C) against PVC and XLPE factors
const AMBIENT_CORRECTION: &[(f64, Option<f64>, Option<f64>)] = &[
    (30.0, Some(1.00), Some(1.00)),
    (35.0, Some(0.94), Some(0.96)),
    (40.0, Some(0.87), Some(0.91)),
    (45.0, Some(0.79), Some(0.87)),
    (50.0, Some(0.71), Some(0.82)),
    (55.0, Some(0.61), Some(0.76)),
    (60.0, Some(0.50), Some(0.71)),
    (65.0, None, Some(0.65)),
    (70.0, None, Some(0.58)),
    (75.0, None, Some(0.50)),
    (80.0, None, Some(0.41)),
];

/// Correction for an ambient, rounded up to the next tabulated ambient.
///
/// At or below 30°C the factor is 1.00. `None` past the end of the column.
pub fn ambient_correction(ambient_c: f64, rating: TemperatureRating) -> Option<f64> {
    let row = AMBIENT_CORRECTION
        .iter()
        .find(|(tabulated_c, _, _)| ambient_c <= *tabulated_c)?;
    match rating {
        TemperatureRating::C70 => row.1,
        TemperatureRating::C90 => row.2,
        _ => None,
    }
}

// ============================================================================
// Table B.52.17 - Grouping
// ============================================================================

/// Circuits in the group against the reduction factor (bunched, on a surface
/// or enclosed)
const GROUPING: &[(u32, f64)] = &[
    (1, 1.00),
    (2, 0.80),
    (3, 0.70),
    (4, 0.65),
    (5, 0.60),
    (6, 0.57),
    (7, 0.54),
    (8, 0.52),
    (9, 0.50),
    (12, 0.45),
    (16, 0.41),
    (20, 0.38),
];

/// Reduction factor for a group of circuits, taking the next higher
/// tabulated count. Beyond 20 circuits the last factor holds.
pub fn grouping_factor(circuits: u32) -> f64 {
    GROUPING
        .iter()
        .find(|(count, _)| circuits <= *count)
        .map_or(0.38, |(_, factor)| *factor)
}

// ============================================================================
// Conduit Fill
// ============================================================================

/// Customary IEC installation practice (there is no normative IEC table)
pub fn allowable_fill_pct(conductor_count: u32) -> f64 {
    match conductor_count {
        1 => 50.0,
        2 => 33.0,
        _ => 45.0,
    }
}

/// H07V-R (PVC) and H07Z-R (XLPE/LSZH) single-core outer diameters, mm
const OUTER_DIAMETER_MM: &[(MetricSize, f64, f64)] = &[
    (MetricSize::Mm0_5, 2.1, 2.0),
    (MetricSize::Mm0_75, 2.3, 2.2),
    (MetricSize::Mm1, 2.5, 2.4),
    (MetricSize::Mm1_5, 3.1, 3.0),
    (MetricSize::Mm2_5, 3.7, 3.6),
    (MetricSize::Mm4, 4.3, 4.1),
    (MetricSize::Mm6, 4.8, 4.6),
    (MetricSize::Mm10, 6.1, 5.9),
    (MetricSize::Mm16, 7.2, 6.9),
    (MetricSize::Mm25, 8.9, 8.5),
    (MetricSize::Mm35, 10.1, 9.7),
    (MetricSize::Mm50, 11.9, 11.4),
    (MetricSize::Mm70, 13.6, 13.1),
    (MetricSize::Mm95, 15.8, 15.2),
    (MetricSize::Mm120, 17.4, 16.8),
    (MetricSize::Mm150, 19.3, 18.7),
    (MetricSize::Mm185, 21.5, 20.8),
    (MetricSize::Mm240, 24.5, 23.7),
];

/// Insulated conductor area in mm², None for NEC insulation types
pub fn insulated_area_mm2(size: MetricSize, insulation: InsulationType) -> Option<f64> {
    let (_, pvc, xlpe) = OUTER_DIAMETER_MM.iter().find(|(s, _, _)| *s == size)?;
    let diameter = match insulation {
        InsulationType::Pvc => *pvc,
        InsulationType::Xlpe => *xlpe,
        InsulationType::Thhn | InsulationType::Thw | InsulationType::Xhhw => return None,
    };
    Some(SqMm::from_diameter_mm(diameter).value())
}

/// EN 61386 rigid PVC conduit, nominal size against inner diameter (mm)
const RIGID_PVC_ID_MM: &[(&str, f64)] = &[
    ("16 mm", 13.0),
    ("20 mm", 16.9),
    ("25 mm", 21.4),
    ("32 mm", 27.8),
    ("40 mm", 35.4),
    ("50 mm", 44.3),
    ("63 mm", 56.5),
];

/// EN 61386 steel conduit, nominal size against inner diameter (mm)
const STEEL_ID_MM: &[(&str, f64)] = &[
    ("16 mm", 12.9),
    ("20 mm", 16.9),
    ("25 mm", 21.7),
    ("32 mm", 28.5),
    ("40 mm", 35.5),
    ("50 mm", 45.0),
];

static CONDUIT_CATALOGS: Lazy<HashMap<ConduitType, Vec<ConduitCatalogEntry>>> = Lazy::new(|| {
    let to_entries = |rows: &[(&'static str, f64)]| {
        rows.iter()
            .map(|&(trade_size, id_mm)| ConduitCatalogEntry {
                trade_size,
                internal_area_mm2: SqMm::from_diameter_mm(id_mm).value(),
            })
            .collect::<Vec<_>>()
    };
    let pvc = to_entries(RIGID_PVC_ID_MM);
    let steel = to_entries(STEEL_ID_MM);
    HashMap::from([
        (ConduitType::PvcSch40, pvc.clone()),
        (ConduitType::PvcSch80, pvc),
        (ConduitType::Emt, steel.clone()),
        (ConduitType::Rmc, steel),
    ])
});

/// Conduit catalog for a type, ascending by internal area
pub fn conduit_catalog(conduit_type: ConduitType) -> &'static [ConduitCatalogEntry] {
    CONDUIT_CATALOGS
        .get(&conduit_type)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

// ============================================================================
// IEC 60898-1 / IEC 60947-2 - Rated Currents
// ============================================================================

/// Preferred rated currents (miniature breakers up to 125 A, moulded case above)
pub const BREAKER_RATINGS_A: &[f64] = &[
    6.0, 10.0, 13.0, 16.0, 20.0, 25.0, 32.0, 40.0, 50.0, 63.0, 80.0, 100.0, 125.0, 160.0, 200.0,
    250.0, 315.0, 400.0, 500.0, 630.0, 800.0, 1000.0, 1250.0, 1600.0,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ampacity(
        size: MetricSize,
        rating: TemperatureRating,
        method: InstallationMethod,
        loaded_conductors: u32,
    ) -> Option<f64> {
        AMPACITY
            .iter()
            .find(|r| r.size == size)
            .and_then(|r| r.ampacity(rating, method, loaded_conductors))
    }

    #[test]
    fn test_ampacity_columns() {
        let b1 = InstallationMethod::B1;
        assert_eq!(ampacity(MetricSize::Mm2_5, TemperatureRating::C70, b1, 2), Some(24.0));
        assert_eq!(ampacity(MetricSize::Mm2_5, TemperatureRating::C70, b1, 3), Some(21.0));
        assert_eq!(ampacity(MetricSize::Mm2_5, TemperatureRating::C90, b1, 2), Some(31.0));
        assert_eq!(
            ampacity(MetricSize::Mm16, TemperatureRating::C70, InstallationMethod::FreeAir, 2),
            Some(94.0)
        );
    }

    #[test]
    fn test_ampacity_misses() {
        let b1 = InstallationMethod::B1;
        assert_eq!(ampacity(MetricSize::Mm1, TemperatureRating::C70, b1, 2), None);
        assert_eq!(ampacity(MetricSize::Mm2_5, TemperatureRating::C75, b1, 2), None);
        assert_eq!(
            ampacity(MetricSize::Mm2_5, TemperatureRating::C70, InstallationMethod::EngineSpace, 2),
            None
        );
    }

    #[test]
    fn test_every_column_ascends() {
        for pair in AMPACITY.windows(2) {
            for column in 0..6 {
                assert!(pair[0].pvc_2[column] < pair[1].pvc_2[column]);
                assert!(pair[0].pvc_3[column] < pair[1].pvc_3[column]);
                assert!(pair[0].xlpe_2[column] < pair[1].xlpe_2[column]);
                assert!(pair[0].xlpe_3[column] < pair[1].xlpe_3[column]);
            }
        }
    }

    #[test]
    fn test_ambient_rounds_up() {
        assert_eq!(ambient_correction(25.0, TemperatureRating::C70), Some(1.0));
        assert_eq!(ambient_correction(31.0, TemperatureRating::C70), Some(0.94));
        assert_eq!(ambient_correction(40.0, TemperatureRating::C90), Some(0.91));
        assert_eq!(ambient_correction(62.0, TemperatureRating::C70), None);
        assert_eq!(ambient_correction(85.0, TemperatureRating::C90), None);
    }

    #[test]
    fn test_grouping_next_higher_bucket() {
        assert_eq!(grouping_factor(1), 1.0);
        assert_eq!(grouping_factor(3), 0.7);
        assert_eq!(grouping_factor(10), 0.45);
        assert_eq!(grouping_factor(50), 0.38);
    }

    #[test]
    fn test_resistance() {
        assert_relative_eq!(resistance_ohm_per_m(MetricSize::Mm2_5).unwrap(), 0.00741);
    }

    #[test]
    fn test_conduit_catalog_from_diameters() {
        let catalog = conduit_catalog(ConduitType::PvcSch40);
        assert_eq!(catalog[2].trade_size, "25 mm");
        assert_relative_eq!(
            catalog[2].internal_area_mm2,
            std::f64::consts::PI * 21.4 * 21.4 / 4.0,
            epsilon = 1e-9
        );
        assert_eq!(conduit_catalog(ConduitType::Emt).len(), 6);
    }

    #[test]
    fn test_insulated_area() {
        let area = insulated_area_mm2(MetricSize::Mm16, InsulationType::Pvc).unwrap();
        assert_relative_eq!(area, std::f64::consts::PI * 7.2 * 7.2 / 4.0, epsilon = 1e-9);
        assert!(insulated_area_mm2(MetricSize::Mm16, InsulationType::Thhn).is_none());
    }
}
