//! NEC Tables (NFPA 70)
//!
//! Copper conductor ampacities, resistances, correction factors, conduit
//! dimensions and overcurrent device ratings. DC-solar circuits size against
//! these same tables.
//!
//! Conduit and insulated conductor areas are tabulated in square inches and
//! normalized to mm² once, on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{AwgSize, ConduitCatalogEntry, ConduitType, InsulationType, TemperatureRating};
use crate::units::{SqIn, SqMm, METERS_PER_FOOT};

// ============================================================================
// Table 310.16 - Ampacity
// ============================================================================

/// One row of Table 310.16 (copper, not more than three current-carrying
/// conductors in raceway, cable or earth, 30°C ambient)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmpacityRow {
    pub size: AwgSize,
    pub c60: f64,
    pub c75: f64,
    pub c90: f64,
}

const fn row(size: AwgSize, c60: f64, c75: f64, c90: f64) -> AmpacityRow {
    AmpacityRow { size, c60, c75, c90 }
}

/// Table 310.16, ascending by size
pub const AMPACITY_310_16: &[AmpacityRow] = &[
    row(AwgSize::Awg14, 15.0, 20.0, 25.0),
    row(AwgSize::Awg12, 20.0, 25.0, 30.0),
    row(AwgSize::Awg10, 30.0, 35.0, 40.0),
    row(AwgSize::Awg8, 40.0, 50.0, 55.0),
    row(AwgSize::Awg6, 55.0, 65.0, 75.0),
    row(AwgSize::Awg4, 70.0, 85.0, 95.0),
    row(AwgSize::Awg3, 85.0, 100.0, 115.0),
    row(AwgSize::Awg2, 95.0, 115.0, 130.0),
    row(AwgSize::Awg1, 110.0, 130.0, 145.0),
    row(AwgSize::Awg1_0, 125.0, 150.0, 170.0),
    row(AwgSize::Awg2_0, 145.0, 175.0, 195.0),
    row(AwgSize::Awg3_0, 165.0, 200.0, 225.0),
    row(AwgSize::Awg4_0, 195.0, 230.0, 260.0),
    row(AwgSize::Kcmil250, 215.0, 255.0, 290.0),
    row(AwgSize::Kcmil300, 240.0, 285.0, 320.0),
    row(AwgSize::Kcmil350, 260.0, 310.0, 350.0),
    row(AwgSize::Kcmil400, 280.0, 335.0, 380.0),
    row(AwgSize::Kcmil500, 320.0, 380.0, 430.0),
];

impl AmpacityRow {
    /// Ampacity for a temperature column, None when NEC has no such column
    pub fn ampacity(&self, rating: TemperatureRating) -> Option<f64> {
        match rating {
            TemperatureRating::C60 => Some(self.c60),
            TemperatureRating::C75 => Some(self.c75),
            TemperatureRating::C90 => Some(self.c90),
            TemperatureRating::C70 | TemperatureRating::C105 => None,
        }
    }
}

// ============================================================================
// Chapter 9 Table 8 - DC Resistance
// ============================================================================

/// Uncoated stranded copper at 75°C, Ω per 1000 ft
pub const RESISTANCE_OHM_PER_KFT: &[(AwgSize, f64)] = &[
    (AwgSize::Awg18, 7.95),
    (AwgSize::Awg16, 4.99),
    (AwgSize::Awg14, 3.14),
    (AwgSize::Awg12, 1.98),
    (AwgSize::Awg10, 1.24),
    (AwgSize::Awg8, 0.778),
    (AwgSize::Awg6, 0.491),
    (AwgSize::Awg4, 0.308),
    (AwgSize::Awg3, 0.245),
    (AwgSize::Awg2, 0.194),
    (AwgSize::Awg1, 0.154),
    (AwgSize::Awg1_0, 0.122),
    (AwgSize::Awg2_0, 0.0967),
    (AwgSize::Awg3_0, 0.0766),
    (AwgSize::Awg4_0, 0.0608),
    (AwgSize::Kcmil250, 0.0515),
    (AwgSize::Kcmil300, 0.0429),
    (AwgSize::Kcmil350, 0.0367),
    (AwgSize::Kcmil400, 0.0321),
    (AwgSize::Kcmil500, 0.0258),
];

/// Copper resistance in Ω per metre of conductor
pub fn resistance_ohm_per_m(size: AwgSize) -> Option<f64> {
    RESISTANCE_OHM_PER_KFT
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, ohm_per_kft)| ohm_per_kft / (1000.0 * METERS_PER_FOOT))
}

// ============================================================================
// Table 310.15(B)(1) - Ambient Temperature Correction
// ============================================================================

/// Rows keyed by the upper bound of each ambient range (°C); columns are
/// 60/75/90°C conductors. `None` marks a conductor that may not be used at
/// that ambient.
const AMBIENT_CORRECTION: &[(f64, [Option<f64>; 3])] = &[
    (30.0, [Some(1.00), Some(1.00), Some(1.00)]),
    (35.0, [Some(0.91), Some(0.94), Some(0.96)]),
    (40.0, [Some(0.82), Some(0.88), Some(0.91)]),
    (45.0, [Some(0.71), Some(0.82), Some(0.87)]),
    (50.0, [Some(0.58), Some(0.75), Some(0.82)]),
    (55.0, [Some(0.41), Some(0.67), Some(0.76)]),
    (60.0, [None, Some(0.58), Some(0.71)]),
    (65.0, [None, Some(0.47), Some(0.65)]),
    (70.0, [None, Some(0.33), Some(0.58)]),
    (75.0, [None, None, Some(0.50)]),
    (80.0, [None, None, Some(0.41)]),
    (85.0, [None, None, Some(0.29)]),
];

/// Ambient correction factor, capped at 1.00 for ambients at or below 30°C.
///
/// Returns `None` when the ambient is beyond the rating's column; the caller
/// decides how to treat the miss.
pub fn ambient_correction(ambient_c: f64, rating: TemperatureRating) -> Option<f64> {
    let column = match rating {
        TemperatureRating::C60 => 0,
        TemperatureRating::C75 => 1,
        TemperatureRating::C90 => 2,
        TemperatureRating::C70 | TemperatureRating::C105 => return None,
    };
    AMBIENT_CORRECTION
        .iter()
        .find(|(upper_c, _)| ambient_c <= *upper_c)
        .and_then(|(_, factors)| factors[column])
}

/// 310.15(B)(2): raceways exposed to sunlight on rooftops
pub const ROOFTOP_ADDER_C: f64 = 33.0;

// ============================================================================
// Table 310.15(C)(1) - More Than Three Current-Carrying Conductors
// ============================================================================

/// Adjustment factor for the number of current-carrying conductors
pub fn grouping_adjustment(conductors: u32) -> f64 {
    match conductors {
        0..=3 => 1.00,
        4..=6 => 0.80,
        7..=9 => 0.70,
        10..=20 => 0.50,
        21..=30 => 0.45,
        31..=40 => 0.40,
        _ => 0.35,
    }
}

// ============================================================================
// Chapter 9 Tables 1, 4, 5 - Conduit Fill
// ============================================================================

/// Allowable fill percentage by conductor count (Table 1 and Note 4)
pub fn allowable_fill_pct(conductor_count: u32, nipple: bool) -> f64 {
    if nipple {
        return 60.0;
    }
    match conductor_count {
        1 => 53.0,
        2 => 31.0,
        _ => 40.0,
    }
}

const EMT_IN2: &[(&str, f64)] = &[
    ("1/2\"", 0.304),
    ("3/4\"", 0.533),
    ("1\"", 0.864),
    ("1-1/4\"", 1.496),
    ("1-1/2\"", 2.036),
    ("2\"", 3.356),
    ("2-1/2\"", 5.858),
    ("3\"", 8.846),
    ("3-1/2\"", 11.545),
    ("4\"", 14.753),
];

const RMC_IN2: &[(&str, f64)] = &[
    ("1/2\"", 0.314),
    ("3/4\"", 0.549),
    ("1\"", 0.887),
    ("1-1/4\"", 1.526),
    ("1-1/2\"", 2.071),
    ("2\"", 3.408),
    ("2-1/2\"", 4.866),
    ("3\"", 7.499),
    ("3-1/2\"", 10.010),
    ("4\"", 12.882),
    ("5\"", 20.212),
    ("6\"", 29.158),
];

const PVC_SCH80_IN2: &[(&str, f64)] = &[
    ("1/2\"", 0.217),
    ("3/4\"", 0.409),
    ("1\"", 0.688),
    ("1-1/4\"", 1.237),
    ("1-1/2\"", 1.711),
    ("2\"", 2.874),
    ("2-1/2\"", 4.119),
    ("3\"", 6.442),
    ("3-1/2\"", 8.688),
    ("4\"", 11.258),
    ("5\"", 17.855),
    ("6\"", 25.598),
];

const PVC_SCH40_IN2: &[(&str, f64)] = &[
    ("1/2\"", 0.285),
    ("3/4\"", 0.508),
    ("1\"", 0.832),
    ("1-1/4\"", 1.453),
    ("1-1/2\"", 1.986),
    ("2\"", 3.291),
    ("2-1/2\"", 4.695),
    ("3\"", 7.268),
    ("3-1/2\"", 9.737),
    ("4\"", 12.554),
    ("5\"", 19.761),
    ("6\"", 28.567),
];

static CONDUIT_CATALOGS: Lazy<HashMap<ConduitType, Vec<ConduitCatalogEntry>>> = Lazy::new(|| {
    let to_entries = |rows: &[(&'static str, f64)]| {
        rows.iter()
            .map(|&(trade_size, in2)| ConduitCatalogEntry {
                trade_size,
                internal_area_mm2: SqMm::from(SqIn(in2)).value(),
            })
            .collect::<Vec<_>>()
    };
    HashMap::from([
        (ConduitType::Emt, to_entries(EMT_IN2)),
        (ConduitType::Rmc, to_entries(RMC_IN2)),
        (ConduitType::PvcSch40, to_entries(PVC_SCH40_IN2)),
        (ConduitType::PvcSch80, to_entries(PVC_SCH80_IN2)),
    ])
});

/// Table 4 catalog for a conduit type, ascending by internal area
pub fn conduit_catalog(conduit_type: ConduitType) -> &'static [ConduitCatalogEntry] {
    CONDUIT_CATALOGS
        .get(&conduit_type)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Table 5 areas in in², columns THHN/THWN, THW, XHHW.
///
/// 18 and 16 AWG carry the fixture-wire equivalents (TFFN, TF).
const INSULATED_AREA_IN2: &[(AwgSize, [f64; 3])] = &[
    (AwgSize::Awg18, [0.0055, 0.0088, 0.0088]),
    (AwgSize::Awg16, [0.0072, 0.0109, 0.0109]),
    (AwgSize::Awg14, [0.0097, 0.0209, 0.0139]),
    (AwgSize::Awg12, [0.0133, 0.0260, 0.0181]),
    (AwgSize::Awg10, [0.0211, 0.0333, 0.0243]),
    (AwgSize::Awg8, [0.0366, 0.0556, 0.0437]),
    (AwgSize::Awg6, [0.0507, 0.0726, 0.0590]),
    (AwgSize::Awg4, [0.0824, 0.0973, 0.0814]),
    (AwgSize::Awg3, [0.0973, 0.1134, 0.0962]),
    (AwgSize::Awg2, [0.1158, 0.1333, 0.1146]),
    (AwgSize::Awg1, [0.1562, 0.1901, 0.1534]),
    (AwgSize::Awg1_0, [0.1855, 0.2223, 0.1825]),
    (AwgSize::Awg2_0, [0.2223, 0.2624, 0.2190]),
    (AwgSize::Awg3_0, [0.2679, 0.3117, 0.2642]),
    (AwgSize::Awg4_0, [0.3237, 0.3718, 0.3197]),
    (AwgSize::Kcmil250, [0.3970, 0.4596, 0.3904]),
    (AwgSize::Kcmil300, [0.4608, 0.5281, 0.4536]),
    (AwgSize::Kcmil350, [0.5242, 0.5958, 0.5166]),
    (AwgSize::Kcmil400, [0.5863, 0.6619, 0.5782]),
    (AwgSize::Kcmil500, [0.7073, 0.7901, 0.6984]),
];

/// Insulated conductor area in mm², None for metric insulation types
pub fn insulated_area_mm2(size: AwgSize, insulation: InsulationType) -> Option<f64> {
    let column = match insulation {
        InsulationType::Thhn => 0,
        InsulationType::Thw => 1,
        InsulationType::Xhhw => 2,
        InsulationType::Pvc | InsulationType::Xlpe => return None,
    };
    INSULATED_AREA_IN2
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, areas)| SqMm::from(SqIn(areas[column])).value())
}

// ============================================================================
// 240.6(A) - Standard Ampere Ratings
// ============================================================================

/// Standard ratings for fuses and inverse-time breakers
pub const BREAKER_RATINGS_A: &[f64] = &[
    15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 125.0,
    150.0, 175.0, 200.0, 225.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0, 600.0, 700.0, 800.0,
    1000.0, 1200.0, 1600.0, 2000.0, 2500.0, 3000.0, 4000.0, 5000.0, 6000.0,
];

/// 240.4(B) allows the next higher standard rating up to this value
pub const NEXT_SIZE_UP_LIMIT_A: f64 = 800.0;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ampacity(size: AwgSize, rating: TemperatureRating) -> Option<f64> {
        AMPACITY_310_16
            .iter()
            .find(|r| r.size == size)
            .and_then(|r| r.ampacity(rating))
    }

    #[test]
    fn test_ampacity_lookup() {
        assert_eq!(ampacity(AwgSize::Awg12, TemperatureRating::C75), Some(25.0));
        assert_eq!(ampacity(AwgSize::Kcmil500, TemperatureRating::C90), Some(430.0));
        assert_eq!(ampacity(AwgSize::Awg12, TemperatureRating::C70), None);
        // Table 310.16 starts at 14 AWG
        assert_eq!(ampacity(AwgSize::Awg16, TemperatureRating::C60), None);
    }

    #[test]
    fn test_ampacity_ascends_with_size() {
        for pair in AMPACITY_310_16.windows(2) {
            assert!(pair[0].size.index() < pair[1].size.index());
            assert!(pair[0].c75 < pair[1].c75);
        }
    }

    #[test]
    fn test_resistance_per_metre() {
        let r = resistance_ohm_per_m(AwgSize::Awg12).unwrap();
        assert_relative_eq!(r * 304.8, 1.98, epsilon = 1e-9);
    }

    #[test]
    fn test_ambient_correction_buckets() {
        assert_eq!(ambient_correction(20.0, TemperatureRating::C75), Some(1.0));
        assert_eq!(ambient_correction(30.0, TemperatureRating::C75), Some(1.0));
        assert_eq!(ambient_correction(38.0, TemperatureRating::C90), Some(0.91));
        assert_eq!(ambient_correction(58.0, TemperatureRating::C60), None);
        assert_eq!(ambient_correction(90.0, TemperatureRating::C90), None);
    }

    #[test]
    fn test_grouping_adjustment() {
        assert_eq!(grouping_adjustment(3), 1.0);
        assert_eq!(grouping_adjustment(4), 0.8);
        assert_eq!(grouping_adjustment(12), 0.5);
        assert_eq!(grouping_adjustment(100), 0.35);
    }

    #[test]
    fn test_fill_percentages() {
        assert_eq!(allowable_fill_pct(1, false), 53.0);
        assert_eq!(allowable_fill_pct(2, false), 31.0);
        assert_eq!(allowable_fill_pct(7, false), 40.0);
        assert_eq!(allowable_fill_pct(7, true), 60.0);
    }

    #[test]
    fn test_conduit_catalogs_are_ascending_and_metric() {
        for conduit_type in [
            ConduitType::Emt,
            ConduitType::Rmc,
            ConduitType::PvcSch40,
            ConduitType::PvcSch80,
        ] {
            let catalog = conduit_catalog(conduit_type);
            assert!(!catalog.is_empty());
            for pair in catalog.windows(2) {
                assert!(pair[0].internal_area_mm2 < pair[1].internal_area_mm2);
            }
        }
        let three_quarter = &conduit_catalog(ConduitType::PvcSch40)[1];
        assert_eq!(three_quarter.trade_size, "3/4\"");
        assert_relative_eq!(three_quarter.internal_area_mm2, 0.508 * 645.16, epsilon = 1e-9);
    }

    #[test]
    fn test_insulated_area() {
        let thhn_6 = insulated_area_mm2(AwgSize::Awg6, InsulationType::Thhn).unwrap();
        assert_relative_eq!(thhn_6, 0.0507 * 645.16, epsilon = 1e-9);
        assert!(insulated_area_mm2(AwgSize::Awg6, InsulationType::Pvc).is_none());
    }

    #[test]
    fn test_breaker_ratings_ascending() {
        for pair in BREAKER_RATINGS_A.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
