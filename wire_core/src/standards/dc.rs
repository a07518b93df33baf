//! Low-Voltage DC Tables (ABYC E-11, SAE J2077)
//!
//! Conductor ampacities for 105°C insulation, bundling and engine-space
//! factors, and the automotive and ANL fuse catalogs. Resistance comes from
//! the NEC copper table.

use serde::{Deserialize, Serialize};

use super::{nec, AwgSize};

/// ABYC E-11 ampacity for 105°C conductors outside engine spaces, ascending
pub const AMPACITY_105C: &[(AwgSize, f64)] = &[
    (AwgSize::Awg18, 20.0),
    (AwgSize::Awg16, 25.0),
    (AwgSize::Awg14, 35.0),
    (AwgSize::Awg12, 45.0),
    (AwgSize::Awg10, 60.0),
    (AwgSize::Awg8, 80.0),
    (AwgSize::Awg6, 120.0),
    (AwgSize::Awg4, 160.0),
    (AwgSize::Awg2, 210.0),
    (AwgSize::Awg1, 245.0),
    (AwgSize::Awg1_0, 285.0),
    (AwgSize::Awg2_0, 330.0),
    (AwgSize::Awg3_0, 385.0),
    (AwgSize::Awg4_0, 445.0),
];

pub fn resistance_ohm_per_m(size: AwgSize) -> Option<f64> {
    nec::resistance_ohm_per_m(size)
}

/// Multiplier for conductors run inside an engine space
pub const ENGINE_SPACE_FACTOR: f64 = 0.85;

/// Bundling factor by the number of current-carrying conductors in a bundle
pub fn bundling_factor(conductors: u32) -> f64 {
    match conductors {
        0..=2 => 1.00,
        3 => 0.70,
        4..=6 => 0.60,
        7..=24 => 0.50,
        _ => 0.40,
    }
}

/// NEC 310.15(B) ambient formula `sqrt((Tc - Ta) / (Tc - 30))`, capped at 1.0.
///
/// `None` when the ambient reaches the conductor rating.
pub fn ambient_correction(ambient_c: f64, rated_c: f64) -> Option<f64> {
    if ambient_c >= rated_c {
        return None;
    }
    Some(((rated_c - ambient_c) / (rated_c - 30.0)).sqrt().min(1.0))
}

// ============================================================================
// Fuse Catalogs
// ============================================================================

/// Nominal system voltages that qualify for automotive fuses
pub const AUTOMOTIVE_VOLTAGES: [f64; 3] = [12.0, 24.0, 48.0];

/// SAE J2077 voltage rating of blade and MAXI fuses (V DC)
pub const AUTOMOTIVE_FUSE_MAX_V: f64 = 32.0;

/// Largest adjusted current the automotive fuse catalog covers
pub const AUTOMOTIVE_CURRENT_CEILING_A: f64 = 120.0;

/// ATO/ATC blade fuse ratings
pub const BLADE_FUSES_A: &[f64] = &[
    1.0, 2.0, 3.0, 4.0, 5.0, 7.5, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0,
];

/// MAXI fuse ratings
pub const MAXI_FUSES_A: &[f64] = &[50.0, 60.0, 70.0, 80.0, 100.0, 120.0];

/// ANL fuse ratings
pub const ANL_FUSES_A: &[f64] = &[
    35.0, 40.0, 50.0, 60.0, 80.0, 100.0, 125.0, 150.0, 175.0, 200.0, 225.0, 250.0, 300.0, 325.0,
    350.0, 400.0, 500.0,
];

/// Automotive fuse body style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutomotiveFuse {
    /// ATO/ATC blade fuse
    Blade,
    /// MAXI fuse
    Maxi,
}

impl AutomotiveFuse {
    pub fn display_name(&self) -> &'static str {
        match self {
            AutomotiveFuse::Blade => "ATO/ATC blade fuse",
            AutomotiveFuse::Maxi => "MAXI fuse",
        }
    }
}

/// Smallest blade or MAXI fuse at or above the current
pub fn automotive_fuse(current_a: f64) -> Option<(AutomotiveFuse, f64)> {
    let blade = BLADE_FUSES_A.iter().map(|&a| (AutomotiveFuse::Blade, a));
    let maxi = MAXI_FUSES_A.iter().map(|&a| (AutomotiveFuse::Maxi, a));
    blade.chain(maxi).find(|&(_, rating)| rating >= current_a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ampacity_table() {
        let lookup = |size: AwgSize| AMPACITY_105C.iter().find(|(s, _)| *s == size).map(|(_, a)| *a);
        assert_eq!(lookup(AwgSize::Awg10), Some(60.0));
        assert_eq!(lookup(AwgSize::Awg3), None);
        assert!(AMPACITY_105C.windows(2).all(|w| w[0].1 < w[1].1));
        assert!(AMPACITY_105C.iter().all(|(s, _)| resistance_ohm_per_m(*s).is_some()));
    }

    #[test]
    fn test_bundling() {
        assert_eq!(bundling_factor(2), 1.0);
        assert_eq!(bundling_factor(3), 0.7);
        assert_eq!(bundling_factor(5), 0.6);
        assert_eq!(bundling_factor(30), 0.4);
    }

    #[test]
    fn test_ambient_formula() {
        assert_eq!(ambient_correction(20.0, 105.0), Some(1.0));
        assert_relative_eq!(
            ambient_correction(50.0, 105.0).unwrap(),
            (55.0_f64 / 75.0).sqrt(),
            epsilon = 1e-12
        );
        assert_eq!(ambient_correction(105.0, 105.0), None);
    }

    #[test]
    fn test_automotive_fuse_selection() {
        assert_eq!(automotive_fuse(25.0), Some((AutomotiveFuse::Blade, 25.0)));
        assert_eq!(automotive_fuse(6.0), Some((AutomotiveFuse::Blade, 7.5)));
        assert_eq!(automotive_fuse(41.0), Some((AutomotiveFuse::Maxi, 50.0)));
        assert_eq!(automotive_fuse(120.0), Some((AutomotiveFuse::Maxi, 120.0)));
        assert_eq!(automotive_fuse(121.0), None);
    }
}
