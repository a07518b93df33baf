//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the sizing engine converts
//! between. These are lightweight f64 newtypes that serialize as plain numbers.
//!
//! ## Unit Systems
//!
//! NEC and the low-voltage DC variants work in US customary units (feet,
//! square inches, AWG/kcmil); IEC works in SI (metres, mm²). The router
//! normalizes every result to metric alongside the native values.
//!
//! ## Example
//!
//! ```rust
//! use wire_core::units::{Celsius, Fahrenheit, Feet, Meters};
//!
//! let run: Meters = Feet(100.0).into();
//! assert!((run.0 - 30.48).abs() < 1e-9);
//!
//! let ambient: Celsius = Fahrenheit(86.0).into();
//! assert!((ambient.0 - 30.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Metres per foot (exact)
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Square millimetres per square inch (exact)
pub const MM2_PER_IN2: f64 = 645.16;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Feet> for Meters {
    fn from(ft: Feet) -> Self {
        Meters(ft.0 * METERS_PER_FOOT)
    }
}

impl From<Meters> for Feet {
    fn from(m: Meters) -> Self {
        Feet(m.0 / METERS_PER_FOOT)
    }
}

/// Unit a caller supplied a circuit length in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Feet,
    Meters,
}

impl LengthUnit {
    /// Convert a raw length in this unit to metres
    pub fn to_meters(self, value: f64) -> Meters {
        match self {
            LengthUnit::Feet => Feet(value).into(),
            LengthUnit::Meters => Meters(value),
        }
    }

    /// Convert metres back to a raw length in this unit
    pub fn from_meters(self, meters: Meters) -> f64 {
        match self {
            LengthUnit::Feet => Feet::from(meters).0,
            LengthUnit::Meters => meters.0,
        }
    }

    /// Short symbol for reports
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Feet => "ft",
            LengthUnit::Meters => "m",
        }
    }
}

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

/// Unit a caller supplied a temperature in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a raw temperature in this unit to Celsius
    pub fn to_celsius(self, value: f64) -> Celsius {
        match self {
            TemperatureUnit::Celsius => Celsius(value),
            TemperatureUnit::Fahrenheit => Fahrenheit(value).into(),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

impl From<SqIn> for SqMm {
    fn from(sqin: SqIn) -> Self {
        SqMm(sqin.0 * MM2_PER_IN2)
    }
}

impl From<SqMm> for SqIn {
    fn from(sqmm: SqMm) -> Self {
        SqIn(sqmm.0 / MM2_PER_IN2)
    }
}

impl SqMm {
    /// Area of a circle with the given diameter in millimetres
    pub fn from_diameter_mm(diameter_mm: f64) -> Self {
        SqMm(std::f64::consts::PI * diameter_mm * diameter_mm / 4.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Meters);
impl_arithmetic!(SqIn);
impl_arithmetic!(SqMm);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_meters() {
        let m: Meters = Feet(75.0).into();
        assert!((m.0 - 22.86).abs() < 1e-9);
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        let c: Celsius = Fahrenheit(86.0).into();
        assert!((c.0 - 30.0).abs() < 1e-9);
        let f: Fahrenheit = Celsius(40.0).into();
        assert!((f.0 - 104.0).abs() < 1e-9);
    }

    #[test]
    fn test_square_inch_to_mm2() {
        let mm2: SqMm = SqIn(1.0).into();
        assert_eq!(mm2.0, 645.16);
    }

    #[test]
    fn test_length_unit_round_trip() {
        let m = LengthUnit::Feet.to_meters(100.0);
        assert!((LengthUnit::Feet.from_meters(m) - 100.0).abs() < 1e-9);
        assert_eq!(LengthUnit::Meters.to_meters(25.0), Meters(25.0));
    }

    #[test]
    fn test_temperature_unit() {
        assert_eq!(TemperatureUnit::Fahrenheit.to_celsius(86.0), Celsius(30.0));
        assert_eq!(TemperatureUnit::Celsius.to_celsius(86.0), Celsius(86.0));
        let unit: TemperatureUnit = serde_json::from_str("\"fahrenheit\"").unwrap();
        assert_eq!(unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_arithmetic() {
        let a = SqMm(10.0);
        let b = SqMm(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let ft = Feet(12.5);
        let json = serde_json::to_string(&ft).unwrap();
        assert_eq!(json, "12.5");
        let unit: LengthUnit = serde_json::from_str("\"meters\"").unwrap();
        assert_eq!(unit, LengthUnit::Meters);
    }
}
