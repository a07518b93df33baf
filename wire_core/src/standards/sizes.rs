//! Standard Conductor Sizes
//!
//! Conductor size designations for both unit systems, with the nominal
//! cross-sectional areas used to map between them.
//!
//! ## AWG / kcmil
//!
//! Areas are the NEC Chapter 9 Table 8 values (stranded), converted to mm².
//!
//! ## Metric
//!
//! IEC 60228 nominal cross-sections. The nominal value *is* the area.
//!
//! ## Nearest-Equivalent Conversion
//!
//! Converting between systems picks the size in the other system whose area
//! is closest to the original; a tie goes to the larger size. The mapping is
//! lossy: 6 AWG (13.30 mm²) becomes 16 mm², and 16 mm² comes back as 6 AWG,
//! but 4 AWG (21.15 mm²) becomes 25 mm², which comes back as 3 AWG. A round
//! trip always lands on the original gauge or the one next to it.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::standards::UnitSystem;

/// AWG and kcmil conductor sizes, ascending by area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AwgSize {
    #[serde(rename = "18 AWG")]
    Awg18,
    #[serde(rename = "16 AWG")]
    Awg16,
    #[serde(rename = "14 AWG")]
    Awg14,
    #[serde(rename = "12 AWG")]
    Awg12,
    #[serde(rename = "10 AWG")]
    Awg10,
    #[serde(rename = "8 AWG")]
    Awg8,
    #[serde(rename = "6 AWG")]
    Awg6,
    #[serde(rename = "4 AWG")]
    Awg4,
    #[serde(rename = "3 AWG")]
    Awg3,
    #[serde(rename = "2 AWG")]
    Awg2,
    #[serde(rename = "1 AWG")]
    Awg1,
    #[serde(rename = "1/0 AWG")]
    Awg1_0,
    #[serde(rename = "2/0 AWG")]
    Awg2_0,
    #[serde(rename = "3/0 AWG")]
    Awg3_0,
    #[serde(rename = "4/0 AWG")]
    Awg4_0,
    #[serde(rename = "250 kcmil")]
    Kcmil250,
    #[serde(rename = "300 kcmil")]
    Kcmil300,
    #[serde(rename = "350 kcmil")]
    Kcmil350,
    #[serde(rename = "400 kcmil")]
    Kcmil400,
    #[serde(rename = "500 kcmil")]
    Kcmil500,
}

impl AwgSize {
    /// All sizes, ascending by cross-sectional area
    pub const ALL: [AwgSize; 20] = [
        AwgSize::Awg18,
        AwgSize::Awg16,
        AwgSize::Awg14,
        AwgSize::Awg12,
        AwgSize::Awg10,
        AwgSize::Awg8,
        AwgSize::Awg6,
        AwgSize::Awg4,
        AwgSize::Awg3,
        AwgSize::Awg2,
        AwgSize::Awg1,
        AwgSize::Awg1_0,
        AwgSize::Awg2_0,
        AwgSize::Awg3_0,
        AwgSize::Awg4_0,
        AwgSize::Kcmil250,
        AwgSize::Kcmil300,
        AwgSize::Kcmil350,
        AwgSize::Kcmil400,
        AwgSize::Kcmil500,
    ];

    /// Conductor cross-sectional area in mm² (NEC Chapter 9 Table 8)
    pub fn area_mm2(&self) -> f64 {
        match self {
            AwgSize::Awg18 => 0.823,
            AwgSize::Awg16 => 1.31,
            AwgSize::Awg14 => 2.08,
            AwgSize::Awg12 => 3.31,
            AwgSize::Awg10 => 5.261,
            AwgSize::Awg8 => 8.367,
            AwgSize::Awg6 => 13.30,
            AwgSize::Awg4 => 21.15,
            AwgSize::Awg3 => 26.67,
            AwgSize::Awg2 => 33.62,
            AwgSize::Awg1 => 42.41,
            AwgSize::Awg1_0 => 53.49,
            AwgSize::Awg2_0 => 67.43,
            AwgSize::Awg3_0 => 85.01,
            AwgSize::Awg4_0 => 107.2,
            AwgSize::Kcmil250 => 127.0,
            AwgSize::Kcmil300 => 152.0,
            AwgSize::Kcmil350 => 177.0,
            AwgSize::Kcmil400 => 203.0,
            AwgSize::Kcmil500 => 253.0,
        }
    }

    /// Display label (e.g. "12 AWG", "1/0 AWG", "250 kcmil")
    pub fn label(&self) -> &'static str {
        match self {
            AwgSize::Awg18 => "18 AWG",
            AwgSize::Awg16 => "16 AWG",
            AwgSize::Awg14 => "14 AWG",
            AwgSize::Awg12 => "12 AWG",
            AwgSize::Awg10 => "10 AWG",
            AwgSize::Awg8 => "8 AWG",
            AwgSize::Awg6 => "6 AWG",
            AwgSize::Awg4 => "4 AWG",
            AwgSize::Awg3 => "3 AWG",
            AwgSize::Awg2 => "2 AWG",
            AwgSize::Awg1 => "1 AWG",
            AwgSize::Awg1_0 => "1/0 AWG",
            AwgSize::Awg2_0 => "2/0 AWG",
            AwgSize::Awg3_0 => "3/0 AWG",
            AwgSize::Awg4_0 => "4/0 AWG",
            AwgSize::Kcmil250 => "250 kcmil",
            AwgSize::Kcmil300 => "300 kcmil",
            AwgSize::Kcmil350 => "350 kcmil",
            AwgSize::Kcmil400 => "400 kcmil",
            AwgSize::Kcmil500 => "500 kcmil",
        }
    }

    /// Position in the ascending size order
    pub fn index(&self) -> usize {
        // ALL is exhaustive, so the search cannot miss
        AwgSize::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Nearest IEC metric size by area (lossy)
    pub fn nearest_metric(&self) -> MetricSize {
        nearest_by_area(&MetricSize::ALL, self.area_mm2(), MetricSize::area_mm2)
    }
}

impl std::fmt::Display for AwgSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// IEC 60228 metric conductor sizes, ascending by area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricSize {
    #[serde(rename = "0.5mm2")]
    Mm0_5,
    #[serde(rename = "0.75mm2")]
    Mm0_75,
    #[serde(rename = "1mm2")]
    Mm1,
    #[serde(rename = "1.5mm2")]
    Mm1_5,
    #[serde(rename = "2.5mm2")]
    Mm2_5,
    #[serde(rename = "4mm2")]
    Mm4,
    #[serde(rename = "6mm2")]
    Mm6,
    #[serde(rename = "10mm2")]
    Mm10,
    #[serde(rename = "16mm2")]
    Mm16,
    #[serde(rename = "25mm2")]
    Mm25,
    #[serde(rename = "35mm2")]
    Mm35,
    #[serde(rename = "50mm2")]
    Mm50,
    #[serde(rename = "70mm2")]
    Mm70,
    #[serde(rename = "95mm2")]
    Mm95,
    #[serde(rename = "120mm2")]
    Mm120,
    #[serde(rename = "150mm2")]
    Mm150,
    #[serde(rename = "185mm2")]
    Mm185,
    #[serde(rename = "240mm2")]
    Mm240,
}

impl MetricSize {
    /// All sizes, ascending by cross-sectional area
    pub const ALL: [MetricSize; 18] = [
        MetricSize::Mm0_5,
        MetricSize::Mm0_75,
        MetricSize::Mm1,
        MetricSize::Mm1_5,
        MetricSize::Mm2_5,
        MetricSize::Mm4,
        MetricSize::Mm6,
        MetricSize::Mm10,
        MetricSize::Mm16,
        MetricSize::Mm25,
        MetricSize::Mm35,
        MetricSize::Mm50,
        MetricSize::Mm70,
        MetricSize::Mm95,
        MetricSize::Mm120,
        MetricSize::Mm150,
        MetricSize::Mm185,
        MetricSize::Mm240,
    ];

    /// Nominal cross-sectional area in mm²
    pub fn area_mm2(&self) -> f64 {
        match self {
            MetricSize::Mm0_5 => 0.5,
            MetricSize::Mm0_75 => 0.75,
            MetricSize::Mm1 => 1.0,
            MetricSize::Mm1_5 => 1.5,
            MetricSize::Mm2_5 => 2.5,
            MetricSize::Mm4 => 4.0,
            MetricSize::Mm6 => 6.0,
            MetricSize::Mm10 => 10.0,
            MetricSize::Mm16 => 16.0,
            MetricSize::Mm25 => 25.0,
            MetricSize::Mm35 => 35.0,
            MetricSize::Mm50 => 50.0,
            MetricSize::Mm70 => 70.0,
            MetricSize::Mm95 => 95.0,
            MetricSize::Mm120 => 120.0,
            MetricSize::Mm150 => 150.0,
            MetricSize::Mm185 => 185.0,
            MetricSize::Mm240 => 240.0,
        }
    }

    /// Display label (e.g. "2.5 mm²")
    pub fn label(&self) -> String {
        format!("{} mm²", self.area_mm2())
    }

    /// Nearest AWG/kcmil size by area (lossy)
    pub fn nearest_awg(&self) -> AwgSize {
        nearest_by_area(&AwgSize::ALL, self.area_mm2(), AwgSize::area_mm2)
    }
}

impl std::fmt::Display for MetricSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A conductor size in either unit system
///
/// Serializes as the bare size string: `"6 AWG"`, `"250 kcmil"`, `"2.5mm2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireSize {
    Awg(AwgSize),
    Metric(MetricSize),
}

impl WireSize {
    /// Conductor cross-sectional area in mm²
    pub fn area_mm2(&self) -> f64 {
        match self {
            WireSize::Awg(s) => s.area_mm2(),
            WireSize::Metric(s) => s.area_mm2(),
        }
    }

    /// Display label
    pub fn label(&self) -> String {
        match self {
            WireSize::Awg(s) => s.label().to_string(),
            WireSize::Metric(s) => s.label(),
        }
    }

    /// Unit system this size belongs to
    pub fn unit_system(&self) -> UnitSystem {
        match self {
            WireSize::Awg(_) => UnitSystem::Imperial,
            WireSize::Metric(_) => UnitSystem::Metric,
        }
    }

    /// Express this size in the target unit system.
    ///
    /// Returns the size unchanged when it already belongs to `target`,
    /// otherwise the nearest equivalent.
    pub fn to_system(&self, target: UnitSystem) -> WireSize {
        match (self, target) {
            (WireSize::Awg(s), UnitSystem::Metric) => WireSize::Metric(s.nearest_metric()),
            (WireSize::Metric(s), UnitSystem::Imperial) => WireSize::Awg(s.nearest_awg()),
            _ => *self,
        }
    }

    /// Parse from common string representations
    ///
    /// Accepts "12", "12 AWG", "12awg", "1/0", "250 kcmil", "2.5mm2", "2.5 mm²".
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_lowercase().replace(' ', "");
        if let Some(metric) = normalized
            .strip_suffix("mm2")
            .or_else(|| normalized.strip_suffix("mm²"))
        {
            let area: f64 = metric
                .parse()
                .map_err(|_| CalcError::invalid_input("size", s, "Not a metric size"))?;
            return MetricSize::ALL
                .iter()
                .find(|m| (m.area_mm2() - area).abs() < 1e-9)
                .map(|m| WireSize::Metric(*m))
                .ok_or_else(|| {
                    CalcError::invalid_input("size", s, "Not a standard IEC 60228 cross-section")
                });
        }

        let gauge = normalized
            .strip_suffix("awg")
            .or_else(|| normalized.strip_suffix("kcmil"))
            .unwrap_or(&normalized);
        AwgSize::ALL
            .iter()
            .find(|a| {
                let label = a.label().to_lowercase();
                label.split(' ').next() == Some(gauge)
            })
            .map(|a| WireSize::Awg(*a))
            .ok_or_else(|| CalcError::invalid_input("size", s, "Not a standard AWG/kcmil size"))
    }
}

impl From<AwgSize> for WireSize {
    fn from(size: AwgSize) -> Self {
        WireSize::Awg(size)
    }
}

impl From<MetricSize> for WireSize {
    fn from(size: MetricSize) -> Self {
        WireSize::Metric(size)
    }
}

impl std::fmt::Display for WireSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Pick the entry whose area is closest to `target_mm2`; ties go to the
/// larger entry (`candidates` must be ascending).
fn nearest_by_area<T: Copy>(candidates: &[T], target_mm2: f64, area: fn(&T) -> f64) -> T {
    let mut best = candidates[0];
    let mut best_diff = f64::INFINITY;
    for candidate in candidates {
        let diff = (area(candidate) - target_mm2).abs();
        if diff <= best_diff {
            best = *candidate;
            best_diff = diff;
        }
    }
    best
}
