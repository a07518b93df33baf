//! # Compliance Evaluation
//!
//! Folds the individual checks of a sizing result into one verdict. Each
//! check is optional: `None` means it does not apply to the request and is
//! left out of the verdict; only `Some(false)` makes a result non-compliant.

use serde::{Deserialize, Serialize};

/// Per-check outcome; `None` = not applicable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplianceFlags {
    pub ampacity: Option<bool>,
    pub voltage_drop: Option<bool>,
    pub temperature: Option<bool>,
    /// Application-specific rule (automotive, solar)
    pub application: Option<bool>,
    /// Protective device does not exceed the conductor it protects
    pub coordination: Option<bool>,
    /// Conduit fill within the allowable percentage
    pub fill: Option<bool>,
}

impl ComplianceFlags {
    /// AND of every applicable flag
    pub fn is_compliant(&self) -> bool {
        self.applicable().all(|(_, passed)| passed)
    }

    /// Applicable flags with their check
    pub fn applicable(&self) -> impl Iterator<Item = (ComplianceCheck, bool)> + '_ {
        ComplianceCheck::ALL
            .into_iter()
            .filter_map(|check| self.get(check).map(|passed| (check, passed)))
    }

    pub fn get(&self, check: ComplianceCheck) -> Option<bool> {
        match check {
            ComplianceCheck::Ampacity => self.ampacity,
            ComplianceCheck::VoltageDrop => self.voltage_drop,
            ComplianceCheck::Temperature => self.temperature,
            ComplianceCheck::Application => self.application,
            ComplianceCheck::Coordination => self.coordination,
            ComplianceCheck::Fill => self.fill,
        }
    }

    fn slot(&mut self, check: ComplianceCheck) -> &mut Option<bool> {
        match check {
            ComplianceCheck::Ampacity => &mut self.ampacity,
            ComplianceCheck::VoltageDrop => &mut self.voltage_drop,
            ComplianceCheck::Temperature => &mut self.temperature,
            ComplianceCheck::Application => &mut self.application,
            ComplianceCheck::Coordination => &mut self.coordination,
            ComplianceCheck::Fill => &mut self.fill,
        }
    }
}

/// The individual checks a result can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceCheck {
    Ampacity,
    VoltageDrop,
    Temperature,
    Application,
    Coordination,
    Fill,
}

impl ComplianceCheck {
    pub const ALL: [ComplianceCheck; 6] = [
        ComplianceCheck::Ampacity,
        ComplianceCheck::VoltageDrop,
        ComplianceCheck::Temperature,
        ComplianceCheck::Application,
        ComplianceCheck::Coordination,
        ComplianceCheck::Fill,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ComplianceCheck::Ampacity => "Ampacity",
            ComplianceCheck::VoltageDrop => "Voltage drop",
            ComplianceCheck::Temperature => "Temperature",
            ComplianceCheck::Application => "Application",
            ComplianceCheck::Coordination => "Coordination",
            ComplianceCheck::Fill => "Conduit fill",
        }
    }
}

impl std::fmt::Display for ComplianceCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Verdict plus one message per failed check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub flags: ComplianceFlags,
    pub compliant: bool,
    pub issues: Vec<String>,
}

/// Collects check outcomes and produces a [`ComplianceReport`].
///
/// ```rust
/// use wire_core::compliance::{ComplianceCheck, ComplianceEvaluator};
///
/// let report = ComplianceEvaluator::new()
///     .check(ComplianceCheck::Ampacity, true, "25 A >= 25 A")
///     .check(ComplianceCheck::VoltageDrop, false, "6.1% exceeds 5%")
///     .finish();
/// assert!(!report.compliant);
/// assert_eq!(report.issues.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ComplianceEvaluator {
    flags: ComplianceFlags,
    issues: Vec<String>,
}

impl ComplianceEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an applicable check; `detail` is kept only when it fails
    pub fn check(mut self, check: ComplianceCheck, passed: bool, detail: impl Into<String>) -> Self {
        *self.flags.slot(check) = Some(passed);
        if !passed {
            self.issues.push(format!("{check}: {}", detail.into()));
        }
        self
    }

    /// Record a check only when it applies
    pub fn check_if(
        self,
        applies: bool,
        check: ComplianceCheck,
        passed: bool,
        detail: impl Into<String>,
    ) -> Self {
        if applies {
            self.check(check, passed, detail)
        } else {
            self
        }
    }

    pub fn finish(self) -> ComplianceReport {
        ComplianceReport {
            compliant: self.flags.is_compliant(),
            flags: self.flags,
            issues: self.issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_applicable_is_ignored() {
        let flags = ComplianceFlags {
            ampacity: Some(true),
            ..Default::default()
        };
        assert!(flags.is_compliant());
        assert_eq!(flags.applicable().count(), 1);
    }

    #[test]
    fn test_any_failure_fails_verdict() {
        let flags = ComplianceFlags {
            ampacity: Some(true),
            voltage_drop: Some(true),
            temperature: Some(false),
            ..Default::default()
        };
        assert!(!flags.is_compliant());
    }

    #[test]
    fn test_evaluator_itemizes_failures() {
        let report = ComplianceEvaluator::new()
            .check(ComplianceCheck::Ampacity, true, "ok")
            .check(ComplianceCheck::Temperature, false, "ambient outside table")
            .check_if(false, ComplianceCheck::Coordination, false, "skipped")
            .finish();
        assert!(!report.compliant);
        assert_eq!(report.flags.coordination, None);
        assert_eq!(report.issues, vec!["Temperature: ambient outside table".to_string()]);
    }

    #[test]
    fn test_empty_report_is_compliant() {
        assert!(ComplianceEvaluator::new().finish().compliant);
    }
}
