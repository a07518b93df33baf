//! # Sizing Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, ...)` - Pure calculation over validated input
//!
//! The public entry points live in [`crate::router`], which resolves the
//! standard and validates before calling into these modules.
//!
//! ## Available Calculations
//!
//! - [`conductor`] - Conductor size from load, length and environment
//! - [`protection`] - Breaker or fuse rating
//! - [`conduit`] - Conduit trade size from the conductors it carries

pub mod conductor;
pub mod conduit;
pub mod protection;

use serde::{Deserialize, Serialize};

pub use conductor::{ConductorInput, ConductorResult};
pub use conduit::{ConduitInput, ConduitResult, WireEntry};
pub use protection::{BreakerInput, BreakerResult, StringConfiguration};

/// Any sizing request.
///
/// ```json
/// { "kind": "Breaker", "application": "automotive", "load_current_a": 20.0, "voltage_v": 12.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CalculationRequest {
    Conductor(ConductorInput),
    Breaker(BreakerInput),
    ConduitFill(ConduitInput),
}

impl CalculationRequest {
    /// Get the user-provided label for this request
    pub fn label(&self) -> &str {
        match self {
            CalculationRequest::Conductor(c) => &c.label,
            CalculationRequest::Breaker(b) => &b.label,
            CalculationRequest::ConduitFill(c) => &c.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationRequest::Conductor(_) => "Conductor",
            CalculationRequest::Breaker(_) => "Breaker",
            CalculationRequest::ConduitFill(_) => "ConduitFill",
        }
    }

    /// Standard identifier as supplied, if any
    pub fn standard_id(&self) -> Option<&str> {
        match self {
            CalculationRequest::Conductor(c) => c.standard.as_deref(),
            CalculationRequest::Breaker(b) => b.standard.as_deref(),
            CalculationRequest::ConduitFill(c) => c.standard.as_deref(),
        }
    }
}

/// Result of any sizing request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CalculationResponse {
    Conductor(ConductorResult),
    Breaker(BreakerResult),
    ConduitFill(ConduitResult),
}

impl CalculationResponse {
    pub fn is_compliant(&self) -> bool {
        match self {
            CalculationResponse::Conductor(r) => r.is_compliant(),
            CalculationResponse::Breaker(r) => r.is_compliant(),
            CalculationResponse::ConduitFill(r) => r.is_compliant(),
        }
    }

    pub fn issues(&self) -> &[String] {
        match self {
            CalculationResponse::Conductor(r) => &r.compliance.issues,
            CalculationResponse::Breaker(r) => &r.compliance.issues,
            CalculationResponse::ConduitFill(r) => &r.compliance.issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_by_kind() {
        let json = r#"{
            "kind": "Breaker",
            "label": "Fog lights",
            "application": "automotive",
            "load_current_a": 20.0,
            "voltage_v": 12.0
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.calc_type(), "Breaker");
        assert_eq!(request.label(), "Fog lights");
        assert_eq!(request.standard_id(), None);
        match request {
            CalculationRequest::Breaker(input) => {
                assert_eq!(input.load.load_current_a, Some(20.0));
                assert_eq!(input.environment.ambient_temp, 30.0);
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn test_conduit_request() {
        let json = r#"{
            "kind": "ConduitFill",
            "standard": "NEC",
            "conduit_type": "PVC-40",
            "wires": [{ "size": "6 AWG", "count": 3, "insulation": "THHN" }]
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.standard_id(), Some("NEC"));
    }
}
