//! # Standard Router
//!
//! Public entry points. Each one resolves the standard identifier, validates
//! the whole request, and only then dispatches to the sizing calculation.
//!
//! Order of failure:
//!
//! 1. An identifier outside the supported set fails with
//!    [`CalcError::UnsupportedStandard`] before anything else is checked
//! 2. Validation problems are collected exhaustively into one
//!    [`CalcError::Validation`]
//! 3. Sizing may fail with one of the no-solution errors
//!
//! Breaker requests without a standard fall back to
//! [`DesignSettings::default_breaker_standard`] (IEC) and say so on the result.
//! Conductor and conduit requests must name one.

use crate::calculations::{
    conductor, conduit, protection, BreakerInput, BreakerResult, CalculationRequest,
    CalculationResponse, ConductorInput, ConductorResult, ConduitInput, ConduitResult,
};
use crate::errors::{CalcError, CalcResult};
use crate::settings::DesignSettings;
use crate::standards::Standard;

/// Parse an optional identifier; unsupported identifiers are an error
fn parse_standard(id: Option<&str>) -> CalcResult<Option<Standard>> {
    id.map(str::parse::<Standard>).transpose()
}

fn check(errors: Vec<CalcError>) -> CalcResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "request failed validation");
        Err(CalcError::validation(errors))
    }
}

/// Size a conductor with default settings
pub fn size_conductor(input: &ConductorInput) -> CalcResult<ConductorResult> {
    size_conductor_with(input, &DesignSettings::default())
}

pub fn size_conductor_with(input: &ConductorInput, settings: &DesignSettings) -> CalcResult<ConductorResult> {
    let standard = parse_standard(input.standard.as_deref())?;
    check(input.validation_errors(standard, settings))?;
    let standard = standard.ok_or_else(|| CalcError::missing_field("standard"))?;
    tracing::debug!(%standard, label = %input.label, "routing conductor request");
    conductor::calculate(input, standard, settings)
}

/// Size a breaker or fuse with default settings
pub fn size_breaker(input: &BreakerInput) -> CalcResult<BreakerResult> {
    size_breaker_with(input, &DesignSettings::default())
}

pub fn size_breaker_with(input: &BreakerInput, settings: &DesignSettings) -> CalcResult<BreakerResult> {
    let (standard, defaulted) = match parse_standard(input.standard.as_deref())? {
        Some(standard) => (standard, false),
        None => (settings.default_breaker_standard, true),
    };
    check(input.validation_errors(Some(standard)))?;
    tracing::debug!(%standard, defaulted, label = %input.label, "routing breaker request");
    protection::calculate(input, standard, defaulted)
}

/// Size conduit with default settings
pub fn size_conduit_fill(input: &ConduitInput) -> CalcResult<ConduitResult> {
    size_conduit_fill_with(input, &DesignSettings::default())
}

/// Conduit fill takes no settings today; the variant keeps the entry points uniform.
pub fn size_conduit_fill_with(input: &ConduitInput, _settings: &DesignSettings) -> CalcResult<ConduitResult> {
    let standard = parse_standard(input.standard.as_deref())?;
    check(input.validation_errors(standard))?;
    let standard = standard.ok_or_else(|| CalcError::missing_field("standard"))?;
    tracing::debug!(%standard, label = %input.label, "routing conduit request");
    conduit::calculate(input, standard)
}

/// Every problem with a request, as messages. Never fails; an empty list
/// means the request is valid.
pub fn validate_input(request: &CalculationRequest) -> Vec<String> {
    validate_input_with(request, &DesignSettings::default())
}

pub fn validate_input_with(request: &CalculationRequest, settings: &DesignSettings) -> Vec<String> {
    let standard = match parse_standard(request.standard_id()) {
        Ok(standard) => standard,
        Err(err) => return vec![err.to_string()],
    };
    let errors = match request {
        CalculationRequest::Conductor(input) => input.validation_errors(standard, settings),
        CalculationRequest::Breaker(input) => {
            input.validation_errors(Some(standard.unwrap_or(settings.default_breaker_standard)))
        }
        CalculationRequest::ConduitFill(input) => input.validation_errors(standard),
    };
    errors.iter().map(ToString::to_string).collect()
}

/// Run any request with default settings
pub fn calculate(request: &CalculationRequest) -> CalcResult<CalculationResponse> {
    calculate_with(request, &DesignSettings::default())
}

pub fn calculate_with(request: &CalculationRequest, settings: &DesignSettings) -> CalcResult<CalculationResponse> {
    match request {
        CalculationRequest::Conductor(input) => {
            size_conductor_with(input, settings).map(CalculationResponse::Conductor)
        }
        CalculationRequest::Breaker(input) => {
            size_breaker_with(input, settings).map(CalculationResponse::Breaker)
        }
        CalculationRequest::ConduitFill(input) => {
            size_conduit_fill_with(input, settings).map(CalculationResponse::ConduitFill)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{LoadInput, VoltageSystem};

    #[test]
    fn test_unsupported_standard_precedes_validation() {
        // Also invalid (no load, no length), but the standard is reported
        let input = ConductorInput {
            standard: Some("CEC".to_string()),
            ..Default::default()
        };
        let err = size_conductor(&input).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_STANDARD");
    }

    #[test]
    fn test_unsupported_standard_never_defaults_for_breakers() {
        let input = BreakerInput {
            standard: Some("JIS".to_string()),
            load: LoadInput::current(10.0, 230.0, VoltageSystem::SinglePhase),
            ..Default::default()
        };
        assert_eq!(size_breaker(&input).unwrap_err().error_code(), "UNSUPPORTED_STANDARD");
    }

    #[test]
    fn test_breaker_defaults_to_iec() {
        let input = BreakerInput {
            load: LoadInput::current(10.0, 230.0, VoltageSystem::SinglePhase),
            ..Default::default()
        };
        let result = size_breaker(&input).unwrap();
        assert_eq!(result.standard, Standard::Iec);
        assert!(result.standard_defaulted);
        assert_eq!(result.rating_a, 13.0);
    }

    #[test]
    fn test_settings_change_breaker_default() {
        let settings = DesignSettings {
            default_breaker_standard: Standard::Nec,
            ..Default::default()
        };
        let input = BreakerInput {
            load: LoadInput::current(10.0, 120.0, VoltageSystem::SinglePhase),
            ..Default::default()
        };
        let result = size_breaker_with(&input, &settings).unwrap();
        assert_eq!(result.standard, Standard::Nec);
        assert_eq!(result.rating_a, 15.0);
    }

    #[test]
    fn test_conductor_requires_standard() {
        let input = ConductorInput {
            load: LoadInput::current(10.0, 120.0, VoltageSystem::SinglePhase),
            length: Some(10.0),
            ..Default::default()
        };
        let err = size_conductor(&input).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
        assert!(err.to_string().contains("standard"));
    }

    #[test]
    fn test_validate_input_is_exhaustive() {
        let request = CalculationRequest::Conductor(ConductorInput {
            standard: Some("NEC".to_string()),
            load: LoadInput {
                load_current_a: Some(-5.0),
                load_power_w: Some(100.0),
                voltage_v: Some(0.0),
                ..Default::default()
            },
            length: Some(0.0),
            ..Default::default()
        });
        let messages = validate_input(&request);
        // both load modes, negative current, zero voltage, zero length
        assert_eq!(messages.len(), 4);
        assert!(calculate(&request).is_err());
    }

    #[test]
    fn test_validate_input_reports_unsupported_standard() {
        let request = CalculationRequest::ConduitFill(ConduitInput {
            standard: Some("XYZ".to_string()),
            ..Default::default()
        });
        let messages = validate_input(&request);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("XYZ"));
    }
}
