//! # wire_core - Multi-Standard Electrical Sizing Engine
//!
//! `wire_core` sizes conductors, breakers/fuses and conduit against NEC, IEC
//! and low-voltage DC rules. All inputs and outputs are JSON-serializable
//! plain records, so the engine sits equally well behind a CLI, a form or a
//! service.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over the input and static tables
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Validation, unsupported-standard and no-solution errors
//!   are distinct, structured variants
//! - **Auditable**: Results carry every factor applied and the code sections
//!   they come from
//!
//! ## Quick Start
//!
//! ```rust
//! use wire_core::calculations::BreakerInput;
//! use wire_core::circuit::{ApplicationType, LoadInput, VoltageSystem};
//! use wire_core::size_breaker;
//!
//! let input = BreakerInput {
//!     application: ApplicationType::Automotive,
//!     load: LoadInput::current(20.0, 12.0, VoltageSystem::Dc),
//!     ..Default::default()
//! };
//! let result = size_breaker(&input).unwrap();
//! assert!(result.automotive_substitution);
//! assert_eq!(result.rating_a, 25.0);
//! ```
//!
//! ## Modules
//!
//! - [`router`] - Entry points: standard resolution, validation, dispatch
//! - [`calculations`] - Conductor, breaker/fuse and conduit sizing
//! - [`standards`] - Standard identifiers and the NEC, IEC and DC tables
//! - [`derating`] - Correction-factor composition
//! - [`compliance`] - Compliance flags and verdict
//! - [`circuit`] - Load and environment descriptions
//! - [`settings`] - Design defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod circuit;
pub mod compliance;
pub mod derating;
pub mod errors;
pub mod router;
pub mod settings;
pub mod standards;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationRequest, CalculationResponse};
pub use errors::{CalcError, CalcResult};
pub use router::{
    calculate, calculate_with, size_breaker, size_breaker_with, size_conductor,
    size_conductor_with, size_conduit_fill, size_conduit_fill_with, validate_input,
    validate_input_with,
};
pub use settings::DesignSettings;
pub use standards::{Standard, WireSize};
