//! Validation of attendance records handed over by the HR framework.
//!
//! The status guard lives in [`status`]; field-level rules are declared on the
//! record itself through `validator` derives and run as the base validation.

pub mod status;

pub use validator::Validate;
