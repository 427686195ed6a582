//! Validation Engine
//!
//! Clean separation of validation logic from unit assembly and LSP concerns.

pub mod engine;
pub mod statement;

pub use engine::{validate_document, Diagnostic, Position, Severity, Span, DIAGNOSTIC_SOURCE};
pub use statement::{validate_formula, validate_include, VALID_ROLES};

// Re-export common types
pub use engine::ValidationResult;
