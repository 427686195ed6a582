//! Validation Engine
//!
//! Core validation logic separated from unit assembly and LSP concerns.

use crate::parser::{assemble_units, is_formula_start, is_include_start, LogicalUnit, Termination};
use crate::validation::statement::{validate_formula, validate_include};

/// Source tag attached to every diagnostic, used by hosts to group and
/// filter diagnostics from this validator among others.
pub const DIAGNOSTIC_SOURCE: &str = "tptp-lsp";

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A point in the original unmodified text, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A half-open source region between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Span covering `text` in full on a single line.
    pub fn over(line: usize, text: &str) -> Self {
        Self::new(Position::new(line, 0), Position::new(line, text.len()))
    }

    /// Zero-width span at a single point.
    pub fn at(line: usize, character: usize) -> Self {
        let point = Position::new(line, character);
        Self::new(point, point)
    }
}

/// A diagnostic message for a validation issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub range: Span,
    pub message: String,
    pub source: &'static str,
}

/// Result of validating a document or statement
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add_error(&mut self, range: Span, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            range,
            message,
            source: DIAGNOSTIC_SOURCE,
        });
    }

    pub fn add_warning(&mut self, range: Span, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            range,
            message,
            source: DIAGNOSTIC_SOURCE,
        });
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Validate an entire document.
///
/// Pure function of the input text: folds the assembled logical units into
/// one diagnostic list, which entirely replaces any previously published
/// set. Repeated calls with unchanged text return identical results.
pub fn validate_document(text: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    for unit in assemble_units(text) {
        match unit.termination {
            Termination::Complete => {
                validate_unit(&unit, &mut result);
            }
            Termination::ForcedFlush => {
                // The author began the next declaration before terminating
                // this one; the flushed prefix gets the missing-period error
                // and nothing else.
                result.add_error(
                    Span::at(unit.start_line, unit.text.len()),
                    missing_period_message(&unit.text).to_string(),
                );
            }
            Termination::EndOfInput => {
                if is_formula_start(&unit.text) && !unit.text.ends_with('.') {
                    result.add_error(
                        Span::at(unit.start_line, unit.text.len()),
                        missing_period_message(&unit.text).to_string(),
                    );
                }
                // Includes report their own period check inside
                // validate_include, keeping the error count at one.
                validate_unit(&unit, &mut result);
            }
        }
    }

    result
}

fn validate_unit(unit: &LogicalUnit, result: &mut ValidationResult) {
    if is_formula_start(&unit.text) {
        validate_formula(&unit.text, unit.start_line, result);
    } else if is_include_start(&unit.text) {
        validate_include(&unit.text, unit.start_line, result);
    }
}

fn missing_period_message(text: &str) -> &'static str {
    if is_include_start(text) {
        "Include statement must end with a period (.)"
    } else {
        "TPTP formula must end with a period (.)"
    }
}
