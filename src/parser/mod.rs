//! TPTP Unit Assembler
//!
//! Reassembles logical statements out of an arbitrary physical line stream.
//! Focused solely on unit boundaries; all structural checking lives in the
//! validation module.

pub mod lexer;
pub mod unit;

pub use lexer::{check_parentheses_balance, is_formula_start, is_include_start, ParenBalance};
pub use unit::{LogicalUnit, Termination};

/// Fold a document's raw lines into logical units.
///
/// Each physical line is trimmed. Blank and `%`-comment lines are skipped,
/// contributing a single separating space to an in-progress unit so tokens
/// on either side do not run together. A unit completes once its buffer ends
/// with a period and parentheses balance outside quoted strings. A line that
/// independently opens a new declaration while a unit is still in progress
/// force-flushes the old unit; a unit still open at end of input is emitted
/// as such.
pub fn assemble_units(text: &str) -> Vec<LogicalUnit> {
    let mut units = Vec::new();
    let mut buffer = String::new();
    let mut in_progress = false;
    let mut start_line = 0usize;

    for (line_num, raw) in text.lines().enumerate() {
        let line = raw.trim();

        if line.is_empty() || line.starts_with('%') {
            if in_progress {
                buffer.push(' ');
            }
            continue;
        }

        // The common authoring error: the previous unit never got its
        // period and the author has already begun the next declaration.
        if in_progress && is_formula_start(line) {
            units.push(LogicalUnit {
                text: buffer.trim_end().to_string(),
                start_line,
                termination: Termination::ForcedFlush,
            });
            buffer.clear();
            in_progress = false;
        }

        if !in_progress {
            if is_formula_start(line) || is_include_start(line) {
                in_progress = true;
                start_line = line_num;
                buffer.push_str(line);
            } else {
                // Stray text outside any unit is ignored outright.
                continue;
            }
        } else {
            buffer.push(' ');
            buffer.push_str(line);
        }

        let candidate = buffer.trim_end();
        if candidate.ends_with('.') && !check_parentheses_balance(candidate).error {
            units.push(LogicalUnit {
                text: candidate.to_string(),
                start_line,
                termination: Termination::Complete,
            });
            buffer.clear();
            in_progress = false;
        }
    }

    if in_progress && !buffer.trim().is_empty() {
        units.push(LogicalUnit {
            text: buffer.trim_end().to_string(),
            start_line,
            termination: Termination::EndOfInput,
        });
    }

    units
}
