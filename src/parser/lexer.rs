//! TPTP Lexical Primitives
//!
//! Shared low-level scanning helpers: statement-start recognition and the
//! quote-aware parenthesis balance used by both the unit assembler and the
//! statement validator.

use std::sync::LazyLock;

use regex::Regex;

/// Declaration kinds a TPTP unit may open with.
pub const DECLARATION_KINDS: [&str; 6] = ["tpi", "thf", "tff", "tcf", "fof", "cnf"];

static FORMULA_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(tpi|thf|tff|tcf|fof|cnf)\s*\(").unwrap());

static INCLUDE_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^include\s*\(").unwrap());

/// Does this trimmed line open a `kind(...)` declaration?
pub fn is_formula_start(line: &str) -> bool {
    FORMULA_START.is_match(line)
}

/// Does this trimmed line open an `include(...)` directive?
pub fn is_include_start(line: &str) -> bool {
    INCLUDE_START.is_match(line)
}

/// Result of scanning a statement for parenthesis balance.
///
/// `position` is the byte offset of the offending character, or the final
/// offset when a closing parenthesis is missing entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParenBalance {
    pub error: bool,
    pub position: usize,
    pub message: &'static str,
}

impl ParenBalance {
    fn balanced() -> Self {
        Self {
            error: false,
            position: 0,
            message: "",
        }
    }
}

/// Scan `text` left to right, tracking a signed balance counter.
///
/// Parentheses inside single- or double-quoted regions are not counted; a
/// quote character immediately preceded by `\` does not toggle quote state.
pub fn check_parentheses_balance(text: &str) -> ParenBalance {
    let bytes = text.as_bytes();
    let mut balance: i32 = 0;
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    for (i, &ch) in bytes.iter().enumerate() {
        let escaped = i > 0 && bytes[i - 1] == b'\\';

        if ch == b'\'' && !escaped {
            in_single_quote = !in_single_quote;
        } else if ch == b'"' && !escaped {
            in_double_quote = !in_double_quote;
        }

        if in_single_quote || in_double_quote {
            continue;
        }

        match ch {
            b'(' => balance += 1,
            b')' => {
                balance -= 1;
                if balance < 0 {
                    return ParenBalance {
                        error: true,
                        position: i,
                        message: "Unmatched closing parenthesis",
                    };
                }
            }
            _ => {}
        }
    }

    if balance > 0 {
        return ParenBalance {
            error: true,
            position: text.len().saturating_sub(1),
            message: "Missing closing parenthesis",
        };
    }

    ParenBalance::balanced()
}
