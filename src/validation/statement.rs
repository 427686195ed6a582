//! Statement Checks
//!
//! Structural and lexical validation of one assembled logical statement.
//! Every diagnostic is anchored on the statement's start line, with
//! character offsets into the joined statement text.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::check_parentheses_balance;
use crate::validation::engine::{Position, Span, ValidationResult};

/// The closed role vocabulary. Membership only; an unknown role is a
/// warning, never an error.
pub const VALID_ROLES: [&str; 15] = [
    "axiom",
    "hypothesis",
    "definition",
    "assumption",
    "lemma",
    "theorem",
    "corollary",
    "conjecture",
    "negated_conjecture",
    "plain",
    "type",
    "fi_domain",
    "fi_functors",
    "fi_predicates",
    "unknown",
];

static KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(tpi|thf|tff|tcf|fof|cnf)\s*").unwrap());

static STRUCTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(tpi|thf|tff|tcf|fof|cnf)\s*\(\s*([^,\s]+)\s*,\s*([^,\s]+)\s*,\s*(.+)\)\s*\.?\s*$")
        .unwrap()
});

static INCLUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^include\s*\(\s*'[^']+'\s*\)\s*\.\s*$").unwrap());

static OPERATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[&|]{3,}|={3,}|~{2,}").unwrap());

/// Validate one `kind(name, role, formula).` declaration.
///
/// Keyword, open-paren and structure failures abort the remaining checks;
/// the quote-parity, operator-run and role checks are independent leaf
/// checks. On a parenthesis imbalance (only reachable for statements cut
/// off by end of input) the leaf checks still run best-effort over the
/// structure-matched fields.
pub fn validate_formula(statement: &str, line_num: usize, result: &mut ValidationResult) {
    let Some(keyword) = KEYWORD.captures(statement) else {
        result.add_error(
            Span::over(line_num, statement),
            "TPTP formula must start with tpi, thf, tff, tcf, fof, or cnf".to_string(),
        );
        return;
    };

    let kind = &keyword[1];
    let keyword_end = keyword[0].len();

    if !statement[keyword_end..].starts_with('(') {
        result.add_error(
            Span::new(
                Position::new(line_num, keyword_end),
                Position::new(line_num, keyword_end + 1),
            ),
            format!("Missing opening parenthesis after '{kind}'"),
        );
        return;
    }

    let balance = check_parentheses_balance(statement);
    if balance.error {
        result.add_error(
            Span::new(
                Position::new(line_num, balance.position),
                Position::new(line_num, balance.position + 1),
            ),
            balance.message.to_string(),
        );
        validate_fields(statement, line_num, result);
        return;
    }

    if !validate_fields(statement, line_num, result) {
        let message = if statement.contains(',') {
            "Invalid TPTP formula structure. Expected: type(name, role, formula)."
        } else {
            "TPTP formula must have format: type(name, role, formula). Missing commas or parentheses."
        };
        result.add_error(Span::over(line_num, statement), message.to_string());
    }
}

/// Role and formula-content leaf checks over the structure-matched fields.
/// Returns false when the statement does not match the
/// `kind ( name , role , formula ) .` shape at all.
fn validate_fields(statement: &str, line_num: usize, result: &mut ValidationResult) -> bool {
    let Some(structure) = STRUCTURE.captures(statement) else {
        return false;
    };

    let role = &structure[3];
    if !VALID_ROLES.contains(&role) {
        // Anchor at the first textual occurrence of the role token.
        let role_start = statement.find(role).unwrap_or(0);
        result.add_warning(
            Span::new(
                Position::new(line_num, role_start),
                Position::new(line_num, role_start + role.len()),
            ),
            format!(
                "Unknown TPTP role '{role}'. Valid roles: {}",
                VALID_ROLES.join(", ")
            ),
        );
    }

    if let Some(formula) = structure.get(4) {
        validate_formula_content(formula.as_str(), line_num, formula.start(), result);
    }

    true
}

/// Lexical sanity checks inside the formula body: quote parity and
/// degenerate operator runs.
pub fn validate_formula_content(
    formula: &str,
    line_num: usize,
    start_char: usize,
    result: &mut ValidationResult,
) {
    let formula_span = Span::new(
        Position::new(line_num, start_char),
        Position::new(line_num, start_char + formula.len()),
    );

    if formula.matches('\'').count() % 2 != 0 {
        result.add_error(formula_span, "Unmatched single quote in formula".to_string());
    }

    if formula.matches('"').count() % 2 != 0 {
        result.add_error(formula_span, "Unmatched double quote in formula".to_string());
    }

    for run in OPERATOR_RUN.find_iter(formula) {
        result.add_error(
            Span::new(
                Position::new(line_num, start_char + run.start()),
                Position::new(line_num, start_char + run.end()),
            ),
            format!("Invalid operator sequence: {}", run.as_str()),
        );
    }
}

/// Validate one `include('filename').` directive. The period and shape
/// checks are independent; both may fire.
pub fn validate_include(statement: &str, line_num: usize, result: &mut ValidationResult) {
    if !statement.ends_with('.') {
        result.add_error(
            Span::at(line_num, statement.len()),
            "Include statement must end with a period (.)".to_string(),
        );
    }

    if !INCLUDE.is_match(statement) {
        result.add_error(
            Span::over(line_num, statement),
            "Include statement must have format: include('filename').".to_string(),
        );
    }
}
