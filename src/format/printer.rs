//! TPTP Pretty Printer
//!
//! Single-pass re-lexer/re-emitter producing canonically indented text.
//! The scan tracks paren/bracket depth, string and comment state, and how
//! many top-level commas of the current declaration have been seen; no
//! formula AST is built. The printer never fails: malformed input degrades
//! to best-effort output.

use crate::parser::lexer::DECLARATION_KINDS;

const INDENT_UNIT: &str = "    ";

/// Reformat a whole document or an arbitrary sub-range string.
///
/// Output ends with exactly one trailing newline. Formatting is a fixed
/// point: pretty-printing already pretty-printed text reproduces it.
pub fn pretty_print(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    let mut i = 0usize;

    // indent_level is pinned at 1 inside a declaration; operator breaks
    // compute max(1, indent_level - 3), so every break lands at one level.
    // Deeper paren nesting deliberately does not indent further.
    let mut indent_level = 1usize;
    let mut paren_depth = 0usize;
    let mut bracket_depth = 0usize;
    let mut comma_count = 0usize;
    let mut in_formula = false;
    let mut just_ended = false;

    while i < bytes.len() {
        let c = bytes[i];

        // Line comments pass through untouched, terminator included, so
        // following text can never be folded into the comment. Mid-unit
        // comment lines keep the continuation indented.
        if c == b'%' && at_line_start(&out) {
            let end = input[i..].find('\n').map_or(bytes.len(), |n| i + n);
            out.push_str(input[i..end].trim_end());
            out.push('\n');
            if paren_depth > 0 {
                out.push_str(&indent(indent_level));
            }
            i = if end < bytes.len() { end + 1 } else { end };
            continue;
        }

        // Block comments are copied verbatim including delimiters.
        if c == b'/' && bytes.get(i + 1) == Some(&b'*') {
            let end = input[i + 2..]
                .find("*/")
                .map_or(bytes.len(), |n| i + 2 + n + 2);
            out.push_str(&input[i..end]);
            i = end;
            continue;
        }

        // Quoted atoms and distinct objects are copied verbatim; an escaped
        // quote does not close the literal.
        if c == b'\'' || c == b'"' {
            let end = quoted_end(bytes, i);
            out.push_str(&input[i..end]);
            i = end;
            continue;
        }

        if c.is_ascii_whitespace() {
            let mut end = i;
            let mut newlines = 0usize;
            while end < bytes.len() && bytes[end].is_ascii_whitespace() {
                if bytes[end] == b'\n' {
                    newlines += 1;
                }
                end += 1;
            }
            if newlines >= 2 && !out.is_empty() {
                ensure_blank_line(&mut out);
            } else if needs_space(&out) && next_wants_space(bytes.get(end).copied()) {
                out.push(' ');
            }
            i = end;
            continue;
        }

        // A fresh declaration header: kind keyword straight into `(`. The
        // first two arguments stay inline; the body starts on its own line
        // once the second top-level comma goes by.
        if paren_depth == 0 {
            if let Some((kind, consumed)) = match_declaration(input, i) {
                if just_ended {
                    ensure_blank_line(&mut out);
                    just_ended = false;
                }
                out.push_str(kind);
                out.push('(');
                i += consumed;
                paren_depth = 1;
                indent_level = 1;
                comma_count = 0;
                in_formula = false;
                continue;
            }
        }

        // Connectives break the line inside the formula body.
        if in_formula {
            if input[i..].starts_with("<=>") {
                push_operator_break(&mut out, "<=>", indent_level);
                i = skip_whitespace(bytes, i + 3);
                continue;
            }
            if input[i..].starts_with("=>") {
                push_operator_break(&mut out, "=>", indent_level);
                i = skip_whitespace(bytes, i + 2);
                continue;
            }
            if c == b'|' {
                push_operator_break(&mut out, "|", indent_level);
                i = skip_whitespace(bytes, i + 1);
                continue;
            }
            if c == b'&' {
                push_operator_break(&mut out, "&", indent_level);
                i = skip_whitespace(bytes, i + 1);
                continue;
            }
            if c == b':' {
                trim_trailing_spaces(&mut out);
                out.push_str(" :\n");
                out.push_str(&indent(break_level(indent_level)));
                i = skip_whitespace(bytes, i + 1);
                continue;
            }
        }

        // Quantifier prefix directly (modulo whitespace) before `[`.
        if matches!(c, b'?' | b'!' | b'^' | b'~') {
            let after = skip_whitespace(bytes, i + 1);
            if bytes.get(after) == Some(&b'[') {
                out.push(c as char);
                out.push(' ');
                out.push('[');
                bracket_depth += 1;
                i = after + 1;
                continue;
            }
        }

        // Relational and equality operators get single-space padding; `<=`
        // is left alone when it opens a `<=>`.
        if input[i..].starts_with("!=")
            || input[i..].starts_with(">=")
            || (input[i..].starts_with("<=") && !input[i..].starts_with("<=>"))
        {
            push_spaced(&mut out, &input[i..i + 2]);
            i = skip_whitespace(bytes, i + 2);
            continue;
        }
        if c == b'=' && bytes.get(i + 1) != Some(&b'>') {
            push_spaced(&mut out, "=");
            i = skip_whitespace(bytes, i + 1);
            continue;
        }

        match c {
            b'(' => {
                paren_depth += 1;
                out.push('(');
                i += 1;
            }
            b')' => {
                paren_depth = paren_depth.saturating_sub(1);
                out.push(')');
                i += 1;
            }
            b'[' => {
                bracket_depth += 1;
                out.push('[');
                i += 1;
            }
            b']' => {
                bracket_depth = bracket_depth.saturating_sub(1);
                out.push(']');
                i += 1;
            }
            b',' => {
                if paren_depth == 1 && bracket_depth == 0 {
                    comma_count += 1;
                    if comma_count == 1 {
                        out.push_str(", ");
                    } else {
                        if comma_count == 2 {
                            in_formula = true;
                        }
                        out.push(',');
                        push_line_break(&mut out);
                        out.push_str(&indent(indent_level));
                    }
                } else {
                    out.push_str(", ");
                }
                i = skip_whitespace(bytes, i + 1);
            }
            b'.' if paren_depth == 0 && bracket_depth == 0 => {
                out.push('.');
                push_line_break(&mut out);
                in_formula = false;
                comma_count = 0;
                indent_level = 1;
                just_ended = true;
                i += 1;
            }
            _ => match input[i..].chars().next() {
                Some(ch) => {
                    out.push(ch);
                    i += ch.len_utf8();
                }
                None => break,
            },
        }
    }

    let mut result = out.trim_end().to_string();
    result.push('\n');
    result
}

fn at_line_start(out: &str) -> bool {
    let before_indent = out.trim_end_matches(' ');
    before_indent.is_empty() || before_indent.ends_with('\n')
}

fn needs_space(out: &str) -> bool {
    !matches!(out.chars().last(), None | Some(' ') | Some('\n') | Some('('))
}

/// Collapsed whitespace reappears as a single space only in front of plain
/// token material.
fn next_wants_space(next: Option<u8>) -> bool {
    matches!(next, Some(b) if b.is_ascii_alphanumeric() || b == b'$' || b == b'<')
}

fn indent(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

fn break_level(indent_level: usize) -> usize {
    indent_level.saturating_sub(3).max(1)
}

fn trim_trailing_spaces(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
}

fn push_line_break(out: &mut String) {
    trim_trailing_spaces(out);
    out.push('\n');
}

fn ensure_blank_line(out: &mut String) {
    trim_trailing_spaces(out);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    if !out.ends_with("\n\n") {
        out.push('\n');
    }
}

fn push_operator_break(out: &mut String, op: &str, indent_level: usize) {
    push_line_break(out);
    out.push_str(&indent(break_level(indent_level)));
    out.push(' ');
    out.push_str(op);
    out.push(' ');
}

fn push_spaced(out: &mut String, op: &str) {
    if needs_space(out) {
        out.push(' ');
    }
    out.push_str(op);
    out.push(' ');
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

fn quoted_end(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut j = start + 1;
    while j < bytes.len() {
        if bytes[j] == quote && bytes[j - 1] != b'\\' {
            return j + 1;
        }
        j += 1;
    }
    bytes.len()
}

/// Match a declaration keyword followed (modulo whitespace) by `(` at `i`,
/// requiring a word boundary on the left. Returns the keyword and the byte
/// count through the opening parenthesis.
fn match_declaration(input: &str, i: usize) -> Option<(&'static str, usize)> {
    if i > 0 {
        let prev = input.as_bytes()[i - 1];
        if prev.is_ascii_alphanumeric() || prev == b'_' {
            return None;
        }
    }
    let bytes = input.as_bytes();
    for kind in DECLARATION_KINDS {
        if input[i..].starts_with(kind) {
            let j = skip_whitespace(bytes, i + kind.len());
            if bytes.get(j) == Some(&b'(') {
                return Some((kind, j + 1 - i));
            }
        }
    }
    None
}
