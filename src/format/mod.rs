//! Formatting
//!
//! Best-effort pretty-printing, layered independently of validation: the
//! printer consumes raw text and always produces output, even when the
//! validator would reject the same document.

pub mod printer;

pub use printer::pretty_print;
