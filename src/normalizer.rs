//! JSON normalization: lenient JSON-like text in, canonical JSON or
//! structured diagnostics out.
//!
//! ## The substitution quirk
//!
//! Before parsing, every literal `'` in the input is replaced with `"`. This
//! is a blind, global character substitution — not a quote-aware lexical
//! transform — so `{'a': 1}` becomes valid, but a legitimate apostrophe
//! inside an already-valid double-quoted string (`{"msg": "it's"}`) is
//! corrupted and the parse fails. That corruption is intentional observable
//! behaviour, pinned down by a test below; do not "fix" it here without
//! changing the service contract.
//!
//! ## Canonical output
//!
//! Successful parses are re-serialized with [`PrettyFormatter`] at the
//! requested indent width. `serde_json`'s `preserve_order` feature keeps
//! object keys in input order, and non-ASCII characters are emitted as
//! literal UTF-8 rather than `\u` escapes. An indent of 0 yields the
//! formatter's own zero-width behaviour: one element per line, no leading
//! spaces.
//!
//! Parse failure is not an error of this module — it is one of its two
//! results. Hence [`FormatOutcome`], not `Result`.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

/// Indent width applied when the request does not specify one.
pub const DEFAULT_INDENT: usize = 4;

/// Upper bound on the indent width. The reference behaviour is unbounded,
/// but an unbounded width lets a single request allocate gigabytes of
/// whitespace; widths above this are rejected with a message-only failure.
pub const MAX_INDENT: usize = 64;

/// The result of one normalization attempt.
///
/// `Failure` carries the parser's 1-based line and column when the failure
/// came from the parse step; indent-validation failures carry a message only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    Success {
        formatted: String,
    },
    Failure {
        error: String,
        line: Option<u64>,
        column: Option<u64>,
    },
}

impl FormatOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FormatOutcome::Success { .. })
    }

    /// A failure with a message and no position.
    fn message(error: impl Into<String>) -> Self {
        FormatOutcome::Failure {
            error: error.into(),
            line: None,
            column: None,
        }
    }
}

/// Normalize `text` into canonical JSON at the given indent.
///
/// Pure function of its inputs: no I/O, no shared state. `indent` is the
/// raw JSON value from the request (or `None` when absent) so that
/// non-integer values produce a diagnostic instead of a framework-level
/// rejection — see [`resolve_indent`].
pub fn reformat(text: &str, indent: Option<&Value>) -> FormatOutcome {
    let width = match resolve_indent(indent) {
        Ok(w) => w,
        Err(msg) => return FormatOutcome::message(format!("Error: {msg}")),
    };

    // Blind quote substitution; see module docs for why this stays naive.
    let substituted = text.replace('\'', "\"");

    let value: Value = match serde_json::from_str(&substituted) {
        Ok(v) => v,
        Err(e) => {
            let full = e.to_string();
            return FormatOutcome::Failure {
                error: format!("JSON Error: {}", strip_position(&full)),
                line: Some(e.line() as u64),
                column: Some(e.column() as u64),
            };
        }
    };

    match to_pretty(&value, width) {
        Ok(formatted) => FormatOutcome::Success { formatted },
        Err(msg) => FormatOutcome::message(format!("Error: {msg}")),
    }
}

/// Validate the raw `indent` request value into a width.
///
/// Rules: absent or `null` → [`DEFAULT_INDENT`]; a non-negative integer up
/// to [`MAX_INDENT`] → that width; anything else (negative, fractional,
/// string, …) → `Err` with a human-readable reason.
pub fn resolve_indent(raw: Option<&Value>) -> Result<usize, String> {
    let value = match raw {
        None | Some(Value::Null) => return Ok(DEFAULT_INDENT),
        Some(v) => v,
    };

    let number = match value {
        Value::Number(n) => n,
        other => {
            return Err(format!(
                "indent must be an integer, not {}",
                json_type_name(other)
            ))
        }
    };

    if let Some(width) = number.as_u64() {
        if width > MAX_INDENT as u64 {
            return Err(format!("indent must be at most {MAX_INDENT}"));
        }
        return Ok(width as usize);
    }

    if number.as_i64().is_some() {
        return Err("indent must be a non-negative integer".to_string());
    }

    Err("indent must be an integer".to_string())
}

/// serde_json appends " at line L column C" to every parse error; the
/// position is reported in dedicated fields, so keep only the message part.
fn strip_position(message: &str) -> &str {
    message.split(" at line ").next().unwrap_or(message)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn to_pretty(value: &Value, width: usize) -> Result<String, String> {
    let indent = " ".repeat(width);
    let mut buf = Vec::with_capacity(256);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(|e| e.to_string())?;
    String::from_utf8(buf).map_err(|e| e.to_string())
}
