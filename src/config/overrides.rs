//! Command-line override tokenizer
//!
//! Scans raw process arguments into a flat option-name → value mapping.
//! Handles both flag conventions:
//! - `--name=value` (split on the first `=`, value may be empty)
//! - `--name value` (next token consumed unless it is itself a flag)
//! - `--name` alone is a bare boolean flag (`true`)
//!
//! Values are typed best-effort: the literals `true`/`false` become
//! booleans, anything that parses entirely as a number becomes a number,
//! everything else stays a string. Override keys are taken verbatim; a
//! dotted key like `server.listenPort` is a single flat key, not a path.

use serde_json::{Map, Number, Value};
use tracing::debug;

/// Flat mapping from option name to typed scalar, in token order.
pub type OverrideMap = Map<String, Value>;

/// Tokenize an argument vector (excluding the program name) into overrides.
///
/// Tokens that neither start with `--` nor follow a valueless flag are
/// ignored. A repeated option keeps its last value. Never fails: malformed
/// input degrades to a string or a bare `true`, not an error.
pub fn parse_overrides(args: &[String]) -> OverrideMap {
    let mut overrides = OverrideMap::new();
    let mut i = 0;

    while i < args.len() {
        let Some(name) = args[i].strip_prefix("--") else {
            // Not a flag, and not claimed as a value by a preceding flag.
            i += 1;
            continue;
        };

        if let Some((key, raw)) = name.split_once('=') {
            overrides.insert(key.to_string(), coerce(raw));
        } else if i + 1 < args.len() && !args[i + 1].starts_with("--") {
            // Flag with a separate value token.
            overrides.insert(name.to_string(), coerce(&args[i + 1]));
            i += 1;
        } else {
            // Bare flag: no attributable value, stored as boolean true.
            overrides.insert(name.to_string(), Value::Bool(true));
        }
        i += 1;
    }

    debug!(count = overrides.len(), "tokenized command-line overrides");
    overrides
}

/// Type a raw value: boolean literals first, then a strict full-string
/// numeric parse (integer before float), otherwise the string is kept.
fn coerce(raw: &str) -> Value {
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "" => return Value::String(String::new()),
        _ => {}
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(Number::from(int));
    }
    if let Ok(float) = raw.parse::<f64>() {
        // `inf`/`nan` spellings parse as floats but have no JSON number.
        if let Some(number) = Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    Value::String(raw.to_string())
}
