//! Loosely-typed option records as they arrive through the dispatcher.
//!
//! Each action and operation converts an [`ActionOptions`] mapping into its
//! own typed struct. [`OptionReader`] applies the shared coercion rules:
//!
//! - strings and numbers are accepted as text; `null` and `""` are absent
//! - booleans must be JSON booleans, anything else falls back to the default
//! - numeric options accept any JSON number or numeric string and keep it
//!   as written; anything else is rejected
//! - integer options accept non-negative whole numbers only

use serde_json::{Map, Value};

use crate::error::{VoiceError, VoiceResult};
use crate::validation::is_numeric;

/// Option name to value mapping
pub type ActionOptions = Map<String, Value>;

/// Build an options mapping from a single dispatcher argument.
///
/// Objects pass through. A scalar is shorthand for the action's single
/// required value and lands under `shorthand`; without a shorthand key, or
/// for `null`/`""`, the mapping is empty.
pub fn options_from_arg(arg: &Value, shorthand: Option<&str>) -> ActionOptions {
    match (arg, shorthand) {
        (Value::Object(map), _) => map.clone(),
        (Value::Null, _) => Map::new(),
        (Value::String(s), _) if s.is_empty() => Map::new(),
        (scalar, Some(key)) => {
            let mut map = Map::new();
            map.insert(key.to_string(), scalar.clone());
            map
        }
        (_, None) => Map::new(),
    }
}

/// Read-only view over an [`ActionOptions`] mapping.
pub struct OptionReader<'a> {
    options: &'a ActionOptions,
}

impl<'a> OptionReader<'a> {
    pub fn new(options: &'a ActionOptions) -> Self {
        Self { options }
    }

    /// `true` if the mapping has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.options
            .is_empty()
    }

    /// Text value of `key`, or `None` when absent, `null` or empty.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.options.get(key)? {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Text value of `key`, failing with `message` when absent.
    pub fn required_text(&self, key: &str, message: &str) -> VoiceResult<String> {
        self.text(key)
            .ok_or_else(|| VoiceError::validation(message))
    }

    /// Boolean value of `key`; non-boolean values count as absent.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.options
            .get(key)
            .and_then(Value::as_bool)
    }

    /// Numeric value of `key` as written, failing with `message` when the
    /// value is present but not a number.
    pub fn numeric(&self, key: &str, message: &str) -> VoiceResult<Option<String>> {
        match self.options.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) if is_numeric(s) => Ok(Some(s.trim().to_string())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(_) => Err(VoiceError::validation(message)),
        }
    }

    /// Non-negative integer value of `key`, failing with `message` when the
    /// value is present but not a whole number.
    pub fn integer(&self, key: &str, message: &str) -> VoiceResult<Option<u32>> {
        let parsed = match self.options.get(key) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::String(s)) if s.is_empty() => return Ok(None),
            Some(Value::String(s)) => s
                .trim()
                .parse::<u32>()
                .ok(),
            Some(Value::Number(n)) => number_to_u32(n),
            Some(_) => None,
        };
        parsed
            .map(Some)
            .ok_or_else(|| VoiceError::validation(message))
    }
}

fn number_to_u32(n: &serde_json::Number) -> Option<u32> {
    if let Some(v) = n.as_u64() {
        return u32::try_from(v).ok();
    }
    let f = n.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) {
        Some(f as u32)
    } else {
        None
    }
}
