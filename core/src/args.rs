//! Parsed argument values flowing through the hook pipeline.
//!
//! The tokenizer produces a [`ParsedArgs`]: a map from option name to
//! [`ArgValue`] plus an ordered sequence of leftover positional tokens.
//! Validation hooks drain the positionals; the dispatcher rejects any
//! remainder before the command runs.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

/// A single parsed option or positional value.
///
/// Options repeated on the command line accumulate into [`Many`](ArgValue::Many)
/// in occurrence order. Bare positional tokens that look numeric stay
/// [`Number`](ArgValue::Number) until the dispatcher coerces them to display
/// strings ahead of validation.
///
/// # Examples
///
/// ```
/// use command_kit_core::ArgValue;
///
/// assert_eq!(ArgValue::Number(6.5).display_string(), "6.5");
/// assert_eq!(ArgValue::Number(12.0).display_string(), "12");
/// assert!(ArgValue::Bool(true).truthy());
/// assert!(!ArgValue::Text(String::new()).truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// Boolean flag value.
    Bool(bool),
    /// Numeric value (bare tokens like `12` or `-3.5`).
    Number(f64),
    /// String value.
    Text(String),
    /// Ordered values of an option that appeared more than once.
    Many(Vec<ArgValue>),
}

impl ArgValue {
    /// Whether this value counts as "set" for flag checks.
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Text(s) => !s.is_empty(),
            Self::Many(values) => values.iter().any(ArgValue::truthy),
        }
    }

    /// Coerces this value to the string shown in messages and help.
    ///
    /// Integral numbers render without a fractional part; `Many` renders its
    /// last element, matching "last occurrence wins" lookup.
    pub fn display_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 9e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Self::Text(s) => s.clone(),
            Self::Many(values) => values
                .last()
                .map(ArgValue::display_string)
                .unwrap_or_default(),
        }
    }

    /// Borrows the text content, if this is a single text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Structured result of tokenizing an argument vector against a schema.
///
/// Produced by [`tokenize`](crate::tokenize); consumed by the validate and
/// execute hooks. Option values are mirrored across alias names, so looking
/// up `"v"` and `"verbose"` yields the same value when one aliases the other.
///
/// # Examples
///
/// ```
/// use command_kit_core::{OptionSchema, tokenize};
///
/// let schema = OptionSchema::base().with_string("sep");
/// let argv: Vec<String> = ["--sep", ",", "a", "b"].iter().map(|s| s.to_string()).collect();
/// let mut parsed = tokenize(&argv, &schema);
///
/// assert_eq!(parsed.get("sep").as_deref(), Some(","));
/// assert_eq!(parsed.take_positional().as_deref(), Some("a"));
/// assert_eq!(parsed.take_positional().as_deref(), Some("b"));
/// assert!(parsed.take_positional().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParsedArgs {
    values: HashMap<String, ArgValue>,
    rest: VecDeque<ArgValue>,
}

impl ParsedArgs {
    /// Looks up the raw value recorded for an option name.
    pub fn value(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Whether a flag was supplied with a truthy value.
    pub fn flag(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(ArgValue::truthy)
    }

    /// Looks up an option coerced to its display string.
    ///
    /// For repeated options this is the last occurrence.
    pub fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).map(ArgValue::display_string)
    }

    /// Takes the next leftover positional token, coerced to a string.
    ///
    /// Returns `None` once the leftover sequence is drained. Validation
    /// hooks use this to consume the positionals they recognize.
    pub fn take_positional(&mut self) -> Option<String> {
        self.rest.pop_front().map(|value| value.display_string())
    }

    /// Peeks at the first leftover positional without consuming it.
    pub fn peek_positional(&self) -> Option<String> {
        self.rest.front().map(ArgValue::display_string)
    }

    /// Number of leftover positional tokens.
    pub fn positional_count(&self) -> usize {
        self.rest.len()
    }

    /// Records an option value, folding repeats into [`ArgValue::Many`].
    pub(crate) fn insert_value(&mut self, name: &str, value: ArgValue) {
        match self.values.remove(name) {
            None => {
                self.values.insert(name.to_string(), value);
            }
            Some(ArgValue::Many(mut items)) => {
                items.push(value);
                self.values.insert(name.to_string(), ArgValue::Many(items));
            }
            Some(previous) => {
                self.values
                    .insert(name.to_string(), ArgValue::Many(vec![previous, value]));
            }
        }
    }

    pub(crate) fn has_value(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub(crate) fn push_positional(&mut self, value: ArgValue) {
        self.rest.push_back(value);
    }

    /// Coerces every leftover positional to its display string.
    ///
    /// The tokenizer leaves bare numeric tokens typed as numbers; the
    /// dispatcher normalizes them before the validate hook sees them.
    pub(crate) fn stringify_positionals(&mut self) {
        for value in self.rest.iter_mut() {
            *value = ArgValue::Text(value.display_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_insert_folds_into_many() {
        let mut parsed = ParsedArgs::default();
        parsed.insert_value("x", ArgValue::Bool(true));
        parsed.insert_value("x", ArgValue::Bool(true));

        assert_eq!(
            parsed.value("x"),
            Some(&ArgValue::Many(vec![
                ArgValue::Bool(true),
                ArgValue::Bool(true)
            ]))
        );
        assert!(parsed.flag("x"));
    }

    #[test]
    fn test_take_positional_preserves_order() {
        let mut parsed = ParsedArgs::default();
        parsed.push_positional(ArgValue::Text("first".into()));
        parsed.push_positional(ArgValue::Number(2.0));

        assert_eq!(parsed.take_positional().as_deref(), Some("first"));
        assert_eq!(parsed.take_positional().as_deref(), Some("2"));
        assert!(parsed.take_positional().is_none());
    }

    #[test]
    fn test_stringify_positionals_coerces_numbers() {
        let mut parsed = ParsedArgs::default();
        parsed.push_positional(ArgValue::Number(3.5));
        parsed.stringify_positionals();

        assert_eq!(parsed.peek_positional().as_deref(), Some("3.5"));
    }

    #[test]
    fn test_display_string_for_many_is_last_occurrence() {
        let value = ArgValue::Many(vec![ArgValue::Text("a".into()), ArgValue::Text("b".into())]);
        assert_eq!(value.display_string(), "b");
    }
}
