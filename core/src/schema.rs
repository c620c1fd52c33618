//! Declarative option schemas and their pure composition.
//!
//! An [`OptionSchema`] is an immutable value describing which options a
//! command accepts: boolean flag names, string-valued option names, default
//! values, and alias mappings. Extension hooks are functions from schema to
//! schema; a command's effective schema is the fold of its hook chain over
//! the pre-seeded [`base`](OptionSchema::base), which always carries the
//! `help` flag with its `h` alias.
//!
//! # Example
//!
//! ```
//! use command_kit_core::OptionSchema;
//!
//! let schema = OptionSchema::base()
//!     .with_boolean("verbose")
//!     .with_alias("v", "verbose")
//!     .with_string("output")
//!     .with_default("output", "out.txt");
//!
//! assert!(schema.is_boolean("verbose"));
//! assert!(schema.is_boolean("v")); // resolved through the alias
//! assert_eq!(schema.canonical("h"), "help");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ArgValue;

/// Option declarations collected across a chain of extension hooks.
///
/// Composition is additive: [`merge`](OptionSchema::merge) concatenates the
/// boolean and string name lists (duplicates are tolerated by the
/// tokenizer), while later contributions win for defaults and aliases on
/// key conflict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionSchema {
    /// Names of options that take no value.
    pub boolean: Vec<String>,
    /// Names of options that take a string value.
    pub string: Vec<String>,
    /// Values applied when an option is absent from the argument vector.
    pub defaults: BTreeMap<String, ArgValue>,
    /// Alias name to canonical name mappings.
    pub aliases: BTreeMap<String, String>,
}

impl OptionSchema {
    /// Creates an empty schema with no declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// The pre-seeded schema every dispatch starts from.
    ///
    /// Declares the boolean `help` option with its `h` alias, so `-h` and
    /// `--help` are available on every command before any extension hook
    /// runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_kit_core::OptionSchema;
    ///
    /// let base = OptionSchema::base();
    /// assert!(base.is_boolean("help"));
    /// assert_eq!(base.canonical("h"), "help");
    /// ```
    pub fn base() -> Self {
        Self::new().with_boolean("help").with_alias("h", "help")
    }

    /// Declares a boolean (valueless) option.
    pub fn with_boolean(mut self, name: impl Into<String>) -> Self {
        self.boolean.push(name.into());
        self
    }

    /// Declares a string-valued option.
    pub fn with_string(mut self, name: impl Into<String>) -> Self {
        self.string.push(name.into());
        self
    }

    /// Sets the default value applied when an option is absent.
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    /// Maps an alias name onto a canonical option name.
    pub fn with_alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), canonical.into());
        self
    }

    /// Merges two schemas into one, `other` contributed later.
    ///
    /// Name lists concatenate; `other` overrides on default and alias key
    /// conflicts.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_kit_core::{ArgValue, OptionSchema};
    ///
    /// let first = OptionSchema::new().with_boolean("a");
    /// let second = OptionSchema::new().with_string("b").with_default("b", "z");
    ///
    /// let merged = OptionSchema::base().merge(first).merge(second);
    /// assert!(merged.is_boolean("a"));
    /// assert!(merged.is_string("b"));
    /// assert_eq!(merged.defaults["b"], ArgValue::Text("z".into()));
    /// assert_eq!(merged.canonical("h"), "help"); // pre-seed intact
    /// ```
    pub fn merge(mut self, other: OptionSchema) -> Self {
        self.boolean.extend(other.boolean);
        self.string.extend(other.string);
        self.defaults.extend(other.defaults);
        self.aliases.extend(other.aliases);
        self
    }

    /// Resolves an alias to its canonical name, or echoes the name back.
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Whether a name (or its canonical form) is declared boolean.
    pub fn is_boolean(&self, name: &str) -> bool {
        let canonical = self.canonical(name);
        self.boolean.iter().any(|n| n == canonical || n == name)
    }

    /// Whether a name (or its canonical form) is declared string-valued.
    pub fn is_string(&self, name: &str) -> bool {
        let canonical = self.canonical(name);
        self.string.iter().any(|n| n == canonical || n == name)
    }

    /// All names sharing a canonical name: the name itself plus its aliases.
    pub(crate) fn alias_group<'a>(&'a self, canonical: &'a str) -> Vec<&'a str> {
        let mut group = vec![canonical];
        for (alias, target) in &self.aliases {
            if target == canonical {
                group.push(alias.as_str());
            }
        }
        group
    }
}
