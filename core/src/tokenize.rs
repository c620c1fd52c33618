//! Schema-driven tokenizing of raw argument vectors.
//!
//! [`tokenize`] converts an argument list plus a declarative
//! [`OptionSchema`] into a [`ParsedArgs`]. Behavior at a glance:
//!
//! - `--name` sets a boolean; `--name=value` and `--name value` set a
//!   string value for string-declared options.
//! - Short flags (`-v`) resolve through aliases; clusters (`-ab`) expand to
//!   individual booleans, with a trailing string-typed flag consuming the
//!   remainder of the token or the next argument.
//! - Repeated options accumulate in occurrence order, and every value is
//!   mirrored across the option's alias group.
//! - `--` ends option parsing; everything after it is positional.
//! - Bare tokens land in the leftover positional sequence, kept numeric
//!   when they look numeric (the dispatcher coerces them to strings before
//!   validation).
//! - Declared defaults fill in for options that never appeared.

use crate::{ArgValue, OptionSchema, ParsedArgs};

/// Tokenizes `argv` against `schema`.
///
/// # Examples
///
/// ```
/// use command_kit_core::{ArgValue, OptionSchema, tokenize};
///
/// let schema = OptionSchema::base()
///     .with_boolean("verbose")
///     .with_alias("v", "verbose");
/// let argv: Vec<String> = ["-v", "--verbose", "input.txt"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let parsed = tokenize(&argv, &schema);
/// // Two occurrences fold into an ordered pair, mirrored on the alias.
/// let both = ArgValue::Many(vec![ArgValue::Bool(true), ArgValue::Bool(true)]);
/// assert_eq!(parsed.value("verbose"), Some(&both));
/// assert_eq!(parsed.value("v"), Some(&both));
/// assert_eq!(parsed.peek_positional().as_deref(), Some("input.txt"));
/// ```
pub fn tokenize(argv: &[String], schema: &OptionSchema) -> ParsedArgs {
    let mut parsed = ParsedArgs::default();
    let mut i = 0;

    while i < argv.len() {
        let token = argv[i].as_str();
        i += 1;

        if token == "--" {
            for rest in &argv[i..] {
                parsed.push_positional(parse_scalar(rest));
            }
            break;
        }

        if let Some(body) = token.strip_prefix("--") {
            i = consume_long(body, argv, i, schema, &mut parsed);
        } else if let Some(body) = token.strip_prefix('-') {
            if body.is_empty() || looks_numeric(token) {
                // A lone "-" or a negative number is positional.
                parsed.push_positional(parse_scalar(token));
            } else {
                i = consume_shorts(body, argv, i, schema, &mut parsed);
            }
        } else {
            parsed.push_positional(parse_scalar(token));
        }
    }

    apply_defaults(schema, &mut parsed);
    parsed
}

fn consume_long(
    body: &str,
    argv: &[String],
    mut i: usize,
    schema: &OptionSchema,
    parsed: &mut ParsedArgs,
) -> usize {
    if let Some((name, raw)) = body.split_once('=') {
        let value = if schema.is_boolean(name) {
            ArgValue::Bool(raw != "false")
        } else if schema.is_string(name) {
            ArgValue::Text(raw.to_string())
        } else {
            parse_scalar(raw)
        };
        assign(schema, parsed, name, value);
        return i;
    }

    if schema.is_boolean(body) {
        assign(schema, parsed, body, ArgValue::Bool(true));
    } else if schema.is_string(body) {
        let value = next_value(argv, &mut i).unwrap_or_default();
        assign(schema, parsed, body, ArgValue::Text(value));
    } else if let Some(value) = next_value(argv, &mut i) {
        // Undeclared long option with a following bare token takes it.
        assign(schema, parsed, body, parse_scalar(&value));
    } else {
        assign(schema, parsed, body, ArgValue::Bool(true));
    }
    i
}

fn consume_shorts(
    body: &str,
    argv: &[String],
    mut i: usize,
    schema: &OptionSchema,
    parsed: &mut ParsedArgs,
) -> usize {
    let mut chars = body.char_indices();
    while let Some((offset, ch)) = chars.next() {
        let name = ch.to_string();
        if schema.is_string(&name) {
            // Remainder of the cluster, or the next argument, is the value.
            let remainder = &body[offset + ch.len_utf8()..];
            let value = if remainder.is_empty() {
                next_value(argv, &mut i).unwrap_or_default()
            } else {
                remainder.to_string()
            };
            assign(schema, parsed, &name, ArgValue::Text(value));
            break;
        }
        assign(schema, parsed, &name, ArgValue::Bool(true));
    }
    i
}

/// Takes the next argument as an option value unless it looks like a flag.
fn next_value(argv: &[String], i: &mut usize) -> Option<String> {
    let candidate = argv.get(*i)?;
    if candidate.starts_with('-') && !looks_numeric(candidate) {
        return None;
    }
    *i += 1;
    Some(candidate.clone())
}

/// Records a value under the canonical name and every alias of it.
fn assign(schema: &OptionSchema, parsed: &mut ParsedArgs, name: &str, value: ArgValue) {
    let canonical = schema.canonical(name);
    for key in schema.alias_group(canonical) {
        parsed.insert_value(key, value.clone());
    }
}

fn apply_defaults(schema: &OptionSchema, parsed: &mut ParsedArgs) {
    for (name, value) in &schema.defaults {
        let canonical = schema.canonical(name);
        if !parsed.has_value(canonical) {
            assign(schema, parsed, canonical, value.clone());
        }
    }
}

fn parse_scalar(token: &str) -> ArgValue {
    if looks_numeric(token) {
        if let Ok(number) = token.parse::<f64>() {
            return ArgValue::Number(number);
        }
    }
    ArgValue::Text(token.to_string())
}

fn looks_numeric(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && token.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_boolean_supplied_twice_yields_ordered_pair() {
        let schema = OptionSchema::new().with_boolean("x");
        let parsed = tokenize(&argv(&["--x", "--x"]), &schema);

        assert_eq!(
            parsed.value("x"),
            Some(&ArgValue::Many(vec![
                ArgValue::Bool(true),
                ArgValue::Bool(true)
            ]))
        );
    }

    #[test]
    fn test_alias_carries_identical_value() {
        let schema = OptionSchema::new().with_boolean("x").with_alias("y", "x");
        let parsed = tokenize(&argv(&["--x", "--x"]), &schema);

        assert_eq!(parsed.value("y"), parsed.value("x"));
        assert!(parsed.value("y").is_some());
    }

    #[test]
    fn test_string_option_consumes_next_token() {
        let schema = OptionSchema::new().with_string("sep");
        let parsed = tokenize(&argv(&["--sep", ",", "a"]), &schema);

        assert_eq!(parsed.get("sep").as_deref(), Some(","));
        assert_eq!(parsed.peek_positional().as_deref(), Some("a"));
    }

    #[test]
    fn test_string_option_keeps_numeric_looking_value_as_text() {
        let schema = OptionSchema::new().with_string("port");
        let parsed = tokenize(&argv(&["--port=8080"]), &schema);

        assert_eq!(parsed.value("port"), Some(&ArgValue::Text("8080".into())));
    }

    #[test]
    fn test_bare_numeric_token_stays_numeric() {
        let mut parsed = tokenize(&argv(&["12", "words"]), &OptionSchema::new());

        assert_eq!(parsed.take_positional().as_deref(), Some("12"));
        assert_eq!(parsed.take_positional().as_deref(), Some("words"));
    }

    #[test]
    fn test_negative_number_is_positional() {
        let parsed = tokenize(&argv(&["-5"]), &OptionSchema::new());
        assert_eq!(parsed.peek_positional().as_deref(), Some("-5"));
    }

    #[test]
    fn test_double_dash_ends_option_parsing() {
        let schema = OptionSchema::new().with_boolean("x");
        let mut parsed = tokenize(&argv(&["--", "--x"]), &schema);

        assert!(parsed.value("x").is_none());
        assert_eq!(parsed.take_positional().as_deref(), Some("--x"));
    }

    #[test]
    fn test_short_cluster_expands_to_booleans() {
        let schema = OptionSchema::new().with_boolean("a").with_boolean("b");
        let parsed = tokenize(&argv(&["-ab"]), &schema);

        assert!(parsed.flag("a"));
        assert!(parsed.flag("b"));
    }

    #[test]
    fn test_short_string_flag_takes_cluster_remainder() {
        let schema = OptionSchema::new().with_string("o");
        let parsed = tokenize(&argv(&["-oout.txt"]), &schema);

        assert_eq!(parsed.get("o").as_deref(), Some("out.txt"));
    }

    #[test]
    fn test_defaults_fill_absent_options_only() {
        let schema = OptionSchema::new()
            .with_string("sep")
            .with_default("sep", " ")
            .with_string("mode")
            .with_default("mode", "fast");
        let parsed = tokenize(&argv(&["--mode", "slow"]), &schema);

        assert_eq!(parsed.get("sep").as_deref(), Some(" "));
        assert_eq!(parsed.get("mode").as_deref(), Some("slow"));
    }

    #[test]
    fn test_help_flag_parses_through_base_schema() {
        let parsed = tokenize(&argv(&["-h"]), &OptionSchema::base());
        assert!(parsed.flag("help"));
        assert!(parsed.flag("h"));
    }

    #[test]
    fn test_boolean_long_with_explicit_false() {
        let schema = OptionSchema::new().with_boolean("x");
        let parsed = tokenize(&argv(&["--x=false"]), &schema);
        assert!(!parsed.flag("x"));
    }
}
