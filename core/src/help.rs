//! Help-text rendering shared by the registry and command defaults.

use textwrap::Options;

use crate::CommandDescriptor;

/// Wraps plain text to `width` columns.
pub fn wrap(text: &str, width: usize) -> String {
    textwrap::fill(text, width)
}

/// Renders one command's aggregate-help entry.
///
/// The heading is the uppercased invocation name followed by the remainder
/// of the syntax string; the summary follows, wrapped to `width` and
/// indented two spaces.
///
/// # Examples
///
/// ```
/// use command_kit_core::{CommandDescriptor, CommandInfo, help};
///
/// let info = CommandInfo::new("frob <thing>", "Frobs the thing");
/// let descriptor = CommandDescriptor::from_info(&info).unwrap();
/// let entry = help::summary_entry(&descriptor, 80);
/// assert_eq!(entry, "FROB <thing>\n  Frobs the thing\n");
/// ```
pub fn summary_entry(descriptor: &CommandDescriptor, width: usize) -> String {
    let rest = descriptor.syntax[descriptor.name.len()..].trim();
    let mut heading = descriptor.name.to_uppercase();
    if !rest.is_empty() {
        heading.push(' ');
        heading.push_str(rest);
    }

    let options = Options::new(width)
        .initial_indent("  ")
        .subsequent_indent("  ");
    format!("{heading}\n{}\n", textwrap::fill(&descriptor.summary, options))
}

#[cfg(test)]
mod tests {
    use crate::CommandInfo;

    use super::*;

    fn descriptor(syntax: &str, summary: &str) -> CommandDescriptor {
        CommandDescriptor::from_info(&CommandInfo::new(syntax, summary)).unwrap()
    }

    #[test]
    fn test_summary_entry_uppercases_name_and_keeps_syntax_tail() {
        let entry = summary_entry(&descriptor("frob <thing> [more]", "Frobs it"), 80);
        assert_eq!(entry, "FROB <thing> [more]\n  Frobs it\n");
    }

    #[test]
    fn test_summary_entry_wraps_long_summaries() {
        let summary = "A deliberately long summary that will not fit on a single \
                       thirty column line and must wrap";
        let entry = summary_entry(&descriptor("frob", summary), 30);

        for line in entry.lines().skip(1) {
            assert!(line.len() <= 30, "line too long: {line:?}");
            assert!(line.starts_with("  "));
        }
        assert!(entry.lines().count() > 2);
    }

    #[test]
    fn test_name_only_syntax_has_bare_heading() {
        let entry = summary_entry(&descriptor("frob", "Frobs"), 80);
        assert!(entry.starts_with("FROB\n"));
    }
}
