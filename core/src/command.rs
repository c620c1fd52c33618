//! The command contract: descriptors, the dispatch-time binding, and the
//! hook trait every named command implements.

use serde::{Deserialize, Serialize};

use crate::{CommandError, OptionSchema, ParsedArgs, help};

/// Static metadata a command publishes about itself.
///
/// The first whitespace-delimited token of `syntax` is the command's
/// invocation name.
///
/// # Examples
///
/// ```
/// use command_kit_core::CommandInfo;
///
/// let info = CommandInfo::new("frob <thing>", "Frobs the thing");
/// assert_eq!(info.syntax, "frob <thing>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    /// Human-readable usage string; first token is the invocation name.
    pub syntax: String,
    /// One-line description for aggregate help listings.
    pub summary: String,
}

impl CommandInfo {
    /// Creates command metadata from a syntax string and summary.
    pub fn new(syntax: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            syntax: syntax.into(),
            summary: summary.into(),
        }
    }
}

/// Registration-time descriptor derived from a [`CommandInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Full usage string as registered.
    pub syntax: String,
    /// One-line description.
    pub summary: String,
    /// Invocation name in its registered display case.
    pub name: String,
    /// Lowercased name; the unique dispatch key.
    pub normalized_name: String,
    /// Whether this descriptor opened a registration batch. Used to insert
    /// group separators in aggregate help.
    pub group_start: bool,
}

impl CommandDescriptor {
    /// Derives a descriptor, taking the name from the syntax string.
    pub fn from_info(info: &CommandInfo) -> Result<Self, CommandError> {
        let name = info
            .syntax
            .split_whitespace()
            .next()
            .ok_or_else(|| CommandError::failed("command syntax must start with a name"))?;
        Ok(Self {
            syntax: info.syntax.clone(),
            summary: info.summary.clone(),
            name: name.to_string(),
            normalized_name: name.to_lowercase(),
            group_start: false,
        })
    }
}

/// Dispatch-time binding passed to every hook of a command instance.
///
/// Carries the resolved display-case name, the registered descriptor, and
/// the registry's help wrap width. Commands receive it as an explicit
/// parameter, so an instance is never observable in a half-bound state.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    /// Invocation name in registered display case.
    pub name: &'a str,
    /// The registered descriptor.
    pub descriptor: &'a CommandDescriptor,
    /// Column the owning registry wraps help text to.
    pub wrap_width: usize,
}

/// One named command's option schema, validation, and execution logic.
///
/// All hooks except [`info`](Command::info) have provided defaults, so an
/// implementation overrides only the stages it participates in. A fresh
/// instance is built per dispatch and discarded afterwards.
///
/// # Examples
///
/// ```
/// use command_kit_core::*;
///
/// #[derive(Default)]
/// struct Frob {
///     thing: String,
/// }
///
/// impl Command for Frob {
///     fn info() -> CommandInfo {
///         CommandInfo::new("frob <thing>", "Frobs the thing")
///     }
///
///     fn parse_args(
///         &mut self,
///         _ctx: &CommandContext<'_>,
///         args: &mut ParsedArgs,
///     ) -> Result<(), CommandError> {
///         self.thing = args
///             .take_positional()
///             .ok_or_else(|| CommandError::usage("frob requires a thing to frob"))?;
///         Ok(())
///     }
///
///     fn run(&mut self, _ctx: &CommandContext<'_>, _args: &ParsedArgs) -> Result<(), CommandError> {
///         Ok(())
///     }
/// }
/// ```
pub trait Command {
    /// Static metadata for registration.
    fn info() -> CommandInfo
    where
        Self: Sized;

    /// Extends the option schema this command is tokenized against.
    ///
    /// Receives the accumulated schema (pre-seeded with the help flag) and
    /// returns the extended one; the default contributes nothing.
    fn extend_options(&self, schema: OptionSchema) -> OptionSchema {
        schema
    }

    /// Validates parsed arguments and consumes recognized positionals.
    ///
    /// Must drain every positional token it accepts via
    /// [`ParsedArgs::take_positional`]; tokens left over after this hook
    /// fail dispatch with an unexpected-argument usage error. Invalid input
    /// is reported with [`CommandError::usage`].
    fn parse_args(
        &mut self,
        ctx: &CommandContext<'_>,
        args: &mut ParsedArgs,
    ) -> Result<(), CommandError> {
        let _ = (ctx, args);
        Ok(())
    }

    /// Executes the command against validated arguments.
    ///
    /// The returned `Result` is the completion signal. The default fails
    /// with a "not implemented" error naming the command.
    fn run(&mut self, ctx: &CommandContext<'_>, args: &ParsedArgs) -> Result<(), CommandError> {
        let _ = args;
        Err(CommandError::failed(format!(
            "command \"{}\" is not implemented",
            ctx.name
        )))
    }

    /// Renders this command's help text wrapped to `width` columns.
    ///
    /// The default renders the same summary entry aggregate help uses.
    fn help(&self, ctx: &CommandContext<'_>, width: usize) -> String {
        help::summary_entry(ctx.descriptor, width)
    }
}

/// A registrable command: its metadata plus a factory building a fresh
/// instance per dispatch.
pub struct CommandEntry {
    pub(crate) info: CommandInfo,
    pub(crate) build: Box<dyn Fn() -> Box<dyn Command> + Send + Sync>,
}

impl CommandEntry {
    /// Creates an entry from explicit metadata and a factory.
    ///
    /// Useful when the factory needs to capture shared state; commands with
    /// a `Default` construction use [`entry`] instead.
    pub fn new<F>(info: CommandInfo, build: F) -> Self
    where
        F: Fn() -> Box<dyn Command> + Send + Sync + 'static,
    {
        Self {
            info,
            build: Box::new(build),
        }
    }
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

/// Creates a [`CommandEntry`] for a command constructible with `Default`.
pub fn entry<C>() -> CommandEntry
where
    C: Command + Default + 'static,
{
    CommandEntry::new(C::info(), || Box::new(C::default()))
}
