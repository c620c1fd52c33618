//! Command registration and the dispatch pipeline.
//!
//! [`CommandRegistry`] owns the ordered set of registered commands and runs
//! the argument lifecycle for each invocation: route to a named command or
//! the default path, fold the option-extension hooks over the pre-seeded
//! schema, tokenize, short-circuit on `--help`, validate, then execute.
//! Registration happens once at startup; dispatch never mutates the
//! registry, so one registry serves concurrent invocations.

use std::io::{self, Write};

use tracing::debug;

use crate::{
    CommandContext, CommandDescriptor, CommandEntry, CommandError, OptionSchema, ParsedArgs,
    command::Command, help, tokenize,
};

const DEFAULT_WRAP_WIDTH: usize = 80;
const DEFAULT_INTRO: &str = "Available commands:\n";
const NO_COMMANDS_HELP: &str = "No command help is available.\n";

/// Behavior invoked when the argument vector does not begin with a
/// recognized command name.
///
/// The option and parse hooks have no-op defaults; `run` is the default
/// command's execution logic. Installed via
/// [`CommandRegistry::set_default_command`]; without one the registry
/// reports a missing-command usage error (or "not implemented" when no
/// commands are registered at all).
pub trait DefaultCommand {
    /// Extends the schema used when no command name is given.
    fn extend_options(&self, schema: OptionSchema) -> OptionSchema {
        schema
    }

    /// Validates and consumes positionals for the default path.
    fn parse_args(&mut self, args: &mut ParsedArgs) -> Result<(), CommandError> {
        let _ = args;
        Ok(())
    }

    /// Executes the default command.
    fn run(&mut self, args: &ParsedArgs) -> Result<(), CommandError>;
}

struct Registration {
    descriptor: CommandDescriptor,
    build: Box<dyn Fn() -> Box<dyn Command> + Send + Sync>,
}

type DefaultFactory = Box<dyn Fn() -> Box<dyn DefaultCommand> + Send + Sync>;

/// Ordered set of named commands plus the dispatch entry point.
///
/// # Examples
///
/// ```
/// use command_kit_core::*;
///
/// #[derive(Default)]
/// struct Version;
///
/// impl Command for Version {
///     fn info() -> CommandInfo {
///         CommandInfo::new("version", "Print the tool version")
///     }
///
///     fn run(&mut self, _ctx: &CommandContext<'_>, _args: &ParsedArgs) -> Result<(), CommandError> {
///         println!("1.0.0");
///         Ok(())
///     }
/// }
///
/// let mut registry = CommandRegistry::new();
/// registry.register(vec![entry::<Version>()]).unwrap();
///
/// let argv = vec!["version".to_string()];
/// registry.dispatch(&argv).unwrap();
/// ```
pub struct CommandRegistry {
    commands: Vec<Registration>,
    default_command: Option<DefaultFactory>,
    wrap_width: usize,
    intro: String,
    trailer: String,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates an empty registry wrapping help at 80 columns.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            default_command: None,
            wrap_width: DEFAULT_WRAP_WIDTH,
            intro: DEFAULT_INTRO.to_string(),
            trailer: "\n".to_string(),
        }
    }

    /// Sets the help wrap column. Builder-style, used at construction.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Replaces the aggregate-help introduction text.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    /// Replaces the aggregate-help trailer (default: one blank line).
    pub fn with_trailer(mut self, trailer: impl Into<String>) -> Self {
        self.trailer = trailer.into();
        self
    }

    /// Installs the default-command handler.
    pub fn set_default_command<F>(&mut self, build: F)
    where
        F: Fn() -> Box<dyn DefaultCommand> + Send + Sync + 'static,
    {
        self.default_command = Some(Box::new(build));
    }

    /// Registers a batch of commands; the batch forms one help group.
    ///
    /// Derives each entry's descriptor and rejects a normalized name that
    /// collides with any previously registered command. Callable multiple
    /// times; insertion order is display order.
    pub fn register(&mut self, entries: Vec<CommandEntry>) -> Result<(), CommandError> {
        for (index, entry) in entries.into_iter().enumerate() {
            let mut descriptor = CommandDescriptor::from_info(&entry.info)?;
            if self
                .commands
                .iter()
                .any(|r| r.descriptor.normalized_name == descriptor.normalized_name)
            {
                return Err(CommandError::failed(format!(
                    "duplicate command name \"{}\"",
                    descriptor.normalized_name
                )));
            }
            descriptor.group_start = index == 0;
            debug!(command = %descriptor.name, "registered command");
            self.commands.push(Registration {
                descriptor,
                build: entry.build,
            });
        }
        Ok(())
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter().map(|r| &r.descriptor)
    }

    /// Finds a registered descriptor by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&CommandDescriptor> {
        let normalized = name.to_lowercase();
        self.commands
            .iter()
            .map(|r| &r.descriptor)
            .find(|d| d.normalized_name == normalized)
    }

    /// Dispatches an argument vector, writing help output to stdout.
    ///
    /// The returned `Result` is the completion signal: usage-kind errors
    /// are caller mistakes the embedding application should print, any
    /// other error is a command failure.
    pub fn dispatch(&self, argv: &[String]) -> Result<(), CommandError> {
        self.dispatch_to(argv, &mut io::stdout())
    }

    /// [`dispatch`](CommandRegistry::dispatch) against an explicit help sink.
    pub fn dispatch_to(&self, argv: &[String], out: &mut dyn Write) -> Result<(), CommandError> {
        let candidate = argv.first().filter(|token| !token.starts_with('-'));

        match candidate {
            Some(name) => {
                let normalized = name.to_lowercase();
                let Some(registration) = self
                    .commands
                    .iter()
                    .find(|r| r.descriptor.normalized_name == normalized)
                else {
                    debug!(command = %name, "unknown command");
                    return Err(CommandError::usage(format!("unknown command \"{name}\"")));
                };
                self.dispatch_named(registration, &argv[1..], out)
            }
            None => self.dispatch_default(argv, out),
        }
    }

    fn dispatch_named(
        &self,
        registration: &Registration,
        argv: &[String],
        out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        let descriptor = &registration.descriptor;
        let ctx = CommandContext {
            name: &descriptor.name,
            descriptor,
            wrap_width: self.wrap_width,
        };
        let mut command = (registration.build)();

        let schema = command.extend_options(OptionSchema::base());
        let mut parsed = tokenize(argv, &schema);

        if parsed.flag("help") {
            debug!(command = %descriptor.name, "rendering command help");
            let text = command.help(&ctx, self.wrap_width);
            return write_help(out, &text, self.wrap_width);
        }

        parsed.stringify_positionals();
        command.parse_args(&ctx, &mut parsed)?;
        if let Some(extra) = parsed.peek_positional() {
            return Err(CommandError::unexpected_arg(extra));
        }

        debug!(command = %descriptor.name, "running command");
        command.run(&ctx, &parsed)
    }

    fn dispatch_default(&self, argv: &[String], out: &mut dyn Write) -> Result<(), CommandError> {
        let mut handler = self.default_command.as_ref().map(|build| build());

        let schema = match &handler {
            Some(h) => h.extend_options(OptionSchema::base()),
            None => OptionSchema::base(),
        };
        let mut parsed = tokenize(argv, &schema);

        if parsed.flag("help") {
            debug!("rendering aggregate help");
            return write_help(out, &self.help(), self.wrap_width);
        }

        parsed.stringify_positionals();
        if let Some(h) = handler.as_mut() {
            h.parse_args(&mut parsed)?;
        }
        if let Some(extra) = parsed.peek_positional() {
            return Err(CommandError::unexpected_arg(extra));
        }

        match handler.as_mut() {
            Some(h) => {
                debug!("running default command");
                h.run(&parsed)
            }
            None if !self.commands.is_empty() => {
                Err(CommandError::usage("missing command argument"))
            }
            None => Err(CommandError::failed("default command is not implemented")),
        }
    }

    /// Renders aggregate help: intro, grouped command entries, trailer.
    ///
    /// A blank line precedes each registration batch's first entry. With no
    /// commands registered this degrades to a fixed message.
    pub fn help(&self) -> String {
        if self.commands.is_empty() {
            return NO_COMMANDS_HELP.to_string();
        }

        let mut out = self.intro.clone();
        for registration in &self.commands {
            if registration.descriptor.group_start {
                out.push('\n');
            }
            out.push_str(&help::summary_entry(
                &registration.descriptor,
                self.wrap_width,
            ));
        }
        out.push_str(&self.trailer);
        out
    }
}

fn write_help(out: &mut dyn Write, text: &str, width: usize) -> Result<(), CommandError> {
    let failed = |err: io::Error| CommandError::failed(format!("failed to write help output: {err}"));
    // Wrapping happens here, at the last moment before the stream, so help
    // overrides returning unwrapped prose still honor the configured width.
    let wrapped = help::wrap(text, width);
    out.write_all(wrapped.as_bytes()).map_err(failed)?;
    if !wrapped.ends_with('\n') {
        out.write_all(b"\n").map_err(failed)?;
    }
    Ok(())
}
