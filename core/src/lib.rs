//! Building blocks for subcommand-style command-line tools.
//!
//! This crate standardizes the lifecycle shared by tools that dispatch on
//! their first positional argument:
//!
//! - [`CommandRegistry`] — owns the registered commands, routes an argument
//!   vector to a named command or the default path, and renders aggregate
//!   help.
//! - [`Command`] — one named command's option schema, validation, and
//!   execution hooks, built fresh per dispatch.
//! - [`OptionSchema`] — immutable option declarations composed by folding
//!   extension hooks over a pre-seeded base (the `help` flag is always
//!   declared).
//! - [`tokenize`] — converts raw arguments plus a schema into
//!   [`ParsedArgs`].
//! - [`CommandError`] — the usage-vs-failure taxonomy the dispatcher
//!   pattern-matches on.
//!
//! Every dispatch runs the same pipeline: route, fold option hooks,
//! tokenize, short-circuit on `--help`, validate (which must drain the
//! leftover positionals), then execute.
//!
//! # Example
//!
//! ```
//! use command_kit_core::*;
//!
//! #[derive(Default)]
//! struct Greet {
//!     names: Vec<String>,
//! }
//!
//! impl Command for Greet {
//!     fn info() -> CommandInfo {
//!         CommandInfo::new("greet <name>...", "Greet each of the given names")
//!     }
//!
//!     fn extend_options(&self, schema: OptionSchema) -> OptionSchema {
//!         schema.with_boolean("loud").with_alias("l", "loud")
//!     }
//!
//!     fn parse_args(
//!         &mut self,
//!         _ctx: &CommandContext<'_>,
//!         args: &mut ParsedArgs,
//!     ) -> Result<(), CommandError> {
//!         while let Some(name) = args.take_positional() {
//!             self.names.push(name);
//!         }
//!         if self.names.is_empty() {
//!             return Err(CommandError::usage("greet requires at least one name"));
//!         }
//!         Ok(())
//!     }
//!
//!     fn run(&mut self, _ctx: &CommandContext<'_>, args: &ParsedArgs) -> Result<(), CommandError> {
//!         for name in &self.names {
//!             let line = format!("Hello, {name}!");
//!             if args.flag("loud") {
//!                 println!("{}", line.to_uppercase());
//!             } else {
//!                 println!("{line}");
//!             }
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = CommandRegistry::new();
//! registry.register(vec![entry::<Greet>()]).unwrap();
//!
//! let argv: Vec<String> = ["greet", "--loud", "world"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! registry.dispatch(&argv).unwrap();
//! ```

mod args;
mod command;
mod error;
pub mod help;
mod prompt;
mod registry;
mod schema;
mod tokenize;

pub use args::{ArgValue, ParsedArgs};
pub use command::{Command, CommandContext, CommandDescriptor, CommandEntry, CommandInfo, entry};
pub use error::CommandError;
pub use prompt::{confirm, confirm_with};
pub use registry::{CommandRegistry, DefaultCommand};
pub use schema::OptionSchema;
pub use tokenize::tokenize;
