//! Demo multi-command tool exercising the command-kit dispatch pipeline.

use command_kit_core::{
    Command, CommandContext, CommandError, CommandInfo, CommandRegistry, OptionSchema, ParsedArgs,
    confirm, entry,
};
use tracing_subscriber::EnvFilter;

/// Print the given words on one line.
#[derive(Default)]
struct EchoCommand {
    words: Vec<String>,
}

impl Command for EchoCommand {
    fn info() -> CommandInfo {
        CommandInfo::new("echo [word]...", "Print the given words on one line")
    }

    fn extend_options(&self, schema: OptionSchema) -> OptionSchema {
        schema
            .with_boolean("upper")
            .with_alias("u", "upper")
            .with_string("sep")
            .with_default("sep", " ")
    }

    fn parse_args(
        &mut self,
        _ctx: &CommandContext<'_>,
        args: &mut ParsedArgs,
    ) -> Result<(), CommandError> {
        while let Some(word) = args.take_positional() {
            self.words.push(word);
        }
        Ok(())
    }

    fn run(&mut self, _ctx: &CommandContext<'_>, args: &ParsedArgs) -> Result<(), CommandError> {
        let sep = args.get("sep").unwrap_or_else(|| " ".to_string());
        let mut line = self.words.join(&sep);
        if args.flag("upper") {
            line = line.to_uppercase();
        }
        println!("{line}");
        Ok(())
    }
}

/// Add up the given numbers.
#[derive(Default)]
struct SumCommand {
    numbers: Vec<f64>,
}

impl Command for SumCommand {
    fn info() -> CommandInfo {
        CommandInfo::new("sum <number>...", "Add the given numbers and print the total")
    }

    fn parse_args(
        &mut self,
        _ctx: &CommandContext<'_>,
        args: &mut ParsedArgs,
    ) -> Result<(), CommandError> {
        while let Some(token) = args.take_positional() {
            let number = token
                .parse::<f64>()
                .map_err(|_| CommandError::usage(format!("\"{token}\" is not a number")))?;
            self.numbers.push(number);
        }
        if self.numbers.is_empty() {
            return Err(CommandError::usage("sum requires at least one number"));
        }
        Ok(())
    }

    fn run(&mut self, _ctx: &CommandContext<'_>, _args: &ParsedArgs) -> Result<(), CommandError> {
        let total: f64 = self.numbers.iter().sum();
        if total.fract() == 0.0 && total.is_finite() && total.abs() < 9e15 {
            println!("{}", total as i64);
        } else {
            println!("{total}");
        }
        Ok(())
    }
}

/// Pretend to reset state, asking for confirmation first.
#[derive(Default)]
struct ResetCommand {
    force: bool,
}

impl Command for ResetCommand {
    fn info() -> CommandInfo {
        CommandInfo::new("reset", "Discard the scratch state after confirmation")
    }

    fn extend_options(&self, schema: OptionSchema) -> OptionSchema {
        schema.with_boolean("force").with_alias("f", "force")
    }

    fn parse_args(
        &mut self,
        _ctx: &CommandContext<'_>,
        args: &mut ParsedArgs,
    ) -> Result<(), CommandError> {
        self.force = args.flag("force");
        Ok(())
    }

    fn run(&mut self, _ctx: &CommandContext<'_>, _args: &ParsedArgs) -> Result<(), CommandError> {
        let proceed = self.force
            || confirm("Discard the scratch state?")
                .map_err(|err| CommandError::failed(format!("failed to read answer: {err}")))?;
        if proceed {
            println!("Reset.");
        } else {
            println!("Aborted.");
        }
        Ok(())
    }
}

fn build_registry() -> Result<CommandRegistry, CommandError> {
    let mut registry = CommandRegistry::new();
    registry.register(vec![entry::<EchoCommand>(), entry::<SumCommand>()])?;
    registry.register(vec![entry::<ResetCommand>()])?;
    Ok(registry)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let result = build_registry().and_then(|registry| registry.dispatch(&argv));

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(if err.is_usage() { 2 } else { 1 });
    }
}
