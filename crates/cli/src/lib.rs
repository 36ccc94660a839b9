//! `primer` command surface.
//!
//! Each subcommand writes to a caller-supplied sink so it can be driven from
//! tests as well as from `main`.

pub mod demos;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "primer")]
#[command(about = "Echo standard input, or print the value object and greeting demos")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Selected subcommand; no subcommand means [`Command::Echo`].
    pub fn selected(&self) -> Command {
        self.command.unwrap_or(Command::Echo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Echo each line of standard input until end-of-file (the default)
    Echo,
    /// Construct the sample books and print both renderings
    Books,
    /// Print the greeting and callback examples
    Greetings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn no_arguments_means_echo() {
        let cli = Cli::try_parse_from(["primer"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.selected(), Command::Echo);
    }

    #[test]
    fn named_subcommands_parse() {
        let parse = |name: &str| Cli::try_parse_from(["primer", name]).unwrap().selected();
        assert_eq!(parse("echo"), Command::Echo);
        assert_eq!(parse("books"), Command::Books);
        assert_eq!(parse("greetings"), Command::Greetings);
    }

    #[test]
    fn unknown_and_extra_arguments_are_rejected() {
        let err = Cli::try_parse_from(["primer", "fly"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);

        let err = Cli::try_parse_from(["primer", "books", "now"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
