use clap::Parser;

pub mod root_commands;

pub use root_commands::{CheckArgs, Commands, InspectArgs};

/// Top-level CLI parser for the `skc` binary.
#[derive(Debug, Parser)]
#[command(
    name = "skc",
    version,
    about = "Validate CI compilation results against an expected-outcomes database"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["skc", "--verbose", "check"]).expect("cli should parse");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["skc", "check", "--quiet"]).expect("cli should parse");
        assert!(cli.quiet);
    }

    #[test]
    fn check_accepts_source_overrides() {
        let cli = Cli::try_parse_from([
            "skc",
            "check",
            "--reports-source",
            "build/reports",
            "--database-source",
            "artifact:expected-results",
        ])
        .expect("cli should parse");

        let Commands::Check(args) = cli.command else {
            panic!("expected the check subcommand");
        };
        assert_eq!(args.reports_source.as_deref(), Some("build/reports"));
        assert_eq!(
            args.database_source.as_deref(),
            Some("artifact:expected-results")
        );
    }

    #[test]
    fn inspect_accepts_an_explicit_path() {
        let cli = Cli::try_parse_from(["skc", "inspect", "some/reports"]).expect("cli should parse");
        let Commands::Inspect(args) = cli.command else {
            panic!("expected the inspect subcommand");
        };
        assert_eq!(args.path.as_deref(), Some(std::path::Path::new("some/reports")));
    }
}
