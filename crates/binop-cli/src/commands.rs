//! CLI command definitions using clap

use std::path::PathBuf;

use binop_calculator::session::ReplayPolicy;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// binop: two-operand calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "binop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Calculator configuration file (YAML)
    #[arg(long, value_name = "FILE", env = "BINOP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// How Enter replays the last operation (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub replay_policy: Option<ReplayPolicyArg>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive terminal calculator
    Tui,

    /// Calculate once and print the display text
    Calc(CalcArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the calc command
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// First operand, as typed into the first input
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// Operation symbol: + - * /
    #[arg(allow_hyphen_values = true)]
    pub op: String,

    /// Second operand, as typed into the second input
    #[arg(allow_hyphen_values = true)]
    pub b: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: CalcOutputFormat,
}

/// Output format for calc
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalcOutputFormat {
    /// Display text only
    #[default]
    Text,
    /// JSON object
    Json,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: ConfigOutputFormat,
}

/// Output format for config
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigOutputFormat {
    /// YAML, loadable with --config
    #[default]
    Yaml,
    /// JSON
    Json,
}

/// Replay policy as a command-line value
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayPolicyArg {
    /// Empty inputs fall back to the remembered operands
    RememberedOperands,
    /// Use the inputs as they are
    CurrentInputs,
}

impl From<ReplayPolicyArg> for ReplayPolicy {
    fn from(arg: ReplayPolicyArg) -> Self {
        match arg {
            ReplayPolicyArg::RememberedOperands => Self::RememberedOperands,
            ReplayPolicyArg::CurrentInputs => Self::CurrentInputs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["binop"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_calc_with_negative_operands() {
        let cli = Cli::try_parse_from(["binop", "calc", "-3", "-", "-2"]).unwrap();
        let Some(Commands::Calc(args)) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.a, "-3");
        assert_eq!(args.op, "-");
        assert_eq!(args.b, "-2");
        assert_eq!(args.format, CalcOutputFormat::Text);
    }

    #[test]
    fn test_calc_json_format() {
        let cli = Cli::try_parse_from(["binop", "calc", "1", "+", "2", "--format", "json"]).unwrap();
        let Some(Commands::Calc(args)) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.format, CalcOutputFormat::Json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "binop",
            "config",
            "-vv",
            "--replay-policy",
            "current-inputs",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.replay_policy, Some(ReplayPolicyArg::CurrentInputs));
    }

    #[test]
    fn test_replay_policy_conversion() {
        assert_eq!(
            ReplayPolicy::from(ReplayPolicyArg::RememberedOperands),
            ReplayPolicy::RememberedOperands
        );
        assert_eq!(
            ReplayPolicy::from(ReplayPolicyArg::CurrentInputs),
            ReplayPolicy::CurrentInputs
        );
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(Cli::try_parse_from(["binop", "--replay-policy", "sometimes"]).is_err());
    }
}
