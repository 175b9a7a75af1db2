//! binop: two-operand calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! binop                      # Interactive terminal calculator
//! binop calc 6 / 3           # One-shot calculation
//! binop calc 1 / 0 -f json   # Machine-readable result
//! binop config               # Show the effective configuration
//! ```

use std::io;
use std::process::ExitCode;

use binop_cli::{
    build_cli_config,
    handlers::{execute_calc, execute_config, run_tui},
    logging::init_logging,
    resolve_config, Cli, CliResult, Commands,
};
use clap::Parser;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let cli_config = build_cli_config(&cli);

    // Config errors surface before any command runs
    let config = resolve_config(&cli)?;

    let command = cli.command.unwrap_or(Commands::Tui);
    init_logging(&cli_config, matches!(command, Commands::Tui))?;

    match command {
        Commands::Tui => run_tui(config),
        Commands::Calc(args) => execute_calc(&args, &mut io::stdout().lock()),
        Commands::Config(args) => execute_config(&config, &args, &mut io::stdout().lock()),
    }
}
