#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod form;
mod logging;
mod repl;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use simple_calc::Adapter;

use crate::config::AppConfig;
use crate::form::TerminalForm;

/// simple-calc - four-function calculator
#[derive(Parser)]
#[command(name = "simple-calc")]
#[command(about = "simple-calc - four-function calculator")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a single operation, e.g. `compute div 32 2`
    Compute {
        /// Operator: add, sub, mul, div (or + - * /)
        operator: String,
        /// First operand; an empty string counts as 0
        #[arg(allow_hyphen_values = true)]
        first: String,
        /// Second operand; an empty string counts as 0
        #[arg(allow_hyphen_values = true)]
        second: String,
    },
    /// Read `<first> <op> <second>` lines from stdin
    Repl,
    /// Validate configuration and exit
    Check,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 1) defaults -> 2) YAML -> 3) env -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.verbose);

    logging::init_logging(&config.logging)?;
    tracing::debug!(config = ?cli.config, "configuration loaded");

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(ExitCode::SUCCESS);
    }

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Compute {
            operator,
            first,
            second,
        } => Ok(compute(&config, &operator, &first, &second)),
        Commands::Repl => run_repl(&config),
        Commands::Check => check_config(&config),
    }
}

fn compute(config: &AppConfig, operator: &str, first: &str, second: &str) -> ExitCode {
    let mut form = TerminalForm::new(&config.calculator);
    form.set_operands(first, second);

    let outcome = Adapter::default().compute_named(&mut form, operator);
    println!("{}", form.result());

    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_repl(config: &AppConfig) -> Result<ExitCode> {
    tracing::info!("starting interactive session");
    let mut form = TerminalForm::new(&config.calculator);
    let failures = repl::run(&Adapter::default(), &mut form, io::stdin().lock(), io::stdout())?;
    tracing::info!(failures, "session finished");
    Ok(ExitCode::SUCCESS)
}

fn check_config(config: &AppConfig) -> Result<ExitCode> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(ExitCode::SUCCESS)
}
