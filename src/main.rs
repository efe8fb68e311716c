mod commands;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use crate::commands::analyze_cmd::analyze_command;
use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::convert_cmd::convert_command;
use crate::commands::export_csv_cmd::export_csv_command;
use crate::commands::init_cmd::init_command;
use crate::commands::scenarios_cmd::scenarios_command;
use crate::commands::sensitivity_cmd::sensitivity_command;
use crate::commands::summary_cmd::summary_command;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let result = match args.command {
        cmd @ Commands::Analyze { .. } => analyze_command(cmd),
        cmd @ Commands::ExportCsv { .. } => export_csv_command(cmd),
        cmd @ Commands::Summary { .. } => summary_command(cmd),
        cmd @ Commands::Sensitivity { .. } => sensitivity_command(cmd),
        cmd @ Commands::Convert { .. } => convert_command(cmd),
        cmd @ Commands::Init { .. } => init_command(cmd),
        Commands::Scenarios => {
            scenarios_command();
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
