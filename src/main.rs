use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use budget_ledger::cli::{
    handle_chart_command, handle_config_command, handle_demo_command, handle_run_command, RunArgs,
};
use budget_ledger::config::{Settings, CONFIG_ENV_VAR};
use budget_ledger::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Category ledgers and ASCII spend charts",
    long_about = "Replays deposits, withdrawals and transfers against named budget \
                  categories, then prints each category's ledger and a bar chart of \
                  how spending splits across them."
)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script and print ledgers and the spend chart
    Run(RunArgs),

    /// Run a script and print only the spend chart
    Chart {
        /// Script file (.json, .yaml or .yml)
        file: PathBuf,
    },

    /// Run the built-in sample script
    Demo,

    /// Show the resolved settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load_or_default(cli.config.as_deref())?;
    init_tracing(&settings.log_filter);

    match cli.command {
        Some(Commands::Run(args)) => handle_run_command(&settings, args)?,
        Some(Commands::Chart { file }) => handle_chart_command(&settings, file)?,
        Some(Commands::Demo) => handle_demo_command(&settings)?,
        Some(Commands::Config) => handle_config_command(&settings)?,
        None => {
            println!("budget - category ledgers and spend charts");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget demo' to see a sample report.");
        }
    }

    Ok(())
}
