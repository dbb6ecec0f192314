//! Script CLI commands
//!
//! Implements `run`, `chart` and `demo`: replay a script and print the
//! category reports and spend chart.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::script::Script;
use crate::services::{RunReport, ScriptRunner};

/// Output format for run results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Category reports and the spend chart
    #[default]
    Text,
    /// The run summary as pretty-printed JSON
    Json,
}

/// Arguments for `budget run`
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Script file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Stop at the first declined withdrawal or transfer
    #[arg(long)]
    pub strict: bool,

    /// Do not print the spend chart
    #[arg(long)]
    pub no_chart: bool,

    /// Do not print category ledgers
    #[arg(long)]
    pub no_ledgers: bool,
}

/// Handle `budget run`
pub fn handle_run_command(settings: &Settings, args: RunArgs) -> LedgerResult<()> {
    println!("{}", render_run(settings, &args)?);
    Ok(())
}

/// Handle `budget chart`
pub fn handle_chart_command(settings: &Settings, file: PathBuf) -> LedgerResult<()> {
    let script = Script::load(&file)?;
    let report = ScriptRunner::new(settings.strict).run(&script)?;
    println!("{}", report.format_terminal(false, true));
    Ok(())
}

/// Handle `budget demo`
pub fn handle_demo_command(settings: &Settings) -> LedgerResult<()> {
    let script = Script::demo()?;
    let report = ScriptRunner::new(settings.strict).run(&script)?;
    println!("{}", format_report(settings, &report, &RunArgs::default())?);
    Ok(())
}

/// Run the script named in `args` and format the result
pub fn render_run(settings: &Settings, args: &RunArgs) -> LedgerResult<String> {
    let script = Script::load(&args.file)?;
    let report = ScriptRunner::new(settings.strict || args.strict).run(&script)?;
    format_report(settings, &report, args)
}

fn format_report(settings: &Settings, report: &RunReport, args: &RunArgs) -> LedgerResult<String> {
    match args.format {
        OutputFormat::Text => Ok(report.format_terminal(
            settings.show_ledgers && !args.no_ledgers,
            settings.show_chart && !args.no_chart,
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report.summary())?),
    }
}
