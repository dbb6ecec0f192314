//! `budget config` command

use crate::config::Settings;
use crate::error::LedgerResult;

/// Print the resolved settings
pub fn handle_config_command(settings: &Settings) -> LedgerResult<()> {
    print!("{}", format_settings(settings));
    Ok(())
}

pub fn format_settings(settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("budget-ledger configuration\n");
    output.push_str("===========================\n");
    output.push_str(&format!("Schema version: {}\n", settings.schema_version));
    output.push_str(&format!("Show ledgers:   {}\n", settings.show_ledgers));
    output.push_str(&format!("Show chart:     {}\n", settings.show_chart));
    output.push_str(&format!("Strict:         {}\n", settings.strict));
    output.push_str(&format!("Log filter:     {}\n", settings.log_filter));
    output
}
