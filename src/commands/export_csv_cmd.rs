use bizcase::services::business_case::evaluate_all_scenarios;
use bizcase::services::csv_export::scenarios_to_csv_string;

use crate::commands::base_commands::Commands;
use crate::commands::case_input::resolve_case;
use crate::commands::{CommandError, write_output};

pub fn export_csv_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::ExportCsv {
        input,
        currency,
        output,
    } = cmd
    {
        let resolved = resolve_case(input.as_deref(), None, currency)?;
        let outcomes = evaluate_all_scenarios(&resolved.inputs, resolved.currency);
        let csv = scenarios_to_csv_string(&outcomes, resolved.currency)?;
        write_output(&output, csv)?;
        println!("Scenario comparison written to {output}");
    }
    Ok(())
}
