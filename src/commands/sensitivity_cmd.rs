use bizcase::domain::scenario::Scenario;
use bizcase::services::business_case::evaluate_scenario;
use bizcase::services::sensitivity::analyze_sensitivity;
use bizcase::services::tornado::rank_tornado;

use crate::commands::base_commands::Commands;
use crate::commands::case_input::resolve_case;
use crate::commands::report_format::format_tornado_table;
use crate::commands::{CommandError, write_output};

pub fn sensitivity_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Sensitivity {
        input,
        currency,
        output,
    } = cmd
    {
        let resolved = resolve_case(input.as_deref(), None, currency)?;
        let base = evaluate_scenario(&resolved.inputs, Scenario::Base, resolved.currency);
        let rows = analyze_sensitivity(&resolved.inputs, base.metrics.roi_3year, resolved.currency);

        println!("{}", format_tornado_table(&rank_tornado(&rows)));

        if let Some(output) = output {
            write_output(&output, serde_yaml::to_string(&rows)?)?;
            println!("Sensitivity rows written to {output}");
        }
    }
    Ok(())
}
