use chrono::Local;

use bizcase::services::business_case::build_business_case;
use bizcase::services::executive_summary::format_executive_summary;

use crate::commands::base_commands::Commands;
use crate::commands::case_input::resolve_case;
use crate::commands::{CommandError, write_output};

pub fn summary_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Summary {
        input,
        scenario,
        currency,
        output,
    } = cmd
    {
        let resolved = resolve_case(input.as_deref(), scenario, currency)?;
        let case = build_business_case(&resolved.inputs, resolved.scenario, resolved.currency);
        let summary = format_executive_summary(&case, Local::now().naive_local());

        match output {
            Some(output) => {
                write_output(&output, summary)?;
                println!("Executive summary written to {output}");
            }
            None => print!("{summary}"),
        }
    }
    Ok(())
}
