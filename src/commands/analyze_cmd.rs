use tracing::info;

use bizcase::services::business_case::build_business_case;
use bizcase::services::charts::{
    write_projection_png, write_scenario_comparison_png, write_tornado_png, write_waterfall_png,
};

use crate::commands::base_commands::{Commands, OutputFormat};
use crate::commands::case_input::resolve_case;
use crate::commands::report_format::format_business_case_report;
use crate::commands::{CommandError, write_output};

pub fn analyze_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Analyze {
        input,
        scenario,
        currency,
        output,
        format,
        charts,
    } = cmd
    {
        let resolved = resolve_case(input.as_deref(), scenario, currency)?;
        let case = build_business_case(&resolved.inputs, resolved.scenario, resolved.currency);

        println!("{}", format_business_case_report(&case));

        let Some(output) = output else {
            return Ok(());
        };

        let contents = match format {
            OutputFormat::Yaml => serde_yaml::to_string(&case)?,
            OutputFormat::Json => serde_json::to_string_pretty(&case)?,
        };
        write_output(&output, contents)?;
        println!("Business case written to {output}");

        if charts {
            let waterfall_path = format!("{output}.waterfall.png");
            let title = format!("Annual Benefit Breakdown - {}", case.selected.scenario);
            write_waterfall_png(&waterfall_path, &case.selected.benefits, &title)?;
            println!("Benefit waterfall written to {waterfall_path}");

            let tornado_path = format!("{output}.tornado.png");
            write_tornado_png(&tornado_path, &case.tornado, case.currency)?;
            println!("Tornado chart written to {tornado_path}");

            let projection_path = format!("{output}.projection.png");
            let title = format!("3-Year Financial Projection - {}", case.selected.scenario);
            write_projection_png(&projection_path, &case.projection, case.currency, &title)?;
            println!("Projection chart written to {projection_path}");

            let scenarios_path = format!("{output}.scenarios.png");
            write_scenario_comparison_png(&scenarios_path, &case.comparison, case.currency)?;
            println!("Scenario comparison chart written to {scenarios_path}");
        }
        info!(output = %output, charts, "analyze finished");
    }
    Ok(())
}
