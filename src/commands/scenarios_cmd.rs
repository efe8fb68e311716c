use bizcase::domain::scenario::list_scenarios;

use crate::commands::report_format::format_scenario_catalog;

pub fn scenarios_command() {
    println!("{}", format_scenario_catalog(list_scenarios()));
}
