use bizcase::domain::currency::Currency;
use bizcase::domain::inputs::BusinessInputs;
use bizcase::domain::scenario::Scenario;
use bizcase::services::case_file::{CaseFile, serialize_case_file};

use crate::commands::base_commands::Commands;
use crate::commands::{CommandError, write_output};

pub fn init_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Init { output } = cmd {
        let case_file = CaseFile {
            scenario: Some(Scenario::Base),
            currency: Some(Currency::Usd),
            inputs: BusinessInputs::default(),
        };
        let mut buffer = Vec::new();
        serialize_case_file(&mut buffer, &case_file)?;
        write_output(&output, buffer)?;
        println!("Case file written to {output}");
    }
    Ok(())
}
