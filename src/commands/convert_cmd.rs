use bizcase::domain::currency::convert_currency;

use crate::commands::CommandError;
use crate::commands::base_commands::Commands;

pub fn convert_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Convert { amount, from, to } = cmd {
        let converted = convert_currency(amount, &from, &to)?;
        println!("{converted:.2} {to}");
    }
    Ok(())
}
