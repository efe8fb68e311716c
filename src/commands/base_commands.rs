use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use bizcase::domain::currency::Currency;
use bizcase::domain::scenario::Scenario;

#[derive(Parser)]
#[command(author, version, about = "Financial business case for order-management automation")]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute benefits, ROI and sensitivity for all scenarios and print a report
    Analyze {
        /// Case file YAML (reference inputs when omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Scenario shown in the headline metrics
        #[arg(short, long, value_enum, ignore_case = true)]
        scenario: Option<Scenario>,
        /// Reporting currency
        #[arg(short, long, value_enum, ignore_case = true)]
        currency: Option<Currency>,
        /// Output file for the full business case
        #[arg(short, long)]
        output: Option<String>,
        /// Serialization format of the output file
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Also render waterfall, tornado, projection and scenario charts next to the output file
        #[arg(long, requires = "output")]
        charts: bool,
    },
    /// Export all three scenarios to CSV
    ExportCsv {
        /// Case file YAML (reference inputs when omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reporting currency
        #[arg(short, long, value_enum, ignore_case = true)]
        currency: Option<Currency>,
        /// Output CSV file
        #[arg(short, long)]
        output: String,
    },
    /// Write the plain-text executive summary
    Summary {
        /// Case file YAML (reference inputs when omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Scenario shown in the headline metrics
        #[arg(short, long, value_enum, ignore_case = true)]
        scenario: Option<Scenario>,
        /// Reporting currency
        #[arg(short, long, value_enum, ignore_case = true)]
        currency: Option<Currency>,
        /// Output text file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Run the one-variable-at-a-time ROI sensitivity sweep
    Sensitivity {
        /// Case file YAML (reference inputs when omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reporting currency
        #[arg(short, long, value_enum, ignore_case = true)]
        currency: Option<Currency>,
        /// Output YAML file for the per-point rows
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List the scenario profiles and their multipliers
    Scenarios,
    /// Convert an amount between supported currencies
    Convert {
        /// Amount to convert
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Source currency code (USD, EUR)
        #[arg(long)]
        from: String,
        /// Target currency code (USD, EUR)
        #[arg(long)]
        to: String,
    },
    /// Write a case file pre-filled with the reference inputs
    Init {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
