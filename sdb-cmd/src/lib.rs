//! Command implementations for the SDB CLI.
//!
//! Every command loads the record table, applies the same filters and
//! selection the dashboard would, and prints the result.

use clap::Subcommand;

pub mod report;
pub mod scope;

use report::ChartKind;
use scope::Scope;

#[derive(Subcommand)]
pub enum Command {
    /// Print the headline summary metrics
    Summary {
        #[command(flatten)]
        scope: Scope,
    },

    /// Print one chart's series as JSON
    Chart {
        /// Which chart to print
        #[arg(value_enum)]
        chart: ChartKind,

        #[command(flatten)]
        scope: Scope,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { scope } => {
            let view = scope.build_view()?;
            for line in report::summary_lines(&view) {
                println!("{}", line);
            }
            Ok(())
        }
        Command::Chart { chart, scope } => {
            let view = scope.build_view()?;
            println!("{}", report::chart_json(&view, chart)?);
            Ok(())
        }
    }
}
