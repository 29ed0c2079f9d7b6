use clap::Parser;
use sales_analyzer::analyze_sales_data;
use sales_core::models::DatasetDto;
use std::io::Write as _;
use tracing::{Level, event};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

mod config;
pub use config::{OutputConfig, ReportConfig};

// The top-level arguments -- presently just which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Analyze { io, format, config } => {
                let format = OutputFormat::resolve(format, io.output())?;
                let config = ReportConfig::load(config.as_deref())?;

                let input = io.read()?;
                let dataset = serde_json::from_reader::<_, DatasetDto>(input)?;
                let report = analyze_sales_data(dataset, &config.analysis_options())?;

                let mut output = io.write()?;
                format.write(&report, config.output.pretty, &mut output)?;
                output.flush()?;
                event!(Level::INFO, entries = report.len(), "report written");
            }
            Commands::Schema { output } => {
                let mut buffer = output.writer()?;
                write_schema(&mut buffer)?;
                buffer.flush()?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Unable to infer report format, please specify a valid format")]
    FormatInference,
}
