use super::{IOArgs, PathOrStd};
use clap::Subcommand;
use std::path::PathBuf;

mod analyze;
pub use analyze::{OutputFormat, OutputFormatError};

mod schema;
pub use schema::write_schema;

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a sales dataset and write the seller performance report
    Analyze {
        #[command(flatten)]
        io: IOArgs,

        /// The report format (if omitted, will infer based on filename)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Path to configuration file
        #[arg(short, long, env = "SALESREPORT_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Write the JSON schema of the dataset input
    Schema {
        /// The output file ("-" implies stdout)
        #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
        output: PathOrStd,
    },
}
