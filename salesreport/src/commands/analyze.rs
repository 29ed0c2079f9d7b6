use crate::{CliError, PathOrStd};
use clap::ValueEnum;
use sales_core::models::ReportEntry;
use std::{io::Write, str::FromStr};

/// The formats a report can be written in
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// An array of report entries
    Json,
    /// A fixed-width text table, one seller per line
    Table,
}

impl OutputFormat {
    /// Pick the report format: an explicit `flag` wins, then the output file's
    /// extension. Stdout defaults to JSON; a file without an extension is an error.
    pub fn resolve(flag: Option<Self>, output: &PathOrStd) -> anyhow::Result<Self> {
        match (flag, output.extension()) {
            (Some(format), _) => Ok(format),
            (None, Some(ext)) => Ok(ext.parse()?),
            (None, None) if *output == PathOrStd::Std => Ok(Self::Json),
            (None, None) => Err(CliError::FormatInference.into()),
        }
    }

    pub fn write<W: Write>(
        &self,
        report: &[ReportEntry],
        pretty: bool,
        buffer: &mut W,
    ) -> anyhow::Result<()> {
        match self {
            Self::Json => {
                if pretty {
                    serde_json::to_writer_pretty(&mut *buffer, report)?;
                } else {
                    serde_json::to_writer(&mut *buffer, report)?;
                }
                writeln!(buffer)?;
            }
            Self::Table => render_table(report, buffer)?,
        };
        Ok(())
    }
}

// Inference works off the output file's extension
impl FromStr for OutputFormat {
    type Err = OutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" | "JSON" => Ok(Self::Json),
            "txt" | "TXT" | "table" => Ok(Self::Table),
            _ => Err(Self::Err::OutputExtension(s.to_owned())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum OutputFormatError {
    #[error("Unknown report format: {0}")]
    OutputExtension(String),
}

fn render_table<W: Write>(report: &[ReportEntry], buffer: &mut W) -> std::io::Result<()> {
    writeln!(
        buffer,
        "{:>4}  {:<12}  {:<24}  {:>12}  {:>12}  {:>5}  {:>10}  top products",
        "rank", "seller", "name", "revenue", "profit", "sales", "bonus"
    )?;
    for (rank, entry) in report.iter().enumerate() {
        let top = entry
            .top_products
            .iter()
            .map(|product| format!("{} x{}", product.sku, product.quantity))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            buffer,
            "{:>4}  {:<12}  {:<24}  {:>12.2}  {:>12.2}  {:>5}  {:>10.2}  {}",
            rank + 1,
            entry.seller_id,
            entry.name,
            entry.revenue,
            entry.profit,
            entry.sales_count,
            entry.bonus,
            top,
        )?;
    }
    Ok(())
}
