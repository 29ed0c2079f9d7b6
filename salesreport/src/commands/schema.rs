use sales_core::models::DatasetDto;
use std::io::Write;

/// Write the JSON schema accepted by `analyze` as input
pub fn write_schema<W: Write>(buffer: &mut W) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(DatasetDto);
    serde_json::to_writer_pretty(&mut *buffer, &schema)?;
    writeln!(buffer)?;
    Ok(())
}
