//! Export command - write the ranked records to a numbered CSV sheet.

use std::fs::File;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use console::style;
use tracing::debug;

use super::{InputArgs, Settings, sheet};

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output file (default: <prefix>-YYYYMMDD.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, settings: &Settings) -> anyhow::Result<()> {
    let loaded = args.input.load(settings)?;
    let records = &loaded.outcome.records;

    if records.is_empty() {
        anyhow::bail!("No records to export");
    }

    let export = &settings.config.export;
    let output_path = args.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}-{}.csv",
            export.file_prefix,
            Local::now().format("%Y%m%d")
        ))
    });

    let file = File::create(&output_path)?;
    sheet::write_sheet(file, records.as_slice(), loaded.schema, export.include_position)?;
    debug!("Wrote {} rows to {}", records.len(), output_path.display());

    println!(
        "{} Exported {} records to {}",
        style("✓").green(),
        records.len(),
        output_path.display()
    );

    Ok(())
}
