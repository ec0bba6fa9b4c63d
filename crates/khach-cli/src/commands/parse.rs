//! Parse command - turn listing lines into ranked records.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use khach_core::listing::rules::{compact_phone, display_name, is_company};
use khach_core::listing::{Diagnostic, RecordSet};
use khach_core::models::record::Schema;

use super::{InputArgs, Settings, sheet};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON array of records
    Json,
    /// CSV sheet
    Csv,
    /// Plain text table
    Text,
}

pub fn run(args: ParseArgs, settings: &Settings) -> anyhow::Result<()> {
    let loaded = args.input.load(settings)?;
    let records = &loaded.outcome.records;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(records)?,
        OutputFormat::Csv => sheet::sheet_string(
            records.as_slice(),
            loaded.schema,
            settings.config.export.include_position,
        )?,
        OutputFormat::Text => format_text(records, loaded.schema, &loaded.outcome.diagnostics),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} {} records written to {}",
            style("✓").green(),
            records.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(records: &RecordSet, schema: Schema, diagnostics: &[Diagnostic]) -> String {
    let mut output = String::new();

    for (i, record) in records.iter().enumerate() {
        let name = display_name(&record.name);
        let name = if record.name.is_empty() {
            style(name).red()
        } else if is_company(&record.name) {
            style(name).blue()
        } else {
            style(name)
        };

        output.push_str(&format!(
            "{:>3}. {}  {}",
            i + 1,
            name,
            compact_phone(&record.phone)
        ));
        if !record.financial_capacity.is_empty() {
            output.push_str(&format!("  [{}]", record.financial_capacity));
        }
        output.push('\n');

        if !record.request.is_empty() {
            output.push_str(&format!("     {}\n", record.request));
        }
        if schema == Schema::Extended {
            if !record.street().is_empty() {
                output.push_str(&format!("     Đường: {}\n", record.street()));
            }
            if !record.note().is_empty() {
                output.push_str(&format!("     Ghi chú: {}\n", record.note()));
            }
        }
    }

    if records.is_empty() {
        output.push_str("No matching records.\n");
    }

    if !diagnostics.is_empty() {
        output.push_str(&format!(
            "\n{} {} line(s) skipped:\n",
            style("!").yellow(),
            diagnostics.len()
        ));
        for diagnostic in diagnostics {
            output.push_str(&format!("  - line {}: {}\n", diagnostic.line, diagnostic.content));
        }
    }

    output
}
