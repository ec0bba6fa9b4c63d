//! Store command - inspect or clear the saved input text.

use clap::{Args, Subcommand};
use console::style;

use khach_core::store::TextStore;

use super::{SchemaArg, Settings};

/// Arguments for the store command.
#[derive(Args)]
pub struct StoreArgs {
    #[command(subcommand)]
    command: StoreCommand,

    /// Record schema whose text to manage
    #[arg(short, long, value_enum, global = true)]
    schema: Option<SchemaArg>,
}

#[derive(Subcommand)]
enum StoreCommand {
    /// Print the saved input text
    Show,

    /// Delete the saved input text
    Clear,

    /// Show the file backing the saved text
    Path,
}

pub fn run(args: StoreArgs, settings: &Settings) -> anyhow::Result<()> {
    let schema = settings.schema(args.schema);
    let mut store = settings.store()?;

    match args.command {
        StoreCommand::Show => match store.load(schema)? {
            Some(text) => print!("{}", text),
            None => eprintln!(
                "{} No saved {} input.",
                style("ℹ").blue(),
                schema
            ),
        },
        StoreCommand::Clear => {
            store.clear(schema)?;
            println!("{} Cleared saved {} input", style("✓").green(), schema);
        }
        StoreCommand::Path => {
            println!("{}", store.path(schema).display());
        }
    }

    Ok(())
}
