//! Subcommands and the input handling they share.

pub mod config;
pub mod export;
pub mod parse;
pub mod sheet;
pub mod store;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{debug, info};

use khach_core::listing::{ListingParser, ParseOutcome, RuleListingParser};
use khach_core::models::config::KhachConfig;
use khach_core::models::record::Schema;
use khach_core::store::{FileStore, TextStore};

/// Loaded configuration plus command-line overrides.
pub struct Settings {
    pub config: KhachConfig,
}

impl Settings {
    /// Load the config file (explicit path, else the default one if present).
    pub fn load(config_path: Option<&Path>, data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_path {
            Some(path) => KhachConfig::from_file(path)?,
            None => {
                let default_path = config::default_config_path();
                if default_path.exists() {
                    KhachConfig::from_file(&default_path)?
                } else {
                    KhachConfig::default()
                }
            }
        };

        if data_dir.is_some() {
            config.store.data_dir = data_dir;
        }

        Ok(Self { config })
    }

    pub fn schema(&self, requested: Option<SchemaArg>) -> Schema {
        requested.map_or(self.config.extraction.schema, Schema::from)
    }

    pub fn store(&self) -> anyhow::Result<FileStore> {
        Ok(FileStore::from_dir(self.config.data_dir())?)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SchemaArg {
    /// name phone capacity request
    Base,
    /// name phone capacity request | street | note
    Extended,
}

impl From<SchemaArg> for Schema {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Base => Schema::Base,
            SchemaArg::Extended => Schema::Extended,
        }
    }
}

/// Where the listing text comes from and how to read it.
#[derive(Args)]
pub struct InputArgs {
    /// Input text file, one listing per line (default: stdin)
    input: Option<PathBuf>,

    /// Use the saved input text instead of reading a file
    #[arg(long, conflicts_with_all = ["input", "save"])]
    stored: bool,

    /// Record schema
    #[arg(short, long, value_enum)]
    schema: Option<SchemaArg>,

    /// Only keep records containing this text (case-insensitive)
    #[arg(long)]
    search: Option<String>,

    /// Save the input text for later `--stored` runs
    #[arg(long)]
    save: bool,
}

/// Records and diagnostics for one invocation.
pub struct Loaded {
    pub schema: Schema,
    pub outcome: ParseOutcome,
}

impl InputArgs {
    /// Read the text, persist it if asked, parse and filter.
    pub fn load(&self, settings: &Settings) -> anyhow::Result<Loaded> {
        let schema = settings.schema(self.schema);

        let text = if self.stored {
            let store = settings.store()?;
            match store.load(schema)? {
                Some(text) => text,
                None => anyhow::bail!(
                    "No saved {} input found in {}",
                    schema,
                    store.dir().display()
                ),
            }
        } else {
            self.read_input()?
        };

        if self.save {
            settings.store()?.save(schema, &text)?;
            info!("Saved {} input text", schema);
        }

        let parser = RuleListingParser::new().with_schema(schema);
        let mut outcome = parser.parse(&text);

        if let Some(query) = &self.search {
            outcome.records = outcome.records.filtered(query);
            debug!("{} records match {:?}", outcome.records.len(), query);
        }

        Ok(Loaded { schema, outcome })
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                if !path.exists() {
                    anyhow::bail!("Input file not found: {}", path.display());
                }
                Ok(fs::read_to_string(path)?)
            }
            _ => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}
