//! Config command - manage configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use khach_core::models::config::KhachConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "extraction.schema")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: ConfigArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => show_config(&config_path),
        ConfigCommand::Init(init_args) => init_config(init_args, config_path),
        ConfigCommand::Get { key } => get_config(&config_path, &key),
        ConfigCommand::Set { key, value } => set_config(&config_path, &key, &value),
        ConfigCommand::Path => show_path(&config_path),
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("khach")
        .join("config.json")
}

fn load_or_default(config_path: &Path) -> anyhow::Result<KhachConfig> {
    if config_path.exists() {
        Ok(KhachConfig::from_file(config_path)?)
    } else {
        Ok(KhachConfig::default())
    }
}

fn show_config(config_path: &Path) -> anyhow::Result<()> {
    if !config_path.exists() {
        eprintln!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }
    let config = load_or_default(config_path)?;

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs, config_path: PathBuf) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or(config_path);

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = KhachConfig::default();
    config.save(&output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

fn get_config(config_path: &Path, key: &str) -> anyhow::Result<()> {
    let tree = serde_json::to_value(load_or_default(config_path)?)?;
    let value = lookup(&tree, key)
        .ok_or_else(|| anyhow::anyhow!("Unknown setting '{}'", key))?;

    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

fn set_config(config_path: &Path, key: &str, raw: &str) -> anyhow::Result<()> {
    let mut tree = serde_json::to_value(load_or_default(config_path)?)?;
    let value = parse_setting(raw);
    assign(&mut tree, key, value.clone())?;

    // Round-trip through KhachConfig so a bad schema name is refused here
    let config: KhachConfig = serde_json::from_value(tree)
        .map_err(|e| anyhow::anyhow!("Invalid value for '{}': {}", key, e))?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(config_path)?;

    println!("{} {} = {}", style("✓").green(), key, value);

    Ok(())
}

/// JSON literals are taken as-is, anything else as a string.
fn parse_setting(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Follow a dotted key such as `export.file_prefix`.
fn lookup<'v>(tree: &'v Value, key: &str) -> Option<&'v Value> {
    key.split('.').try_fold(tree, |node, part| node.get(part))
}

/// Replace the value at a dotted key. Every section on the way must exist.
fn assign(tree: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let (section, field) = match key.rsplit_once('.') {
        Some((section, field)) => (Some(section), field),
        None => (None, key),
    };
    if field.is_empty() {
        anyhow::bail!("Empty setting name in '{}'", key);
    }

    let mut node = tree;
    for part in section.into_iter().flat_map(|s| s.split('.')) {
        node = node
            .get_mut(part)
            .ok_or_else(|| anyhow::anyhow!("Unknown section '{}' in '{}'", part, key))?;
    }

    let Some(fields) = node.as_object_mut() else {
        anyhow::bail!("'{}' is not a settings section", section.unwrap_or(key));
    };
    fields.insert(field.to_string(), value);

    Ok(())
}

fn show_path(config_path: &Path) -> anyhow::Result<()> {
    let status = if config_path.exists() {
        style("present").green()
    } else {
        style("missing, defaults in use").yellow()
    };
    println!("{} ({})", config_path.display(), status);

    if !config_path.exists() {
        println!("Create it with 'khach config init'.");
    }

    Ok(())
}
