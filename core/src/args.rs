use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use dataset::ImportConfig;

#[derive(Parser, Debug)]
#[command(name = "batchcsv")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// CSV files to import.
    #[arg(required_unless_present = "list_options")]
    pub files: Vec<PathBuf>,

    /// Column delimiter, or 'whitespace' for runs of spaces and tabs.
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Character starting a comment.
    #[arg(short, long)]
    pub comment: Option<String>,

    /// Label column: none, first or last.
    #[arg(long)]
    pub labels: Option<String>,

    /// Number of regression target columns (requires --labels).
    #[arg(long)]
    pub outputs: Option<String>,

    /// Maximum number of rows per batch.
    #[arg(short, long)]
    pub batch_size: Option<String>,

    /// Set an import option by name. May be repeated.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub options: Vec<String>,

    /// Print the available import options and exit.
    #[arg(long)]
    pub list_options: bool,

    /// Log debug output to the terminal.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write debug logs to a file instead of the terminal.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Builds the import configuration. `--set` options are applied last.
    pub fn config(&self) -> Result<ImportConfig, Box<dyn Error>> {
        let mut config = ImportConfig::default();

        let flags = [
            ("separator", &self.separator),
            ("comment", &self.comment),
            ("labels", &self.labels),
            ("outputs", &self.outputs),
            ("batch-size", &self.batch_size),
        ];

        for (name, value) in flags {
            if let Some(value) = value {
                config.set_option(name, value)?;
            }
        }

        for option in &self.options {
            let (name, value) = option
                .split_once('=')
                .ok_or_else(|| format!("Expected NAME=VALUE, got '{}'", option))?;
            config.set_option(name.trim(), value.trim())?;
        }

        Ok(config)
    }
}
