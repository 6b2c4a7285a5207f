use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use grid_columns::GridOptions;
use std::path::{Path, PathBuf};

/// Show and toggle the visible columns of a CSV table.
///
/// The choice is saved per resource in the directory named by
/// GRID_COLUMNS_STORAGE_DIR (default `.grid_columns`).
#[derive(Parser, Debug)]
#[command(name = "grid-columns", version, about)]
pub struct Cli {
    /// TOML file with resource_key, default_columns, button_label and labels
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Resource the preference is stored under (defaults to the CSV file stem)
    #[arg(short, long)]
    pub resource: Option<String>,

    /// Columns shown when nothing is stored yet, comma separated
    #[arg(short = 'd', long, value_delimiter = ',')]
    pub default_columns: Vec<String>,

    /// Label of the picker button
    #[arg(long)]
    pub button_label: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the columns with their visibility
    Columns { csv: PathBuf },
    /// Flip the visibility of one or more columns
    Toggle {
        csv: PathBuf,
        #[arg(required = true)]
        columns: Vec<String>,
    },
    /// Print the table with only the visible columns
    View {
        csv: PathBuf,
        /// Print at most this many rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Forget the stored column choice
    Reset,
}

impl Command {
    pub fn csv(&self) -> Option<&Path> {
        match self {
            Command::Columns { csv } | Command::Toggle { csv, .. } | Command::View { csv, .. } => {
                Some(csv.as_path())
            }
            Command::Reset => None,
        }
    }
}

impl Cli {
    /// Options from the config file with command line flags layered on top
    pub fn grid_options(&self) -> Result<GridOptions> {
        let mut options = match &self.config {
            Some(path) => GridOptions::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => {
                let resource = self
                    .resource
                    .clone()
                    .or_else(|| self.command.csv().and_then(resource_from_path));
                match resource {
                    Some(resource) => GridOptions::new(resource),
                    None => bail!("No resource given; pass --resource or --config"),
                }
            }
        };

        if let Some(resource) = &self.resource {
            options.resource_key = resource.clone();
        }
        if !self.default_columns.is_empty() {
            options.default_columns = self.default_columns.clone();
        }
        if let Some(label) = &self.button_label {
            options.button_label = label.clone();
        }

        options.validate()?;
        Ok(options)
    }
}

fn resource_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.trim().is_empty())
}
