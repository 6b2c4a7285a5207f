mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use grid_columns::{
    ColumnDefinition, CustomizableGrid, GridOptions, LocalStorage, PickerEvent, StorageConfig,
    Table, read_table_csv, visible_indexes,
};
use log::{debug, error, info, warn};
use std::{
    io::{self, Write},
    path::Path,
};

fn main() {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("Error: {e:#}");

        // Provide helpful hints for common errors
        use std::io::ErrorKind;
        for cause in e.chain().skip(1) {
            if let Some(ioe) = cause.downcast_ref::<io::Error>() {
                match ioe.kind() {
                    ErrorKind::PermissionDenied => {
                        error!("Hint: Set GRID_COLUMNS_STORAGE_DIR to a writable directory.");
                        break;
                    }
                    ErrorKind::NotFound => {
                        error!("Hint: Check the path of the CSV or config file.");
                        break;
                    }
                    _ => {}
                }
            }
        }
        let _ = io::stderr().flush();
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let storage = LocalStorage::from_config(&StorageConfig::from_env()?);
    execute(cli, storage, &mut io::stdout().lock())
}

/// Runs one command against `storage`, writing its output to `out`.
fn execute<W: Write>(cli: &Cli, storage: LocalStorage, out: &mut W) -> Result<()> {
    let options = cli.grid_options()?;
    debug!(
        "Preferences for '{}' in {}",
        options.resource_key,
        storage.path().display()
    );

    match &cli.command {
        Command::Reset => reset(&options, storage),
        Command::Columns { csv } => {
            let (_, mut grid) = open_grid(csv, options, storage)?;
            print_picker(&mut grid, out)
        }
        Command::Toggle { csv, columns } => {
            let (table, mut grid) = open_grid(csv, options, storage)?;
            for identifier in columns {
                if !table.headers().contains(identifier) {
                    warn!("'{identifier}' is not a column of {}", csv.display());
                }
                grid.handle(PickerEvent::Toggle(identifier.clone()));
            }
            print_picker(&mut grid, out)
        }
        Command::View { csv, limit } => {
            let (table, grid) = open_grid(csv, options, storage)?;
            let rendered = grid.render();
            let headers: Vec<&str> = rendered.columns.iter().map(|c| c.header()).collect();
            let indexes = visible_indexes(grid.columns(), grid.selection());
            render::write_view(out, &table, &headers, &indexes, *limit)
        }
    }
}

fn reset(options: &GridOptions, mut storage: LocalStorage) -> Result<()> {
    if storage.remove(&options.resource_key)? {
        info!("Forgot the columns stored for '{}'", options.resource_key);
    } else {
        info!("No columns stored for '{}'", options.resource_key);
    }
    Ok(())
}

/// Reads the table and builds a grid over its header.
fn open_grid(
    csv: &Path,
    options: GridOptions,
    storage: LocalStorage,
) -> Result<(Table, CustomizableGrid<LocalStorage>)> {
    let table =
        read_table_csv(csv).with_context(|| format!("Failed to read table {}", csv.display()))?;

    // The row number column has no identifier, so it is never hidden.
    let mut columns = vec![ColumnDefinition::structural(render::ROW_NUMBER_HEADER)];
    columns.extend(table.columns(&options.labels));

    let grid = CustomizableGrid::new(options, columns, storage)?;
    debug!("Initial columns from {:?}", grid.model().source());
    Ok((table, grid))
}

fn print_picker<W: Write>(grid: &mut CustomizableGrid<LocalStorage>, out: &mut W) -> Result<()> {
    grid.open_picker();
    {
        let rendered = grid.render();
        if let Some(view) = &rendered.picker {
            render::write_picker(out, &rendered.toolbar.label, view)?;
        }
    }
    grid.handle(PickerEvent::Close);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_columns::{PreferenceStore, SelectionMap};
    use std::fs;
    use tempfile::TempDir;

    struct Workspace {
        temp_dir: TempDir,
        csv: String,
    }

    impl Workspace {
        fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let csv = temp_dir.path().join("posts.csv");
            fs::write(&csv, "id,title,views\n1,Hello,10\n2,World,20\n").unwrap();
            let csv = csv.to_str().unwrap().to_string();
            Self { temp_dir, csv }
        }

        fn storage(&self) -> LocalStorage {
            LocalStorage::new(self.temp_dir.path().join("store"), "columns")
        }

        fn execute(&self, args: &[&str]) -> String {
            let args = std::iter::once("grid-columns").chain(args.iter().copied());
            let cli = Cli::try_parse_from(args).unwrap();
            let mut out = Vec::new();
            execute(&cli, self.storage(), &mut out).unwrap();
            String::from_utf8(out).unwrap()
        }

        fn stored(&self) -> Option<SelectionMap> {
            self.storage().get("posts").unwrap()
        }
    }

    #[test]
    fn test_columns_starts_with_all_visible() {
        let ws = Workspace::new();

        let text = ws.execute(&["columns", &ws.csv]);
        assert_eq!(text, "[columns]\n  [x] id\n  [x] title\n  [x] views\n");
        assert!(ws.stored().is_none());
    }

    #[test]
    fn test_toggle_twice_persists_each_step() {
        let ws = Workspace::new();

        let text = ws.execute(&["toggle", &ws.csv, "title"]);
        assert!(text.contains("  [ ] title"));
        let expected: SelectionMap = [("id", true), ("title", false), ("views", true)]
            .into_iter()
            .collect();
        assert_eq!(ws.stored(), Some(expected));

        let text = ws.execute(&["toggle", &ws.csv, "title"]);
        assert!(text.contains("  [x] title"));
        assert_eq!(ws.stored(), Some(SelectionMap::from_identifiers(["id", "title", "views"])));
    }

    #[test]
    fn test_view_drops_hidden_columns() {
        let ws = Workspace::new();
        ws.execute(&["toggle", &ws.csv, "title"]);

        let text = ws.execute(&["view", &ws.csv]);
        assert_eq!(text, "#,id,views\n1,1,10\n2,2,20\n");
    }

    #[test]
    fn test_reset_forgets_stored_columns() {
        let ws = Workspace::new();
        ws.execute(&["-d", "id", "toggle", &ws.csv, "views"]);
        assert_eq!(ws.stored(), Some(SelectionMap::from_identifiers(["id", "views"])));

        ws.execute(&["--resource", "posts", "reset"]);
        assert!(ws.stored().is_none());

        let text = ws.execute(&["-d", "id", "view", &ws.csv]);
        assert_eq!(text, "#,id\n1,1\n2,2\n");
    }
}
