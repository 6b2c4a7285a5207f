use crate::{
    column::ColumnDefinition,
    error::{GridColumnsError, Result},
};
use csv::{ReaderBuilder, Trim};
use std::{collections::BTreeMap, io::Read, path::Path};

/// A CSV file held in memory. Each header names one toggleable column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Column definitions for the headers, labelled from `labels` when present
    pub fn columns(&self, labels: &BTreeMap<String, String>) -> Vec<ColumnDefinition> {
        self.headers
            .iter()
            .map(|header| {
                let column = ColumnDefinition::field(header.as_str());
                match labels.get(header) {
                    Some(label) => column.with_label(label.as_str()),
                    None => column,
                }
            })
            .collect()
    }

    /// Cell at `index` of `row`; short rows read as empty
    pub fn cell(&self, row: usize, index: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(index))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

pub fn read_table_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| GridColumnsError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_table(file)
}

/// Reads a CSV with a header row. Rows may have fewer or more fields than
/// the header; extra fields are dropped.
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| GridColumnsError::CsvHeader(format!("Failed to read headers: {}", e)))?
        .iter()
        .map(str::to_owned)
        .collect();

    if let Some(position) = headers.iter().position(|h| h.is_empty()) {
        return Err(GridColumnsError::CsvHeader(format!(
            "Empty header at column {}",
            position + 1
        )));
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(
            record
                .iter()
                .take(headers.len())
                .map(str::to_owned)
                .collect(),
        );
    }

    Ok(Table { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_table_basic() {
        let data = "id,title,views\n1,Hello,10\n2,World,20\n";
        let table = read_table(data.as_bytes()).unwrap();

        assert_eq!(table.headers(), &["id", "title", "views"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.cell(1, 1), "World");
    }

    #[test]
    fn test_read_table_ragged_rows() {
        let data = "a,b\n1\n2,3,4\n";
        let table = read_table(data.as_bytes()).unwrap();

        assert_eq!(table.cell(0, 1), "");
        assert_eq!(table.rows()[1], vec!["2", "3"]);
    }

    #[test]
    fn test_read_table_skips_blank_rows() {
        let data = "a,b\n1,2\n , \n3,4\n";
        let table = read_table(data.as_bytes()).unwrap();
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn test_read_table_rejects_empty_header() {
        let data = "a,,c\n1,2,3\n";
        let result = read_table(data.as_bytes());
        assert!(matches!(result, Err(GridColumnsError::CsvHeader(_))));
    }

    #[test]
    fn test_columns_use_labels() {
        let table = read_table("id,title\n".as_bytes()).unwrap();
        let labels = BTreeMap::from([("title".to_string(), "Title".to_string())]);

        let columns = table.columns(&labels);
        assert_eq!(columns[0], ColumnDefinition::field("id"));
        assert_eq!(columns[1], ColumnDefinition::field("title").with_label("Title"));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_table_csv("nonexistent_table.csv");
        assert!(matches!(result, Err(GridColumnsError::ReadFile { .. })));
    }
}
