use crate::error::{LoadError, Result};
use crate::source::RawTable;
use serde::Serialize;

/// The regional price summary, shown verbatim as a data table.
///
/// Cells keep the source text so numbers render exactly as published.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct SummaryTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SummaryTable {
    /// Take a raw table as-is, padding short rows to the header width.
    pub fn from_table(table: &RawTable) -> Result<Self> {
        if table.headers.is_empty() {
            return Err(LoadError::MissingHeader {
                table: table.name.clone(),
            });
        }
        let width = table.headers.len();
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|r| {
                let mut row = r.clone();
                row.resize(width, String::new());
                row
            })
            .collect();

        log::info!("loader: Loaded summary table with {} rows", rows.len());
        Ok(Self {
            columns: table.headers.clone(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_CSV: &str = include_str!("../../fixtures/table.csv");

    #[test]
    fn test_summary_table_is_verbatim() {
        let raw = RawTable::from_csv_str("summary table", TABLE_CSV).unwrap();
        let table = SummaryTable::from_table(&raw).unwrap();
        assert_eq!(
            table.columns,
            vec!["Region", "Regular", "Midgrade", "Premium", "Diesel"]
        );
        assert_eq!(table.rows.len(), 6);
        assert_eq!(table.rows[0], vec!["U.S.", "3.40", "3.85", "4.15", "3.62"]);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let raw = RawTable::from_csv_str("summary table", "a,b,c\n1,2\n").unwrap();
        let table = SummaryTable::from_table(&raw).unwrap();
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }
}
