//! Raw tabular sources.
//!
//! Every dataset is first read into a [`RawTable`]: a header row plus rows of
//! trimmed string cells. The typed loaders in the sibling modules then look up
//! their expected columns by name and parse cells, so CSV, gzipped CSV and
//! workbook sources all go through the same validation.
//!
//! # Formats
//!
//! - `.csv`: read with the `csv` crate
//! - `.csv.gz` / `.gz`: decompressed with `flate2`, then read as CSV
//! - `.xlsx`, `.xlsm`, `.xls`, `.ods`: read with `calamine` (feature `xlsx`)

use crate::error::{LoadError, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// A header row plus string cells, as read from a dataset file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Human readable table name used in error messages.
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Parse CSV text with a header row.
    pub fn from_csv_str(name: &str, csv_data: &str) -> Result<Self> {
        Self::from_csv_reader(name, csv_data.as_bytes())
    }

    /// Parse CSV from any reader. Rows may be ragged; missing trailing cells
    /// read as empty strings.
    pub fn from_csv_reader<R: Read>(name: &str, reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(LoadError::MissingHeader {
                table: name.to_string(),
            });
        }

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            // Blank lines in exported sheets
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            rows.push(record.iter().map(|c| c.trim().to_string()).collect());
        }

        Ok(Self {
            name: name.to_string(),
            headers,
            rows,
        })
    }

    /// Read a table from disk, picking the reader from the file extension.
    ///
    /// `sheet` selects a worksheet for workbook sources and is ignored for CSV.
    /// Workbooks without an explicit sheet use their first sheet.
    pub fn from_path(name: &str, path: &Path, sheet: Option<&str>) -> Result<Self> {
        if !path.exists() {
            return Err(LoadError::MissingFile(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => {
                let file = open(path)?;
                Self::from_csv_reader(name, BufReader::new(file))
            }
            "gz" => {
                let file = open(path)?;
                Self::from_csv_reader(name, GzDecoder::new(BufReader::new(file)))
            }
            #[cfg(feature = "xlsx")]
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => workbook::read(name, path, sheet),
            _ => {
                let _ = sheet;
                Err(LoadError::UnsupportedFormat(path.to_path_buf()))
            }
        }
    }

    /// Index of a required column.
    pub fn column(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| LoadError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Index of a column that may be absent.
    pub fn optional_column(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Cell text, empty when the row is shorter than the header.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Parse a cell, mapping failure to [`LoadError::InvalidValue`].
    ///
    /// `row` is reported 1-based and counts data rows only.
    pub fn parse_cell<T: FromStr>(&self, row: usize, col: usize) -> Result<T> {
        let value = self.cell(row, col);
        value.parse::<T>().map_err(|_| self.invalid(row, col, value))
    }

    /// Parse a required numeric cell. `NaN` and infinities are rejected.
    pub fn parse_f64(&self, row: usize, col: usize) -> Result<f64> {
        let value: f64 = self.parse_cell(row, col)?;
        if !value.is_finite() {
            return Err(self.invalid(row, col, self.cell(row, col)));
        }
        Ok(value)
    }

    /// Parse a numeric cell that may be blank. Blank and `nan` cells are
    /// `None`; infinities are rejected.
    pub fn parse_optional_f64(&self, row: usize, col: usize) -> Result<Option<f64>> {
        match self.parse_optional_cell::<f64>(row, col)? {
            Some(value) if !value.is_finite() => Err(self.invalid(row, col, self.cell(row, col))),
            value => Ok(value),
        }
    }

    /// Parse a cell that may be blank.
    pub fn parse_optional_cell<T: FromStr>(&self, row: usize, col: usize) -> Result<Option<T>> {
        let value = self.cell(row, col);
        if value.is_empty() || value.eq_ignore_ascii_case("nan") {
            return Ok(None);
        }
        value
            .parse::<T>()
            .map(Some)
            .map_err(|_| self.invalid(row, col, value))
    }

    /// Build an [`LoadError::InvalidValue`] for the given cell.
    pub fn invalid(&self, row: usize, col: usize, value: &str) -> LoadError {
        LoadError::InvalidValue {
            table: self.name.clone(),
            column: self.headers.get(col).cloned().unwrap_or_default(),
            row: row + 1,
            value: value.to_string(),
        }
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(feature = "xlsx")]
mod workbook {
    use super::RawTable;
    use crate::error::{LoadError, Result};
    use calamine::{open_workbook_auto, Data, Reader};
    use std::path::Path;

    pub(super) fn read(name: &str, path: &Path, sheet: Option<&str>) -> Result<RawTable> {
        let mut workbook = open_workbook_auto(path)?;

        let sheet_name = match sheet {
            Some(s) => s.to_string(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| LoadError::MissingSheet {
                    path: path.to_path_buf(),
                    sheet: "<first>".to_string(),
                })?,
        };
        if !workbook.sheet_names().iter().any(|s| *s == sheet_name) {
            return Err(LoadError::MissingSheet {
                path: path.to_path_buf(),
                sheet: sheet_name,
            });
        }

        let range = workbook.worksheet_range(&sheet_name)?;
        let mut rows = range.rows();

        let headers: Vec<String> = match rows.next() {
            Some(header) => header.iter().map(cell_text).collect(),
            None => {
                return Err(LoadError::MissingHeader {
                    table: name.to_string(),
                })
            }
        };

        let rows = rows
            .map(|r| r.iter().map(cell_text).collect::<Vec<String>>())
            .filter(|r| r.iter().any(|c| !c.is_empty()))
            .collect();

        log::debug!("workbook {}: read sheet '{}'", path.display(), sheet_name);
        Ok(RawTable {
            name: name.to_string(),
            headers,
            rows,
        })
    }

    /// Render a workbook cell the way a CSV export would.
    ///
    /// Whole floats print without a fractional part (`1001.0` -> `1001`), so
    /// integer codes survive the round trip through Excel.
    fn cell_text(cell: &Data) -> String {
        match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.trim().to_string(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => f.to_string(),
            Data::Bool(b) => b.to_string(),
            other => other.to_string().trim().to_string(),
        }
    }
}
