//! The full set of dashboard datasets and where to find them.

use crate::box_plot::BoxSamples;
use crate::county::CountyPrices;
use crate::error::{LoadError, Result};
use crate::scatter::{parse_scatter_records, ScatterRecord};
use crate::source::RawTable;
use crate::summary::SummaryTable;
use crate::time_series::{PaddSeries, TimeSeriesTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Locations of the six dataset files.
///
/// Relative paths are resolved against `data_dir`. Every field has a default
/// matching the published file names, so a config file only needs to list
/// what differs.
///
/// # Example JSON
/// ```text
/// {
///   "data_dir": "data",
///   "scatter": "Final_Scatter.csv"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub data_dir: PathBuf,
    pub county_prices: PathBuf,
    pub summary_table: PathBuf,
    pub scatter: PathBuf,
    /// Worksheet holding the scatter table (workbooks only)
    pub scatter_sheet: Option<String>,
    pub box_plot: PathBuf,
    /// Worksheet holding the nine-state samples (workbooks only)
    pub box_plot_sheet: Option<String>,
    pub padd_price: PathBuf,
    pub padd_production: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            county_prices: PathBuf::from("county_price.csv"),
            summary_table: PathBuf::from("table.csv"),
            scatter: PathBuf::from("Final_Scatter.xlsx"),
            scatter_sheet: None,
            box_plot: PathBuf::from("state_price_box.xlsx"),
            box_plot_sheet: Some("9state".to_string()),
            padd_price: PathBuf::from("padd_price_by_year.csv"),
            padd_production: PathBuf::from("padd_net_production.csv"),
        }
    }
}

impl DatasetConfig {
    /// Defaults rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Parse a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file. A relative `data_dir` inside the file is
    /// taken relative to the file's own directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LoadError::MissingFile(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json(&text)?;
        if config.data_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.data_dir = parent.join(&config.data_dir);
            }
        }
        Ok(config)
    }

    /// Resolve a dataset path against `data_dir`.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}

/// Every table the dashboard reads, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub county_prices: CountyPrices,
    pub summary_table: SummaryTable,
    pub scatter: Vec<ScatterRecord>,
    pub box_samples: BoxSamples,
    pub padd: PaddSeries,
}

impl Datasets {
    /// Load all six files. The first failure aborts the load.
    pub fn load(config: &DatasetConfig) -> Result<Self> {
        log::info!("loader: Loading datasets from {}", config.data_dir.display());

        let county = read(config, "county prices", &config.county_prices, None)?;
        let summary = read(config, "summary table", &config.summary_table, None)?;
        let scatter = read(
            config,
            "scatter features",
            &config.scatter,
            config.scatter_sheet.as_deref(),
        )?;
        let box_plot = read(
            config,
            "box plot",
            &config.box_plot,
            config.box_plot_sheet.as_deref(),
        )?;
        let price = read(config, "padd price", &config.padd_price, None)?;
        let production = read(config, "padd production", &config.padd_production, None)?;

        Self::from_tables(&county, &summary, &scatter, &box_plot, &price, &production)
    }

    /// Build the datasets from already-read raw tables.
    pub fn from_tables(
        county: &RawTable,
        summary: &RawTable,
        scatter: &RawTable,
        box_plot: &RawTable,
        price: &RawTable,
        production: &RawTable,
    ) -> Result<Self> {
        Ok(Self {
            county_prices: CountyPrices::from_table(county)?,
            summary_table: SummaryTable::from_table(summary)?,
            scatter: parse_scatter_records(scatter)?,
            box_samples: BoxSamples::from_table(box_plot)?,
            padd: PaddSeries::new(
                TimeSeriesTable::from_table(price)?,
                TimeSeriesTable::from_table(production)?,
            )?,
        })
    }

    /// Build the datasets from in-memory CSV text, in the same order as
    /// [`from_tables`](Self::from_tables).
    pub fn from_csv_strs(
        county: &str,
        summary: &str,
        scatter: &str,
        box_plot: &str,
        price: &str,
        production: &str,
    ) -> Result<Self> {
        Self::from_tables(
            &RawTable::from_csv_str("county prices", county)?,
            &RawTable::from_csv_str("summary table", summary)?,
            &RawTable::from_csv_str("scatter features", scatter)?,
            &RawTable::from_csv_str("box plot", box_plot)?,
            &RawTable::from_csv_str("padd price", price)?,
            &RawTable::from_csv_str("padd production", production)?,
        )
    }
}

fn read(config: &DatasetConfig, name: &str, path: &Path, sheet: Option<&str>) -> Result<RawTable> {
    let path = config.resolve(path);
    log::debug!("loader: Reading {} from {}", name, path.display());
    RawTable::from_path(name, &path, sheet)
}
