//! Year-indexed PADD region series (average price, crude oil production).

use crate::error::{LoadError, LookupError, Result};
use crate::source::RawTable;
use serde::Serialize;

/// A year-indexed table with one column per region.
///
/// The first source column is the year index; every other column is a
/// region. Blank cells are `None`.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct TimeSeriesTable {
    years: Vec<i32>,
    regions: Vec<String>,
    /// `columns[r][y]` is region `r` in year `years[y]`
    columns: Vec<Vec<Option<f64>>>,
}

impl TimeSeriesTable {
    pub fn from_table(table: &RawTable) -> Result<Self> {
        if table.headers.len() < 2 {
            return Err(LoadError::MissingColumn {
                table: table.name.clone(),
                column: "<region>".to_string(),
            });
        }
        let regions: Vec<String> = table.headers[1..].to_vec();
        let mut years = Vec::with_capacity(table.rows.len());
        let mut columns = vec![Vec::with_capacity(table.rows.len()); regions.len()];

        for i in 0..table.rows.len() {
            years.push(parse_year(table, i)?);
            for (r, column) in columns.iter_mut().enumerate() {
                column.push(table.parse_optional_f64(i, r + 1)?);
            }
        }

        if years.is_empty() {
            return Err(LoadError::EmptyTable {
                table: table.name.clone(),
            });
        }

        log::info!(
            "loader: Loaded {} ({} years x {} regions)",
            table.name,
            years.len(),
            regions.len()
        );
        Ok(Self {
            years,
            regions,
            columns,
        })
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Region names in column order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// The series for one region, aligned with [`years`](Self::years).
    pub fn column(&self, region: &str) -> std::result::Result<&[Option<f64>], LookupError> {
        self.regions
            .iter()
            .position(|r| r == region)
            .map(|idx| self.columns[idx].as_slice())
            .ok_or_else(|| LookupError::UnknownRegion(region.to_string()))
    }
}

/// Year cells come out of spreadsheets as `2019` or `2019.0`.
fn parse_year(table: &RawTable, row: usize) -> Result<i32> {
    let raw = table.cell(row, 0);
    let trimmed = raw.trim();
    // Workbooks store years as floats
    let whole = match trimmed.split_once('.') {
        Some((whole, frac)) if frac.chars().all(|c| c == '0') => whole,
        Some(_) => return Err(table.invalid(row, 0, raw)),
        None => trimmed,
    };
    whole.parse::<i32>().map_err(|_| table.invalid(row, 0, raw))
}

/// The price and production tables, which share one set of regions.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct PaddSeries {
    pub price: TimeSeriesTable,
    pub production: TimeSeriesTable,
}

impl PaddSeries {
    /// Pair the two tables, checking they cover the same regions.
    ///
    /// Column order may differ; the set must not.
    pub fn new(price: TimeSeriesTable, production: TimeSeriesTable) -> Result<Self> {
        let missing_in_production: Vec<&str> = price
            .regions
            .iter()
            .filter(|r| !production.regions.contains(*r))
            .map(String::as_str)
            .collect();
        let missing_in_price: Vec<&str> = production
            .regions
            .iter()
            .filter(|r| !price.regions.contains(*r))
            .map(String::as_str)
            .collect();

        if !missing_in_production.is_empty() || !missing_in_price.is_empty() {
            return Err(LoadError::RegionMismatch(format!(
                "missing from production: [{}]; missing from price: [{}]",
                missing_in_production.join(", "),
                missing_in_price.join(", ")
            )));
        }
        Ok(Self { price, production })
    }

    /// Region names in price-table column order (the region dropdown's order).
    pub fn regions(&self) -> &[String] {
        self.price.regions()
    }

    pub fn contains_region(&self, region: &str) -> bool {
        self.price.regions.iter().any(|r| r == region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE_CSV: &str = include_str!("../../fixtures/padd_price_by_year.csv");
    const PRODUCTION_CSV: &str = include_str!("../../fixtures/padd_net_production.csv");

    fn table(name: &str, csv: &str) -> TimeSeriesTable {
        TimeSeriesTable::from_table(&RawTable::from_csv_str(name, csv).unwrap()).unwrap()
    }

    #[test]
    fn test_parse_time_series() {
        let price = table("padd price", PRICE_CSV);
        assert_eq!(price.years(), &[2016, 2017, 2018, 2019, 2020]);
        assert_eq!(
            price.regions(),
            &["East Coast", "Midwest", "Gulf Coast", "Rocky Mountain", "West Coast"]
        );
        let east = price.column("East Coast").unwrap();
        assert_eq!(east.len(), 5);
        assert_eq!(east[0], Some(2.25));
        assert_eq!(east[4], Some(2.19));
    }

    #[test]
    fn test_blank_cells_are_none() {
        let production = table("padd production", PRODUCTION_CSV);
        let east = production.column("East Coast").unwrap();
        assert_eq!(east[4], None);
        assert_eq!(east[0], Some(15.0));
    }

    #[test]
    fn test_unknown_region_is_lookup_error() {
        let price = table("padd price", PRICE_CSV);
        assert_eq!(
            price.column("Atlantis"),
            Err(LookupError::UnknownRegion("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_spreadsheet_years() {
        let t = table("t", "Year,East Coast\n2019.0,2.63\n2020.00,2.19\n2021.,3.01\n");
        assert_eq!(t.years(), &[2019, 2020, 2021]);
    }

    #[test]
    fn test_fractional_year_is_rejected() {
        let raw = RawTable::from_csv_str("t", "Year,East Coast\n2019.5,2.63\n").unwrap();
        assert!(matches!(
            TimeSeriesTable::from_table(&raw),
            Err(LoadError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_infinite_value_is_rejected() {
        let raw = RawTable::from_csv_str("t", "Year,East Coast\n2019,inf\n").unwrap();
        assert!(matches!(
            TimeSeriesTable::from_table(&raw),
            Err(LoadError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_bad_year_is_rejected() {
        let raw = RawTable::from_csv_str("t", "Year,East Coast\nnineteen,2.63\n").unwrap();
        assert!(matches!(
            TimeSeriesTable::from_table(&raw),
            Err(LoadError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_padd_series_shares_regions() {
        let series = PaddSeries::new(
            table("padd price", PRICE_CSV),
            table("padd production", PRODUCTION_CSV),
        )
        .unwrap();
        assert!(series.contains_region("Gulf Coast"));
        assert!(!series.contains_region("Atlantis"));
        assert_eq!(series.regions().len(), 5);
    }

    #[test]
    fn test_region_mismatch_is_rejected() {
        let price = table("padd price", "Year,East Coast,Midwest\n2019,2.6,2.5\n");
        let production = table("padd production", "Year,East Coast,Gulf Coast\n2019,17,9020\n");
        match PaddSeries::new(price, production) {
            Err(LoadError::RegionMismatch(msg)) => {
                assert!(msg.contains("Midwest"));
                assert!(msg.contains("Gulf Coast"));
            }
            other => panic!("expected RegionMismatch, got {:?}", other),
        }
    }
}
