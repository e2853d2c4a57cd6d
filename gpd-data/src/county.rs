use crate::error::{LoadError, Result};
use crate::source::RawTable;
use serde::{Deserialize, Serialize};

/// Width of a county FIPS code.
pub const FIPS_WIDTH: usize = 5;

/// Today's average gas price in one county.
///
/// `fips` is the county's 5-digit FIPS code and joins against the county
/// boundary GeoJSON document.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CountyPrice {
    pub fips: String,
    /// Two-letter state abbreviation
    pub state: String,
    pub county: String,
    /// Dollars per gallon
    pub price: f64,
}

/// Left-pad a FIPS code with zeros to five digits.
///
/// Accepts the forms spreadsheets tend to produce (`1001`, `01001`,
/// `1001.0`). Returns `None` for anything that is not a non-negative integer
/// of at most five digits.
pub fn pad_fips(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let digits = match raw.split_once('.') {
        Some((whole, frac)) if !frac.is_empty() && frac.chars().all(|c| c == '0') => whole,
        Some(_) => return None,
        None => raw,
    };
    if digits.is_empty() || digits.len() > FIPS_WIDTH || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("{:0>width$}", digits, width = FIPS_WIDTH))
}

/// The county price table, in file order.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct CountyPrices {
    rows: Vec<CountyPrice>,
}

impl CountyPrices {
    pub fn new(rows: Vec<CountyPrice>) -> Self {
        Self { rows }
    }

    /// Parse county prices from a raw table.
    ///
    /// Expected columns: `FIPS,state,county,price`. Extra columns are ignored.
    ///
    /// # Example CSV
    /// ```text
    /// FIPS,state,county,price
    /// 1001,AL,Autauga,3.05
    /// ```
    pub fn from_table(table: &RawTable) -> Result<Self> {
        let fips_col = table.column("FIPS")?;
        let state_col = table.column("state")?;
        let county_col = table.column("county")?;
        let price_col = table.column("price")?;

        let mut rows = Vec::with_capacity(table.rows.len());
        for i in 0..table.rows.len() {
            let raw_fips = table.cell(i, fips_col);
            let fips = pad_fips(raw_fips).ok_or_else(|| table.invalid(i, fips_col, raw_fips))?;
            let state = table.cell(i, state_col);
            if state.is_empty() {
                return Err(table.invalid(i, state_col, state));
            }
            rows.push(CountyPrice {
                fips,
                state: state.to_string(),
                county: table.cell(i, county_col).to_string(),
                price: table.parse_f64(i, price_col)?,
            });
        }

        if rows.is_empty() {
            return Err(LoadError::EmptyTable {
                table: table.name.clone(),
            });
        }

        log::info!("loader: Loaded {} county prices", rows.len());
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[CountyPrice] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lowest and highest price across every county.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.rows.iter().map(|r| r.price).fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
    }

    /// Distinct states in order of first appearance.
    pub fn states(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for row in &self.rows {
            if !seen.iter().any(|s| *s == row.state) {
                seen.push(row.state.clone());
            }
        }
        seen
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.rows.iter().any(|r| r.state == state)
    }

    /// Counties belonging to `state`.
    pub fn for_state<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a CountyPrice> + 'a {
        self.rows.iter().filter(move |r| r.state == state)
    }
}
