//! State-level features plotted against the average retail gas price.
//!
//! The scatter table is wide: one row per state, one column per predictor.
//! [`Predictor`] names the seven columns the dashboard lets the user put on
//! the x axis, together with the labels shown for each.

use crate::error::{LoadError, LookupError, Result};
use crate::source::RawTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A column that can be plotted against gas price.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Predictor {
    #[default]
    #[serde(rename = "Gas_Tax")]
    GasTax,
    #[serde(rename = "Median_Income")]
    MedianIncome,
    #[serde(rename = "Auto")]
    Auto,
    #[serde(rename = "Sales_Tax")]
    SalesTax,
    #[serde(rename = "Population")]
    Population,
    #[serde(rename = "Oil_Production")]
    OilProduction,
    #[serde(rename = "Gas_Sales")]
    GasSales,
}

impl Predictor {
    /// Dropdown order.
    pub const ALL: [Predictor; 7] = [
        Predictor::GasTax,
        Predictor::MedianIncome,
        Predictor::Auto,
        Predictor::SalesTax,
        Predictor::Population,
        Predictor::OilProduction,
        Predictor::GasSales,
    ];

    /// Column name in the scatter table, also the control value.
    pub fn key(&self) -> &'static str {
        match self {
            Predictor::GasTax => "Gas_Tax",
            Predictor::MedianIncome => "Median_Income",
            Predictor::Auto => "Auto",
            Predictor::SalesTax => "Sales_Tax",
            Predictor::Population => "Population",
            Predictor::OilProduction => "Oil_Production",
            Predictor::GasSales => "Gas_Sales",
        }
    }

    /// Label shown in the predictor dropdown.
    pub fn option_label(&self) -> &'static str {
        match self {
            Predictor::GasTax => "Gas Tax",
            Predictor::MedianIncome => "Median Income",
            Predictor::Auto => "Vehicle Registration Number",
            Predictor::SalesTax => "Sales Tax",
            Predictor::Population => "Population",
            Predictor::OilProduction => "Oil_Production",
            Predictor::GasSales => "Gas Sales",
        }
    }

    /// X axis label, with units.
    pub fn axis_label(&self) -> &'static str {
        match self {
            Predictor::GasTax => "Gas Tax ($/ gallon)",
            Predictor::MedianIncome => "Median Income ($)",
            Predictor::Auto => "# of Registered Vehicle",
            Predictor::SalesTax => "Sales Tax (%/$)",
            Predictor::Population => "Population",
            Predictor::OilProduction => "Crude Oil Production (Thousand Barrels)",
            Predictor::GasSales => {
                "Total Gasoline All Sales/Deliveries by Prime Supplier (Thousand Gallons per Day)"
            }
        }
    }

    /// Name interpolated into the scatter title.
    pub fn title_label(&self) -> &'static str {
        match self {
            Predictor::GasTax => "Gas Tax",
            Predictor::MedianIncome => "Median Income",
            Predictor::Auto => "Number of Registered Vehicle",
            Predictor::SalesTax => "Sales Tax",
            Predictor::Population => "Population",
            Predictor::OilProduction => "Crude Oil Production",
            Predictor::GasSales => "Gasoline Sales",
        }
    }
}

impl fmt::Display for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Predictor {
    type Err = LookupError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Predictor::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| LookupError::UnknownPredictor(s.to_string()))
    }
}

/// Party affiliation of a state's governor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    Democrat,
    Republican,
}

impl Party {
    pub fn name(&self) -> &'static str {
        match self {
            Party::Democrat => "Democrat",
            Party::Republican => "Republican",
        }
    }

    /// Fixed marker color for the party grouping.
    pub fn color(&self) -> &'static str {
        match self {
            Party::Democrat => "blue",
            Party::Republican => "red",
        }
    }

    /// Parse a party cell. The source sheets spell Republican two ways.
    pub fn parse(s: &str) -> Option<Party> {
        match s {
            "Democrat" | "Democratic" => Some(Party::Democrat),
            "Republican" | "Republic" => Some(Party::Republican),
            _ => None,
        }
    }
}

/// One state's row in the scatter table.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ScatterRecord {
    /// Full state name
    pub state: String,
    /// Two-letter abbreviation, used as the point label
    pub abbreviation: String,
    /// Average retail gas price, dollars per gallon
    pub gas_price: f64,
    pub gas_tax: f64,
    pub median_income: f64,
    pub auto: f64,
    pub sales_tax: f64,
    pub population: f64,
    pub oil_production: f64,
    pub gas_sales: f64,
    pub party: Option<Party>,
}

impl ScatterRecord {
    /// Value of the given predictor column.
    pub fn value(&self, predictor: Predictor) -> f64 {
        match predictor {
            Predictor::GasTax => self.gas_tax,
            Predictor::MedianIncome => self.median_income,
            Predictor::Auto => self.auto,
            Predictor::SalesTax => self.sales_tax,
            Predictor::Population => self.population,
            Predictor::OilProduction => self.oil_production,
            Predictor::GasSales => self.gas_sales,
        }
    }
}

/// Parse scatter records from a raw table.
///
/// Expected columns: `State,ST,Gas_Price` plus every predictor key. `Party`
/// is optional; when the column is missing no record has a party.
pub fn parse_scatter_records(table: &RawTable) -> Result<Vec<ScatterRecord>> {
    let state_col = table.column("State")?;
    let abbr_col = table.column("ST")?;
    let price_col = table.column("Gas_Price")?;
    let mut predictor_cols = [0usize; 7];
    for (slot, predictor) in predictor_cols.iter_mut().zip(Predictor::ALL) {
        *slot = table.column(predictor.key())?;
    }
    let party_col = table.optional_column("Party");
    if party_col.is_none() {
        log::warn!("loader: {} has no Party column", table.name);
    }

    let mut records = Vec::with_capacity(table.rows.len());
    for i in 0..table.rows.len() {
        let mut values = [0f64; 7];
        for (value, col) in values.iter_mut().zip(predictor_cols) {
            *value = table.parse_f64(i, col)?;
        }
        let party = match party_col {
            Some(col) => {
                let raw = table.cell(i, col);
                if raw.is_empty() {
                    None
                } else {
                    Some(Party::parse(raw).ok_or_else(|| table.invalid(i, col, raw))?)
                }
            }
            None => None,
        };
        let [gas_tax, median_income, auto, sales_tax, population, oil_production, gas_sales] =
            values;
        records.push(ScatterRecord {
            state: table.cell(i, state_col).to_string(),
            abbreviation: table.cell(i, abbr_col).to_string(),
            gas_price: table.parse_f64(i, price_col)?,
            gas_tax,
            median_income,
            auto,
            sales_tax,
            population,
            oil_production,
            gas_sales,
            party,
        });
    }

    if records.is_empty() {
        return Err(LoadError::EmptyTable {
            table: table.name.clone(),
        });
    }

    log::info!("loader: Loaded {} scatter records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCATTER_CSV: &str = include_str!("../../fixtures/final_scatter.csv");

    fn fixture() -> Vec<ScatterRecord> {
        let table = RawTable::from_csv_str("scatter features", SCATTER_CSV).unwrap();
        parse_scatter_records(&table).unwrap()
    }

    #[test]
    fn test_predictor_keys_round_trip() {
        for predictor in Predictor::ALL {
            assert_eq!(predictor.key().parse::<Predictor>().unwrap(), predictor);
        }
        assert_eq!(
            "Gas Tax".parse::<Predictor>(),
            Err(LookupError::UnknownPredictor("Gas Tax".to_string()))
        );
    }

    #[test]
    fn test_predictor_default_is_gas_tax() {
        assert_eq!(Predictor::default(), Predictor::GasTax);
    }

    #[test]
    fn test_predictor_labels() {
        assert_eq!(Predictor::Auto.axis_label(), "# of Registered Vehicle");
        assert_eq!(Predictor::Auto.title_label(), "Number of Registered Vehicle");
        assert_eq!(Predictor::Auto.option_label(), "Vehicle Registration Number");
        assert_eq!(Predictor::GasSales.title_label(), "Gasoline Sales");
    }

    #[test]
    fn test_party_parse() {
        assert_eq!(Party::parse("Democrat"), Some(Party::Democrat));
        assert_eq!(Party::parse("Democratic"), Some(Party::Democrat));
        assert_eq!(Party::parse("Republican"), Some(Party::Republican));
        assert_eq!(Party::parse("Republic"), Some(Party::Republican));
        assert_eq!(Party::parse("Whig"), None);
    }

    #[test]
    fn test_parse_scatter_records() {
        let records = fixture();
        assert_eq!(records.len(), 6);
        let ca = &records[0];
        assert_eq!(ca.state, "California");
        assert_eq!(ca.abbreviation, "CA");
        assert!((ca.gas_price - 4.68).abs() < f64::EPSILON);
        assert!((ca.value(Predictor::GasTax) - 0.511).abs() < f64::EPSILON);
        assert_eq!(ca.value(Predictor::Population), 39368078.0);
        assert_eq!(ca.party, Some(Party::Democrat));
        assert_eq!(records[1].party, Some(Party::Republican));
    }

    #[test]
    fn test_missing_party_column_is_allowed() {
        let csv = "State,ST,Gas_Price,Gas_Tax,Median_Income,Auto,Sales_Tax,Population,Oil_Production,Gas_Sales\n\
                   Ohio,OH,3.12,0.385,58642,10600000,5.75,11693217,21700,13800\n";
        let table = RawTable::from_csv_str("scatter features", csv).unwrap();
        let records = parse_scatter_records(&table).unwrap();
        assert_eq!(records[0].party, None);
    }

    #[test]
    fn test_missing_predictor_column_is_rejected() {
        let csv = "State,ST,Gas_Price,Gas_Tax\nOhio,OH,3.12,0.385\n";
        let table = RawTable::from_csv_str("scatter features", csv).unwrap();
        match parse_scatter_records(&table) {
            Err(LoadError::MissingColumn { column, .. }) => assert_eq!(column, "Median_Income"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_party_is_rejected() {
        let csv = "State,ST,Gas_Price,Gas_Tax,Median_Income,Auto,Sales_Tax,Population,Oil_Production,Gas_Sales,Party\n\
                   Ohio,OH,3.12,0.385,58642,10600000,5.75,11693217,21700,13800,Whig\n";
        let table = RawTable::from_csv_str("scatter features", csv).unwrap();
        assert!(matches!(
            parse_scatter_records(&table),
            Err(LoadError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let header = "State,ST,Gas_Price,Gas_Tax,Median_Income,Auto,Sales_Tax,Population,Oil_Production,Gas_Sales,Party";
        let rows = [
            ("Gas_Tax", "California,CA,4.68,nan,78672,30400000,7.25,39368078,143000,39800,Democrat"),
            ("Gas_Price", "California,CA,inf,0.511,78672,30400000,7.25,39368078,143000,39800,Democrat"),
            ("Population", "California,CA,4.68,0.511,78672,30400000,7.25,NaN,143000,39800,Democrat"),
        ];
        for (column, row) in rows {
            let table = RawTable::from_csv_str("scatter features", &format!("{}\n{}\n", header, row))
                .unwrap();
            match parse_scatter_records(&table) {
                Err(LoadError::InvalidValue { column: c, .. }) => assert_eq!(c, column),
                other => panic!("expected InvalidValue in {}, got {:?}", column, other),
            }
        }
    }
}
