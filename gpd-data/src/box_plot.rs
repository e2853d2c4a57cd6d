use crate::error::{LoadError, Result};
use crate::source::RawTable;
use serde::{Deserialize, Serialize};

/// The nine states compared in the "today's gas price" box plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxState {
    CA,
    CO,
    FL,
    MA,
    MN,
    NY,
    OH,
    TX,
    WA,
}

impl BoxState {
    /// Plot order, left to right.
    pub const ALL: [BoxState; 9] = [
        BoxState::CA,
        BoxState::CO,
        BoxState::FL,
        BoxState::MA,
        BoxState::MN,
        BoxState::NY,
        BoxState::OH,
        BoxState::TX,
        BoxState::WA,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            BoxState::CA => "CA",
            BoxState::CO => "CO",
            BoxState::FL => "FL",
            BoxState::MA => "MA",
            BoxState::MN => "MN",
            BoxState::NY => "NY",
            BoxState::OH => "OH",
            BoxState::TX => "TX",
            BoxState::WA => "WA",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BoxState::CA => "California",
            BoxState::CO => "Colorado",
            BoxState::FL => "Florida",
            BoxState::MA => "Massachusetts",
            BoxState::MN => "Minnesota",
            BoxState::NY => "New York",
            BoxState::OH => "Ohio",
            BoxState::TX => "Texas",
            BoxState::WA => "Washington",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BoxState::CA => "red",
            BoxState::CO => "orange",
            BoxState::FL => "yellow",
            BoxState::MA => "green",
            BoxState::MN => "lightgreen",
            BoxState::NY => "blue",
            BoxState::OH => "navy",
            BoxState::TX => "purple",
            BoxState::WA => "grey",
        }
    }

    pub fn from_abbreviation(s: &str) -> Option<BoxState> {
        BoxState::ALL.into_iter().find(|b| b.abbreviation() == s)
    }
}

/// Station-level price samples grouped by state.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct BoxSamples {
    groups: Vec<(BoxState, Vec<f64>)>,
}

impl BoxSamples {
    /// Group `state,price` rows into the nine fixed states.
    ///
    /// Rows for other states are skipped; the sheet carries more states than
    /// the plot shows.
    pub fn from_table(table: &RawTable) -> Result<Self> {
        let state_col = table.column("state")?;
        let price_col = table.column("price")?;

        let mut groups: Vec<(BoxState, Vec<f64>)> =
            BoxState::ALL.into_iter().map(|s| (s, Vec::new())).collect();
        let mut skipped = 0u32;

        for i in 0..table.rows.len() {
            let Some(state) = BoxState::from_abbreviation(table.cell(i, state_col)) else {
                skipped += 1;
                continue;
            };
            let price = table.parse_f64(i, price_col)?;
            if let Some((_, samples)) = groups.iter_mut().find(|(s, _)| *s == state) {
                samples.push(price);
            }
        }

        let count: usize = groups.iter().map(|(_, s)| s.len()).sum();
        if count == 0 {
            return Err(LoadError::EmptyTable {
                table: table.name.clone(),
            });
        }

        log::info!(
            "loader: Loaded {} box plot samples, skipped {} outside the nine states",
            count,
            skipped
        );
        Ok(Self { groups })
    }

    /// Samples for one state, in file order.
    pub fn samples(&self, state: BoxState) -> &[f64] {
        self.groups
            .iter()
            .find(|(s, _)| *s == state)
            .map(|(_, samples)| samples.as_slice())
            .unwrap_or(&[])
    }

    /// All groups in plot order.
    pub fn groups(&self) -> impl Iterator<Item = (BoxState, &[f64])> + '_ {
        self.groups.iter().map(|(s, samples)| (*s, samples.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX_CSV: &str = include_str!("../../fixtures/state_price_box.csv");

    fn fixture() -> BoxSamples {
        let table = RawTable::from_csv_str("box plot", BOX_CSV).unwrap();
        BoxSamples::from_table(&table).unwrap()
    }

    #[test]
    fn test_groups_in_fixed_order() {
        let samples = fixture();
        let order: Vec<BoxState> = samples.groups().map(|(s, _)| s).collect();
        assert_eq!(order, BoxState::ALL.to_vec());
    }

    #[test]
    fn test_samples_grouped_by_state() {
        let samples = fixture();
        assert_eq!(samples.samples(BoxState::CA), &[4.59, 4.71, 4.85]);
        assert_eq!(samples.samples(BoxState::TX), &[2.95, 3.01, 3.10]);
        assert_eq!(samples.samples(BoxState::WA), &[3.97]);
    }

    #[test]
    fn test_other_states_are_ignored() {
        let samples = fixture();
        let total: usize = samples.groups().map(|(_, s)| s.len()).sum();
        // 18 rows in the fixture, one of them AZ
        assert_eq!(total, 17);
    }

    #[test]
    fn test_display_names_and_colors() {
        assert_eq!(BoxState::NY.name(), "New York");
        assert_eq!(BoxState::MN.color(), "lightgreen");
        assert_eq!(BoxState::from_abbreviation("AZ"), None);
    }

    #[test]
    fn test_empty_sheet_is_rejected() {
        let table = RawTable::from_csv_str("box plot", "state,price\nAZ,3.80\n").unwrap();
        assert!(matches!(
            BoxSamples::from_table(&table),
            Err(LoadError::EmptyTable { .. })
        ));
    }
}
