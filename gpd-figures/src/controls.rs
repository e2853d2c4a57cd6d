//! Dashboard controls: raw values as the UI reports them, their resolved
//! form, and the options each control offers.

use crate::figure::AxisType;
use gpd_data::scatter::Predictor;
use gpd_data::{Datasets, LookupError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STATE: &str = "CA";
pub const DEFAULT_REGION: &str = "East Coast";

/// Checklist value that turns on party coloring.
pub const PARTY_OPTION: &str = "party";

/// Control values as reported by the UI. Any of them may be unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    /// Predictor key, e.g. `Gas_Tax`
    pub predictor: Option<String>,
    /// Selected checklist values
    pub checklist: Vec<String>,
    /// `Linear` or `Log`
    pub axis_mode: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
}

impl Controls {
    /// Apply defaults and parse the enumerated controls.
    ///
    /// Missing values fall back to `Gas_Tax`, `Linear`, `CA` and
    /// `East Coast`. State and region are checked against the datasets by the
    /// figure builders, not here.
    pub fn resolve(&self) -> Result<Selection, LookupError> {
        let predictor = match self.predictor.as_deref() {
            Some(key) => key.parse()?,
            None => Predictor::default(),
        };
        let axis_type = match self.axis_mode.as_deref() {
            Some(mode) => mode.parse()?,
            None => AxisType::default(),
        };
        Ok(Selection {
            predictor,
            party_filter: self.checklist.iter().any(|v| v == PARTY_OPTION),
            axis_type,
            state: self
                .state
                .clone()
                .unwrap_or_else(|| DEFAULT_STATE.to_string()),
            region: self
                .region
                .clone()
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
        })
    }
}

/// Fully resolved control values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub predictor: Predictor,
    pub party_filter: bool,
    pub axis_type: AxisType,
    pub state: String,
    pub region: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            predictor: Predictor::default(),
            party_filter: false,
            axis_type: AxisType::default(),
            state: DEFAULT_STATE.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

/// A `(label, value)` pair for a dropdown, checklist or radio item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlOption {
    pub label: String,
    pub value: String,
}

impl ControlOption {
    fn same(value: &str) -> Self {
        Self {
            label: value.to_string(),
            value: value.to_string(),
        }
    }
}

/// Everything a front end needs to draw the five controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlOptions {
    pub predictors: Vec<ControlOption>,
    pub party: ControlOption,
    pub axis_modes: Vec<ControlOption>,
    pub states: Vec<ControlOption>,
    pub regions: Vec<ControlOption>,
    pub defaults: Selection,
}

impl ControlOptions {
    pub fn from_datasets(datasets: &Datasets) -> Self {
        Self {
            predictors: Predictor::ALL
                .iter()
                .map(|p| ControlOption {
                    label: p.option_label().to_string(),
                    value: p.key().to_string(),
                })
                .collect(),
            party: ControlOption {
                label: "Party Affiliation".to_string(),
                value: PARTY_OPTION.to_string(),
            },
            axis_modes: AxisType::ALL
                .iter()
                .map(|a| ControlOption::same(a.label()))
                .collect(),
            states: datasets
                .county_prices
                .states()
                .iter()
                .map(|s| ControlOption::same(s))
                .collect(),
            regions: datasets
                .padd
                .regions()
                .iter()
                .map(|r| ControlOption::same(r))
                .collect(),
            defaults: Selection::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_controls_resolve_to_defaults() {
        let selection = Controls::default().resolve().unwrap();
        assert_eq!(selection.predictor, Predictor::GasTax);
        assert!(!selection.party_filter);
        assert_eq!(selection.axis_type, AxisType::Linear);
        assert_eq!(selection.state, "CA");
        assert_eq!(selection.region, "East Coast");
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn test_explicit_controls() {
        let controls = Controls {
            predictor: Some("Median_Income".to_string()),
            checklist: vec![PARTY_OPTION.to_string()],
            axis_mode: Some("Log".to_string()),
            state: Some("TX".to_string()),
            region: Some("Gulf Coast".to_string()),
        };
        let selection = controls.resolve().unwrap();
        assert_eq!(selection.predictor, Predictor::MedianIncome);
        assert!(selection.party_filter);
        assert_eq!(selection.axis_type, AxisType::Log);
        assert_eq!(selection.state, "TX");
        assert_eq!(selection.region, "Gulf Coast");
    }

    #[test]
    fn test_checklist_without_party_does_not_group() {
        let controls = Controls {
            checklist: vec!["something-else".to_string()],
            ..Controls::default()
        };
        assert!(!controls.resolve().unwrap().party_filter);
    }

    #[test]
    fn test_unknown_predictor_is_lookup_error() {
        let controls = Controls {
            predictor: Some("Gas Tax".to_string()),
            ..Controls::default()
        };
        assert_eq!(
            controls.resolve(),
            Err(LookupError::UnknownPredictor("Gas Tax".to_string()))
        );
    }

    #[test]
    fn test_unknown_axis_mode_is_lookup_error() {
        let controls = Controls {
            axis_mode: Some("Cubic".to_string()),
            ..Controls::default()
        };
        assert_eq!(
            controls.resolve(),
            Err(LookupError::UnknownAxisMode("Cubic".to_string()))
        );
    }

    #[test]
    fn test_controls_from_json() {
        let controls: Controls =
            serde_json::from_str(r#"{"predictor": "Auto", "checklist": ["party"]}"#).unwrap();
        let selection = controls.resolve().unwrap();
        assert_eq!(selection.predictor, Predictor::Auto);
        assert!(selection.party_filter);
        assert_eq!(selection.state, DEFAULT_STATE);
    }
}
