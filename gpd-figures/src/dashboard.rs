//! The dashboard as a whole: figures that never change, and the update
//! function that rebuilds the three interactive figures from the controls.

use crate::box_plot::{build_box_plot, BoxFigure};
use crate::choropleth::{national_map, state_map, ChoroplethFigure};
use crate::controls::{ControlOptions, Controls, Selection};
use crate::scatter::{build_scatter, ScatterFigure};
use crate::table::{build_table, TableFigure};
use crate::time_series::{build_time_series, TimeSeriesFigure};
use gpd_data::{Datasets, LookupError};
use serde::Serialize;

/// Figures rebuilt on every control change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynamicFigures {
    pub scatter: ScatterFigure,
    pub state_map: ChoroplethFigure,
    pub time_series: TimeSeriesFigure,
}

/// Figures built once from the datasets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticFigures {
    pub national_map: ChoroplethFigure,
    pub summary_table: TableFigure,
    pub box_plot: BoxFigure,
}

/// Rebuild the scatter plot, state map and time series for `selection`.
///
/// Pure: the same datasets and selection always give the same figures.
pub fn update_figures(
    datasets: &Datasets,
    selection: &Selection,
) -> Result<DynamicFigures, LookupError> {
    log::debug!(
        "update: predictor={} party={} axis={} state={} region={}",
        selection.predictor,
        selection.party_filter,
        selection.axis_type,
        selection.state,
        selection.region
    );

    let state_map = state_map(&datasets.county_prices, &selection.state)?;
    let time_series = build_time_series(&datasets.padd, &selection.region)?;
    let scatter = build_scatter(
        &datasets.scatter,
        selection.predictor,
        selection.party_filter,
        selection.axis_type,
    );

    Ok(DynamicFigures {
        scatter,
        state_map,
        time_series,
    })
}

pub fn static_figures(datasets: &Datasets) -> StaticFigures {
    StaticFigures {
        national_map: national_map(&datasets.county_prices),
        summary_table: build_table(&datasets.summary_table),
        box_plot: build_box_plot(&datasets.box_samples),
    }
}

/// Loaded datasets together with everything derived from them once.
#[derive(Debug, Clone)]
pub struct Dashboard {
    datasets: Datasets,
    static_figures: StaticFigures,
    options: ControlOptions,
}

impl Dashboard {
    pub fn new(datasets: Datasets) -> Self {
        let static_figures = static_figures(&datasets);
        let options = ControlOptions::from_datasets(&datasets);
        log::info!(
            "dashboard: {} counties, {} scatter states, {} regions",
            datasets.county_prices.len(),
            datasets.scatter.len(),
            options.regions.len()
        );
        Self {
            datasets,
            static_figures,
            options,
        }
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    pub fn static_figures(&self) -> &StaticFigures {
        &self.static_figures
    }

    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// Resolve raw control values and rebuild the dynamic figures.
    pub fn update(&self, controls: &Controls) -> Result<DynamicFigures, LookupError> {
        update_figures(&self.datasets, &controls.resolve()?)
    }
}
