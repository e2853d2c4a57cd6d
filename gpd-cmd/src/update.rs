//! Evaluate one control update and print the dynamic figures.

use crate::load::load_datasets;
use crate::DataArgs;
use gpd_data::Datasets;
use gpd_figures::{update_figures, Controls};

pub fn run_update(data: &DataArgs, controls: &Controls, pretty: bool) -> anyhow::Result<()> {
    let datasets = load_datasets(data)?;
    println!("{}", update_json(&datasets, controls, pretty)?);
    Ok(())
}

/// The scatter plot, state map and time series as one JSON object.
pub fn update_json(datasets: &Datasets, controls: &Controls, pretty: bool) -> anyhow::Result<String> {
    let figures = update_figures(datasets, &controls.resolve()?)?;
    let json = if pretty {
        serde_json::to_string_pretty(&figures)?
    } else {
        serde_json::to_string(&figures)?
    };
    Ok(json)
}
