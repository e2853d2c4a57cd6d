//! Render the whole dashboard to a directory of JSON files.

use crate::DataArgs;
use anyhow::Context;
use chrono::{DateTime, Local};
use gpd_data::Datasets;
use gpd_figures::{Controls, Dashboard, Selection};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Written last, as `manifest.json`.
#[derive(Debug, Serialize)]
pub struct RenderManifest {
    pub generated_at: DateTime<Local>,
    pub data_dir: PathBuf,
    pub selection: Selection,
    pub files: Vec<String>,
}

pub fn run_render(data: &DataArgs, out_dir: &Path, controls: &Controls) -> anyhow::Result<()> {
    let config = data.dataset_config()?;
    let dashboard = Dashboard::new(Datasets::load(&config)?);
    let files = render_dashboard(&dashboard, controls, out_dir, config.data_dir)?;
    info!("Rendered {} files to {}", files.len(), out_dir.display());
    Ok(())
}

/// Write every figure for `controls` into `out_dir`, returning the file
/// names written.
pub fn render_dashboard(
    dashboard: &Dashboard,
    controls: &Controls,
    out_dir: &Path,
    data_dir: PathBuf,
) -> anyhow::Result<Vec<String>> {
    let selection = controls.resolve()?;
    let dynamic = gpd_figures::update_figures(dashboard.datasets(), &selection)?;
    let statics = dashboard.static_figures();

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut files = Vec::new();
    write_json(out_dir, "national_map.json", &statics.national_map, &mut files)?;
    write_json(out_dir, "summary_table.json", &statics.summary_table, &mut files)?;
    write_json(out_dir, "box_plot.json", &statics.box_plot, &mut files)?;
    write_json(out_dir, "scatter.json", &dynamic.scatter, &mut files)?;
    write_json(out_dir, "state_map.json", &dynamic.state_map, &mut files)?;
    write_json(out_dir, "time_series.json", &dynamic.time_series, &mut files)?;
    write_json(out_dir, "controls.json", dashboard.options(), &mut files)?;

    let manifest = RenderManifest {
        generated_at: Local::now(),
        data_dir,
        selection,
        files: files.clone(),
    };
    write_json(out_dir, "manifest.json", &manifest, &mut files)?;
    Ok(files)
}

fn write_json<T: Serialize + ?Sized>(
    out_dir: &Path,
    name: &str,
    value: &T,
    files: &mut Vec<String>,
) -> anyhow::Result<()> {
    let path = out_dir.join(name);
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("render: wrote {}", path.display());
    files.push(name.to_string());
    Ok(())
}
