//! Command implementations for the gas price dashboard CLI.
//!
//! Provides subcommands for validating the datasets, rendering every figure
//! to JSON, evaluating a single control update, and downloading the county
//! boundary document.

use clap::{Args, Subcommand};
use gpd_data::DatasetConfig;
use gpd_figures::controls::PARTY_OPTION;
use gpd_figures::Controls;
use std::path::PathBuf;

pub mod fetch;
pub mod load;
pub mod render;
pub mod update;

/// Where to find the datasets.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Directory holding the dataset files
    #[arg(short = 'd', long)]
    pub data_dir: Option<PathBuf>,

    /// JSON dataset config; `--data-dir` overrides its `data_dir`
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

impl DataArgs {
    pub fn dataset_config(&self) -> anyhow::Result<DatasetConfig> {
        let mut config = match &self.config {
            Some(path) => DatasetConfig::from_file(path)?,
            None => DatasetConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        Ok(config)
    }
}

/// Control values; anything left out takes the dashboard default.
#[derive(Args, Debug, Clone, Default)]
pub struct ControlArgs {
    /// Scatter predictor column, e.g. Gas_Tax or Median_Income
    #[arg(long)]
    pub predictor: Option<String>,

    /// Color the scatter plot by party affiliation
    #[arg(long)]
    pub party: bool,

    /// Scatter x axis mode: Linear or Log
    #[arg(long)]
    pub axis_mode: Option<String>,

    /// State abbreviation for the county map
    #[arg(long)]
    pub state: Option<String>,

    /// PADD region for the time series
    #[arg(long)]
    pub region: Option<String>,
}

impl ControlArgs {
    pub fn controls(&self) -> Controls {
        Controls {
            predictor: self.predictor.clone(),
            checklist: if self.party {
                vec![PARTY_OPTION.to_string()]
            } else {
                Vec::new()
            },
            axis_mode: self.axis_mode.clone(),
            state: self.state.clone(),
            region: self.region.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Load every dataset and report table sizes
    Check {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Write every figure, the control options and a manifest as JSON files
    Render {
        #[command(flatten)]
        data: DataArgs,

        /// Output directory (created if missing)
        #[arg(short = 'o', long)]
        out_dir: PathBuf,

        #[command(flatten)]
        controls: ControlArgs,
    },

    /// Print the scatter plot, state map and time series for one set of controls
    Update {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        controls: ControlArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Download the county boundary GeoJSON
    FetchCounties {
        /// Output path for the GeoJSON document
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Source URL
        #[arg(long, default_value = gpd_figures::choropleth::COUNTY_GEOJSON_URL)]
        url: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Check { data } => load::run_check(&data),
        Command::Render {
            data,
            out_dir,
            controls,
        } => render::run_render(&data, &out_dir, &controls.controls()),
        Command::Update {
            data,
            controls,
            pretty,
        } => update::run_update(&data, &controls.controls(), pretty),
        Command::FetchCounties { output, url } => fetch::run_fetch_counties(&url, &output).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_args_to_controls() {
        let args = ControlArgs {
            predictor: Some("Auto".to_string()),
            party: true,
            axis_mode: None,
            state: Some("TX".to_string()),
            region: None,
        };
        let controls = args.controls();
        assert_eq!(controls.predictor.as_deref(), Some("Auto"));
        assert_eq!(controls.checklist, vec!["party".to_string()]);
        assert_eq!(controls.state.as_deref(), Some("TX"));
        assert!(controls.region.is_none());

        assert!(ControlArgs::default().controls().checklist.is_empty());
    }

    #[test]
    fn test_data_dir_overrides_default() {
        let args = DataArgs {
            data_dir: Some(PathBuf::from("/srv/gas")),
            config: None,
        };
        let config = args.dataset_config().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/gas"));
        assert_eq!(config.county_prices, PathBuf::from("county_price.csv"));
    }
}
