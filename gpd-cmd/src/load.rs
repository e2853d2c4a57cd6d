//! Dataset loading shared by the commands.

use crate::DataArgs;
use gpd_data::Datasets;
use log::info;

pub fn load_datasets(data: &DataArgs) -> anyhow::Result<Datasets> {
    let config = data.dataset_config()?;
    let datasets = Datasets::load(&config)?;
    Ok(datasets)
}

/// Load every dataset and print a one-line summary per table.
pub fn run_check(data: &DataArgs) -> anyhow::Result<()> {
    let datasets = load_datasets(data)?;
    println!("{}", check_report(&datasets));
    info!("All datasets loaded");
    Ok(())
}

pub fn check_report(datasets: &Datasets) -> String {
    let box_samples: usize = datasets.box_samples.groups().map(|(_, y)| y.len()).sum();
    [
        format!(
            "county prices:    {} counties in {} states",
            datasets.county_prices.len(),
            datasets.county_prices.states().len()
        ),
        format!(
            "summary table:    {} rows x {} columns",
            datasets.summary_table.rows.len(),
            datasets.summary_table.columns.len()
        ),
        format!("scatter features: {} states", datasets.scatter.len()),
        format!("box plot:         {} samples", box_samples),
        format!(
            "padd series:      {} regions, {} price years, {} production years",
            datasets.padd.regions().len(),
            datasets.padd.price.years().len(),
            datasets.padd.production.years().len()
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpd_data::LoadError;
    use std::fs;
    use std::path::Path;

    const CONFIG_JSON: &str = r#"{
        "scatter": "final_scatter.csv",
        "scatter_sheet": null,
        "box_plot": "state_price_box.csv",
        "box_plot_sheet": null
    }"#;

    fn write_fixtures(dir: &Path, skip: Option<&str>) {
        let files = [
            ("county_price.csv", include_str!("../../fixtures/county_price.csv")),
            ("table.csv", include_str!("../../fixtures/table.csv")),
            ("final_scatter.csv", include_str!("../../fixtures/final_scatter.csv")),
            ("state_price_box.csv", include_str!("../../fixtures/state_price_box.csv")),
            ("padd_price_by_year.csv", include_str!("../../fixtures/padd_price_by_year.csv")),
            ("padd_net_production.csv", include_str!("../../fixtures/padd_net_production.csv")),
        ];
        for (name, contents) in files {
            if Some(name) != skip {
                fs::write(dir.join(name), contents).unwrap();
            }
        }
        fs::write(dir.join("datasets.json"), CONFIG_JSON).unwrap();
    }

    fn args(dir: &Path) -> DataArgs {
        DataArgs {
            data_dir: None,
            config: Some(dir.join("datasets.json")),
        }
    }

    #[test]
    fn test_run_check_loads_every_dataset() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path(), None);

        run_check(&args(dir.path())).unwrap();

        let report = check_report(&load_datasets(&args(dir.path())).unwrap());
        assert!(report.contains("county prices:    8 counties in 4 states"));
        assert!(report.contains("scatter features: 6 states"));
        assert!(report.contains("padd series:      5 regions"));
    }

    #[test]
    fn test_run_check_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path(), Some("county_price.csv"));

        let err = run_check(&args(dir.path())).unwrap_err();
        match err.downcast_ref::<LoadError>() {
            Some(LoadError::MissingFile(path)) => {
                assert!(path.ends_with("county_price.csv"));
            }
            other => panic!("expected MissingFile, got {:?}", other),
        }
    }
}
