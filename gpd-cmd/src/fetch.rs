//! Download the county boundary GeoJSON that the county maps reference.

use anyhow::Context;
use log::info;
use serde::Deserialize;
use std::path::Path;

/// Top-level shape of a GeoJSON feature collection. Features are counted,
/// not interpreted.
#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<serde_json::Value>,
}

pub async fn run_fetch_counties(url: &str, output: &Path) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    info!("Fetching county boundaries from {}", url);
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("Bad response from {}: {}", url, response.status());
    }
    let body = response.text().await?;

    let count = count_features(&body)?;
    info!("Downloaded {} county features", count);

    write_document(output, &body)?;
    info!("Wrote {}", output.display());
    Ok(())
}

/// Write `body` to `output`, creating missing parent directories.
pub fn write_document(output: &Path, body: &str) -> anyhow::Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(output, body)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

/// Check that `body` is a GeoJSON `FeatureCollection` and count its
/// features.
pub fn count_features(body: &str) -> anyhow::Result<usize> {
    let collection: FeatureCollection =
        serde_json::from_str(body).context("Response is not a GeoJSON feature collection")?;
    if collection.kind != "FeatureCollection" {
        anyhow::bail!("Expected a FeatureCollection, got {}", collection.kind);
    }
    Ok(collection.features.len())
}
