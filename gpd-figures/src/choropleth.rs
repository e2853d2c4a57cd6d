//! County-level gas price maps.
//!
//! Both maps shade counties on the same color range, taken from the global
//! price extremes, so a given price has the same color whichever state is
//! selected.

use crate::figure::Title;
use gpd_data::county::{CountyPrice, CountyPrices};
use gpd_data::LookupError;
use serde::Serialize;

/// County boundary polygons, keyed by 5-digit FIPS code in each feature's `id`.
pub const COUNTY_GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/geojson-counties-fips.json";

/// GeoJSON feature property matched against [`CountyPrice::fips`].
pub const FEATURE_ID_KEY: &str = "id";

pub const COLOR_SCALE: &str = "jet";

/// Added below the global minimum and above the global maximum price.
pub const PRICE_RANGE_PADDING: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethFigure {
    pub title: Title,
    /// One entry per shaded county; `county` is the hover name
    pub counties: Vec<CountyPrice>,
    pub geojson_url: &'static str,
    pub feature_id_key: &'static str,
    pub color_scale: &'static str,
    pub color_range: (f64, f64),
    /// Map scope, e.g. `usa`; `None` fits the view to the shaded counties
    pub scope: Option<&'static str>,
    pub fit_bounds: bool,
    /// Draw state borders
    pub show_subunits: bool,
    pub marker_line_width: f64,
    pub marker_opacity: f64,
    pub height: Option<u32>,
}

/// Color range shared by every county map: global min/max padded by
/// [`PRICE_RANGE_PADDING`].
pub fn color_range(prices: &CountyPrices) -> (f64, f64) {
    let (lo, hi) = prices.price_range().unwrap_or((0.0, 0.0));
    (lo - PRICE_RANGE_PADDING, hi + PRICE_RANGE_PADDING)
}

/// Every county in the country.
pub fn national_map(prices: &CountyPrices) -> ChoroplethFigure {
    ChoroplethFigure {
        title: Title::centered("USA gas price by county", 30),
        counties: prices.rows().to_vec(),
        geojson_url: COUNTY_GEOJSON_URL,
        feature_id_key: FEATURE_ID_KEY,
        color_scale: COLOR_SCALE,
        color_range: color_range(prices),
        scope: Some("usa"),
        fit_bounds: false,
        show_subunits: true,
        marker_line_width: 0.1,
        marker_opacity: 0.8,
        height: Some(600),
    }
}

/// Counties of one state, zoomed to fit.
pub fn state_map(prices: &CountyPrices, state: &str) -> Result<ChoroplethFigure, LookupError> {
    if !prices.contains_state(state) {
        return Err(LookupError::UnknownState(state.to_string()));
    }
    Ok(ChoroplethFigure {
        title: Title::centered(format!("gas price by county in State {}", state), 25),
        counties: prices.for_state(state).cloned().collect(),
        geojson_url: COUNTY_GEOJSON_URL,
        feature_id_key: FEATURE_ID_KEY,
        color_scale: COLOR_SCALE,
        color_range: color_range(prices),
        scope: None,
        fit_bounds: true,
        show_subunits: false,
        marker_line_width: 0.3,
        marker_opacity: 1.0,
        height: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpd_data::source::RawTable;

    const COUNTY_CSV: &str = include_str!("../../fixtures/county_price.csv");

    fn prices() -> CountyPrices {
        CountyPrices::from_table(&RawTable::from_csv_str("county prices", COUNTY_CSV).unwrap())
            .unwrap()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_color_range_is_padded_global_extremes() {
        let (lo, hi) = color_range(&prices());
        assert_close(lo, 2.95);
        assert_close(hi, 6.12);
    }

    #[test]
    fn test_national_map_has_every_county() {
        let prices = prices();
        let fig = national_map(&prices);
        assert_eq!(fig.counties.len(), prices.len());
        assert_eq!(fig.title.text, "USA gas price by county");
        assert_eq!(fig.scope, Some("usa"));
    }

    #[test]
    fn test_state_map_filters_to_state() {
        let prices = prices();
        for state in prices.states() {
            let fig = state_map(&prices, &state).unwrap();
            assert!(!fig.counties.is_empty());
            assert!(fig.counties.iter().all(|c| c.state == state));
            assert_eq!(fig.color_range, color_range(&prices));
            assert_eq!(fig.title.text, format!("gas price by county in State {}", state));
        }
    }

    #[test]
    fn test_state_color_range_does_not_depend_on_state() {
        let prices = prices();
        let ca = state_map(&prices, "CA").unwrap();
        let tx = state_map(&prices, "TX").unwrap();
        assert_eq!(ca.color_range, tx.color_range);
        // TX alone tops out at 3.25; the range still reaches the CA maximum
        assert_close(tx.color_range.1, 6.12);
    }

    #[test]
    fn test_unknown_state_is_lookup_error() {
        assert_eq!(
            state_map(&prices(), "ZZ"),
            Err(LookupError::UnknownState("ZZ".to_string()))
        );
    }

    #[test]
    fn test_locations_are_padded_fips() {
        let fig = state_map(&prices(), "AL").unwrap();
        let fips: Vec<&str> = fig.counties.iter().map(|c| c.fips.as_str()).collect();
        assert_eq!(fips, vec!["01001", "01003"]);
    }
}
