//! Average retail gas price vs. a selectable per-state predictor.

use crate::figure::{Axis, AxisType, Title};
use crate::ols::Trendline;
use gpd_data::scatter::{Party, Predictor, ScatterRecord};
use serde::Serialize;

/// Hover fields shown for every point.
pub const HOVER_FIELDS: [&str; 4] = ["State", "Gas_Price", "Auto", "Population"];

/// Name of the group holding records without a party when grouping by party.
pub const UNKNOWN_PARTY_GROUP: &str = "Unknown";

/// Hover payload for one point, keyed by source column name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointHover {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Gas_Price")]
    pub gas_price: f64,
    #[serde(rename = "Auto")]
    pub auto: f64,
    #[serde(rename = "Population")]
    pub population: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// State abbreviation drawn next to the marker
    pub label: String,
    pub hover: PointHover,
}

/// Points sharing a color, with their own trendline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterGroup {
    /// Legend name; `None` when the plot is not grouped
    pub name: Option<String>,
    pub color: Option<&'static str>,
    pub points: Vec<ScatterPoint>,
    pub trendline: Option<Trendline>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub title: Title,
    pub predictor: Predictor,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Column the points are colored by, if any
    pub color_by: Option<&'static str>,
    pub groups: Vec<ScatterGroup>,
    pub hover_fields: [&'static str; 4],
    pub text_position: &'static str,
    pub marker_size: u32,
    pub legend_reversed: bool,
    /// Labels of points a log x axis cannot place. They stay in `groups`.
    pub non_positive_x: Vec<String>,
}

impl ScatterFigure {
    pub fn point_count(&self) -> usize {
        self.groups.iter().map(|g| g.points.len()).sum()
    }

    pub fn points(&self) -> impl Iterator<Item = &ScatterPoint> + '_ {
        self.groups.iter().flat_map(|g| g.points.iter())
    }
}

/// Build the scatter plot for one predictor.
///
/// Every record becomes exactly one point. With `by_party` the points are
/// split by party in order of first appearance and each group gets its own
/// trendline. On a log axis, points with `x <= 0` are kept and listed in
/// `non_positive_x` but left out of the trendline fit.
pub fn build_scatter(
    records: &[ScatterRecord],
    predictor: Predictor,
    by_party: bool,
    axis_type: AxisType,
) -> ScatterFigure {
    let mut groups: Vec<(Option<Party>, Vec<ScatterPoint>)> = Vec::new();
    for record in records {
        let key = if by_party { record.party } else { None };
        let point = ScatterPoint {
            x: record.value(predictor),
            y: record.gas_price,
            label: record.abbreviation.clone(),
            hover: PointHover {
                state: record.state.clone(),
                gas_price: record.gas_price,
                auto: record.auto,
                population: record.population,
            },
        };
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, points)) => points.push(point),
            None => groups.push((key, vec![point])),
        }
    }

    let log_x = axis_type == AxisType::Log;
    let mut non_positive_x = Vec::new();
    if log_x {
        for (_, points) in &groups {
            non_positive_x.extend(points.iter().filter(|p| p.x <= 0.0).map(|p| p.label.clone()));
        }
        if !non_positive_x.is_empty() {
            log::warn!(
                "scatter: {} has non-positive values for {:?}; kept but not fitted on log axis",
                predictor,
                non_positive_x
            );
        }
    }

    let groups = groups
        .into_iter()
        .map(|(party, points)| {
            let (xs, ys): (Vec<f64>, Vec<f64>) = points
                .iter()
                .filter(|p| !log_x || p.x > 0.0)
                .map(|p| (p.x, p.y))
                .unzip();
            let trendline = Trendline::fit(&xs, &ys, predictor.key(), "Gas_Price");
            if trendline.is_none() {
                log::warn!(
                    "scatter: no trendline for group {:?} ({} fittable points)",
                    party,
                    xs.len()
                );
            }
            let (name, color) = match (by_party, party) {
                (false, _) => (None, None),
                (true, Some(p)) => (Some(p.name().to_string()), Some(p.color())),
                (true, None) => (Some(UNKNOWN_PARTY_GROUP.to_string()), None),
            };
            ScatterGroup {
                name,
                color,
                points,
                trendline,
            }
        })
        .collect();

    let mut x_axis = Axis::titled(predictor.axis_label()).with_type(axis_type);
    x_axis.showgrid = false;
    let mut y_axis = Axis::titled("Price ($)");
    y_axis.showgrid = true;

    ScatterFigure {
        title: Title::centered(
            format!(
                "Avg. Retail Gas Price vs. {} By State",
                predictor.title_label()
            ),
            25,
        ),
        predictor,
        x_axis,
        y_axis,
        color_by: if by_party { Some("Party") } else { None },
        groups,
        hover_fields: HOVER_FIELDS,
        text_position: "bottom right",
        marker_size: 8,
        legend_reversed: true,
        non_positive_x,
    }
}
