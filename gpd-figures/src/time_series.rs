use crate::figure::{Axis, Title};
use gpd_data::time_series::PaddSeries;
use gpd_data::LookupError;
use serde::Serialize;

/// Which y axis a series is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum YAxis {
    #[serde(rename = "y")]
    Primary,
    #[serde(rename = "y2")]
    Secondary,
}

/// One line, indexed by year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub axis: YAxis,
    pub x: Vec<i32>,
    /// `None` where the source cell was blank
    pub y: Vec<Option<f64>>,
}

/// Yearly price and crude oil production for one PADD region on twin y axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesFigure {
    pub title: Title,
    pub region: String,
    pub primary: Series,
    pub secondary: Series,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y2_axis: Axis,
}

pub fn build_time_series(padd: &PaddSeries, region: &str) -> Result<TimeSeriesFigure, LookupError> {
    let price = padd.price.column(region)?;
    let production = padd.production.column(region)?;

    Ok(TimeSeriesFigure {
        title: Title::centered(
            format!("{} Yearly Average Gas Price VS Crude Oil Production", region),
            30,
        ),
        region: region.to_string(),
        primary: Series {
            name: "Gas Price",
            color: "red",
            axis: YAxis::Primary,
            x: padd.price.years().to_vec(),
            y: price.to_vec(),
        },
        secondary: Series {
            name: "Crude Oil Production",
            color: "green",
            axis: YAxis::Secondary,
            x: padd.production.years().to_vec(),
            y: production.to_vec(),
        },
        x_axis: Axis {
            rangeslider: true,
            ..Axis::default()
        },
        y_axis: Axis::titled("Gas Price"),
        y2_axis: Axis::titled("Crude Oil Production"),
    })
}
