use crate::figure::{Axis, Title};
use gpd_data::box_plot::{BoxSamples, BoxState};
use serde::Serialize;

/// Five-number summary with linearly interpolated quartiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxStats {
    /// `None` for an empty sample.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        Some(Self {
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Quantile of sorted, non-empty data by linear interpolation between
/// closest ranks.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxTrace {
    pub name: &'static str,
    pub state: BoxState,
    pub color: &'static str,
    pub y: Vec<f64>,
    pub stats: Option<BoxStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxFigure {
    pub title: Title,
    pub boxes: Vec<BoxTrace>,
    pub y_axis: Axis,
    pub plot_bgcolor: &'static str,
}

/// One box per compared state, in fixed order.
pub fn build_box_plot(samples: &BoxSamples) -> BoxFigure {
    let boxes = samples
        .groups()
        .map(|(state, y)| {
            if y.is_empty() {
                log::warn!("box plot: no samples for {}", state.abbreviation());
            }
            BoxTrace {
                name: state.name(),
                state,
                color: state.color(),
                y: y.to_vec(),
                stats: BoxStats::from_samples(y),
            }
        })
        .collect();

    BoxFigure {
        title: Title::centered("Today's gas price", 30),
        boxes,
        y_axis: Axis {
            nticks: Some(18),
            ..Axis::default()
        },
        plot_bgcolor: "rgba(0,0,0,0)",
    }
}
