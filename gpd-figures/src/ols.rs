//! Ordinary least squares trendlines for scatter groups.

use serde::Serialize;

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OlsFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination. 1.0 when every y is identical.
    pub r_squared: f64,
    /// Number of points the line was fitted to
    pub n: usize,
}

impl OlsFit {
    /// Fit by the closed-form normal equations.
    ///
    /// Returns `None` for fewer than two points, mismatched lengths, or when
    /// every x is the same (the slope is undefined).
    pub fn fit(xs: &[f64], ys: &[f64]) -> Option<Self> {
        let n = xs.len();
        if n < 2 || n != ys.len() {
            return None;
        }
        let nf = n as f64;
        let mean_x = xs.iter().sum::<f64>() / nf;
        let mean_y = ys.iter().sum::<f64>() / nf;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        let mut syy = 0.0;
        for (x, y) in xs.iter().zip(ys) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }
        if sxx == 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        let r_squared = if syy == 0.0 {
            1.0
        } else {
            (sxy * sxy) / (sxx * syy)
        };

        Some(Self {
            slope,
            intercept,
            r_squared,
            n,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// A fitted line ready to draw: the fit plus the line evaluated at every
/// fitted x, in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trendline {
    pub fit: OlsFit,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Hover text, e.g. `Gas_Price = 2.1 * Gas_Tax + 2.9 (R^2=0.41)`
    pub hover: String,
}

impl Trendline {
    /// Fit `ys` against `xs` and lay the line out over the sorted xs.
    pub fn fit(xs: &[f64], ys: &[f64], x_name: &str, y_name: &str) -> Option<Self> {
        let fit = OlsFit::fit(xs, ys)?;
        let mut x: Vec<f64> = xs.to_vec();
        x.sort_by(|a, b| a.total_cmp(b));
        let y = x.iter().map(|v| fit.predict(*v)).collect();
        let hover = format!(
            "{} = {:.6} * {} + {:.6} (R^2={:.6})",
            y_name, fit.slope, x_name, fit.intercept, fit.r_squared
        );
        Some(Self { fit, x, y, hover })
    }
}
