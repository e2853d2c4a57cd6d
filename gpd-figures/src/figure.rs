//! Pieces shared by every figure description.
//!
//! Field names follow common charting vocabulary (`xanchor`, `nticks`,
//! `rangeslider`) so a backend can map them onto its own layout options
//! without a lookup table.

use gpd_data::LookupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A centered figure title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font_size: u32,
    pub x: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
}

impl Title {
    /// Title centered above the plot area.
    pub fn centered(text: impl Into<String>, font_size: u32) -> Self {
        Self {
            text: text.into(),
            font_size,
            x: 0.5,
            xanchor: "center",
            yanchor: "top",
        }
    }
}

/// Linear or logarithmic axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisType {
    #[default]
    Linear,
    Log,
}

impl AxisType {
    pub const ALL: [AxisType; 2] = [AxisType::Linear, AxisType::Log];

    /// Control value, as offered by the radio buttons.
    pub fn label(&self) -> &'static str {
        match self {
            AxisType::Linear => "Linear",
            AxisType::Log => "Log",
        }
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AxisType {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Linear" => Ok(AxisType::Linear),
            "Log" => Ok(AxisType::Log),
            _ => Err(LookupError::UnknownAxisMode(s.to_string())),
        }
    }
}

/// Axis configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    pub showline: bool,
    pub showgrid: bool,
    pub nticks: Option<u32>,
    pub rangeslider: bool,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, axis_type: AxisType) -> Self {
        self.axis_type = axis_type;
        self
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            title: None,
            axis_type: AxisType::Linear,
            showline: true,
            showgrid: false,
            nticks: None,
            rangeslider: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_type_parse() {
        assert_eq!("Linear".parse::<AxisType>().unwrap(), AxisType::Linear);
        assert_eq!("Log".parse::<AxisType>().unwrap(), AxisType::Log);
        assert_eq!(
            "log".parse::<AxisType>(),
            Err(LookupError::UnknownAxisMode("log".to_string()))
        );
    }

    #[test]
    fn test_axis_serializes_type_field() {
        let axis = Axis::titled("Price ($)").with_type(AxisType::Log);
        let json = serde_json::to_value(&axis).unwrap();
        assert_eq!(json["type"], "Log");
        assert_eq!(json["title"], "Price ($)");
    }

    #[test]
    fn test_title_is_centered() {
        let title = Title::centered("Today's gas price", 30);
        assert_eq!(title.x, 0.5);
        assert_eq!(title.xanchor, "center");
    }
}
