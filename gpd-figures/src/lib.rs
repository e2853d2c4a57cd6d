//! Figure descriptions for the US gas price dashboard.
//!
//! Nothing here draws anything. Each builder turns loaded datasets into a
//! plain, serializable description of one figure (traces, axes, titles,
//! colors) that any plotting front end can render.
//!
//! Three figures are fixed for the lifetime of the datasets: the national
//! county map, the regional summary table and the nine-state box plot. The
//! other three follow the controls and are rebuilt by
//! [`dashboard::update_figures`].

pub mod box_plot;
pub mod choropleth;
pub mod controls;
pub mod dashboard;
pub mod figure;
pub mod ols;
pub mod scatter;
pub mod table;
pub mod time_series;

pub use controls::{ControlOptions, Controls, Selection};
pub use dashboard::{static_figures, update_figures, Dashboard, DynamicFigures, StaticFigures};
pub use figure::AxisType;
