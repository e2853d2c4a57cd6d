//! Dataset types and loaders for the US gas price dashboard.
//!
//! All tables are read once at startup into immutable structures and then
//! shared by reference with the figure layer:
//!
//! - [`county::CountyPrices`] - today's price per county, keyed by FIPS code
//! - [`summary::SummaryTable`] - regional price summary, shown verbatim
//! - [`scatter::ScatterRecord`] - per-state features vs. average gas price
//! - [`box_plot::BoxSamples`] - price samples for the nine compared states
//! - [`time_series::PaddSeries`] - yearly price and crude oil production per PADD region
//!
//! [`datasets::Datasets::load`] reads them all from a [`datasets::DatasetConfig`].

pub mod box_plot;
pub mod county;
pub mod datasets;
pub mod error;
pub mod scatter;
pub mod source;
pub mod summary;
pub mod time_series;

pub use datasets::{DatasetConfig, Datasets};
pub use error::{LoadError, LookupError};
