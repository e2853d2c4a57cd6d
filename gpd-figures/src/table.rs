use crate::figure::Title;
use gpd_data::summary::SummaryTable;
use serde::Serialize;

/// The regional price summary as a data table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableFigure {
    pub title: Title,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn build_table(summary: &SummaryTable) -> TableFigure {
    TableFigure {
        title: Title::centered("Gas Price Summary By Region", 24),
        columns: summary.columns.clone(),
        rows: summary.rows.clone(),
    }
}
