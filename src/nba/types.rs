//! Wire types for the stats.nba.com response envelope.

use crate::core::table::{Cell, Table};
use crate::error::{NbaError, Result};
use serde::Deserialize;
use serde_json::Value;


/// Top-level envelope every stats endpoint returns.
///
/// A response carries one or more named result sets; this pipeline only
/// ever consumes the first one.
#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

/// One named tabular result set: column headers plus untyped rows.
#[derive(Debug, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn into_table(self) -> Table {
        let mut table = Table::new(self.headers);
        for row in self.row_set {
            table.push_row(row.into_iter().map(Cell::from).collect());
        }
        table
    }
}

impl StatsResponse {
    /// The first result set as a [`Table`], or [`NbaError::NoData`] when
    /// the response carries none.
    pub fn into_first_table(self) -> Result<Table> {
        self.result_sets
            .into_iter()
            .next()
            .map(ResultSet::into_table)
            .ok_or(NbaError::NoData)
    }
}
