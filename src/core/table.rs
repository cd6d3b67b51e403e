//! In-memory tabular data shared by every pipeline stage.
//!
//! Every remote result set is decoded into a [`Table`] (ordered column
//! names plus rows of [`Cell`]s); merging, cleaning, and export all
//! operate on this one shape.

use crate::error::{NbaError, Result};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;


/// A single table value.
///
/// The stats service returns untyped JSON rows mixing numbers, strings,
/// and nulls; `Cell` keeps that distinction so cleaning can fill `Null`
/// with an entity-appropriate default.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// The value as an integer, when it is a whole number.
    ///
    /// Identifier columns (TEAM_ID, PLAYER_ID) arrive as JSON numbers;
    /// this is how they are pulled back out without float formatting.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => Some(*n as i64),
            _ => None,
        }
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            Value::Number(n) => Cell::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => Cell::Text(s),
            Value::Bool(b) => Cell::Number(if b { 1.0 } else { 0.0 }),
            other => Cell::Text(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            // Whole numbers print without a decimal point so ids and
            // counts survive the CSV round trip unchanged.
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                write!(f, "{}", *n as i64)
            }
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Ordered column names plus rows of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. The caller is responsible for matching the column count.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| NbaError::MissingColumn {
            column: name.to_string(),
        })
    }

    /// Distinct whole-number values of a column, in first-seen row order.
    pub fn distinct_ints(&self, column: &str) -> Result<Vec<i64>> {
        let idx = self.require_column(column)?;
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for row in &self.rows {
            if let Some(id) = row[idx].as_i64() {
                if seen.insert(id) {
                    out.push(id);
                }
            }
        }
        Ok(out)
    }

    /// Inner-join `self` and `right` on the named key columns.
    ///
    /// Non-key columns present on both sides are renamed with the given
    /// suffixes. Rows whose key exists on one side only are dropped per
    /// inner-join semantics; when that happens a warning names the row
    /// counts, since call sites expect a full one-to-one correspondence.
    pub fn inner_join(
        &self,
        right: &Table,
        keys: &[&str],
        left_suffix: &str,
        right_suffix: &str,
    ) -> Result<Table> {
        let left_key_idx: Vec<usize> = keys
            .iter()
            .map(|k| self.require_column(k))
            .collect::<Result<_>>()?;
        let right_key_idx: Vec<usize> = keys
            .iter()
            .map(|k| right.require_column(k))
            .collect::<Result<_>>()?;

        let key_set: HashSet<&str> = keys.iter().copied().collect();
        let shared: HashSet<&str> = self
            .columns
            .iter()
            .map(String::as_str)
            .filter(|c| !key_set.contains(c) && right.column_index(c).is_some())
            .collect();

        let mut columns: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        for c in self.non_key_columns(&key_set) {
            columns.push(Self::suffixed(c, &shared, left_suffix));
        }
        for c in right.non_key_columns(&key_set) {
            columns.push(Self::suffixed(c, &shared, right_suffix));
        }

        let mut index: HashMap<Vec<String>, Vec<usize>> = HashMap::new();
        for (i, row) in right.rows.iter().enumerate() {
            index.entry(key_of(row, &right_key_idx)).or_default().push(i);
        }

        let left_non_key: Vec<usize> = (0..self.columns.len())
            .filter(|i| !left_key_idx.contains(i))
            .collect();
        let right_non_key: Vec<usize> = (0..right.columns.len())
            .filter(|i| !right_key_idx.contains(i))
            .collect();

        let mut joined = Table::new(columns);
        for lrow in &self.rows {
            let Some(matches) = index.get(&key_of(lrow, &left_key_idx)) else {
                continue;
            };
            for &ri in matches {
                let rrow = &right.rows[ri];
                let mut row = Vec::with_capacity(joined.columns.len());
                row.extend(left_key_idx.iter().map(|&i| lrow[i].clone()));
                row.extend(left_non_key.iter().map(|&i| lrow[i].clone()));
                row.extend(right_non_key.iter().map(|&i| rrow[i].clone()));
                joined.push_row(row);
            }
        }

        if joined.row_count() != self.row_count() || joined.row_count() != right.row_count() {
            eprintln!(
                "⚠ Join on {:?} dropped unmatched rows: left {}, right {}, joined {}",
                keys,
                self.row_count(),
                right.row_count(),
                joined.row_count()
            );
        }

        Ok(joined)
    }

    fn non_key_columns<'a>(
        &'a self,
        key_set: &'a HashSet<&str>,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(move |c| !key_set.contains(c))
    }

    fn suffixed(name: &str, shared: &HashSet<&str>, suffix: &str) -> String {
        if shared.contains(name) {
            format!("{name}{suffix}")
        } else {
            name.to_string()
        }
    }

    /// Replace every `Null` cell with `fill`. Idempotent.
    pub fn fill_missing(&mut self, fill: &Cell) {
        for row in &mut self.rows {
            for cell in row {
                if cell.is_null() {
                    *cell = fill.clone();
                }
            }
        }
    }

    /// Stack tables on top of each other, aligning columns by name.
    ///
    /// Columns keep first-seen order; a table missing a column gets
    /// `Null` in that position. Result-set shape drift between per-team
    /// detail responses therefore cannot abort the batch.
    pub fn concat<I>(parts: I) -> Table
    where
        I: IntoIterator<Item = Table>,
    {
        let parts: Vec<Table> = parts.into_iter().filter(|t| !t.columns.is_empty()).collect();

        let mut columns: Vec<String> = Vec::new();
        for part in &parts {
            for c in &part.columns {
                if !columns.contains(c) {
                    columns.push(c.clone());
                }
            }
        }

        let mut out = Table::new(columns);
        for part in parts {
            let mapping: Vec<Option<usize>> =
                out.columns.iter().map(|c| part.column_index(c)).collect();
            for row in part.rows {
                out.rows.push(
                    mapping
                        .iter()
                        .map(|m| m.map(|i| row[i].clone()).unwrap_or(Cell::Null))
                        .collect(),
                );
            }
        }
        out
    }
}

fn key_of(row: &[Cell], key_idx: &[usize]) -> Vec<String> {
    key_idx.iter().map(|&i| row[i].to_string()).collect()
}
