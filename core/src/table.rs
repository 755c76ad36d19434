//! In-memory data table loaded from the participant CSV.
//!
//! RULE: The table is read-only once loaded. Every analysis borrows it,
//! nothing mutates it. Columns are resolved by name on first use, so a
//! missing column fails only the analysis that references it.

use crate::{
    error::{ReportError, ReportResult},
    stats::Aggregate,
    types::{columns::SCHEMA, Cell, RowIndex},
};
use std::{cmp::Ordering, collections::BTreeMap, fmt, io::Read, path::Path};

pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

impl DataTable {
    /// Load a CSV file. Fails if the file is absent or malformed.
    pub fn from_path(path: impl AsRef<Path>) -> ReportResult<Self> {
        let path = path.as_ref();
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| ReportError::DatasetOpen {
                path: path.display().to_string(),
                source,
            })?;
        let table = Self::from_csv_reader(reader)?;
        log::info!(
            "loaded {} rows x {} columns from {}",
            table.len(),
            table.headers.len(),
            path.display()
        );
        Ok(table)
    }

    /// Load CSV text from any reader. Used by tests and piped input.
    pub fn from_reader<R: Read>(rdr: R) -> ReportResult<Self> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(rdr);
        Self::from_csv_reader(reader)
    }

    fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>) -> ReportResult<Self> {
        let headers = reader
            .headers()?
            .iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;

        let table = Self { headers, rows };
        let missing = table.missing_schema_columns();
        if !missing.is_empty() {
            log::warn!("dataset is missing expected columns: {}", missing.join(", "));
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Canonical schema columns absent from the header.
    pub fn missing_schema_columns(&self) -> Vec<&'static str> {
        SCHEMA
            .iter()
            .copied()
            .filter(|c| !self.has_column(c))
            .collect()
    }

    pub fn column_index(&self, name: &str) -> ReportResult<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ReportError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// Raw text cells of a column, one per row.
    pub fn text_column(&self, name: &str) -> ReportResult<Vec<&str>> {
        let idx = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|r| r.get(idx).unwrap_or_default())
            .collect())
    }

    /// Numeric cells of a column. Empty cells (and `NaN`) are missing values.
    pub fn numeric_column(&self, name: &str) -> ReportResult<Vec<Cell>> {
        self.text_column(name)?
            .into_iter()
            .enumerate()
            .map(|(row, raw)| parse_cell(name, row, raw))
            .collect()
    }

    /// Partition every row by the value of `key`.
    pub fn group_by(&self, key: &str) -> ReportResult<Grouping> {
        let all: Vec<RowIndex> = (0..self.len()).collect();
        self.group_rows_by(key, &all)
    }

    /// Partition a subset of rows by the value of `key`.
    ///
    /// Key typing is inferred from the whole column, not the subset, so a
    /// filtered grouping orders its keys the same way an unfiltered one would.
    pub fn group_rows_by(&self, key: &str, rows: &[RowIndex]) -> ReportResult<Grouping> {
        let cells = self.text_column(key)?;
        let numeric = cells
            .iter()
            .filter(|c| !c.is_empty())
            .all(|c| c.parse::<f64>().is_ok());

        let mut groups: BTreeMap<GroupKey, Vec<RowIndex>> = BTreeMap::new();
        for &row in rows {
            let raw = cells[row];
            if raw.is_empty() {
                continue;
            }
            let key = match raw.parse::<f64>() {
                Ok(n) if numeric && !n.is_nan() => GroupKey::Number(n),
                Ok(_) if numeric => continue,
                _ => GroupKey::Text(raw.to_string()),
            };
            groups.entry(key).or_default().push(row);
        }

        log::debug!("group_by {key}: {} rows -> {} groups", rows.len(), groups.len());
        Ok(Grouping { groups })
    }
}

fn parse_cell(column: &str, row: RowIndex, raw: &str) -> ReportResult<Cell> {
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_nan() => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(ReportError::InvalidNumber {
            column: column.to_string(),
            row,
            value: raw.to_string(),
        }),
    }
}

// ── Grouping ─────────────────────────────────────────────────────────────────

/// A grouping key. Numeric keys sort numerically and before text keys.
#[derive(Debug, Clone)]
pub enum GroupKey {
    Number(f64),
    Text(String),
}

impl GroupKey {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for GroupKey {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for GroupKey {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Rows partitioned by key, in ascending key order.
#[derive(Debug, Clone)]
pub struct Grouping {
    groups: BTreeMap<GroupKey, Vec<RowIndex>>,
}

impl Grouping {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.groups.keys()
    }

    /// Reduce a value column per group. Output is aligned with `keys()`.
    pub fn reduce(&self, values: &[Cell], agg: Aggregate) -> Vec<f64> {
        self.groups
            .values()
            .map(|rows| agg.apply(rows.iter().map(|&r| values[r])))
            .collect()
    }
}
