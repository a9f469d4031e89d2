// src/dataset.rs
//
// Typed, ordered in-memory table handed from the scrapers to the exporters.
//
// - Columns are fixed per page kind and versioned (see `schema_version`).
// - Cells are nullable; `Null` renders as an empty field on export.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    Float,
    Text,
    Date,
    Time,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self { name: name.into(), kind }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl From<Option<i64>> for Cell {
    fn from(v: Option<i64>) -> Self {
        v.map_or(Cell::Null, Cell::Int)
    }
}

impl From<Option<f64>> for Cell {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Cell::Null, Cell::Float)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Int(v) => write!(f, "{v}"),
            // Always show the decimal so 188.0 stays visibly metric
            Cell::Float(v) => write!(f, "{v:?}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Cell::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataSet {
    pub schema_version: u32,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl DataSet {
    pub fn new(schema_version: u32, columns: Vec<Column>) -> Self {
        Self { schema_version, columns, rows: Vec::new() }
    }

    /// Appends a row. The row must match the column count.
    pub fn push(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len(), "row width does not match schema");
        self.rows.push(row);
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Cell by row index and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let ix = self.column_index(column)?;
        self.rows.get(row)?.get(ix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataSet {
        let mut ds = DataSet::new(1, vec![
            Column::new("Name", ColumnKind::Text),
            Column::new("Height", ColumnKind::Float),
            Column::new("Age", ColumnKind::Int),
        ]);
        ds.push(vec![Cell::Text(s!("A")), Cell::Float(188.0), Cell::Int(34)]);
        ds.push(vec![Cell::Text(s!("B")), Cell::Null, Cell::from(None::<i64>)]);
        ds
    }

    #[test]
    fn lookup_by_name() {
        let ds = sample();
        assert_eq!(ds.column_index("Age"), Some(2));
        assert_eq!(ds.get(0, "Height"), Some(&Cell::Float(188.0)));
        assert_eq!(ds.get(1, "Age"), Some(&Cell::Null));
        assert_eq!(ds.get(2, "Age"), None);
        assert_eq!(ds.get(0, "Reach"), None);
    }

    #[test]
    fn rendering() {
        let ds = sample();
        let rendered: Vec<Vec<String>> = ds
            .rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        assert_eq!(rendered, vec![
            vec![s!("A"), s!("188.0"), s!("34")],
            vec![s!("B"), s!(""), s!("")],
        ]);

        let d = NaiveDate::from_ymd_opt(2024, 6, 29).unwrap();
        let t = NaiveTime::from_hms_opt(0, 4, 32).unwrap();
        assert_eq!(Cell::Date(d).to_string(), "2024-06-29");
        assert_eq!(Cell::Time(t).to_string(), "00:04:32");
        assert_eq!(Cell::Float(83.9).to_string(), "83.9");
    }
}
