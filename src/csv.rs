// src/csv.rs
use std::io::{self, Write};

use crate::dataset::DataSet;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stream a whole dataset: optional header line, then one line per row.
/// Null cells are written as empty fields.
pub fn write_dataset<W: Write>(mut w: W, ds: &DataSet, include_headers: bool, sep: char) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &ds.headers(), sep)?;
    }
    for row in &ds.rows {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        write_row(&mut w, &cells, sep)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Cell, Column, ColumnKind};

    fn sample() -> DataSet {
        let mut ds = DataSet::new(1, vec![
            Column::new("f1_fullname", ColumnKind::Text),
            Column::new("f1_nickname", ColumnKind::Text),
            Column::new("round", ColumnKind::Int),
        ]);
        ds.push(vec![Cell::Text(s!("Jones, Jon")), Cell::Text(s!("Bones")), Cell::Int(5)]);
        ds.push(vec![Cell::Text(s!("Said \"Hi\"")), Cell::Null, Cell::Int(1)]);
        ds
    }

    fn to_export_string(ds: &DataSet, include_headers: bool, sep: char) -> String {
        let mut buf: Vec<u8> = Vec::new();
        write_dataset(&mut buf, ds, include_headers, sep).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn csv_quotes_only_when_needed() {
        assert_eq!(
            to_export_string(&sample(), true, ','),
            "f1_fullname,f1_nickname,round\n\"Jones, Jon\",Bones,5\n\"Said \"\"Hi\"\"\",,1\n"
        );
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        assert_eq!(
            to_export_string(&sample(), false, '\t'),
            "Jones, Jon\tBones\t5\n\"Said \"\"Hi\"\"\"\t\t1\n"
        );
    }
}
