// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use ufc_scrape::config::options::{AppOptions, ExportFormat, PageKind};
use ufc_scrape::dataset::{Cell, Column, ColumnKind, DataSet};
use ufc_scrape::file::{ensure_directory, export_dataset};
use ufc_scrape::scrape::fighters::{fighter_columns, FIGHTER_SCHEMA_VERSION};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ufc_e2e_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    p
}

fn fighters() -> DataSet {
    let mut ds = DataSet::new(FIGHTER_SCHEMA_VERSION, fighter_columns());
    let mut row = vec![Cell::Null; ds.columns.len()];
    row[0] = Cell::Text("Jones, Jon".into());
    row[1] = Cell::Int(27);
    row[5] = Cell::Float(193.0);
    row[8] = Cell::Text("Orthodox".into());
    ds.push(row);
    ds
}

#[test]
fn csv_lands_in_nested_output_dir() {
    let mut opts = AppOptions::default();
    let dir = tmp_dir("csv").join("nested");
    opts.export.dir = dir.clone();

    let written = export_dataset(&opts.export, PageKind::Fighters, &fighters()).unwrap();
    assert_eq!(written, dir.join("fighters.csv"));

    let s = fs::read_to_string(&written).unwrap();
    let mut lines = s.lines();
    assert_eq!(
        lines.next(),
        Some("Fullname,Win,Loss,Draw,Age,Height,Weight,Reach,Stance,SLpM,Str.Acc.%,SApM,Str.Def%,TDAvg.,TDAcc.%,TDDef.%,Sub.Avg.")
    );
    assert_eq!(lines.next(), Some("\"Jones, Jon\",27,,,,193.0,,,Orthodox,,,,,,,,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn tsv_without_headers() {
    let mut opts = AppOptions::default();
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = false;
    opts.export.dir = tmp_dir("tsv");

    let mut ds = DataSet::new(1, vec![
        Column::new("f1_fullname", ColumnKind::Text),
        Column::new("f1_rnd5_kd", ColumnKind::Text),
    ]);
    ds.push(vec![Cell::Text("Jones, Jon".into()), Cell::Text("---".into())]);

    let written = export_dataset(&opts.export, PageKind::Bouts, &ds).unwrap();
    assert!(written.to_string_lossy().ends_with("bouts.tsv"));
    assert_eq!(fs::read_to_string(&written).unwrap(), "Jones, Jon\t---\n");
}

#[test]
fn rerun_overwrites_previous_export() {
    let mut opts = AppOptions::default();
    opts.export.dir = tmp_dir("overwrite");

    export_dataset(&opts.export, PageKind::Fighters, &fighters()).unwrap();
    let empty = DataSet::new(FIGHTER_SCHEMA_VERSION, fighter_columns());
    let written = export_dataset(&opts.export, PageKind::Fighters, &empty).unwrap();
    assert_eq!(fs::read_to_string(&written).unwrap().lines().count(), 1);
}

#[test]
fn file_in_place_of_directory_is_an_error() {
    let base = tmp_dir("notadir");
    fs::create_dir_all(&base).unwrap();
    let file = base.join("data");
    fs::write(&file, "x").unwrap();

    assert!(ensure_directory(&file).is_err());

    let mut opts = AppOptions::default();
    opts.export.dir = file;
    assert!(export_dataset(&opts.export, PageKind::Bouts, &fighters()).is_err());
}
