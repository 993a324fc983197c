use clap::ValueEnum;
use color_eyre::eyre::{Context, Result};
use itertools::Itertools;
use serde::Serialize;
use vrn_core::series::SeriesGrid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
pub struct ComputedVrn {
    pub vrn: String,
    pub checksum: char,
    pub plate: String,
}

pub fn render_grid(grid: &SeriesGrid, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(&grid.to_records())),
        OutputFormat::Csv => Ok(grid
            .to_records()
            .iter()
            .map(|record| record.join(","))
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(grid).wrap_err("serializing series grid to json")
        }
    }
}

/// Right-aligns every column to its widest cell.
fn render_table(records: &[Vec<String>]) -> String {
    let columns = records.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            records
                .iter()
                .filter_map(|record| record.get(col))
                .map(String::len)
                .max()
                .unwrap_or(0)
        })
        .collect();

    records
        .iter()
        .map(|record| {
            record
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .join(" ")
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrn_core::series::GridSpec;

    fn small_grid() -> SeriesGrid {
        GridSpec {
            series: vec!["SKA".into(), "SKB".into()],
            numbers: vec![1, 10],
        }
        .build()
        .unwrap()
    }

    #[test]
    fn test_csv() {
        let csv = render_grid(&small_grid(), OutputFormat::Csv).unwrap();
        assert_eq!(csv, "Series,1,10\nSKA,L,K\nSKB,G,E");
    }

    #[test]
    fn test_table() {
        let table = render_grid(&small_grid(), OutputFormat::Table).unwrap();
        assert_eq!(table, "Series 1 10\n   SKA L  K\n   SKB G  E");
    }

    #[test]
    fn test_json() {
        let json = render_grid(&small_grid(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"][1]["series"], "SKB");
        assert_eq!(value["rows"][1]["checksums"][1], "E");
    }
}
