//! Check letter tables for runs of VRN series.
//!
//! A grid crosses series prefixes (`SKA`, `SKB`, ...) with plate numbers and
//! holds the check letter of every `{series}{number}` combination.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::{checksum::compute_checksum, error::VrnError};

pub const DEFAULT_SERIES: &[&str] = &[
    "SKA", "SKB", "SKC", "SKD", "SKE", "SKF", "SKG", "SKH", "SKJ", "SKK", "SKL", "SKM", "SKN",
    "SKP", "SKQ", "SKR", "SKS", "SKT", "SKU", "SKV", "SKW", "SKX", "SKZ", "SLA", "SLB", "SLC",
    "SLD", "SLE", "SLF", "SLG", "SLH", "SLJ", "SLK", "SLL", "SLM", "SLN", "SLP", "SLQ", "SLR",
    "SLS", "SLT", "SLU", "SLV", "SLW", "SLX", "SLZ", "SMA", "SMC", "SMD", "SME", "SMF", "SMG",
    "SMH", "SMJ", "SMK", "SML", "SMN", "SMP", "SMQ", "SMR", "SMS",
];

pub const DEFAULT_NUMBERS: &[u32] = &[
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 18, 28, 88, 99, 100, 888, 999, 8888,
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub series: Vec<String>,
    pub numbers: Vec<u32>,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            series: DEFAULT_SERIES.iter().map(|s| s.to_string()).collect(),
            numbers: DEFAULT_NUMBERS.to_vec(),
        }
    }
}

impl GridSpec {
    /// Computes the check letter of every series/number combination.
    ///
    /// Stops at the first series that does not yield a valid VRN.
    pub fn build(&self) -> Result<SeriesGrid, VrnError> {
        let rows = self
            .series
            .iter()
            .map(|series| self.build_row(series))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SeriesGrid {
            numbers: self.numbers.clone(),
            rows,
        })
    }

    fn build_row(&self, series: &str) -> Result<SeriesRow, VrnError> {
        let checksums = self
            .numbers
            .iter()
            .map(|number| compute_checksum(&format!("{series}{number}")))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(series, checksums = %checksums.iter().join(""), "series row");

        Ok(SeriesRow {
            series: series.to_string(),
            checksums,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SeriesRow {
    pub series: String,
    pub checksums: Vec<char>,
}

impl fmt::Display for SeriesRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.series, self.checksums.iter().join(" "))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SeriesGrid {
    pub numbers: Vec<u32>,
    pub rows: Vec<SeriesRow>,
}

impl SeriesGrid {
    pub fn row(&self, series: &str) -> Option<&SeriesRow> {
        self.rows.iter().find(|row| row.series == series)
    }

    /// Worksheet layout: a header row of numbers, then one row per series.
    pub fn to_records(&self) -> Vec<Vec<String>> {
        let header: Vec<String> = std::iter::once("Series".to_string())
            .chain(self.numbers.iter().map(|n| n.to_string()))
            .collect();

        let body = self.rows.iter().map(|row| -> Vec<String> {
            std::iter::once(row.series.clone())
                .chain(row.checksums.iter().map(|c| c.to_string()))
                .collect()
        });

        std::iter::once(header).chain(body).collect()
    }
}
