//! Shared error types for the library boundary.

use thiserror::Error;

/// Errors produced when parsing uploaded sample CSV files.
///
/// The scorer and the analysis parser never fail; malformed CSV input is the
/// one place the library reports hard errors instead of degrading, so that
/// broken uploads surface as messages rather than NaN-filled samples.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CsvError {
    /// Input had no header line.
    #[error("CSV input is empty")]
    Empty,

    /// Header names a column the sample model does not have.
    #[error("unknown CSV column '{name}'")]
    UnknownColumn { name: String },

    /// Header is missing all six parameter columns.
    #[error("CSV header contains none of the six parameter columns")]
    NoParameterColumns,

    /// A data row has more or fewer cells than the header.
    #[error("row {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A numeric cell failed to parse.
    #[error("row {line}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    /// A Kategori cell holds an unknown label.
    #[error("row {line}: unknown category '{value}'")]
    InvalidCategory { line: usize, value: String },
}
