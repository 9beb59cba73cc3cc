//! Main validation engine.
//!
//! This module provides the `Checker`, which reads a delimited source row by
//! row, checks every row's shape against the first row and runs the bound
//! column validators over well-shaped data rows.

use crate::source::SourceTracker;
use csv::{ReaderBuilder, StringRecord};
use rowcheck_core::{
    CheckError, CheckReport, CheckStats, CheckerConfig, Column, ColumnError, Defect, Result,
    RowError,
};
use std::io::Read;
use std::time::Instant;
use tracing::{debug, info};

/// Validation engine for delimited text.
///
/// Holds the configuration and the ordered list of column bindings. A check
/// is total: every defect in the source is reported, and no single defect
/// stops the remaining rows from being checked.
///
/// # Example
///
/// ```rust
/// use rowcheck_core::Column;
/// use rowcheck_validator::{Checker, Range};
///
/// let mut checker = Checker::new(',', true);
/// checker.add_column(Column::new(1, Range::new(0.0, 150.0)));
///
/// let csv = "name,age\nAda,36\nBob,200\nEve\n";
/// let defects = checker.check(csv.as_bytes()).unwrap();
///
/// for defect in &defects {
///     println!("{}", defect);
/// }
/// assert_eq!(defects.len(), 2);
/// ```
#[derive(Debug)]
pub struct Checker {
    config: CheckerConfig,
    columns: Vec<Column>,
}

impl Checker {
    /// Creates a new checker with no column bindings.
    ///
    /// # Arguments
    ///
    /// * `separator` - Field separator
    /// * `with_header` - Whether the first row is a header
    pub fn new(separator: char, with_header: bool) -> Self {
        Self::with_config(CheckerConfig::new(separator, with_header))
    }

    /// Creates a new checker from an existing configuration.
    pub fn with_config(config: CheckerConfig) -> Self {
        Self {
            config,
            columns: Vec::new(),
        }
    }

    /// The configuration this checker runs with.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Registered column bindings, in registration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Appends a column binding.
    ///
    /// The index is not checked against any row width here; see
    /// [`Checker::validate_layout`].
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Appends a column binding, builder style.
    pub fn column(mut self, column: Column) -> Self {
        self.add_column(column);
        self
    }

    /// Verifies that every binding addresses a field of rows `width` wide.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::ColumnOutOfRange` for the first binding whose
    /// index is not below `width`.
    pub fn validate_layout(&self, width: usize) -> Result<()> {
        match self.columns.iter().find(|c| c.index() >= width) {
            Some(column) => Err(CheckError::column_out_of_range(column.index(), width)),
            None => Ok(()),
        }
    }

    /// Checks a source and returns every defect found.
    ///
    /// This is the main entry point. The source is read once, front to back.
    /// An empty vector means the source is fully valid.
    ///
    /// # Errors
    ///
    /// Returns a `CheckError` when the source cannot be read or decoded, when
    /// a quoted field is never closed, or when the checker is misconfigured.
    /// No partial result is returned in that case.
    pub fn check<R: Read>(&self, source: R) -> Result<Vec<Defect>> {
        Ok(self.check_report(source)?.defects)
    }

    /// Checks a source and returns the defects together with run statistics.
    pub fn check_report<R: Read>(&self, source: R) -> Result<CheckReport> {
        let start = Instant::now();
        let delimiter = self.config.delimiter()?;
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(SourceTracker::new(source, delimiter));

        let mut record = StringRecord::new();
        let mut defects: Vec<Defect> = Vec::new();
        let mut stats = CheckStats::default();
        let mut reference_width: Option<usize> = None;

        while reader.read_record(&mut record).map_err(read_error)? {
            stats.rows_read += 1;
            let end = reader.position().clone();
            let newline_consumed = end.byte() > 0 && reader.get_mut().newline_at(end.byte() - 1);
            let line = record_line(&record, end.line(), newline_consumed);
            let width = record.len();

            let expected = match reference_width {
                Some(expected) => expected,
                None => {
                    self.validate_layout(width)?;
                    reference_width = Some(width);
                    debug!("Reference width {} set by line {}", width, line);
                    if self.config.with_header() {
                        continue;
                    }
                    width
                }
            };

            if width != expected {
                debug!(
                    "Line {}: expected {} fields, found {}",
                    line, expected, width
                );
                stats.rows_skipped += 1;
                defects.push(RowError::new(line, expected, width).into());
                continue;
            }

            stats.rows_validated += 1;
            self.validate_row(&record, line, &mut stats, &mut defects)?;
        }

        if let Some(line) = reader.get_ref().open_quote_line() {
            return Err(CheckError::parse(Some(line), "quoted field is never closed"));
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Checked {} rows: {} defects found",
            stats.rows_read,
            defects.len()
        );

        Ok(CheckReport::new(defects, stats))
    }

    /// Runs every binding over one well-shaped row.
    fn validate_row(
        &self,
        record: &StringRecord,
        line: u64,
        stats: &mut CheckStats,
        defects: &mut Vec<Defect>,
    ) -> Result<()> {
        for column in &self.columns {
            let value = record
                .get(column.index())
                .ok_or_else(|| CheckError::column_out_of_range(column.index(), record.len()))?;

            stats.validator_calls += 1;
            if let Err(failure) = column.validator().validate(value) {
                debug!(
                    "Line {}, column {}: {} rejected value: {}",
                    line,
                    column.index(),
                    column.validator().name(),
                    failure
                );
                defects.push(ColumnError::new(line, column.index(), failure).into());
            }
        }

        Ok(())
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::with_config(CheckerConfig::default())
    }
}

/// Physical line a record starts on.
///
/// The reader's line after a record counts the newlines embedded in quoted
/// fields and the record's own `\n` terminator, when it was consumed. Leading
/// terminators skipped before the record are already behind its first byte.
fn record_line(record: &StringRecord, line_after: u64, newline_consumed: bool) -> u64 {
    let embedded: u64 = record
        .iter()
        .map(|field| field.bytes().filter(|&b| b == b'\n').count() as u64)
        .sum();
    line_after
        .saturating_sub(embedded)
        .saturating_sub(u64::from(newline_consumed))
}

/// Maps a reader failure to the fatal parse error.
fn read_error(err: csv::Error) -> CheckError {
    let line = err.position().map(|p| p.line());
    CheckError::parse(line, err.to_string())
}
