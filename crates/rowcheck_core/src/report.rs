//! Check reports.
//!
//! A report wraps the defect list of a check with statistics about the run.

use crate::Defect;
use serde::Serialize;

/// Outcome of checking one source.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Whether no defect was found
    pub passed: bool,

    /// Defects in the order rows and columns were processed
    pub defects: Vec<Defect>,

    /// Run statistics
    pub stats: CheckStats,
}

/// Statistics about a check run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckStats {
    /// Number of rows read, header included
    pub rows_read: usize,

    /// Number of rows whose fields went through the bound validators
    pub rows_validated: usize,

    /// Number of rows skipped because of a shape error
    pub rows_skipped: usize,

    /// Number of validator invocations
    pub validator_calls: usize,

    /// Check duration in milliseconds
    pub duration_ms: u64,
}

impl CheckReport {
    /// Creates a report from the defects found and the run statistics.
    pub fn new(defects: Vec<Defect>, stats: CheckStats) -> Self {
        Self {
            passed: defects.is_empty(),
            defects,
            stats,
        }
    }

    /// Number of shape errors in the report.
    pub fn shape_count(&self) -> usize {
        self.defects.iter().filter(|d| d.is_shape()).count()
    }

    /// Number of content errors in the report.
    pub fn content_count(&self) -> usize {
        self.defects.iter().filter(|d| d.is_content()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnError, RowError, ValidationFailure};

    #[test]
    fn test_empty_report_passes() {
        let report = CheckReport::new(Vec::new(), CheckStats::default());
        assert!(report.passed);
        assert_eq!(report.shape_count(), 0);
        assert_eq!(report.content_count(), 0);
    }

    #[test]
    fn test_report_counts_by_kind() {
        let defects = vec![
            RowError::new(3, 3, 4).into(),
            ColumnError::new(4, 0, ValidationFailure::new("empty")).into(),
            ColumnError::new(4, 2, ValidationFailure::new("not a number")).into(),
        ];
        let report = CheckReport::new(defects, CheckStats::default());

        assert!(!report.passed);
        assert_eq!(report.shape_count(), 1);
        assert_eq!(report.content_count(), 2);
    }
}
