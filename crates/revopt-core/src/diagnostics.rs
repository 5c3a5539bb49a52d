//! What the loader did with rows it did not keep.
//!
//! Malformed rows skipped under `skip_invalid_rows` and well-formed rows
//! filtered out by status are both recorded, so nothing vanishes silently.
//!
//! ```
//! use revopt_core::diagnostics::{Diagnostics, RowProblem};
//!
//! let mut diag = Diagnostics::new();
//! diag.record_dropped("Cancelled", 12);
//! diag.record_rejected(7, RowProblem::Price, "price 'n/a' has no digits");
//!
//! assert_eq!(diag.rejected_count(), 1);
//! assert_eq!(diag.summary(), "1 rejected row, 12 dropped by status");
//! ```

use std::fmt;

use serde::Serialize;

/// Which field made a row unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowProblem {
    Price,
    BookedAt,
    CheckIn,
}

impl RowProblem {
    pub fn column(self) -> &'static str {
        match self {
            RowProblem::Price => "Total price",
            RowProblem::BookedAt => "Booked At",
            RowProblem::CheckIn => "Check - In",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadIssue {
    /// Malformed row at a 1-based data line
    Rejected {
        line: usize,
        problem: RowProblem,
        message: String,
    },
    /// Rows whose status is not `Booked`
    Dropped { status: String, count: usize },
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadIssue::Rejected {
                line,
                problem,
                message,
            } => write!(f, "line {line}: bad '{}': {message}", problem.column()),
            LoadIssue::Dropped { status, count } => {
                write!(f, "dropped {count} row(s) with status '{status}'")
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<LoadIssue>,
}

fn plural(n: usize, word: &str) -> String {
    format!("{n} {word}{}", if n == 1 { "" } else { "s" })
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_rejected(&mut self, line: usize, problem: RowProblem, message: impl Into<String>) {
        self.issues.push(LoadIssue::Rejected {
            line,
            problem,
            message: message.into(),
        });
    }

    pub fn record_dropped(&mut self, status: impl Into<String>, count: usize) {
        self.issues.push(LoadIssue::Dropped {
            status: status.into(),
            count,
        });
    }

    pub fn rejected(&self) -> impl Iterator<Item = &LoadIssue> {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, LoadIssue::Rejected { .. }))
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected().count()
    }

    /// Data lines rejected for one kind of problem.
    pub fn rejected_lines(&self, wanted: RowProblem) -> Vec<usize> {
        self.issues
            .iter()
            .filter_map(|issue| match issue {
                LoadIssue::Rejected { line, problem, .. } if *problem == wanted => Some(*line),
                _ => None,
            })
            .collect()
    }

    pub fn dropped_count(&self) -> usize {
        self.issues
            .iter()
            .map(|issue| match issue {
                LoadIssue::Dropped { count, .. } => *count,
                LoadIssue::Rejected { .. } => 0,
            })
            .sum()
    }

    pub fn summary(&self) -> String {
        match (self.rejected_count(), self.dropped_count()) {
            (0, 0) => "all rows kept".to_string(),
            (r, 0) => plural(r, "rejected row"),
            (0, d) => format!("{d} dropped by status"),
            (r, d) => format!("{}, {d} dropped by status", plural(r, "rejected row")),
        }
    }
}
