use std::collections::BTreeMap;
use std::path::Path;

use revopt_core::{Booking, BookingStatus, Diagnostics, RevoptError, RevoptResult, RowProblem};
use serde::Serialize;
use tracing::{info, warn};

use crate::fields::{parse_date, parse_price, parse_timestamp};
use crate::loader::{load_raw_bookings, RawBooking};

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Record malformed rows as diagnostics and keep going instead of
    /// failing the whole load.
    pub skip_invalid_rows: bool,
}

/// What happened to every input row.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizeReport {
    pub total_rows: usize,
    pub retained: usize,
    /// Rows dropped because their status is not `Booked`, keyed by status.
    pub dropped_by_status: BTreeMap<String, usize>,
    /// Malformed rows skipped under `skip_invalid_rows`.
    pub rejected: usize,
    pub diagnostics: Diagnostics,
}

impl NormalizeReport {
    pub fn dropped(&self) -> usize {
        self.dropped_by_status.values().sum()
    }
}

#[derive(Debug, Clone)]
pub struct NormalizedDataset {
    pub bookings: Vec<Booking>,
    pub report: NormalizeReport,
}

/// Clean raw rows into confirmed bookings.
///
/// Price and dates are parsed before the status filter, so a malformed
/// row fails the load even when it would have been dropped.
pub fn normalize(raw: &[RawBooking], options: &NormalizeOptions) -> RevoptResult<NormalizedDataset> {
    let mut report = NormalizeReport {
        total_rows: raw.len(),
        ..NormalizeReport::default()
    };
    let mut bookings = Vec::with_capacity(raw.len());

    for (idx, row) in raw.iter().enumerate() {
        let line = idx + 1;
        let (booking, status) = match clean_row(row) {
            Ok(cleaned) => cleaned,
            Err((problem, err)) => {
                if !options.skip_invalid_rows {
                    return Err(RevoptError::Parse(format!("data line {line}: {err}")));
                }
                warn!(line, %err, "skipping malformed booking row");
                report
                    .diagnostics
                    .record_rejected(line, problem, err.to_string());
                report.rejected += 1;
                continue;
            }
        };

        if status.is_booked() {
            bookings.push(booking);
        } else {
            *report
                .dropped_by_status
                .entry(status.as_str().to_string())
                .or_insert(0) += 1;
        }
    }

    report.retained = bookings.len();
    for (status, count) in &report.dropped_by_status {
        report.diagnostics.record_dropped(status.as_str(), *count);
    }

    info!(
        total = report.total_rows,
        retained = report.retained,
        dropped = report.dropped(),
        rejected = report.rejected,
        "normalized bookings"
    );

    Ok(NormalizedDataset { bookings, report })
}

fn clean_row(row: &RawBooking) -> Result<(Booking, BookingStatus), (RowProblem, RevoptError)> {
    let price = parse_price(&row.total_price).map_err(|e| (RowProblem::Price, e))?;
    let booked_at = parse_timestamp(&row.booked_at).map_err(|e| (RowProblem::BookedAt, e))?;
    let check_in = parse_date(&row.check_in).map_err(|e| (RowProblem::CheckIn, e))?;
    let status = BookingStatus::parse(&row.booking_status);
    Ok((Booking::new(price, booked_at, check_in, row.room.clone()), status))
}

/// Load and normalize in one step.
pub fn load_bookings(path: &Path, options: &NormalizeOptions) -> RevoptResult<NormalizedDataset> {
    let raw = load_raw_bookings(path)?;
    normalize(&raw, options)
}
