use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use revopt_core::{RevoptError, RevoptResult};
use serde::Deserialize;
use tracing::debug;

/// One row of the booking export, exactly as it appears in the file.
///
/// Columns not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawBooking {
    #[serde(rename = "Total price")]
    pub total_price: String,
    #[serde(rename = "Booked At")]
    pub booked_at: String,
    #[serde(rename = "Check - In")]
    pub check_in: String,
    #[serde(rename = "Booking status")]
    pub booking_status: String,
    #[serde(rename = "Room_room")]
    pub room: String,
}

/// Read every data row from `path`.
pub fn load_raw_bookings(path: &Path) -> RevoptResult<Vec<RawBooking>> {
    let file = File::open(path)
        .with_context(|| format!("opening booking file {}", path.display()))?;
    let rows = read_raw_bookings(file)?;
    debug!(path = %path.display(), rows = rows.len(), "loaded raw bookings");
    Ok(rows)
}

pub fn read_raw_bookings<R: Read>(reader: R) -> RevoptResult<Vec<RawBooking>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<RawBooking>().enumerate() {
        let row = result.map_err(|err| {
            RevoptError::Parse(format!("reading data line {}: {err}", idx + 1))
        })?;
        rows.push(row);
    }
    Ok(rows)
}
