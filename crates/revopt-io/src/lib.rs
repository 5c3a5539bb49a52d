//! # revopt-io: booking ingestion
//!
//! Reads the booking export (CSV) and turns it into cleaned [`Booking`]
//! records:
//!
//! - prices lose their currency decoration and become `f64`
//! - booking and check-in fields become calendar dates
//! - the check-in month becomes the `YYYY-MM` grouping bucket
//! - only rows with status `Booked` survive; every other row is counted
//!   per status in the [`NormalizeReport`]
//!
//! ```rust,no_run
//! use revopt_io::{load_bookings, NormalizeOptions};
//! use std::path::Path;
//!
//! let data = load_bookings(Path::new("merged_data_with_fields.csv"), &NormalizeOptions::default())?;
//! println!("{} bookings, {} dropped", data.bookings.len(), data.report.dropped());
//! # Ok::<(), revopt_core::RevoptError>(())
//! ```
//!
//! [`Booking`]: revopt_core::Booking

pub mod fields;
pub mod loader;
pub mod normalize;

pub use fields::{parse_date, parse_price, parse_timestamp};
pub use loader::{load_raw_bookings, read_raw_bookings, RawBooking};
pub use normalize::{load_bookings, normalize, NormalizeOptions, NormalizeReport, NormalizedDataset};
