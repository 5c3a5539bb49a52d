//! # revopt-core: booking domain model and demand simulation
//!
//! Shared types for the revenue-optimization pipeline:
//!
//! ```text
//! load -> normalize -> aggregate -> simulate
//! ```
//!
//! - [`Booking`] - a cleaned, confirmed reservation
//! - [`MonthBucket`] / [`BucketKey`] - the (room category, month) grouping keys
//! - [`Price`] / [`Revenue`] - THB amounts
//! - [`simulate`] - constant-elasticity what-if simulation
//! - [`RevoptError`] - unified error type
//! - [`diagnostics::Diagnostics`] - rows skipped or dropped during loading
//!
//! ```
//! use revopt_core::{simulate, Price, DEFAULT_ELASTICITY};
//!
//! let outcome = simulate(Price(1000.0), Price(1000.0), 10, DEFAULT_ELASTICITY).unwrap();
//! assert_eq!(outcome.predicted_bookings, 10.0);
//! ```

pub mod booking;
pub mod diagnostics;
pub mod error;
pub mod price;
pub mod simulate;

pub use booking::{Booking, BookingStatus, BucketKey, MonthBucket};
pub use diagnostics::{Diagnostics, LoadIssue, RowProblem};
pub use error::{RevoptError, RevoptResult};
pub use price::{format_thb, group_thousands, Price, Revenue};
pub use simulate::{simulate, DemandModel, SimulationOutcome, DEFAULT_ELASTICITY};
