use revopt_core::{Price, RevoptError, RowProblem};
use revopt_io::{load_bookings, NormalizeOptions};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join(relative)
}

#[test]
fn fixture_loads_booked_rows_only() {
    let data = load_bookings(
        &repo_path("test_data/bookings.csv"),
        &NormalizeOptions::default(),
    )
    .unwrap();

    assert_eq!(data.report.total_rows, 16);
    assert_eq!(data.report.retained, 13);
    assert_eq!(data.report.dropped(), 3);
    assert_eq!(data.report.dropped_by_status.get("Cancelled"), Some(&2));
    assert_eq!(data.report.dropped_by_status.get("No-show"), Some(&1));
    assert!(data.bookings.iter().all(|b| b.room_type != "Penthouse"));
    assert!(data
        .bookings
        .iter()
        .all(|b| b.total_price != Price(5000.0) && b.total_price != Price(450.0)));
}

#[test]
fn fixture_prices_are_cleaned() {
    let data = load_bookings(
        &repo_path("test_data/bookings.csv"),
        &NormalizeOptions::default(),
    )
    .unwrap();
    let first = &data.bookings[0];
    assert_eq!(first.room_type, "Deluxe");
    assert_eq!(first.total_price, Price(1000.0));
    assert_eq!(first.month.to_string(), "2024-01");
}

#[test]
fn bad_price_fails_the_load_by_default() {
    let err = load_bookings(
        &repo_path("test_data/bookings_bad_price.csv"),
        &NormalizeOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, RevoptError::Parse(_)));
    assert!(err.to_string().contains("TBD"));
}

#[test]
fn bad_price_can_be_skipped() {
    let data = load_bookings(
        &repo_path("test_data/bookings_bad_price.csv"),
        &NormalizeOptions {
            skip_invalid_rows: true,
        },
    )
    .unwrap();
    assert_eq!(data.bookings.len(), 2);
    assert_eq!(data.report.rejected, 1);
    assert_eq!(data.report.diagnostics.rejected_lines(RowProblem::Price), [2]);
}

#[test]
fn header_only_file_is_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(
        &path,
        "Total price,Booked At,Check - In,Booking status,Room_room\n",
    )
    .unwrap();
    let data = load_bookings(&path, &NormalizeOptions::default()).unwrap();
    assert!(data.bookings.is_empty());
    assert_eq!(data.report.total_rows, 0);
}
