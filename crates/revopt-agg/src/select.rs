//! Lookups behind the room/month selectors and the simulator inputs.

use std::collections::{BTreeSet, HashSet};

use revopt_core::{Booking, MonthBucket, Price};

use crate::tables::PriceComparisonRow;

/// Distinct room types in the order they first appear.
pub fn room_types(bookings: &[Booking]) -> Vec<String> {
    let mut seen = HashSet::new();
    bookings
        .iter()
        .filter(|b| seen.insert(b.room_type.as_str()))
        .map(|b| b.room_type.clone())
        .collect()
}

/// Months with at least one booking for `room_type`, ascending.
pub fn months_for_room(bookings: &[Booking], room_type: &str) -> Vec<MonthBucket> {
    bookings
        .iter()
        .filter(|b| b.room_type == room_type)
        .map(|b| b.month)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Number of bookings in the (room, month) bucket.
pub fn baseline_bookings(bookings: &[Booking], room_type: &str, month: MonthBucket) -> usize {
    bookings
        .iter()
        .filter(|b| b.in_bucket(room_type, month))
        .count()
}

pub fn recommended_price_for(
    comparison: &[PriceComparisonRow],
    room_type: &str,
    month: MonthBucket,
) -> Option<Price> {
    comparison
        .iter()
        .find(|row| row.room_type == room_type && row.month == month)
        .map(|row| row.recommended_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking(room: &str, m: u32) -> Booking {
        let check_in = NaiveDate::from_ymd_opt(2024, m, 1).unwrap();
        Booking::new(
            Price(1000.0),
            check_in.and_hms_opt(0, 0, 0).unwrap(),
            check_in,
            room,
        )
    }

    #[test]
    fn rooms_in_first_seen_order() {
        let bookings = vec![
            booking("Suite", 1),
            booking("Deluxe", 1),
            booking("Suite", 2),
            booking("Standard", 1),
        ];
        assert_eq!(room_types(&bookings), ["Suite", "Deluxe", "Standard"]);
    }

    #[test]
    fn months_sorted_and_unique() {
        let bookings = vec![
            booking("Suite", 3),
            booking("Suite", 1),
            booking("Deluxe", 2),
            booking("Suite", 3),
        ];
        let months: Vec<String> = months_for_room(&bookings, "Suite")
            .iter()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(months, ["2024-01", "2024-03"]);
        assert!(months_for_room(&bookings, "Penthouse").is_empty());
    }

    #[test]
    fn baseline_counts_bucket_rows() {
        let bookings = vec![booking("Suite", 3), booking("Suite", 3), booking("Suite", 4)];
        let march: MonthBucket = "2024-03".parse().unwrap();
        assert_eq!(baseline_bookings(&bookings, "Suite", march), 2);
        assert_eq!(baseline_bookings(&bookings, "Deluxe", march), 0);
    }

    #[test]
    fn recommended_lookup_misses_cleanly() {
        let march: MonthBucket = "2024-03".parse().unwrap();
        let rows = vec![PriceComparisonRow {
            room_type: "Suite".into(),
            month: march,
            current_price: Price(3100.0),
            recommended_price: Price(3000.0),
        }];
        assert_eq!(recommended_price_for(&rows, "Suite", march), Some(Price(3000.0)));
        assert_eq!(recommended_price_for(&rows, "Deluxe", march), None);
    }
}
