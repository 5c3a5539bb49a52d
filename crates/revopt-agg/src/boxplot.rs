use std::collections::BTreeMap;

use revopt_core::{Booking, MonthBucket, Price};
use serde::Serialize;

use crate::stats::quantile;

/// Five-number summary of one (month, room) price distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxGroup {
    pub month: MonthBucket,
    pub room_type: String,
    pub count: usize,
    pub min: Price,
    pub q1: Price,
    pub median: Price,
    pub q3: Price,
    pub max: Price,
    /// Every observed price, ascending
    pub points: Vec<Price>,
}

/// Price spread per month and room, ordered by month then room.
pub fn box_stats(bookings: &[Booking]) -> Vec<BoxGroup> {
    let mut groups: BTreeMap<(MonthBucket, &str), Vec<f64>> = BTreeMap::new();
    for booking in bookings {
        groups
            .entry((booking.month, booking.room_type.as_str()))
            .or_default()
            .push(booking.total_price.value());
    }

    groups
        .into_iter()
        .filter_map(|((month, room), mut prices)| {
            prices.sort_by(f64::total_cmp);
            let q = |p: f64| quantile(&prices, p).map(Price);
            Some(BoxGroup {
                month,
                room_type: room.to_string(),
                count: prices.len(),
                min: q(0.0)?,
                q1: q(0.25)?,
                median: q(0.5)?,
                q3: q(0.75)?,
                max: q(1.0)?,
                points: prices.iter().copied().map(Price).collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking(price: f64, room: &str, m: u32) -> Booking {
        let check_in = NaiveDate::from_ymd_opt(2024, m, 3).unwrap();
        Booking::new(
            Price(price),
            check_in.and_hms_opt(8, 0, 0).unwrap(),
            check_in,
            room,
        )
    }

    #[test]
    fn summarises_each_month_and_room() {
        let bookings = vec![
            booking(900.0, "Standard", 3),
            booking(600.0, "Standard", 3),
            booking(600.0, "Standard", 3),
            booking(4000.0, "Suite", 3),
            booking(800.0, "Standard", 2),
        ];
        let groups = box_stats(&bookings);
        assert_eq!(groups.len(), 3);

        assert_eq!(groups[0].month.to_string(), "2024-02");
        let standard_march = &groups[1];
        assert_eq!(standard_march.room_type, "Standard");
        assert_eq!(standard_march.count, 3);
        assert_eq!(standard_march.min, Price(600.0));
        assert_eq!(standard_march.q1, Price(600.0));
        assert_eq!(standard_march.median, Price(600.0));
        assert_eq!(standard_march.q3, Price(750.0));
        assert_eq!(standard_march.max, Price(900.0));
        assert_eq!(
            standard_march.points,
            vec![Price(600.0), Price(600.0), Price(900.0)]
        );
        assert_eq!(groups[2].room_type, "Suite");
    }
}
