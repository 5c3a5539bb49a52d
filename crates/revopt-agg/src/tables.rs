use std::collections::BTreeMap;

use revopt_core::{Booking, BucketKey, MonthBucket, Price, Revenue};
use serde::Serialize;
use tracing::debug;

use crate::boxplot::{box_stats, BoxGroup};
use crate::stats::{mean, median};

/// Price quantized to whole satang (1/100 THB).
///
/// Grouping on this key keeps `1999.99999999` and `2000.0` in one bucket,
/// which raw `f64` equality would split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriceKey(i64);

impl PriceKey {
    pub fn from_price(price: Price) -> Self {
        PriceKey((price.value() * 100.0).round() as i64)
    }

    pub fn price(self) -> Price {
        Price(self.0 as f64 / 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueByPriceRow {
    pub price: Price,
    pub bookings: usize,
    pub total_revenue: Revenue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceComparisonRow {
    pub room_type: String,
    pub month: MonthBucket,
    /// Mean of the bucket's prices
    pub current_price: Price,
    /// Median of the bucket's prices
    pub recommended_price: Price,
}

/// Booking count and revenue per distinct price, ascending by price.
pub fn revenue_by_price(bookings: &[Booking]) -> Vec<RevenueByPriceRow> {
    let mut groups: BTreeMap<PriceKey, (usize, Revenue)> = BTreeMap::new();
    for booking in bookings {
        let entry = groups
            .entry(PriceKey::from_price(booking.total_price))
            .or_insert((0, Revenue(0.0)));
        entry.0 += 1;
        entry.1 = entry.1 + Revenue::from(booking.total_price);
    }

    groups
        .into_iter()
        .map(|(key, (count, revenue))| RevenueByPriceRow {
            price: key.price(),
            bookings: count,
            total_revenue: revenue,
        })
        .collect()
}

fn prices_by_bucket(bookings: &[Booking]) -> BTreeMap<BucketKey, Vec<f64>> {
    let mut buckets: BTreeMap<BucketKey, Vec<f64>> = BTreeMap::new();
    for booking in bookings {
        buckets
            .entry(booking.key())
            .or_default()
            .push(booking.total_price.value());
    }
    buckets
}

/// Median price per (room, month).
pub fn recommended_prices(bookings: &[Booking]) -> BTreeMap<BucketKey, Price> {
    prices_by_bucket(bookings)
        .into_iter()
        .filter_map(|(key, prices)| median(&prices).map(|m| (key, Price(m))))
        .collect()
}

/// Mean price per (room, month).
pub fn current_prices(bookings: &[Booking]) -> BTreeMap<BucketKey, Price> {
    prices_by_bucket(bookings)
        .into_iter()
        .filter_map(|(key, prices)| mean(&prices).map(|m| (key, Price(m))))
        .collect()
}

/// Inner join on (room, month): pairs missing from either side are dropped.
pub fn price_comparison(
    current: &BTreeMap<BucketKey, Price>,
    recommended: &BTreeMap<BucketKey, Price>,
) -> Vec<PriceComparisonRow> {
    let rows: Vec<PriceComparisonRow> = current
        .iter()
        .filter_map(|(key, current_price)| {
            recommended.get(key).map(|recommended_price| PriceComparisonRow {
                room_type: key.room_type.clone(),
                month: key.month,
                current_price: *current_price,
                recommended_price: *recommended_price,
            })
        })
        .collect();

    let unmatched = current.len() + recommended.len() - 2 * rows.len();
    if unmatched > 0 {
        debug!(unmatched, "price buckets without a match on both sides");
    }
    rows
}

/// Derived tables, computed once from the cleaned bookings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PricingTables {
    pub revenue_by_price: Vec<RevenueByPriceRow>,
    pub price_comparison: Vec<PriceComparisonRow>,
    pub box_groups: Vec<BoxGroup>,
}

impl PricingTables {
    pub fn build(bookings: &[Booking]) -> Self {
        let current = current_prices(bookings);
        let recommended = recommended_prices(bookings);
        let tables = Self {
            revenue_by_price: revenue_by_price(bookings),
            price_comparison: price_comparison(&current, &recommended),
            box_groups: box_stats(bookings),
        };
        debug!(
            price_points = tables.revenue_by_price.len(),
            buckets = tables.price_comparison.len(),
            "built pricing tables"
        );
        tables
    }

    pub fn comparison_for_room<'a>(
        &'a self,
        room_type: &'a str,
    ) -> impl Iterator<Item = &'a PriceComparisonRow> {
        self.price_comparison
            .iter()
            .filter(move |row| row.room_type == room_type)
    }
}
