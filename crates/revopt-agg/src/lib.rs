//! # revopt-agg: pricing aggregates
//!
//! Turns cleaned bookings into the tables the dashboard draws from:
//!
//! | table | key | values |
//! |-------|-----|--------|
//! | revenue by price | price (to the satang) | booking count, summed revenue |
//! | price comparison | (room, month) | mean price, median price |
//! | box stats | (month, room) | min, quartiles, max, all points |
//!
//! plus the lookups the selectors and the simulator need
//! ([`room_types`], [`months_for_room`], [`baseline_bookings`],
//! [`recommended_price_for`]) and table export through polars.

pub mod boxplot;
pub mod export;
pub mod select;
pub mod stats;
pub mod tables;

pub use boxplot::{box_stats, BoxGroup};
pub use export::{export_tables, ExportFormat};
pub use select::{baseline_bookings, months_for_room, recommended_price_for, room_types};
pub use tables::{
    current_prices, price_comparison, recommended_prices, revenue_by_price, PriceComparisonRow,
    PriceKey, PricingTables, RevenueByPriceRow,
};
