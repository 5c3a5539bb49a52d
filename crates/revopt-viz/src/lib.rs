//! # revopt-viz: dashboard chart models
//!
//! Builds serializable chart descriptions from the pricing tables and
//! renders them as plain text for the terminal:
//!
//! - [`revenue_scatter`] - price against total revenue, sized by bookings
//! - [`price_spread`] - monthly price distribution per room type
//! - [`price_comparison_bars`] - current (mean) vs recommended (median) price
//! - [`SimulationSummary`] - result block of the what-if panel
//!
//! The JSON form of [`Dashboard`] is meant for any front end that wants to
//! draw the charts itself.

pub mod charts;
pub mod render;

pub use charts::{
    price_comparison_bars, price_spread, revenue_scatter, BarSeries, BoxChart, Dashboard,
    GroupedBarChart, ScatterChart, ScatterPoint, SimulationSummary, CURRENT_PRICE_COLOR,
    RECOMMENDED_PRICE_COLOR,
};
pub use render::{render_bars, render_box, render_dashboard, render_scatter, render_simulation};
