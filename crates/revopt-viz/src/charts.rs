use revopt_agg::{BoxGroup, PriceComparisonRow, RevenueByPriceRow};
use revopt_core::{MonthBucket, Price, SimulationOutcome};
use serde::Serialize;

pub const CURRENT_PRICE_COLOR: &str = "#636EFA";
pub const RECOMMENDED_PRICE_COLOR: &str = "#EF553B";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub price: f64,
    pub total_revenue: f64,
    /// Drives the marker size
    pub bookings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

/// Price against total revenue, one marker per distinct price.
pub fn revenue_scatter(rows: &[RevenueByPriceRow]) -> ScatterChart {
    ScatterChart {
        title: "Price vs Total Revenue".to_string(),
        x_label: "Room price".to_string(),
        y_label: "Total revenue".to_string(),
        points: rows
            .iter()
            .map(|row| ScatterPoint {
                price: row.price.value(),
                total_revenue: row.total_revenue.value(),
                bookings: row.bookings,
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One box per (month, room); the room selects the colour
    pub boxes: Vec<BoxGroup>,
}

pub fn price_spread(groups: &[BoxGroup]) -> BoxChart {
    BoxChart {
        title: "Monthly Price Range by Room Type".to_string(),
        x_label: "Month".to_string(),
        y_label: "Room price".to_string(),
        boxes: groups.to_vec(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedBarChart {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
}

/// Current against recommended price for one room, grouped by month.
///
/// `rows` is expected to be filtered to `room_type` already; rows for other
/// rooms are skipped.
pub fn price_comparison_bars<'a>(
    room_type: &str,
    rows: impl IntoIterator<Item = &'a PriceComparisonRow>,
) -> GroupedBarChart {
    let mut categories = Vec::new();
    let mut current = Vec::new();
    let mut recommended = Vec::new();
    for row in rows.into_iter().filter(|r| r.room_type == room_type) {
        categories.push(row.month.to_string());
        current.push(row.current_price.value());
        recommended.push(row.recommended_price.value());
    }

    GroupedBarChart {
        title: format!("Current vs Recommended Price: {room_type}"),
        categories,
        series: vec![
            BarSeries {
                name: "Current Price".to_string(),
                color: CURRENT_PRICE_COLOR.to_string(),
                values: current,
            },
            BarSeries {
                name: "Recommended Price".to_string(),
                color: RECOMMENDED_PRICE_COLOR.to_string(),
                values: recommended,
            },
        ],
    }
}

/// Result block of the what-if panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub room_type: String,
    pub month: MonthBucket,
    pub proposed_price: Price,
    pub recommended_price: Price,
    pub baseline_bookings: usize,
    pub elasticity: f64,
    pub outcome: SimulationOutcome,
}

/// Everything one render pass of the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub revenue: ScatterChart,
    pub spread: BoxChart,
    pub comparison: GroupedBarChart,
    pub simulation: SimulationSummary,
}
