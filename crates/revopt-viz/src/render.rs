//! Plain-text renderings of the chart models for terminal output.

use std::fmt::Write;

use revopt_core::format_thb;
use revopt_core::price::group_thousands;

use crate::charts::{BoxChart, Dashboard, GroupedBarChart, ScatterChart, SimulationSummary};

const NO_DATA: &str = "  (no data)\n";

/// Map `value` in `[lo, hi]` onto `0..cells`.
fn scale(value: f64, lo: f64, hi: f64, cells: usize) -> usize {
    if cells == 0 {
        return 0;
    }
    let span = hi - lo;
    if span <= 0.0 {
        return cells / 2;
    }
    let pos = ((value - lo) / span * (cells - 1) as f64).round();
    (pos.max(0.0) as usize).min(cells - 1)
}

fn marker(bookings: usize) -> char {
    match bookings {
        0 | 1 => '.',
        2..=3 => 'o',
        _ => 'O',
    }
}

/// Character-grid scatter plot; marker size grows with booking count.
pub fn render_scatter(chart: &ScatterChart, width: usize, height: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", chart.title);
    if chart.points.is_empty() || width == 0 || height == 0 {
        out.push_str(NO_DATA);
        return out;
    }

    let (x_lo, x_hi) = bounds(chart.points.iter().map(|p| p.price));
    let (y_lo, y_hi) = bounds(chart.points.iter().map(|p| p.total_revenue));

    let mut grid = vec![vec![' '; width]; height];
    for point in &chart.points {
        let col = scale(point.price, x_lo, x_hi, width);
        let row = height - 1 - scale(point.total_revenue, y_lo, y_hi, height);
        let current = grid[row][col];
        let next = marker(point.bookings);
        // keep the larger marker when two prices share a cell
        if current == ' ' || ".oO".find(next) > ".oO".find(current) {
            grid[row][col] = next;
        }
    }

    let label_width = group_thousands(y_hi).len();
    for (idx, row) in grid.iter().enumerate() {
        let label = if idx == 0 {
            group_thousands(y_hi)
        } else if idx == height - 1 {
            group_thousands(y_lo)
        } else {
            String::new()
        };
        let line: String = row.iter().collect();
        let _ = writeln!(out, "{label:>label_width$} |{}", line.trim_end());
    }
    let _ = writeln!(out, "{:>label_width$} +{}", "", "-".repeat(width));
    let _ = writeln!(
        out,
        "{:>label_width$}  {:<half$}{:>rest$}",
        "",
        group_thousands(x_lo),
        group_thousands(x_hi),
        half = width / 2,
        rest = width - width / 2
    );
    let _ = writeln!(
        out,
        "  x: {}, y: {}, marker: . 1 booking  o 2-3  O 4+",
        chart.x_label, chart.y_label
    );
    out
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// One horizontal box per (month, room) on a shared price axis.
pub fn render_box(chart: &BoxChart, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", chart.title);
    if chart.boxes.is_empty() || width == 0 {
        out.push_str(NO_DATA);
        return out;
    }

    let (lo, hi) = bounds(
        chart
            .boxes
            .iter()
            .flat_map(|b| [b.min.value(), b.max.value()]),
    );
    let room_width = chart
        .boxes
        .iter()
        .map(|b| b.room_type.len())
        .max()
        .unwrap_or(0);

    for group in &chart.boxes {
        let mut track = vec![' '; width];
        let min = scale(group.min.value(), lo, hi, width);
        let q1 = scale(group.q1.value(), lo, hi, width);
        let median = scale(group.median.value(), lo, hi, width);
        let q3 = scale(group.q3.value(), lo, hi, width);
        let max = scale(group.max.value(), lo, hi, width);
        for cell in &mut track[min..=max] {
            *cell = '-';
        }
        for cell in &mut track[q1..=q3] {
            *cell = '=';
        }
        track[median] = '|';

        let line: String = track.into_iter().collect();
        let _ = writeln!(
            out,
            "  {} {:<room_width$} [{}] n={} min {} q1 {} med {} q3 {} max {}",
            group.month,
            group.room_type,
            line,
            group.count,
            group_thousands(group.min.value()),
            group_thousands(group.q1.value()),
            group_thousands(group.median.value()),
            group_thousands(group.q3.value()),
            group_thousands(group.max.value()),
        );
    }
    let _ = writeln!(
        out,
        "  axis: {} .. {}",
        group_thousands(lo),
        group_thousands(hi)
    );
    out
}

/// Grouped horizontal bars, one pair per month.
pub fn render_bars(chart: &GroupedBarChart, width: usize) -> String {
    const FILL: [char; 2] = ['#', '='];

    let mut out = String::new();
    let _ = writeln!(out, "{}", chart.title);
    if chart.categories.is_empty() {
        out.push_str(NO_DATA);
        return out;
    }

    let max = chart
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let name_width = chart.series.iter().map(|s| s.name.len()).max().unwrap_or(0);

    for (idx, category) in chart.categories.iter().enumerate() {
        let _ = writeln!(out, "  {category}");
        for (series_idx, series) in chart.series.iter().enumerate() {
            let Some(value) = series.values.get(idx).copied() else {
                continue;
            };
            let len = if max > 0.0 {
                (value / max * width as f64).round() as usize
            } else {
                0
            };
            let fill = FILL[series_idx % FILL.len()];
            let _ = writeln!(
                out,
                "    {:<name_width$} {} {}",
                series.name,
                fill.to_string().repeat(len),
                group_thousands(value)
            );
        }
    }
    out
}

pub fn render_simulation(summary: &SimulationSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Simulation: {} / {} at {} (recommended {}, elasticity {})",
        summary.room_type,
        summary.month,
        format_thb(summary.proposed_price.value()),
        format_thb(summary.recommended_price.value()),
        summary.elasticity
    );
    let _ = writeln!(out, "  Baseline bookings:   {}", summary.baseline_bookings);
    let _ = writeln!(
        out,
        "  Predicted bookings:  {}",
        summary.outcome.display_bookings()
    );
    let _ = writeln!(
        out,
        "  Predicted revenue:   {}",
        format_thb(summary.outcome.predicted_revenue.value())
    );
    out
}

pub fn render_dashboard(dashboard: &Dashboard, width: usize) -> String {
    let mut out = String::new();
    out.push_str(&render_scatter(&dashboard.revenue, width, 12));
    out.push('\n');
    out.push_str(&render_box(&dashboard.spread, width));
    out.push('\n');
    out.push_str(&render_bars(&dashboard.comparison, width));
    out.push('\n');
    out.push_str(&render_simulation(&dashboard.simulation));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{price_comparison_bars, price_spread, revenue_scatter};
    use revopt_agg::{BoxGroup, PriceComparisonRow, RevenueByPriceRow};
    use revopt_core::{Price, Revenue, SimulationOutcome};

    #[test]
    fn scale_handles_flat_ranges() {
        assert_eq!(scale(5.0, 5.0, 5.0, 10), 5);
        assert_eq!(scale(0.0, 0.0, 10.0, 11), 0);
        assert_eq!(scale(10.0, 0.0, 10.0, 11), 10);
        assert_eq!(scale(99.0, 0.0, 10.0, 11), 10);
    }

    #[test]
    fn empty_charts_say_so() {
        let scatter = revenue_scatter(&[]);
        assert!(render_scatter(&scatter, 40, 10).contains("(no data)"));
        assert!(render_box(&price_spread(&[]), 40).contains("(no data)"));
        let bars = price_comparison_bars("Suite", std::iter::empty());
        assert!(render_bars(&bars, 40).contains("(no data)"));
    }

    #[test]
    fn scatter_places_extremes_in_corners() {
        let rows = vec![
            RevenueByPriceRow {
                price: Price(500.0),
                bookings: 1,
                total_revenue: Revenue(500.0),
            },
            RevenueByPriceRow {
                price: Price(1000.0),
                bookings: 4,
                total_revenue: Revenue(4000.0),
            },
        ];
        let text = render_scatter(&revenue_scatter(&rows), 20, 5);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("4,000.00 |"));
        assert!(lines[1].ends_with('O'));
        assert!(lines[5].starts_with("  500.00 |."));
    }

    #[test]
    fn box_line_marks_median() {
        let group = BoxGroup {
            month: "2024-03".parse().unwrap(),
            room_type: "Standard".into(),
            count: 3,
            min: Price(600.0),
            q1: Price(600.0),
            median: Price(600.0),
            q3: Price(750.0),
            max: Price(900.0),
            points: vec![Price(600.0), Price(600.0), Price(900.0)],
        };
        let text = render_box(&price_spread(&[group]), 11);
        assert!(text.contains("2024-03 Standard [|=====-----]"));
        assert!(text.contains("med 600.00"));
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let rows = vec![PriceComparisonRow {
            room_type: "Suite".into(),
            month: "2024-01".parse().unwrap(),
            current_price: Price(2000.0),
            recommended_price: Price(1000.0),
        }];
        let text = render_bars(&price_comparison_bars("Suite", &rows), 10);
        assert!(text.contains("Current Price     ########## 2,000.00"));
        assert!(text.contains("Recommended Price ===== 1,000.00"));
    }

    #[test]
    fn simulation_truncates_bookings() {
        let summary = SimulationSummary {
            room_type: "Deluxe".into(),
            month: "2024-01".parse().unwrap(),
            proposed_price: Price(2000.0),
            recommended_price: Price(1000.0),
            baseline_bookings: 10,
            elasticity: -1.2,
            outcome: SimulationOutcome {
                price_ratio: 2.0,
                predicted_bookings: 4.35,
                predicted_revenue: Revenue(8705.51),
            },
        };
        let text = render_simulation(&summary);
        assert!(text.contains("Predicted bookings:  4\n"));
        assert!(text.contains("Predicted revenue:   THB 8,705.51"));
    }
}
