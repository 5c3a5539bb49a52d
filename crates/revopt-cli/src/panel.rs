//! Selection state for the what-if panel.
//!
//! The panel holds only the user's choices (room, month, proposed price).
//! Every render recomputes the charts and the simulation from the
//! read-only bookings and tables; nothing is cached between renders.

use revopt_agg::{baseline_bookings, months_for_room, recommended_price_for, room_types, PricingTables};
use revopt_core::{Booking, DemandModel, MonthBucket, Price, RevoptError, RevoptResult};
use revopt_viz::{
    price_comparison_bars, price_spread, revenue_scatter, Dashboard, GroupedBarChart,
    SimulationSummary,
};
use tracing::debug;

use crate::slider::Slider;

#[derive(Debug, Clone)]
pub struct Panel<'a> {
    bookings: &'a [Booking],
    tables: &'a PricingTables,
    model: DemandModel,
    slider: Slider,
    rooms: Vec<String>,
    room: String,
    months: Vec<MonthBucket>,
    month: MonthBucket,
    price: Price,
}

/// What one interaction shows: the room's bar chart and the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub comparison: GroupedBarChart,
    pub simulation: SimulationSummary,
}

impl<'a> Panel<'a> {
    /// Start on the first room (first-seen order) and its earliest month.
    pub fn new(
        bookings: &'a [Booking],
        tables: &'a PricingTables,
        model: DemandModel,
        slider: Slider,
    ) -> RevoptResult<Self> {
        let rooms = room_types(bookings);
        let first = rooms
            .first()
            .cloned()
            .ok_or_else(|| RevoptError::Validation("no booked rows to display".into()))?;
        let months = months_for_room(bookings, &first);
        let month = *months
            .first()
            .ok_or_else(|| RevoptError::Validation(format!("room '{first}' has no months")))?;

        let mut panel = Self {
            bookings,
            tables,
            model,
            slider,
            rooms,
            room: first,
            months,
            month,
            price: Price(slider.min),
        };
        panel.price = panel.default_price()?;
        Ok(panel)
    }

    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }

    pub fn months(&self) -> &[MonthBucket] {
        &self.months
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn month(&self) -> MonthBucket {
        self.month
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn slider(&self) -> Slider {
        self.slider
    }

    /// Switch room; month moves to the room's earliest and price resets.
    pub fn select_room(&mut self, room: &str) -> RevoptResult<()> {
        if !self.rooms.iter().any(|r| r == room) {
            return Err(RevoptError::Validation(format!(
                "unknown room type '{room}'; choose one of: {}",
                self.rooms.join(", ")
            )));
        }
        let months = months_for_room(self.bookings, room);
        let month = *months
            .first()
            .ok_or_else(|| RevoptError::Validation(format!("room '{room}' has no months")))?;
        self.room = room.to_string();
        self.months = months;
        self.month = month;
        self.price = self.default_price()?;
        debug!(room, month = %self.month, "selected room");
        Ok(())
    }

    /// Switch month within the current room; price resets.
    pub fn select_month(&mut self, month: MonthBucket) -> RevoptResult<()> {
        if !self.months.contains(&month) {
            return Err(RevoptError::MissingSelection {
                room: self.room.clone(),
                month: month.to_string(),
            });
        }
        self.month = month;
        self.price = self.default_price()?;
        debug!(room = %self.room, month = %self.month, "selected month");
        Ok(())
    }

    /// Move the price slider; returns the snapped value.
    pub fn set_price(&mut self, price: Price) -> RevoptResult<Price> {
        self.price = self.slider.snap(price)?;
        Ok(self.price)
    }

    pub fn recommended_price(&self) -> RevoptResult<Price> {
        recommended_price_for(&self.tables.price_comparison, &self.room, self.month).ok_or_else(
            || RevoptError::MissingSelection {
                room: self.room.clone(),
                month: self.month.to_string(),
            },
        )
    }

    fn default_price(&self) -> RevoptResult<Price> {
        Ok(self.slider.clamp_default(self.recommended_price()?))
    }

    pub fn simulation(&self) -> RevoptResult<SimulationSummary> {
        self.simulation_at(self.price)
    }

    /// Simulate an arbitrary price for the current bucket, ignoring the slider.
    pub fn simulation_at(&self, proposed: Price) -> RevoptResult<SimulationSummary> {
        let recommended = self.recommended_price()?;
        let baseline = baseline_bookings(self.bookings, &self.room, self.month);
        let outcome = self.model.simulate(proposed, recommended, baseline)?;
        Ok(SimulationSummary {
            room_type: self.room.clone(),
            month: self.month,
            proposed_price: proposed,
            recommended_price: recommended,
            baseline_bookings: baseline,
            elasticity: self.model.elasticity,
            outcome,
        })
    }

    pub fn render(&self) -> RevoptResult<PanelView> {
        Ok(PanelView {
            comparison: price_comparison_bars(
                &self.room,
                self.tables.comparison_for_room(&self.room),
            ),
            simulation: self.simulation()?,
        })
    }

    pub fn dashboard(&self) -> RevoptResult<Dashboard> {
        let view = self.render()?;
        Ok(Dashboard {
            revenue: revenue_scatter(&self.tables.revenue_by_price),
            spread: price_spread(&self.tables.box_groups),
            comparison: view.comparison,
            simulation: view.simulation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking(price: f64, room: &str, m: u32) -> Booking {
        let check_in = NaiveDate::from_ymd_opt(2024, m, 4).unwrap();
        Booking::new(
            Price(price),
            check_in.and_hms_opt(9, 0, 0).unwrap(),
            check_in,
            room,
        )
    }

    fn sample() -> Vec<Booking> {
        vec![
            booking(1000.0, "Deluxe", 2),
            booking(1000.0, "Deluxe", 1),
            booking(1200.0, "Deluxe", 1),
            booking(1400.0, "Deluxe", 1),
            booking(3000.0, "Suite", 3),
            booking(200.0, "Hostel", 3),
        ]
    }

    fn month(s: &str) -> MonthBucket {
        s.parse().unwrap()
    }

    #[test]
    fn starts_on_first_room_and_earliest_month() {
        let bookings = sample();
        let tables = PricingTables::build(&bookings);
        let panel =
            Panel::new(&bookings, &tables, DemandModel::default(), Slider::default()).unwrap();
        assert_eq!(panel.room(), "Deluxe");
        assert_eq!(panel.month(), month("2024-01"));
        assert_eq!(panel.price(), Price(1200.0));
        assert_eq!(panel.rooms(), ["Deluxe", "Suite", "Hostel"]);
    }

    #[test]
    fn recommended_price_gives_baseline_bookings() {
        let bookings = sample();
        let tables = PricingTables::build(&bookings);
        let panel =
            Panel::new(&bookings, &tables, DemandModel::default(), Slider::default()).unwrap();
        let sim = panel.simulation().unwrap();
        assert_eq!(sim.baseline_bookings, 3);
        assert_eq!(sim.outcome.predicted_bookings, 3.0);
        assert_eq!(sim.outcome.predicted_revenue.value(), 3600.0);
    }

    #[test]
    fn changing_room_resets_month_and_price() {
        let bookings = sample();
        let tables = PricingTables::build(&bookings);
        let mut panel =
            Panel::new(&bookings, &tables, DemandModel::default(), Slider::default()).unwrap();
        panel.set_price(Price(2500.0)).unwrap();
        panel.select_room("Suite").unwrap();
        assert_eq!(panel.month(), month("2024-03"));
        assert_eq!(panel.months(), [month("2024-03")]);
        assert_eq!(panel.price(), Price(3000.0));
    }

    #[test]
    fn default_price_is_clamped_into_slider() {
        let bookings = sample();
        let tables = PricingTables::build(&bookings);
        let mut panel =
            Panel::new(&bookings, &tables, DemandModel::default(), Slider::default()).unwrap();
        panel.select_room("Hostel").unwrap();
        assert_eq!(panel.price(), Price(500.0));
        let sim = panel.simulation().unwrap();
        assert_eq!(sim.recommended_price, Price(200.0));
        assert!(sim.outcome.predicted_bookings < 1.0);
    }

    #[test]
    fn month_outside_room_is_missing_selection() {
        let bookings = sample();
        let tables = PricingTables::build(&bookings);
        let mut panel =
            Panel::new(&bookings, &tables, DemandModel::default(), Slider::default()).unwrap();
        let err = panel.select_month(month("2024-03")).unwrap_err();
        assert!(matches!(err, RevoptError::MissingSelection { .. }));
        assert_eq!(panel.month(), month("2024-01"));
    }

    #[test]
    fn unknown_room_is_rejected() {
        let bookings = sample();
        let tables = PricingTables::build(&bookings);
        let mut panel =
            Panel::new(&bookings, &tables, DemandModel::default(), Slider::default()).unwrap();
        let err = panel.select_room("Penthouse").unwrap_err();
        assert!(err.to_string().contains("Deluxe, Suite, Hostel"));
    }

    #[test]
    fn render_recomputes_after_price_change() {
        let bookings = sample();
        let tables = PricingTables::build(&bookings);
        let mut panel =
            Panel::new(&bookings, &tables, DemandModel::default(), Slider::default()).unwrap();
        let before = panel.render().unwrap();
        assert_eq!(panel.set_price(Price(2404.0)).unwrap(), Price(2400.0));
        let after = panel.render().unwrap();
        assert_eq!(after.comparison, before.comparison);
        assert!((after.simulation.outcome.price_ratio - 2.0).abs() < 1e-12);
        assert!(after.simulation.outcome.predicted_bookings < 3.0);
        assert_eq!(after.comparison.categories, ["2024-01", "2024-02"]);
    }

    #[test]
    fn simulation_at_bypasses_slider() {
        let bookings = sample();
        let tables = PricingTables::build(&bookings);
        let panel =
            Panel::new(&bookings, &tables, DemandModel::default(), Slider::default()).unwrap();
        let sim = panel.simulation_at(Price(9000.0)).unwrap();
        assert_eq!(sim.proposed_price, Price(9000.0));
        assert!(panel.simulation_at(Price(0.0)).is_err());
        assert_eq!(panel.price(), Price(1200.0));
    }

    #[test]
    fn nan_price_keeps_previous_selection() {
        let bookings = sample();
        let tables = PricingTables::build(&bookings);
        let mut panel =
            Panel::new(&bookings, &tables, DemandModel::default(), Slider::default()).unwrap();
        assert!(panel.set_price(Price(f64::NAN)).is_err());
        assert_eq!(panel.price(), Price(1200.0));
    }

    #[test]
    fn empty_dataset_cannot_open_panel() {
        let tables = PricingTables::build(&[]);
        assert!(Panel::new(&[], &tables, DemandModel::default(), Slider::default()).is_err());
    }

    #[test]
    fn dashboard_bundles_all_charts() {
        let bookings = sample();
        let tables = PricingTables::build(&bookings);
        let panel =
            Panel::new(&bookings, &tables, DemandModel::default(), Slider::default()).unwrap();
        let dashboard = panel.dashboard().unwrap();
        assert_eq!(dashboard.revenue.points.len(), 5);
        assert_eq!(dashboard.spread.boxes.len(), 4);
        assert_eq!(dashboard.simulation.room_type, "Deluxe");
    }
}
