//! What-if demand simulation.
//!
//! Demand responds to price through a constant-elasticity curve anchored at
//! the recommended (median) price of a room/month bucket:
//!
//! ```text
//! ratio     = proposed / recommended
//! bookings  = baseline * ratio ^ elasticity
//! revenue   = proposed * bookings
//! ```
//!
//! With a negative elasticity, bookings fall as the proposed price rises
//! above the recommended one. Nothing is rounded here; truncation to whole
//! bookings happens only when the outcome is displayed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RevoptError, RevoptResult};
use crate::price::{Price, Revenue};

/// Business assumption, not estimated from data.
pub const DEFAULT_ELASTICITY: f64 = -1.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandModel {
    pub elasticity: f64,
}

impl Default for DemandModel {
    fn default() -> Self {
        Self {
            elasticity: DEFAULT_ELASTICITY,
        }
    }
}

impl DemandModel {
    pub fn new(elasticity: f64) -> RevoptResult<Self> {
        if !elasticity.is_finite() {
            return Err(RevoptError::Simulation(format!(
                "elasticity must be finite, got {elasticity}"
            )));
        }
        Ok(Self { elasticity })
    }

    pub fn simulate(
        &self,
        proposed_price: Price,
        recommended_price: Price,
        baseline_bookings: usize,
    ) -> RevoptResult<SimulationOutcome> {
        simulate(
            proposed_price,
            recommended_price,
            baseline_bookings,
            self.elasticity,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationOutcome {
    pub price_ratio: f64,
    pub predicted_bookings: f64,
    pub predicted_revenue: Revenue,
}

impl SimulationOutcome {
    /// Whole bookings for display, truncated toward zero.
    pub fn display_bookings(&self) -> u64 {
        self.predicted_bookings.trunc() as u64
    }
}

pub fn simulate(
    proposed_price: Price,
    recommended_price: Price,
    baseline_bookings: usize,
    elasticity: f64,
) -> RevoptResult<SimulationOutcome> {
    if !recommended_price.is_finite() || recommended_price.value() <= 0.0 {
        return Err(RevoptError::Simulation(format!(
            "recommended price must be positive, got {}",
            recommended_price.value()
        )));
    }
    if !elasticity.is_finite() {
        return Err(RevoptError::Simulation(format!(
            "elasticity must be finite, got {elasticity}"
        )));
    }

    let price_ratio = proposed_price / recommended_price;

    // 0 * ratio^e would be NaN for a zero ratio with negative elasticity.
    if baseline_bookings == 0 {
        return Ok(SimulationOutcome {
            price_ratio,
            predicted_bookings: 0.0,
            predicted_revenue: Revenue(0.0),
        });
    }

    if !proposed_price.is_finite() || proposed_price.value() <= 0.0 {
        return Err(RevoptError::Simulation(format!(
            "proposed price must be positive, got {}",
            proposed_price.value()
        )));
    }

    let predicted_bookings = baseline_bookings as f64 * price_ratio.powf(elasticity);
    let predicted_revenue = proposed_price * predicted_bookings;

    debug!(
        proposed = proposed_price.value(),
        recommended = recommended_price.value(),
        baseline_bookings,
        price_ratio,
        predicted_bookings,
        "simulated demand"
    );

    Ok(SimulationOutcome {
        price_ratio,
        predicted_bookings,
        predicted_revenue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn equal_prices_keep_baseline() {
        for price in [0.01, 500.0, 1000.0, 1333.33, 4999.99, 1.0e7] {
            for baseline in [1, 2, 10, 37, 10_000] {
                for elasticity in [-1.2, -0.5, 0.0, 2.0] {
                    let out = simulate(Price(price), Price(price), baseline, elasticity).unwrap();
                    assert_eq!(out.price_ratio, 1.0);
                    assert_eq!(out.predicted_bookings, baseline as f64);
                    assert_eq!(
                        out.predicted_revenue,
                        Revenue(price * baseline as f64),
                        "p={price} b={baseline} e={elasticity}"
                    );
                }
            }
        }
    }

    #[test]
    fn doubling_price_with_default_elasticity() {
        let out = simulate(Price(2000.0), Price(1000.0), 10, DEFAULT_ELASTICITY).unwrap();
        assert!((out.price_ratio - 2.0).abs() < EPS);
        let expected = 10.0 * 2f64.powf(-1.2);
        assert!((out.predicted_bookings - expected).abs() < EPS);
        assert!((out.predicted_bookings - 4.3528).abs() < 1e-4);
        assert!((out.predicted_revenue.value() - 2000.0 * expected).abs() < 1e-6);
        assert_eq!(out.display_bookings(), 4);
    }

    #[test]
    fn zero_baseline_yields_nothing() {
        for proposed in [0.0, 500.0, 1000.0, 5000.0] {
            let out = simulate(Price(proposed), Price(1000.0), 0, DEFAULT_ELASTICITY).unwrap();
            assert_eq!(out.predicted_bookings, 0.0);
            assert_eq!(out.predicted_revenue, Revenue(0.0));
        }
    }

    #[test]
    fn bookings_fall_as_price_rises() {
        let model = DemandModel::default();
        let mut previous = f64::INFINITY;
        for step in 0..50 {
            let proposed = Price(1000.0 + step as f64 * 80.0);
            let out = model.simulate(proposed, Price(1000.0), 25).unwrap();
            assert!(out.predicted_bookings < previous || step == 0);
            previous = out.predicted_bookings;
        }
    }

    #[test]
    fn cheaper_price_lifts_bookings() {
        let out = simulate(Price(500.0), Price(1000.0), 10, DEFAULT_ELASTICITY).unwrap();
        assert!(out.predicted_bookings > 10.0);
    }

    #[test]
    fn rejects_non_positive_recommended_price() {
        assert!(simulate(Price(1000.0), Price(0.0), 10, DEFAULT_ELASTICITY).is_err());
        assert!(simulate(Price(1000.0), Price(-5.0), 10, DEFAULT_ELASTICITY).is_err());
        assert!(simulate(Price(1000.0), Price(f64::NAN), 10, DEFAULT_ELASTICITY).is_err());
    }

    #[test]
    fn rejects_non_positive_proposed_price_with_demand() {
        let err = simulate(Price(0.0), Price(1000.0), 3, DEFAULT_ELASTICITY).unwrap_err();
        assert!(matches!(err, RevoptError::Simulation(_)));
    }

    #[test]
    fn model_rejects_infinite_elasticity() {
        assert!(DemandModel::new(f64::NEG_INFINITY).is_err());
        assert_eq!(DemandModel::new(-0.8).unwrap().elasticity, -0.8);
    }

    #[test]
    fn display_truncates() {
        let out = SimulationOutcome {
            price_ratio: 1.0,
            predicted_bookings: 7.99,
            predicted_revenue: Revenue(0.0),
        };
        assert_eq!(out.display_bookings(), 7);
    }
}
