//! # Service Cost Calculator
//!
//! Staffing cost estimation for quoted orders: how many waiters an event
//! needs and what the service line will cost, given the shift length and the
//! late-night taxi surcharge. Used by estimate tooling alongside the rules
//! engine; validation itself never prices anything.

use serde::{Deserialize, Serialize};

use crate::standards::BusinessStandards;

/// Breakdown of an estimated staffing cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCostEstimate {
    /// Recommended number of waiters
    pub waiter_count: i64,
    /// Cost of the base shift for all waiters
    pub base_cost: f64,
    /// Surcharge for hours beyond the base shift, for all waiters
    pub extra_hours_cost: f64,
    /// Taxi surcharge for all waiters (zero when not applicable)
    pub taxi_surcharge: f64,
    /// Total service cost
    pub total_cost: f64,
    /// Human-readable summary, e.g. "2 waiter(s), 8h shift"
    pub description: String,
}

/// Estimate the staffing cost for an event.
///
/// Headcount follows the simple-event ratio with a floor of one waiter. The
/// base rate covers the standard shift; every started hour beyond it is
/// charged per waiter, as is the taxi surcharge for late events.
pub fn estimate_service_cost(
    guests: i64,
    duration_hours: f64,
    needs_taxi: bool,
    standards: &BusinessStandards,
) -> ServiceCostEstimate {
    let costs = &standards.service_costs;
    let waiter_count = (guests / standards.waiter_ratios.simple).max(1);

    let base_cost = costs.waiter_base_cost * waiter_count as f64;

    let extra_hours = (duration_hours - costs.base_shift_hours).max(0.0).ceil();
    let extra_hours_cost = extra_hours * costs.waiter_extra_hour * waiter_count as f64;

    let taxi_surcharge = if needs_taxi {
        costs.taxi_surcharge * waiter_count as f64
    } else {
        0.0
    };

    let total_cost = base_cost + extra_hours_cost + taxi_surcharge;

    ServiceCostEstimate {
        waiter_count,
        base_cost,
        extra_hours_cost,
        taxi_surcharge,
        total_cost,
        description: format!("{waiter_count} waiter(s), {duration_hours}h shift"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_event_gets_one_waiter() {
        let standards = BusinessStandards::default();
        let estimate = estimate_service_cost(10, 6.0, false, &standards);

        assert_eq!(estimate.waiter_count, 1);
        assert_eq!(estimate.base_cost, 9500.0);
        assert_eq!(estimate.extra_hours_cost, 0.0);
        assert_eq!(estimate.total_cost, 9500.0);
    }

    #[test]
    fn test_headcount_scales_with_guests() {
        let standards = BusinessStandards::default();
        let estimate = estimate_service_cost(90, 6.0, false, &standards);

        assert_eq!(estimate.waiter_count, 3);
        assert_eq!(estimate.total_cost, 28_500.0);
    }

    #[test]
    fn test_extra_hours_are_charged_per_waiter() {
        let standards = BusinessStandards::default();
        let estimate = estimate_service_cost(60, 8.0, false, &standards);

        assert_eq!(estimate.waiter_count, 2);
        assert_eq!(estimate.extra_hours_cost, 4000.0);
        assert_eq!(estimate.total_cost, 23_000.0);
    }

    #[test]
    fn test_partial_extra_hour_rounds_up() {
        let standards = BusinessStandards::default();
        let estimate = estimate_service_cost(10, 6.5, false, &standards);

        assert_eq!(estimate.extra_hours_cost, 1000.0);
    }

    #[test]
    fn test_taxi_surcharge_applies_per_waiter() {
        let standards = BusinessStandards::default();
        let estimate = estimate_service_cost(60, 6.0, true, &standards);

        assert_eq!(estimate.taxi_surcharge, 3000.0);
        assert_eq!(estimate.total_cost, 22_000.0);
    }
}
