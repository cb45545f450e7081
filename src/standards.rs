//! # Business Standards Module
//!
//! This module defines the numeric standards every validator checks against:
//! portion weights per event type, cost-per-guest ranges, staffing ratios,
//! lead-time requirements and the service cost constants.
//!
//! The table is plain immutable data. Callers construct one (or take
//! `Default`, which carries the canonical values) and hand it to the engine;
//! nothing here is mutated during validation.

use serde::{Deserialize, Serialize};

use crate::order::EventType;

// Absolute portion bounds, independent of event type. Anything below the
// floor is a critical shortage regardless of how modest the event format is.
pub const ABSOLUTE_MIN_GRAMS_PER_GUEST: f64 = 250.0;
pub const ABSOLUTE_MAX_GRAMS_PER_GUEST: f64 = 750.0;

/// Above this order total, booked service requires the premium lead time
pub const PREMIUM_SERVICE_COST_THRESHOLD: f64 = 60_000.0;

/// Acceptable grams-per-guest window for one event type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortionStandard {
    /// Minimum grams per guest
    pub min: f64,
    /// Maximum grams per guest
    pub max: f64,
    /// Recommended grams per guest
    pub optimal: f64,
}

/// Grams-per-guest windows for every event type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionStandards {
    pub coffee_break: PortionStandard,
    pub buffet: PortionStandard,
    pub banquet: PortionStandard,
}

impl PortionStandards {
    /// Standard for an event type; unknown types resolve to the buffet entry
    pub fn for_event(&self, event_type: &EventType) -> &PortionStandard {
        match event_type {
            EventType::CoffeeBreak => &self.coffee_break,
            EventType::Banquet => &self.banquet,
            EventType::Buffet | EventType::Other(_) => &self.buffet,
        }
    }
}

impl Default for PortionStandards {
    fn default() -> Self {
        Self {
            coffee_break: PortionStandard {
                min: 250.0,
                max: 300.0,
                optimal: 275.0,
            },
            buffet: PortionStandard {
                min: 250.0,
                max: 423.0,
                optimal: 335.0,
            },
            banquet: PortionStandard {
                min: 600.0,
                max: 1000.0,
                optimal: 800.0,
            },
        }
    }
}

/// Expected cost-per-guest window for one event type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    /// Minimum cost per guest
    pub min: f64,
    /// Maximum cost per guest
    pub max: f64,
}

/// Cost-per-guest windows for every event type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRanges {
    pub coffee_break: CostRange,
    pub buffet: CostRange,
    pub banquet: CostRange,
}

impl CostRanges {
    /// Range for an event type; unknown types resolve to the buffet entry
    pub fn for_event(&self, event_type: &EventType) -> &CostRange {
        match event_type {
            EventType::CoffeeBreak => &self.coffee_break,
            EventType::Banquet => &self.banquet,
            EventType::Buffet | EventType::Other(_) => &self.buffet,
        }
    }
}

impl Default for CostRanges {
    fn default() -> Self {
        Self {
            coffee_break: CostRange {
                min: 1150.0,
                max: 1700.0,
            },
            buffet: CostRange {
                min: 2300.0,
                max: 3300.0,
            },
            banquet: CostRange {
                min: 4700.0,
                max: 8600.0,
            },
        }
    }
}

/// Guests-per-waiter staffing ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaiterRatios {
    /// Guests per waiter for simple events
    pub simple: i64,
    /// Guests per waiter for complex events (denser staffing)
    pub complex: i64,
}

impl Default for WaiterRatios {
    fn default() -> Self {
        Self {
            simple: 30,
            complex: 15,
        }
    }
}

/// Minimum lead time in hours, by required service level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingRequirements {
    /// Delivery only, no booked services
    pub no_service: i64,
    /// Standard service
    pub service_standard: i64,
    /// Premium service (large orders)
    pub service_premium: i64,
}

impl Default for TimingRequirements {
    fn default() -> Self {
        Self {
            no_service: 24,
            service_standard: 48,
            service_premium: 72,
        }
    }
}

/// Constants for staffing cost estimation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceCosts {
    /// Cost of one waiter for the base shift
    pub waiter_base_cost: f64,
    /// Base shift length in hours
    pub base_shift_hours: f64,
    /// Cost per waiter for every hour beyond the base shift
    pub waiter_extra_hour: f64,
    /// Late-night taxi surcharge per waiter
    pub taxi_surcharge: f64,
}

impl Default for ServiceCosts {
    fn default() -> Self {
        Self {
            waiter_base_cost: 9500.0,
            base_shift_hours: 6.0,
            waiter_extra_hour: 1000.0,
            taxi_surcharge: 1500.0,
        }
    }
}

/// The full standards table consumed by the validators.
///
/// All values are plain data with `Default` carrying the canonical numbers;
/// construct with struct update syntax to override individual entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessStandards {
    /// Minimum accepted order total
    pub min_order_amount: f64,
    /// Portion weight windows per event type
    pub portions: PortionStandards,
    /// Cost-per-guest windows per event type
    pub cost_per_guest: CostRanges,
    /// Staffing ratios
    pub waiter_ratios: WaiterRatios,
    /// Lead-time requirements in hours
    pub timing: TimingRequirements,
    /// Staffing cost constants
    pub service_costs: ServiceCosts,
    /// Lowercase keywords used to classify a service line as waiter staffing.
    /// This is a documented substring heuristic, not an implementation detail.
    pub waiter_keywords: Vec<String>,
}

impl Default for BusinessStandards {
    fn default() -> Self {
        Self {
            min_order_amount: 10_000.0,
            portions: PortionStandards::default(),
            cost_per_guest: CostRanges::default(),
            waiter_ratios: WaiterRatios::default(),
            timing: TimingRequirements::default(),
            service_costs: ServiceCosts::default(),
            waiter_keywords: vec!["waiter".to_string(), "официант".to_string()],
        }
    }
}

impl BusinessStandards {
    /// Whether a service name counts as waiter staffing under the keyword
    /// heuristic (case-insensitive substring match)
    pub fn is_waiter_service(&self, service_name: &str) -> bool {
        let name = service_name.to_lowercase();
        self.waiter_keywords.iter().any(|kw| name.contains(kw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let standards = BusinessStandards::default();

        assert_eq!(standards.min_order_amount, 10_000.0);
        assert_eq!(standards.portions.buffet.max, 423.0);
        assert_eq!(standards.cost_per_guest.banquet.min, 4700.0);
        assert_eq!(standards.waiter_ratios.simple, 30);
        assert_eq!(standards.waiter_ratios.complex, 15);
        assert_eq!(standards.timing.service_premium, 72);
        assert_eq!(standards.service_costs.waiter_base_cost, 9500.0);
    }

    #[test]
    fn test_unknown_event_type_falls_back_to_buffet() {
        let standards = BusinessStandards::default();
        let other = EventType::Other("wedding".to_string());

        assert_eq!(
            standards.portions.for_event(&other),
            &standards.portions.buffet
        );
        assert_eq!(
            standards.cost_per_guest.for_event(&other),
            &standards.cost_per_guest.buffet
        );
    }

    #[test]
    fn test_waiter_keyword_match() {
        let standards = BusinessStandards::default();

        assert!(standards.is_waiter_service("Waiter"));
        assert!(standards.is_waiter_service("Senior waiter (6h)"));
        assert!(standards.is_waiter_service("Официант"));
        assert!(!standards.is_waiter_service("Delivery"));
        assert!(!standards.is_waiter_service(""));
    }

    #[test]
    fn test_override_with_struct_update() {
        let standards = BusinessStandards {
            min_order_amount: 25_000.0,
            ..BusinessStandards::default()
        };

        assert_eq!(standards.min_order_amount, 25_000.0);
        assert_eq!(standards.waiter_ratios.simple, 30);
    }
}
