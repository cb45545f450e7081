//! Lead-time checks: hours until the event against the required notice for
//! the booked service level.

use chrono::NaiveDate;
use tracing::debug;

use crate::order::Order;
use crate::report::{Finding, ValidationLevel};
use crate::standards::PREMIUM_SERVICE_COST_THRESHOLD;

use super::{OrderValidator, ValidationContext};

/// Validates that the order leaves enough lead time before the event.
///
/// Orders without a date produce no finding. The event date is taken at
/// midnight, so a date in the past yields negative lead time and always
/// warns; same-day orders without notice are meant to be flagged.
pub struct TimingValidator;

impl OrderValidator for TimingValidator {
    fn name(&self) -> &'static str {
        "timing"
    }

    fn validate(&self, order: &Order, ctx: &ValidationContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        let Some(date) = order.order_info.date.as_deref() else {
            return findings;
        };

        let event_date = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(parsed) => parsed,
            Err(_) => {
                findings.push(
                    Finding::new(ValidationLevel::Error, "event_date", "Invalid date format")
                        .with_recommendation("Use the YYYY-MM-DD date format"),
                );
                return findings;
            }
        };

        let event_midnight = event_date.and_hms_opt(0, 0, 0).unwrap_or_default();
        let hours_until_event =
            (event_midnight - ctx.now).num_seconds() as f64 / 3600.0;

        let timing = &ctx.standards.timing;
        let required_hours = if order.services.is_empty() {
            timing.no_service
        } else if order.totals.total_cost > PREMIUM_SERVICE_COST_THRESHOLD {
            timing.service_premium
        } else {
            timing.service_standard
        };
        debug!(hours_until_event, required_hours, "checking lead time");

        if hours_until_event < required_hours as f64 {
            findings.push(
                Finding::new(
                    ValidationLevel::Warning,
                    "timing",
                    format!(
                        "Too little lead time: {hours_until_event:.0}h until the event, \
                         {required_hours}h required"
                    ),
                )
                .with_recommendation(format!("Book at least {required_hours} hours ahead")),
            );
        } else {
            findings.push(
                Finding::new(
                    ValidationLevel::Info,
                    "timing",
                    format!("Sufficient lead time: {hours_until_event:.0}h until the event"),
                )
                .with_recommendation("Lead time requirements are met"),
            );
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::ServiceItem;
    use crate::standards::BusinessStandards;
    use crate::validators::test_support::fixed_context;

    // The fixed test clock is 2026-01-10 12:00
    fn validate(order: &Order) -> Vec<Finding> {
        let standards = BusinessStandards::default();
        let ctx = fixed_context(&standards);
        TimingValidator.validate(order, &ctx)
    }

    #[test]
    fn test_missing_date_means_no_finding() {
        let order = Order::new().with_guests(20);
        assert!(validate(&order).is_empty());
    }

    #[test]
    fn test_invalid_date_is_error() {
        let order = Order::new().with_date("15.01.2026");
        let findings = validate(&order);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, ValidationLevel::Error);
        assert_eq!(findings[0].field, "event_date");
    }

    #[test]
    fn test_ample_lead_time_is_info() {
        let order = Order::new().with_date("2026-01-20");
        let findings = validate(&order);

        assert_eq!(findings[0].level, ValidationLevel::Info);
        assert_eq!(findings[0].field, "timing");
    }

    #[test]
    fn test_short_notice_without_service_warns() {
        // Midnight of the next day is only 12 hours away, below the 24h floor
        let order = Order::new().with_date("2026-01-11");
        let findings = validate(&order);

        assert_eq!(findings[0].level, ValidationLevel::Warning);
        assert!(findings[0].message.contains("24h required"));
    }

    #[test]
    fn test_booked_service_raises_the_requirement() {
        // 36 hours ahead: fine without service (24h), short with a booked
        // service (48h for a standard order)
        let order = Order::new()
            .with_date("2026-01-12")
            .with_service(ServiceItem::new("Waiter").with_quantity(2));
        let findings = validate(&order);

        assert_eq!(findings[0].level, ValidationLevel::Warning);
        assert!(findings[0].message.contains("48h required"));
    }

    #[test]
    fn test_expensive_order_requires_premium_notice() {
        // 60 hours ahead of a premium order (total above 60k) needs 72h
        let order = Order::new()
            .with_date("2026-01-13")
            .with_service(ServiceItem::new("Waiter").with_quantity(2))
            .with_totals(20_000.0, 90_000.0);
        let findings = validate(&order);

        assert_eq!(findings[0].level, ValidationLevel::Warning);
        assert!(findings[0].message.contains("72h required"));
    }

    #[test]
    fn test_past_date_always_warns() {
        let order = Order::new().with_date("2025-12-01");
        let findings = validate(&order);

        assert_eq!(findings[0].level, ValidationLevel::Warning);
    }
}
