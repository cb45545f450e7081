//! # Order Validation Walkthrough
//!
//! Runs several representative orders through the business rules engine and
//! prints the resulting reports.

use catering_rules::engine::BusinessRulesEngine;
use catering_rules::order::{EventType, MenuItem, Order, ServiceItem};

fn main() {
    let engine = BusinessRulesEngine::new();

    // Example 1: a well-formed buffet order
    println!("Example 1: Valid buffet order");
    let order = Order::new()
        .with_guests(30)
        .with_event_type(EventType::Buffet)
        .with_date("2027-06-01")
        .with_menu_item(MenuItem::new("Salmon canapé").with_category("canapes"))
        .with_menu_item(MenuItem::new("Caesar salad").with_category("salads"))
        .with_service(ServiceItem::new("Waiter").with_quantity(2).with_duration(6.0))
        .with_totals(10_500.0, 75_000.0);
    print_report(&engine, &order);

    // Example 2: dangerously little food
    println!("Example 2: Critical food shortage");
    let order = Order::new()
        .with_guests(50)
        .with_menu_item(MenuItem::new("Canapé"))
        .with_totals(8000.0, 45_000.0);
    print_report(&engine, &order);

    // Example 3: below the minimum order amount
    println!("Example 3: Below minimum order");
    let order = Order::new()
        .with_guests(5)
        .with_event_type(EventType::CoffeeBreak)
        .with_menu_item(MenuItem::new("Espresso set").with_category("sets"))
        .with_totals(1500.0, 8000.0);
    print_report(&engine, &order);

    // Example 4: staffing cost estimate for the first order
    println!("Example 4: Staffing cost estimate");
    let estimate =
        catering_rules::calculations::estimate_service_cost(30, 8.0, true, engine.standards());
    println!(
        "  {} -> base {:.0}, extra hours {:.0}, taxi {:.0}, total {:.0}\n",
        estimate.description,
        estimate.base_cost,
        estimate.extra_hours_cost,
        estimate.taxi_surcharge,
        estimate.total_cost
    );
}

fn print_report(engine: &BusinessRulesEngine, order: &Order) {
    let report = engine.validate_order(order);

    println!("  overall status: {}", report.overall_status);
    for finding in &report.validations {
        println!("  [{}] {}: {}", finding.level, finding.field, finding.message);
    }
    if !report.recommendations.is_empty() {
        println!("  recommendations:");
        for rec in &report.recommendations {
            println!("    - {rec}");
        }
    }
    println!();
}
