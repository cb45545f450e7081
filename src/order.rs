//! # Order Data Model
//!
//! This module defines the data structures for a catering order as it arrives
//! from the caller: event information, selected menu items, booked services
//! and the pre-computed totals.
//!
//! ## Core Concepts
//!
//! - **Order**: a read-only snapshot of one catering request
//! - **EventType**: coffee break, buffet or banquet (unknown types are kept
//!   as-is and resolved against the buffet standards at lookup time)
//! - **Totals**: aggregate weight and cost for the whole order
//!
//! Every field is optional on the wire. Missing fields resolve to defaults in
//! one place (`#[serde(default)]` plus the accessor methods below) so that
//! individual validators never re-implement "field is absent" semantics.
//!
//! ## Usage
//!
//! ```rust
//! use catering_rules::order::{EventType, MenuItem, Order, ServiceItem};
//!
//! let order = Order::new()
//!     .with_guests(30)
//!     .with_event_type(EventType::Buffet)
//!     .with_date("2026-10-01")
//!     .with_menu_item(MenuItem::new("Salmon canapé").with_category("canapes"))
//!     .with_service(ServiceItem::new("Waiter").with_quantity(2))
//!     .with_totals(10_500.0, 75_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported event formats. Orders can also carry free-form types coming from
/// upstream extraction; those are preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Short coffee break with light snacks
    CoffeeBreak,
    /// Standing buffet
    Buffet,
    /// Seated banquet with full service
    Banquet,
    /// Any unrecognized event type string
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::CoffeeBreak => write!(f, "coffee_break"),
            EventType::Buffet => write!(f, "buffet"),
            EventType::Banquet => write!(f, "banquet"),
            EventType::Other(name) => write!(f, "{name}"),
        }
    }
}

/// General information about the event being catered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderInfo {
    /// Number of guests (0 when not yet known)
    pub guests: i64,
    /// Event format; `None` resolves to buffet
    pub event_type: Option<EventType>,
    /// Event date in `YYYY-MM-DD` format
    pub date: Option<String>,
    /// External order identifier
    pub number: Option<String>,
}

impl OrderInfo {
    /// The effective event type, falling back to buffet when unspecified
    pub fn event_type(&self) -> &EventType {
        self.event_type.as_ref().unwrap_or(&EventType::Buffet)
    }
}

/// A single menu position in the order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    /// Dish name
    pub name: String,
    /// Menu category (canapes, salads, desserts, ...)
    pub category: Option<String>,
    /// Ordered quantity
    pub quantity: Option<f64>,
}

impl MenuItem {
    /// Create a menu item with just a name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            category: None,
            quantity: None,
        }
    }

    /// Set the menu category
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Set the ordered quantity
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// The effective category, with uncategorized items grouped as "unknown"
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("unknown")
    }
}

/// A booked service such as staffing or delivery
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    /// Service name as entered by the client (e.g. "Waiter", "Официант")
    pub name: String,
    /// Number of service units (people, vehicles, ...)
    pub quantity: Option<i64>,
    /// Duration in hours
    pub duration: Option<f64>,
    /// Quoted cost for this service line
    pub cost: Option<f64>,
}

impl ServiceItem {
    /// Create a service line with just a name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: None,
            duration: None,
            cost: None,
        }
    }

    /// Set the unit count
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the duration in hours
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the quoted cost
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }
}

/// Aggregate totals for the whole order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Totals {
    /// Total menu weight in grams
    pub total_weight: f64,
    /// Total order cost in currency units
    pub total_cost: f64,
    /// Cost of booked services, when broken out separately
    pub service_cost: Option<f64>,
}

/// A complete catering order snapshot.
///
/// The validation engine treats this as read-only input; it is constructed by
/// the caller per request and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Event information
    pub order_info: OrderInfo,
    /// Ordered menu positions
    pub menu_items: Vec<MenuItem>,
    /// Booked services
    pub services: Vec<ServiceItem>,
    /// Order totals
    pub totals: Totals,
}

impl Order {
    /// Create an empty order
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the guest count
    pub fn with_guests(mut self, guests: i64) -> Self {
        self.order_info.guests = guests;
        self
    }

    /// Set the event type
    pub fn with_event_type(mut self, event_type: EventType) -> Self {
        self.order_info.event_type = Some(event_type);
        self
    }

    /// Set the event date (`YYYY-MM-DD`)
    pub fn with_date(mut self, date: &str) -> Self {
        self.order_info.date = Some(date.to_string());
        self
    }

    /// Set the external order number
    pub fn with_number(mut self, number: &str) -> Self {
        self.order_info.number = Some(number.to_string());
        self
    }

    /// Append a menu item
    pub fn with_menu_item(mut self, item: MenuItem) -> Self {
        self.menu_items.push(item);
        self
    }

    /// Append a service line
    pub fn with_service(mut self, service: ServiceItem) -> Self {
        self.services.push(service);
        self
    }

    /// Set total weight (grams) and total cost
    pub fn with_totals(mut self, total_weight: f64, total_cost: f64) -> Self {
        self.totals.total_weight = total_weight;
        self.totals.total_cost = total_cost;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_builder() {
        let order = Order::new()
            .with_guests(25)
            .with_event_type(EventType::Banquet)
            .with_date("2026-09-15")
            .with_menu_item(MenuItem::new("Caesar salad").with_category("salads"))
            .with_service(ServiceItem::new("Waiter").with_quantity(2).with_duration(6.0))
            .with_totals(16_000.0, 120_000.0);

        assert_eq!(order.order_info.guests, 25);
        assert_eq!(order.order_info.event_type(), &EventType::Banquet);
        assert_eq!(order.menu_items.len(), 1);
        assert_eq!(order.services[0].quantity, Some(2));
        assert_eq!(order.totals.total_weight, 16_000.0);
    }

    #[test]
    fn test_event_type_defaults_to_buffet() {
        let info = OrderInfo::default();
        assert_eq!(info.event_type(), &EventType::Buffet);
    }

    #[test]
    fn test_missing_category_is_unknown() {
        let item = MenuItem::new("Bread basket");
        assert_eq!(item.category(), "unknown");
        assert_eq!(item.with_category("sides").category(), "sides");
    }

    #[test]
    fn test_deserialize_partial_json() {
        let order: Order = serde_json::from_str(r#"{"order_info":{"guests":10}}"#).unwrap();
        assert_eq!(order.order_info.guests, 10);
        assert_eq!(order.order_info.event_type(), &EventType::Buffet);
        assert!(order.menu_items.is_empty());
        assert_eq!(order.totals.total_cost, 0.0);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let order: Order = serde_json::from_str("{}").unwrap();
        assert_eq!(order, Order::default());
    }

    #[test]
    fn test_event_type_round_trip() {
        let known: EventType = serde_json::from_str(r#""coffee_break""#).unwrap();
        assert_eq!(known, EventType::CoffeeBreak);
        assert_eq!(serde_json::to_string(&known).unwrap(), r#""coffee_break""#);

        let unknown: EventType = serde_json::from_str(r#""wedding""#).unwrap();
        assert_eq!(unknown, EventType::Other("wedding".to_string()));
        assert_eq!(unknown.to_string(), "wedding");
    }
}
