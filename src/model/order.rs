//! Orders placed from a cart.
//!
//! [`Order`] implements [`ActorEntity`](actor_framework::ActorEntity) in
//! [`crate::order_actor`]. Line prices are frozen when the order is created; only the
//! status changes afterwards.

use crate::model::{FoodId, OrderId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Returns true if moving from `self` to `next` is allowed.
    ///
    /// Delivered and cancelled orders are final. Staying in the same status is not a
    /// transition.
    pub fn can_transition_to(&self, next: &OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Confirmed)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Confirmed, OrderStatus::Preparing)
                | (OrderStatus::Preparing, OrderStatus::Delivered)
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub food_id: FoodId,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer: UserId,
    pub items: Vec<OrderLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub phone_number: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload built by the cart actor at checkout.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: UserId,
    pub items: Vec<OrderLine>,
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderQuery {
    All,
    Customer(UserId),
}
