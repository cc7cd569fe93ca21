use crate::model::{FoodId, LineId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a cart. `name` and `price` are copies taken from the catalog at the last
/// recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: LineId,
    pub food_id: FoodId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    /// `None` when the product does not fit in a [`Decimal`].
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// A customer's cart, stored under the customer's id.
///
/// `total_amount` is always the sum of the line subtotals; it is recomputed by the cart
/// actor and never taken from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub customer: UserId,
    pub items: Vec<CartLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub(crate) next_line: u32,
}

impl Cart {
    pub fn empty(customer: UserId) -> Self {
        Self {
            customer,
            items: Vec::new(),
            total_amount: Decimal::ZERO,
            updated_at: Utc::now(),
            next_line: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn compute_total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.subtotal()?))
    }
}

#[derive(Debug, Clone)]
pub struct CartCreate {
    pub customer: UserId,
}

/// Delivery details supplied when a cart is checked out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub phone_number: String,
}
