//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are only ever created by a cart checkout, and afterwards only their status
//! moves. Deletion is refused.

use super::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderLine, OrderQuery, OrderUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

fn line_total(items: &[OrderLine]) -> Option<Decimal> {
    items.iter().try_fold(Decimal::ZERO, |total, l| {
        total.checked_add(l.price.checked_mul(Decimal::from(l.quantity))?)
    })
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Query = OrderQuery;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::ValidationError(
                "Order must contain at least one item".into(),
            ));
        }
        if params.items.iter().any(|l| l.quantity == 0) {
            return Err(OrderError::ValidationError(
                "Order item quantity must be at least 1".into(),
            ));
        }
        let delivery_address = params.delivery_address.trim().to_string();
        let phone_number = params.phone_number.trim().to_string();
        if delivery_address.is_empty() || phone_number.is_empty() {
            return Err(OrderError::ValidationError(
                "Delivery address and phone number are required".into(),
            ));
        }

        let computed = line_total(&params.items)
            .ok_or_else(|| OrderError::ValidationError("Order total is too large".into()))?;
        if computed != params.total_amount {
            return Err(OrderError::TotalMismatch {
                captured: params.total_amount,
                computed,
            });
        }

        let now = Utc::now();
        Ok(Self {
            id,
            customer: params.customer,
            items: params.items,
            total_amount: params.total_amount,
            delivery_address,
            phone_number,
            status: crate::model::OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        match query {
            OrderQuery::All => true,
            OrderQuery::Customer(customer) => self.customer == *customer,
        }
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if !self.status.can_transition_to(&update.status) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: update.status,
            });
        }
        self.status = update.status;
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        Err(OrderError::ValidationError("Orders cannot be deleted".into()))
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
