//! # Order Client
//!
//! Reads and status changes over a `ResourceClient<Order>`. Orders themselves are placed
//! by the cart actor through [`OrderClient::place`].

use super::newest_first;
use crate::model::{Order, OrderCreate, OrderId, OrderQuery, OrderStatus, OrderUpdate, UserId};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<OrderError>().unwrap_or_else(|e| match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })
    }
}

impl OrderClient {
    /// Stores a new pending order and returns it.
    #[instrument(skip(self, params), fields(customer = %params.customer, lines = params.items.len()))]
    pub async fn place(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "place called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order placed");
        self.find(id).await
    }

    #[instrument(skip(self))]
    pub async fn find(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// A customer's orders, most recent first.
    #[instrument(skip(self))]
    pub async fn for_customer(&self, customer: UserId) -> Result<Vec<Order>, OrderError> {
        let orders = self.list(OrderQuery::Customer(customer)).await?;
        Ok(newest_first(orders, |o| (o.created_at, o.id)))
    }

    /// Every order, most recent first.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.list(OrderQuery::All).await?;
        Ok(newest_first(orders, |o| (o.created_at, o.id)))
    }

    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self
            .inner
            .update(id, OrderUpdate { status })
            .await
            .map_err(Self::map_error)?;
        info!(order_id = %id, %status, "Order status changed");
        Ok(order)
    }
}
