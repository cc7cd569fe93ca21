//! # Cart Client
//!
//! Wraps a `ResourceClient<Cart>`. Reads and adds create the cart lazily through
//! `GetOrCreate`; edits of a cart that was never created fail with `NotFound`.

use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{Cart, CartCreate, Delivery, FoodId, LineId, Order, UserId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<CartError>().unwrap_or_else(|e| match e {
            FrameworkError::NotFound(_) => CartError::cart_not_found(),
            other => CartError::ActorCommunicationError(other.to_string()),
        })
    }
}

fn expect_cart(result: CartActionResult) -> Result<Cart, CartError> {
    match result {
        CartActionResult::Cart(cart) => Ok(cart),
        CartActionResult::Placed(order) => Err(CartError::ActorCommunicationError(format!(
            "unexpected order {} from cart action",
            order.id
        ))),
    }
}

impl CartClient {
    async fn act(&self, customer: UserId, action: CartAction) -> Result<Cart, CartError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(customer, action)
            .await
            .map_err(Self::map_error)?;
        expect_cart(result)
    }

    async fn ensure_cart(&self, customer: UserId) -> Result<(), CartError> {
        self.inner
            .get_or_create(CartCreate { customer })
            .await
            .map_err(Self::map_error)?;
        Ok(())
    }

    /// The customer's cart with prices refreshed from the catalog. Created empty if absent.
    #[instrument(skip(self))]
    pub async fn view(&self, customer: UserId) -> Result<Cart, CartError> {
        self.ensure_cart(customer).await?;
        self.act(customer, CartAction::View).await
    }

    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        customer: UserId,
        food_id: FoodId,
        quantity: i64,
    ) -> Result<Cart, CartError> {
        if quantity < 1 {
            return Err(CartError::ValidationError(
                "Quantity must be at least 1".into(),
            ));
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| CartError::ValidationError("Quantity is too large".into()))?;
        self.ensure_cart(customer).await?;
        self.act(customer, CartAction::AddItem { food_id, quantity })
            .await
    }

    /// Sets a line's quantity; zero or less removes the line.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        customer: UserId,
        line_id: LineId,
        quantity: i64,
    ) -> Result<Cart, CartError> {
        self.act(customer, CartAction::UpdateQuantity { line_id, quantity })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_line(&self, customer: UserId, line_id: LineId) -> Result<Cart, CartError> {
        self.act(customer, CartAction::RemoveLine(line_id)).await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, customer: UserId) -> Result<Cart, CartError> {
        self.act(customer, CartAction::Clear).await
    }

    /// Places an order from the cart's lines and empties the cart.
    #[instrument(skip(self, delivery))]
    pub async fn checkout(&self, customer: UserId, delivery: Delivery) -> Result<Order, CartError> {
        if delivery.delivery_address.trim().is_empty() || delivery.phone_number.trim().is_empty() {
            return Err(CartError::ValidationError(
                "Delivery address and phone number are required".into(),
            ));
        }
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(customer, CartAction::Checkout(delivery))
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => CartError::EmptyCart,
                other => Self::map_error(other),
            })?;
        match result {
            CartActionResult::Placed(order) => {
                info!(order_id = %order.id, total = %order.total_amount, "Checked out");
                Ok(order)
            }
            CartActionResult::Cart(_) => Err(CartError::ActorCommunicationError(
                "checkout returned no order".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};
    use actor_framework::ResourceRequest;

    fn delivery() -> Delivery {
        Delivery {
            delivery_address: "1 Main St".into(),
            phone_number: "555-0100".into(),
        }
    }

    #[tokio::test]
    async fn test_add_item_validates_before_sending() {
        let mock = MockClient::<Cart>::new();
        let carts = CartClient::new(mock.client());

        assert!(matches!(
            carts.add_item(UserId(1), FoodId(1), 0).await,
            Err(CartError::ValidationError(_))
        ));
        assert!(matches!(
            carts.add_item(UserId(1), FoodId(1), -3).await,
            Err(CartError::ValidationError(_))
        ));
        assert!(matches!(
            carts.add_item(UserId(1), FoodId(1), i64::MAX).await,
            Err(CartError::ValidationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_checkout_blank_delivery_is_rejected_locally() {
        let mock = MockClient::<Cart>::new();
        let carts = CartClient::new(mock.client());

        let result = carts
            .checkout(
                UserId(1),
                Delivery {
                    delivery_address: "  ".into(),
                    phone_number: "555".into(),
                },
            )
            .await;
        assert!(matches!(result, Err(CartError::ValidationError(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_cart_errors() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(UserId(7))
            .return_err(FrameworkError::NotFound("user_7".into()));
        mock.expect_action(UserId(7))
            .return_err(FrameworkError::NotFound("user_7".into()));
        let carts = CartClient::new(mock.client());

        assert_eq!(carts.clear(UserId(7)).await, Err(CartError::cart_not_found()));
        assert_eq!(
            carts.checkout(UserId(7), delivery()).await,
            Err(CartError::EmptyCart)
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_view_creates_then_refreshes() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let carts = CartClient::new(client);

        let task = tokio::spawn(async move { carts.view(UserId(3)).await });

        match receiver.recv().await {
            Some(ResourceRequest::GetOrCreate { params, respond_to }) => {
                assert_eq!(params.customer, UserId(3));
                respond_to.send(Ok(Cart::empty(UserId(3)))).unwrap();
            }
            _ => panic!("Expected GetOrCreate request"),
        }
        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, UserId(3));
        assert!(matches!(action, CartAction::View));
        responder
            .send(Ok(CartActionResult::Cart(Cart::empty(UserId(3)))))
            .unwrap();

        let cart = task.await.unwrap().unwrap();
        assert!(cart.is_empty());
    }
}
