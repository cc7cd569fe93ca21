use crate::api::AppState;
use crate::cart_actor::CartContext;
use crate::clients::{CartClient, FoodClient, OrderClient, UserClient};
use anyhow::bail;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Starts the four resource actors and owns their clients.
///
/// Food, order and user actors have no dependencies. The cart actor gets the food and
/// order clients as its context, so it can refresh prices and place orders.
///
/// ```ignore
/// let system = FoodSystem::new(32);
/// let cart = system.cart_client.add_item(customer, food_id, 2).await?;
/// system.shutdown().await?;
/// ```
pub struct FoodSystem {
    pub food_client: FoodClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub user_client: UserClient,
    handles: Vec<JoinHandle<()>>,
}

impl FoodSystem {
    /// Spawns every actor with a channel of `buffer_size`. Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (food_actor, food_client) = crate::food_actor::new(buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(buffer_size);
        let (user_actor, user_client) = crate::user_actor::new(buffer_size);
        let (cart_actor, cart_client) = crate::cart_actor::new(buffer_size);

        let food_handle = tokio::spawn(food_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));
        let user_handle = tokio::spawn(user_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(CartContext {
            foods: food_client.clone(),
            orders: order_client.clone(),
        }));

        Self {
            food_client,
            cart_client,
            order_client,
            user_client,
            handles: vec![cart_handle, food_handle, order_handle, user_handle],
        }
    }

    /// Clients for the HTTP handlers.
    pub fn state(&self) -> AppState {
        AppState {
            foods: self.food_client.clone(),
            carts: self.cart_client.clone(),
            orders: self.order_client.clone(),
            users: self.user_client.clone(),
        }
    }

    /// Drops the clients and waits for every actor to drain its queue and stop.
    ///
    /// Actors stop once every clone of their client is gone, so any [`AppState`] handed
    /// out must be dropped first. The cart actor stops before the food and order actors,
    /// since it holds their clients.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        info!("Shutting down system...");
        drop(self.cart_client);
        drop(self.food_client);
        drop(self.order_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                bail!("Actor task failed: {e}");
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
