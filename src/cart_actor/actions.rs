//! Custom actions for the Cart actor.
//!
//! Every cart mutation is an action, so the total can be recomputed from the catalog inside
//! the actor on each change. See [`crate::cart_actor::entity`] for the handlers.

use crate::model::{Cart, Delivery, FoodId, LineId, Order};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Refresh prices from the catalog and return the cart.
    View,
    /// Add `quantity` of a food, merging with an existing line for the same food.
    AddItem { food_id: FoodId, quantity: u32 },
    /// Set a line's quantity. Zero or less removes the line.
    UpdateQuantity { line_id: LineId, quantity: i64 },
    RemoveLine(LineId),
    Clear,
    /// Turn the cart into a pending order and empty it.
    Checkout(Delivery),
}

/// Results from [`CartAction`]s. Every action except `Checkout` returns the updated cart.
#[derive(Debug, Clone)]
pub enum CartActionResult {
    Cart(Cart),
    Placed(Order),
}
