//! [`ActorEntity`] implementation for [`Cart`].
//!
//! Carts are keyed by their customer's id, so `GetOrCreate` gives each customer exactly
//! one cart. All mutations are [`CartAction`]s. Each one works on a copy of the cart and
//! the copy replaces the stored cart only when the whole action succeeded.
//!
//! Checkout runs here as well. The cart actor handles one request at a time, so between
//! reading the lines and clearing them no other add, update or checkout for the same cart
//! can run.

use super::{CartAction, CartActionResult, CartContext, CartError};
use crate::clients::FoodClient;
use crate::model::{
    Cart, CartCreate, CartLine, Delivery, FoodId, LineId, Order, OrderCreate, OrderLine, UserId,
};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

impl Cart {
    /// Copies current names and prices from the catalog, drops lines whose food was
    /// deleted, and recomputes the total.
    async fn refresh(&mut self, foods: &FoodClient) -> Result<(), CartError> {
        let mut kept = Vec::with_capacity(self.items.len());
        for mut line in std::mem::take(&mut self.items) {
            let food = foods
                .get(line.food_id)
                .await
                .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?;
            match food {
                Some(food) => {
                    line.name = food.name;
                    line.price = food.price;
                    kept.push(line);
                }
                None => {
                    warn!(customer = %self.customer, food_id = %line.food_id, "Dropping line for deleted food");
                }
            }
        }
        self.items = kept;
        self.total_amount = self
            .compute_total()
            .ok_or_else(|| CartError::ValidationError("Cart total is too large".into()))?;
        Ok(())
    }

    async fn add_item(
        &mut self,
        food_id: FoodId,
        quantity: u32,
        foods: &FoodClient,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ValidationError(
                "Quantity must be at least 1".into(),
            ));
        }
        let food = foods
            .get(food_id)
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?
            .filter(|f| f.available)
            .ok_or_else(CartError::food_not_found)?;

        match self.items.iter_mut().find(|l| l.food_id == food_id) {
            Some(line) => {
                line.quantity = line.quantity.checked_add(quantity).ok_or_else(|| {
                    CartError::ValidationError("Quantity is too large".into())
                })?;
            }
            None => {
                let id = LineId(self.next_line);
                self.next_line += 1;
                self.items.push(CartLine {
                    id,
                    food_id,
                    name: food.name,
                    price: food.price,
                    quantity,
                });
            }
        }
        Ok(())
    }

    fn set_quantity(&mut self, line_id: LineId, quantity: i64) -> Result<(), CartError> {
        let index = self
            .items
            .iter()
            .position(|l| l.id == line_id)
            .ok_or_else(CartError::line_not_found)?;
        if quantity <= 0 {
            self.items.remove(index);
            return Ok(());
        }
        self.items[index].quantity = u32::try_from(quantity)
            .map_err(|_| CartError::ValidationError("Quantity is too large".into()))?;
        Ok(())
    }

    fn remove_line(&mut self, line_id: LineId) -> Result<(), CartError> {
        let before = self.items.len();
        self.items.retain(|l| l.id != line_id);
        if self.items.len() == before {
            return Err(CartError::line_not_found());
        }
        Ok(())
    }

    async fn checkout(&mut self, delivery: Delivery, ctx: &CartContext) -> Result<Order, CartError> {
        let delivery_address = delivery.delivery_address.trim();
        let phone_number = delivery.phone_number.trim();
        if delivery_address.is_empty() || phone_number.is_empty() {
            return Err(CartError::ValidationError(
                "Delivery address and phone number are required".into(),
            ));
        }

        self.refresh(&ctx.foods).await?;
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let items = self
            .items
            .iter()
            .map(|l| OrderLine {
                food_id: l.food_id,
                name: l.name.clone(),
                quantity: l.quantity,
                price: l.price,
            })
            .collect();
        let order = ctx
            .orders
            .place(OrderCreate {
                customer: self.customer,
                items,
                total_amount: self.total_amount,
                delivery_address: delivery_address.to_string(),
                phone_number: phone_number.to_string(),
            })
            .await?;

        self.items.clear();
        Ok(order)
    }
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = UserId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Query = ();
    type Context = CartContext;
    type Error = CartError;

    fn keyed_id(params: &CartCreate) -> Option<UserId> {
        Some(params.customer)
    }

    fn from_create_params(id: UserId, _params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Cart::empty(id))
    }

    async fn on_update(&mut self, _update: (), _ctx: &CartContext) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartActionResult, Self::Error> {
        debug!(customer = %self.customer, ?action, "Cart action");
        let mut next = self.clone();
        let mut placed = None;

        match action {
            CartAction::View => {}
            CartAction::AddItem { food_id, quantity } => {
                next.add_item(food_id, quantity, &ctx.foods).await?;
            }
            CartAction::UpdateQuantity { line_id, quantity } => {
                next.set_quantity(line_id, quantity)?;
            }
            CartAction::RemoveLine(line_id) => next.remove_line(line_id)?,
            CartAction::Clear => next.items.clear(),
            CartAction::Checkout(delivery) => {
                placed = Some(next.checkout(delivery, ctx).await?);
            }
        }

        next.refresh(&ctx.foods).await?;
        next.updated_at = Utc::now();
        *self = next;

        Ok(match placed {
            Some(order) => CartActionResult::Placed(order),
            None => CartActionResult::Cart(self.clone()),
        })
    }
}
