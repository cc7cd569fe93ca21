//! [`ActorEntity`] implementation for [`Food`].

use super::FoodError;
use crate::model::{Food, FoodCreate, FoodId, FoodQuery, FoodUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

fn validate_name(name: &str) -> Result<String, FoodError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FoodError::ValidationError("Name is required".into()));
    }
    Ok(name.to_string())
}

fn validate_price(price: Decimal) -> Result<Decimal, FoodError> {
    if price < Decimal::ZERO {
        return Err(FoodError::ValidationError(
            "Price must be zero or greater".into(),
        ));
    }
    Ok(price)
}

#[async_trait]
impl ActorEntity for Food {
    type Id = FoodId;
    type Create = FoodCreate;
    type Update = FoodUpdate;
    type Action = ();
    type ActionResult = ();
    type Query = FoodQuery;
    type Context = ();
    type Error = FoodError;

    fn from_create_params(id: FoodId, params: FoodCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        Ok(Self {
            id,
            name: validate_name(&params.name)?,
            category: params.category,
            price: validate_price(params.price)?,
            description: params.description.trim().to_string(),
            image_url: params.image_url.trim().to_string(),
            available: params.available,
            created_by: params.created_by,
            created_at: now,
            updated_at: now,
        })
    }

    fn matches(&self, query: &FoodQuery) -> bool {
        if !query.include_unavailable && !self.available {
            return false;
        }
        if let Some(category) = &query.category {
            if self.category.as_str() != category.as_str() {
                return false;
            }
        }
        match &query.search {
            Some(needle) => self.name.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        }
    }

    /// Applies the fields present in the update. Runs on a copy, so a validation failure
    /// on a later field leaves the stored item unchanged.
    async fn on_update(&mut self, update: FoodUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = validate_name(&name)?;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = validate_price(price)?;
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        if let Some(image_url) = update.image_url {
            self.image_url = image_url.trim().to_string();
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
