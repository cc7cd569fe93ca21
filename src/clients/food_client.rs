//! # Food Client
//!
//! Catalog operations over a `ResourceClient<Food>`.

use super::newest_first;
use crate::food_actor::FoodError;
use crate::model::{Food, FoodCreate, FoodId, FoodQuery, FoodUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Food actor.
#[derive(Clone)]
pub struct FoodClient {
    inner: ResourceClient<Food>,
}

impl FoodClient {
    pub fn new(inner: ResourceClient<Food>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Food> for FoodClient {
    type Error = FoodError;

    fn inner(&self) -> &ResourceClient<Food> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<FoodError>().unwrap_or_else(|e| match e {
            FrameworkError::NotFound(id) => FoodError::NotFound(id),
            other => FoodError::ActorCommunicationError(other.to_string()),
        })
    }
}

impl FoodClient {
    #[instrument(skip(self))]
    pub async fn create_food(&self, params: FoodCreate) -> Result<Food, FoodError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.find(id).await
    }

    /// Any item by id, available or not.
    #[instrument(skip(self))]
    pub async fn find(&self, id: FoodId) -> Result<Food, FoodError> {
        self.get(id)
            .await?
            .ok_or_else(|| FoodError::NotFound(id.to_string()))
    }

    /// Items matching `query`, newest first.
    #[instrument(skip(self))]
    pub async fn menu(&self, query: FoodQuery) -> Result<Vec<Food>, FoodError> {
        let items = self.list(query).await?;
        debug!(count = items.len(), "Menu listed");
        Ok(newest_first(items, |f| (f.created_at, f.id)))
    }

    #[instrument(skip(self))]
    pub async fn update_food(&self, id: FoodId, update: FoodUpdate) -> Result<Food, FoodError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, UserId};
    use actor_framework::mock::{create_mock_client, expect_list, MockClient};
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    fn food(id: u32, minutes_ago: i64) -> Food {
        let at = Utc::now() - Duration::minutes(minutes_ago);
        Food {
            id: FoodId(id),
            name: format!("Dish {id}"),
            category: Category::Snack,
            price: dec!(4.99),
            description: String::new(),
            image_url: String::new(),
            available: true,
            created_by: UserId(1),
            created_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn test_menu_sorts_newest_first() {
        let (client, mut receiver) = create_mock_client::<Food>(10);
        let foods = FoodClient::new(client);

        let task = tokio::spawn(async move { foods.menu(FoodQuery::menu(None, None)).await });

        let (query, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert!(!query.include_unavailable);
        responder
            .send(Ok(vec![food(1, 30), food(2, 5), food(3, 60)]))
            .unwrap();

        let ids: Vec<u32> = task.await.unwrap().unwrap().iter().map(|f| f.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[tokio::test]
    async fn test_find_missing_and_entity_errors() {
        let mut mock = MockClient::<Food>::new();
        mock.expect_get(FoodId(9)).return_ok(None);
        mock.expect_update(FoodId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                FoodError::ValidationError("Name is required".into()),
            )));
        mock.expect_update(FoodId(2))
            .return_err(FrameworkError::NotFound("food_2".into()));
        let foods = FoodClient::new(mock.client());

        assert_eq!(
            foods.find(FoodId(9)).await,
            Err(FoodError::NotFound("food_9".into()))
        );
        assert_eq!(
            foods.update_food(FoodId(1), FoodUpdate::default()).await,
            Err(FoodError::ValidationError("Name is required".into()))
        );
        assert!(matches!(
            foods.update_food(FoodId(2), FoodUpdate::default()).await,
            Err(FoodError::NotFound(_))
        ));
        mock.verify();
    }
}
