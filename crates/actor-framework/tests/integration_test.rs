use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Sequence-keyed entity ---

#[derive(Clone, Debug, PartialEq)]
struct Dish {
    id: u32,
    name: String,
    price_cents: u32,
    available: bool,
}

#[derive(Debug)]
struct DishCreate {
    name: String,
    price_cents: u32,
}

#[derive(Debug)]
struct DishUpdate {
    price_cents: Option<u32>,
}

#[derive(Debug)]
enum DishAction {
    ToggleAvailable,
}

#[derive(Debug)]
enum DishQuery {
    All,
    Available,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum DishError {
    #[error("price must be positive")]
    InvalidPrice,
}

#[async_trait]
impl ActorEntity for Dish {
    type Id = u32;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Action = DishAction;
    type ActionResult = bool;
    type Query = DishQuery;
    type Context = ();
    type Error = DishError;

    fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
        if params.price_cents == 0 {
            return Err(DishError::InvalidPrice);
        }
        Ok(Self {
            id,
            name: params.name,
            price_cents: params.price_cents,
            available: true,
        })
    }

    fn conflicts_with(&self, existing: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&existing.name)
    }

    fn matches(&self, query: &DishQuery) -> bool {
        match query {
            DishQuery::All => true,
            DishQuery::Available => self.available,
        }
    }

    async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = update.price_cents {
            if price == 0 {
                return Err(DishError::InvalidPrice);
            }
            self.price_cents = price;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: DishAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            DishAction::ToggleAvailable => {
                self.available = !self.available;
                Ok(self.available)
            }
        }
    }
}

// --- Owner-keyed entity ---

#[derive(Clone, Debug, PartialEq)]
struct Basket {
    owner: u32,
    dishes: Vec<u32>,
}

#[derive(Debug)]
struct BasketCreate {
    owner: u32,
}

#[derive(Debug)]
struct BasketUpdate;

#[derive(Debug)]
enum BasketAction {
    Add(u32),
}

#[derive(Debug, thiserror::Error)]
#[error("basket error")]
struct BasketError;

#[async_trait]
impl ActorEntity for Basket {
    type Id = u32;
    type Create = BasketCreate;
    type Update = BasketUpdate;
    type Action = BasketAction;
    type ActionResult = usize;
    type Query = ();
    type Context = ();
    type Error = BasketError;

    fn keyed_id(params: &BasketCreate) -> Option<u32> {
        Some(params.owner)
    }

    fn from_create_params(id: u32, _: BasketCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            owner: id,
            dishes: Vec::new(),
        })
    }

    async fn on_update(&mut self, _: BasketUpdate, _: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: BasketAction, _: &()) -> Result<usize, Self::Error> {
        match action {
            BasketAction::Add(dish) => {
                self.dishes.push(dish);
                Ok(self.dishes.len())
            }
        }
    }
}

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    let id = client
        .create(DishCreate {
            name: "Margherita Pizza".into(),
            price_cents: 1299,
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    let available = client
        .perform_action(id, DishAction::ToggleAvailable)
        .await
        .unwrap();
    assert!(!available);

    let updated = client
        .update(
            id,
            DishUpdate {
                price_cents: Some(1399),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price_cents, 1399);
    assert!(!updated.available);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(matches!(
        client.delete(id).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_failed_create_and_update_leave_store_untouched() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    let err = client
        .create(DishCreate {
            name: "Free Lunch".into(),
            price_cents: 0,
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.into_entity_error::<DishError>().unwrap(),
        DishError::InvalidPrice
    );

    let id = client
        .create(DishCreate {
            name: "Iced Coffee".into(),
            price_cents: 399,
        })
        .await
        .unwrap();
    // The rejected create still consumed id 1
    assert_eq!(id, 2);

    let err = client
        .update(id, DishUpdate { price_cents: Some(0) })
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));
    assert_eq!(client.get(id).await.unwrap().unwrap().price_cents, 399);
}

#[tokio::test]
async fn test_list_filters_with_query() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    for (name, price) in [("Caesar Salad", 799), ("Fish Tacos", 1199), ("Garlic Bread", 499)] {
        client
            .create(DishCreate {
                name: name.into(),
                price_cents: price,
            })
            .await
            .unwrap();
    }
    client
        .perform_action(2, DishAction::ToggleAvailable)
        .await
        .unwrap();

    assert_eq!(client.list(DishQuery::All).await.unwrap().len(), 3);

    let mut available: Vec<u32> = client
        .list(DishQuery::Available)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    available.sort();
    assert_eq!(available, vec![1, 3]);
}

#[tokio::test]
async fn test_keyed_entities() {
    let (actor, client) = ResourceActor::<Basket>::new(10);
    tokio::spawn(actor.run(()));

    let basket = client
        .get_or_create(BasketCreate { owner: 42 })
        .await
        .unwrap();
    assert_eq!(basket.owner, 42);
    assert!(basket.dishes.is_empty());

    assert_eq!(
        client.perform_action(42, BasketAction::Add(7)).await.unwrap(),
        1
    );

    // Second call returns the stored basket, not a fresh one
    let again = client
        .get_or_create(BasketCreate { owner: 42 })
        .await
        .unwrap();
    assert_eq!(again.dishes, vec![7]);

    assert!(matches!(
        client.create(BasketCreate { owner: 42 }).await,
        Err(FrameworkError::AlreadyExists(id)) if id == "42"
    ));
    assert_eq!(client.create(BasketCreate { owner: 5 }).await.unwrap(), 5);
}

#[tokio::test]
async fn test_unique_constraint_rejects_duplicate() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    client
        .create(DishCreate {
            name: "Fruit Smoothie".into(),
            price_cents: 499,
        })
        .await
        .unwrap();
    let err = client
        .create(DishCreate {
            name: "fruit smoothie".into(),
            price_cents: 599,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::AlreadyExists(_)));
    assert_eq!(client.list(DishQuery::All).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_closed_actor_is_unavailable() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    drop(actor);

    let err = client.get(1).await.unwrap_err();
    assert!(err.is_unavailable());
}
