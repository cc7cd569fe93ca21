//! Whole-system tests: every actor real, wired by `FoodSystem`.

use actor_framework::ActorClient;
use food_ordering::cart_actor::CartError;
use food_ordering::lifecycle::{seed_catalog, FoodSystem};
use food_ordering::model::{
    Cart, Delivery, Food, FoodQuery, FoodUpdate, LineId, Order, OrderId, OrderStatus, Role, User,
    UserCreate, UserId,
};
use food_ordering::order_actor::OrderError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

async fn setup() -> (FoodSystem, User, Vec<Food>) {
    let system = FoodSystem::new(32);
    let admin = system
        .user_client
        .create_user(UserCreate {
            name: "Admin".into(),
            email: "admin@example.com".into(),
            role: Role::Admin,
            token: Some("admin-token".into()),
        })
        .await
        .unwrap();
    seed_catalog(&system.food_client, &admin).await.unwrap();
    let menu = system.food_client.menu(FoodQuery::default()).await.unwrap();
    (system, admin, menu)
}

fn by_name<'a>(menu: &'a [Food], name: &str) -> &'a Food {
    menu.iter().find(|f| f.name == name).unwrap()
}

fn delivery() -> Delivery {
    Delivery {
        delivery_address: "1 Main St".into(),
        phone_number: "555-0100".into(),
    }
}

fn assert_total(cart: &Cart) {
    let sum: Decimal = cart
        .items
        .iter()
        .map(|l| l.price * Decimal::from(l.quantity))
        .sum();
    assert_eq!(cart.total_amount, sum);
    assert!(cart.items.iter().all(|l| l.quantity >= 1));
}

fn ids(orders: &[Order]) -> Vec<OrderId> {
    orders.iter().map(|o| o.id).collect()
}

async fn customer(system: &FoodSystem, email: &str) -> UserId {
    system.user_client.register("Customer", email).await.unwrap().id
}

#[tokio::test]
async fn test_search_and_category_filters() {
    let (system, _, menu) = setup().await;
    assert_eq!(menu.len(), 8);

    let found = system
        .food_client
        .menu(FoodQuery::menu(None, Some("piz".into())))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Margherita Pizza");

    let drinks = system
        .food_client
        .menu(FoodQuery::menu(Some("beverage".into()), None))
        .await
        .unwrap();
    assert_eq!(drinks.len(), 2);

    let all = system
        .food_client
        .menu(FoodQuery::menu(Some("all".into()), None))
        .await
        .unwrap();
    assert_eq!(all.len(), 8);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_total_tracks_every_mutation() {
    let (system, _, menu) = setup().await;
    let alice = customer(&system, "alice@example.com").await;
    let carts = &system.cart_client;
    let pizza = by_name(&menu, "Margherita Pizza");
    let bread = by_name(&menu, "Garlic Bread");

    let cart = carts.add_item(alice, pizza.id, 1).await.unwrap();
    assert_total(&cart);
    let cart = carts.add_item(alice, pizza.id, 1).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 2);
    assert_total(&cart);

    let cart = carts.add_item(alice, bread.id, 3).await.unwrap();
    let bread_line = cart.items[1].id;
    assert_eq!(cart.total_amount, dec!(40.95));

    let cart = carts.update_quantity(alice, bread_line, 1).await.unwrap();
    assert_eq!(cart.total_amount, dec!(30.97));
    assert_total(&cart);

    let cart = carts.update_quantity(alice, bread_line, 0).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_total(&cart);

    assert_eq!(
        carts.update_quantity(alice, bread_line, 2).await,
        Err(CartError::line_not_found())
    );
    assert_eq!(
        carts.remove_line(alice, LineId(42)).await,
        Err(CartError::line_not_found())
    );

    let cart = carts.clear(alice).await.unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.total_amount, Decimal::ZERO);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_edits_need_an_existing_cart() {
    let (system, _, _) = setup().await;
    let bob = customer(&system, "bob@example.com").await;

    assert_eq!(
        system.cart_client.clear(bob).await,
        Err(CartError::cart_not_found())
    );
    assert_eq!(
        system.cart_client.remove_line(bob, LineId(1)).await,
        Err(CartError::cart_not_found())
    );
    assert_eq!(
        system.cart_client.checkout(bob, delivery()).await,
        Err(CartError::EmptyCart)
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_freezes_prices_and_clears_cart() {
    let (system, _, menu) = setup().await;
    let alice = customer(&system, "alice@example.com").await;
    let pizza = by_name(&menu, "Margherita Pizza");
    let bread = by_name(&menu, "Garlic Bread");

    system.cart_client.add_item(alice, pizza.id, 2).await.unwrap();
    system.cart_client.add_item(alice, bread.id, 1).await.unwrap();
    let order = system.cart_client.checkout(alice, delivery()).await.unwrap();

    assert_eq!(order.total_amount, dec!(30.97));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 2);
    assert!(system.cart_client.view(alice).await.unwrap().is_empty());

    // Later price changes do not touch the placed order.
    system
        .food_client
        .update_food(
            pizza.id,
            FoodUpdate {
                price: Some(dec!(20)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let stored = system.order_client.find(order.id).await.unwrap();
    assert_eq!(stored.total_amount, dec!(30.97));
    assert_eq!(stored.items[0].price, dec!(12.99));

    assert_eq!(
        system.cart_client.checkout(alice, delivery()).await,
        Err(CartError::EmptyCart)
    );
    assert_eq!(system.order_client.for_customer(alice).await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_prices_follow_the_catalog() {
    let (system, _, menu) = setup().await;
    let alice = customer(&system, "alice@example.com").await;
    let tacos = by_name(&menu, "Fish Tacos");
    let cake = by_name(&menu, "Chocolate Cake");

    system.cart_client.add_item(alice, tacos.id, 2).await.unwrap();
    system.cart_client.add_item(alice, cake.id, 1).await.unwrap();
    system
        .food_client
        .update_food(
            tacos.id,
            FoodUpdate {
                price: Some(dec!(10)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let cart = system.cart_client.view(alice).await.unwrap();
    assert_eq!(cart.total_amount, dec!(25.99));

    system.food_client.delete(cake.id).await.unwrap();
    let cart = system.cart_client.view(alice).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.total_amount, dec!(20));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_double_checkout_places_one_order() {
    let (system, _, menu) = setup().await;
    let alice = customer(&system, "alice@example.com").await;
    let coffee = by_name(&menu, "Iced Coffee");
    system.cart_client.add_item(alice, coffee.id, 3).await.unwrap();

    let first = system.cart_client.clone();
    let second = system.cart_client.clone();
    let (a, b) = tokio::join!(
        tokio::spawn(async move { first.checkout(alice, delivery()).await }),
        tokio::spawn(async move { second.checkout(alice, delivery()).await }),
    );
    let results = [a.unwrap(), b.unwrap()];

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results.iter().any(|r| r == &Err(CartError::EmptyCart)));
    let orders = system.order_client.for_customer(alice).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].total_amount, dec!(11.97));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_status_transitions() {
    let (system, _, menu) = setup().await;
    let alice = customer(&system, "alice@example.com").await;
    let salad = by_name(&menu, "Caesar Salad");
    system.cart_client.add_item(alice, salad.id, 1).await.unwrap();
    let order = system.cart_client.checkout(alice, delivery()).await.unwrap();
    let orders = &system.order_client;

    assert!(matches!(
        orders.update_status(order.id, OrderStatus::Delivered).await,
        Err(OrderError::InvalidTransition { .. })
    ));
    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Delivered,
    ] {
        let updated = orders.update_status(order.id, status).await.unwrap();
        assert_eq!(updated.status, status);
    }
    assert!(matches!(
        orders.update_status(order.id, OrderStatus::Cancelled).await,
        Err(OrderError::InvalidTransition { .. })
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let system = FoodSystem::new(8);
    system
        .user_client
        .register("Alice", "alice@example.com")
        .await
        .unwrap();
    let again = system
        .user_client
        .register("Alice Again", "ALICE@example.com")
        .await;
    assert!(again.is_err());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_orders_are_listed_per_customer_newest_first() {
    let (system, _, menu) = setup().await;
    let alice = customer(&system, "alice@example.com").await;
    let bob = customer(&system, "bob@example.com").await;
    let coffee = by_name(&menu, "Iced Coffee");
    let carts = &system.cart_client;

    let mut placed = Vec::new();
    for who in [alice, bob, alice] {
        carts.add_item(who, coffee.id, 1).await.unwrap();
        placed.push(carts.checkout(who, delivery()).await.unwrap());
    }

    let mine = system.order_client.for_customer(alice).await.unwrap();
    assert!(mine.iter().all(|o| o.customer == alice));
    assert_eq!(ids(&mine), vec![placed[2].id, placed[0].id]);

    let theirs = system.order_client.for_customer(bob).await.unwrap();
    assert_eq!(ids(&theirs), vec![placed[1].id]);

    let all = system.order_client.all().await.unwrap();
    assert_eq!(ids(&all), vec![placed[2].id, placed[1].id, placed[0].id]);

    let cancelled = system
        .order_client
        .update_status(placed[1].id, OrderStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert!(matches!(
        system
            .order_client
            .update_status(placed[1].id, OrderStatus::Confirmed)
            .await,
        Err(OrderError::InvalidTransition { .. })
    ));

    system.shutdown().await.unwrap();
}
