//! Start-up data: the admin account and, optionally, the sample menu.

use crate::clients::{FoodClient, UserClient};
use crate::config::Config;
use crate::model::{Category, FoodCreate, FoodQuery, Role, User, UserCreate};
use anyhow::Context;
use rust_decimal::Decimal;
use tracing::{info, warn};

const SAMPLE_MENU: [(&str, Category, i64, &str, &str); 8] = [
    (
        "Margherita Pizza",
        Category::MainCourse,
        1299,
        "Classic pizza with fresh tomatoes, mozzarella cheese, and basil leaves",
        "https://images.unsplash.com/photo-1604382355076-af4b0eb60143?w=500",
    ),
    (
        "Chicken Burger",
        Category::MainCourse,
        999,
        "Juicy grilled chicken breast with lettuce, tomato, and mayo in a sesame bun",
        "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=500",
    ),
    (
        "Caesar Salad",
        Category::Appetizer,
        799,
        "Fresh romaine lettuce with parmesan cheese, croutons, and caesar dressing",
        "https://images.unsplash.com/photo-1546793665-c74683f339c1?w=500",
    ),
    (
        "Chocolate Cake",
        Category::Dessert,
        599,
        "Rich and moist chocolate cake with chocolate frosting",
        "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=500",
    ),
    (
        "Iced Coffee",
        Category::Beverage,
        399,
        "Cold brew coffee served over ice with a splash of milk",
        "https://images.unsplash.com/photo-1461023058943-07fcbe16d735?w=500",
    ),
    (
        "Fish Tacos",
        Category::MainCourse,
        1199,
        "Grilled fish with cabbage slaw and lime crema in soft tortillas",
        "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=500",
    ),
    (
        "Fruit Smoothie",
        Category::Beverage,
        499,
        "Fresh mixed fruit smoothie with yogurt and honey",
        "https://images.unsplash.com/photo-1553530666-ba11a7da3888?w=500",
    ),
    (
        "Garlic Bread",
        Category::Appetizer,
        499,
        "Toasted bread with garlic butter and herbs",
        "https://images.unsplash.com/photo-1573140247632-f8fd74997d5c?w=500",
    ),
];

/// Creates the configured admin. A generated token is logged, since there is no other
/// way to learn it.
pub async fn seed_admin(users: &UserClient, config: &Config) -> anyhow::Result<User> {
    let admin = users
        .create_user(UserCreate {
            name: config.admin_name.clone(),
            email: config.admin_email.clone(),
            role: Role::Admin,
            token: config.admin_token.clone(),
        })
        .await
        .context("failed to create admin account")?;

    if config.admin_token.is_some() {
        info!(user_id = %admin.id, email = %admin.email, "Admin account ready");
    } else {
        warn!(user_id = %admin.id, email = %admin.email, token = %admin.token, "Admin account ready with generated token");
    }
    Ok(admin)
}

/// Adds the sample menu, owned by `admin`, unless the catalog already has items.
pub async fn seed_catalog(foods: &FoodClient, admin: &User) -> anyhow::Result<usize> {
    let existing = foods
        .menu(FoodQuery {
            include_unavailable: true,
            ..FoodQuery::default()
        })
        .await?;
    if !existing.is_empty() {
        info!(count = existing.len(), "Catalog already populated");
        return Ok(0);
    }

    for (name, category, cents, description, image_url) in SAMPLE_MENU {
        foods
            .create_food(FoodCreate {
                name: name.to_string(),
                category,
                price: Decimal::new(cents, 2),
                description: description.to_string(),
                image_url: image_url.to_string(),
                available: true,
                created_by: admin.id,
            })
            .await
            .with_context(|| format!("failed to add {name}"))?;
    }
    info!(count = SAMPLE_MENU.len(), "Sample menu added");
    Ok(SAMPLE_MENU.len())
}
