//! Menu items.
//!
//! [`Food`] implements [`ActorEntity`](actor_framework::ActorEntity) in
//! [`crate::food_actor`].

use crate::model::{FoodId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Menu section. Serialized in kebab-case (`main-course`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Appetizer,
    MainCourse,
    Dessert,
    Beverage,
    Snack,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizer => "appetizer",
            Category::MainCourse => "main-course",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
            Category::Snack => "snack",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub category: Category,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
    pub available: bool,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for adding a menu item. `created_by` is filled in from the calling admin.
#[derive(Debug, Clone)]
pub struct FoodCreate {
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
    pub available: bool,
    pub created_by: UserId,
}

/// Partial update. Absent fields are left as they are.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodUpdate {
    pub name: Option<String>,
    pub category: Option<Category>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub available: Option<bool>,
}

/// Catalog filter.
///
/// `category` is compared against the kebab-case name, so an unknown category simply
/// matches nothing. `search` is a case-insensitive substring of the name.
#[derive(Debug, Clone, Default)]
pub struct FoodQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub include_unavailable: bool,
}

impl FoodQuery {
    /// The public menu: available items only. `"all"` and empty strings mean "no filter".
    pub fn menu(category: Option<String>, search: Option<String>) -> Self {
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && c != "all");
        let search = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        Self {
            category,
            search,
            include_unavailable: false,
        }
    }
}
