//! Typed identifiers.
//!
//! Every id is a `u32` newtype so a `FoodId` can never be passed where an `OrderId` is
//! expected. On the wire they are plain numbers; in logs they carry a prefix (`order_3`).

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! entity_id {
    ($name:ident, $prefix:literal) => {
        paste::paste! {
            #[doc = concat!("Type-safe identifier for ", stringify!($name), " records.")]
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct [<$name Id>](pub u32);

            impl From<u32> for [<$name Id>] {
                fn from(id: u32) -> Self {
                    Self(id)
                }
            }

            impl Display for [<$name Id>] {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, concat!($prefix, "_{}"), self.0)
                }
            }
        }
    };
}

entity_id!(Food, "food");
entity_id!(User, "user");
entity_id!(Order, "order");
entity_id!(Line, "line");
