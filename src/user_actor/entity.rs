//! [`ActorEntity`] implementation for [`User`].
//!
//! Users are never edited after registration. Emails and bearer tokens are unique; the
//! actor rejects a conflicting create through `conflicts_with`, so two concurrent
//! registrations with one email cannot both succeed.

use super::UserError;
use crate::model::{User, UserCreate, UserId, UserQuery};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Query = UserQuery;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim().to_string();
        let email = params.email.trim().to_lowercase();
        if name.is_empty() {
            return Err(UserError::ValidationError("Name is required".into()));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(UserError::ValidationError(
                "A valid email is required".into(),
            ));
        }
        let token = match params.token {
            Some(token) if token.trim().is_empty() => {
                return Err(UserError::ValidationError("Token must not be blank".into()))
            }
            Some(token) => token.trim().to_string(),
            None => Uuid::new_v4().simple().to_string(),
        };

        Ok(Self {
            id,
            name,
            email,
            role: params.role,
            token,
            created_at: Utc::now(),
        })
    }

    fn conflicts_with(&self, existing: &Self) -> bool {
        self.email == existing.email || self.token == existing.token
    }

    fn matches(&self, query: &UserQuery) -> bool {
        match query {
            UserQuery::Token(token) => &self.token == token,
        }
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
