//! # User Client
//!
//! Registration and bearer-token lookup over a `ResourceClient<User>`.

use crate::model::{Role, User, UserCreate, UserId, UserQuery};
use crate::user_actor::UserError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<UserError>().unwrap_or_else(|e| match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::AlreadyExists(_) => {
                UserError::AlreadyExists("User already exists".into())
            }
            other => UserError::ActorCommunicationError(other.to_string()),
        })
    }
}

impl UserClient {
    /// Creates a customer account.
    #[instrument(skip(self))]
    pub async fn register(&self, name: &str, email: &str) -> Result<User, UserError> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(UserError::ValidationError(
                "Name and email are required".into(),
            ));
        }
        let params = UserCreate {
            name: name.to_string(),
            email: email.to_string(),
            role: Role::Customer,
            token: None,
        };
        let user = self.create_user(params).await.map_err(|e| match e {
            UserError::AlreadyExists(_) => {
                UserError::AlreadyExists("Email already registered".into())
            }
            other => other,
        })?;
        info!(user_id = %user.id, "Registered");
        Ok(user)
    }

    #[instrument(skip(self, params), fields(email = %params.email, role = ?params.role))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.find(id).await
    }

    #[instrument(skip(self))]
    pub async fn find(&self, id: UserId) -> Result<User, UserError> {
        self.get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// The account holding `token`, if any.
    #[instrument(skip_all)]
    pub async fn find_by_token(&self, token: &str) -> Result<Option<User>, UserError> {
        let users = self.list(UserQuery::Token(token.to_string())).await?;
        Ok(users.into_iter().next())
    }
}
