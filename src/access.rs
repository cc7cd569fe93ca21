//! # Access Control
//!
//! Every request is resolved to a [`Caller`] once, by the [`resolve_caller`] middleware,
//! from its `Authorization: Bearer <token>` header. Handlers state the capability they need
//! by taking a [`CustomerCaller`] or [`AdminCaller`] argument; routes without one are public.

use crate::api::ApiError;
use crate::clients::UserClient;
use crate::model::{User, UserId};
use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use thiserror::Error;
use tracing::debug;

/// Who is making the request.
#[derive(Debug, Clone, PartialEq)]
pub enum Caller {
    Anonymous,
    Authenticated(User),
}

/// The minimum capability a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Customer,
    Admin,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Not authorized, no valid token")]
    Unauthorized,
    #[error("Not authorized as an admin")]
    Forbidden,
}

/// Checks `caller` against `access`. Returns the user for authenticated callers, `None`
/// for an anonymous caller on a public route. Admins satisfy customer routes.
pub fn authorize(caller: &Caller, access: Access) -> Result<Option<&User>, AccessError> {
    match (caller, access) {
        (Caller::Anonymous, Access::Public) => Ok(None),
        (Caller::Anonymous, _) => Err(AccessError::Unauthorized),
        (Caller::Authenticated(user), Access::Admin) if !user.is_admin() => {
            Err(AccessError::Forbidden)
        }
        (Caller::Authenticated(user), _) => Ok(Some(user)),
    }
}

/// Allows the resource's owner and admins.
pub fn ensure_owner_or_admin(user: &User, owner: UserId) -> Result<(), AccessError> {
    if user.id == owner || user.is_admin() {
        Ok(())
    } else {
        Err(AccessError::Forbidden)
    }
}

fn bearer_token(request: &Request) -> Option<&str> {
    let value = request.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

/// Middleware that stores the request's [`Caller`] in its extensions. An unknown token
/// leaves the caller anonymous.
pub async fn resolve_caller(
    State(users): State<UserClient>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&request).map(str::to_owned);
    let caller = match token {
        Some(token) => match users.find_by_token(&token).await? {
            Some(user) => Caller::Authenticated(user),
            None => {
                debug!("Unknown bearer token");
                Caller::Anonymous
            }
        },
        None => Caller::Anonymous,
    };
    request.extensions_mut().insert(caller);
    Ok(next.run(request).await)
}

fn caller_from(parts: &Parts) -> &Caller {
    parts.extensions.get::<Caller>().unwrap_or(&Caller::Anonymous)
}

fn require(parts: &Parts, access: Access) -> Result<User, ApiError> {
    authorize(caller_from(parts), access)?
        .cloned()
        .ok_or(ApiError::from(AccessError::Unauthorized))
}

/// An authenticated customer or admin.
#[derive(Debug, Clone)]
pub struct CustomerCaller(pub User);

impl<S: Send + Sync> FromRequestParts<S> for CustomerCaller {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require(parts, Access::Customer).map(CustomerCaller)
    }
}

/// An authenticated admin.
#[derive(Debug, Clone)]
pub struct AdminCaller(pub User);

impl<S: Send + Sync> FromRequestParts<S> for AdminCaller {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require(parts, Access::Admin).map(AdminCaller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use axum::body::Body;
    use axum::http;
    use chrono::Utc;

    fn user(id: u32, role: Role) -> User {
        User {
            id: UserId(id),
            name: "Test".into(),
            email: format!("user{id}@example.com"),
            role,
            token: format!("token-{id}"),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_authorize_matrix() {
        let customer = Caller::Authenticated(user(1, Role::Customer));
        let admin = Caller::Authenticated(user(2, Role::Admin));

        assert_eq!(authorize(&Caller::Anonymous, Access::Public), Ok(None));
        assert_eq!(
            authorize(&Caller::Anonymous, Access::Customer),
            Err(AccessError::Unauthorized)
        );
        assert_eq!(
            authorize(&Caller::Anonymous, Access::Admin),
            Err(AccessError::Unauthorized)
        );
        assert!(authorize(&customer, Access::Customer).is_ok());
        assert_eq!(
            authorize(&customer, Access::Admin),
            Err(AccessError::Forbidden)
        );
        assert!(authorize(&admin, Access::Customer).is_ok());
        assert!(authorize(&admin, Access::Admin).is_ok());
    }

    #[test]
    fn test_owner_or_admin() {
        let owner = user(1, Role::Customer);
        let other = user(2, Role::Customer);
        let admin = user(3, Role::Admin);

        assert!(ensure_owner_or_admin(&owner, UserId(1)).is_ok());
        assert_eq!(
            ensure_owner_or_admin(&other, UserId(1)),
            Err(AccessError::Forbidden)
        );
        assert!(ensure_owner_or_admin(&admin, UserId(1)).is_ok());
    }

    #[test]
    fn test_bearer_token_parsing() {
        let request = http::Request::builder()
            .header(AUTHORIZATION, "Bearer abc123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&request), Some("abc123"));

        let request = http::Request::builder()
            .header(AUTHORIZATION, "Basic abc123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&request), None);
    }

    #[tokio::test]
    async fn test_extractors_read_extensions() {
        let (mut parts, _) = http::Request::builder()
            .body(Body::empty())
            .unwrap()
            .into_parts();
        assert!(matches!(
            CustomerCaller::from_request_parts(&mut parts, &()).await,
            Err(ApiError::Unauthorized(_))
        ));

        parts
            .extensions
            .insert(Caller::Authenticated(user(1, Role::Customer)));
        let CustomerCaller(found) = CustomerCaller::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(found.id, UserId(1));
        assert!(matches!(
            AdminCaller::from_request_parts(&mut parts, &()).await,
            Err(ApiError::Forbidden(_))
        ));
    }
}
