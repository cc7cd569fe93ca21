//! # Mock Clients
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! FIFO queue of expectations instead of a running actor. Use it to test code that sits
//! *around* a client (wrapper validation, error mapping, an actor whose context holds other
//! clients) without spawning the actors it depends on.
//!
//! | | `MockClient` | Real `ResourceActor` |
//! |---|---|---|
//! | State | none, answers are scripted | real store |
//! | Error injection | `return_err(..)` | needs the right state |
//! | Good for | wrapper logic, dependency failures | the entity itself, full flows |
//!
//! ## Testing Patterns
//!
//! 1. **Client logic**: script the inner client and call the wrapper.
//! 2. **Single actor**: `ResourceActor::new` + `run(())`, no mocks at all.
//! 3. **Actor with mocked dependencies**: run the real actor under test and pass mock
//!    clients as its context. The cart checkout tests in the application crate use this to
//!    make the order actor fail on demand.
//! 4. **Full system**: spawn everything through the application's lifecycle module.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Dish { id: u32, name: String }
//! #[derive(Debug)] struct DishCreate;
//! #[derive(Debug)] struct DishUpdate;
//! #[derive(Debug)] enum DishAction {}
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32; type Create = DishCreate; type Update = DishUpdate;
//!     type Action = DishAction; type ActionResult = (); type Query = ();
//!     type Context = (); type Error = DishError;
//!     fn from_create_params(id: u32, _: DishCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: String::new() })
//!     }
//!     async fn on_update(&mut self, _: DishUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: DishAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Dish>::new();
//!     mock.expect_get(1).return_ok(Some(Dish { id: 1, name: "Fish Tacos".into() }));
//!     mock.expect_get(2).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().name, "Fish Tacos");
//!     assert!(matches!(client.get(2).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For assertions on the request payload itself, [`create_mock_client`] returns the raw
//! receiver, and the `expect_*` free functions pull typed requests off it.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::error;

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// One scripted answer. The id carried by id-addressed variants is checked against the
/// incoming request.
enum Expectation<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    GetOrCreate(Result<T, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
    Action(T::Id, Result<T::ActionResult, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::Create(_) => "create",
            Expectation::Get(..) => "get",
            Expectation::GetOrCreate(_) => "get_or_create",
            Expectation::List(_) => "list",
            Expectation::Update(..) => "update",
            Expectation::Delete(..) => "delete",
            Expectation::Action(..) => "action",
        }
    }
}

fn request_name<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::GetOrCreate { .. } => "get_or_create",
        ResourceRequest::List { .. } => "list",
        ResourceRequest::Update { .. } => "update",
        ResourceRequest::Delete { .. } => "delete",
        ResourceRequest::Action { .. } => "action",
    }
}

/// Replies with the scripted response when the ids agree. A wrong id is recorded as a
/// mismatch and answered with `NotFound`.
fn answer<I, R>(
    mismatches: &Mutex<Vec<String>>,
    respond_to: Response<R>,
    want: I,
    got: I,
    response: Result<R, FrameworkError>,
) where
    I: PartialEq + std::fmt::Display,
{
    if want != got {
        error!(%got, %want, "Mock received request for an unexpected id");
        if let Ok(mut m) = mismatches.lock() {
            m.push(format!("got {got}, expected {want}"));
        }
        let _ = respond_to.send(Err(FrameworkError::NotFound(got.to_string())));
        return;
    }
    let _ = respond_to.send(response);
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests that do not match the head of the queue are answered with
/// `FrameworkError::ActorDropped`, and requests for the wrong id with
/// `FrameworkError::NotFound`. Both are counted; [`MockClient::verify`] panics if any were
/// seen or if expectations remain.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let seen = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().ok().and_then(|mut q| q.pop_front());

                match (request, next) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(want, r))) => {
                        answer(&seen, respond_to, want, id, r);
                    }
                    (
                        ResourceRequest::GetOrCreate { respond_to, .. },
                        Some(Expectation::GetOrCreate(r)),
                    ) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update(want, r)),
                    ) => {
                        answer(&seen, respond_to, want, id, r);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete(want, r)),
                    ) => {
                        answer(&seen, respond_to, want, id, r);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action(want, r)),
                    ) => {
                        answer(&seen, respond_to, want, id, r);
                    }
                    (request, next) => {
                        let got = request_name(&request);
                        let wanted = next.as_ref().map_or("nothing", |e| e.name());
                        error!(got, wanted, "Mock expectation mismatch");
                        if let Ok(mut m) = seen.lock() {
                            m.push(format!("got {got}, expected {wanted}"));
                        }
                        // Dropping the request drops its responder, so the caller sees ActorDropped.
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        if let Ok(mut q) = self.expectations.lock() {
            q.push_back(expectation);
        }
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<'_, T, T::Id> {
        ExpectationBuilder::new(self, Expectation::Create)
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, Option<T>> {
        ExpectationBuilder::new(self, move |r| Expectation::Get(id, r))
    }

    pub fn expect_get_or_create(&mut self) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, Expectation::GetOrCreate)
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<'_, T, Vec<T>> {
        ExpectationBuilder::new(self, Expectation::List)
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, move |r| Expectation::Update(id, r))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, ()> {
        ExpectationBuilder::new(self, move |r| Expectation::Delete(id, r))
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, T::ActionResult> {
        ExpectationBuilder::new(self, move |r| Expectation::Action(id, r))
    }

    /// Panics unless every expectation was consumed and no request arrived out of order.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().map(|m| m.clone()).unwrap_or_default();
        if !mismatches.is_empty() {
            panic!("Mock received unexpected requests: {}", mismatches.join("; "));
        }
        let remaining = self.expectations.lock().map(|q| q.len()).unwrap_or(0);
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Finishes an `expect_*` call with the scripted response.
pub struct ExpectationBuilder<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a>,
}

impl<'a, T: ActorEntity, R> ExpectationBuilder<'a, T, R> {
    fn new(
        mock: &'a MockClient<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a,
    ) -> Self {
        Self {
            mock,
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        self.mock.push((self.build)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.build)(Err(error)));
    }
}

/// Creates a client and the receiving end of its channel, for tests that inspect requests.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request if it is a List.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Next request if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Dish {
        id: u32,
        name: String,
        spicy: bool,
    }

    #[derive(Debug)]
    struct DishCreate {
        name: String,
    }

    #[derive(Debug)]
    struct DishUpdate;

    #[derive(Debug)]
    enum DishAction {
        MakeSpicy,
    }

    #[derive(Debug)]
    struct SpicyOnly;

    #[derive(Debug, thiserror::Error)]
    #[error("dish error")]
    struct DishError;

    #[async_trait]
    impl ActorEntity for Dish {
        type Id = u32;
        type Create = DishCreate;
        type Update = DishUpdate;
        type Action = DishAction;
        type ActionResult = bool;
        type Query = SpicyOnly;
        type Context = ();
        type Error = DishError;

        fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
                spicy: false,
            })
        }

        async fn on_update(&mut self, _: DishUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: DishAction, _: &()) -> Result<bool, Self::Error> {
            self.spicy = true;
            Ok(true)
        }
    }

    fn dish(id: u32, name: &str) -> Dish {
        Dish {
            id,
            name: name.to_string(),
            spicy: true,
        }
    }

    #[tokio::test]
    async fn test_raw_receiver_sees_payload() {
        let (client, mut receiver) = create_mock_client::<Dish>(10);

        let task = tokio::spawn(async move {
            client
                .create(DishCreate {
                    name: "Caesar Salad".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Caesar Salad");
        responder.send(Ok(4)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_scripted_answers_in_order() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_create().return_ok(1);
        mock.expect_list().return_ok(vec![dish(1, "Fish Tacos")]);
        mock.expect_action(1).return_ok(true);
        mock.expect_delete(1)
            .return_err(FrameworkError::NotFound("1".into()));

        let client = mock.client();
        let id = client
            .create(DishCreate {
                name: "Fish Tacos".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(client.list(SpicyOnly).await.unwrap().len(), 1);
        assert!(client.perform_action(1, DishAction::MakeSpicy).await.unwrap());
        assert!(matches!(
            client.delete(1).await,
            Err(FrameworkError::NotFound(_))
        ));

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "got 2, expected 1")]
    async fn test_wrong_id_is_not_found_and_fails_verify() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_get(1).return_ok(Some(dish(1, "Garlic Bread")));

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "2"));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "unexpected requests")]
    async fn test_verify_reports_mismatch() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().list(SpicyOnly).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
        mock.verify();
    }
}
