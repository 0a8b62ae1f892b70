//! # Mock Framework
//!
//! Utilities for testing code that talks to an actor without spawning the actor.
//!
//! Two styles are available:
//!
//! - **Channel helpers**: [`create_mock_client`] hands back a client and the receiver its
//!   requests land on. Helpers like [`expect_create`] or [`expect_action`] pull the next
//!   request so the test can assert on it and answer it.
//! - **Fluent expectations**: [`MockClient`] answers requests from a queue of expectations
//!   set up front, then [`MockClient::verify`] checks they were all consumed.
//!
//! | | MockClient | Real Actor |
//! |---|---|---|
//! | **State** | Canned responses | Real store |
//! | **Error Injection** | Easy (`return_err`) | Requires specific state |
//! | **Use Case** | Logic *around* a client | The actor itself or the full system |

use super::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to give it.
///
/// Requests addressed to one resource carry the id they must name.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get { .. } => "get",
            Expectation::List { .. } => "list",
            Expectation::Create { .. } => "create",
            Expectation::Delete { .. } => "delete",
            Expectation::Action { .. } => "action",
        }
    }
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::List { .. } => "list",
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::Delete { .. } => "delete",
        ResourceRequest::Action { .. } => "action",
    }
}

type ExpectationQueue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;
type Mismatches = Arc<Mutex<Vec<String>>>;

// A panicking test must not hide the queue from `verify`.
fn lock<V>(shared: &Mutex<V>) -> MutexGuard<'_, V> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn check_id<Id: PartialEq + std::fmt::Debug>(
    kind: &str,
    expected: &Id,
    actual: &Id,
) -> Result<(), String> {
    if expected == actual {
        Ok(())
    } else {
        Err(format!("{kind} expected id {expected:?}, got {actual:?}"))
    }
}

/// Answers one request from the expectation at the front of the queue.
///
/// On a mismatch the responder is dropped unanswered, so the caller sees `ActorDropped`.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Result<(), String> {
    match (request, expectation) {
        (
            ResourceRequest::Get { id, respond_to },
            Some(Expectation::Get { id: expected, response }),
        ) => {
            check_id("get", &expected, &id)?;
            let _ = respond_to.send(response);
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: expected, response }),
        ) => {
            check_id("delete", &expected, &id)?;
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: expected, response }),
        ) => {
            check_id("action", &expected, &id)?;
            let _ = respond_to.send(response);
        }
        (request, Some(expectation)) => {
            return Err(format!(
                "expected {} request, got {}",
                expectation.kind(),
                request_kind(&request)
            ));
        }
        (request, None) => {
            return Err(format!("unexpected {} request", request_kind(&request)));
        }
    }
    Ok(())
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were declared. A request whose kind or id
/// does not match the next expectation is left unanswered, so the caller gets
/// `ActorDropped`, and the mismatch is reported by [`MockClient::verify`].
///
/// # Example
/// ```
/// use pizza_catalog::framework::mock::MockClient;
/// use pizza_catalog::model::{Pizza, PizzaId};
///
/// #[tokio::main]
/// async fn main() {
///     let mut mock = MockClient::<Pizza>::new();
///     mock.expect_get(PizzaId(1)).return_ok(Some(Pizza::new(PizzaId(1), "Emma", "Dough, Cheese")));
///
///     let client = mock.client();
///     let pizza = client.get(PizzaId(1)).await.unwrap().unwrap();
///     assert_eq!(pizza.name, "Emma");
///
///     mock.verify();
/// }
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: ExpectationQueue<T>,
    mismatches: Mismatches,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: ExpectationQueue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches: Mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let failed = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();
                if let Err(mismatch) = answer(request, expectation) {
                    lock(&failed).push(mismatch);
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

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` of `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, move |response| {
            Expectation::Get { id, response }
        })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create { response })
    }

    /// Expects a `delete` of `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(&self.expectations, move |response| {
            Expectation::Delete { id, response }
        })
    }

    /// Expects an action against `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(&self.expectations, move |response| {
            Expectation::Action { id, response }
        })
    }

    /// Verifies that every request matched and all expectations were met.
    pub fn verify(&self) {
        let mismatches = lock(&self.mismatches);
        if !mismatches.is_empty() {
            panic!("Mismatched requests: {}", mismatches.join("; "));
        }
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

type Wrap<T, R> = Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>;

/// Builder that completes an expectation with its response.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: ExpectationQueue<T>,
    wrap: Wrap<T, R>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: &ExpectationQueue<T>,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        lock(&self.expectations).push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the part of the actor: it reads requests from `receiver`, asserts on
/// them and answers through the embedded `respond_to` channel.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
