use async_trait::async_trait;
use pizza_catalog::framework::{ActorEntity, FrameworkError, ResourceActor};

/// A minimal entity exercising every hook of the framework.
#[derive(Debug, Clone, PartialEq)]
struct Counter {
    id: u32,
    label: String,
    value: i32,
}

#[derive(Debug)]
struct CounterCreate {
    label: String,
}

#[derive(Debug)]
enum CounterAction {
    Add(i32),
    /// Bumps the value, then fails, so the change must not be kept.
    AddThenFail(i32),
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum CounterError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("label is reserved")]
    Reserved,
    #[error("action failed")]
    Failed,
    #[error("locked")]
    Locked,
}

#[async_trait]
impl ActorEntity for Counter {
    type Id = u32;
    type Create = CounterCreate;
    type Action = CounterAction;
    type ActionResult = i32;
    type Context = ();
    type Error = CounterError;

    fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, Self::Error> {
        if params.label.is_empty() {
            return Err(CounterError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            value: 0,
        })
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        if self.label == "reserved" {
            return Err(CounterError::Reserved);
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.label == "locked" {
            return Err(CounterError::Locked);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: CounterAction, _ctx: &()) -> Result<i32, Self::Error> {
        match action {
            CounterAction::Add(n) => {
                self.value += n;
                Ok(self.value)
            }
            CounterAction::AddThenFail(n) => {
                self.value += n;
                Err(CounterError::Failed)
            }
        }
    }
}

fn create(label: &str) -> CounterCreate {
    CounterCreate {
        label: label.to_string(),
    }
}

fn entity_error(e: FrameworkError) -> CounterError {
    e.into_entity_error::<CounterError>()
        .expect("expected an entity error")
}

#[tokio::test]
async fn test_create_get_list_delete() {
    let (actor, client) = ResourceActor::<Counter>::new(10);
    let handle = tokio::spawn(actor.run(()));

    let first = client.create(create("a")).await.unwrap();
    let second = client.create(create("b")).await.unwrap();
    let third = client.create(create("c")).await.unwrap();
    assert_eq!((first, second, third), (1, 2, 3));

    let listed: Vec<(u32, String)> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| (c.id, c.label))
        .collect();
    assert_eq!(
        listed,
        [(1, "a".to_string()), (2, "b".to_string()), (3, "c".to_string())]
    );

    client.delete(second).await.unwrap();
    assert_eq!(client.get(second).await.unwrap(), None);
    assert!(matches!(
        client.delete(second).await,
        Err(FrameworkError::NotFound(id)) if id == "2"
    ));

    // Ids are never reused
    assert_eq!(client.create(create("d")).await.unwrap(), 4);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_creates_store_nothing() {
    let (actor, client) = ResourceActor::<Counter>::new(10);
    let handle = tokio::spawn(actor.run(()));

    let err = client.create(create("")).await.unwrap_err();
    assert_eq!(entity_error(err), CounterError::EmptyLabel);

    let err = client.create(create("reserved")).await.unwrap_err();
    assert_eq!(entity_error(err), CounterError::Reserved);

    assert!(client.list().await.unwrap().is_empty());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_action_leaves_no_partial_state() {
    let (actor, client) = ResourceActor::<Counter>::new(10);
    let handle = tokio::spawn(actor.run(()));

    let id = client.create(create("a")).await.unwrap();
    assert_eq!(client.perform_action(id, CounterAction::Add(5)).await.unwrap(), 5);

    let err = client
        .perform_action(id, CounterAction::AddThenFail(100))
        .await
        .unwrap_err();
    assert_eq!(entity_error(err), CounterError::Failed);
    assert_eq!(client.get(id).await.unwrap().unwrap().value, 5);

    assert!(matches!(
        client.perform_action(99, CounterAction::Add(1)).await,
        Err(FrameworkError::NotFound(_))
    ));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_delete_hook_keeps_entity() {
    let (actor, client) = ResourceActor::<Counter>::new(10);
    let handle = tokio::spawn(actor.run(()));

    let id = client.create(create("locked")).await.unwrap();
    let err = client.delete(id).await.unwrap_err();
    assert_eq!(entity_error(err), CounterError::Locked);
    assert!(client.get(id).await.unwrap().is_some());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_closed_actor() {
    let (actor, client) = ResourceActor::<Counter>::new(10);
    drop(actor);

    assert!(matches!(
        client.get(1).await,
        Err(FrameworkError::ActorClosed)
    ));
}
