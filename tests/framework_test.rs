use async_trait::async_trait;
use customer_orders_count::framework::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Tally {
    id: u32,
    label: String,
    hits: u64,
}

#[derive(Debug)]
struct TallyCreate {
    label: String,
}

#[derive(Debug)]
enum TallyAction {
    Hit(u64),
    Reset,
}

#[derive(Debug, thiserror::Error)]
enum TallyError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("tally overflow")]
    Overflow,
}

#[async_trait]
impl ActorEntity for Tally {
    type Id = u32;
    type Create = TallyCreate;
    type Action = TallyAction;
    type ActionResult = u64;
    type Context = ();
    type Error = TallyError;

    fn from_create_params(id: u32, params: TallyCreate) -> Result<Self, Self::Error> {
        if params.label.is_empty() {
            return Err(TallyError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            hits: 0,
        })
    }

    async fn handle_action(&mut self, action: TallyAction, _ctx: &()) -> Result<u64, Self::Error> {
        match action {
            TallyAction::Hit(n) => {
                self.hits = self.hits.checked_add(n).ok_or(TallyError::Overflow)?;
            }
            TallyAction::Reset => self.hits = 0,
        }
        Ok(self.hits)
    }
}

fn create(label: &str) -> TallyCreate {
    TallyCreate {
        label: label.into(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client.create(create("visits")).await.unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // 2. Actions mutate the stored entity
    assert_eq!(client.perform_action(id, TallyAction::Hit(3)).await.unwrap(), 3);
    assert_eq!(client.perform_action(id, TallyAction::Hit(4)).await.unwrap(), 7);

    let tally: Tally = client.get(id).await.unwrap().unwrap();
    assert_eq!(tally.hits, 7);
    assert_eq!(tally.label, "visits");

    // 3. Entity errors travel back boxed
    let err = client
        .perform_action(id, TallyAction::Hit(u64::MAX))
        .await
        .unwrap_err();
    match err {
        FrameworkError::EntityError(source) => {
            assert!(matches!(source.downcast_ref::<TallyError>(), Some(TallyError::Overflow)));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(client.perform_action(id, TallyAction::Reset).await.unwrap(), 0);

    // 4. Unknown ids
    assert!(client.get(42).await.unwrap().is_none());
    assert!(matches!(
        client.perform_action(42, TallyAction::Reset).await,
        Err(FrameworkError::NotFound(id)) if id == "42"
    ));

    // 5. Dropping the last client stops the actor
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_list_pages_in_id_order() {
    let (actor, client) = ResourceActor::<Tally>::new(10);
    tokio::spawn(actor.run(()));

    for label in ["a", "b", "c", "d", "e"] {
        client.create(create(label)).await.unwrap();
    }

    let labels = |items: Vec<Tally>| items.into_iter().map(|t| t.label).collect::<Vec<_>>();

    assert_eq!(labels(client.list(0, None).await.unwrap()), ["a", "b", "c", "d", "e"]);
    assert_eq!(labels(client.list(0, Some(2)).await.unwrap()), ["a", "b"]);
    assert_eq!(labels(client.list(4, Some(2)).await.unwrap()), ["e"]);
    assert!(client.list(10, Some(2)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_filter_runs_inside_the_actor() {
    let (actor, client) = ResourceActor::<Tally>::new(10);
    tokio::spawn(actor.run(()));

    for label in ["alpha", "beta", "apex", "gamma"] {
        let id = client.create(create(label)).await.unwrap();
        client.perform_action(id, TallyAction::Hit(u64::from(id))).await.unwrap();
    }

    let matched = client
        .filter(|t: &Tally| t.label.starts_with('a'))
        .await
        .unwrap();
    let labels: Vec<&str> = matched.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["alpha", "apex"]);

    let busy = client.filter(|t: &Tally| t.hits >= 3).await.unwrap();
    assert_eq!(busy.iter().map(|t| t.id).collect::<Vec<_>>(), [3, 4]);

    assert!(client.filter(|_: &Tally| false).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_create_still_consumes_an_id() {
    let (actor, client) = ResourceActor::<Tally>::new(10);
    tokio::spawn(actor.run(()));

    assert!(matches!(
        client.create(create("")).await,
        Err(FrameworkError::EntityError(_))
    ));
    assert_eq!(client.create(create("kept")).await.unwrap(), 2);
    assert_eq!(client.list(0, None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_requests_after_actor_stopped_fail() {
    let (actor, client) = ResourceActor::<Tally>::new(10);
    drop(actor);

    assert!(matches!(client.get(1).await, Err(FrameworkError::ActorClosed)));
}
