//! # Generic Actor Server
//!
//! `ResourceActor` owns every entity of one type and processes requests
//! sequentially, so the store needs no locking.

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// The store is a `BTreeMap` keyed by id so `List` requests page through
/// entities in a stable, ascending order. Ids are handed out from a counter
/// starting at 1; once `u32::MAX` has been used, further creates fail with
/// [`FrameworkError::IdsExhausted`].
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on a Tokio task.
///
/// ```rust,ignore
/// let (customer_actor, customer_client) = ResourceActor::<Customer>::new(32);
/// let (order_actor, order_client) = ResourceActor::<Order>::new(32);
///
/// tokio::spawn(customer_actor.run(()));
/// tokio::spawn(order_actor.run(CustomerClient::new(customer_client.clone())));
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: Option<u32>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when
    /// it is full. A capacity of 0 is raised to 1.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: Some(1),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(raw_id) = self.next_id else {
                        warn!(entity_type, "Id space exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    let id = T::Id::from(raw_id);
                    self.next_id = raw_id.checked_add(1);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List {
                    offset,
                    limit,
                    respond_to,
                } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .skip(offset)
                        .take(limit.unwrap_or(usize::MAX))
                        .cloned()
                        .collect();
                    debug!(entity_type, offset, ?limit, returned = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Filter {
                    predicate,
                    respond_to,
                } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| predicate(item))
                        .cloned()
                        .collect();
                    debug!(entity_type, scanned = self.store.len(), returned = items.len(), "Filter");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::ActorEntity;
    use async_trait::async_trait;

    #[derive(Clone, Debug)]
    struct Tag {
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tag error")]
    struct TagError;

    #[async_trait]
    impl ActorEntity for Tag {
        type Id = u32;
        type Create = String;
        type Action = ();
        type ActionResult = ();
        type Context = ();
        type Error = TagError;

        fn from_create_params(_id: u32, label: String) -> Result<Self, Self::Error> {
            Ok(Self { label })
        }

        async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn create_after_last_id_is_refused() {
        let (mut actor, client) = ResourceActor::<Tag>::new(4);
        actor.next_id = Some(u32::MAX);
        tokio::spawn(actor.run(()));

        assert_eq!(client.create("last".into()).await.unwrap(), u32::MAX);
        assert!(matches!(
            client.create("overflow".into()).await,
            Err(FrameworkError::IdsExhausted)
        ));

        let stored = client.list(0, None).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].label, "last");
    }

    #[tokio::test]
    async fn zero_capacity_still_serves_requests() {
        let (actor, client) = ResourceActor::<Tag>::new(0);
        tokio::spawn(actor.run(()));

        assert_eq!(client.create("only".into()).await.unwrap(), 1);
    }
}
