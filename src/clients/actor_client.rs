use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Implementors only say how to reach the generic client and how to turn a
/// [`FrameworkError`] into their own error type; `get` comes for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}

/// Implements [`ActorClient`] for `<Entity>Client` with `<Entity>Error` as its
/// error type. Entity errors raised inside the actor come back as themselves;
/// plumbing failures become `ActorCommunicationError`.
///
/// Expects a struct `<Entity>Client { inner: ResourceClient<Entity> }` and an
/// `<Entity>Error` enum with `NotFound(String)` and
/// `ActorCommunicationError(String)` variants, both in scope.
macro_rules! impl_actor_client {
    ($entity:ident) => {
        paste::paste! {
            #[async_trait::async_trait]
            impl $crate::clients::ActorClient<$crate::model::$entity> for [<$entity Client>] {
                type Error = [<$entity Error>];

                fn inner(&self) -> &$crate::framework::ResourceClient<$crate::model::$entity> {
                    &self.inner
                }

                fn map_error(e: $crate::framework::FrameworkError) -> Self::Error {
                    use $crate::framework::FrameworkError;
                    match e {
                        FrameworkError::NotFound(id) => [<$entity Error>]::NotFound(id),
                        FrameworkError::EntityError(source) => {
                            match source.downcast::<[<$entity Error>]>() {
                                Ok(err) => *err,
                                Err(other) => {
                                    [<$entity Error>]::ActorCommunicationError(other.to_string())
                                }
                            }
                        }
                        other => [<$entity Error>]::ActorCommunicationError(other.to_string()),
                    }
                }
            }
        }
    };
}

pub(crate) use impl_actor_client;
