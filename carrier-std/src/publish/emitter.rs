//! Typed event emitter.

use super::Publisher;
use crate::cloudevents::CloudEvent;
use crate::config::PublisherConfig;
use carrier_core::{Event, PublishError};
use serde::Serialize;

/// Wraps typed events in CloudEvents and hands them to a [`Publisher`].
///
/// # Example
///
/// ```rust,ignore
/// let emitter = Emitter::new(PublisherConfig::new("//iam/service"), publisher);
/// let id = emitter.emit(&UserSignedUp { id: "u1".into(), at: now }).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Emitter<P> {
    config: PublisherConfig,
    publisher: P,
}

impl<P: Publisher> Emitter<P> {
    /// Create an emitter publishing through `publisher`.
    pub fn new(config: PublisherConfig, publisher: P) -> Self {
        Self { config, publisher }
    }

    /// Publish `event` and return the id assigned to it.
    pub async fn emit<E>(&self, event: &E) -> Result<String, PublishError>
    where
        E: Event + Serialize + Sync,
    {
        let cloud_event = CloudEvent::from_event(self.config.source.as_str(), event)
            .map_err(|err| PublishError::Encode(err.into()))?;
        let id = cloud_event.id.clone();

        #[cfg(feature = "tracing")]
        tracing::debug!(id = %id, event_type = E::EVENT_TYPE, "emitting event");

        self.publisher.publish(cloud_event).await?;
        Ok(id)
    }

    /// The emitter's configuration.
    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// The underlying publisher.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}
