//! In-memory publisher.

use super::Publisher;
use crate::cloudevents::CloudEvent;
use async_trait::async_trait;
use carrier_core::PublishError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A publisher that keeps every event in memory, in publish order.
///
/// Clones share the same storage, so a clone handed to an [`Emitter`] can be
/// inspected through the original.
///
/// [`Emitter`]: super::Emitter
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<CloudEvent>>>,
}

impl MemoryPublisher {
    /// Create an empty publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the published events.
    pub fn events(&self) -> Vec<CloudEvent> {
        self.lock().clone()
    }

    /// Get the number of published events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing has been published.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Take all published events, leaving the publisher empty.
    pub fn drain(&self) -> Vec<CloudEvent> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CloudEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Publisher for MemoryPublisher {
    async fn publish(&self, event: CloudEvent) -> Result<(), PublishError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(id = %event.id, event_type = %event.ty, "recorded event");

        self.lock().push(event);
        Ok(())
    }
}
