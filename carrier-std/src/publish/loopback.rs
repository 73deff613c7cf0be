//! Loopback publisher that dispatches into a local registry.

use super::Publisher;
use crate::cloudevents::CloudEvent;
use crate::dispatch::Registry;
use async_trait::async_trait;
use carrier_core::PublishError;
use std::sync::Arc;

/// A publisher that delivers each event straight to a local [`Registry`].
///
/// Dispatch runs synchronously inside `publish`. Handler outputs are
/// discarded; the first dispatch failure is returned as
/// [`PublishError::Dispatch`].
pub struct LoopbackPublisher<R> {
    registry: Arc<Registry<R>>,
}

impl<R: 'static> LoopbackPublisher<R> {
    /// Create a loopback over a shared registry.
    pub fn new(registry: Arc<Registry<R>>) -> Self {
        Self { registry }
    }

    /// The registry events are dispatched into.
    pub fn registry(&self) -> &Arc<Registry<R>> {
        &self.registry
    }
}

impl<R> Clone for LoopbackPublisher<R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

#[async_trait]
impl<R: Send + 'static> Publisher for LoopbackPublisher<R> {
    async fn publish(&self, event: CloudEvent) -> Result<(), PublishError> {
        let dispatched = self.registry.dispatch_cloud_event(&event);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            id = %event.id,
            event_type = %event.ty,
            handled = dispatched.len(),
            complete = dispatched.is_complete(),
            "loopback dispatch"
        );

        dispatched.into_result()?;
        Ok(())
    }
}
