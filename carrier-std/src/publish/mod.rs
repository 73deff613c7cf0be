//! Outbound publishing.
//!
//! [`Publisher`] is the seam to a message bus. Carrier ships no cloud
//! transport; it provides an in-memory recorder ([`MemoryPublisher`]), a
//! loopback into a local [`Registry`](crate::dispatch::Registry)
//! ([`LoopbackPublisher`]), and an [`Emitter`] that turns typed events into
//! CloudEvents for any publisher.
//!
//! Publishing makes no delivery, retry, or ordering guarantees across calls.

mod emitter;
mod loopback;
mod memory;

pub use emitter::Emitter;
pub use loopback::LoopbackPublisher;
pub use memory::MemoryPublisher;

use crate::cloudevents::CloudEvent;
use async_trait::async_trait;
use carrier_core::PublishError;
use std::sync::Arc;

/// Sends CloudEvents to a message bus.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish one event.
    async fn publish(&self, event: CloudEvent) -> Result<(), PublishError>;
}

#[async_trait]
impl<P: Publisher + ?Sized> Publisher for Arc<P> {
    async fn publish(&self, event: CloudEvent) -> Result<(), PublishError> {
        (**self).publish(event).await
    }
}

#[async_trait]
impl<P: Publisher + ?Sized> Publisher for Box<P> {
    async fn publish(&self, event: CloudEvent) -> Result<(), PublishError> {
        (**self).publish(event).await
    }
}
