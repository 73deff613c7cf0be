//! # carrier - Event-Type Dispatch Registry
//!
//! `carrier` routes an opaque event-type identifier plus a serialized payload
//! to every handler registered for that identifier. Each handler declares its
//! own payload shape as its parameter type; the registry decodes the payload
//! once per handler, so handlers with different shapes can share one
//! identifier.
//!
//! ## Quick Start
//!
//! ```rust
//! use carrier::{BoxError, Event, Registry};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Event)]
//! #[event(type = "order.created")]
//! struct OrderCreated {
//!     id: String,
//!     total: f64,
//! }
//!
//! #[derive(Deserialize)]
//! struct OrderRef {
//!     id: String,
//! }
//!
//! let mut registry = Registry::new();
//! registry
//!     .register_event(|order: OrderCreated| -> Result<String, BoxError> {
//!         Ok(format!("billed {}", order.total))
//!     })
//!     .register("order.created", |order: OrderRef| -> Result<String, BoxError> {
//!         Ok(format!("shipping {}", order.id))
//!     });
//!
//! let dispatched = registry.dispatch("order.created", br#"{"id":"o1","total":42}"#);
//! assert_eq!(dispatched.into_result()?, vec!["billed 42", "shipping o1"]);
//! # Ok::<(), carrier::DispatchError>(())
//! ```
//!
//! ## Failure Semantics
//!
//! Dispatch stops at the first failure. The returned [`Dispatched`] keeps the
//! outputs of the bindings that ran before it, and its error is one of
//! [`DispatchError::UnknownEventType`], [`DispatchError::Decode`] or
//! [`DispatchError::Handler`]. Nothing is retried or logged by default;
//! enable the `tracing` feature for `debug!` events.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use carrier_core::{
    // Error types
    BoxError,
    CarrierError,
    // Codec
    Codec,
    DispatchError,
    EnvelopeError,
    // Event
    Event,
    // Handler
    Handler,
    PublishError,
    Shape,
};

// Dispatch
pub use carrier_std::{
    codec::JsonCodec,
    dispatch::{Binding, Dispatched, Registry, RegistryBuilder},
};

/// CloudEvents envelope support.
pub mod cloudevents {
    #![allow(clippy::wildcard_imports)]
    pub use carrier_std::cloudevents::*;
}

/// Publisher configuration.
pub mod config {
    pub use carrier_std::config::PublisherConfig;
}

/// Outbound publishing.
pub mod publish {
    pub use carrier_std::publish::{
        Emitter, LoopbackPublisher, MemoryPublisher, Publisher,
    };
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use carrier_std::testing::*;
}

/// Prelude module - common imports for Carrier.
///
/// # Usage
///
/// ```rust,ignore
/// use carrier::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Codec, DispatchError, Dispatched, Event, Handler, JsonCodec, Registry,
        RegistryBuilder,
        cloudevents::{CloudEvent, CloudEventHeaders},
        publish::{Emitter, Publisher},
    };
}

pub use async_trait::async_trait;

#[cfg(feature = "macros")]
pub use carrier_macros::Event;
