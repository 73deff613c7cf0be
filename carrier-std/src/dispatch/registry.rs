//! Registry module for handler bindings.
//!
//! This module provides the [`Registry`], which maps event-type identifiers
//! to ordered handler bindings, and a [`RegistryBuilder`] for constructing
//! one fluently before it is shared.

use super::binding::Binding;
use super::dispatched::Dispatched;
use crate::cloudevents::{CloudEvent, CloudEventHeaders};
use crate::codec::JsonCodec;
use carrier_core::{Codec, DispatchError, Event, Handler};
use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use std::fmt;

/// Maps event-type identifiers to ordered lists of handler bindings.
///
/// Each binding decodes the payload into its own shape, so handlers with
/// structurally different payload types can share one identifier. All
/// handlers of a registry produce the same output type `R`.
///
/// `register` takes `&mut self` and `dispatch` takes `&self`: build the
/// registry first and share it read-only (e.g. behind an `Arc`), or guard it
/// with a lock if bindings are added while dispatches are running.
///
/// # Example
/// ```
/// use carrier_core::BoxError;
/// use carrier_std::dispatch::Registry;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct OrderCreated {
///     id: String,
///     total: f64,
/// }
///
/// let mut registry = Registry::new();
/// registry.register("order.created", |order: OrderCreated| -> Result<String, BoxError> {
///     Ok(format!("{} {}", order.id, order.total))
/// });
///
/// let dispatched = registry.dispatch("order.created", br#"{"id":"o1","total":42}"#);
/// assert_eq!(dispatched.into_result().unwrap(), vec!["o1 42".to_string()]);
/// ```
pub struct Registry<R, C = JsonCodec> {
    codec: C,
    table: HashMap<String, Vec<Binding<R, C>>>,
    // First-registration order of identifiers.
    order: Vec<String>,
}

impl<R: 'static> Registry<R, JsonCodec> {
    /// Create an empty registry using the JSON codec.
    pub fn new() -> Self {
        Self::with_codec(JsonCodec)
    }
}

impl<R: 'static> Default for Registry<R, JsonCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static, C: Codec> Registry<R, C> {
    /// Create an empty registry that decodes payloads with `codec`.
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            table: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Append a binding for `event_type`.
    ///
    /// The payload shape `T` is taken from the handler's parameter type.
    /// Registering the same handler twice yields two independent bindings.
    pub fn register<T, H>(&mut self, event_type: impl Into<String>, handler: H) -> &mut Self
    where
        T: DeserializeOwned + 'static,
        H: Handler<T, Output = R>,
    {
        let event_type = event_type.into();
        if !self.table.contains_key(&event_type) {
            self.order.push(event_type.clone());
        }
        let bindings = self.table.entry(event_type.clone()).or_default();
        let binding = Binding::new::<T, H>(bindings.len(), handler);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            event_type = %event_type,
            index = binding.index(),
            shape = %binding.shape(),
            "registered handler binding"
        );

        bindings.push(binding);
        self
    }

    /// Append a binding under `T::EVENT_TYPE`.
    pub fn register_event<T, H>(&mut self, handler: H) -> &mut Self
    where
        T: Event + DeserializeOwned + 'static,
        H: Handler<T, Output = R>,
    {
        self.register::<T, H>(T::EVENT_TYPE, handler)
    }

    /// Dispatch `payload` to every binding registered for `event_type`.
    ///
    /// Bindings run in registration order. The first decode or handler
    /// failure stops the dispatch; outputs collected before it are kept.
    pub fn dispatch(&self, event_type: &str, payload: &[u8]) -> Dispatched<R> {
        let Some(bindings) = self.table.get(event_type).filter(|b| !b.is_empty()) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(event_type, "no handler registered for event type");
            return Dispatched::failed(
                Vec::new(),
                DispatchError::UnknownEventType(event_type.to_owned()),
            );
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            event_type,
            bindings = bindings.len(),
            payload_len = payload.len(),
            "dispatching event"
        );

        let mut results = Vec::with_capacity(bindings.len());
        for binding in bindings {
            match binding.invoke(&self.codec, payload) {
                Ok(output) => results.push(output),
                Err(failure) => {
                    let err =
                        failure.into_dispatch_error(event_type, binding.index(), binding.shape());

                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        event_type,
                        index = binding.index(),
                        completed = results.len(),
                        error = %err,
                        "dispatch stopped"
                    );

                    return Dispatched::failed(results, err);
                }
            }
        }
        Dispatched::complete(results)
    }

    /// Encode a typed event with the registry's codec and dispatch it under
    /// `E::EVENT_TYPE`.
    pub fn dispatch_event<E>(&self, event: &E) -> Dispatched<R>
    where
        E: Event + Serialize,
    {
        match self.codec.encode(event) {
            Ok(payload) => self.dispatch(E::EVENT_TYPE, &payload),
            Err(source) => Dispatched::failed(
                Vec::new(),
                DispatchError::Encode {
                    event_type: E::EVENT_TYPE.to_owned(),
                    source,
                },
            ),
        }
    }

    /// Dispatch a binary-mode CloudEvent: the type comes from the `ce-type`
    /// header and `body` is the raw payload.
    pub fn dispatch_headers(&self, headers: &CloudEventHeaders, body: &[u8]) -> Dispatched<R> {
        self.dispatch(&headers.ty, body)
    }

    /// Bindings registered for `event_type`, in registration order.
    pub fn bindings(&self, event_type: &str) -> &[Binding<R, C>] {
        self.table
            .get(event_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The codec used to decode payloads.
    pub fn codec(&self) -> &C {
        &self.codec
    }
}

impl<R: 'static> Registry<R, JsonCodec> {
    /// Dispatch a structured-mode CloudEvent. Its `data` is re-encoded as
    /// JSON (`null` when absent) and dispatched under its `type`.
    pub fn dispatch_cloud_event(&self, event: &CloudEvent) -> Dispatched<R> {
        match serde_json::to_vec(&event.data) {
            Ok(payload) => self.dispatch(&event.ty, &payload),
            Err(err) => Dispatched::failed(
                Vec::new(),
                DispatchError::Encode {
                    event_type: event.ty.clone(),
                    source: err.into(),
                },
            ),
        }
    }
}

impl<R, C> Registry<R, C> {
    /// Identifiers with at least one binding, in first-registration order.
    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns `true` if `event_type` has at least one binding.
    pub fn contains(&self, event_type: &str) -> bool {
        self.table.get(event_type).is_some_and(|b| !b.is_empty())
    }

    /// Number of distinct event types.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Total number of bindings across all event types.
    pub fn binding_count(&self) -> usize {
        self.table.values().map(Vec::len).sum()
    }

    /// Check if the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<R, C> fmt::Debug for Registry<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for event_type in &self.order {
            map.entry(event_type, &self.table[event_type]);
        }
        map.finish()
    }
}

// ============================================================================
// RegistryBuilder - fluent construction
// ============================================================================

/// Builder for constructing a [`Registry`].
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register_event(on_signed_up)
///     .register("user.signedup", audit)
///     .build();
/// ```
pub struct RegistryBuilder<R, C = JsonCodec> {
    registry: Registry<R, C>,
}

impl<R: 'static> RegistryBuilder<R, JsonCodec> {
    /// Create a new empty builder using the JSON codec.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }
}

impl<R: 'static> Default for RegistryBuilder<R, JsonCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static, C: Codec> RegistryBuilder<R, C> {
    /// Create a new empty builder that decodes payloads with `codec`.
    pub fn with_codec(codec: C) -> Self {
        Self {
            registry: Registry::with_codec(codec),
        }
    }

    /// Register a handler under `event_type`.
    pub fn register<T, H>(mut self, event_type: impl Into<String>, handler: H) -> Self
    where
        T: DeserializeOwned + 'static,
        H: Handler<T, Output = R>,
    {
        self.registry.register::<T, H>(event_type, handler);
        self
    }

    /// Register a handler under `T::EVENT_TYPE`.
    pub fn register_event<T, H>(mut self, handler: H) -> Self
    where
        T: Event + DeserializeOwned + 'static,
        H: Handler<T, Output = R>,
    {
        self.registry.register_event::<T, H>(handler);
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry<R, C> {
        self.registry
    }
}

impl<R, C> RegistryBuilder<R, C> {
    /// Get the number of registered bindings.
    pub fn len(&self) -> usize {
        self.registry.binding_count()
    }

    /// Check if the builder has no bindings.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
