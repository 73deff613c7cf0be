//! Error types for Carrier.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CarrierError`] - Top-level error type for all Carrier operations
//! - [`DispatchError`] - Errors during event dispatch
//! - [`EnvelopeError`] - Errors reading envelope metadata
//! - [`PublishError`] - Errors from outbound publishers

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Carrier operations.
#[derive(Error, Debug)]
pub enum CarrierError {
    /// An error occurred during event dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Envelope metadata could not be read.
    #[error("envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    /// An event could not be published.
    #[error("publish error: {0}")]
    Publish(#[from] PublishError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Terminal error of a single dispatch call.
///
/// Every variant halts the dispatch; results produced by earlier bindings are
/// still returned alongside it.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No binding is registered for the event type.
    #[error("no handler registered for event type: {0}")]
    UnknownEventType(String),

    /// The payload does not match the shape expected by a binding.
    #[error("payload for `{event_type}` does not match shape `{shape}` expected by binding {index}: {source}")]
    Decode {
        /// Event type being dispatched.
        event_type: String,
        /// Position of the binding in registration order.
        index: usize,
        /// Type name of the expected payload shape.
        shape: &'static str,
        /// Underlying codec error.
        #[source]
        source: BoxError,
    },

    /// A handler reported failure.
    #[error("handler at position {index} for `{event_type}` reported failure: {source}")]
    Handler {
        /// Event type being dispatched.
        event_type: String,
        /// Position of the binding in registration order.
        index: usize,
        /// Type name of the payload shape the handler accepts.
        shape: &'static str,
        /// Error returned by the handler.
        #[source]
        source: BoxError,
    },

    /// A typed event could not be encoded before dispatch.
    #[error("failed to encode `{event_type}` payload: {source}")]
    Encode {
        /// Event type being dispatched.
        event_type: String,
        /// Underlying codec error.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// The event type this error was raised for.
    pub fn event_type(&self) -> &str {
        match self {
            DispatchError::UnknownEventType(event_type)
            | DispatchError::Decode { event_type, .. }
            | DispatchError::Handler { event_type, .. }
            | DispatchError::Encode { event_type, .. } => event_type,
        }
    }

    /// Position of the binding that failed, if the failure is scoped to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            DispatchError::Decode { index, .. } | DispatchError::Handler { index, .. } => {
                Some(*index)
            }
            DispatchError::UnknownEventType(_) | DispatchError::Encode { .. } => None,
        }
    }

    /// Type name of the shape bound at the failing position.
    pub fn shape(&self) -> Option<&'static str> {
        match self {
            DispatchError::Decode { shape, .. } | DispatchError::Handler { shape, .. } => {
                Some(shape)
            }
            DispatchError::UnknownEventType(_) | DispatchError::Encode { .. } => None,
        }
    }

    /// Returns `true` if no binding exists for the event type.
    pub fn is_unknown_event_type(&self) -> bool {
        matches!(self, DispatchError::UnknownEventType(_))
    }

    /// Returns `true` if the payload failed to decode for some binding.
    pub fn is_decode(&self) -> bool {
        matches!(self, DispatchError::Decode { .. })
    }

    /// Returns `true` if a handler reported failure.
    pub fn is_handler(&self) -> bool {
        matches!(self, DispatchError::Handler { .. })
    }
}

/// Errors that can occur while reading envelope metadata.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// A required header was absent.
    #[error("missing required header: {0}")]
    MissingHeader(&'static str),

    /// The event type header was present but empty.
    #[error("event type header is empty")]
    EmptyType,
}

/// Errors that can occur while publishing an event.
#[derive(Error, Debug)]
pub enum PublishError {
    /// The event could not be encoded.
    #[error("failed to encode event: {0}")]
    Encode(#[source] BoxError),

    /// A loopback dispatch failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// The underlying transport rejected the event.
    #[error("failed to publish event: {0}")]
    Transport(#[source] BoxError),
}

// Convenience conversions
impl From<BoxError> for CarrierError {
    fn from(err: BoxError) -> Self {
        CarrierError::Custom(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_names_position_and_cause() {
        let err = DispatchError::Handler {
            event_type: "order.created".to_string(),
            index: 1,
            shape: "OrderCreated",
            source: "out of stock".into(),
        };
        assert_eq!(
            err.to_string(),
            "handler at position 1 for `order.created` reported failure: out of stock"
        );
        assert_eq!(err.index(), Some(1));
        assert_eq!(err.shape(), Some("OrderCreated"));
        assert!(err.is_handler());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unknown_event_type_has_no_index() {
        let err = DispatchError::UnknownEventType("order.cancelled".to_string());
        assert_eq!(err.event_type(), "order.cancelled");
        assert_eq!(err.index(), None);
        assert!(err.is_unknown_event_type());
        assert_eq!(
            err.to_string(),
            "no handler registered for event type: order.cancelled"
        );
    }

    #[test]
    fn test_carrier_error_from_dispatch() {
        let err: CarrierError = DispatchError::UnknownEventType("x".to_string()).into();
        assert!(matches!(err, CarrierError::Dispatch(_)));
    }
}
