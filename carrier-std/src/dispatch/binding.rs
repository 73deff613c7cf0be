//! Type-erased handler bindings.

use carrier_core::{BoxError, Codec, DispatchError, Handler, Shape};
use serde::de::DeserializeOwned;
use std::fmt;

type Invoke<R, C> = dyn Fn(&C, &[u8]) -> Result<R, BindingFailure> + Send + Sync;

/// Why a single binding stopped a dispatch.
pub(crate) enum BindingFailure {
    /// The payload did not decode into the binding's shape.
    Decode(BoxError),
    /// The handler ran and reported failure.
    Handler(BoxError),
}

impl BindingFailure {
    pub(crate) fn into_dispatch_error(
        self,
        event_type: &str,
        index: usize,
        shape: Shape,
    ) -> DispatchError {
        match self {
            BindingFailure::Decode(source) => DispatchError::Decode {
                event_type: event_type.to_owned(),
                index,
                shape: shape.type_name(),
                source,
            },
            BindingFailure::Handler(source) => DispatchError::Handler {
                event_type: event_type.to_owned(),
                index,
                shape: shape.type_name(),
                source,
            },
        }
    }
}

/// A handler paired with the payload shape it decodes.
///
/// The concrete shape `T` is captured when the binding is created and erased
/// behind a byte-level invocation, so bindings with different shapes can
/// share one list. Immutable once created.
pub struct Binding<R, C> {
    index: usize,
    shape: Shape,
    invoke: Box<Invoke<R, C>>,
}

impl<R: 'static, C: Codec> Binding<R, C> {
    pub(crate) fn new<T, H>(index: usize, handler: H) -> Self
    where
        T: DeserializeOwned + 'static,
        H: Handler<T, Output = R>,
    {
        let invoke = move |codec: &C, payload: &[u8]| -> Result<R, BindingFailure> {
            // Fresh value per binding; nothing is shared between decodes.
            let decoded: T = codec.decode(payload).map_err(BindingFailure::Decode)?;
            handler
                .call(decoded)
                .map_err(|err| BindingFailure::Handler(err.into()))
        };
        Self {
            index,
            shape: Shape::of::<T>(),
            invoke: Box::new(invoke),
        }
    }

    pub(crate) fn invoke(&self, codec: &C, payload: &[u8]) -> Result<R, BindingFailure> {
        (self.invoke)(codec, payload)
    }
}

impl<R, C> Binding<R, C> {
    /// Position of this binding among those registered for its event type.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The payload shape this binding decodes into.
    pub fn shape(&self) -> Shape {
        self.shape
    }
}

impl<R, C> fmt::Debug for Binding<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("index", &self.index)
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}
