//! # Handler
//!
//! The typed side of dispatch. A handler receives one decoded payload of a
//! concrete shape and returns one output or a failure.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|event: OrderCreated| Ok::<_, BoxError>("ok")`
//! 2. **Struct implementation**: `impl Handler<OrderCreated> for Billing`
//!
//! The registry never sees the payload type directly: it captures `T` when a
//! handler is registered and erases it behind a byte-level invocation.

use crate::error::BoxError;
use std::any::type_name;
use std::fmt;

/// A callable that processes one decoded payload of shape `T`.
///
/// Closures of the form `Fn(T) -> Result<R, E>` implement this trait through a
/// blanket impl, so most callers never implement it by hand.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle payloads of type `{T}`",
    label = "missing `Handler<{T}>` implementation",
    note = "Handlers are `Fn({T}) -> Result<Output, Error>` closures or types implementing `Handler<{T}>`."
)]
pub trait Handler<T>: Send + Sync + 'static {
    /// The value produced on success.
    type Output;

    /// The failure reported by the handler.
    type Error: Into<BoxError>;

    /// Executes the handler logic.
    fn call(&self, payload: T) -> Result<Self::Output, Self::Error>;
}

// Blanket impl for closures
impl<F, T, Out, Err> Handler<T> for F
where
    F: Fn(T) -> Result<Out, Err> + Send + Sync + 'static,
    Err: Into<BoxError>,
{
    type Output = Out;
    type Error = Err;

    fn call(&self, payload: T) -> Result<Self::Output, Self::Error> {
        (self)(payload)
    }
}

/// Descriptor of the payload shape a binding decodes into.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    type_name: &'static str,
}

impl Shape {
    /// Describe the shape `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self {
            type_name: type_name::<T>(),
        }
    }

    /// Fully qualified type name of the shape.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Type name without its module path (`OrderCreated` for
    /// `shop::events::OrderCreated`).
    pub fn short_name(&self) -> &'static str {
        let base = self.type_name.split('<').next().unwrap_or(self.type_name);
        match base.rfind("::") {
            Some(pos) => &self.type_name[pos + 2..],
            None => self.type_name,
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shape").field(&self.type_name).finish()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Handler<String> for Upper {
        type Output = String;
        type Error = std::convert::Infallible;

        fn call(&self, payload: String) -> Result<String, Self::Error> {
            Ok(payload.to_uppercase())
        }
    }

    #[test]
    fn test_closure_is_handler() {
        let handler = |n: u32| -> Result<u32, BoxError> { Ok(n * 2) };
        assert_eq!(Handler::call(&handler, 21).unwrap(), 42);
    }

    #[test]
    fn test_struct_handler() {
        assert_eq!(Upper.call("ok".to_string()).unwrap(), "OK");
    }

    #[test]
    fn test_shape_names() {
        let shape = Shape::of::<std::collections::HashMap<String, u32>>();
        assert!(shape.type_name().starts_with("std::collections::"));
        assert!(shape.short_name().starts_with("HashMap<"));
        assert_eq!(Shape::of::<u32>().short_name(), "u32");
    }
}
