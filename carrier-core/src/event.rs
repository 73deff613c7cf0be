//! Event trait for typed payload shapes.

/// A payload shape that knows its own event-type identifier.
///
/// The identifier is an opaque lookup key; no structure is assumed.
///
/// # Example
///
/// ```rust
/// use carrier_core::Event;
///
/// struct UserSignedUp {
///     id: String,
/// }
///
/// impl Event for UserSignedUp {
///     const EVENT_TYPE: &'static str = "user.signedup";
/// }
///
/// assert_eq!(UserSignedUp { id: "u1".into() }.event_type(), "user.signedup");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Event",
    label = "missing `Event` implementation",
    note = "Implement `Event` or add `#[derive(Event)]` with `#[event(type = \"...\")]`."
)]
pub trait Event {
    /// The event-type identifier this shape is published and dispatched under.
    const EVENT_TYPE: &'static str;

    /// Returns [`Self::EVENT_TYPE`].
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }
}

impl<T: Event> Event for Box<T> {
    const EVENT_TYPE: &'static str = T::EVENT_TYPE;
}

impl<T: Event> Event for std::sync::Arc<T> {
    const EVENT_TYPE: &'static str = T::EVENT_TYPE;
}

impl<T: Event> Event for &T {
    const EVENT_TYPE: &'static str = T::EVENT_TYPE;
}
