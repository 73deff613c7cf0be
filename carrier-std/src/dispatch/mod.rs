//! String-keyed dispatch to typed handlers.
//!
//! A [`Registry`] maps event-type identifiers to ordered [`Binding`]s. Each
//! binding captures the payload shape its handler expects, so one identifier
//! can fan out to handlers with different payload types. [`Registry::dispatch`]
//! returns a [`Dispatched`] holding the outputs and the first failure.

mod binding;
mod dispatched;
mod registry;

pub use binding::Binding;
pub use dispatched::Dispatched;
pub use registry::{Registry, RegistryBuilder};
