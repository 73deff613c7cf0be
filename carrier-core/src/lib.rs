//! # carrier-core
//!
//! Core traits for the Carrier event dispatch registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! event catalogs and handler libraries that don't need the full
//! `carrier-std` implementation.
//!
//! # Two Sides of Dispatch
//!
//! Carrier bridges a string-keyed, type-erased dispatch surface with typed
//! per-handler processing:
//!
//! ## Erased side
//!
//! An event-type identifier (an opaque string such as `"user.signedup"`) and a
//! serialized payload. Transports deliver exactly this and nothing more.
//!
//! ## Typed side ([`Handler`])
//!
//! Plain functions taking one concrete payload shape. Each handler picks its
//! own shape; two handlers bound to the same identifier may expect
//! structurally different payloads.
//!
//! The [`Codec`] turns bytes into a fresh value of each handler's shape, and
//! [`Shape`] names that shape in errors.
//!
//! # Error Types
//!
//! - [`CarrierError`] - Top-level error type
//! - [`DispatchError`] - Unknown event type, decode failure, handler failure
//! - [`EnvelopeError`] - Envelope metadata errors
//! - [`PublishError`] - Publisher errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod codec;
mod error;
mod event;
mod handler;

// Re-exports
pub use codec::Codec;
pub use error::{BoxError, CarrierError, DispatchError, EnvelopeError, PublishError};
pub use event::Event;
pub use handler::{Handler, Shape};
