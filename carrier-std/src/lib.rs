//! # carrier-std
//!
//! Standard implementations for the Carrier event dispatch registry.
//!
//! This crate provides:
//! - **Dispatch**: [`Registry`], [`RegistryBuilder`], [`Dispatched`]
//! - **Codecs**: [`JsonCodec`]
//! - **Envelope**: CloudEvents headers and structured events
//! - **Publishing**: [`Publisher`], [`Emitter`], in-memory and loopback publishers
//! - **Testing**: recording and failing handlers
//!
//! [`Registry`]: dispatch::Registry
//! [`RegistryBuilder`]: dispatch::RegistryBuilder
//! [`Dispatched`]: dispatch::Dispatched
//! [`JsonCodec`]: codec::JsonCodec
//! [`Publisher`]: publish::Publisher
//! [`Emitter`]: publish::Emitter

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use carrier_core;

// Modules
pub mod cloudevents;
pub mod codec;
pub mod config;
pub mod dispatch;
pub mod publish;
pub mod testing;
