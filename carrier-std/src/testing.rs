//! Testing utilities for Carrier.
//!
//! This module provides handlers that make dispatch behavior easy to assert.
//!
//! # Features
//!
//! - [`CallLog`]: A shared, ordered log of handler invocations
//! - [`RecordingHandler`]: A handler that records every payload it receives
//! - [`FailingHandler`]: A handler that always reports failure

use carrier_core::{BoxError, Handler};
use std::{
    marker::PhantomData,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Call Log
// ============================================================================

/// An ordered record of which handlers ran.
///
/// Clones share the same log, so one log can be handed to several handlers
/// to check invocation order across bindings.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&self, name: impl Into<String>) {
        lock(&self.entries).push(name.into());
    }

    /// Get a clone of the entries in call order.
    pub fn entries(&self) -> Vec<String> {
        lock(&self.entries).clone()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }

    /// Clear all entries.
    pub fn clear(&self) {
        lock(&self.entries).clear();
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every decoded payload and returns a fixed output.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::<OrderCreated, _>::new("ok");
///
/// let mut registry = Registry::new();
/// registry.register("order.created", recorder.clone());
/// registry.dispatch("order.created", payload);
///
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHandler<T, R> {
    payloads: Arc<Mutex<Vec<T>>>,
    output: R,
    log: Option<(CallLog, String)>,
}

impl<T, R> RecordingHandler<T, R> {
    /// Create a recording handler that returns `output` on every call.
    pub fn new(output: R) -> Self {
        Self {
            payloads: Arc::new(Mutex::new(Vec::new())),
            output,
            log: None,
        }
    }

    /// Also append `name` to `log` on every call.
    pub fn logging_to(mut self, log: &CallLog, name: impl Into<String>) -> Self {
        self.log = Some((log.clone(), name.into()));
        self
    }

    /// Get the number of recorded payloads.
    pub fn count(&self) -> usize {
        lock(&self.payloads).len()
    }
}

impl<T: Clone, R> RecordingHandler<T, R> {
    /// Get a clone of the recorded payloads.
    pub fn payloads(&self) -> Vec<T> {
        lock(&self.payloads).clone()
    }
}

impl<T, R: Clone> Clone for RecordingHandler<T, R> {
    fn clone(&self) -> Self {
        Self {
            payloads: Arc::clone(&self.payloads),
            output: self.output.clone(),
            log: self.log.clone(),
        }
    }
}

impl<T, R> Handler<T> for RecordingHandler<T, R>
where
    T: Send + 'static,
    R: Clone + Send + Sync + 'static,
{
    type Output = R;
    type Error = BoxError;

    fn call(&self, payload: T) -> Result<R, BoxError> {
        if let Some((log, name)) = &self.log {
            log.record(name.as_str());
        }
        lock(&self.payloads).push(payload);
        Ok(self.output.clone())
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that decodes its payload and then always reports failure.
pub struct FailingHandler<T, R> {
    message: String,
    calls: Arc<AtomicUsize>,
    log: Option<(CallLog, String)>,
    _marker: PhantomData<fn(T) -> R>,
}

impl<T, R> FailingHandler<T, R> {
    /// Create a handler that fails with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: Arc::new(AtomicUsize::new(0)),
            log: None,
            _marker: PhantomData,
        }
    }

    /// Also append `name` to `log` on every call.
    pub fn logging_to(mut self, log: &CallLog, name: impl Into<String>) -> Self {
        self.log = Some((log.clone(), name.into()));
        self
    }

    /// Get the number of times the handler was invoked.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T, R> Clone for FailingHandler<T, R> {
    fn clone(&self) -> Self {
        Self {
            message: self.message.clone(),
            calls: Arc::clone(&self.calls),
            log: self.log.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, R> Handler<T> for FailingHandler<T, R>
where
    T: 'static,
    R: 'static,
{
    type Output = R;
    type Error = BoxError;

    fn call(&self, _payload: T) -> Result<R, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((log, name)) = &self.log {
            log.record(name.as_str());
        }
        Err(self.message.clone().into())
    }
}
