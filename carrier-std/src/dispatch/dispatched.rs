//! Outcome of a single dispatch call.

use carrier_core::DispatchError;

/// Ordered handler outputs plus the terminal error, if any.
///
/// On failure, `results` is a strict prefix of what a full run would have
/// produced: one entry per binding that completed before the failing one.
#[derive(Debug)]
#[must_use = "a dispatch may have failed; inspect `error()` or call `into_result()`"]
pub struct Dispatched<R> {
    results: Vec<R>,
    error: Option<DispatchError>,
}

impl<R> Dispatched<R> {
    pub(crate) fn complete(results: Vec<R>) -> Self {
        Self {
            results,
            error: None,
        }
    }

    pub(crate) fn failed(results: Vec<R>, error: DispatchError) -> Self {
        Self {
            results,
            error: Some(error),
        }
    }

    /// Outputs in registration order.
    pub fn results(&self) -> &[R] {
        &self.results
    }

    /// The error that stopped the dispatch.
    pub fn error(&self) -> Option<&DispatchError> {
        self.error.as_ref()
    }

    /// Returns `true` if every binding ran and succeeded.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Position of the binding that stopped the dispatch.
    pub fn failed_at(&self) -> Option<usize> {
        self.error.as_ref().and_then(DispatchError::index)
    }

    /// Number of outputs collected.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if no output was collected.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Split into the collected outputs and the terminal error.
    pub fn into_parts(self) -> (Vec<R>, Option<DispatchError>) {
        (self.results, self.error)
    }

    /// Convert into a `Result`, discarding partial outputs on failure.
    pub fn into_result(self) -> Result<Vec<R>, DispatchError> {
        match self.error {
            None => Ok(self.results),
            Some(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_keeps_prefix() {
        let dispatched = Dispatched::failed(
            vec!["first"],
            DispatchError::Handler {
                event_type: "t".to_string(),
                index: 1,
                shape: "S",
                source: "boom".into(),
            },
        );
        assert!(!dispatched.is_complete());
        assert_eq!(dispatched.failed_at(), Some(1));
        assert_eq!(dispatched.results(), &["first"]);

        let (results, error) = dispatched.into_parts();
        assert_eq!(results, vec!["first"]);
        assert!(error.is_some_and(|e| e.is_handler()));
    }

    #[test]
    fn test_complete_into_result() {
        let dispatched = Dispatched::complete(vec![1, 2]);
        assert!(dispatched.is_complete());
        assert_eq!(dispatched.failed_at(), None);
        assert_eq!(dispatched.into_result().unwrap(), vec![1, 2]);
    }
}
