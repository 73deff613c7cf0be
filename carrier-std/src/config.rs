//! Publisher configuration.

use serde::{Deserialize, Serialize};

/// Settings shared by every publisher.
///
/// Deserializes from any serde format, so it can live in an application's
/// own configuration file.
///
/// ```
/// use carrier_std::config::PublisherConfig;
///
/// let config: PublisherConfig =
///     serde_json::from_str(r#"{"source": "//iam/service"}"#).unwrap();
/// assert_eq!(config.source, "//iam/service");
/// assert!(config.message_bus.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherConfig {
    /// Value of the CloudEvents `source` attribute for emitted events.
    pub source: String,
    /// Fully qualified name of the message bus events are sent to, for
    /// transports that need one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_bus: Option<String>,
}

impl PublisherConfig {
    /// Create a config for events emitted by `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message_bus: None,
        }
    }

    /// Set the message bus.
    pub fn with_message_bus(mut self, message_bus: impl Into<String>) -> Self {
        self.message_bus = Some(message_bus.into());
        self
    }
}
