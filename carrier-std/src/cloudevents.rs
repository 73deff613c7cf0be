//! CloudEvents envelope.
//!
//! Transports deliver an event-type identifier in envelope metadata and the
//! payload as the body. This module reads that metadata in the CloudEvents
//! HTTP binary convention (`ce-*` headers) and models the structured JSON
//! form used when publishing.

use carrier_core::{EnvelopeError, Event};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Header carrying the event id.
pub const HEADER_ID: &str = "ce-id";
/// Header carrying the event source.
pub const HEADER_SOURCE: &str = "ce-source";
/// Header carrying the CloudEvents spec version.
pub const HEADER_SPEC_VERSION: &str = "ce-specversion";
/// Header carrying the event type.
pub const HEADER_TYPE: &str = "ce-type";
/// Optional header carrying the event time (RFC 3339).
pub const HEADER_TIME: &str = "ce-time";

/// CloudEvents spec version produced by [`CloudEvent::from_event`].
pub const SPEC_VERSION: &str = "1.0";

/// Envelope metadata of a binary-mode CloudEvent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudEventHeaders {
    /// `ce-id`
    pub id: String,
    /// `ce-source`
    pub source: String,
    /// `ce-specversion`
    pub spec_version: String,
    /// `ce-type`, the event-type identifier used for dispatch.
    pub ty: String,
    /// `ce-time`, kept verbatim.
    pub time: Option<String>,
}

impl CloudEventHeaders {
    /// Read envelope metadata from `(name, value)` header pairs.
    ///
    /// Names match case-insensitively; unrelated headers are ignored. When a
    /// header repeats, the last value wins.
    pub fn from_headers<'a, I>(headers: I) -> Result<Self, EnvelopeError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut id = None;
        let mut source = None;
        let mut spec_version = None;
        let mut ty = None;
        let mut time = None;

        for (name, value) in headers {
            let slot = if name.eq_ignore_ascii_case(HEADER_ID) {
                &mut id
            } else if name.eq_ignore_ascii_case(HEADER_SOURCE) {
                &mut source
            } else if name.eq_ignore_ascii_case(HEADER_SPEC_VERSION) {
                &mut spec_version
            } else if name.eq_ignore_ascii_case(HEADER_TYPE) {
                &mut ty
            } else if name.eq_ignore_ascii_case(HEADER_TIME) {
                &mut time
            } else {
                continue;
            };
            *slot = Some(value.to_owned());
        }

        let ty = ty.ok_or(EnvelopeError::MissingHeader(HEADER_TYPE))?;
        if ty.is_empty() {
            return Err(EnvelopeError::EmptyType);
        }

        Ok(Self {
            id: id.ok_or(EnvelopeError::MissingHeader(HEADER_ID))?,
            source: source.ok_or(EnvelopeError::MissingHeader(HEADER_SOURCE))?,
            spec_version: spec_version.ok_or(EnvelopeError::MissingHeader(HEADER_SPEC_VERSION))?,
            ty,
            time: time.filter(|t| !t.is_empty()),
        })
    }

    /// Render as `(name, value)` header pairs; `ce-time` only when set.
    pub fn to_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            (HEADER_ID, self.id.clone()),
            (HEADER_SOURCE, self.source.clone()),
            (HEADER_SPEC_VERSION, self.spec_version.clone()),
            (HEADER_TYPE, self.ty.clone()),
        ];
        if let Some(time) = &self.time {
            headers.push((HEADER_TIME, time.clone()));
        }
        headers
    }

    /// Build a structured CloudEvent carrying `data`.
    ///
    /// A `ce-time` that is not valid RFC 3339 is dropped rather than
    /// rejected.
    pub fn to_cloud_event(&self, data: Option<Value>) -> CloudEvent {
        let time = self
            .time
            .as_deref()
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map(|t| t.with_timezone(&Utc));

        CloudEvent {
            id: self.id.clone(),
            source: self.source.clone(),
            specversion: self.spec_version.clone(),
            ty: self.ty.clone(),
            datacontenttype: Some(crate::codec::JsonCodec::CONTENT_TYPE.to_owned()),
            time,
            data,
        }
    }
}

/// A CloudEvent in JSON structured mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudEvent {
    /// Unique event id.
    pub id: String,
    /// Producer of the event.
    pub source: String,
    /// CloudEvents spec version.
    pub specversion: String,
    /// Event-type identifier.
    #[serde(rename = "type")]
    pub ty: String,
    /// Content type of `data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacontenttype: Option<String>,
    /// Time the event occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    /// Event payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CloudEvent {
    /// Wrap a typed event published by `source`.
    ///
    /// Assigns a fresh UUID v4 id and the JSON content type.
    pub fn from_event<E>(source: impl Into<String>, event: &E) -> Result<Self, serde_json::Error>
    where
        E: Event + Serialize,
    {
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            source: source.into(),
            specversion: SPEC_VERSION.to_owned(),
            ty: E::EVENT_TYPE.to_owned(),
            datacontenttype: Some(crate::codec::JsonCodec::CONTENT_TYPE.to_owned()),
            time: None,
            data: Some(serde_json::to_value(event)?),
        })
    }

    /// Set the event time.
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Envelope metadata for binary-mode delivery.
    pub fn headers(&self) -> CloudEventHeaders {
        CloudEventHeaders {
            id: self.id.clone(),
            source: self.source.clone(),
            spec_version: self.specversion.clone(),
            ty: self.ty.clone(),
            time: self
                .time
                .map(|t| t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Serialize)]
    struct UserSignedUp {
        id: String,
        at: String,
    }

    impl Event for UserSignedUp {
        const EVENT_TYPE: &'static str = "user.signedup";
    }

    fn pubsub_headers() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Ce-Id", "1096434104173400"),
            (
                "ce-source",
                "//pubsub.googleapis.com/projects/my-project/topics/my-topic",
            ),
            ("CE-SPECVERSION", "1.0"),
            ("ce-type", "google.cloud.pubsub.topic.v1.messagePublished"),
            ("ce-time", "2020-12-20T13:37:33.647Z"),
            ("content-type", "application/json"),
        ]
    }

    #[test]
    fn test_from_headers_case_insensitive() {
        let headers = CloudEventHeaders::from_headers(pubsub_headers()).unwrap();
        assert_eq!(headers.id, "1096434104173400");
        assert_eq!(headers.spec_version, "1.0");
        assert_eq!(headers.ty, "google.cloud.pubsub.topic.v1.messagePublished");
        assert_eq!(headers.time.as_deref(), Some("2020-12-20T13:37:33.647Z"));
    }

    #[test]
    fn test_missing_type_header() {
        let err = CloudEventHeaders::from_headers([("ce-id", "1")]).unwrap_err();
        assert_eq!(err, EnvelopeError::MissingHeader(HEADER_TYPE));

        let err = CloudEventHeaders::from_headers([("ce-type", "")]).unwrap_err();
        assert_eq!(err, EnvelopeError::EmptyType);

        let err = CloudEventHeaders::from_headers([("ce-type", "a.b"), ("ce-id", "1")]).unwrap_err();
        assert_eq!(err, EnvelopeError::MissingHeader(HEADER_SOURCE));
    }

    #[test]
    fn test_to_cloud_event_parses_time() {
        let headers = CloudEventHeaders::from_headers(pubsub_headers()).unwrap();
        let event = headers.to_cloud_event(Some(serde_json::json!({"id": "u1"})));
        let expected = Utc
            .with_ymd_and_hms(2020, 12, 20, 13, 37, 33)
            .unwrap()
            + chrono::Duration::milliseconds(647);
        assert_eq!(event.time, Some(expected));
        assert_eq!(event.datacontenttype.as_deref(), Some("application/json"));
    }

    #[test]
    fn test_to_cloud_event_drops_invalid_time() {
        let mut headers = CloudEventHeaders::from_headers(pubsub_headers()).unwrap();
        headers.time = Some("yesterday".to_string());
        let event = headers.to_cloud_event(None);
        assert_eq!(event.time, None);
        assert_eq!(event.ty, headers.ty);
    }

    #[test]
    fn test_from_event_structured_json() {
        let event = CloudEvent::from_event(
            "//iam/service",
            &UserSignedUp {
                id: "u1".to_string(),
                at: "2024-01-01T00:00:00Z".to_string(),
            },
        )
        .unwrap();
        assert!(Uuid::parse_str(&event.id).is_ok());

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "user.signedup");
        assert_eq!(json["specversion"], "1.0");
        assert_eq!(json["source"], "//iam/service");
        assert_eq!(json["data"]["id"], "u1");
        assert!(json.get("time").is_none());
    }

    #[test]
    fn test_headers_render_time() {
        let time = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let event = CloudEvent::from_event(
            "src",
            &UserSignedUp {
                id: "u2".to_string(),
                at: String::new(),
            },
        )
        .unwrap()
        .with_time(time);

        let headers = event.headers();
        assert_eq!(headers.time.as_deref(), Some("2024-05-01T08:00:00Z"));
        assert_eq!(headers.to_headers().len(), 5);
    }
}
