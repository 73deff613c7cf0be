//! Publishing through the in-memory and loopback publishers.

use carrier::{
    BoxError, DispatchError, PublishError, Registry,
    config::PublisherConfig,
    publish::{Emitter, LoopbackPublisher, MemoryPublisher, Publisher},
    testing::RecordingHandler,
};
use std::sync::Arc;

mod common;
use common::{OrderCreated, UserSignedUp, signed_up};

#[tokio::test]
async fn test_emitter_wraps_events() {
    let memory = MemoryPublisher::new();
    let config = PublisherConfig::new("//iam/service").with_message_bus("projects/p/buses/b");
    let emitter = Emitter::new(config, memory.clone());

    let first = emitter.emit(&signed_up("u1")).await.unwrap();
    let second = emitter.emit(&signed_up("u2")).await.unwrap();
    assert_ne!(first, second);

    let events = memory.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, first);
    assert_eq!(events[0].ty, "user.signedup");
    assert_eq!(events[0].source, "//iam/service");
    assert_eq!(events[0].specversion, "1.0");
    assert_eq!(events[1].data.as_ref().unwrap()["id"], "u2");

    assert_eq!(memory.drain().len(), 2);
    assert!(memory.is_empty());
}

#[tokio::test]
async fn test_loopback_delivers_to_registry() {
    let recorder = RecordingHandler::<UserSignedUp, _>::new("stored");
    let mut registry = Registry::new();
    registry.register_event(recorder.clone());

    let loopback = LoopbackPublisher::new(Arc::new(registry));
    let emitter = Emitter::new(PublisherConfig::new("//iam"), loopback);

    emitter.emit(&signed_up("u7")).await.unwrap();
    assert_eq!(recorder.payloads(), vec![signed_up("u7")]);
}

#[tokio::test]
async fn test_loopback_surfaces_dispatch_errors() {
    let mut registry = Registry::new();
    registry.register_event(|_: UserSignedUp| -> Result<(), BoxError> { Ok(()) });
    let loopback = LoopbackPublisher::new(Arc::new(registry));
    let emitter = Emitter::new(PublisherConfig::new("//shop"), loopback);

    let err = emitter
        .emit(&OrderCreated {
            id: "o1".to_string(),
            total: 1.0,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PublishError::Dispatch(DispatchError::UnknownEventType(_))
    ));
}

#[tokio::test]
async fn test_emitter_over_trait_object() {
    let memory = MemoryPublisher::new();
    let publisher: Arc<dyn Publisher> = Arc::new(memory.clone());
    let emitter = Emitter::new(PublisherConfig::new("//iam"), publisher);

    emitter.emit(&signed_up("u3")).await.unwrap();
    emitter.emit(&signed_up("u4")).await.unwrap();
    assert_eq!(memory.len(), 2);
}

#[test]
fn test_config_from_json() {
    let config: PublisherConfig = serde_json::from_str(
        r#"{"source":"//iam","message_bus":"projects/p/locations/l/messageBuses/b"}"#,
    )
    .unwrap();
    assert_eq!(
        config,
        PublisherConfig::new("//iam").with_message_bus("projects/p/locations/l/messageBuses/b")
    );
}
