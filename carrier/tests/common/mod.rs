#![allow(dead_code)]

use carrier::Event;
use serde::{Deserialize, Serialize};

// ============================================================================
// Test Event Types
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Event)]
#[event(type = "user.signedup")]
pub struct UserSignedUp {
    pub id: String,
    pub at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Event)]
#[event(type = "user.signedin")]
pub struct UserSignedIn {
    pub id: String,
    pub at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Event)]
#[event(type = "something.happened")]
#[serde(default)]
pub struct SomethingHappened {
    pub what: String,
    pub when: String,
    pub who: String,
    pub r#where: String,
    pub why: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Event)]
#[event(type = "order.created")]
pub struct OrderCreated {
    pub id: String,
    pub total: f64,
}

/// Only the id of an order; accepts any order-shaped payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OrderRef {
    pub id: String,
}

/// Requires a field order payloads never carry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Shipment {
    pub tracking: String,
}

pub fn signed_up(id: &str) -> UserSignedUp {
    UserSignedUp {
        id: id.to_string(),
        at: "2024-03-01T10:00:00Z".to_string(),
    }
}

pub fn order_payload(id: &str, total: f64) -> Vec<u8> {
    serde_json::to_vec(&OrderCreated {
        id: id.to_string(),
        total,
    })
    .unwrap()
}
