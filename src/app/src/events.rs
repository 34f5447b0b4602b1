use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Page loaded: first poll and polling schedule
    Initialize,

    Status(StatusEvent),
    Notification(NotificationEvent),
    Action(ActionEvent),
}

/// Status polling
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// Poll once now, outside the schedule
    Poll,

    // Internal events, skipped from serialization
    #[serde(skip)]
    PollTick,
    #[serde(skip)]
    StatusResponse {
        sequence: u64,
        result: Result<StatusSnapshot, RequestError>,
    },
}

/// Transient notifications
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    Notify {
        message: String,
        severity: Severity,
    },

    // Lifecycle steps driven by timers
    #[serde(skip)]
    Show { id: u64 },
    #[serde(skip)]
    Hide { id: u64 },
    #[serde(skip)]
    Remove { id: u64 },
}

/// Operator actions mutating the device
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ActionEvent {
    SaveCredentials {
        ssid: String,
        password: String,
    },
    ClearCredentials,

    // Internal events, skipped from serialization
    #[serde(skip)]
    ClearConfirmed(bool),
    #[serde(skip)]
    SaveResponse(Result<(), RequestError>),
    #[serde(skip)]
    ClearResponse(Result<(), RequestError>),
}
