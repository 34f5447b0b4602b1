use serde::{Deserialize, Serialize};

/// Visual classification of a notification.
///
/// Serializes as `"success"` / `"error"`, which the shell appends to the
/// `notification-` class of the element.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    #[default]
    Success,
    Error,
}

/// CSS state of a notification element.
///
/// Elements are inserted `Hidden`, flip to `Shown` so the transition runs,
/// and go back to `Hidden` before they are removed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NotificationPhase {
    #[default]
    Hidden,
    Shown,
}

/// A short-lived message. `id` grows monotonically and encodes creation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: NotificationPhase,
}

impl Notification {
    pub fn is_shown(&self) -> bool {
        self.phase == NotificationPhase::Shown
    }
}

/// Container holding every notification currently in the page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationContainer {
    notifications: Vec<Notification>,
    next_id: u64,
}

impl NotificationContainer {
    /// Append a hidden notification and return its id
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notifications.push(Notification {
            id,
            message: message.into(),
            severity,
            phase: NotificationPhase::Hidden,
        });
        id
    }

    /// Returns `false` if no notification with `id` exists (anymore)
    pub fn set_phase(&mut self, id: u64, phase: NotificationPhase) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.phase = phase;
                true
            }
            None => false,
        }
    }

    /// Returns `false` if no notification with `id` exists (anymore)
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}
