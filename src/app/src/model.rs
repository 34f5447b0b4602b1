use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel: the shell paints the page from it.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Rendered device status
    pub status: StatusView,

    // Sequence number of the most recently issued status poll
    pub poll_sequence: u64,
    // Sequence number of the newest poll whose result was rendered (0 = none)
    pub applied_sequence: u64,
    pub consecutive_poll_failures: u32,

    // Created on first notification
    pub notifications: Option<NotificationContainer>,

    // Number of save/clear requests in flight
    pub pending_requests: u32,
}

impl Model {
    /// Notification container, created on first use.
    pub fn notifications_mut(&mut self) -> &mut NotificationContainer {
        self.notifications.get_or_insert_with(NotificationContainer::default)
    }

    /// Next status poll sequence number
    pub fn next_poll_sequence(&mut self) -> u64 {
        self.poll_sequence += 1;
        self.poll_sequence
    }

    /// A poll result is stale if a newer one has already been rendered.
    pub fn is_stale_poll(&self, sequence: u64) -> bool {
        sequence <= self.applied_sequence
    }

    /// At least one save/clear request is outstanding
    pub fn is_loading(&self) -> bool {
        self.pending_requests > 0
    }

    pub fn start_loading(&mut self) {
        self.pending_requests += 1;
    }

    pub fn stop_loading(&mut self) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_is_created_once() {
        let mut model = Model::default();
        assert!(model.notifications.is_none());

        model.notifications_mut().push("a", Severity::Success);
        model.notifications_mut().push("b", Severity::Success);

        assert_eq!(model.notifications.as_ref().map(|c| c.len()), Some(2));
    }

    #[test]
    fn poll_sequence_is_monotonic() {
        let mut model = Model::default();
        let first = model.next_poll_sequence();
        let second = model.next_poll_sequence();
        assert!(second > first);
        assert!(!model.is_stale_poll(first));
    }

    #[test]
    fn older_polls_are_stale_once_a_newer_one_was_applied() {
        let model = Model {
            poll_sequence: 5,
            applied_sequence: 4,
            ..Default::default()
        };
        assert!(model.is_stale_poll(3));
        assert!(model.is_stale_poll(4));
        assert!(!model.is_stale_poll(5));
    }

    #[test]
    fn loading_lasts_until_every_request_completed() {
        let mut model = Model::default();
        model.start_loading();
        model.start_loading();

        model.stop_loading();
        assert!(model.is_loading());

        model.stop_loading();
        assert!(!model.is_loading());

        model.stop_loading();
        assert_eq!(model.pending_requests, 0);
    }
}
