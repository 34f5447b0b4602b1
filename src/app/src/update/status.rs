use crux_core::Command;

use crate::after;
use crate::config::{POLL_INTERVAL_MS, STATUS_ENDPOINT};
use crate::error::RequestError;
use crate::events::{Event, StatusEvent};
use crate::http_helpers::{build_url, process_json_response};
use crate::model::Model;
use crate::types::{StatusSnapshot, StatusView};
use crate::update_field;
use crate::{Effect, HttpCmd};

/// Handle status polling events
pub fn handle(event: StatusEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        StatusEvent::Poll => poll(model),

        // Fixed-rate schedule: the next tick is armed regardless of how this poll ends
        StatusEvent::PollTick => Command::all([poll(model), schedule_next_poll()]),

        StatusEvent::StatusResponse { sequence, result } => {
            handle_status_response(sequence, result, model)
        }
    }
}

/// Poll once immediately and start the recurring schedule
pub fn start_polling(model: &mut Model) -> Command<Effect, Event> {
    Command::all([poll(model), schedule_next_poll()])
}

/// Issue one `GET /status`, tagged with the next sequence number
pub fn poll(model: &mut Model) -> Command<Effect, Event> {
    let sequence = model.next_poll_sequence();
    HttpCmd::get(build_url(STATUS_ENDPOINT))
        .build()
        .then_send(move |result| {
            let result = process_json_response::<StatusSnapshot>("Status", result);
            Event::Status(StatusEvent::StatusResponse { sequence, result })
        })
}

fn schedule_next_poll() -> Command<Effect, Event> {
    after!(POLL_INTERVAL_MS, Event::Status(StatusEvent::PollTick))
}

/// Render a fresh snapshot, or leave the page untouched on failure.
///
/// Failures are logged only: they recur with every poll and would flood the
/// operator with notifications.
fn handle_status_response(
    sequence: u64,
    result: Result<StatusSnapshot, RequestError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(snapshot) => {
            if model.is_stale_poll(sequence) {
                log::debug!(
                    "Discarding status poll #{sequence}, #{} already rendered",
                    model.applied_sequence
                );
                return Command::done();
            }
            model.applied_sequence = sequence;
            model.consecutive_poll_failures = 0;
            update_field!(model.status, StatusView::from(&snapshot))
        }
        Err(e) => {
            model.consecutive_poll_failures += 1;
            log::warn!(
                "Error fetching status (poll #{sequence}, {} consecutive failures): {e}",
                model.consecutive_poll_failures
            );
            Command::done()
        }
    }
}
