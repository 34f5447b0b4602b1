mod actions;
mod notification;
mod status;

pub use actions::{
    CLEAR_CONFIRMATION, CLEAR_FAILED, CLEAR_REJECTED, CLEAR_SUCCEEDED, SAVE_FAILED, SAVE_REJECTED,
    SAVE_SUCCEEDED, SSID_REQUIRED,
};
pub use notification::notify;
pub use status::{poll, start_polling};

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => start_polling(model),
        Event::Status(status_event) => status::handle(status_event, model),
        Event::Notification(notification_event) => notification::handle(notification_event, model),
        Event::Action(action_event) => actions::handle(action_event, model),
    }
}
