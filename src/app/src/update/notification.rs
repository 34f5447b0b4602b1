use crux_core::{render::render, Command};

use crate::after;
use crate::config::{
    NOTIFICATION_DISPLAY_MS, NOTIFICATION_HIDE_TRANSITION_MS, NOTIFICATION_SHOW_DELAY_MS,
};
use crate::events::{Event, NotificationEvent};
use crate::model::Model;
use crate::types::{NotificationPhase, Severity};
use crate::Effect;

/// Handle notification lifecycle events
pub fn handle(event: NotificationEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        NotificationEvent::Notify { message, severity } => notify(model, message, severity),

        NotificationEvent::Show { id } => transition(
            model,
            id,
            NotificationPhase::Shown,
            NOTIFICATION_DISPLAY_MS,
            NotificationEvent::Hide { id },
        ),

        NotificationEvent::Hide { id } => transition(
            model,
            id,
            NotificationPhase::Hidden,
            NOTIFICATION_HIDE_TRANSITION_MS,
            NotificationEvent::Remove { id },
        ),

        NotificationEvent::Remove { id } => {
            let removed = model
                .notifications
                .as_mut()
                .is_some_and(|container| container.remove(id));
            if removed {
                render()
            } else {
                log::debug!("Notification {id} already removed");
                Command::done()
            }
        }
    }
}

/// Insert a hidden notification and start its show/hide/remove lifecycle.
pub fn notify(
    model: &mut Model,
    message: impl Into<String>,
    severity: Severity,
) -> Command<Effect, Event> {
    let id = model.notifications_mut().push(message, severity);
    Command::all([
        render(),
        after!(
            NOTIFICATION_SHOW_DELAY_MS,
            Event::Notification(NotificationEvent::Show { id })
        ),
    ])
}

fn transition(
    model: &mut Model,
    id: u64,
    phase: NotificationPhase,
    next_in_ms: u64,
    next: NotificationEvent,
) -> Command<Effect, Event> {
    let found = model
        .notifications
        .as_mut()
        .is_some_and(|container| container.set_phase(id, phase));
    if !found {
        log::debug!("Ignoring {phase:?} for unknown notification {id}");
        return Command::done();
    }
    Command::all([render(), after!(next_in_ms, Event::Notification(next))])
}
