use crux_core::Command;

use crate::config::{CLEAR_ENDPOINT, SAVE_ENDPOINT};
use crate::device_post;
use crate::error::RequestError;
use crate::events::{ActionEvent, Event};
use crate::model::Model;
use crate::types::{CredentialSubmission, Severity};
use crate::{DialogCmd, Effect};

use super::notification::notify;

pub const SSID_REQUIRED: &str = "Please enter SSID";
pub const SAVE_SUCCEEDED: &str = "Credentials saved! Device will reboot and connect to WiFi.";
pub const SAVE_REJECTED: &str = "Failed to save credentials";
pub const SAVE_FAILED: &str = "Error saving credentials";
pub const CLEAR_CONFIRMATION: &str =
    "Are you sure you want to clear credentials? The device will reboot in AP mode.";
pub const CLEAR_SUCCEEDED: &str = "Credentials cleared! Device will reboot.";
pub const CLEAR_REJECTED: &str = "Failed to clear credentials";
pub const CLEAR_FAILED: &str = "Error clearing credentials";

/// Operator-facing messages for the outcomes of one action
struct Outcome {
    action: &'static str,
    succeeded: &'static str,
    rejected: &'static str,
    failed: &'static str,
}

const SAVE: Outcome = Outcome {
    action: "Save credentials",
    succeeded: SAVE_SUCCEEDED,
    rejected: SAVE_REJECTED,
    failed: SAVE_FAILED,
};

const CLEAR: Outcome = Outcome {
    action: "Clear credentials",
    succeeded: CLEAR_SUCCEEDED,
    rejected: CLEAR_REJECTED,
    failed: CLEAR_FAILED,
};

/// Handle save/clear credential actions
pub fn handle(event: ActionEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ActionEvent::SaveCredentials { ssid, password } => {
            let submission = match CredentialSubmission::new(ssid, password) {
                Ok(submission) => submission,
                Err(e) => {
                    log::debug!("Not saving credentials: {e}");
                    return notify(model, SSID_REQUIRED, Severity::Error);
                }
            };
            device_post!(Action, ActionEvent, model, SAVE_ENDPOINT, SaveResponse, SAVE.action,
                body_form: submission.to_form_body()
            )
        }

        ActionEvent::SaveResponse(result) => handle_action_response(result, model, &SAVE),

        ActionEvent::ClearCredentials => DialogCmd::confirm(CLEAR_CONFIRMATION)
            .build()
            .then_send(|answer| Event::Action(ActionEvent::ClearConfirmed(answer.is_accepted()))),

        ActionEvent::ClearConfirmed(true) => device_post!(
            Action,
            ActionEvent,
            model,
            CLEAR_ENDPOINT,
            ClearResponse,
            CLEAR.action
        ),

        ActionEvent::ClearConfirmed(false) => {
            log::debug!("Clearing credentials declined");
            Command::done()
        }

        ActionEvent::ClearResponse(result) => handle_action_response(result, model, &CLEAR),
    }
}

/// Surface the outcome of a mutating request exactly once. Never retried.
fn handle_action_response(
    result: Result<(), RequestError>,
    model: &mut Model,
    outcome: &Outcome,
) -> Command<Effect, Event> {
    model.stop_loading();
    match result {
        Ok(()) => notify(model, outcome.succeeded, Severity::Success),
        Err(e) if e.is_transport() => {
            log::error!("Error during {}: {e}", outcome.action);
            notify(model, outcome.failed, Severity::Error)
        }
        Err(e) => {
            log::warn!("{} failed: {e}", outcome.action);
            notify(model, outcome.rejected, Severity::Error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Notification;
    use crate::DialogOperation;

    fn only_notification(model: &Model) -> &Notification {
        let container = model.notifications.as_ref().unwrap();
        assert_eq!(container.len(), 1);
        container.iter().next().unwrap()
    }

    mod save {
        use super::*;

        #[test]
        fn empty_ssid_notifies_without_request() {
            let mut model = Model::default();

            let mut cmd = handle(
                ActionEvent::SaveCredentials {
                    ssid: String::new(),
                    password: "anything".to_string(),
                },
                &mut model,
            );

            assert!(!cmd.effects().any(|e| e.is_http()));
            assert!(!model.is_loading());
            let notification = only_notification(&model);
            assert_eq!(notification.severity, Severity::Error);
            assert_eq!(notification.message, SSID_REQUIRED);
        }

        #[test]
        fn valid_submission_sets_loading_and_posts() {
            let mut model = Model::default();

            let mut cmd = handle(
                ActionEvent::SaveCredentials {
                    ssid: "MyWiFi".to_string(),
                    password: "secret".to_string(),
                },
                &mut model,
            );

            assert!(model.is_loading());
            let request = cmd.effects().find_map(|e| e.into_http()).unwrap();
            assert_eq!(request.operation.method, "POST");
            assert_eq!(request.operation.url, "https://relative/save");
            assert_eq!(request.operation.body, b"ssid=MyWiFi&password=secret".to_vec());
        }

        #[test]
        fn success_notifies_reboot() {
            let mut model = Model {
                pending_requests: 1,
                ..Default::default()
            };

            let _ = handle(ActionEvent::SaveResponse(Ok(())), &mut model);

            assert!(!model.is_loading());
            let notification = only_notification(&model);
            assert_eq!(notification.severity, Severity::Success);
            assert!(notification.message.contains("reboot"));
        }

        #[test]
        fn rejection_and_transport_failure_use_distinct_messages() {
            let mut model = Model::default();
            let _ = handle(
                ActionEvent::SaveResponse(Err(RequestError::Rejected { status: 400 })),
                &mut model,
            );
            assert_eq!(only_notification(&model).message, SAVE_REJECTED);

            let mut model = Model::default();
            let _ = handle(
                ActionEvent::SaveResponse(Err(RequestError::Transport("offline".into()))),
                &mut model,
            );
            assert_eq!(only_notification(&model).message, SAVE_FAILED);
            assert_eq!(only_notification(&model).severity, Severity::Error);
        }
    }

    mod clear {
        use super::*;

        #[test]
        fn asks_for_confirmation_first() {
            let mut model = Model::default();

            let mut cmd = handle(ActionEvent::ClearCredentials, &mut model);

            let effects: Vec<Effect> = cmd.effects().collect();
            assert_eq!(effects.len(), 1);
            let DialogOperation::Confirm { message } =
                effects.into_iter().next().unwrap().expect_dialog().operation;
            assert_eq!(message, CLEAR_CONFIRMATION);
            assert!(!model.is_loading());
        }

        #[test]
        fn declined_does_nothing() {
            let mut model = Model::default();

            let mut cmd = handle(ActionEvent::ClearConfirmed(false), &mut model);

            assert!(cmd.is_done());
            assert!(model.notifications.is_none());
            assert!(!model.is_loading());
        }

        #[test]
        fn confirmed_posts_empty_body() {
            let mut model = Model::default();

            let mut cmd = handle(ActionEvent::ClearConfirmed(true), &mut model);

            let request = cmd.effects().find_map(|e| e.into_http()).unwrap();
            assert_eq!(request.operation.method, "POST");
            assert_eq!(request.operation.url, "https://relative/clear");
            assert!(request.operation.body.is_empty());
        }

        #[test]
        fn outcomes() {
            let mut model = Model::default();
            let _ = handle(ActionEvent::ClearResponse(Ok(())), &mut model);
            assert_eq!(only_notification(&model).message, CLEAR_SUCCEEDED);

            let mut model = Model::default();
            let _ = handle(
                ActionEvent::ClearResponse(Err(RequestError::Rejected { status: 500 })),
                &mut model,
            );
            assert_eq!(only_notification(&model).message, CLEAR_REJECTED);

            let mut model = Model::default();
            let _ = handle(
                ActionEvent::ClearResponse(Err(RequestError::Transport("offline".into()))),
                &mut model,
            );
            assert_eq!(only_notification(&model).message, CLEAR_FAILED);
        }
    }
}
