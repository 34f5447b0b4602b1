/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.status, StatusView::from(&snapshot))
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.status, view;
///     model.consecutive_poll_failures, 0
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for mutating POST requests to the device.
/// Counts the request as pending, renders, and turns the response into a
/// `Result<(), RequestError>` carried by the given domain response event.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The browser shell strips this prefix before sending requests.
///
/// # Patterns
///
/// Pattern 1: POST without body
/// ```ignore
/// device_post!(Action, ActionEvent, model, "/clear", ClearResponse, "Clear credentials")
/// ```
///
/// Pattern 2: POST with form-url-encoded body
/// ```ignore
/// device_post!(Action, ActionEvent, model, "/save", SaveResponse, "Save credentials",
///     body_form: submission.to_form_body()
/// )
/// ```
#[macro_export]
macro_rules! device_post {
    // Pattern 1: POST without body
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr) => {{
        $model.start_loading();
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::post($crate::build_url($endpoint))
                .build()
                .then_send(|result| {
                    let event_result = $crate::process_status_response($action, result);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
        ])
    }};

    // Pattern 2: POST with form-url-encoded body
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, body_form: $body:expr) => {{
        $model.start_loading();
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::post($crate::build_url($endpoint))
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body_string($body)
                .build()
                .then_send(|result| {
                    let event_result = $crate::process_status_response($action, result);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
        ])
    }};
}

/// Arms a shell timer that delivers `$event` once it fires.
///
/// # Example
/// ```ignore
/// after!(POLL_INTERVAL_MS, Event::Status(StatusEvent::PollTick))
/// ```
#[macro_export]
macro_rules! after {
    ($millis:expr, $event:expr) => {{
        let event = $event;
        $crate::TimerCmd::notify_after($millis)
            .build()
            .then_send(move |_| event)
    }};
}
