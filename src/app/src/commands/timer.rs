//! Timer command definitions.
//!
//! The Core cannot sleep. It asks the Shell to wait and resolve the request
//! once the delay has elapsed (`setTimeout` in the browser). The resolution
//! is turned into whatever event the caller attached with `then_send`.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform for timers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOperation {
    NotifyAfter { millis: u64 },
}

// The Shell resolves every timer exactly once, when it fires
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOutput {
    Elapsed,
}

impl Operation for TimerOperation {
    type Output = TimerOutput;
}

/// Command-based Timer API
pub struct Timer<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Timer<Effect, Event>
where
    Effect: Send + From<crux_core::Request<TimerOperation>> + 'static,
    Event: Send + 'static,
{
    /// Resolve after `millis` milliseconds
    pub fn notify_after(millis: u64) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(TimerOperation::NotifyAfter { millis })
    }
}

/// Request builder for timer operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: TimerOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<TimerOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: TimerOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = TimerOutput>> {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
