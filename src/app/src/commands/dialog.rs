//! Dialog command definitions.
//!
//! Confirmation prompts are rendered by the Shell as a modal and resolved
//! asynchronously with the operator's answer, so the single thread of control
//! is never blocked while the question is open.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DialogOperation {
    Confirm { message: String },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DialogOutput {
    Accepted,
    Declined,
}

impl DialogOutput {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl Operation for DialogOperation {
    type Output = DialogOutput;
}

/// Command-based Dialog API
pub struct Dialog<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Dialog<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DialogOperation>> + 'static,
    Event: Send + 'static,
{
    /// Ask the operator a yes/no question
    pub fn confirm(message: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DialogOperation::Confirm {
            message: message.into(),
        })
    }
}

/// Request builder for dialog operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: DialogOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DialogOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: DialogOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = DialogOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
