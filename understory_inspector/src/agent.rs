// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The backend agent side of the relay.

use alloc::string::String;
use alloc::vec::Vec;

/// A remote call addressed to an object on the other side of the agent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RpcMessage {
    /// Name of the receiving class.
    pub class_name: String,
    /// Name of the method to invoke.
    pub method_name: String,
    /// Positional arguments, already serialized.
    pub arguments: Vec<String>,
}

impl RpcMessage {
    /// Creates a call of `class_name::method_name` with `arguments`.
    #[must_use]
    pub fn new(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        arguments: Vec<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
            arguments,
        }
    }
}

/// Sink for messages bound for the inspector frontend.
pub trait DevToolsAgent {
    /// Sends `message` across the agent's transport.
    fn send_rpc_message(&mut self, message: RpcMessage);
}

/// Outcome of relaying a message to the frontend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Delivery {
    /// The message was handed to an agent.
    Delivered,
    /// No agent was attached; the message was dropped.
    NotDelivered,
}

impl Delivery {
    /// Returns `true` for [`Delivery::Delivered`].
    #[must_use]
    #[inline]
    pub const fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered)
    }
}
