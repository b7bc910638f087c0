// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view-side inspector client.

use alloc::string::String;
use alloc::vec;

use kurbo::{Rect, Size};

use crate::agent::{Delivery, DevToolsAgent, RpcMessage};
use crate::settings::SettingsStore;

/// Frontend-side receiver of relayed messages.
const FRONTEND_CLASS: &str = "ToolsAgentDelegate";
/// Method on [`FRONTEND_CLASS`] that dispatches a message to the frontend.
const FRONTEND_DISPATCH: &str = "dispatchOnClient";

/// What an [`InspectorClient`] needs from the view that embeds it.
pub trait InspectorHost {
    /// Handle for a node that can be highlighted.
    type Node;

    /// The attached backend agent, if the inspector is currently connected.
    fn devtools_agent(&mut self) -> Option<&mut dyn DevToolsAgent>;

    /// Size of the view in its own coordinates.
    fn view_size(&self) -> Size;

    /// Marks `rect` of the view as needing a repaint.
    fn invalidate_rect(&mut self, rect: Rect);

    /// Settings persisted on behalf of the frontend.
    fn settings(&self) -> &dyn SettingsStore;

    /// Mutable access to [`InspectorHost::settings`].
    fn settings_mut(&mut self) -> &mut dyn SettingsStore;
}

/// Connects an inspector to the view it inspects.
///
/// The client is created with its host and lives exactly as long as it does.
/// Highlight drawing is left to the host; the client only invalidates the
/// view so the host gets a chance to paint or erase the overlay.
#[derive(Debug)]
pub struct InspectorClient<H: InspectorHost> {
    host: H,
}

impl<H: InspectorHost> InspectorClient<H> {
    /// Creates a client bound to `host`.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// The host this client relays for.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the client and returns its host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Called when the inspector controller goes away.
    ///
    /// The client is owned by its host and has nothing to release.
    pub fn inspector_destroyed(&mut self) {}

    /// Called when the frontend is requested.
    ///
    /// Frontend presentation belongs to the host.
    pub fn open_inspector_frontend(&mut self) {}

    /// Shows the highlight overlay for `node`.
    pub fn highlight(&mut self, _node: &H::Node) {
        self.invalidate_view();
    }

    /// Removes the highlight overlay.
    pub fn hide_highlight(&mut self) {
        self.invalidate_view();
    }

    /// Forwards `message` to the frontend through the host's agent.
    ///
    /// Without an agent the message is dropped and
    /// [`Delivery::NotDelivered`] is returned.
    pub fn send_message_to_frontend(&mut self, message: &str) -> Delivery {
        let Some(agent) = self.host.devtools_agent() else {
            log::debug!("no devtools agent attached; dropping frontend message");
            return Delivery::NotDelivered;
        };
        log::trace!("relaying {} byte frontend message", message.len());
        agent.send_rpc_message(RpcMessage::new(
            FRONTEND_CLASS,
            FRONTEND_DISPATCH,
            vec![String::from(message)],
        ));
        Delivery::Delivered
    }

    /// Reads the frontend setting stored under `key`.
    pub fn populate_setting(&self, key: &str) -> Option<String> {
        log::trace!("reading inspector setting {key:?}");
        self.host.settings().get(key)
    }

    /// Stores a frontend setting.
    pub fn store_setting(&mut self, key: &str, value: &str) {
        log::trace!("storing inspector setting {key:?}");
        self.host.settings_mut().set(key, value);
    }

    fn invalidate_view(&mut self) {
        let rect = Rect::from_origin_size((0.0, 0.0), self.host.view_size());
        self.host.invalidate_rect(rect);
    }
}
