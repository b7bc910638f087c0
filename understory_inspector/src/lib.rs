// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_inspector --heading-base-level=0

//! Understory Inspector: relay between a web inspector frontend and a host view.
//!
//! An embedded inspector has three parties: the backend agent that inspects
//! the document, the frontend that displays it, and the view that hosts both.
//! [`InspectorClient`] is the view's side of that arrangement. It forwards
//! frontend-bound messages to a [`DevToolsAgent`], persists frontend settings
//! in a [`SettingsStore`], and asks the view to repaint when a node highlight
//! is shown or hidden.
//!
//! The client owns no state of its own beyond its host. Everything it needs
//! comes from an [`InspectorHost`] supplied by the embedder.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_inspector::{
//!     Delivery, DevToolsAgent, InspectorClient, InspectorHost, MemorySettings, RpcMessage,
//!     SettingsStore,
//! };
//!
//! #[derive(Debug, Default)]
//! struct Agent {
//!     sent: Vec<RpcMessage>,
//! }
//!
//! impl DevToolsAgent for Agent {
//!     fn send_rpc_message(&mut self, message: RpcMessage) {
//!         self.sent.push(message);
//!     }
//! }
//!
//! #[derive(Debug, Default)]
//! struct View {
//!     agent: Option<Agent>,
//!     settings: MemorySettings,
//!     damage: Vec<Rect>,
//! }
//!
//! impl InspectorHost for View {
//!     type Node = u32;
//!
//!     fn devtools_agent(&mut self) -> Option<&mut dyn DevToolsAgent> {
//!         self.agent.as_mut().map(|a| a as &mut dyn DevToolsAgent)
//!     }
//!     fn view_size(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//!     fn invalidate_rect(&mut self, rect: Rect) {
//!         self.damage.push(rect);
//!     }
//!     fn settings(&self) -> &dyn SettingsStore {
//!         &self.settings
//!     }
//!     fn settings_mut(&mut self) -> &mut dyn SettingsStore {
//!         &mut self.settings
//!     }
//! }
//!
//! let mut client = InspectorClient::new(View::default());
//! assert_eq!(client.send_message_to_frontend("{}"), Delivery::NotDelivered);
//!
//! client.host_mut().agent = Some(Agent::default());
//! assert_eq!(client.send_message_to_frontend("{}"), Delivery::Delivered);
//!
//! client.store_setting("dock", "bottom");
//! assert_eq!(client.populate_setting("dock").as_deref(), Some("bottom"));
//!
//! client.highlight(&7);
//! assert_eq!(client.host().damage, [Rect::new(0.0, 0.0, 800.0, 600.0)]);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod agent;
mod client;
mod settings;

pub use agent::{Delivery, DevToolsAgent, RpcMessage};
pub use client::{InspectorClient, InspectorHost};
pub use settings::{MemorySettings, SettingsStore};
