// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the inspector relay against a mock view.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Rect, Size};
use understory_inspector::{
    Delivery, DevToolsAgent, InspectorClient, InspectorHost, MemorySettings, RpcMessage,
    SettingsStore,
};

/// Agent whose outbox outlives it so tests can inspect what was sent.
#[derive(Debug, Clone, Default)]
struct SharedAgent {
    outbox: Rc<RefCell<Vec<RpcMessage>>>,
}

impl DevToolsAgent for SharedAgent {
    fn send_rpc_message(&mut self, message: RpcMessage) {
        self.outbox.borrow_mut().push(message);
    }
}

#[derive(Debug)]
struct MockView {
    size: Size,
    agent: Option<SharedAgent>,
    settings: MemorySettings,
    invalidated: Vec<Rect>,
}

impl MockView {
    fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            agent: None,
            settings: MemorySettings::new(),
            invalidated: Vec::new(),
        }
    }
}

impl InspectorHost for MockView {
    type Node = &'static str;

    fn devtools_agent(&mut self) -> Option<&mut dyn DevToolsAgent> {
        self.agent.as_mut().map(|a| a as &mut dyn DevToolsAgent)
    }

    fn view_size(&self) -> Size {
        self.size
    }

    fn invalidate_rect(&mut self, rect: Rect) {
        self.invalidated.push(rect);
    }

    fn settings(&self) -> &dyn SettingsStore {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut dyn SettingsStore {
        &mut self.settings
    }
}

#[test]
fn message_without_agent_is_dropped_silently() {
    let mut client = InspectorClient::new(MockView::new(100.0, 50.0));
    assert_eq!(
        client.send_message_to_frontend("{\"method\":\"ping\"}"),
        Delivery::NotDelivered
    );
    let view = client.into_host();
    assert!(view.invalidated.is_empty());
    assert!(view.settings.is_empty());
}

#[test]
fn message_with_agent_is_forwarded_once() {
    let agent = SharedAgent::default();
    let mut view = MockView::new(100.0, 50.0);
    view.agent = Some(agent.clone());
    let mut client = InspectorClient::new(view);

    let delivery = client.send_message_to_frontend("{\"id\":1}");
    assert!(delivery.is_delivered());

    let outbox = agent.outbox.borrow();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].class_name, "ToolsAgentDelegate");
    assert_eq!(outbox[0].method_name, "dispatchOnClient");
    assert_eq!(outbox[0].arguments, ["{\"id\":1}"]);
}

#[test]
fn agent_can_attach_and_detach() {
    let agent = SharedAgent::default();
    let mut client = InspectorClient::new(MockView::new(10.0, 10.0));

    assert_eq!(client.send_message_to_frontend("a"), Delivery::NotDelivered);
    client.host_mut().agent = Some(agent.clone());
    assert_eq!(client.send_message_to_frontend("b"), Delivery::Delivered);
    client.host_mut().agent = None;
    assert_eq!(client.send_message_to_frontend("c"), Delivery::NotDelivered);

    let outbox = agent.outbox.borrow();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].arguments, ["b"]);
}

#[test]
fn settings_round_trip_through_the_host() {
    let mut client = InspectorClient::new(MockView::new(10.0, 10.0));
    assert_eq!(client.populate_setting("dockSide"), None);

    client.store_setting("dockSide", "right");
    assert_eq!(client.populate_setting("dockSide").as_deref(), Some("right"));

    client.store_setting("dockSide", "undocked");
    assert_eq!(
        client.populate_setting("dockSide").as_deref(),
        Some("undocked")
    );

    assert_eq!(
        client.host().settings.get("dockSide").as_deref(),
        Some("undocked")
    );
}

#[test]
fn hide_highlight_invalidates_exactly_the_view() {
    let mut client = InspectorClient::new(MockView::new(320.0, 240.0));
    client.hide_highlight();
    assert_eq!(
        client.host().invalidated,
        [Rect::new(0.0, 0.0, 320.0, 240.0)]
    );
}

#[test]
fn highlight_follows_view_resizes() {
    let mut client = InspectorClient::new(MockView::new(320.0, 240.0));
    client.highlight(&"body > p");
    client.host_mut().size = Size::new(640.0, 480.0);
    client.highlight(&"body > p");
    client.hide_highlight();
    assert_eq!(
        client.host().invalidated,
        [
            Rect::new(0.0, 0.0, 320.0, 240.0),
            Rect::new(0.0, 0.0, 640.0, 480.0),
            Rect::new(0.0, 0.0, 640.0, 480.0),
        ]
    );
}
