use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use serde_json::{json, Value};

use framebridge_widget::{
    EventHub, FixedHeightProbe, HostPort, Result, Widget, WindowEvent, LAYOUT_SETTLE_DELAY,
};

/// Host port capturing outbound wire objects for assertions.
#[derive(Clone, Default)]
struct RecordingHost {
    posted: Rc<RefCell<Vec<Value>>>,
}

impl HostPort for RecordingHost {
    fn post_to_parent(&mut self, message: &Value) -> Result<()> {
        self.posted.borrow_mut().push(message.clone());
        Ok(())
    }
}

fn mount_widget(height: u64) -> (EventHub, Widget<RecordingHost, FixedHeightProbe>, Rc<RefCell<Vec<Value>>>) {
    let hub = EventHub::new();
    let host = RecordingHost::default();
    let posted = Rc::clone(&host.posted);
    let widget =
        Widget::mount(&hub, host, FixedHeightProbe(height)).expect("widget should mount");
    (hub, widget, posted)
}

#[test]
fn mount_announces_ready_before_anything_else() {
    let (hub, widget, posted) = mount_widget(400);

    hub.emit(&WindowEvent::Load);
    widget
        .tick(Instant::now() + LAYOUT_SETTLE_DELAY)
        .expect("tick should succeed");

    let posted = posted.borrow();
    assert_eq!(
        posted[0],
        json!({ "isBridgeMessage": true, "type": "ready", "apiVersion": 1 })
    );
    assert_eq!(
        posted[1],
        json!({ "isBridgeMessage": true, "type": "setFrameHeight", "height": 400 })
    );
}

#[test]
fn height_report_waits_for_settle_delay() {
    let (hub, widget, posted) = mount_widget(842);

    let before = Instant::now();
    hub.emit(&WindowEvent::Load);
    assert_eq!(widget.pending_reports(), 1);

    // Nothing fires before the delay elapses.
    assert_eq!(widget.tick(before).expect("tick should succeed"), 0);
    assert_eq!(posted.borrow().len(), 1); // ready only

    let fired = widget
        .tick(Instant::now() + LAYOUT_SETTLE_DELAY)
        .expect("tick should succeed");
    assert_eq!(fired, 1);
    assert_eq!(
        *posted.borrow().last().expect("height report expected"),
        json!({ "isBridgeMessage": true, "type": "setFrameHeight", "height": 842 })
    );
}

#[test]
fn each_resize_schedules_its_own_report() {
    let (hub, widget, posted) = mount_widget(120);

    hub.emit(&WindowEvent::Resize);
    hub.emit(&WindowEvent::Resize);
    hub.emit(&WindowEvent::Resize);
    assert_eq!(widget.pending_reports(), 3);

    let fired = widget
        .tick(Instant::now() + LAYOUT_SETTLE_DELAY)
        .expect("tick should succeed");
    assert_eq!(fired, 3);
    // ready + three height reports
    assert_eq!(posted.borrow().len(), 4);
}

#[test]
fn render_messages_are_filtered_by_content() {
    let (hub, widget, _posted) = mount_widget(0);

    let delivered = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&delivered);
    widget.on_render(move |args| sink.borrow_mut().push(args.clone()));

    let a = json!({ "option": { "series": [1, 2] } });
    let b = json!({ "option": { "series": [1, 2, 3] } });

    hub.emit(&WindowEvent::Message(json!({ "type": "render", "args": a.clone() })));
    hub.emit(&WindowEvent::Message(json!({ "type": "render", "args": a.clone() })));
    hub.emit(&WindowEvent::Message(json!({ "type": "render", "args": b.clone() })));
    hub.emit(&WindowEvent::Message(json!({ "type": "other", "args": b.clone() })));

    assert_eq!(*delivered.borrow(), vec![a, b]);
}

#[test]
fn publish_value_reaches_host() {
    let (_hub, widget, posted) = mount_widget(0);

    widget
        .publish_value(json!({ "selected": "world" }))
        .expect("publish should post");

    assert_eq!(
        *posted.borrow().last().expect("publish expected"),
        json!({
            "isBridgeMessage": true,
            "type": "setComponentValue",
            "value": { "selected": "world" },
            "dataType": "json"
        })
    );
}

#[test]
fn dropping_widget_detaches_listeners() {
    let hub = EventHub::new();
    let host = RecordingHost::default();
    let posted = Rc::clone(&host.posted);

    let widget = Widget::mount(&hub, host, FixedHeightProbe(50)).expect("widget should mount");
    assert_eq!(hub.listener_count(), 2);

    drop(widget);
    assert_eq!(hub.listener_count(), 0);

    hub.emit(&WindowEvent::Message(json!({ "type": "render", "args": 1 })));
    hub.emit(&WindowEvent::Load);
    assert_eq!(posted.borrow().len(), 1); // ready only, from mount
}
