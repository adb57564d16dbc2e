//! Simulated host page driving a mounted widget.
//!
//! Run with:
//!   cargo run --example host-sim

use std::time::Instant;

use framebridge::widget::{
    EventHub, FixedHeightProbe, HostPort, Result, Widget, WindowEvent, LAYOUT_SETTLE_DELAY,
};
use serde_json::{json, Value};

struct PrintingHost;

impl HostPort for PrintingHost {
    fn post_to_parent(&mut self, message: &Value) -> Result<()> {
        println!("widget -> host: {message}");
        Ok(())
    }
}

fn main() -> Result<()> {
    let hub = EventHub::new();
    let widget = Widget::mount(&hub, PrintingHost, FixedHeightProbe(480))?;
    widget.on_render(|args| println!("host -> widget render: {args}"));

    // Frame finishes loading; the height report fires after layout settles.
    hub.emit(&WindowEvent::Load);
    std::thread::sleep(LAYOUT_SETTLE_DELAY);
    widget.tick(Instant::now())?;

    // The host re-broadcasts the same render state; only the change lands.
    let state = json!({ "type": "render", "args": { "label": "hello" } });
    hub.emit(&WindowEvent::Message(state.clone()));
    hub.emit(&WindowEvent::Message(state));
    hub.emit(&WindowEvent::Message(
        json!({ "type": "render", "args": { "label": "world" } }),
    ));

    // The application publishes a computed value upward.
    widget.publish_value(json!({ "clicked": true }))?;

    Ok(())
}
