use framebridge_wire::{classify, Outbound};
use serde_json::Value;

use crate::error::Result;
use crate::host::HostPort;

/// Outcome of dispatching one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A render update with new args; the application callback ran.
    Delivered,
    /// A render update deep-equal to the last processed one; dropped.
    Suppressed,
    /// Foreign traffic on the shared channel; no side effects.
    Ignored,
}

/// The bridge component: outbound notifier, inbound listener, and the
/// last-args cache tying them to one logical channel.
///
/// Construction announces readiness to the host frame; there is no separate
/// initialization step.
pub struct Bridge<H: HostPort> {
    host: H,
    last_args: Value,
    on_render: Option<Box<dyn FnMut(&Value)>>,
}

impl<H: HostPort> std::fmt::Debug for Bridge<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge")
            .field("last_args", &self.last_args)
            .field("on_render", &self.on_render.is_some())
            .finish_non_exhaustive()
    }
}

impl<H: HostPort> Bridge<H> {
    /// Construct the bridge and announce readiness, exactly once, before any
    /// other outbound message.
    pub fn initialize(host: H) -> Result<Self> {
        let mut bridge = Self {
            host,
            // The host may legitimately send `args: null`; the initial cache
            // value matches it, so such a render is suppressed. This mirrors
            // the wire protocol's null sentinel.
            last_args: Value::Null,
            on_render: None,
        };
        bridge.notify_host(Outbound::ready())?;
        Ok(bridge)
    }

    /// Register the application callback invoked with deep-equality-filtered
    /// render args. Replaces any previously registered callback.
    pub fn on_render(&mut self, callback: impl FnMut(&Value) + 'static) {
        self.on_render = Some(Box::new(callback));
    }

    /// Serialize an outbound message and post it to the host frame.
    ///
    /// Send failures propagate; the bridge performs no retry.
    pub fn notify_host(&mut self, message: Outbound) -> Result<()> {
        let wire = message.to_wire()?;
        tracing::trace!(message_type = message.type_tag(), "posting to host frame");
        self.host.post_to_parent(&wire)
    }

    /// Report the widget's measured content height to the host frame.
    pub fn report_frame_height(&mut self, height: u64) -> Result<()> {
        self.notify_host(Outbound::set_frame_height(height))
    }

    /// Publish an application value upward with the default `"json"` data
    /// type.
    pub fn publish_value(&mut self, value: Value) -> Result<()> {
        self.notify_host(Outbound::set_component_value(value))
    }

    /// Publish an application value upward with an explicit data type.
    pub fn publish_value_as(&mut self, value: Value, data_type: &str) -> Result<()> {
        self.notify_host(Outbound::set_component_value_as(value, data_type))
    }

    /// Dispatch one inbound message from the shared channel.
    ///
    /// Only `render` messages are processed. Render args deep-equal to the
    /// last processed args are suppressed — the host may re-broadcast the
    /// same render state on unrelated re-renders, and the application must
    /// only see *changes*. This is a filter by content, not by time.
    pub fn handle_message(&mut self, message: &Value) -> Dispatch {
        let Some(render) = classify(message) else {
            return Dispatch::Ignored;
        };
        if render.args == self.last_args {
            return Dispatch::Suppressed;
        }
        tracing::debug!("render args changed, delivering to application");
        if let Some(callback) = self.on_render.as_mut() {
            callback(&render.args);
        }
        self.last_args = render.args;
        Dispatch::Delivered
    }

    /// The most recently processed render args (`null` before the first
    /// delivery).
    pub fn last_args(&self) -> &Value {
        &self.last_args
    }
}
