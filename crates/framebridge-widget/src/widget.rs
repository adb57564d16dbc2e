use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use serde_json::Value;

use crate::bridge::Bridge;
use crate::error::Result;
use crate::events::{EventHub, Subscription, WindowEvent};
use crate::host::{HeightProbe, HostPort};
use crate::timer::{TimerQueue, LAYOUT_SETTLE_DELAY};

/// A mounted widget: a [`Bridge`] wired to a hub's message, load, and resize
/// events.
///
/// Mounting announces readiness and attaches all listeners in one step —
/// there is no separate initialization call. Dropping the widget detaches its
/// listeners.
pub struct Widget<H: HostPort + 'static, P: HeightProbe + 'static> {
    bridge: Rc<RefCell<Bridge<H>>>,
    timers: Rc<RefCell<TimerQueue>>,
    probe: Rc<P>,
    _subscriptions: Vec<Subscription>,
}

impl<H: HostPort + 'static, P: HeightProbe + 'static> Widget<H, P> {
    /// Mount the widget on an event hub.
    ///
    /// Announces readiness to the host frame (exactly once, before any other
    /// outbound message), then subscribes the inbound message listener and
    /// the load/resize lifecycle hooks. Load and resize each schedule their
    /// own delayed height report after [`LAYOUT_SETTLE_DELAY`]; rapid
    /// repeated resizes are not coalesced.
    pub fn mount(hub: &EventHub, host: H, probe: P) -> Result<Self> {
        let bridge = Rc::new(RefCell::new(Bridge::initialize(host)?));
        let timers = Rc::new(RefCell::new(TimerQueue::new()));
        let probe = Rc::new(probe);

        let message_sub = hub.subscribe({
            let bridge = Rc::clone(&bridge);
            move |event| {
                if let WindowEvent::Message(message) = event {
                    bridge.borrow_mut().handle_message(message);
                }
            }
        });

        let lifecycle_sub = hub.subscribe({
            let bridge = Rc::clone(&bridge);
            let timers = Rc::clone(&timers);
            let probe = Rc::clone(&probe);
            move |event| {
                if matches!(event, WindowEvent::Load | WindowEvent::Resize) {
                    tracing::trace!(?event, "scheduling height report");
                    let bridge = Rc::clone(&bridge);
                    let probe = Rc::clone(&probe);
                    timers
                        .borrow_mut()
                        .schedule(Instant::now(), LAYOUT_SETTLE_DELAY, move || {
                            let height = probe.measure_height();
                            bridge.borrow_mut().report_frame_height(height)
                        });
                }
            }
        });

        Ok(Self {
            bridge,
            timers,
            probe,
            _subscriptions: vec![message_sub, lifecycle_sub],
        })
    }

    /// Register the application render callback. See [`Bridge::on_render`].
    pub fn on_render(&self, callback: impl FnMut(&Value) + 'static) {
        self.bridge.borrow_mut().on_render(callback);
    }

    /// Publish an application value upward with the default `"json"` data
    /// type.
    pub fn publish_value(&self, value: Value) -> Result<()> {
        self.bridge.borrow_mut().publish_value(value)
    }

    /// Publish an application value upward with an explicit data type.
    pub fn publish_value_as(&self, value: Value, data_type: &str) -> Result<()> {
        self.bridge.borrow_mut().publish_value_as(value, data_type)
    }

    /// Report a measured height immediately, bypassing the settle delay.
    pub fn report_frame_height(&self, height: u64) -> Result<()> {
        self.bridge.borrow_mut().report_frame_height(height)
    }

    /// Measure the probe's current height.
    pub fn measure_height(&self) -> u64 {
        self.probe.measure_height()
    }

    /// Drive pending timers: runs every height report due at `now` and
    /// returns how many fired. Errors from a report propagate.
    pub fn tick(&self, now: Instant) -> Result<usize> {
        let due = self.timers.borrow_mut().take_due(now);
        let count = due.len();
        for task in due {
            task()?;
        }
        Ok(count)
    }

    /// Number of height reports scheduled but not yet fired.
    pub fn pending_reports(&self) -> usize {
        self.timers.borrow().pending()
    }
}
