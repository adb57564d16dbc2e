//! Widget-side runtime for the framebridge cross-frame messaging bridge.
//!
//! This is the "just works" layer for an embedded widget. Mount a [`Widget`]
//! on an [`EventHub`], and it announces readiness to the host frame, filters
//! inbound render updates by content, and reports its frame height after load
//! and resize.
//!
//! Everything here is single-threaded and event-driven; the host
//! environment's event loop drives dispatch via [`EventHub::emit`] and
//! [`Widget::tick`].

pub mod bridge;
pub mod error;
pub mod events;
pub mod host;
pub mod timer;
pub mod widget;

pub use bridge::{Bridge, Dispatch};
pub use error::{BridgeError, Result};
pub use events::{EventHub, Subscription, WindowEvent};
pub use host::{FixedHeightProbe, HeightProbe, HostPort};
pub use timer::{TimerQueue, LAYOUT_SETTLE_DELAY};
pub use widget::Widget;
