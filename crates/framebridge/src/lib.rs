//! Cross-frame messaging bridge between an embedded widget and its hosting
//! page.
//!
//! framebridge gives an embedded widget a single logical channel to its host:
//! `render` updates flow down and are filtered by content, value updates and
//! height reports flow up as tagged envelopes.
//!
//! # Crate Structure
//!
//! - [`wire`] — Typed outbound envelopes and inbound message classification
//! - [`widget`] — The bridge component, event hub, timers, and lifecycle hooks

/// Re-export wire protocol types.
pub mod wire {
    pub use framebridge_wire::*;
}

/// Re-export widget runtime types.
pub mod widget {
    pub use framebridge_widget::*;
}
