//! Wire protocol for the framebridge cross-frame messaging bridge.
//!
//! This is the codec layer of framebridge. Every outbound message carries:
//! - A constant `isBridgeMessage: true` marker for host-side filtering
//! - A `type` discriminator (`ready`, `setFrameHeight`, `setComponentValue`)
//! - The variant payload, flattened at the top level (not nested)
//!
//! Inbound traffic shares the channel with foreign listeners; only objects
//! tagged `type: "render"` belong to this protocol.

pub mod envelope;
pub mod error;
pub mod inbound;

pub use envelope::{
    Outbound, API_VERSION, BRIDGE_MARKER, DEFAULT_DATA_TYPE, MSG_READY, MSG_SET_COMPONENT_VALUE,
    MSG_SET_FRAME_HEIGHT,
};
pub use error::{Result, WireError};
pub use inbound::{classify, RenderMessage, MSG_RENDER};
