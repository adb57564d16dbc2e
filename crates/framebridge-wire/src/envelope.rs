use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, WireError};

/// Protocol version advertised in the `ready` message.
pub const API_VERSION: u32 = 1;

/// Marker field present on every outbound message.
pub const BRIDGE_MARKER: &str = "isBridgeMessage";

/// Outbound message type: component startup announcement.
pub const MSG_READY: &str = "ready";
/// Outbound message type: frame height report.
pub const MSG_SET_FRAME_HEIGHT: &str = "setFrameHeight";
/// Outbound message type: application value publish.
pub const MSG_SET_COMPONENT_VALUE: &str = "setComponentValue";

/// Default `dataType` for published values.
pub const DEFAULT_DATA_TYPE: &str = "json";

/// An outbound message to the host frame.
///
/// Each variant serializes with its discriminator in the `type` field and the
/// payload flattened at the top level. The typed construction makes it
/// impossible for a payload field to collide with the envelope fields
/// (`isBridgeMessage`, `type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Outbound {
    /// Sent once at startup, before any other outbound message.
    #[serde(rename_all = "camelCase")]
    Ready {
        /// Protocol version. Always [`API_VERSION`] for this crate.
        api_version: u32,
    },

    /// Sent after frame load and on resize, once layout has settled.
    SetFrameHeight {
        /// Measured content height in integer pixels.
        height: u64,
    },

    /// Sent by the hosted application to publish a computed value upward.
    #[serde(rename_all = "camelCase")]
    SetComponentValue {
        /// The published value, passed through opaquely.
        value: Value,
        /// Interpretation hint for the host. Defaults to `"json"`.
        data_type: String,
    },
}

impl Outbound {
    /// The startup announcement.
    pub fn ready() -> Self {
        Outbound::Ready {
            api_version: API_VERSION,
        }
    }

    /// A frame height report.
    pub fn set_frame_height(height: u64) -> Self {
        Outbound::SetFrameHeight { height }
    }

    /// A value publish with the default `"json"` data type.
    pub fn set_component_value(value: Value) -> Self {
        Self::set_component_value_as(value, DEFAULT_DATA_TYPE)
    }

    /// A value publish with an explicit data type (e.g. `"bytes"`).
    pub fn set_component_value_as(value: Value, data_type: impl Into<String>) -> Self {
        Outbound::SetComponentValue {
            value,
            data_type: data_type.into(),
        }
    }

    /// The wire discriminator for this message.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Outbound::Ready { .. } => MSG_READY,
            Outbound::SetFrameHeight { .. } => MSG_SET_FRAME_HEIGHT,
            Outbound::SetComponentValue { .. } => MSG_SET_COMPONENT_VALUE,
        }
    }

    /// Serialize to the exact wire shape, marker included.
    ///
    /// ```text
    /// { "isBridgeMessage": true, "type": "<tag>", ...payload }
    /// ```
    pub fn to_wire(&self) -> Result<Value> {
        let mut wire = serde_json::to_value(self)?;
        let object = wire.as_object_mut().ok_or(WireError::NotAnObject)?;
        object.insert(BRIDGE_MARKER.to_string(), Value::Bool(true));
        Ok(wire)
    }
}
