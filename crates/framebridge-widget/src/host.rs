use serde_json::Value;

use crate::error::Result;

/// The seam to the parent frame.
///
/// Implementations deliver outbound wire objects to the immediate parent
/// context with an UNRESTRICTED destination origin. That is a deliberate
/// compatibility choice inherited from the wire protocol, not a security
/// boundary: any page embedding the widget can observe outbound traffic and
/// inject inbound messages. Restricting the origin would change observable
/// wire behavior.
pub trait HostPort {
    /// Deliver one outbound wire object to the parent frame.
    ///
    /// Returns [`BridgeError::HostUnavailable`](crate::BridgeError::HostUnavailable)
    /// when no parent context exists; the error propagates to the caller
    /// untouched.
    fn post_to_parent(&mut self, message: &Value) -> Result<()>;
}

/// Measures the widget's current content height in integer pixels.
///
/// The measurement primitive is implementation-defined; a DOM-backed widget
/// would read the document's client height.
pub trait HeightProbe {
    /// Current content height.
    fn measure_height(&self) -> u64;
}

/// A probe that always reports the same height. Useful for harnesses and
/// widgets with fixed layouts.
#[derive(Debug, Clone, Copy)]
pub struct FixedHeightProbe(pub u64);

impl HeightProbe for FixedHeightProbe {
    fn measure_height(&self) -> u64 {
        self.0
    }
}
