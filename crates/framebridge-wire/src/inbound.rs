use serde_json::Value;

/// Inbound message type: host instructs the component to update its state.
pub const MSG_RENDER: &str = "render";

/// A render instruction from the host frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderMessage {
    /// Application-defined arguments, passed through without validation.
    pub args: Value,
}

/// Classify an inbound message from the shared channel.
///
/// Returns `Some` only for objects whose `type` field is exactly the string
/// `"render"`. Everything else — missing `type`, non-string `type`, non-object
/// message — is foreign traffic and yields `None`. Foreign traffic is not an
/// error; other listeners on the channel may consume it.
///
/// A render message with no `args` field yields `Value::Null` args.
pub fn classify(message: &Value) -> Option<RenderMessage> {
    let object = message.as_object()?;
    if object.get("type").and_then(Value::as_str) != Some(MSG_RENDER) {
        return None;
    }
    Some(RenderMessage {
        args: object.get("args").cloned().unwrap_or(Value::Null),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classifies_render_messages() {
        let message = json!({ "type": "render", "args": { "label": "hi" } });
        let render = classify(&message).unwrap();
        assert_eq!(render.args, json!({ "label": "hi" }));
    }

    #[test]
    fn ignores_other_types() {
        assert!(classify(&json!({ "type": "other", "args": 1 })).is_none());
    }

    #[test]
    fn ignores_missing_type() {
        assert!(classify(&json!({ "args": 1 })).is_none());
        assert!(classify(&json!({})).is_none());
    }

    #[test]
    fn ignores_non_object_messages() {
        assert!(classify(&json!("render")).is_none());
        assert!(classify(&json!(null)).is_none());
        assert!(classify(&json!([1, 2, 3])).is_none());
    }

    #[test]
    fn ignores_non_string_type() {
        assert!(classify(&json!({ "type": 7, "args": 1 })).is_none());
    }

    #[test]
    fn missing_args_defaults_to_null() {
        let render = classify(&json!({ "type": "render" })).unwrap();
        assert_eq!(render.args, Value::Null);
    }
}
