use std::io::IsTerminal;

use clap::ValueEnum;
use framebridge_wire::BRIDGE_MARKER;
use serde_json::Value;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Print one outbound wire object to stdout.
pub fn print_wire(message: &Value, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(message).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Pretty => {
            let type_tag = message
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            let mut fields = Vec::new();
            if let Some(object) = message.as_object() {
                for (key, value) in object {
                    if key == "type" || key == BRIDGE_MARKER {
                        continue;
                    }
                    fields.push(format!("{key}={value}"));
                }
            }
            println!("-> {} {}", type_tag, fields.join(" "));
        }
    }
}
