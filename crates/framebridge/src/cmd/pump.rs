use std::io::BufRead;
use std::time::Instant;

use framebridge_widget::{
    EventHub, FixedHeightProbe, HostPort, Result, Widget, WindowEvent, LAYOUT_SETTLE_DELAY,
};
use serde_json::Value;

use crate::cmd::PumpArgs;
use crate::exit::{bridge_error, io_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_wire, OutputFormat};

/// Host port that prints outbound wire objects to stdout.
struct StdoutHost {
    format: OutputFormat,
}

impl HostPort for StdoutHost {
    fn post_to_parent(&mut self, message: &Value) -> Result<()> {
        print_wire(message, self.format);
        Ok(())
    }
}

/// Reads host traffic line by line and drives a mounted widget with it.
///
/// Each input line is either a JSON object (emitted as a message event) or
/// one of the bare words `load` / `resize` (emitted as the matching lifecycle
/// event, followed by the layout-settle delay and a timer tick). Outbound
/// widget traffic goes to stdout, one wire object per line; delivered render
/// args are logged to stderr.
pub fn run(args: PumpArgs, format: OutputFormat) -> CliResult<i32> {
    let hub = EventHub::new();
    let widget = Widget::mount(&hub, StdoutHost { format }, FixedHeightProbe(args.height))
        .map_err(|err| bridge_error("mount failed", err))?;
    widget.on_render(|render_args| {
        tracing::info!(args = %render_args, "render delivered");
    });

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|err| io_error("failed reading stdin", err))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed {
            "load" => drive_lifecycle(&hub, &widget, WindowEvent::Load)?,
            "resize" => drive_lifecycle(&hub, &widget, WindowEvent::Resize)?,
            _ => {
                let message: Value = serde_json::from_str(trimmed).map_err(|err| {
                    CliError::new(DATA_INVALID, format!("input is not valid JSON: {err}"))
                })?;
                hub.emit(&WindowEvent::Message(message));
            }
        }
    }

    if let Some(publish) = &args.publish {
        let value: Value = serde_json::from_str(publish)
            .map_err(|err| CliError::new(DATA_INVALID, format!("--publish is not valid JSON: {err}")))?;
        widget
            .publish_value_as(value, &args.data_type)
            .map_err(|err| bridge_error("publish failed", err))?;
    }

    Ok(SUCCESS)
}

fn drive_lifecycle(
    hub: &EventHub,
    widget: &Widget<StdoutHost, FixedHeightProbe>,
    event: WindowEvent,
) -> CliResult<()> {
    hub.emit(&event);
    std::thread::sleep(LAYOUT_SETTLE_DELAY);
    widget
        .tick(Instant::now())
        .map_err(|err| bridge_error("height report failed", err))?;
    Ok(())
}
