//! Hook event decoding.
//!
//! Upstream argument shape is not guaranteed: hosts deliver the command
//! text under different keys (`command`, `cmd`, `code`, `script`), nested
//! under different containers (`args`, `tool_input`, `arguments`) or at
//! the top level, and name the tool under `tool`, `tool_name`, or `name`.
//! Tolerating all of these is a first-class contract of the hook, so
//! extraction lives here as one function with a prioritized key list
//! instead of ad hoc fallbacks inside rules.

use serde_json::Value;

/// Keys under which hosts deliver the command text, in priority order.
const COMMAND_KEYS: &[&str] = &["command", "cmd", "code", "script"];

/// Containers the invocation arguments may be nested under, in priority order.
const ARG_CONTAINER_KEYS: &[&str] = &["args", "tool_input", "arguments"];

/// Keys under which hosts name the invoked tool, in priority order.
const TOOL_KEYS: &[&str] = &["tool", "tool_name", "name"];

/// One tool invocation as seen by the policy engine: the tool's identity
/// and the command text, if any was found. Lives for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEvent {
    pub tool_name: String,
    pub raw_command: Option<String>,
}

impl CommandEvent {
    pub fn new(tool_name: impl Into<String>, raw_command: Option<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            raw_command,
        }
    }

    /// Decode from the two-value hook shape: `invocation` carries the tool
    /// identity, `payload` the arguments. The command is looked up in the
    /// payload first, then in the invocation itself (some hosts put the
    /// args on the invocation object).
    pub fn from_hook(invocation: &Value, payload: &Value) -> Self {
        let tool_name = tool_name(invocation).unwrap_or_default();
        let raw_command = extract_command(payload).or_else(|| extract_command(invocation));
        Self {
            tool_name,
            raw_command,
        }
    }

    /// Decode from a single event document (hook binaries get one JSON doc).
    pub fn from_value(event: &Value) -> Self {
        Self::from_hook(event, event)
    }
}

/// The invoked tool's name, under whichever key the host used.
pub fn tool_name(invocation: &Value) -> Option<String> {
    TOOL_KEYS
        .iter()
        .find_map(|k| invocation.get(k).and_then(Value::as_str))
        .map(str::to_string)
}

/// The command text, under whichever container/key pair the host used.
/// Returns the first present non-empty string, trimmed; `None` when no
/// recognized key holds one.
pub fn extract_command(value: &Value) -> Option<String> {
    for key in ARG_CONTAINER_KEYS {
        if let Some(cmd) = value.get(key).and_then(command_in) {
            return Some(cmd);
        }
    }
    command_in(value)
}

fn command_in(container: &Value) -> Option<String> {
    COMMAND_KEYS.iter().find_map(|k| {
        container
            .get(k)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    })
}
