use crate::eval::{CommandContext, PolicySet, PolicyViolation, Verdict};
use crate::event::CommandEvent;

/// The hook adapter: one policy module as registered with a host.
///
/// A guard gates shell-executing tool calls only — an event whose tool is
/// not in the configured identity set, or that carries no command text,
/// passes untouched. Guards hold no mutable state; one instance can serve
/// concurrent evaluations.
pub struct Guard {
    name: String,
    shell_tools: Vec<String>,
    policy: PolicySet,
}

impl Guard {
    pub fn new(
        name: impl Into<String>,
        shell_tools: Vec<String>,
        policy: PolicySet,
    ) -> Self {
        Self {
            name: name.into(),
            shell_tools,
            policy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this event's tool executes shell text. Case-insensitive:
    /// hosts disagree on capitalization ("bash" vs "Bash").
    fn governs(&self, tool_name: &str) -> bool {
        self.shell_tools
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tool_name))
    }

    /// Classify one event. Non-shell tools and absent/empty commands are
    /// vacuously allowed — a command that cannot be classified as
    /// dangerous is not blocked.
    pub fn verdict(&self, event: &CommandEvent) -> Verdict {
        if !self.governs(&event.tool_name) {
            return Verdict::Allow;
        }
        let Some(raw) = event.raw_command.as_deref() else {
            return Verdict::Allow;
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Verdict::Allow;
        }
        let ctx = CommandContext::from_command(raw);
        self.policy.evaluate(&ctx)
    }

    /// Pre-execution extension point. Returns `Err` on block; the host is
    /// expected to treat the error as "do not execute, surface the message".
    pub fn before(&self, event: &CommandEvent) -> Result<(), PolicyViolation> {
        match self.verdict(event) {
            Verdict::Allow => {
                log::info!("[{}] allow {}: {:?}", self.name, event.tool_name, event.raw_command);
                Ok(())
            }
            Verdict::Block(reason) => {
                log::warn!("[{}] block: {}", self.name, reason);
                Err(PolicyViolation::new(reason))
            }
        }
    }

    /// Post-execution extension point. Policy is purely a pre-execution
    /// gate, so this does nothing.
    pub fn after(&self) {}
}
