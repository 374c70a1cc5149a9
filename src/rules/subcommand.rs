use crate::eval::{CommandContext, Verdict};
use crate::rules::Rule;

/// Default-deny allowlist for one program's subcommands.
///
/// If the program appears anywhere in the token stream, the word right
/// after it must be in the allowed set; anything else — including a bare
/// invocation with no subcommand at all — blocks. A command that never
/// names the program passes untouched.
///
/// Only the first occurrence of the program is validated; a second
/// invocation later in a chained command is not independently checked.
pub struct SubcommandAllowlist {
    program: String,
    allowed: Vec<String>,
}

impl SubcommandAllowlist {
    pub fn new(
        program: impl Into<String>,
        allowed: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    fn allowed_list(&self) -> String {
        self.allowed.join(", ")
    }
}

impl Rule for SubcommandAllowlist {
    fn evaluate(&self, ctx: &CommandContext) -> Verdict {
        let Some(pos) = ctx.position_of(&self.program) else {
            return Verdict::Allow;
        };

        match ctx.token_after(pos) {
            Some(sub) if self.allowed.iter().any(|a| a == sub) => Verdict::Allow,
            Some(sub) => Verdict::Block(format!(
                "'{} {}' is blocked (allowed subcommands: {}): {}",
                self.program,
                sub,
                self.allowed_list(),
                ctx.raw
            )),
            None => Verdict::Block(format!(
                "bare '{}' is blocked (allowed subcommands: {}): {}",
                self.program,
                self.allowed_list(),
                ctx.raw
            )),
        }
    }
}
