use crate::eval::{CommandContext, Verdict};
use crate::rules::Rule;

/// Predicate deciding whether a conditionally denied program is being used
/// in its dangerous form.
pub type DenyCondition = fn(&CommandContext) -> bool;

struct ConditionalDeny {
    program: String,
    applies: DenyCondition,
    message: String,
}

/// Deny-list by program name.
///
/// Every token is matched case-insensitively against the blocked set, so a
/// blocked program is caught in any position of a piped or chained command
/// line. Conditional entries deny a program only when its predicate holds
/// against the full command — the remote-copy case, where a purely local
/// invocation is benign.
pub struct ProgramDenylist {
    /// Names a block reason, e.g. "network command".
    category: String,
    /// Blocked names, stored lowercased.
    programs: Vec<String>,
    conditional: Vec<ConditionalDeny>,
}

impl ProgramDenylist {
    pub fn new(
        category: impl Into<String>,
        programs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            category: category.into(),
            programs: programs
                .into_iter()
                .map(|p| p.into().to_ascii_lowercase())
                .collect(),
            conditional: Vec::new(),
        }
    }

    /// Add a program that is denied only when `applies` holds.
    pub fn with_conditional(
        mut self,
        program: impl Into<String>,
        applies: DenyCondition,
        message: impl Into<String>,
    ) -> Self {
        self.conditional.push(ConditionalDeny {
            program: program.into().to_ascii_lowercase(),
            applies,
            message: message.into(),
        });
        self
    }
}

impl Rule for ProgramDenylist {
    fn evaluate(&self, ctx: &CommandContext) -> Verdict {
        for token in &ctx.tokens {
            let lower = token.to_ascii_lowercase();
            if self.programs.contains(&lower) {
                return Verdict::Block(format!(
                    "{} '{}' is blocked: {}",
                    self.category, lower, ctx.raw
                ));
            }
        }

        for entry in &self.conditional {
            let named = ctx
                .tokens
                .iter()
                .any(|t| t.eq_ignore_ascii_case(&entry.program));
            if named && (entry.applies)(ctx) {
                return Verdict::Block(format!("{}: {}", entry.message, ctx.raw));
            }
        }

        Verdict::Allow
    }
}
