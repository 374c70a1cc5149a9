//! Shape-based prohibitions: rules keyed on what a command looks like
//! (flags, wildcards, argument counts) rather than on a forbidden name.

use crate::eval::{CommandContext, Verdict};
use crate::rules::Rule;

/// Predicate over the command context deciding whether the shape check fires.
pub type Matcher = fn(&CommandContext) -> bool;

/// A structural check scoped to one program.
///
/// The rule applies only when the command's first token is the scope
/// program; everything else passes untouched. When the matcher fires,
/// the configured message is emitted with the offending command appended.
pub struct StructuralPattern {
    program: String,
    matcher: Matcher,
    message: String,
}

impl StructuralPattern {
    pub fn new(
        program: impl Into<String>,
        matcher: Matcher,
        message: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            matcher,
            message: message.into(),
        }
    }
}

impl Rule for StructuralPattern {
    fn evaluate(&self, ctx: &CommandContext) -> Verdict {
        if ctx.first_token() != Some(self.program.as_str()) {
            return Verdict::Allow;
        }
        if (self.matcher)(ctx) {
            return Verdict::Block(format!("{}: {}", self.message, ctx.raw));
        }
        Verdict::Allow
    }
}

/// Any argument is a recursive or force flag (`-r`, `-rf`, `-fr`, `-R`,
/// any short cluster containing one of those letters, or the long forms).
pub fn has_destructive_flags(ctx: &CommandContext) -> bool {
    ctx.args().iter().any(|t| is_destructive_flag(t))
}

fn is_destructive_flag(token: &str) -> bool {
    if token == "--recursive" || token == "--force" {
        return true;
    }
    match token.strip_prefix('-') {
        Some(cluster) if !cluster.starts_with('-') => {
            cluster.chars().any(|c| matches!(c, 'r' | 'R' | 'f'))
        }
        _ => false,
    }
}

/// Any argument carries a glob metacharacter that could match more than
/// the one file the caller named.
pub fn has_glob_target(ctx: &CommandContext) -> bool {
    ctx.args()
        .iter()
        .any(|t| t.chars().any(|c| matches!(c, '*' | '?' | '[' | ']')))
}

/// More than one non-flag argument, i.e. more than one target path.
pub fn has_multiple_targets(ctx: &CommandContext) -> bool {
    ctx.args().iter().filter(|t| !t.starts_with('-')).count() > 1
}
