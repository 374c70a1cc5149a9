//! Rule families: the polymorphic units a [`PolicySet`](crate::eval::PolicySet)
//! is composed from.
//!
//! Rules are pure functions over the command context — stateless,
//! side-effect-free, constructed once at policy build time and reused
//! across evaluations.

/// Deny-list by program name, with optional per-program conditions.
pub mod denylist;
/// Shape-based checks: flags, wildcards, argument counts.
pub mod structural;
/// Default-deny allowlist keyed on a program's subcommand word.
pub mod subcommand;

pub use denylist::ProgramDenylist;
pub use structural::StructuralPattern;
pub use subcommand::SubcommandAllowlist;

use crate::eval::{CommandContext, Verdict};

/// A single policy rule.
///
/// Implementations inspect the token stream and/or the raw command text
/// and either allow (the rule does not apply, or the command passes) or
/// block with a reason specific enough that a legitimate command can be
/// corrected and resubmitted.
pub trait Rule: Send + Sync {
    fn evaluate(&self, ctx: &CommandContext) -> Verdict;
}
