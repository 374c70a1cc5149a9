pub mod context;
pub mod verdict;

pub use context::CommandContext;
pub use verdict::{PolicyViolation, Verdict};

use crate::rules::Rule;

/// An ordered, immutable collection of rules applied to one command.
///
/// Evaluation short-circuits: the first rule to block decides the verdict
/// and its reason; if every rule allows, the command is allowed. The set
/// owns its rules exclusively and holds no mutable state, so one set can
/// serve any number of concurrent evaluations.
pub struct PolicySet {
    rules: Vec<Box<dyn Rule>>,
}

impl PolicySet {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Run the command through every rule in order; first Block wins.
    pub fn evaluate(&self, ctx: &CommandContext) -> Verdict {
        for rule in &self.rules {
            let verdict = rule.evaluate(ctx);
            if verdict.is_block() {
                return verdict;
            }
        }
        Verdict::Allow
    }
}
