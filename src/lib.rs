//! oc-shellguard: a `tool.execute.before` hook that gates agent shell commands.
//!
//! The engine never executes anything — it classifies command text. A raw
//! command line is split into a flat token stream, and an ordered
//! [`PolicySet`](eval::PolicySet) of rules inspects the tokens and the raw
//! text. The first rule to block wins and its reason is surfaced to the host
//! as a [`PolicyViolation`](eval::PolicyViolation); if no rule blocks, the
//! command is allowed.
//!
//! # Architecture
//!
//! - **[`parse`]** — Lexical tokenizer: whitespace/`|`/`&`/`;` split with
//!   documented blind spots (quoting is not modeled).
//! - **[`eval`]** — Evaluation engine: verdicts, policy sets, per-command context.
//! - **[`rules`]** — Rule families: subcommand allowlist, program denylist,
//!   structural pattern checks.
//! - **[`guard`]** — The hook adapter: tool-identity gate, `before`/`after`
//!   extension points.
//! - **[`policies`]** — The built-in guards (git-block, network-blocker,
//!   rm-protection) with their fixed rule sets.
//! - **[`event`]** — Hook event decoding: tool name and command text
//!   extraction across host argument shapes.
//! - **[`config`]** — Embedded rule data (compiled-in TOML tables).
//! - **[`logging`]** — Decision logging to `~/.local/share/oc-shellguard/guard.log`.

/// Embedded rule data types and loading.
pub mod config;
/// Hook event decoding: tool identity and command text extraction.
pub mod event;
/// Evaluation engine: verdict, violation, policy set, command context.
pub mod eval;
/// The hook adapter with `before`/`after` extension points.
pub mod guard;
/// File-based decision logging.
pub mod logging;
/// Lexical command tokenization.
pub mod parse;
/// Built-in policy modules with fixed rule sets.
pub mod policies;
/// Rule trait and the three rule families.
pub mod rules;

use eval::Verdict;
use event::CommandEvent;

/// Evaluate a (tool, command) pair against all built-in guards in order.
///
/// This is the main entry point for tests and simple usage. Hosts that
/// register guards individually should build them via [`policies`] and call
/// [`guard::Guard::before`] directly.
pub fn evaluate(tool_name: &str, command: &str) -> Verdict {
    let config = config::Config::default_config();
    let event = CommandEvent::new(tool_name, Some(command.to_string()));
    for guard in policies::all_guards(&config) {
        let verdict = guard.verdict(&event);
        if verdict.is_block() {
            return verdict;
        }
    }
    Verdict::Allow
}
