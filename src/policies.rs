//! The built-in policy modules.
//!
//! Each constructor builds one independently registrable guard with a
//! fixed rule set from the embedded policy data. Hosts compose policy by
//! registering guards separately; any one of them can veto a tool call.

use crate::config::Config;
use crate::eval::{CommandContext, PolicySet};
use crate::guard::Guard;
use crate::rules::{
    ProgramDenylist, Rule, StructuralPattern, SubcommandAllowlist, structural,
};

/// A `:` in the command indicates a remote host spec (`user@host:path`,
/// `host::module`).
fn remote_host_spec(ctx: &CommandContext) -> bool {
    ctx.raw.contains(':')
}

/// Every git invocation must name an explicitly read-only subcommand;
/// everything else, including bare `git`, is destructive-by-default.
pub fn git_block(config: &Config) -> Guard {
    let rules: Vec<Box<dyn Rule>> = vec![Box::new(SubcommandAllowlist::new(
        "git",
        config.git.allowed_subcommands.clone(),
    ))];
    Guard::new("git-block", config.tools.shell.clone(), PolicySet::new(rules))
}

/// Blocks network client programs anywhere in a command line, and rsync
/// when used against a remote host.
pub fn network_blocker(config: &Config) -> Guard {
    let denylist = ProgramDenylist::new("network command", config.network.blocked.clone())
        .with_conditional(
            &config.network.remote_copy,
            remote_host_spec,
            format!(
                "'{}' with a remote host is blocked",
                config.network.remote_copy
            ),
        );
    let rules: Vec<Box<dyn Rule>> = vec![Box::new(denylist)];
    Guard::new(
        "network-blocker",
        config.tools.shell.clone(),
        PolicySet::new(rules),
    )
}

/// Confines deletion to one exact file at a time: no recursive/force
/// flags, no wildcards, no multi-target invocations.
pub fn rm_protection(config: &Config) -> Guard {
    let program = &config.deletion.program;
    let rules: Vec<Box<dyn Rule>> = vec![
        Box::new(StructuralPattern::new(
            program,
            structural::has_destructive_flags,
            "recursive or forced deletion is blocked (delete one file at a time)",
        )),
        Box::new(StructuralPattern::new(
            program,
            structural::has_glob_target,
            "deletion with wildcards is blocked (name the exact file)",
        )),
        Box::new(StructuralPattern::new(
            program,
            structural::has_multiple_targets,
            "deleting multiple files in one command is blocked",
        )),
    ];
    Guard::new(
        "rm-protection",
        config.tools.shell.clone(),
        PolicySet::new(rules),
    )
}

/// All built-in guards in evaluation order.
pub fn all_guards(config: &Config) -> Vec<Guard> {
    vec![
        git_block(config),
        network_blocker(config),
        rm_protection(config),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::CommandEvent;

    fn event(cmd: &str) -> CommandEvent {
        CommandEvent::new("bash", Some(cmd.into()))
    }

    #[test]
    fn guards_are_independent() {
        let config = Config::default_config();
        // git-block does not care about curl; network-blocker does not
        // care about git.
        assert!(git_block(&config).verdict(&event("curl x")).is_allow());
        assert!(network_blocker(&config).verdict(&event("git push")).is_allow());
        assert!(rm_protection(&config).verdict(&event("git push")).is_allow());
    }

    #[test]
    fn all_guards_order() {
        let config = Config::default_config();
        let names: Vec<String> = all_guards(&config)
            .iter()
            .map(|g| g.name().to_string())
            .collect();
        assert_eq!(names, ["git-block", "network-blocker", "rm-protection"]);
    }

    #[test]
    fn rm_checks_compose() {
        let config = Config::default_config();
        let guard = rm_protection(&config);
        assert!(guard.verdict(&event("rm file.txt")).is_allow());
        assert!(guard.verdict(&event("rm -rf /tmp/x")).is_block());
        assert!(guard.verdict(&event("rm *.log")).is_block());
        assert!(guard.verdict(&event("rm a.txt b.txt")).is_block());
    }
}
