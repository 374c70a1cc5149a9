//! Hook entry point: reads one tool-invocation event as JSON from stdin,
//! runs it through the built-in guards, and writes a decision to stdout.
//!
//! Exit codes: 0 = allow, 2 = block (reason on stderr and in the JSON
//! document), 1 = unreadable input.

use std::io::Read;

use oc_shellguard::config::Config;
use oc_shellguard::event::CommandEvent;
use oc_shellguard::{logging, policies};

fn main() {
    logging::init();

    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        eprintln!("failed to read stdin");
        std::process::exit(1);
    }

    let value: serde_json::Value = match serde_json::from_str(&input) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("JSON parse error: {e}");
            std::process::exit(1);
        }
    };

    let event = CommandEvent::from_value(&value);
    let config = Config::default_config();

    for guard in policies::all_guards(&config) {
        if let Err(violation) = guard.before(&event) {
            let output = serde_json::json!({
                "decision": "block",
                "guard": guard.name(),
                "reason": violation.message(),
            });
            println!("{}", serde_json::to_string(&output).unwrap());
            eprintln!("{violation}");
            std::process::exit(2);
        }
    }

    let output = serde_json::json!({ "decision": "allow" });
    println!("{}", serde_json::to_string(&output).unwrap());
}
