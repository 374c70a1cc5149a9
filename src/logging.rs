use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Initialize decision logging to `~/.local/share/oc-shellguard/guard.log`.
/// Best-effort: any failure leaves logging disabled — logging must never
/// block the hook or alter a decision.
pub fn init() {
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let log_dir = std::path::Path::new(&home).join(".local/share/oc-shellguard");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("guard.log"))
    else {
        return;
    };

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = WriteLogger::init(LevelFilter::Info, config, file);
}
