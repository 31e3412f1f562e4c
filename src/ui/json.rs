use std::io::{self, Write};

use create_decent_app::config::ConfigWarning;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn config_warning_event(warning: &ConfigWarning) -> serde_json::Value {
    serde_json::json!({
        "event": "warning",
        "command": "create",
        "kind": "unknown_config_key",
        "key": warning.key,
        "file": warning.file.display().to_string(),
        "line": warning.line,
        "suggestion": warning.suggestion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn write_event_appends_newline() {
        let mut out = Vec::new();
        write_event(&mut out, &serde_json::json!({"event": "x"})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"event\":\"x\"}\n");
    }

    #[test]
    fn config_warning_event_carries_suggestion() {
        let event = config_warning_event(&ConfigWarning {
            key: "repoo".to_string(),
            file: PathBuf::from("config.toml"),
            line: Some(2),
            suggestion: Some("repo".to_string()),
        });
        assert_eq!(event["event"], "warning");
        assert_eq!(event["suggestion"], "repo");
        assert_eq!(event["line"], 2);
    }
}
