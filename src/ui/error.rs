use create_decent_app::CreatorError;

use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;

fn expected(err: &anyhow::Error) -> Option<&CreatorError> {
    err.downcast_ref::<CreatorError>()
        .filter(|e| e.is_expected())
}

/// Expected errors get one short line. Anything else keeps the full
/// diagnostic chain (and backtrace, when captured).
pub fn format_error(err: &anyhow::Error, supports_color: bool) -> String {
    let prefix = ColoredText::error("Error:").bold().render(supports_color);
    match expected(err) {
        Some(creator) => format!("{} {}\n", prefix, creator),
        None => format!("{} {:?}\n", prefix, err),
    }
}

pub fn error_event(err: &anyhow::Error) -> serde_json::Value {
    match expected(err) {
        Some(creator) => serde_json::json!({
            "event": "error",
            "command": "create",
            "kind": "expected",
            "message": creator.to_string(),
        }),
        None => serde_json::json!({
            "event": "error",
            "command": "create",
            "kind": "internal",
            "message": err.to_string(),
            "detail": format!("{:#}", err),
        }),
    }
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = crate::ui::json::emit(error_event(err));
        return;
    }

    eprint!("{}", format_error(err, ui.color));
}
