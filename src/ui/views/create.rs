use create_decent_app::ScaffoldReport;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::rules;

pub fn render_banner(version: &str, width: u16, supports_color: bool, supports_unicode: bool) -> String {
    let rule = if supports_unicode {
        rules::HORIZONTAL
    } else {
        rules::HORIZONTAL_ASCII
    };
    let title = ColoredText::info(format!("Decent App Creator v{}", version))
        .bold()
        .render(supports_color);

    let mut out = String::new();
    out.push_str(&title);
    out.push('\n');
    out.push_str(&rule.repeat(usize::from(width)));
    out.push('\n');
    out.push('\n');
    out.push_str("You and me are gonna make a new decent app! A few questions...\n");
    out
}

pub fn render_success(
    project_name: &str,
    next_steps: &[String],
    report: &ScaffoldReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(format!("Success! Project created in {}.", project_name))
            .bold()
            .render(supports_color)
    ));
    if report.has_warnings() {
        let skipped = report.skipped.len();
        out.push_str(&format!(
            "{} {} {} could not be read and kept their placeholder text.\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            skipped,
            if skipped == 1 { "entry" } else { "entries" }
        ));
    }
    out.push('\n');
    out.push_str("To build and run your new decent app:\n");
    out.push_str(&format!("  cd {}\n", project_name));
    for step in next_steps {
        out.push_str(&format!("  {}\n", step));
    }
    out
}
