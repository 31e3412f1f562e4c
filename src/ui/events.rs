//! Console event sink: one human-readable line per scaffold event.

use create_decent_app::domain::ports::{ScaffoldEvent, ScaffoldEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

pub struct ConsoleEventSink {
    color: bool,
    unicode: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn new(ui: &UiContext) -> Self {
        Self {
            color: ui.color,
            unicode: ui.unicode,
            verbose: ui.verbose,
        }
    }

    /// Line for `event`, or `None` when it is not shown at this verbosity.
    pub fn format_event(&self, event: &ScaffoldEvent) -> Option<(Stream, String)> {
        let line = match event {
            ScaffoldEvent::Cloning { url, .. } => format!(
                "Source from {} repository used for clone below.",
                ColoredText::info(url.as_str()).render(self.color)
            ),
            ScaffoldEvent::RemovingHistory { .. } => "Removing .git folders...".to_string(),
            ScaffoldEvent::ReplacingPlaceholders => {
                "Replacing placeholder text in project files with your provided text...".to_string()
            }
            ScaffoldEvent::FileUpdated { path } => format!(
                "  {} Updated: {}",
                Icon::Updated.colored(self.color, self.unicode),
                path.display()
            ),
            ScaffoldEvent::FileUnchanged { path } => {
                if self.verbose == 0 {
                    return None;
                }
                ColoredText::dim(format!("    Unchanged: {}", path.display())).render(self.color)
            }
            ScaffoldEvent::EntrySkipped { path, reason } => {
                let line = format!(
                    "  {} Non-fatal {} reading {}: {}",
                    Icon::Warning.colored(self.color, self.unicode),
                    ColoredText::warning("error").render(self.color),
                    path.display(),
                    reason
                );
                return Some((Stream::Stderr, line));
            }
            ScaffoldEvent::Completed { .. } => return None,
        };
        Some((Stream::Stdout, line))
    }
}

impl ScaffoldEventSink for ConsoleEventSink {
    fn on_event(&self, event: ScaffoldEvent) {
        match self.format_event(&event) {
            Some((Stream::Stdout, line)) => println!("{}", line),
            Some((Stream::Stderr, line)) => eprintln!("{}", line),
            None => {}
        }
    }
}
