use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Output decisions resolved once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
    pub width: u16,
    /// Prompts may block on the terminal
    pub interactive: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, assume_yes: bool) -> Self {
        Self::from_caps(json, verbose, cli_color, assume_yes, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        assume_yes: bool,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => !json && caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            color,
            unicode: caps.supports_unicode,
            width: caps.width,
            interactive: !json && !assume_yes && caps.stdin_is_tty,
        }
    }
}
