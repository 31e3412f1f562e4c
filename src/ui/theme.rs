use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};

/// Design tokens for the creator's console output.
///
/// All colors, icons and rules are sourced from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const UPDATED: &str = "✎";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const UPDATED: &str = "*";
}

pub mod rules {
    pub const HORIZONTAL: &str = "─";
    pub const HORIZONTAL_ASCII: &str = "-";
}

/// Theme for dialoguer prompts; plain when color is off.
pub fn prompt_theme(color: bool) -> Box<dyn Theme> {
    if color {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_default_in_brackets() {
        let theme = prompt_theme(false);
        let mut out = String::new();
        theme
            .format_input_prompt(&mut out, "Create project in a new subfolder named", Some("my-new-project"))
            .unwrap();
        assert_eq!(out, "Create project in a new subfolder named [my-new-project]: ");
    }
}
