//! Question prompts with defaults

use anyhow::Result;
use dialoguer::Input;

use crate::ui::context::UiContext;
use crate::ui::theme::prompt_theme;

pub trait Prompter {
    /// Ask `question`; an empty answer falls back to `default`. The result
    /// is trimmed.
    fn ask(&self, question: &str, default: &str) -> Result<String>;
}

/// Reads answers from the terminal
pub struct TerminalPrompter {
    color: bool,
}

impl Prompter for TerminalPrompter {
    fn ask(&self, question: &str, default: &str) -> Result<String> {
        let theme = prompt_theme(self.color);
        let answer: String = Input::with_theme(theme.as_ref())
            .with_prompt(question)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(resolve_answer(&answer, default))
    }
}

/// Accepts every default without asking
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn ask(&self, _question: &str, default: &str) -> Result<String> {
        Ok(default.trim().to_string())
    }
}

pub fn resolve_answer(answer: &str, default: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        default.trim().to_string()
    } else {
        answer.to_string()
    }
}

pub fn for_context(ui: &UiContext) -> Box<dyn Prompter> {
    if ui.interactive {
        Box::new(TerminalPrompter { color: ui.color })
    } else {
        Box::new(DefaultsPrompter)
    }
}
