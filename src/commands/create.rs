//! Create command - ask for names, then scaffold the project
//!
//! Prompts are answered from the terminal when one is attached. Otherwise
//! (or with `--yes`/`--json`) the positional name, `--display-name` and the
//! configured defaults are used as-is.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use create_decent_app::config::{load_resolved, ConfigWarning};
use create_decent_app::domain::ports::ScaffoldEventSink;
use create_decent_app::{
    validate_display_name, validate_project_name, CreatorConfig, GitCli, JsonEventSink, LocalFs,
    ScaffoldRequest, ScaffoldUseCase,
};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::prompt::{self, Prompter};
use crate::ui::views::create::{render_banner, render_success};

const PROJECT_NAME_QUESTION: &str = "Create project in a new subfolder named";
const DISPLAY_NAME_QUESTION: &str = "App display name shown on web pages";

/// Exit status after Ctrl+C (128 + SIGINT)
const INTERRUPTED_EXIT_CODE: i32 = 130;

pub fn cmd_create(cli: &Cli, ui: &UiContext) -> Result<()> {
    let (config, warnings) = load_resolved(cli.config.as_deref())?;
    let config = match &cli.template {
        Some(url) => config.with_template_repo(url.trim()),
        None => config,
    };
    report_config_warnings(&warnings, ui);

    if !ui.json {
        print!(
            "{}",
            render_banner(env!("CARGO_PKG_VERSION"), ui.width, ui.color, ui.unicode)
        );
    }

    let base_dir = std::env::current_dir().context("Failed to read the working directory")?;
    let fs = LocalFs::new();
    let prompter = prompt::for_context(ui);

    let request = ask_for_names(cli, &config, prompter.as_ref(), &base_dir, &fs)?;
    install_interrupt_hint(request.project_dir())?;

    let git = GitCli::new(config.template.min_git_version).quiet(ui.json);
    let use_case = ScaffoldUseCase::new(&fs, git, &config);

    let sink: Box<dyn ScaffoldEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(ui))
    };
    let report = use_case.execute(&request, sink.as_ref())?;

    if !ui.json {
        print!(
            "{}",
            render_success(
                request.project_name.as_str(),
                &config.defaults.next_steps,
                &report,
                ui.color,
                ui.unicode,
            )
        );
    }
    Ok(())
}

fn ask_for_names(
    cli: &Cli,
    config: &CreatorConfig,
    prompter: &dyn Prompter,
    base_dir: &Path,
    fs: &LocalFs,
) -> Result<ScaffoldRequest> {
    let default_name = cli
        .project_name
        .as_deref()
        .unwrap_or(&config.defaults.project_name);
    let answer = prompter.ask(PROJECT_NAME_QUESTION, default_name)?;
    let project_name = validate_project_name(&answer, base_dir, fs)?;

    let default_display = cli
        .display_name
        .as_deref()
        .unwrap_or(project_name.as_str());
    let answer = prompter.ask(DISPLAY_NAME_QUESTION, default_display)?;
    let display_name = validate_display_name(&answer)?;

    Ok(ScaffoldRequest::new(project_name, display_name, base_dir))
}

fn report_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        if ui.json {
            let _ = crate::ui::json::emit(crate::ui::json::config_warning_event(warning));
            continue;
        }
        eprintln!(
            "Warning: Unknown config key '{}' in {}{}{}",
            warning.key,
            warning.file.display(),
            warning
                .line
                .map(|line| format!(":{}", line))
                .unwrap_or_default(),
            warning
                .suggestion
                .as_ref()
                .map(|s| format!(". Did you mean '{}'?", s))
                .unwrap_or_default()
        );
    }
}

fn install_interrupt_hint(project_dir: PathBuf) -> Result<()> {
    ctrlc::set_handler(move || {
        eprintln!();
        eprintln!("{}", interrupt_hint(&project_dir));
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })
    .context("Failed to install the Ctrl+C handler")
}

fn interrupt_hint(project_dir: &Path) -> String {
    format!(
        "Interrupted. {} may be partially created; delete it before trying again.",
        project_dir.display()
    )
}
