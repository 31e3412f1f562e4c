//! Scaffold Use Case
//!
//! Orchestrates project creation:
//! 1. Pre-flight the template source
//! 2. Clone the template into the new folder
//! 3. Remove version-control history
//! 4. Replace placeholders in the configured files
//! 5. Replace the display placeholder across the tree
//!
//! Any error ends the run. Work already done on disk is left in place.

use std::path::{Path, PathBuf};

use crate::application::replacer::{replace_in_file, ReplaceOutcome};
use crate::application::walker::replace_in_tree;
use crate::config::CreatorConfig;
use crate::domain::ports::{
    CloneError, FileSystem, ScaffoldEvent, ScaffoldEventSink, TemplateSource,
};
use crate::domain::{SubstitutionRequest, SubstitutionScope};
use crate::error::{CreatorError, CreatorResult};

use super::request::ScaffoldRequest;
use super::result::ScaffoldReport;

const HISTORY_DIR: &str = ".git";

/// Scaffold use case, parameterized by its ports
pub struct ScaffoldUseCase<'a, FS, TS>
where
    FS: FileSystem,
    TS: TemplateSource,
{
    file_system: FS,
    template_source: TS,
    config: &'a CreatorConfig,
}

impl<'a, FS, TS> ScaffoldUseCase<'a, FS, TS>
where
    FS: FileSystem,
    TS: TemplateSource,
{
    pub fn new(file_system: FS, template_source: TS, config: &'a CreatorConfig) -> Self {
        Self {
            file_system,
            template_source,
            config,
        }
    }

    /// Run every step for `request`, reporting progress to `sink`.
    pub fn execute(
        &self,
        request: &ScaffoldRequest,
        sink: &dyn ScaffoldEventSink,
    ) -> CreatorResult<ScaffoldReport> {
        let project_dir = request.project_dir();

        // The folder may have appeared while the user was answering prompts.
        if self.file_system.exists(&project_dir) {
            return Err(CreatorError::TargetExists {
                path: PathBuf::from(request.project_name.as_str()),
            });
        }

        self.template_source
            .preflight()
            .map_err(unsupported_tool)?;

        let url = self.config.template.repo.as_str();
        sink.on_event(ScaffoldEvent::Cloning {
            url: url.to_string(),
            destination: project_dir.clone(),
        });
        self.template_source
            .fetch(url, &project_dir)
            .map_err(clone_failed)?;

        let history = project_dir.join(HISTORY_DIR);
        sink.on_event(ScaffoldEvent::RemovingHistory {
            path: history.clone(),
        });
        self.file_system.remove_dir_all(&history)?;

        sink.on_event(ScaffoldEvent::ReplacingPlaceholders);
        let mut report = ScaffoldReport::new(project_dir.clone());
        for substitution in self.plan_substitutions(&project_dir, request) {
            self.apply(&substitution, sink, &mut report)?;
        }

        sink.on_event(ScaffoldEvent::Completed {
            project_dir,
            updated_count: report.updated.len(),
            skipped_count: report.skipped.len(),
        });
        Ok(report)
    }

    /// Substitutions for a freshly cloned project, in execution order.
    pub fn plan_substitutions(
        &self,
        project_dir: &Path,
        request: &ScaffoldRequest,
    ) -> Vec<SubstitutionRequest> {
        let placeholders = &self.config.placeholders;
        let targets = &self.config.targets;
        let project_name = request.project_name.as_str();
        let display_name = request.display_name.as_str();

        let project_files = targets.project_name_files.iter().map(|file| {
            SubstitutionRequest::in_file(
                project_dir.join(file),
                &placeholders.project_name,
                project_name,
            )
        });
        let display_files = targets.display_name_files.iter().map(|file| {
            SubstitutionRequest::in_file(
                project_dir.join(file),
                &placeholders.display_name,
                display_name,
            )
        });
        let tree = SubstitutionRequest::in_tree(
            project_dir,
            &targets.display_name_extensions,
            &placeholders.display_name,
            display_name,
        );

        project_files
            .chain(display_files)
            .chain(std::iter::once(tree))
            .collect()
    }

    fn apply(
        &self,
        substitution: &SubstitutionRequest,
        sink: &dyn ScaffoldEventSink,
        report: &mut ScaffoldReport,
    ) -> CreatorResult<()> {
        let search = substitution.search();
        let replace = substitution.replace();

        match substitution.scope() {
            SubstitutionScope::File(path) => {
                match replace_in_file(&self.file_system, path, search, replace)? {
                    ReplaceOutcome::Updated => {
                        sink.on_event(ScaffoldEvent::FileUpdated { path: path.clone() });
                        report.updated.push(path.clone());
                    }
                    ReplaceOutcome::Unchanged => {
                        sink.on_event(ScaffoldEvent::FileUnchanged { path: path.clone() });
                        report.unchanged.push(path.clone());
                    }
                }
            }
            SubstitutionScope::Tree { root, extensions } => {
                let summary =
                    replace_in_tree(&self.file_system, root, extensions, search, replace, sink)?;
                report.updated.extend(summary.updated);
                report.unchanged.extend(summary.unchanged);
                report.skipped.extend(summary.skipped);
            }
        }

        Ok(())
    }
}

fn unsupported_tool(err: CloneError) -> CreatorError {
    let message = match err {
        CloneError::Spawn { tool, source } => format!(
            "This tool requires {tool} to be installed and on your PATH ({source})."
        ),
        CloneError::Failed { tool, code } => format!(
            "Could not determine the installed {tool} version (exit status {}).",
            code.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string())
        ),
        CloneError::Unsupported {
            tool,
            found,
            required,
        } => format!(
            "This tool requires {tool} version {required} or greater. You are using version {found}."
        ),
    };
    CreatorError::UnsupportedTool { message }
}

fn clone_failed(err: CloneError) -> CreatorError {
    match err {
        CloneError::Spawn { .. } | CloneError::Unsupported { .. } => unsupported_tool(err),
        CloneError::Failed { .. } => CreatorError::CloneFailed {
            reason: err.to_string(),
        },
    }
}
