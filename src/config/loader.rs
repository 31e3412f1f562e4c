//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CreatorError, CreatorResult};

use super::types::{CreatorConfig, ToolVersion};

pub const ENV_TEMPLATE_REPO: &str = "DECENT_APP_TEMPLATE_REPO";
pub const ENV_MIN_GIT_VERSION: &str = "DECENT_APP_MIN_GIT_VERSION";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CreatorResult<(CreatorConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| CreatorError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: CreatorConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CreatorError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration: explicit file, else user config, else defaults;
/// then environment overrides.
///
/// An explicit path must exist. The user config is optional.
pub fn load_resolved(explicit: Option<&Path>) -> CreatorResult<(CreatorConfig, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match user_config_path().filter(|p| p.is_file()) {
            Some(path) => load_with_warnings(&path)?,
            None => (CreatorConfig::default(), Vec::new()),
        },
    };

    let config = with_env_overrides(config)?;
    Ok((config, warnings))
}

/// `<config_dir>/create-decent-app/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("create-decent-app").join("config.toml"))
}

/// Apply environment variable overrides (DECENT_APP_* prefix)
pub fn with_env_overrides(config: CreatorConfig) -> CreatorResult<CreatorConfig> {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: CreatorConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> CreatorResult<CreatorConfig> {
    if let Some(repo) = get_env(ENV_TEMPLATE_REPO).filter(|v| !v.trim().is_empty()) {
        config.template.repo = repo.trim().to_string();
    }

    if let Some(version) = get_env(ENV_MIN_GIT_VERSION) {
        config.template.min_git_version =
            ToolVersion::parse(&version).map_err(|message| CreatorError::InvalidConfig {
                file: PathBuf::from(ENV_MIN_GIT_VERSION),
                message,
            })?;
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "template",
        "repo",
        "min_git_version",
        "placeholders",
        "project_name",
        "display_name",
        "targets",
        "project_name_files",
        "display_name_files",
        "display_name_extensions",
        "defaults",
        "next_steps",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
