//! Configuration type definitions

use std::fmt;

use serde::Deserialize;

/// Upstream template repository used when nothing overrides it
pub const DEFAULT_TEMPLATE_REPO: &str = "https://github.com/erikh2000/decentapp-template";

/// `major.minor` version of an external tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct ToolVersion {
    pub major: u32,
    pub minor: u32,
}

impl ToolVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse `2`, `2.39` or `2.39.3.windows.1`; components past the minor
    /// version are ignored.
    pub fn parse(s: &str) -> Result<Self, String> {
        let mut parts = s.trim().split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(|| format!("'{}' is not a version number", s))?;
        let minor = match parts.next() {
            None => 0,
            Some(p) => p
                .parse::<u32>()
                .map_err(|_| format!("'{}' is not a version number", s))?,
        };
        Ok(Self { major, minor })
    }
}

impl TryFrom<String> for ToolVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Template repository settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub repo: String,
    pub min_git_version: ToolVersion,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            repo: DEFAULT_TEMPLATE_REPO.to_string(),
            min_git_version: ToolVersion::new(2, 0),
        }
    }
}

/// Literal placeholders embedded in the template
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    pub project_name: String,
    pub display_name: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            project_name: "decentapp-template".to_string(),
            display_name: "Decent App".to_string(),
        }
    }
}

/// Files that receive substitutions, relative to the project folder
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TargetsConfig {
    pub project_name_files: Vec<String>,
    pub display_name_files: Vec<String>,
    pub display_name_extensions: Vec<String>,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            project_name_files: vec!["package.json".to_string()],
            display_name_files: vec!["README.md".to_string(), "public/manifest.json".to_string()],
            display_name_extensions: vec!["ts".to_string(), "tsx".to_string(), "html".to_string()],
        }
    }
}

/// Prompt defaults and the closing instructions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub project_name: String,
    pub next_steps: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            project_name: "my-new-project".to_string(),
            next_steps: vec!["npm install".to_string(), "npm run dev".to_string()],
        }
    }
}

/// Immutable settings for one creator run
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CreatorConfig {
    pub template: TemplateConfig,
    pub placeholders: PlaceholderConfig,
    pub targets: TargetsConfig,
    pub defaults: DefaultsConfig,
}

impl CreatorConfig {
    /// Replace the template repository URL
    pub fn with_template_repo(mut self, repo: impl Into<String>) -> Self {
        self.template.repo = repo.into();
        self
    }
}
