//! Configuration module for the Decent App creator
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DECENT_APP_*)
//! 3. Config file (`--config`, or ~/.config/create-decent-app/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! The resolved `CreatorConfig` is built once and never mutated afterwards.

mod loader;
mod types;

pub use loader::{
    load_resolved, user_config_path, with_env_overrides, ConfigWarning, ENV_MIN_GIT_VERSION,
    ENV_TEMPLATE_REPO,
};
pub use types::{
    CreatorConfig, DefaultsConfig, PlaceholderConfig, TargetsConfig, TemplateConfig, ToolVersion,
    DEFAULT_TEMPLATE_REPO,
};
