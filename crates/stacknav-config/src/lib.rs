//! Configuration management for stacknav.
//!
//! Parses `stacknav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. When no file is
//! found the built-in configuration (compiled into the binary) is used.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `site.base_url`

mod expand;
mod sections;

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;
use stacknav_sections::{ConfigurationError, SectionDefinition, SectionRegistry};

pub use sections::{NavbarConfig, NavbarPosition, RuleConfig, SectionConfig};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "stacknav.toml";

/// Built-in configuration.
const BUILTIN_CONFIG: &str = include_str!("../defaults/stacknav.toml");

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the site base URL.
    pub base_url: Option<String>,
    /// Override the docs base path.
    pub docs_base: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Top navbar items.
    pub navbar: Vec<NavbarConfig>,
    /// Documentation sections, in chip order.
    pub sections: Vec<SectionConfig>,

    /// Path to the config file (set after loading, `None` for built-in).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Production URL.
    pub url: Option<String>,
    /// Path under which the site is served. Starts and ends with `/`.
    pub base_url: String,
    /// Path prefix of the documentation tree.
    pub docs_base: String,
    /// Path of the documentation landing page.
    pub landing_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: None,
            base_url: "/".to_owned(),
            docs_base: "/docs".to_owned(),
            landing_path: "/documentacion".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Invalid section table.
    #[error("Section configuration error: {0}")]
    Sections(#[from] ConfigurationError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`SITE_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a path field to start with `/`.
fn require_absolute(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if !value.starts_with('/') {
        return Err(ConfigError::Validation(format!("{field} must start with /")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `stacknav.toml` in current directory and parents,
    /// falling back to the built-in configuration.
    ///
    /// CLI settings are applied after loading; the result is validated last.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::info!("No {CONFIG_FILENAME} found, using built-in configuration");
            Self::builtin()?
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// The built-in configuration compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns error only if the embedded TOML is malformed.
    pub fn builtin() -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(BUILTIN_CONFIG)?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Applies env expansion and fills empty `navbar` / `sections` tables from
    /// the built-in configuration. Does not validate.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;

        if config.navbar.is_empty() || config.sections.is_empty() {
            let builtin = Self::builtin()?;
            if config.navbar.is_empty() {
                config.navbar = builtin.navbar;
            }
            if config.sections.is_empty() {
                config.sections = builtin.sections;
            }
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.site.base_url.clone_from(base_url);
        }
        if let Some(docs_base) = &settings.docs_base {
            self.site.docs_base.clone_from(docs_base);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            sections = config.sections.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks site paths, navbar items and that the section table forms a
    /// valid registry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` or `ConfigError::Sections` on the
    /// first failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_navbar()?;
        self.registry()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        let site = &self.site;

        if let Some(url) = &site.url {
            require_http_url(url, "site.url")?;
        }

        require_absolute(&site.base_url, "site.base_url")?;
        if !site.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must end with /".to_owned(),
            ));
        }

        require_absolute(&site.docs_base, "site.docs_base")?;
        require_absolute(&site.landing_path, "site.landing_path")?;

        Ok(())
    }

    /// Validate navbar items.
    fn validate_navbar(&self) -> Result<(), ConfigError> {
        for (i, item) in self.navbar.iter().enumerate() {
            let field = format!("navbar[{i}]");
            require_non_empty(&item.label, &format!("{field}.label"))?;

            match (&item.to, &item.href) {
                (Some(to), None) => require_absolute(to, &format!("{field}.to"))?,
                (None, Some(href)) => require_http_url(href, &format!("{field}.href"))?,
                _ => {
                    return Err(ConfigError::Validation(format!(
                        "{field} must set exactly one of `to` or `href`"
                    )));
                }
            }

            if let Some(pattern) = &item.active_base_regex {
                Regex::new(pattern).map_err(|e| {
                    ConfigError::Validation(format!("{field}.active_base_regex is invalid: {e}"))
                })?;
            }
        }
        Ok(())
    }

    /// Section definitions in authoring order.
    pub fn section_definitions(&self) -> Result<Vec<SectionDefinition>, ConfigError> {
        self.sections
            .iter()
            .map(|section| section.to_definition().map_err(ConfigError::from))
            .collect()
    }

    /// Build the validated section registry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Sections` for duplicate ids, missing or invalid
    /// rules.
    pub fn registry(&self) -> Result<SectionRegistry, ConfigError> {
        Ok(SectionRegistry::register(self.section_definitions()?)?)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.site.url {
            self.site.url = Some(expand::expand_env(url, "site.url")?);
        }
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;
        Ok(())
    }
}
