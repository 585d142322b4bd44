use stacknav_config::ConfigError;

/// Navigation model construction error.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// Configuration could not be turned into a registry.
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// A navbar item has neither `to` nor `href`.
    #[error("Navbar item {0:?} has no link target")]
    MissingTarget(String),
    /// A navbar `active_base_regex` does not compile.
    #[error("Navbar item {label:?} has an invalid active_base_regex: {source}")]
    InvalidRegex {
        /// Item label.
        label: String,
        /// Compile error.
        source: regex::Error,
    },
}
