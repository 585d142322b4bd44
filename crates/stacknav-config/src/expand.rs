//! Environment variable expansion for site settings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand `${VAR}` references in a configuration string.
///
/// Strings without `${` are returned unchanged, so bare `$VAR` text survives.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Lookup failure carrying the missing variable name.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_site_url() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("STACKNAV_TEST_HOST", "portfolio.example");
        }
        let result = expand_env("https://${STACKNAV_TEST_HOST}", "site.url").unwrap();
        assert_eq!(result, "https://portfolio.example");
        unsafe {
            std::env::remove_var("STACKNAV_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("STACKNAV_TEST_UNSET_BASE");
        }
        let result = expand_env("${STACKNAV_TEST_UNSET_BASE:-/portfolio/}", "site.base_url").unwrap();
        assert_eq!(result, "/portfolio/");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("STACKNAV_TEST_MISSING");
        }
        let err = expand_env("${STACKNAV_TEST_MISSING}", "site.url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("STACKNAV_TEST_MISSING"));
        assert!(err.to_string().contains("site.url"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("/docs/$section", "site.docs_base").unwrap();
        assert_eq!(result, "/docs/$section");
    }
}
