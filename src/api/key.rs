use crate::error::{Error, Result};

/// Resolve a provider API key: explicit argument first, then `env_var`.
pub fn resolve_api_key(explicit: Option<&str>, env_var: &str) -> Result<String> {
    if let Some(key) = explicit.filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }
    match std::env::var(env_var) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(Error::MissingApiKey {
            env_var: env_var.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_wins() {
        let key = resolve_api_key(Some("abc123"), "GEOCODER_TEST_UNSET_KEY").unwrap();
        assert_eq!(key, "abc123");
    }

    #[test]
    fn test_missing_key() {
        let err = resolve_api_key(None, "GEOCODER_TEST_UNSET_KEY").unwrap_err();
        assert!(matches!(err, Error::MissingApiKey { ref env_var } if env_var == "GEOCODER_TEST_UNSET_KEY"));
        assert!(resolve_api_key(Some(""), "GEOCODER_TEST_UNSET_KEY").is_err());
    }

    #[test]
    fn test_env_fallback() {
        // PATH is set in every test environment
        let key = resolve_api_key(None, "PATH").unwrap();
        assert!(!key.is_empty());
    }
}
