//! Assistant credential
//!
//! The credential is an application API key of the form `app-<key>`. It is
//! validated once at startup and then only exposed to the HTTP layer when the
//! `Authorization` header is built. `Debug` output is redacted and there is
//! no `Display` implementation.

use crate::core::error::ConfigError;

/// Required key prefix.
pub const CREDENTIAL_PREFIX: &str = "app-";

/// Minimum number of characters after the prefix.
pub const MIN_KEY_LEN: usize = 8;

/// A validated, immutable credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: String,
}

impl Credential {
    /// Validate a raw credential.
    ///
    /// Surrounding whitespace (e.g. a trailing newline from a secrets file) is
    /// ignored. Missing or blank values are [`ConfigError::Missing`]; anything
    /// not of the form `app-<key>` with exactly one prefix occurrence is
    /// [`ConfigError::MalformedPrefix`].
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let value = raw.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(ConfigError::Missing);
        }

        let Some(key) = value.strip_prefix(CREDENTIAL_PREFIX) else {
            return Err(ConfigError::MalformedPrefix);
        };

        if value.matches(CREDENTIAL_PREFIX).count() != 1
            || key.chars().count() < MIN_KEY_LEN
            || key.chars().any(char::is_whitespace)
        {
            return Err(ConfigError::MalformedPrefix);
        }

        Ok(Self {
            secret: value.to_string(),
        })
    }

    /// The raw secret, for building the authorization header only.
    pub fn expose(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(app-****)")
    }
}

/// Validate the configured credential; see [`Credential::parse`].
pub fn validate_config(credential: Option<&str>) -> Result<Credential, ConfigError> {
    Credential::parse(credential)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credential() {
        let c = validate_config(Some("app-abc123XYZ")).unwrap();
        assert_eq!(c.expose(), "app-abc123XYZ");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let c = validate_config(Some("  app-abc123XYZ\n")).unwrap();
        assert_eq!(c.expose(), "app-abc123XYZ");
    }

    #[test]
    fn test_missing() {
        assert_eq!(validate_config(None), Err(ConfigError::Missing));
        assert_eq!(validate_config(Some("")), Err(ConfigError::Missing));
        assert_eq!(validate_config(Some("   ")), Err(ConfigError::Missing));
    }

    #[test]
    fn test_wrong_prefix() {
        for raw in [
            "abc123XYZabc",
            "sk-abc123XYZabc",
            "APP-abc123XYZ",
            "Bearer app-abc123XYZ",
        ] {
            assert_eq!(
                validate_config(Some(raw)),
                Err(ConfigError::MalformedPrefix),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_doubled_prefix() {
        assert_eq!(
            validate_config(Some("app-app-abc123XYZ")),
            Err(ConfigError::MalformedPrefix)
        );
        assert_eq!(
            validate_config(Some("app-abc123app-XYZ")),
            Err(ConfigError::MalformedPrefix)
        );
    }

    #[test]
    fn test_key_too_short_or_spaced() {
        assert_eq!(validate_config(Some("app-")), Err(ConfigError::MalformedPrefix));
        assert_eq!(validate_config(Some("app-abc")), Err(ConfigError::MalformedPrefix));
        assert_eq!(
            validate_config(Some("app-abc 123XYZ")),
            Err(ConfigError::MalformedPrefix)
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let c = validate_config(Some("app-abc123XYZ")).unwrap();
        let debug = format!("{:?}", c);
        assert!(!debug.contains("abc123XYZ"));
    }
}
