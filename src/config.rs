//! Application configuration.
//!
//! The backend is addressed by a bare `host:port` domain kept in a small
//! plain-text file, read once at startup. The resulting [`Config`] is
//! immutable and handed to every component that needs the address.

use crate::error::ClientError;
use std::path::Path;

/// Environment variable that overrides the domain file when set.
pub const DOMAIN_ENV_VAR: &str = "SHORTLINK_DOMAIN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend network address, e.g. `example.com` or `localhost:8080`.
    pub server_domain: String,
}

impl Config {
    /// Create a Config with the given server domain.
    pub fn new(server_domain: String) -> Self {
        Config { server_domain }
    }

    /// Loads the server domain from a plain-text file at the given path.
    ///
    /// Surrounding whitespace is trimmed. An unreadable or empty file is a
    /// [`ClientError::ConfigLoadFailure`].
    pub fn load_from_file(path: &Path) -> Result<Self, ClientError> {
        let text =
            std::fs::read_to_string(path).map_err(|e| ClientError::ConfigLoadFailure {
                reason: format!("cannot read {}: {}", path.display(), e),
            })?;
        let domain = text.trim();
        if domain.is_empty() {
            return Err(ClientError::ConfigLoadFailure {
                reason: format!("{} is empty", path.display()),
            });
        }
        Ok(Config::new(domain.to_string()))
    }

    /// Resolves the configuration, preferring the `SHORTLINK_DOMAIN`
    /// environment variable over the domain file.
    pub fn resolve(domain_file: &Path) -> Result<Self, ClientError> {
        match std::env::var(DOMAIN_ENV_VAR) {
            Ok(domain) if !domain.trim().is_empty() => {
                Ok(Config::new(domain.trim().to_string()))
            }
            _ => Self::load_from_file(domain_file),
        }
    }

    /// Base URL for API calls, without a trailing slash.
    pub fn api_base(&self) -> String {
        format!("http://{}", self.server_domain.trim_end_matches('/'))
    }

    /// Full short URL for a backend-issued token. The token is used as-is;
    /// its format is never validated here.
    pub fn short_url(&self, token: &str) -> String {
        format!("http://{}/{}", self.server_domain.trim_end_matches('/'), token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // The domain file contents should drive all URL construction.
    fn test_load_reads_trimmed_domain() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("domain.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "example.com").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.server_domain, "example.com");
        assert_eq!(config.api_base(), "http://example.com");
        assert_eq!(config.short_url("x1"), "http://example.com/x1");
    }

    #[test]
    // A missing domain file should be reported, not silently left empty.
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.txt");

        let result = Config::load_from_file(&path);
        assert!(matches!(
            result,
            Err(ClientError::ConfigLoadFailure { .. })
        ));
    }

    #[test]
    // A file holding only whitespace would direct requests at "http:///...".
    fn test_load_rejects_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("domain.txt");
        std::fs::write(&path, "  \n").unwrap();

        let result = Config::load_from_file(&path);
        assert!(matches!(
            result,
            Err(ClientError::ConfigLoadFailure { .. })
        ));
    }
}
