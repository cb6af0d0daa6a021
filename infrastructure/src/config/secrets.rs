//! Credential lookup from the hosting environment.
//!
//! The credential is read from `DIFY_API_KEY`. A `.env` file in the working
//! directory (or a parent) is loaded first; variables already set in the
//! process environment win over the file.

use assist_domain::CREDENTIAL_ENV_VAR;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load `.env` into the process environment, if one exists.
///
/// Returns the path that was loaded. A missing file is not an error; a file
/// that cannot be read or parsed is, since variables after the bad line
/// (possibly the credential) are not loaded.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    loaded(dotenvy::dotenv())
}

/// Load a specific env file; same rules as [`load_dotenv`].
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    loaded(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn loaded(result: Result<PathBuf, dotenvy::Error>) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Ok(Some(path))
        }
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Raw credential from the environment, unvalidated.
pub fn credential_from_env() -> Option<String> {
    read_var(CREDENTIAL_ENV_VAR)
}

/// A non-UTF-8 value is returned lossily so it fails validation as malformed
/// instead of being reported as missing.
fn read_var(name: &str) -> Option<String> {
    std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Each test uses its own variable name; dotenvy writes to the process
    // environment shared by all tests.

    fn env_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_env_file_key_is_loaded() {
        let (_dir, path) = env_file("DENTAL_ASSIST_TEST_LOADED_KEY=app-abc123XYZ\n");

        let loaded = load_dotenv_from(&path).unwrap();

        assert_eq!(loaded.as_deref(), Some(path.as_path()));
        assert_eq!(
            read_var("DENTAL_ASSIST_TEST_LOADED_KEY").as_deref(),
            Some("app-abc123XYZ")
        );
    }

    #[test]
    fn test_missing_env_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let loaded = load_dotenv_from(&dir.path().join(".env")).unwrap();

        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_env_file_is_reported() {
        let (_dir, path) = env_file("FOO BAR BAZ\nDENTAL_ASSIST_TEST_SKIPPED_KEY=app-abc123XYZ\n");

        let err = load_dotenv_from(&path).unwrap_err();

        assert!(!err.not_found());
        assert!(!err.to_string().contains("abc123XYZ"));
        assert!(read_var("DENTAL_ASSIST_TEST_SKIPPED_KEY").is_none());
    }

    #[test]
    fn test_unset_variable_reads_as_none() {
        assert!(read_var("DENTAL_ASSIST_TEST_NEVER_SET").is_none());
    }
}
