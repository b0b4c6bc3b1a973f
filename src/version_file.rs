//! Keeps a plain-text version file in sync with the running build.

use crate::constants::VERSION_PREFIX;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// What [`update_version_file`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionFileUpdate {
    Created,
    Updated,
    Unchanged,
}

/// Strip the display prefix: `"Version 1.2.3"` -> `"1.2.3"`.
pub fn normalize_version(raw: &str) -> String {
    raw.replace(VERSION_PREFIX, "")
}

/// Read the version file, `None` if it does not exist.
pub fn read_version_file(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write the normalised version to `path` unless it already holds it.
pub fn update_version_file(path: &Path, raw_version: &str) -> io::Result<VersionFileUpdate> {
    let version = normalize_version(raw_version);

    let outcome = match read_version_file(path)? {
        Some(existing) if existing == version => return Ok(VersionFileUpdate::Unchanged),
        Some(_) => VersionFileUpdate::Updated,
        None => VersionFileUpdate::Created,
    };

    fs::write(path, &version)?;
    info!(path = %path.display(), %version, ?outcome, "version file written");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::VERSION_FILE_NAME;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_version() {
        assert_eq!(normalize_version("Version 1.4.2"), "1.4.2");
        assert_eq!(normalize_version("1.4.2"), "1.4.2");
        assert_eq!(normalize_version("Build Version 7"), "Build 7");
    }

    #[test]
    fn test_create_update_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(VERSION_FILE_NAME);

        assert_eq!(read_version_file(&path).unwrap(), None);

        assert_eq!(
            update_version_file(&path, "Version 1.0").unwrap(),
            VersionFileUpdate::Created
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "1.0");

        assert_eq!(
            update_version_file(&path, "Version 1.0").unwrap(),
            VersionFileUpdate::Unchanged
        );

        assert_eq!(
            update_version_file(&path, "Version 1.1").unwrap(),
            VersionFileUpdate::Updated
        );
        assert_eq!(read_version_file(&path).unwrap().as_deref(), Some("1.1"));
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join(VERSION_FILE_NAME);
        assert!(update_version_file(&path, "1.0").is_err());
    }
}
