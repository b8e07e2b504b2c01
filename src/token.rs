// Token file persistence. The file holds nothing but the bearer token
// returned by the login endpoint: no structure, no expiry.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{H2wError, Result};

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TokenStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Report the token to the operator on `out`, then write it as the whole
    /// content of the token file, creating or truncating it.
    pub fn store<W: Write>(&self, token: &str, out: &mut W) -> Result<()> {
        writeln!(out, "TOKEN: {}", token)?;
        debug!("writing token to {}", self.path.display());
        fs::write(&self.path, token).map_err(|source| H2wError::TokenWrite {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the persisted token with surrounding whitespace trimmed.
    pub fn load(&self) -> Result<String> {
        debug!("reading token from {}", self.path.display());
        let data = fs::read_to_string(&self.path).map_err(|source| H2wError::TokenRead {
            path: self.path.clone(),
            source,
        })?;
        Ok(data.trim().to_string())
    }

    /// Remove the token file. A file that is already gone is not an error.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("removed token file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no token file at {}", self.path.display());
                Ok(())
            }
            Err(source) => Err(H2wError::TokenDelete {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, TokenStore) {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join(".h2wgotoken"));
        (dir, store)
    }

    #[test]
    fn store_reports_and_writes_the_token() {
        let (_dir, store) = setup();
        let mut out = Vec::new();

        store.store("abc123", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "TOKEN: abc123\n");
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "abc123");
    }

    #[test]
    fn store_truncates_an_existing_file() {
        let (_dir, store) = setup();
        fs::write(store.path(), "a much longer stale token").unwrap();

        store.store("new", &mut io::sink()).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "new");
    }

    #[test]
    fn load_trims_whitespace() {
        let (_dir, store) = setup();
        fs::write(store.path(), "  xyz\n").unwrap();

        assert_eq!(store.load().unwrap(), "xyz");
    }

    #[test]
    fn load_of_missing_file_fails() {
        let (_dir, store) = setup();

        let err = store.load().unwrap_err();
        assert!(matches!(err, H2wError::TokenRead { .. }));
    }

    #[test]
    fn delete_tolerates_missing_file() {
        let (_dir, store) = setup();
        store.store("abc", &mut io::sink()).unwrap();

        store.delete().unwrap();
        assert!(!store.path().exists());

        store.delete().unwrap();
    }
}
