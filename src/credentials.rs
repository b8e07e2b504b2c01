// Credential resolution.
//
// Every request is sent with HTTP basic auth. For `login` the pair is the
// user's email and password; every other call uses the bearer token as the
// username with an empty password.

use std::io;

use log::debug;

use crate::error::{H2wError, Result};
use crate::token::TokenStore;

/// The (username, secret) pair presented as basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub secret: String,
}

impl Identity {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Identity {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Source of interactive input. The terminal implementation lives in
/// [`crate::ui::TerminalInput`].
pub trait SecretInput {
    /// Read a visible line of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Read input without echoing it.
    fn read_secret(&mut self, prompt: &str) -> io::Result<String>;
}

/// Resolve the email and password for a login, prompting for whichever one
/// is blank after trimming.
pub fn resolve_login<I: SecretInput + ?Sized>(
    email: &str,
    password: &str,
    input: &mut I,
) -> Result<Identity> {
    let mut email = email.trim().to_string();
    if email.is_empty() {
        let line = input
            .read_line("Email")
            .map_err(|source| H2wError::Prompt { what: "email", source })?;
        email = line.trim().to_string();
    }

    let mut password = password.trim().to_string();
    if password.is_empty() {
        let line = input
            .read_secret("Password")
            .map_err(|source| H2wError::Prompt { what: "password", source })?;
        password = line.trim().to_string();
    }

    Ok(Identity::new(email, password))
}

/// Resolve the token identity. An explicit `token` wins; otherwise the token
/// file is read and a `:` appended to its content, giving the username the
/// server expects. The secret is always empty.
pub fn resolve_token(token: &str, store: &TokenStore) -> Result<Identity> {
    let token = token.trim();
    if !token.is_empty() {
        return Ok(Identity::new(token, ""));
    }

    debug!("no token given, falling back to {}", store.path().display());
    let stored = store.load()?;
    let username = format!("{}:", stored).trim().to_string();
    Ok(Identity::new(username, ""))
}
