//! Authenticator Port
//!
//! Credentials are acquired per dispatch and handed around explicitly as a
//! `CredentialContext`. There is no ambient logged-in session: once the
//! context is dropped its secret bytes are zeroed.

use crate::domain::entities::PlatformProfile;

/// Scoped credential for one platform
pub struct CredentialContext {
    platform: String,
    env_var: Option<String>,
    source: &'static str,
    secret: Vec<u8>,
}

impl CredentialContext {
    /// Returns `None` for an empty (after trimming) secret.
    pub fn new(
        platform: impl Into<String>,
        env_var: Option<String>,
        source: &'static str,
        secret: impl Into<String>,
    ) -> Option<Self> {
        // Trim in place so no untracked copy of the secret is left behind
        let secret = secret.into();
        let start = secret.len() - secret.trim_start().len();
        let end = secret.trim_end().len().max(start);
        let mut bytes = secret.into_bytes();
        bytes.copy_within(start..end, 0);
        let len = end - start;
        wipe(&mut bytes[len..]);
        bytes.truncate(len);
        if bytes.is_empty() {
            return None;
        }
        Some(Self {
            platform: platform.into(),
            env_var,
            source,
            secret: bytes,
        })
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Env var the publish program expects the secret in
    pub fn env_var(&self) -> Option<&str> {
        self.env_var.as_deref()
    }

    /// Where the secret came from (`env`, `command`, ...)
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn expose_secret(&self) -> &str {
        std::str::from_utf8(&self.secret).unwrap_or_default()
    }
}

impl std::fmt::Debug for CredentialContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialContext")
            .field("platform", &self.platform)
            .field("env_var", &self.env_var)
            .field("source", &self.source)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl Drop for CredentialContext {
    fn drop(&mut self) {
        wipe(&mut self.secret);
        self.secret.clear();
    }
}

/// Zero `bytes` with stores the optimizer cannot elide
fn wipe(bytes: &mut [u8]) {
    for byte in bytes.iter_mut() {
        // SAFETY: `byte` is a valid, aligned, exclusive reference
        unsafe { std::ptr::write_volatile(byte, 0) };
    }
    std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);
}

/// Credential missing or rejected locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub reason: String,
}

impl AuthError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for AuthError {}

/// Delegated credential flow for a platform
pub trait Authenticator {
    /// Acquire a credential for `profile`
    fn authenticate(&self, profile: &PlatformProfile) -> Result<CredentialContext, AuthError>;
}
