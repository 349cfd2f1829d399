//! Administrative override access.
//!
//! The host can expose an override interface that installs an inspiration
//! without running its eligibility checks. Callers must present an
//! [`OverrideToken`] the host issued; the host rejects anything else.

use thiserror::Error;

/// Version of the override interface. Callers refuse to use an interface
/// reporting any other version.
pub const OVERRIDE_API_VERSION: u32 = 1;

/// Capability token granting access to the host's override interface.
///
/// The host only honours tokens it minted itself and has not revoked. This
/// keeps the override path from being used by accident; it is not a security
/// boundary, since any caller can construct a token and read its secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverrideToken {
    holder: String,
    secret: u64,
}

impl OverrideToken {
    /// Mints a token. Hosts call this when issuing; a token built anywhere
    /// else is rejected unless its holder and secret match an issued one.
    pub fn issue(holder: impl Into<String>, secret: u64) -> Self {
        Self {
            holder: holder.into(),
            secret,
        }
    }

    /// Name of the component the token was issued to.
    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn secret(&self) -> u64 {
        self.secret
    }
}

/// Failures of the override path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    /// The host exposes no override interface
    #[error("host exposes no administrative override interface")]
    Unavailable,
    /// The caller holds no token
    #[error("no override token has been issued to this caller")]
    NoToken,
    /// The token was not issued by this host or has been revoked
    #[error("override token for '{0}' was rejected")]
    InvalidToken(String),
    /// The override interface speaks a different version
    #[error("override interface version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    /// The target colonist no longer exists
    #[error("target colonist no longer exists")]
    ColonistGone,
    /// The target colonist has no inspiration handler
    #[error("target colonist has no inspiration handler")]
    NoHandler,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            OverrideError::VersionMismatch { expected: 1, found: 2 }.to_string(),
            "override interface version mismatch: expected 1, found 2"
        );
        assert_eq!(
            OverrideError::InvalidToken("panel".to_string()).to_string(),
            "override token for 'panel' was rejected"
        );
    }

    #[test]
    fn test_token_accessors() {
        let token = OverrideToken::issue("panel", 7);
        assert_eq!(token.holder(), "panel");
        assert_eq!(token.secret(), 7);
    }
}
