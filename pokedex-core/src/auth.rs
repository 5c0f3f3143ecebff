//! Bearer-credential decision function
//!
//! The gate compares the second whitespace-delimited field of the
//! `Authorization` header against the configured shared secret; the scheme
//! field is ignored. A process started without a credential denies every
//! request.

use std::fmt;

/// Outcome of a credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    /// Request may proceed to the handlers.
    Allow,
    /// Request must be rejected before any handler runs.
    Deny,
}

impl AuthDecision {
    /// True when the decision permits the request.
    pub fn is_allowed(self) -> bool {
        matches!(self, AuthDecision::Allow)
    }
}

/// Process-wide shared-secret credential.
///
/// Holds the expected token, or nothing at all when the process was started
/// without one; in that state the check fails closed.
#[derive(Clone)]
pub struct Credential {
    token: Option<String>,
}

impl Credential {
    /// Credential expecting `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Credential {
            token: Some(token.into()),
        }
    }

    /// Fail-closed credential: no request can ever be authorized.
    pub fn disabled() -> Self {
        Credential { token: None }
    }

    /// Build from an optionally-configured value.
    ///
    /// An empty string could never match a whitespace-split token field, so
    /// it is folded into the fail-closed state up front.
    pub fn from_config(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Credential { token: Some(token) },
            _ => Credential { token: None },
        }
    }

    /// True when a token is configured.
    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    /// Decide whether a raw `Authorization` header value is authorized.
    ///
    /// The header is split on whitespace and the second field must equal
    /// the configured token exactly: case-sensitive, no trimming beyond the
    /// split, any further fields ignored.
    pub fn authorize(&self, header: Option<&str>) -> AuthDecision {
        let Some(expected) = self.token.as_deref() else {
            return AuthDecision::Deny;
        };
        let Some(header) = header else {
            return AuthDecision::Deny;
        };

        let mut fields = header.split_whitespace();
        let _scheme = fields.next();
        match fields.next() {
            Some(token) if token == expected => AuthDecision::Allow,
            _ => AuthDecision::Deny,
        }
    }
}

// The token must not leak through debug output or log lines.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("configured", &self.token.is_some())
            .finish()
    }
}
