//! Authentication strategy types
//!
//! A single polymorphic credential covers both ways a caller proves its
//! identity: a username/password pair at login, or a bearer access token on
//! subsequent requests.

use uuid::Uuid;

/// A credential presented by a caller
#[derive(Debug, Clone)]
pub enum Credential<'a> {
    /// Username/password pair (login)
    Password {
        username: &'a str,
        password: &'a str,
    },
    /// Bearer access token (authenticated request)
    Bearer { token: &'a str },
}

/// Identity established by a successful authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    /// The principal's id
    pub user_id: Uuid,

    /// The principal's username
    pub username: String,

    /// Device the credential was scoped to (bearer tokens only)
    pub device_id: Option<String>,
}
