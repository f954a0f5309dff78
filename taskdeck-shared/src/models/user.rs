//! Users and the authentication envelopes.

use serde::{Deserialize, Serialize};

/// The account behind the current session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Server-assigned identifier.
    pub id: u64,

    /// Display name chosen at registration.
    pub name: String,

    /// Login email address.
    pub email: String,
}

/// Body of `POST login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Body of `POST register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Display name for the new account.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Response of `POST login` and `POST register`.
///
/// The embedded user is accepted but not relied upon; the client reloads the
/// profile from `GET user` once the token is stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Profile echoed by the server, when present.
    #[serde(default)]
    pub user: Option<User>,

    /// Opaque session token.
    pub token: String,
}

/// Response of `GET user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    /// The authenticated user.
    pub user: User,
}
