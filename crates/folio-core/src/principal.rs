//! Principals: identities that access control entries are granted to.
//!
//! The access control list only ever compares principals by [`Principal::name`].
//! Two principals of different concrete types with the same name are the same
//! identity as far as grants are concerned.

use std::fmt;

/// An identity that can hold permissions.
///
/// An empty name stands for an absent principal; the ACL rejects entries
/// built around one.
pub trait Principal: fmt::Debug + Send + Sync {
    /// The name used for identity comparison.
    fn name(&self) -> &str;

    /// Returns `true` if this principal has no usable name.
    fn is_absent(&self) -> bool {
        self.name().is_empty()
    }
}

// ============================================================================
// WikiPrincipal
// ============================================================================

/// The flavour of name a [`WikiPrincipal`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrincipalKind {
    /// Full display name, e.g. "Janne Jalkanen".
    FullName,
    /// Login name, e.g. "jjalkanen".
    LoginName,
    /// CamelCase wiki name, e.g. "JanneJalkanen".
    WikiName,
    /// Origin unknown.
    #[default]
    Unspecified,
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullName => write!(f, "fullName"),
            Self::LoginName => write!(f, "loginName"),
            Self::WikiName => write!(f, "wikiName"),
            Self::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// A user identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WikiPrincipal {
    name: String,
    kind: PrincipalKind,
}

impl WikiPrincipal {
    /// Create a principal of unspecified kind.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, PrincipalKind::Unspecified)
    }

    /// Create a principal of the given kind.
    pub fn with_kind(name: impl Into<String>, kind: PrincipalKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The kind of name this principal carries.
    pub fn kind(&self) -> PrincipalKind {
        self.kind
    }
}

impl Principal for WikiPrincipal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for WikiPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ============================================================================
// Role
// ============================================================================

/// A named role.
///
/// Roles are plain names here; membership and hierarchies are resolved
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role {
    name: String,
}

impl Role {
    /// Every user, authenticated or not.
    pub const ALL: &'static str = "All";
    /// Users without any identity.
    pub const ANONYMOUS: &'static str = "Anonymous";
    /// Users who asserted an identity (e.g. via cookie) without logging in.
    pub const ASSERTED: &'static str = "Asserted";
    /// Users who logged in.
    pub const AUTHENTICATED: &'static str = "Authenticated";

    /// Create a role with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The `All` built-in role.
    pub fn all() -> Self {
        Self::new(Self::ALL)
    }

    /// The `Anonymous` built-in role.
    pub fn anonymous() -> Self {
        Self::new(Self::ANONYMOUS)
    }

    /// The `Asserted` built-in role.
    pub fn asserted() -> Self {
        Self::new(Self::ASSERTED)
    }

    /// The `Authenticated` built-in role.
    pub fn authenticated() -> Self {
        Self::new(Self::AUTHENTICATED)
    }

    /// Returns `true` for one of the four built-in roles.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self.name.as_str(),
            Self::ALL | Self::ANONYMOUS | Self::ASSERTED | Self::AUTHENTICATED
        )
    }
}

impl Principal for Role {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
