//! ACL entries: one principal and the permissions granted to it.
//!
//! Entries are immutable once built. The list publishes them behind an
//! `Arc`, so a reader holding an entry never sees it change.

use std::fmt;
use std::sync::Arc;

use folio_core::{Permission, Principal, equivalent};

use crate::error::{Error, Result};

/// Rendering used for a principal without a name.
pub(crate) const NULL_PRINCIPAL: &str = "null";

/// An immutable grant of permissions to a single principal.
#[derive(Debug, Clone)]
pub struct Entry {
    principal: Arc<dyn Principal>,
    permissions: Vec<Arc<dyn Permission>>,
}

impl Entry {
    /// Start building an entry.
    pub fn builder() -> EntryBuilder {
        EntryBuilder::new()
    }

    /// Build an entry holding a single permission.
    pub fn grant<P, Q>(principal: P, permission: Q) -> Result<Self>
    where
        P: Principal + 'static,
        Q: Permission + 'static,
    {
        EntryBuilder::new()
            .principal(principal)
            .permission(permission)
            .build()
    }

    /// The principal this entry grants to.
    pub fn principal(&self) -> &Arc<dyn Principal> {
        &self.principal
    }

    /// The principal name used for identity comparison.
    pub fn name(&self) -> &str {
        self.principal.name()
    }

    /// Returns `true` if the principal has no usable name.
    pub fn has_absent_principal(&self) -> bool {
        self.principal.is_absent()
    }

    /// The granted permissions, in the order they were added.
    pub fn permissions(&self) -> &[Arc<dyn Permission>] {
        &self.permissions
    }

    /// The first granted permission that implies `permission`.
    pub fn find_permission(&self, permission: &dyn Permission) -> Option<&Arc<dyn Permission>> {
        self.permissions.iter().find(|p| p.implies(permission))
    }

    /// Returns `true` if any granted permission implies `permission`.
    pub fn check_permission(&self, permission: &dyn Permission) -> bool {
        self.find_permission(permission).is_some()
    }

    pub(crate) fn display_name(&self) -> &str {
        if self.has_absent_principal() {
            NULL_PRINCIPAL
        } else {
            self.name()
        }
    }

    pub(crate) fn write_permissions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, permission) in self.permissions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{permission}")?;
        }
        Ok(())
    }
}

/// Entries are equal when they name the same principal and grant equivalent
/// permission sets.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
            && self.permissions.len() == other.permissions.len()
            && self
                .permissions
                .iter()
                .all(|p| other.permissions.iter().any(|q| equivalent(p.as_ref(), q.as_ref())))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[AclEntry ALLOW {} ", self.display_name())?;
        self.write_permissions(f)?;
        f.write_str("]")
    }
}

// ============================================================================
// EntryBuilder
// ============================================================================

/// Builder for [`Entry`].
#[derive(Debug, Default)]
pub struct EntryBuilder {
    principal: Option<Arc<dyn Principal>>,
    permissions: Vec<Arc<dyn Permission>>,
}

impl EntryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the principal.
    pub fn principal<P: Principal + 'static>(self, principal: P) -> Self {
        self.shared_principal(Arc::new(principal))
    }

    /// Set an already shared principal.
    pub fn shared_principal(mut self, principal: Arc<dyn Principal>) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Add a permission. Equivalent permissions already present are skipped.
    pub fn permission<P: Permission + 'static>(self, permission: P) -> Self {
        self.shared_permission(Arc::new(permission))
    }

    /// Add an already shared permission.
    pub fn shared_permission(mut self, permission: Arc<dyn Permission>) -> Self {
        let duplicate = self
            .permissions
            .iter()
            .any(|p| equivalent(p.as_ref(), permission.as_ref()));
        if !duplicate {
            self.permissions.push(permission);
        }
        self
    }

    /// Finish the entry.
    ///
    /// Fails with [`Error::InvalidArgument`] if no principal was set.
    pub fn build(self) -> Result<Entry> {
        let principal = self
            .principal
            .ok_or_else(|| Error::invalid_argument("entry principal cannot be null"))?;
        Ok(Entry {
            principal,
            permissions: self.permissions,
        })
    }
}
