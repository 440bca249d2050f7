//! Common helpers for folio-acl integration tests.

use std::sync::Arc;

use folio_acl::Entry;
use folio_core::{PagePermission, Principal, WikiPrincipal};

/// Build a page permission, panicking on malformed input.
pub fn page(target: &str, actions: &str) -> PagePermission {
    PagePermission::new(target, actions).expect("valid page permission")
}

/// An entry granting `actions` on `main:Main` to a user called `name`.
pub fn grant(name: &str, actions: &str) -> Entry {
    Entry::grant(WikiPrincipal::new(name), page("main:Main", actions)).expect("valid entry")
}

/// Principal names, in result order.
pub fn names(principals: &[Arc<dyn Principal>]) -> Vec<String> {
    principals.iter().map(|p| p.name().to_string()).collect()
}
