//! Folio Core — principal and permission model.
//!
//! This crate provides the identity and permission types that the Folio
//! access control list is built on. It has no internal Folio dependencies
//! (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`principal`]: Name-comparable identities ([`WikiPrincipal`], [`Role`])
//! - [`permission`]: The [`Permission`] trait and the wiki permission types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod permission;
pub mod principal;

#[cfg(test)]
mod proptests;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use permission::{
    AllPermission, PageAction, PageActions, PagePermission, Permission, equivalent,
};
pub use principal::{Principal, PrincipalKind, Role, WikiPrincipal};
