//! # folio-acl
//!
//! Per-resource access control lists for the Folio wiki.
//!
//! An [`AccessControlList`] holds at most one [`Entry`] per principal name and
//! answers "who holds at least this permission" through
//! [`AccessControlList::find_principals`]. One list is shared by every request
//! thread touching the resource:
//!
//! - mutations are serialized by a reentrant lock and are atomic
//!   (duplicate check and insert happen under the same lock)
//! - lookups never take that lock and always see whole entries
//!
//! ```rust
//! use folio_acl::{AccessControlList, Entry};
//! use folio_core::{PagePermission, WikiPrincipal};
//!
//! let acl = AccessControlList::new();
//! let view = PagePermission::new("main:FrontPage", "view").unwrap();
//! let edit = PagePermission::new("main:FrontPage", "edit").unwrap();
//!
//! acl.add_entry(Entry::grant(WikiPrincipal::new("alice"), view.clone()).unwrap()).unwrap();
//! acl.add_entry(Entry::grant(WikiPrincipal::new("bob"), edit.clone()).unwrap()).unwrap();
//!
//! let editors = acl.find_principals(&edit);
//! assert_eq!(editors.len(), 1);
//! assert_eq!(editors[0].name(), "bob");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod entry;
pub mod error;
pub mod list;


pub use config::AclConfig;
pub use entry::{Entry, EntryBuilder};
pub use error::{Error, Result};
pub use list::{AccessControlList, Entries};
