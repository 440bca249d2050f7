//! The per-resource access control list.
//!
//! # Concurrency
//!
//! Mutators (`add_entry`, `remove_entry`, `with_lock`) serialize on a
//! reentrant mutex so that check-then-act sequences are atomic. The entry
//! sequence itself is an immutable shared slice; a mutation builds the next
//! slice and publishes it with a single slot swap. Readers never take the
//! mutation lock: they clone the currently published slice and work on it.
//!
//! [`AccessControlList::entries`] is a live view. Every step re-reads the
//! published slice, so mutations made while iterating are visible to the
//! iterator. Use [`AccessControlList::snapshot`] for a point-in-time copy.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;
use std::time::Duration;

use folio_core::{Permission, Principal};
use parking_lot::{ReentrantMutex, ReentrantMutexGuard, RwLock};

use crate::config::AclConfig;
use crate::entry::Entry;
use crate::error::{Error, Result};

type Slots = Arc<[Arc<Entry>]>;

/// The set of grants protecting one resource.
///
/// Share it between threads with an `Arc`; all operations take `&self`.
pub struct AccessControlList {
    lock: ReentrantMutex<()>,
    slots: RwLock<Slots>,
    lock_timeout: Option<Duration>,
}

impl AccessControlList {
    /// Create an empty list whose mutators block until the lock is free.
    pub fn new() -> Self {
        Self::with_config(&AclConfig::default())
    }

    /// Create an empty list using the given configuration.
    pub fn with_config(config: &AclConfig) -> Self {
        Self {
            lock: ReentrantMutex::new(()),
            slots: RwLock::new(Arc::from(Vec::new())),
            lock_timeout: config.lock_timeout(),
        }
    }

    /// How long mutators wait for the lock before giving up, if bounded.
    pub fn lock_timeout(&self) -> Option<Duration> {
        self.lock_timeout
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    /// Add an entry unless one already exists for the same principal name.
    ///
    /// Returns `Ok(false)` without changing anything on a duplicate name; the
    /// first entry added for a name wins. Fails with
    /// [`Error::InvalidArgument`] if the entry's principal has no name.
    pub fn add_entry(&self, entry: Entry) -> Result<bool> {
        if entry.has_absent_principal() {
            return Err(Error::invalid_argument("entry principal cannot be null"));
        }

        let _guard = self.acquire()?;

        if self.has_entry(&entry)? {
            log::debug!("ACL already holds an entry for '{}'", entry.name());
            return Ok(false);
        }

        let current = self.current();
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        log::debug!("Adding ACL entry for '{}'", entry.name());
        next.push(Arc::new(entry));
        self.publish(next);

        Ok(true)
    }

    /// Remove the first entry equal to `entry`.
    ///
    /// Returns whether an entry was removed.
    pub fn remove_entry(&self, entry: &Entry) -> Result<bool> {
        let _guard = self.acquire()?;

        let current = self.current();
        let Some(index) = current.iter().position(|e| **e == *entry) else {
            return Ok(false);
        };

        let next: Vec<Arc<Entry>> = current
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, e)| Arc::clone(e))
            .collect();
        log::debug!("Removing ACL entry for '{}'", entry.name());
        self.publish(next);

        Ok(true)
    }

    /// Run `f` while holding the mutation lock.
    ///
    /// The lock is reentrant, so `f` may call [`add_entry`](Self::add_entry)
    /// and [`remove_entry`](Self::remove_entry); no other thread can mutate
    /// the list until `f` returns.
    pub fn with_lock<R>(&self, f: impl FnOnce(&Self) -> R) -> Result<R> {
        let _guard = self.acquire()?;
        Ok(f(self))
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// The entry for `principal`'s name, if any.
    pub fn get_entry(&self, principal: &dyn Principal) -> Option<Arc<Entry>> {
        self.get_entry_by_name(principal.name())
    }

    /// The first entry whose principal has the given name, if any.
    pub fn get_entry_by_name(&self, name: &str) -> Option<Arc<Entry>> {
        self.current().iter().find(|e| e.name() == name).cloned()
    }

    /// A live view over the entries, starting at the current head.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            acl: self,
            cursor: 0,
            done: false,
        }
    }

    /// A point-in-time copy of the entries.
    pub fn snapshot(&self) -> Vec<Arc<Entry>> {
        self.current().to_vec()
    }

    /// Returns `true` if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.current().is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.current().len()
    }

    /// Every principal holding a grant that implies `permission`.
    ///
    /// Each principal appears once, in entry insertion order. An empty
    /// result means no matching grant; it is not an error.
    pub fn find_principals(&self, permission: &dyn Permission) -> Vec<Arc<dyn Principal>> {
        self.current()
            .iter()
            .filter(|entry| entry.check_permission(permission))
            .map(|entry| Arc::clone(entry.principal()))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn acquire(&self) -> Result<ReentrantMutexGuard<'_, ()>> {
        match self.lock_timeout {
            None => Ok(self.lock.lock()),
            Some(timeout) => self.lock.try_lock_for(timeout).ok_or_else(|| {
                log::warn!("Gave up waiting {timeout:?} for the ACL lock");
                Error::LockTimeout {
                    waited_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                }
            }),
        }
    }

    fn current(&self) -> Slots {
        Arc::clone(&*self.slots.read())
    }

    fn publish(&self, next: Vec<Arc<Entry>>) {
        *self.slots.write() = Arc::from(next);
    }

    // Callers hold the mutation lock.
    fn has_entry(&self, entry: &Entry) -> Result<bool> {
        for stored in self.current().iter() {
            if stored.has_absent_principal() || entry.has_absent_principal() {
                log::error!("Null principal in ACL check (entry={entry}; stored={stored})");
                return Err(Error::invariant(format!(
                    "entry principal is null; check code, please (entry={entry}; stored={stored})"
                )));
            }
            if stored.name() == entry.name() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Default for AccessControlList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AccessControlList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessControlList")
            .field("entries", &self.current())
            .field("lock_timeout", &self.lock_timeout)
            .finish()
    }
}

impl fmt::Display for AccessControlList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.current().iter() {
            write!(f, "  user = {}: (", entry.display_name())?;
            entry.write_permissions(f)?;
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

// ============================================================================
// Entries
// ============================================================================

/// Live iterator over an [`AccessControlList`].
///
/// Each step reads the currently published entries at the cursor position.
/// The cursor is a position, not an entry: removing an entry the iterator
/// has already passed shifts the rest down by one, so the next entry is
/// skipped. Entries added at the tail are seen.
/// Once it returns `None` it stays exhausted; call
/// [`AccessControlList::entries`] again to restart from the head.
#[derive(Debug)]
pub struct Entries<'a> {
    acl: &'a AccessControlList,
    cursor: usize,
    done: bool,
}

impl Iterator for Entries<'_> {
    type Item = Arc<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.acl.current().get(self.cursor) {
            Some(entry) => {
                self.cursor += 1;
                Some(Arc::clone(entry))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for Entries<'_> {}

// ============================================================================
// Tests
// ============================================================================
