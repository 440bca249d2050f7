//! Permissions and the implication relation between them.
//!
//! A grant satisfies a request when the grant *implies* the request. For page
//! permissions that means the granted target covers the requested target and
//! the granted actions, after expanding the action implication closure, cover
//! the requested actions.
//!
//! # Usage
//!
//! ```rust
//! use folio_core::{PagePermission, Permission};
//!
//! let grant = PagePermission::new("main:Main*", "modify").unwrap();
//! let request = PagePermission::new("main:MainPage", "view").unwrap();
//! assert!(grant.implies(&request));
//! assert!(!request.implies(&grant));
//! ```

use std::any::Any;
use std::fmt;
use std::ops::BitOr;

use crate::error::{Error, Result};

/// Wildcard matching any wiki or any page.
pub const WILDCARD: &str = "*";

const WIKI_SEPARATOR: char = ':';

/// A grantable permission.
///
/// The access control list only ever calls [`Permission::implies`]; the
/// relation itself is defined by each permission type.
pub trait Permission: fmt::Debug + fmt::Display + Send + Sync {
    /// Returns `true` if holding `self` is sufficient for `other`.
    fn implies(&self, other: &dyn Permission) -> bool;

    /// Downcasting hook for `implies` implementations.
    fn as_any(&self) -> &dyn Any;
}

/// Value equality of grants: both permissions imply each other.
pub fn equivalent(a: &dyn Permission, b: &dyn Permission) -> bool {
    a.implies(b) && b.implies(a)
}

// ============================================================================
// PageAction / PageActions
// ============================================================================

/// A single action that can be performed on a wiki page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageAction {
    /// Read the page.
    View,
    /// Add comments to the page.
    Comment,
    /// Change the page text.
    Edit,
    /// Edit the page and manage its attachments.
    Modify,
    /// Upload attachments.
    Upload,
    /// Rename the page.
    Rename,
    /// Delete the page.
    Delete,
}

impl PageAction {
    /// All actions, in canonical display order.
    pub const ALL: [PageAction; 7] = [
        PageAction::View,
        PageAction::Comment,
        PageAction::Edit,
        PageAction::Modify,
        PageAction::Upload,
        PageAction::Rename,
        PageAction::Delete,
    ];

    /// The action name as used in ACL markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Comment => "comment",
            Self::Edit => "edit",
            Self::Modify => "modify",
            Self::Upload => "upload",
            Self::Rename => "rename",
            Self::Delete => "delete",
        }
    }

    /// Parse an action name (case-insensitive).
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::invalid_action(trimmed))
    }

    fn bit(self) -> u8 {
        match self {
            Self::View => 0x01,
            Self::Edit => 0x02,
            Self::Comment => 0x04,
            Self::Modify => 0x08,
            Self::Upload => 0x10,
            Self::Rename => 0x20,
            Self::Delete => 0x40,
        }
    }

    // One step of the implication graph; `PageActions::implied` closes over it.
    fn directly_implies(self) -> u8 {
        match self {
            Self::View => 0,
            Self::Comment => Self::View.bit(),
            Self::Edit => Self::View.bit() | Self::Comment.bit(),
            Self::Modify => Self::Edit.bit() | Self::Upload.bit(),
            Self::Upload => Self::View.bit(),
            Self::Rename => Self::Edit.bit(),
            Self::Delete => Self::Edit.bit(),
        }
    }
}

impl fmt::Display for PageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of page actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PageActions(u8);

impl PageActions {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Parse a comma-separated action list such as `"view,edit"`.
    ///
    /// Blank items are skipped; an unknown action or a list with no actions
    /// at all is an error.
    pub fn parse(s: &str) -> Result<Self> {
        let mut actions = Self::empty();
        for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            actions = actions | PageAction::parse(item)?;
        }
        if actions.is_empty() {
            return Err(Error::invalid_action(s.trim()));
        }
        Ok(actions)
    }

    /// Returns `true` if no action is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `action` is explicitly part of the set.
    pub fn has(self, action: PageAction) -> bool {
        self.0 & action.bit() != 0
    }

    /// The set expanded with every action it transitively implies.
    pub fn implied(self) -> Self {
        let mut mask = self.0;
        loop {
            let next = PageAction::ALL
                .into_iter()
                .filter(|a| mask & a.bit() != 0)
                .fold(mask, |acc, a| acc | a.directly_implies());
            if next == mask {
                return Self(mask);
            }
            mask = next;
        }
    }

    /// Returns `true` if `other` is covered by this set's implication closure.
    pub fn covers(self, other: PageActions) -> bool {
        self.implied().0 & other.0 == other.0
    }

    /// Iterate the explicit actions in canonical order.
    pub fn iter(self) -> impl Iterator<Item = PageAction> {
        PageAction::ALL.into_iter().filter(move |a| self.has(*a))
    }
}

impl From<PageAction> for PageActions {
    fn from(action: PageAction) -> Self {
        Self(action.bit())
    }
}

impl BitOr for PageActions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<PageAction> for PageActions {
    type Output = Self;

    fn bitor(self, rhs: PageAction) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl fmt::Display for PageActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(PageAction::as_str).collect();
        f.write_str(&names.join(","))
    }
}

// ============================================================================
// PagePermission
// ============================================================================

/// Permission to perform actions on one or more pages of one or more wikis.
///
/// Targets are written `wiki:page`. Either side may be `*`; the page may also
/// be a prefix (`Main*`) or suffix (`*Notes`) pattern. A target without a
/// wiki part applies to every wiki.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PagePermission {
    wiki: String,
    page: String,
    actions: PageActions,
}

impl PagePermission {
    /// Create a permission from a `wiki:page` target and an action list.
    pub fn new(target: &str, actions: &str) -> Result<Self> {
        Self::with_actions(target, PageActions::parse(actions)?)
    }

    /// Create a permission from a `wiki:page` target and a parsed action set.
    pub fn with_actions(target: &str, actions: PageActions) -> Result<Self> {
        let (wiki, page) = match target.split_once(WIKI_SEPARATOR) {
            Some((wiki, page)) => (wiki.trim(), page.trim()),
            None => (WILDCARD, target.trim()),
        };
        if page.is_empty() {
            return Err(Error::invalid_target(target, "page name is empty"));
        }
        if actions.is_empty() {
            return Err(Error::invalid_action(""));
        }
        let wiki = if wiki.is_empty() { WILDCARD } else { wiki };
        Ok(Self {
            wiki: wiki.to_string(),
            page: page.to_string(),
            actions,
        })
    }

    /// The wiki this permission applies to (`*` for all).
    pub fn wiki(&self) -> &str {
        &self.wiki
    }

    /// The page or page pattern this permission applies to.
    pub fn page(&self) -> &str {
        &self.page
    }

    /// The explicitly granted actions.
    pub fn actions(&self) -> PageActions {
        self.actions
    }

    fn covers_target(&self, other: &PagePermission) -> bool {
        wiki_matches(&self.wiki, &other.wiki) && page_matches(&self.page, &other.page)
    }
}

impl Permission for PagePermission {
    fn implies(&self, other: &dyn Permission) -> bool {
        match other.as_any().downcast_ref::<PagePermission>() {
            Some(other) => self.actions.covers(other.actions) && self.covers_target(other),
            None => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for PagePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PagePermission(\"{}{WIKI_SEPARATOR}{}\",\"{}\")",
            self.wiki, self.page, self.actions
        )
    }
}

// ============================================================================
// AllPermission
// ============================================================================

/// Every permission on a wiki (`*` for every wiki).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AllPermission {
    wiki: String,
}

impl AllPermission {
    /// Create an all-permission for the given wiki.
    ///
    /// A blank wiki applies to every wiki, as for [`PagePermission`] targets.
    pub fn new(wiki: impl Into<String>) -> Self {
        let wiki = wiki.into();
        let trimmed = wiki.trim();
        let wiki = if trimmed.is_empty() {
            WILDCARD.to_string()
        } else if trimmed.len() == wiki.len() {
            wiki
        } else {
            trimmed.to_string()
        };
        Self { wiki }
    }

    /// The wiki this permission applies to.
    pub fn wiki(&self) -> &str {
        &self.wiki
    }
}

impl Permission for AllPermission {
    fn implies(&self, other: &dyn Permission) -> bool {
        let any = other.as_any();
        if let Some(page) = any.downcast_ref::<PagePermission>() {
            return wiki_matches(&self.wiki, &page.wiki);
        }
        if let Some(all) = any.downcast_ref::<AllPermission>() {
            return wiki_matches(&self.wiki, &all.wiki);
        }
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for AllPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AllPermission(\"{}\")", self.wiki)
    }
}

// ============================================================================
// Target matching
// ============================================================================

fn wiki_matches(granted: &str, requested: &str) -> bool {
    granted == WILDCARD || granted == requested
}

fn page_matches(pattern: &str, page: &str) -> bool {
    if pattern == WILDCARD {
        return true;
    }
    if let Some(prefix) = pattern.strip_suffix('*') {
        return page.starts_with(prefix);
    }
    if let Some(suffix) = pattern.strip_prefix('*') {
        return page.ends_with(suffix);
    }
    pattern == page
}

// ============================================================================
// Tests
// ============================================================================
