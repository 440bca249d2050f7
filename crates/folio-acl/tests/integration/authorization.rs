//! Authorization lookups over realistic grant sets.

use folio_acl::{AccessControlList, Entry, Error};
use folio_core::{AllPermission, PagePermission, Role, WikiPrincipal};

use crate::common::{grant, names, page};

#[test]
fn test_editors_query_returns_only_editors() {
    let acl = AccessControlList::new();
    acl.add_entry(grant("alice", "view")).unwrap();
    acl.add_entry(
        Entry::builder()
            .principal(WikiPrincipal::new("bob"))
            .permission(page("main:Main", "view"))
            .permission(page("main:Main", "edit"))
            .build()
            .unwrap(),
    )
    .unwrap();

    let found = acl.find_principals(&page("main:Main", "edit"));
    assert_eq!(names(&found), ["bob"]);
}

#[test]
fn test_typical_page_acl() {
    // [{ALLOW view All}] [{ALLOW edit Authenticated}] [{ALLOW delete Admin}]
    let acl = AccessControlList::new();
    acl.add_entry(Entry::grant(Role::all(), page("main:Main", "view")).unwrap())
        .unwrap();
    acl.add_entry(Entry::grant(Role::authenticated(), page("main:Main", "edit")).unwrap())
        .unwrap();
    acl.add_entry(Entry::grant(Role::new("Admin"), page("main:Main", "delete")).unwrap())
        .unwrap();

    assert_eq!(
        names(&acl.find_principals(&page("main:Main", "view"))),
        ["All", "Authenticated", "Admin"]
    );
    assert_eq!(
        names(&acl.find_principals(&page("main:Main", "comment"))),
        ["Authenticated", "Admin"]
    );
    assert_eq!(
        names(&acl.find_principals(&page("main:Main", "rename"))),
        Vec::<String>::new()
    );
}

#[test]
fn test_wildcard_grants() {
    let acl = AccessControlList::new();
    acl.add_entry(Entry::grant(WikiPrincipal::new("gardener"), page("*:*", "edit")).unwrap())
        .unwrap();
    acl.add_entry(
        Entry::grant(WikiPrincipal::new("archivist"), page("main:Archive*", "modify")).unwrap(),
    )
    .unwrap();
    acl.add_entry(Entry::grant(WikiPrincipal::new("sysop"), AllPermission::new("main")).unwrap())
        .unwrap();

    let upload_archive = page("main:Archive2024", "upload");
    assert_eq!(
        names(&acl.find_principals(&upload_archive)),
        ["archivist", "sysop"]
    );

    let edit_elsewhere = page("sandbox:Scratch", "edit");
    assert_eq!(names(&acl.find_principals(&edit_elsewhere)), ["gardener"]);
}

#[test]
fn test_get_entry_then_check() {
    let acl = AccessControlList::new();
    acl.add_entry(grant("alice", "modify")).unwrap();

    let entry = acl.get_entry(&WikiPrincipal::new("alice")).unwrap();
    assert!(entry.check_permission(&page("main:Main", "upload")));
    assert!(!entry.check_permission(&page("main:Main", "delete")));
    assert!(acl.get_entry(&WikiPrincipal::new("bob")).is_none());
}

#[test]
fn test_bad_entry_is_configuration_error() {
    let acl = AccessControlList::new();
    let err = acl.add_entry(grant("", "view")).unwrap_err();
    assert!(err.is_configuration_error());
    assert!(acl.is_empty());
}

#[test]
fn test_bad_permission_is_configuration_error() {
    let err: Error = PagePermission::new("main:Main", "publish")
        .map_err(Error::from)
        .unwrap_err();
    assert!(err.is_configuration_error());
}

#[test]
fn test_display_lists_every_entry() {
    let acl = AccessControlList::new();
    acl.add_entry(grant("alice", "view")).unwrap();
    acl.add_entry(grant("bob", "edit")).unwrap();

    let rendered = acl.to_string();
    assert_eq!(rendered.lines().count(), 2);
    assert!(rendered.contains("user = alice: (PagePermission(\"main:Main\",\"view\"))"));
    assert!(rendered.contains("user = bob: (PagePermission(\"main:Main\",\"edit\"))"));
}
