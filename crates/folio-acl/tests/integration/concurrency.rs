//! Many threads sharing one list.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use folio_acl::{AccessControlList, AclConfig, Error};
use rand::seq::SliceRandom;

use crate::common::{grant, page};

const THREADS: usize = 16;
const ROUNDS: usize = 25;

fn assert_unique_names(acl: &AccessControlList) {
    let names: Vec<String> = acl.entries().map(|e| e.name().to_string()).collect();
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len(), "duplicate entries in {names:?}");
}

#[test]
fn test_concurrent_unique_adds_all_land() {
    for _ in 0..ROUNDS {
        let acl = Arc::new(AccessControlList::new());
        let barrier = Arc::new(Barrier::new(THREADS));

        let mut names: Vec<String> = (0..THREADS).map(|i| format!("user-{i}")).collect();
        names.shuffle(&mut rand::thread_rng());

        let handles: Vec<_> = names
            .into_iter()
            .map(|name| {
                let acl = Arc::clone(&acl);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    acl.add_entry(grant(&name, "view")).unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(acl.len(), THREADS);
        assert_unique_names(&acl);
    }
}

#[test]
fn test_concurrent_same_name_adds_exactly_one_wins() {
    for _ in 0..ROUNDS {
        let acl = Arc::new(AccessControlList::new());
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let acl = Arc::clone(&acl);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    acl.add_entry(grant("alice", "view")).unwrap()
                })
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|added| *added)
            .count();

        assert_eq!(wins, 1);
        assert_eq!(acl.len(), 1);
        assert!(acl.get_entry_by_name("alice").is_some());
    }
}

#[test]
fn test_readers_never_see_duplicates_during_churn() {
    let acl = Arc::new(AccessControlList::new());
    let stop = Arc::new(AtomicUsize::new(0));

    let writers: Vec<_> = (0..4)
        .map(|w| {
            let acl = Arc::clone(&acl);
            thread::spawn(move || {
                for i in 0..200 {
                    let name = format!("user-{}", (i + w) % 8);
                    let entry = grant(&name, "edit");
                    if !acl.add_entry(entry.clone()).unwrap() {
                        acl.remove_entry(&entry).unwrap();
                    }
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let acl = Arc::clone(&acl);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let request = page("main:Main", "view");
                while stop.load(Ordering::Acquire) == 0 {
                    let found = acl.find_principals(&request);
                    let unique: HashSet<String> =
                        found.iter().map(|p| p.name().to_string()).collect();
                    assert_eq!(unique.len(), found.len());
                    assert!(acl.snapshot().len() <= 8);
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }
    stop.store(1, Ordering::Release);
    for reader in readers {
        reader.join().unwrap();
    }

    assert_unique_names(&acl);
}

#[test]
fn test_with_lock_composes_atomically() {
    let acl = Arc::new(AccessControlList::new());
    acl.add_entry(grant("counter-0", "view")).unwrap();

    // Each thread swaps counter-N for counter-N+1 under the lock; with
    // atomic composition no swap is lost and exactly one entry remains.
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let acl = Arc::clone(&acl);
            thread::spawn(move || {
                acl.with_lock(|acl| {
                    let current = acl.snapshot();
                    let entry = current.first().unwrap();
                    let n: usize = entry.name().trim_start_matches("counter-").parse().unwrap();
                    assert!(acl.remove_entry(entry).unwrap());
                    assert!(acl.add_entry(grant(&format!("counter-{}", n + 1), "view")).unwrap());
                })
                .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(acl.len(), 1);
    assert!(acl.get_entry_by_name(&format!("counter-{THREADS}")).is_some());
}

#[test]
fn test_timed_lock_gives_up_without_mutating() {
    let config = AclConfig::with_lock_timeout(Duration::from_millis(20));
    let acl = Arc::new(AccessControlList::with_config(&config));

    let (locked_tx, locked_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();

    let holder = {
        let acl = Arc::clone(&acl);
        thread::spawn(move || {
            acl.with_lock(|_| {
                locked_tx.send(()).unwrap();
                release_rx.recv().unwrap();
            })
            .unwrap();
        })
    };

    locked_rx.recv().unwrap();
    let err = acl.add_entry(grant("alice", "view")).unwrap_err();
    assert!(matches!(err, Error::LockTimeout { waited_ms: 20 }));
    assert!(!err.is_configuration_error());
    assert!(acl.is_empty());

    // Readers are not blocked by a held mutation lock
    assert!(acl.find_principals(&page("main:Main", "view")).is_empty());

    release_tx.send(()).unwrap();
    holder.join().unwrap();

    assert!(acl.add_entry(grant("alice", "view")).unwrap());
}
