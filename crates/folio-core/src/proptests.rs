//! Property-based tests for the permission model.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::permission::{PageAction, PageActions, PagePermission, Permission};
    use proptest::prelude::*;

    fn actions() -> impl Strategy<Value = PageActions> {
        proptest::sample::subsequence(PageAction::ALL.to_vec(), 1..=PageAction::ALL.len())
            .prop_map(|list| {
                list.into_iter()
                    .fold(PageActions::empty(), |acc, action| acc | action)
            })
    }

    proptest! {
        #[test]
        fn test_implication_closure_is_idempotent(set in actions()) {
            prop_assert_eq!(set.implied().implied(), set.implied());
        }

        #[test]
        fn test_actions_cover_themselves(set in actions()) {
            prop_assert!(set.covers(set));
        }

        #[test]
        fn test_implication_is_reflexive(set in actions(), page in "[A-Z][a-zA-Z]{0,12}") {
            let p = PagePermission::with_actions(&format!("main:{page}"), set).unwrap();
            prop_assert!(p.implies(&p));
        }

        #[test]
        fn test_implication_is_transitive(a in actions(), b in actions(), c in actions()) {
            let pa = PagePermission::with_actions("main:Page", a).unwrap();
            let pb = PagePermission::with_actions("main:Page", b).unwrap();
            let pc = PagePermission::with_actions("main:Page", c).unwrap();
            if pa.implies(&pb) && pb.implies(&pc) {
                prop_assert!(pa.implies(&pc));
            }
        }

        #[test]
        fn test_display_parse_roundtrip(set in actions()) {
            prop_assert_eq!(PageActions::parse(&set.to_string()).unwrap(), set);
        }
    }
}
