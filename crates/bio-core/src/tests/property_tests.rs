use crate::{Identity, resolve};

use std::collections::HashSet;

use proptest::prelude::*;

proptest! {
    #[test]
    fn given_two_distinct_handles_when_resolved_then_key_sets_share_no_key(
        a in "[a-zA-Z0-9:_ -]{1,24}",
        b in "[a-zA-Z0-9:_ -]{1,24}",
    ) {
        let a = Identity::named(a).unwrap();
        let b = Identity::named(b).unwrap();
        prop_assume!(a != b);

        let keys_a: HashSet<String> = resolve(&a).iter().map(|(_, k)| k.to_string()).collect();
        let keys_b: HashSet<String> = resolve(&b).iter().map(|(_, k)| k.to_string()).collect();

        prop_assert!(keys_a.is_disjoint(&keys_b));
    }

    #[test]
    fn given_any_identity_when_resolved_then_five_distinct_keys(handle in "[a-zA-Z0-9:]{1,24}") {
        let identity = Identity::named(handle).unwrap();

        let keys: HashSet<String> = resolve(&identity).iter().map(|(_, k)| k.to_string()).collect();

        prop_assert_eq!(keys.len(), 5);
    }

    #[test]
    fn given_named_identity_when_resolved_then_never_collides_with_legacy(handle in "[a-zA-Z0-9]{1,24}") {
        let identity = Identity::named(handle).unwrap();
        prop_assume!(!identity.is_sentinel());
        let legacy: HashSet<String> = resolve(&Identity::Sentinel).iter().map(|(_, k)| k.to_string()).collect();

        for (_, key) in resolve(&identity).iter() {
            prop_assert!(!legacy.contains(key));
        }
    }
}
