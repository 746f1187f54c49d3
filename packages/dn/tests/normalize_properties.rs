//! Property tests: idempotence, order independence, case independence

use proptest::prelude::*;
use x509kit_dn::normalize_dn;

/// Distinct ASCII keys with printable values that avoid the DN metacharacters
fn dn_segments() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("[A-Za-z][A-Za-z0-9]{0,7}", "[A-Za-z0-9 .@-]{0,16}", 1..8)
        .prop_map(|map| map.into_iter().collect::<Vec<_>>())
        .prop_filter("keys must stay distinct ignoring case", |pairs| {
            let mut lowered: Vec<String> = pairs.iter().map(|(k, _)| k.to_lowercase()).collect();
            lowered.sort();
            lowered.dedup();
            lowered.len() == pairs.len()
        })
}

fn join(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(",")
}

proptest! {
    #[test]
    fn normalization_is_idempotent(pairs in dn_segments()) {
        let once = normalize_dn(&join(&pairs)).expect("generated DN is well formed");
        let twice = normalize_dn(&once).expect("canonical DN is well formed");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn segment_order_does_not_matter(pairs in dn_segments(), seed in any::<u64>()) {
        let mut shuffled = pairs.clone();
        // Deterministic rotation plus reversal covers many permutations
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        if seed % 2 == 0 {
            shuffled.reverse();
        }

        prop_assert_eq!(
            normalize_dn(&join(&pairs)).expect("generated DN is well formed"),
            normalize_dn(&join(&shuffled)).expect("shuffled DN is well formed")
        );
    }

    #[test]
    fn segment_case_does_not_matter(pairs in dn_segments(), upper in any::<bool>()) {
        let recased: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| {
                if upper {
                    (k.to_uppercase(), v.to_uppercase())
                } else {
                    (k.to_lowercase(), v.to_lowercase())
                }
            })
            .collect();

        prop_assert_eq!(
            normalize_dn(&join(&pairs)).expect("generated DN is well formed"),
            normalize_dn(&join(&recased)).expect("recased DN is well formed")
        );
    }

    #[test]
    fn canonical_form_has_no_uppercase_or_padding(pairs in dn_segments()) {
        let canonical = normalize_dn(&join(&pairs)).expect("generated DN is well formed");
        prop_assert!(!canonical.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert!(!canonical.contains(", "));
        prop_assert_eq!(canonical.trim(), canonical.as_str());
    }
}
