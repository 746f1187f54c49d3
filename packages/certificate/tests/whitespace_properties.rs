//! Property tests: whitespace placement never changes the extracted fields

use proptest::prelude::*;
use x509kit_certificate::{ParsedCertificate, parse_certificate};

const EXAMPLE_COM_B64: &str = include_str!("fixtures/example_com.b64");

fn compact_fixture() -> String {
    EXAMPLE_COM_B64.split_whitespace().collect()
}

fn reference() -> ParsedCertificate {
    parse_certificate(EXAMPLE_COM_B64).expect("fixture certificate should parse")
}

/// Insertion points (as fractions of the length) paired with a whitespace run
fn insertions() -> impl Strategy<Value = Vec<(f64, String)>> {
    prop::collection::vec((0.0..=1.0f64, "[ \t\r\n]{1,4}"), 0..48)
}

fn insert_whitespace(compact: &str, insertions: &[(f64, String)]) -> String {
    let mut positions: Vec<(usize, &str)> = insertions
        .iter()
        .map(|(at, ws)| ((at * compact.len() as f64) as usize, ws.as_str()))
        .collect();
    positions.sort_by_key(|(at, _)| *at);

    let mut out = String::with_capacity(compact.len() + positions.len() * 4);
    let mut cursor = 0;
    for (at, ws) in positions {
        let at = at.min(compact.len());
        out.push_str(&compact[cursor..at]);
        out.push_str(ws);
        cursor = at;
    }
    out.push_str(&compact[cursor..]);
    out
}

proptest! {
    #[test]
    fn whitespace_anywhere_parses_to_same_certificate(spots in insertions()) {
        let compact = compact_fixture();
        let spaced = insert_whitespace(&compact, &spots);

        let cert = parse_certificate(&spaced).expect("whitespace must be ignored");
        prop_assert_eq!(cert, reference());
    }

    #[test]
    fn rewrapping_at_any_width_parses_to_same_certificate(width in 1usize..200) {
        let compact = compact_fixture();
        let wrapped = compact
            .as_bytes()
            .chunks(width)
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect::<Vec<_>>()
            .join("\r\n");

        let cert = parse_certificate(&wrapped).expect("any line width must parse");
        prop_assert_eq!(cert, reference());
    }
}
