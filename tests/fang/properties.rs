//! Property tests for idempotence, non-overlap, text preservation and
//! round-tripping.

use iocfang::fang::resolve::{is_disjoint, resolve};
use iocfang::fang::scan::scan;
use iocfang::{defang, refang, transform, Direction, FangReport};
use proptest::prelude::*;

fn domain() -> impl Strategy<Value = String> {
    ("[a-z]{1,8}(\\.[a-z][a-z0-9\\-]{0,6}[a-z0-9]){0,2}", "(com|net|org|io|example)")
        .prop_map(|(host, tld)| format!("{host}.{tld}"))
}

fn email() -> impl Strategy<Value = String> {
    ("[a-z]{1,6}(\\.[a-z]{1,6})?", domain()).prop_map(|(local, dom)| format!("{local}@{dom}"))
}

fn ipv4() -> impl Strategy<Value = String> {
    any::<[u8; 4]>().prop_map(|o| format!("{}.{}.{}.{}", o[0], o[1], o[2], o[3]))
}

fn url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("http"), Just("https")],
        prop_oneof![domain(), ipv4()],
        "(/[a-z0-9]{1,8}){0,2}",
    )
        .prop_map(|(scheme, host, path)| format!("{scheme}://{host}{path}"))
}

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]{1,10}",
        domain(),
        email(),
        ipv4(),
        url(),
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("\n"), Just(", "), Just("; "), Just("\t")]
}

fn token_stream() -> impl Strategy<Value = String> {
    prop::collection::vec((token(), separator()), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(t, sep)| format!("{t}{sep}"))
            .collect()
    })
}

// Rebuild the output from untouched input gaps plus each edit's output.
fn reassemble(input: &str, report: &FangReport) -> String {
    let mut out = String::new();
    let mut cursor = 0;
    for edit in &report.edits {
        out.push_str(&input[cursor..edit.span.start]);
        out.push_str(edit.output());
        cursor = edit.span.end;
    }
    out.push_str(&input[cursor..]);
    out
}

proptest! {
    #[test]
    fn defang_is_idempotent_on_token_streams(s in token_stream()) {
        let once = defang(&s);
        prop_assert_eq!(defang(&once), once);
    }

    #[test]
    fn refang_inverts_defang_on_token_streams(s in token_stream()) {
        prop_assert_eq!(refang(&defang(&s)), s);
    }

    #[test]
    fn refang_is_idempotent_on_token_streams(s in token_stream()) {
        let once = refang(&defang(&s));
        prop_assert_eq!(refang(&once), once);
    }

    #[test]
    fn resolved_spans_never_overlap(s in "\\PC{0,200}", dir in prop_oneof![Just(Direction::Defang), Just(Direction::Refang)]) {
        let kept = resolve(scan(&s, dir));
        prop_assert!(is_disjoint(&kept));
        for span in &kept {
            prop_assert!(span.start < span.end && span.end <= s.len());
        }
    }

    #[test]
    fn text_outside_spans_is_preserved(s in "\\PC{0,200}") {
        for dir in [Direction::Defang, Direction::Refang] {
            let report = transform(&s, dir);
            prop_assert_eq!(reassemble(&s, &report), report.output);
        }
    }

    #[test]
    fn mixed_noise_preserves_text(s in token_stream(), noise in "[\\[\\]@.:/a-z0-9 ]{0,40}") {
        let text = format!("{noise}{s}{noise}");
        for dir in [Direction::Defang, Direction::Refang] {
            let report = transform(&text, dir);
            prop_assert!(is_disjoint(&report.edits.iter().map(|e| e.span.clone()).collect::<Vec<_>>()));
            prop_assert_eq!(reassemble(&text, &report), report.output);
        }
    }
}
