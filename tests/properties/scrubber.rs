//! Property tests for the line scrubber.

use proptest::prelude::*;

use logscrub::{scrub, Scrubber};

/// A line of ordinary code: no marker glyphs, never a tagged call
fn code_line() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[A-Za-z0-9 _=.+*;,:'\"(){}\\[\\]]{0,40}").unwrap(),
        Just("console.error('❌ failed', err);".to_string()),
        Just("console.info('🔍 info is not stripped');".to_string()),
        Just("console.log('untagged', value);".to_string()),
        Just("".to_string()),
    ]
}

/// A removable diagnostic statement, as its physical lines
fn diagnostic_statement() -> impl Strategy<Value = Vec<String>> {
    let marker = prop_oneof![Just("🔍"), Just("📝"), Just("✅"), Just("🚀"), Just("⚠️")];
    let method = prop_oneof![Just("log"), Just("warn")];
    let word = proptest::string::string_regex("[a-z]{1,10}").unwrap();
    let fields = proptest::collection::vec(
        proptest::string::string_regex("  [a-z]{1,8}: [0-9]{1,4},").unwrap(),
        0..4,
    );

    (method, marker, word, fields, any::<bool>()).prop_map(
        |(method, marker, word, fields, multi)| {
            if multi {
                let mut lines = vec![format!("console.{}('{} {}', {{", method, marker, word)];
                lines.extend(fields);
                lines.push("});".to_string());
                lines
            } else {
                vec![format!("console.{}('{} {}', x);", method, marker, word)]
            }
        },
    )
}

#[derive(Debug, Clone)]
enum Block {
    Code(String),
    Diagnostic(Vec<String>),
}

fn block() -> impl Strategy<Value = Block> {
    prop_oneof![
        3 => code_line().prop_map(Block::Code),
        1 => diagnostic_statement().prop_map(Block::Diagnostic),
    ]
}

/// Arbitrary text built from fragments the scrubber cares about
fn noisy_text() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("console.log(".to_string()),
        Just("console.warn(".to_string()),
        Just("console.error(".to_string()),
        Just("🔍".to_string()),
        Just("\u{fe0f}".to_string()),
        Just(");".to_string()),
        Just(";".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just("\n".to_string()),
        Just("\r\n".to_string()),
        proptest::string::string_regex("[a-z ]{0,6}").unwrap(),
    ];
    proptest::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat())
}

fn is_subsequence(needle: &[&str], haystack: &[&str]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A second pass over scrubbed text is a no-op.
    #[test]
    fn property_scrub_is_idempotent(text in noisy_text()) {
        let once = scrub(&text);
        prop_assert_eq!(scrub(&once), once);
    }

    /// PROPERTY: Output lines are input lines, unedited, in input order.
    #[test]
    fn property_kept_lines_are_an_ordered_subset(text in noisy_text()) {
        let out = scrub(&text);
        if !out.is_empty() {
            let input: Vec<&str> = text.split('\n').collect();
            let output: Vec<&str> = out.split('\n').collect();
            prop_assert!(is_subsequence(&output, &input));
        }
    }

    /// PROPERTY: N lines with M diagnostic lines scrub to exactly the N - M others.
    #[test]
    fn property_mixed_content_drops_exactly_diagnostic_lines(
        blocks in proptest::collection::vec(block(), 0..30),
    ) {
        let mut all = Vec::new();
        let mut others = Vec::new();
        let mut diagnostic_lines = 0;
        for b in &blocks {
            match b {
                Block::Code(line) => {
                    all.push(line.clone());
                    others.push(line.clone());
                }
                Block::Diagnostic(lines) => {
                    diagnostic_lines += lines.len();
                    all.extend(lines.iter().cloned());
                }
            }
        }

        let scrubbed = Scrubber::default().scrub(&all.join("\n"));

        prop_assert_eq!(&scrubbed.content, &others.join("\n"));
        prop_assert_eq!(scrubbed.stats.lines_removed, diagnostic_lines);
        // An empty join still splits into one (empty) line.
        prop_assert_eq!(scrubbed.stats.lines_total, all.len().max(1));
        prop_assert!(!scrubbed.stats.unterminated);
    }

    /// PROPERTY: Lines made only of `console.error` calls survive any markers.
    #[test]
    fn property_error_calls_are_untouched(
        messages in proptest::collection::vec(proptest::string::string_regex("[a-z 🔍📝✅❌🚀]{0,12}").unwrap(), 1..10),
    ) {
        let text = messages
            .iter()
            .map(|m| format!("console.error('{}', err);", m))
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(scrub(&text), text);
    }
}
