//! Property-based tests for canonical input rules
//!
//! Uses proptest to verify the mutual-exclusion invariant over arbitrary
//! mutator sequences.

use droplink_core::{CanonicalInput, FilePayload, InputState};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate URL-field text: empty, whitespace, plausible URLs, and junk
fn url_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        1 => Just("   ".to_string()),
        3 => prop::string::string_regex("https?://[a-z]{1,10}\\.[a-z]{2,3}(/[a-z0-9]{0,6}){0,2}")
            .expect("valid regex"),
        2 => prop::string::string_regex("[ -~]{1,40}").expect("valid regex"),
    ]
}

/// Generate small files with a believable name and extension
fn file_strategy() -> impl Strategy<Value = FilePayload> {
    (
        prop::string::string_regex("[a-z]{1,10}").expect("valid regex"),
        prop_oneof![Just("png"), Just("jpg"), Just("pdf"), Just("txt")],
        prop::collection::vec(any::<u8>(), 0..64),
    )
        .prop_map(|(stem, ext, bytes)| {
            FilePayload::from_browser(format!("{}.{}", stem, ext), None, bytes)
        })
}

/// Operations a user can drive through the two mutators
#[derive(Debug, Clone)]
enum InputOp {
    TypeUrl(String),
    TakeFile(FilePayload),
    DropFile,
}

fn input_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<InputOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => url_text_strategy().prop_map(InputOp::TypeUrl),
            3 => file_strategy().prop_map(InputOp::TakeFile),
            1 => Just(InputOp::DropFile),
        ],
        0..max_ops,
    )
}

fn apply(input: &mut InputState, op: InputOp) {
    match op {
        InputOp::TypeUrl(text) => input.set_url_text(text),
        InputOp::TakeFile(file) => input.set_file(Some(file)),
        InputOp::DropFile => input.set_file(None),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A non-empty URL and a file never coexist, at any point in any
    /// mutator sequence
    #[test]
    fn mutual_exclusion_holds(ops in input_ops_strategy(24)) {
        let mut input = InputState::new();
        for op in ops {
            apply(&mut input, op);
            let has_url = !input.url_text().trim().is_empty();
            let has_file = input.file().is_some();
            prop_assert!(
                !(has_url && has_file),
                "both set after a mutator call: url={:?}", input.url_text()
            );
        }
    }

    /// The canonical view always agrees with the underlying fields
    #[test]
    fn canonical_view_matches_fields(ops in input_ops_strategy(24)) {
        let mut input = InputState::new();
        for op in ops {
            apply(&mut input, op);
            match input.canonical() {
                CanonicalInput::File(_) => prop_assert!(input.file().is_some()),
                CanonicalInput::Url(text) => {
                    prop_assert!(input.file().is_none());
                    prop_assert_eq!(text, input.url_text());
                    prop_assert!(!text.is_empty());
                }
                CanonicalInput::Empty => {
                    prop_assert!(input.file().is_none());
                    prop_assert!(input.url_text().is_empty());
                }
            }
        }
    }

    /// The most recent ingestion wins regardless of prior history: a file
    /// set last is canonical, non-empty text set last is canonical
    #[test]
    fn last_ingestion_wins(ops in input_ops_strategy(16), file in file_strategy()) {
        let mut input = InputState::new();
        for op in ops {
            apply(&mut input, op);
        }

        let mut with_file = input.clone();
        with_file.set_file(Some(file.clone()));
        prop_assert_eq!(with_file.canonical(), CanonicalInput::File(&file));
        prop_assert_eq!(with_file.url_text(), "");

        let mut with_url = input;
        with_url.set_url_text("https://last.example");
        prop_assert_eq!(with_url.canonical(), CanonicalInput::Url("https://last.example"));
        prop_assert!(with_url.file().is_none());
    }
}
