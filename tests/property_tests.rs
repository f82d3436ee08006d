//! Property-based tests for license derivation and menu prompts.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use std::io::Cursor;

use proptest::prelude::*;

use cc_advisor::core::license::{derive_license, slug, LICENSE_BASE_URL};
use cc_advisor::core::types::{AdaptationChoice, CommercialChoice, MenuChoice};
use cc_advisor::ui::prompts::{normalize, Console, Menu};

fn adaptation() -> impl Strategy<Value = AdaptationChoice> {
    prop::sample::select(AdaptationChoice::ALL.to_vec())
}

fn commercial() -> impl Strategy<Value = CommercialChoice> {
    prop::sample::select(CommercialChoice::ALL.to_vec())
}

proptest! {
    /// Every derived license keeps the BY → NC → {SA|ND} layout.
    #[test]
    fn code_layout(a in adaptation(), c in commercial()) {
        let license = derive_license(a, c);
        prop_assert!(license.code.starts_with("CC BY"));

        let tokens: Vec<&str> = license.code["CC BY".len()..]
            .split('-')
            .filter(|t| !t.is_empty())
            .collect();
        let expected: Vec<&str> = [
            (c == CommercialChoice::Disallow).then_some("NC"),
            (a == AdaptationChoice::AllowShareAlike).then_some("SA"),
            (a == AdaptationChoice::Disallow).then_some("ND"),
        ]
        .into_iter()
        .flatten()
        .collect();
        prop_assert_eq!(tokens, expected);
    }

    /// Name and URL are always derived from the code the same way.
    #[test]
    fn name_and_url_follow_code(a in adaptation(), c in commercial()) {
        let license = derive_license(a, c);
        prop_assert_eq!(&license.display_name, &format!("{} 4.0", license.code));
        prop_assert_eq!(
            &license.url,
            &format!("{}{}/4.0/", LICENSE_BASE_URL, slug(&license.code))
        );
        prop_assert!(!license.url.contains(' '));
    }

    /// Derivation is a pure function of its inputs.
    #[test]
    fn derivation_is_idempotent(a in adaptation(), c in commercial()) {
        prop_assert_eq!(derive_license(a, c), derive_license(a, c));
    }

    /// A line whose normalized key is not offered is always rejected.
    #[test]
    fn unlisted_answers_are_rejected(raw in "[^\r\n]{0,12}") {
        prop_assume!(!matches!(normalize(&raw), Some('e') | Some('h')));

        let menu = Menu::new("Devam?", [('e', "Evet"), ('h', "Hayır")]);
        let input = format!("{}\nh\n", raw);
        let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new());

        prop_assert_eq!(console.choose_key(&menu).unwrap(), 'h');
        let (_, out) = console.into_inner();
        let out = String::from_utf8(out).unwrap();
        prop_assert_eq!(out.matches("Hatalı seçim.").count(), 1);
    }
}
