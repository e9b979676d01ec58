use std::collections::HashSet;

use openjudge_core::{Code, LEGAL_DISCLAIMER, MappingStatus};
use openjudge_matcher::{CaseAnalysis, CaseMatcher, NO_MATCH_SUMMARY, TransitionRef};
use proptest::prelude::*;

fn numbers(result: &CaseAnalysis) -> Vec<&str> {
    result
        .matched_sections
        .iter()
        .map(|s| s.section_number.as_str())
        .collect()
}

fn assert_matches_either(text: &str, old: &str, new: &str) {
    let matcher = CaseMatcher::new();
    let result = matcher.analyze(text);
    let found = numbers(&result);
    assert!(
        found.contains(&old) || found.contains(&new),
        "{text:?} matched {found:?}, expected {old} or {new}"
    );
}

#[test]
fn murder_case() {
    assert_matches_either("The accused killed the victim with a knife.", "302", "103");
}

#[test]
fn single_offence_cases() {
    let cases = [
        ("The accused was caught stealing a mobile phone.", "379", "303"),
        (
            "The husband subjected the wife to domestic violence and cruelty by husband.",
            "498A",
            "85",
        ),
        ("The accused committed rape against the victim.", "376", "64"),
        (
            "The accused committed kidnapping of the child from the school.",
            "363",
            "137",
        ),
        (
            "The accused cheated the victim by running a scam and fraud scheme.",
            "420",
            "318",
        ),
        (
            "A mob attacked the police in rioting and mob violence near the town.",
            "147",
            "191",
        ),
        (
            "The accused sent threatening messages and intimidation to the victim.",
            "506",
            "351",
        ),
        ("The driver caused a hit and run accident death.", "304A", "106"),
        (
            "The woman died due to dowry death within 2 years of marriage.",
            "304B",
            "80",
        ),
    ];
    for (text, old, new) in cases {
        assert_matches_either(text, old, new);
    }
}

#[test]
fn multiple_offences_in_one_case() {
    let matcher = CaseMatcher::new();
    let result = matcher.analyze("The accused committed theft and assault resulting in grievous hurt.");
    assert!(result.matched_sections.len() > 2);
    assert_eq!(
        result.matched_categories,
        ["theft", "causing hurt", "grievous hurt"]
    );
}

#[test]
fn dwelling_theft_summary() {
    let matcher = CaseMatcher::new();
    let desc = "The accused committed theft in the dwelling house.";
    let result = matcher.analyze(desc);

    assert_eq!(result.input_text, desc);
    assert_eq!(result.matched_categories, ["theft", "dwelling theft"]);
    assert_eq!(numbers(&result), ["379", "303", "380", "305"]);
    assert!(result.summary.starts_with(
        "The case potentially involves the following offences: theft, dwelling theft. \
         Relevant IPC sections: 379, 380. Corresponding BNS 2023 sections: 303, 305. "
    ));
    assert!(result.summary.contains("1 July 2024"));
}

#[test]
fn transitions_for_theft_and_robbery() {
    let matcher = CaseMatcher::new();
    let result = matcher.analyze("The accused committed theft and robbery.");
    assert_eq!(
        result.transition_mappings,
        [
            TransitionRef {
                old: "IPC 379".into(),
                new: "BNS 303".into(),
                status: MappingStatus::Replaced,
            },
            TransitionRef {
                old: "IPC 392".into(),
                new: "BNS 309".into(),
                status: MappingStatus::Replaced,
            },
        ]
    );
}

#[test]
fn amended_transition_reported() {
    let matcher = CaseMatcher::new();
    let result = matcher.analyze("Negligence death on the highway.");
    assert!(
        result
            .transition_mappings
            .iter()
            .any(|t| t.old == "IPC 304A" && t.status == MappingStatus::Amended)
    );
}

#[test]
fn summary_mentions_bns_transition() {
    let matcher = CaseMatcher::new();
    let result = matcher.analyze("The accused was involved in murder of the victim.");
    assert!(result.summary.contains("BNS") || result.summary.contains("Bharatiya"));
}

#[test]
fn unknown_case_returns_guidance() {
    let matcher = CaseMatcher::new();
    let result = matcher.analyze("This is a very unusual contract dispute.");
    assert!(result.matched_sections.is_empty());
    assert!(result.matched_categories.is_empty());
    assert!(result.transition_mappings.is_empty());
    assert_eq!(result.summary, NO_MATCH_SUMMARY);
    assert!(result.summary.contains("qualified"));
    assert_eq!(result.disclaimer, LEGAL_DISCLAIMER);
}

#[test]
fn empty_and_whitespace_input() {
    let matcher = CaseMatcher::new();
    for text in ["", "   ", "\n\t"] {
        let result = matcher.analyze(text);
        assert_eq!(result.input_text, text);
        assert!(!result.has_matches());
        assert_eq!(result.disclaimer, LEGAL_DISCLAIMER);
    }
}

#[test]
fn case_insensitive() {
    let matcher = CaseMatcher::new();
    let lower = matcher.analyze("theft occurred at the shop.");
    let upper = matcher.analyze("THEFT OCCURRED AT THE SHOP.");
    assert!(lower.has_matches());
    assert_eq!(lower.matched_sections, upper.matched_sections);
    assert_eq!(upper.input_text, "THEFT OCCURRED AT THE SHOP.");
}

#[test]
fn keyword_inside_longer_word_still_matches() {
    let matcher = CaseMatcher::new();
    let result = matcher.analyze("She spilled grape juice.");
    assert_eq!(result.matched_categories, ["rape"]);
}

#[test]
fn no_duplicate_sections() {
    let matcher = CaseMatcher::new();
    let result = matcher.analyze("The accused committed murder, theft, robbery and dacoity.");
    let ids: HashSet<_> = result.matched_sections.iter().map(|s| s.id()).collect();
    assert_eq!(ids.len(), result.matched_sections.len());
}

#[test]
fn disclaimer_in_all_analyses() {
    let matcher = CaseMatcher::new();
    for case in [
        "The accused committed murder.",
        "Theft occurred at the shop.",
        "Domestic cruelty by husband.",
        "An unrelated contractual matter.",
    ] {
        assert_eq!(matcher.analyze(case).disclaimer, LEGAL_DISCLAIMER, "{case}");
    }
}

#[test]
fn charging_sections_for_pre_transition_offence() {
    let matcher = CaseMatcher::new();
    let result = matcher.analyze("The accused killed the victim.");
    let date = chrono::NaiveDate::from_ymd_opt(2023, 11, 2).unwrap();
    let charged: Vec<String> = result
        .charging_sections(date)
        .iter()
        .map(|s| s.citation())
        .collect();
    assert_eq!(charged, ["IPC 302"]);
    assert_eq!(result.sections_of(Code::Bns).count(), 1);
}

#[test]
fn analysis_json_keeps_unknown_bail_and_disclaimer() {
    let matcher = CaseMatcher::new();
    let result = matcher.analyze("A criminal conspiracy was hatched.");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["disclaimer"], LEGAL_DISCLAIMER);
    let sections = json["matched_sections"].as_array().unwrap();
    assert_eq!(sections[0]["section_number"], "120B");
    assert!(sections[0]["bailable"].is_null());
    assert_eq!(json["transition_mappings"][0]["status"], "replaced");

    let parsed: CaseAnalysis = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, result);
}

proptest! {
    #[test]
    fn analyze_is_total(text in ".{0,200}") {
        let matcher = CaseMatcher::new();
        let result = matcher.analyze(&text);
        prop_assert_eq!(&result.input_text, &text);
        prop_assert_eq!(result.disclaimer.as_str(), LEGAL_DISCLAIMER);
        prop_assert!(!result.summary.is_empty());
    }

    #[test]
    fn matched_sections_unique(words in prop::collection::vec(
        prop::sample::select(vec![
            "murder", "theft", "stolen", "robbery", "dacoity", "hurt",
            "grievous hurt", "assault", "dowry death", "fraud", "the", "and",
        ]),
        0..12,
    )) {
        let matcher = CaseMatcher::new();
        let result = matcher.analyze(&words.join(" "));
        let ids: HashSet<_> = result.matched_sections.iter().map(|s| s.id()).collect();
        prop_assert_eq!(ids.len(), result.matched_sections.len());
        let pairs: HashSet<_> = result.transition_mappings.iter().collect();
        prop_assert_eq!(pairs.len(), result.transition_mappings.len());
    }

    #[test]
    fn ascii_case_does_not_matter(text in "[a-zA-Z ,.]{0,120}") {
        let matcher = CaseMatcher::new();
        let lower = matcher.analyze(&text.to_ascii_lowercase());
        let upper = matcher.analyze(&text.to_ascii_uppercase());
        prop_assert_eq!(lower.matched_sections, upper.matched_sections);
        prop_assert_eq!(lower.matched_categories, upper.matched_categories);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn long_random_text(chars in prop::collection::vec(any::<char>(), 10_000)) {
        let text: String = chars.into_iter().collect();
        let matcher = CaseMatcher::new();
        let result = matcher.analyze(&text);
        prop_assert_eq!(result.disclaimer.as_str(), LEGAL_DISCLAIMER);
        prop_assert_eq!(result.input_text.chars().count(), 10_000);
    }
}
