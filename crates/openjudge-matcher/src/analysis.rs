//! Structured result of a case analysis.

use chrono::NaiveDate;
use openjudge_core::{Code, MappingStatus, StatuteMapping, StatuteSection, governing_code};
use serde::{Deserialize, Serialize};

/// Summary used when no keyword rule matched.
pub const NO_MATCH_SUMMARY: &str = "No specific IPC/BNS sections could be matched to the \
case description. The case may involve civil law, special statutes, or requires more detail. \
Consult a qualified advocate for proper legal analysis.";

/// Closing note on every non-empty summary.
pub const TRANSITION_NOTE: &str = "Note: The Bharatiya Nyaya Sanhita (BNS) 2023 replaced the \
IPC from 1 July 2024. New cases are charged under BNS; old cases under IPC.";

/// One old → new transition relevant to an analysis, e.g. `IPC 302 → BNS 103`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionRef {
    pub old: String,
    pub new: String,
    pub status: MappingStatus,
}

impl From<&StatuteMapping> for TransitionRef {
    fn from(m: &StatuteMapping) -> Self {
        Self {
            old: m.old_citation(),
            new: m.new_citation(),
            status: m.status,
        }
    }
}

/// Analysis of one case description. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseAnalysis {
    /// The text as given, not normalised.
    pub input_text: String,
    /// First-matched first, unique by `(code, section_number)`.
    pub matched_sections: Vec<StatuteSection>,
    /// Offence categories in rule order.
    pub matched_categories: Vec<String>,
    pub transition_mappings: Vec<TransitionRef>,
    pub summary: String,
    pub disclaimer: String,
}

impl CaseAnalysis {
    pub fn has_matches(&self) -> bool {
        !self.matched_sections.is_empty()
    }

    /// Matched sections of one code, in match order.
    pub fn sections_of(&self, code: Code) -> impl Iterator<Item = &StatuteSection> {
        self.matched_sections.iter().filter(move |s| s.code == code)
    }

    /// Matched sections of the code that governs an offence on `offence_date`.
    ///
    /// For a 2023 offence this keeps the IPC sections and drops their BNS
    /// counterparts; from 1 July 2024 it is the other way round.
    pub fn charging_sections(&self, offence_date: NaiveDate) -> Vec<&StatuteSection> {
        self.matched_sections
            .iter()
            .filter(|s| governing_code(s.code, offence_date) == s.code)
            .collect()
    }
}

/// Build the narrative summary.
///
/// Categories first, then section numbers grouped by code: superseded codes,
/// then their successors, then any other code.
pub(crate) fn build_summary(categories: &[String], sections: &[StatuteSection]) -> String {
    if sections.is_empty() {
        return NO_MATCH_SUMMARY.to_string();
    }

    let mut summary = format!(
        "The case potentially involves the following offences: {}. ",
        categories.join(", ")
    );

    let (old, rest): (Vec<Code>, Vec<Code>) =
        Code::ALL.into_iter().partition(Code::is_superseded);
    let (new, other): (Vec<Code>, Vec<Code>) =
        rest.into_iter().partition(|c| c.predecessor().is_some());

    let groups = old
        .iter()
        .map(|c| (*c, "Relevant"))
        .chain(new.iter().map(|c| (*c, "Corresponding")))
        .chain(other.iter().map(|c| (*c, "Related")));

    for (code, lead) in groups {
        let numbers: Vec<&str> = sections
            .iter()
            .filter(|s| s.code == code)
            .map(|s| s.section_number.as_str())
            .collect();
        if !numbers.is_empty() {
            summary.push_str(&format!(
                "{lead} {} sections: {}. ",
                code.citation(),
                numbers.join(", ")
            ));
        }
    }

    summary.push_str(TRANSITION_NOTE);
    summary
}
