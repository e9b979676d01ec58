//! Keyword matching of case descriptions against the statute tables.
//!
//! Every rule is evaluated against the lower-cased text. Matching rules
//! contribute their category, their sections (resolved through the
//! [`StatuteDatabase`]), and the transitions of their old-code sections.

use std::collections::HashSet;

use openjudge_core::{Code, LEGAL_DISCLAIMER, StatuteDatabase, StatuteSection};
use tracing::{debug, info, trace, warn};

use crate::analysis::{CaseAnalysis, TransitionRef, build_summary};
use crate::rules::{KEYWORD_RULES, KeywordRule};

/// Classifies free text against an ordered keyword table.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
pub struct CaseMatcher {
    db: StatuteDatabase,
    rules: Vec<KeywordRule>,
}

impl CaseMatcher {
    /// Matcher over the compiled-in database and keyword table.
    pub fn new() -> Self {
        Self::with_rules(StatuteDatabase::new(), KEYWORD_RULES.to_vec())
    }

    pub fn with_database(db: StatuteDatabase) -> Self {
        Self::with_rules(db, KEYWORD_RULES.to_vec())
    }

    pub fn with_rules(db: StatuteDatabase, rules: Vec<KeywordRule>) -> Self {
        Self { db, rules }
    }

    pub fn database(&self) -> &StatuteDatabase {
        &self.db
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Analyse a case description.
    ///
    /// Total: any input, including empty or very long text, yields a
    /// well-formed [`CaseAnalysis`] carrying the disclaimer.
    pub fn analyze(&self, text: &str) -> CaseAnalysis {
        let normalized = text.to_lowercase();

        let mut categories: Vec<String> = Vec::new();
        let mut sections: Vec<StatuteSection> = Vec::new();
        let mut seen: HashSet<(Code, &str)> = HashSet::new();
        let mut transitions: Vec<TransitionRef> = Vec::new();

        for rule in &self.rules {
            let Some(keyword) = rule.first_hit(&normalized) else {
                continue;
            };
            debug!(category = rule.category, keyword, "keyword rule matched");

            if !categories.iter().any(|c| c == rule.category) {
                categories.push(rule.category.to_string());
            }

            for r in rule.sections {
                let Some(section) = self.db.lookup_section(r.code, r.number) else {
                    warn!(code = %r.code, section = r.number, "rule references unknown section");
                    continue;
                };
                if seen.insert(section.id()) {
                    sections.push(section.clone());
                } else {
                    trace!(code = %r.code, section = r.number, "section already matched");
                }
            }

            for r in rule.sections.iter().filter(|r| r.code.is_superseded()) {
                if let Some(mapping) = self.db.lookup_transition_from(r.code, r.number) {
                    let t = TransitionRef::from(mapping);
                    if !transitions.contains(&t) {
                        transitions.push(t);
                    }
                }
            }
        }

        info!(
            text_len = text.len(),
            categories = categories.len(),
            sections = sections.len(),
            transitions = transitions.len(),
            "case analysed"
        );

        let summary = build_summary(&categories, &sections);
        CaseAnalysis {
            input_text: text.to_string(),
            matched_sections: sections,
            matched_categories: categories,
            transition_mappings: transitions,
            summary,
            disclaimer: LEGAL_DISCLAIMER.to_string(),
        }
    }
}

impl Default for CaseMatcher {
    fn default() -> Self {
        Self::new()
    }
}
