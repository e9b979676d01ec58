//! Case classification layer: keyword rules, the matcher, and analysis results.

pub mod analysis;
pub mod matcher;
pub mod rules;

pub use analysis::{CaseAnalysis, NO_MATCH_SUMMARY, TRANSITION_NOTE, TransitionRef};
pub use matcher::CaseMatcher;
pub use rules::{KEYWORD_RULES, KeywordRule, SectionRef};
