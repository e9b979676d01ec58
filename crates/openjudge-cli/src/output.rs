//! JSON shapes written by `--output json`.
//!
//! Anything that carries a section or an analysis also carries the disclaimer.

use chrono::NaiveDate;
use openjudge_core::{
    Code, DatabaseSummary, LEGAL_DISCLAIMER, StatuteMapping, StatuteSection, governing_code,
};
use openjudge_matcher::CaseAnalysis;
use serde::Serialize;

#[derive(Serialize)]
pub struct LookupOutput<'a> {
    pub code: Code,
    pub section_number: &'a str,
    pub section: Option<&'a StatuteSection>,
    pub disclaimer: &'static str,
}

impl<'a> LookupOutput<'a> {
    pub fn new(code: Code, section_number: &'a str, section: Option<&'a StatuteSection>) -> Self {
        Self {
            code,
            section_number: section_number.trim(),
            section,
            disclaimer: LEGAL_DISCLAIMER,
        }
    }
}

#[derive(Serialize)]
pub struct SectionsOutput<'a> {
    pub code: Code,
    pub sections: &'a [&'a StatuteSection],
    pub disclaimer: &'static str,
}

impl<'a> SectionsOutput<'a> {
    pub fn new(code: Code, sections: &'a [&'a StatuteSection]) -> Self {
        Self {
            code,
            sections,
            disclaimer: LEGAL_DISCLAIMER,
        }
    }
}

#[derive(Serialize)]
pub struct MapRow<'a> {
    pub section: &'a str,
    pub mapping: Option<&'a StatuteMapping>,
}

#[derive(Serialize)]
pub struct Charging {
    pub offence_date: String,
    pub code: Code,
    pub sections: Vec<String>,
}

impl Charging {
    pub fn new(analysis: &CaseAnalysis, date: NaiveDate) -> Self {
        Self {
            offence_date: date.to_string(),
            code: governing_code(Code::Ipc, date),
            sections: analysis
                .charging_sections(date)
                .iter()
                .map(|s| s.citation())
                .collect(),
        }
    }
}

/// `CaseAnalysis` already carries its own disclaimer.
#[derive(Serialize)]
pub struct AnalyzeOutput<'a> {
    #[serde(flatten)]
    pub analysis: &'a CaseAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charging: Option<Charging>,
}

#[derive(Serialize)]
pub struct CheckOutput<'a> {
    #[serde(flatten)]
    pub summary: &'a DatabaseSummary,
    pub dangling_mappings: &'a [&'a StatuteMapping],
}
