//! In-memory statute database with keyed section and transition lookups.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::section_key::normalize_section;
use crate::statute::{Code, MappingStatus, StatuteMapping, StatuteSection};
use crate::tables::{BNS_SECTIONS, IPC_SECTIONS, IPC_TO_BNS, MappingRecord, SectionRecord};

/// Old code assumed by [`StatuteDatabase::lookup_transition`].
pub const DEFAULT_OLD_CODE: Code = Code::Ipc;

/// Sections of one code, in table order, with a number → position index.
#[derive(Default)]
struct CodeTable {
    sections: Vec<StatuteSection>,
    index: HashMap<String, usize>,
}

impl CodeTable {
    fn insert(&mut self, section: StatuteSection) {
        match self.index.get(&section.section_number) {
            Some(&pos) => self.sections[pos] = section,
            None => {
                self.index
                    .insert(section.section_number.clone(), self.sections.len());
                self.sections.push(section);
            }
        }
    }

    fn get(&self, number: &str) -> Option<&StatuteSection> {
        self.index.get(number).map(|&pos| &self.sections[pos])
    }
}

/// Read-only statute tables built once at startup.
///
/// Lookups trim surrounding whitespace from the section number and are
/// otherwise exact and case-sensitive ("498a" does not find "498A"). Absent
/// keys return `None`.
pub struct StatuteDatabase {
    tables: HashMap<Code, CodeTable>,
    mappings: Vec<StatuteMapping>,
    /// old_code → old_section → position in `mappings`
    transitions: HashMap<Code, HashMap<String, usize>>,
}

/// Summary statistics for a StatuteDatabase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSummary {
    /// Section count per code, for codes that have a table.
    pub sections: Vec<(Code, usize)>,
    pub mappings: usize,
    pub replaced: usize,
    pub amended: usize,
    pub repealed: usize,
    /// Sections of superseded codes with no recorded transition.
    pub unmapped: usize,
    pub dangling: usize,
}

impl StatuteDatabase {
    /// Build the database from the compiled-in IPC, BNS and IPC → BNS tables.
    pub fn new() -> Self {
        let sections = IPC_SECTIONS
            .iter()
            .chain(BNS_SECTIONS)
            .map(SectionRecord::to_section);
        let mappings = IPC_TO_BNS.iter().map(MappingRecord::to_mapping);
        Self::from_parts(sections, mappings)
    }

    /// Build a database from arbitrary sections and mappings.
    ///
    /// A repeated section identity replaces the earlier entry in place. A
    /// repeated mapping key points the index at the later mapping. Neither
    /// case is an error.
    pub fn from_parts(
        sections: impl IntoIterator<Item = StatuteSection>,
        mappings: impl IntoIterator<Item = StatuteMapping>,
    ) -> Self {
        let mut tables: HashMap<Code, CodeTable> = HashMap::new();
        for section in sections {
            tables.entry(section.code).or_default().insert(section);
        }

        let mappings: Vec<StatuteMapping> = mappings.into_iter().collect();
        let mut transitions: HashMap<Code, HashMap<String, usize>> = HashMap::new();
        for (pos, m) in mappings.iter().enumerate() {
            transitions
                .entry(m.old_code)
                .or_default()
                .insert(m.old_section.clone(), pos);
        }

        let db = Self {
            tables,
            mappings,
            transitions,
        };
        debug!(
            sections = db.tables.values().map(|t| t.sections.len()).sum::<usize>(),
            mappings = db.mappings.len(),
            "statute database built"
        );
        db
    }

    /// Look up a section by code and number.
    pub fn lookup_section(&self, code: Code, section_number: &str) -> Option<&StatuteSection> {
        self.tables.get(&code)?.get(section_number.trim())
    }

    /// Look up the transition for a section of [`DEFAULT_OLD_CODE`].
    pub fn lookup_transition(&self, old_section: &str) -> Option<&StatuteMapping> {
        self.lookup_transition_from(DEFAULT_OLD_CODE, old_section)
    }

    /// Look up the transition keyed by `(old_code, old_section)`.
    pub fn lookup_transition_from(
        &self,
        old_code: Code,
        old_section: &str,
    ) -> Option<&StatuteMapping> {
        let pos = self.transitions.get(&old_code)?.get(old_section.trim())?;
        self.mappings.get(*pos)
    }

    /// Every section of `code` in table order. Empty if the code has no table.
    pub fn all_sections(&self, code: Code) -> &[StatuteSection] {
        self.tables
            .get(&code)
            .map(|t| t.sections.as_slice())
            .unwrap_or(&[])
    }

    /// Every section of `code` in document order ("34" before "120B").
    pub fn sections_in_document_order(&self, code: Code) -> Vec<&StatuteSection> {
        let mut sections: Vec<&StatuteSection> = self.all_sections(code).iter().collect();
        sections.sort_by_cached_key(|s| normalize_section(&s.section_number));
        sections
    }

    /// Codes that have at least one section, in [`Code::ALL`] order.
    pub fn codes(&self) -> Vec<Code> {
        Code::ALL
            .into_iter()
            .filter(|c| self.tables.contains_key(c))
            .collect()
    }

    /// All transition mappings in table order.
    pub fn mappings(&self) -> &[StatuteMapping] {
        &self.mappings
    }

    /// Sections of superseded codes that have no transition mapping.
    pub fn unmapped_sections(&self) -> Vec<&StatuteSection> {
        self.codes()
            .into_iter()
            .filter(Code::is_superseded)
            .flat_map(|code| self.all_sections(code))
            .filter(|s| self.lookup_transition_from(s.code, &s.section_number).is_none())
            .collect()
    }

    /// Mappings whose old or new section is missing from the tables.
    pub fn dangling_mappings(&self) -> Vec<&StatuteMapping> {
        self.mappings
            .iter()
            .filter(|m| {
                self.lookup_section(m.old_code, &m.old_section).is_none()
                    || self.lookup_section(m.new_code, &m.new_section).is_none()
            })
            .collect()
    }

    /// Summary statistics.
    pub fn summary(&self) -> DatabaseSummary {
        let count = |status: MappingStatus| {
            self.mappings.iter().filter(|m| m.status == status).count()
        };

        DatabaseSummary {
            sections: self
                .codes()
                .into_iter()
                .map(|c| (c, self.all_sections(c).len()))
                .collect(),
            mappings: self.mappings.len(),
            replaced: count(MappingStatus::Replaced),
            amended: count(MappingStatus::Amended),
            repealed: count(MappingStatus::Repealed),
            unmapped: self.unmapped_sections().len(),
            dangling: self.dangling_mappings().len(),
        }
    }
}

impl Default for StatuteDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRecord {
    fn to_section(&self) -> StatuteSection {
        StatuteSection {
            code: self.code,
            section_number: self.number.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            punishment: self.punishment.map(str::to_string),
            bailable: self.bailable,
        }
    }
}

impl MappingRecord {
    fn to_mapping(&self) -> StatuteMapping {
        StatuteMapping {
            old_code: self.old_code,
            old_section: self.old_section.to_string(),
            new_code: self.new_code,
            new_section: self.new_section.to_string(),
            status: self.status,
        }
    }
}
