//! Statute sections and old-to-new transition mappings.
//!
//! Both record types are plain serde structs so they can be handed to any
//! renderer or transport unchanged. The closed sets (`Code`, `MappingStatus`)
//! are enums: building a record from raw strings goes through [`FromStr`],
//! which is where validation failures surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// A legal code a section belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Code {
    #[serde(rename = "IPC")]
    Ipc,
    #[serde(rename = "BNS")]
    Bns,
    #[serde(rename = "CrPC")]
    Crpc,
    #[serde(rename = "BNSS")]
    Bnss,
    #[serde(rename = "IT Act")]
    ItAct,
    #[serde(rename = "POCSO")]
    Pocso,
}

impl Code {
    pub const ALL: [Code; 6] = [
        Code::Ipc,
        Code::Bns,
        Code::Crpc,
        Code::Bnss,
        Code::ItAct,
        Code::Pocso,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ipc => "IPC",
            Self::Bns => "BNS",
            Self::Crpc => "CrPC",
            Self::Bnss => "BNSS",
            Self::ItAct => "IT Act",
            Self::Pocso => "POCSO",
        }
    }

    /// Name used when citing the code in prose ("BNS 2023").
    pub fn citation(&self) -> &'static str {
        match self {
            Self::Bns => "BNS 2023",
            Self::Bnss => "BNSS 2023",
            other => other.as_str(),
        }
    }

    /// The code that supersedes this one, if any.
    pub fn successor(&self) -> Option<Code> {
        match self {
            Self::Ipc => Some(Self::Bns),
            Self::Crpc => Some(Self::Bnss),
            _ => None,
        }
    }

    /// The code this one supersedes, if any.
    pub fn predecessor(&self) -> Option<Code> {
        match self {
            Self::Bns => Some(Self::Ipc),
            Self::Bnss => Some(Self::Crpc),
            _ => None,
        }
    }

    /// True for codes that were replaced on the transition date.
    pub fn is_superseded(&self) -> bool {
        self.successor().is_some()
    }

    /// Like [`FromStr`], but accepts any ASCII casing ("ipc", "Crpc").
    pub fn parse_ignore_case(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownCode(s.to_string()))
    }
}

impl FromStr for Code {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCode(s.to_string()))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the accused has a statutory right to bail.
///
/// `Unknown` means the statute does not fix an answer (e.g. conspiracy, where
/// bail follows the underlying offence). It is never the same as `No`.
/// Serialises as `true` / `false` / `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Bailable {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Bailable {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "bailable",
            Self::No => "non-bailable",
            Self::Unknown => "see statute",
        }
    }
}

impl From<Option<bool>> for Bailable {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unknown,
        }
    }
}

impl From<Bailable> for Option<bool> {
    fn from(value: Bailable) -> Self {
        match value {
            Bailable::Yes => Some(true),
            Bailable::No => Some(false),
            Bailable::Unknown => None,
        }
    }
}

/// How an old-code section carried over into the new code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingStatus {
    Replaced,
    Amended,
    Repealed,
}

impl MappingStatus {
    pub const ALL: [MappingStatus; 3] = [Self::Replaced, Self::Amended, Self::Repealed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replaced => "replaced",
            Self::Amended => "amended",
            Self::Repealed => "repealed",
        }
    }
}

impl FromStr for MappingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for MappingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single numbered provision of a legal code.
///
/// Identity is `(code, section_number)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteSection {
    pub code: Code,
    /// Not necessarily numeric: "498A", "3(5)".
    pub section_number: String,
    pub title: String,
    pub description: String,
    /// `None` when the statute text does not prescribe one.
    #[serde(default)]
    pub punishment: Option<String>,
    #[serde(default)]
    pub bailable: Bailable,
}

impl StatuteSection {
    /// Build a section from a raw code name, validating it against [`Code`].
    ///
    /// Punishment defaults to unspecified and bail to [`Bailable::Unknown`].
    pub fn new(
        code: &str,
        section_number: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            code: code.parse()?,
            section_number: section_number.into(),
            title: title.into(),
            description: description.into(),
            punishment: None,
            bailable: Bailable::Unknown,
        })
    }

    pub fn with_punishment(mut self, punishment: impl Into<String>) -> Self {
        self.punishment = Some(punishment.into());
        self
    }

    pub fn with_bailable(mut self, bailable: Bailable) -> Self {
        self.bailable = bailable;
        self
    }

    pub fn id(&self) -> (Code, &str) {
        (self.code, self.section_number.as_str())
    }

    /// "IPC 302"
    pub fn citation(&self) -> String {
        format!("{} {}", self.code, self.section_number)
    }
}

/// A historical transition from an old-code section to a new-code section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteMapping {
    pub old_code: Code,
    pub old_section: String,
    pub new_code: Code,
    pub new_section: String,
    pub status: MappingStatus,
}

impl StatuteMapping {
    /// Build a mapping from raw strings, validating both codes and the status.
    pub fn new(
        old_code: &str,
        old_section: impl Into<String>,
        new_code: &str,
        new_section: impl Into<String>,
        status: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            old_code: old_code.parse()?,
            old_section: old_section.into(),
            new_code: new_code.parse()?,
            new_section: new_section.into(),
            status: status.parse()?,
        })
    }

    /// Reverse-lookup key.
    pub fn key(&self) -> (Code, &str) {
        (self.old_code, self.old_section.as_str())
    }

    pub fn old_citation(&self) -> String {
        format!("{} {}", self.old_code, self.old_section)
    }

    pub fn new_citation(&self) -> String {
        format!("{} {}", self.new_code, self.new_section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ipc_section() {
        let section = StatuteSection::new("IPC", "302", "Murder", "Punishment for murder.")
            .unwrap()
            .with_punishment("Death or life imprisonment")
            .with_bailable(Bailable::No);
        assert_eq!(section.code, Code::Ipc);
        assert_eq!(section.section_number, "302");
        assert_eq!(section.bailable, Bailable::No);
        assert_eq!(section.citation(), "IPC 302");
    }

    #[test]
    fn invalid_code_rejected() {
        let err = StatuteSection::new("INVALID_CODE", "1", "Test", "Test").unwrap_err();
        assert_eq!(err, ValidationError::UnknownCode("INVALID_CODE".into()));
        assert!(err.to_string().contains("INVALID_CODE"));
    }

    #[test]
    fn code_match_is_case_sensitive() {
        assert!("ipc".parse::<Code>().is_err());
        assert_eq!(Code::parse_ignore_case(" ipc "), Ok(Code::Ipc));
        assert_eq!(Code::parse_ignore_case("it act"), Ok(Code::ItAct));
        assert!(Code::parse_ignore_case("penal").is_err());
    }

    #[test]
    fn every_code_parses_from_its_name() {
        for code in Code::ALL {
            assert_eq!(code.as_str().parse::<Code>(), Ok(code));
        }
    }

    #[test]
    fn crpc_and_pocso_are_valid_codes() {
        let crpc = StatuteSection::new("CrPC", "156", "Police power", "Investigate.").unwrap();
        assert_eq!(crpc.code, Code::Crpc);
        let pocso = StatuteSection::new("POCSO", "4", "Assault", "Punishment.").unwrap();
        assert_eq!(pocso.code, Code::Pocso);
    }

    #[test]
    fn punishment_and_bail_default_to_unspecified() {
        let section = StatuteSection::new("IPC", "34", "Common intention", "Acts.").unwrap();
        assert_eq!(section.punishment, None);
        assert_eq!(section.bailable, Bailable::Unknown);
        assert_ne!(section.bailable, Bailable::No);
    }

    #[test]
    fn succession() {
        assert_eq!(Code::Ipc.successor(), Some(Code::Bns));
        assert_eq!(Code::Bnss.predecessor(), Some(Code::Crpc));
        assert!(Code::Ipc.is_superseded());
        assert!(!Code::Bns.is_superseded());
        assert!(!Code::Pocso.is_superseded());
    }

    #[test]
    fn mapping_statuses() {
        let m = StatuteMapping::new("IPC", "304A", "BNS", "106", "amended").unwrap();
        assert_eq!(m.status, MappingStatus::Amended);
        assert_eq!(m.key(), (Code::Ipc, "304A"));
        assert_eq!(m.new_citation(), "BNS 106");

        let repealed = StatuteMapping::new("IPC", "377", "BNS", "0", "repealed").unwrap();
        assert_eq!(repealed.status, MappingStatus::Repealed);
    }

    #[test]
    fn invalid_status_rejected() {
        let err = StatuteMapping::new("IPC", "302", "BNS", "103", "unknown_status").unwrap_err();
        assert_eq!(err, ValidationError::UnknownStatus("unknown_status".into()));
    }

    #[test]
    fn bailable_json_is_tri_state() {
        let json = |b: Bailable| serde_json::to_string(&b).unwrap();
        assert_eq!(json(Bailable::Yes), "true");
        assert_eq!(json(Bailable::No), "false");
        assert_eq!(json(Bailable::Unknown), "null");
    }

    #[test]
    fn section_json_preserves_unknown_bail() {
        let section = StatuteSection::new("IPC", "120B", "Criminal conspiracy", "Party to it.")
            .unwrap()
            .with_punishment("Same as for the offence conspired to commit");
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["code"], "IPC");
        assert!(json["bailable"].is_null());

        let parsed: StatuteSection = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.bailable, Bailable::Unknown);
        assert_eq!(parsed, section);
    }

    #[test]
    fn deserialising_unknown_code_fails() {
        let raw = r#"{"code":"XYZ","section_number":"1","title":"t","description":"d"}"#;
        assert!(serde_json::from_str::<StatuteSection>(raw).is_err());
    }

    #[test]
    fn it_act_uses_spaced_name() {
        let json = serde_json::to_string(&Code::ItAct).unwrap();
        assert_eq!(json, "\"IT Act\"");
    }
}
