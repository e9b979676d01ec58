//! Core types, compiled statute tables, and the statute database for openjudge.

pub mod database;
mod error;
pub mod section_key;
pub mod statute;
mod tables;
pub mod transition;

pub use database::{DEFAULT_OLD_CODE, DatabaseSummary, StatuteDatabase};
pub use error::ValidationError;
pub use section_key::normalize_section;
pub use statute::{Bailable, Code, MappingStatus, StatuteMapping, StatuteSection};
pub use transition::{TRANSITION_DATE, governing_code};

/// Attached to every analysis and printed with every lookup.
pub const LEGAL_DISCLAIMER: &str = "This tool does NOT provide legal advice. \
Case analysis is based on keyword matching and may be incomplete or inaccurate. \
Always consult a qualified legal professional.";
