//! Keyword rules mapping case-description phrases to offence categories.
//!
//! Each rule lists lower-case phrases, the sections it points at (old code
//! first, then its new-code counterpart), and a category label. Rule order
//! decides the order categories are reported in.

use openjudge_core::Code;

/// A `(code, section_number)` reference into the statute tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionRef {
    pub code: Code,
    pub number: &'static str,
}

impl SectionRef {
    pub const fn new(code: Code, number: &'static str) -> Self {
        Self { code, number }
    }
}

/// Phrases that indicate an offence category, and the sections it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    /// Matched as written against lower-cased text, so write them lower-case.
    pub keywords: &'static [&'static str],
    pub sections: &'static [SectionRef],
    pub category: &'static str,
}

impl KeywordRule {
    pub const fn new(
        keywords: &'static [&'static str],
        sections: &'static [SectionRef],
        category: &'static str,
    ) -> Self {
        Self {
            keywords,
            sections,
            category,
        }
    }

    /// True if any keyword occurs anywhere in `normalized`.
    ///
    /// Plain substring containment: "hurt" also matches inside "shurt".
    pub fn matches(&self, normalized: &str) -> bool {
        self.first_hit(normalized).is_some()
    }

    /// The first keyword found in `normalized`, if any.
    pub fn first_hit(&self, normalized: &str) -> Option<&'static str> {
        self.keywords
            .iter()
            .copied()
            .find(|kw| normalized.contains(kw))
    }
}

pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule::new(
        &["murder", "killed", "death", "homicide"],
        &[SectionRef::new(Code::Ipc, "302"), SectionRef::new(Code::Bns, "103")],
        "murder",
    ),
    KeywordRule::new(
        &["attempt to murder", "attempted murder"],
        &[SectionRef::new(Code::Ipc, "307"), SectionRef::new(Code::Bns, "109")],
        "attempt to murder",
    ),
    KeywordRule::new(
        &["culpable homicide", "manslaughter"],
        &[SectionRef::new(Code::Ipc, "304"), SectionRef::new(Code::Bns, "105")],
        "culpable homicide",
    ),
    KeywordRule::new(
        &["rape", "sexual assault"],
        &[SectionRef::new(Code::Ipc, "376"), SectionRef::new(Code::Bns, "64")],
        "rape",
    ),
    KeywordRule::new(
        &["theft", "stealing", "stolen"],
        &[SectionRef::new(Code::Ipc, "379"), SectionRef::new(Code::Bns, "303")],
        "theft",
    ),
    KeywordRule::new(
        &["dwelling", "house theft", "home theft"],
        &[SectionRef::new(Code::Ipc, "380"), SectionRef::new(Code::Bns, "305")],
        "dwelling theft",
    ),
    KeywordRule::new(
        &["robbery", "snatching"],
        &[SectionRef::new(Code::Ipc, "392"), SectionRef::new(Code::Bns, "309")],
        "robbery",
    ),
    KeywordRule::new(
        &["dacoity", "gang robbery", "armed robbery"],
        &[SectionRef::new(Code::Ipc, "395"), SectionRef::new(Code::Bns, "310")],
        "dacoity",
    ),
    KeywordRule::new(
        &["cheating", "fraud", "deception", "scam"],
        &[SectionRef::new(Code::Ipc, "420"), SectionRef::new(Code::Bns, "318")],
        "cheating",
    ),
    KeywordRule::new(
        &["breach of trust", "misappropriation"],
        &[SectionRef::new(Code::Ipc, "406"), SectionRef::new(Code::Bns, "316")],
        "criminal breach of trust",
    ),
    KeywordRule::new(
        &["domestic violence", "cruelty by husband", "marital cruelty"],
        &[SectionRef::new(Code::Ipc, "498A"), SectionRef::new(Code::Bns, "85")],
        "domestic cruelty",
    ),
    KeywordRule::new(
        &["dowry death", "dowry harassment", "dowry murder"],
        &[SectionRef::new(Code::Ipc, "304B"), SectionRef::new(Code::Bns, "80")],
        "dowry death",
    ),
    KeywordRule::new(
        &["kidnapping", "abduction", "missing child"],
        &[SectionRef::new(Code::Ipc, "363"), SectionRef::new(Code::Bns, "137")],
        "kidnapping",
    ),
    KeywordRule::new(
        &["molestation", "outrage modesty", "eve teasing physical"],
        &[SectionRef::new(Code::Ipc, "354"), SectionRef::new(Code::Bns, "74")],
        "assault on modesty",
    ),
    KeywordRule::new(
        &["hurt", "beating", "assault", "punch", "attack person"],
        &[SectionRef::new(Code::Ipc, "323"), SectionRef::new(Code::Bns, "115")],
        "causing hurt",
    ),
    KeywordRule::new(
        &["grievous hurt", "severe injury", "permanent injury"],
        &[SectionRef::new(Code::Ipc, "325"), SectionRef::new(Code::Bns, "117")],
        "grievous hurt",
    ),
    KeywordRule::new(
        &["wrongful restraint", "confined", "blocked path"],
        &[SectionRef::new(Code::Ipc, "341"), SectionRef::new(Code::Bns, "126")],
        "wrongful restraint",
    ),
    KeywordRule::new(
        &["threat", "intimidation", "threatening"],
        &[SectionRef::new(Code::Ipc, "506"), SectionRef::new(Code::Bns, "351")],
        "criminal intimidation",
    ),
    KeywordRule::new(
        &["conspiracy", "planning crime", "gang plan"],
        &[SectionRef::new(Code::Ipc, "120B"), SectionRef::new(Code::Bns, "61")],
        "criminal conspiracy",
    ),
    KeywordRule::new(
        &["rioting", "mob violence", "unlawful assembly"],
        &[SectionRef::new(Code::Ipc, "147"), SectionRef::new(Code::Bns, "191")],
        "rioting",
    ),
    KeywordRule::new(
        &["communal tension", "religious hatred", "caste violence"],
        &[SectionRef::new(Code::Ipc, "153A"), SectionRef::new(Code::Bns, "196")],
        "promoting enmity",
    ),
    KeywordRule::new(
        &["receiving stolen", "buying stolen"],
        &[SectionRef::new(Code::Ipc, "411"), SectionRef::new(Code::Bns, "302")],
        "receiving stolen property",
    ),
    KeywordRule::new(
        &["false evidence", "perjury", "false witness"],
        &[SectionRef::new(Code::Ipc, "193"), SectionRef::new(Code::Bns, "229")],
        "false evidence",
    ),
    KeywordRule::new(
        &["trespass", "breaking in", "unlawful entry"],
        &[SectionRef::new(Code::Ipc, "447"), SectionRef::new(Code::Bns, "329")],
        "criminal trespass",
    ),
    KeywordRule::new(
        &["rash driving", "dangerous driving", "road accident negligence"],
        &[SectionRef::new(Code::Ipc, "279"), SectionRef::new(Code::Bns, "281")],
        "rash driving",
    ),
    KeywordRule::new(
        &["negligence death", "accident death", "hit and run"],
        &[SectionRef::new(Code::Ipc, "304A"), SectionRef::new(Code::Bns, "106")],
        "death by negligence",
    ),
    KeywordRule::new(
        &["eve teasing", "gesture insult woman", "verbal harassment woman"],
        &[SectionRef::new(Code::Ipc, "509"), SectionRef::new(Code::Bns, "79")],
        "insulting woman's modesty",
    ),
];
