//! Compiled-in statute tables.
//!
//! Sections are the most frequently charged IPC provisions and their BNS 2023
//! counterparts. Transitions are keyed by the IPC section.

use crate::statute::{Bailable, Code, MappingStatus};

pub(crate) struct SectionRecord {
    pub code: Code,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub punishment: Option<&'static str>,
    pub bailable: Bailable,
}

pub(crate) struct MappingRecord {
    pub old_code: Code,
    pub old_section: &'static str,
    pub new_code: Code,
    pub new_section: &'static str,
    pub status: MappingStatus,
}

const fn section(
    code: Code,
    number: &'static str,
    title: &'static str,
    description: &'static str,
    punishment: &'static str,
    bailable: Bailable,
) -> SectionRecord {
    SectionRecord {
        code,
        number,
        title,
        description,
        punishment: Some(punishment),
        bailable,
    }
}

const fn ipc_to_bns(
    old_section: &'static str,
    new_section: &'static str,
    status: MappingStatus,
) -> MappingRecord {
    MappingRecord {
        old_code: Code::Ipc,
        old_section,
        new_code: Code::Bns,
        new_section,
        status,
    }
}

pub(crate) const IPC_SECTIONS: &[SectionRecord] = &[
    section(
        Code::Ipc,
        "302",
        "Murder",
        "Punishment for murder. Whoever commits murder shall be punished with death or imprisonment for life, and shall also be liable to fine.",
        "Death or life imprisonment and fine",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "307",
        "Attempt to murder",
        "Whoever does any act with such intention or knowledge, and under such circumstances that, if he by that act caused death, he would be guilty of murder, shall be punished.",
        "Imprisonment up to 10 years, or life if hurt caused",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "304",
        "Culpable homicide not amounting to murder",
        "Whoever commits culpable homicide not amounting to murder shall be punished.",
        "Imprisonment for life or up to 10 years",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "376",
        "Rape",
        "Punishment for rape. Not less than 7 years which may extend to imprisonment for life.",
        "Minimum 7 years, may extend to life imprisonment",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "379",
        "Theft",
        "Whoever commits theft shall be punished with imprisonment of either description for a term which may extend to three years, or with fine, or with both.",
        "Imprisonment up to 3 years, or fine, or both",
        Bailable::Yes,
    ),
    section(
        Code::Ipc,
        "380",
        "Theft in dwelling house",
        "Whoever commits theft in any building, tent or vessel, which building, tent or vessel is used as a human dwelling, shall be punished.",
        "Imprisonment up to 7 years and fine",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "392",
        "Robbery",
        "Whoever commits robbery shall be punished with rigorous imprisonment for a term which may extend to ten years, and shall also be liable to fine.",
        "Rigorous imprisonment up to 10 years and fine",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "395",
        "Dacoity",
        "Whoever commits dacoity shall be punished with imprisonment for life, or with rigorous imprisonment for a term which may extend to ten years.",
        "Life imprisonment or rigorous imprisonment up to 10 years",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "420",
        "Cheating and dishonestly inducing delivery of property",
        "Whoever cheats and thereby dishonestly induces the person deceived to deliver any property to any person shall be punished.",
        "Imprisonment up to 7 years and fine",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "406",
        "Criminal breach of trust",
        "Whoever commits criminal breach of trust shall be punished with imprisonment of either description for a term which may extend to three years.",
        "Imprisonment up to 3 years, or fine, or both",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "498A",
        "Cruelty by husband or relatives",
        "Whoever, being the husband or the relative of the husband of a woman, subjects such woman to cruelty shall be punished.",
        "Imprisonment up to 3 years and fine",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "304B",
        "Dowry death",
        "Where the death of a woman is caused by burns or bodily injury in unnatural circumstances within 7 years of marriage and there is cruelty or harassment for dowry.",
        "Minimum 7 years, may extend to life imprisonment",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "363",
        "Kidnapping",
        "Whoever kidnaps any person from India or from lawful guardianship shall be punished.",
        "Imprisonment up to 7 years and fine",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "354",
        "Assault or criminal force on woman to outrage modesty",
        "Whoever assaults or uses criminal force to any woman, intending to outrage or knowing it to be likely to outrage her modesty, shall be punished.",
        "Minimum 1 year, may extend to 5 years and fine",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "323",
        "Voluntarily causing hurt",
        "Whoever voluntarily causes hurt shall be punished with imprisonment for a term which may extend to one year, or with fine which may extend to one thousand rupees, or with both.",
        "Imprisonment up to 1 year, or fine up to Rs 1000, or both",
        Bailable::Yes,
    ),
    section(
        Code::Ipc,
        "325",
        "Voluntarily causing grievous hurt",
        "Whoever voluntarily causes grievous hurt shall be punished with imprisonment for a term which may extend to seven years, and shall also be liable to fine.",
        "Imprisonment up to 7 years and fine",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "341",
        "Wrongful restraint",
        "Whoever wrongfully restrains any person shall be punished with simple imprisonment for a term which may extend to one month, or with fine which may extend to five hundred rupees.",
        "Simple imprisonment up to 1 month, or fine up to Rs 500",
        Bailable::Yes,
    ),
    section(
        Code::Ipc,
        "506",
        "Criminal intimidation",
        "Whoever commits the offence of criminal intimidation shall be punished with imprisonment of either description for a term which may extend to two years, or with fine, or with both.",
        "Imprisonment up to 2 years, or fine, or both",
        Bailable::Yes,
    ),
    section(
        Code::Ipc,
        "120B",
        "Criminal conspiracy",
        "Whoever is a party to a criminal conspiracy to commit an offence punishable with death, imprisonment for life, or rigorous imprisonment for a term of two years or upwards.",
        "Same as for the offence conspired to commit",
        Bailable::Unknown,
    ),
    section(
        Code::Ipc,
        "34",
        "Acts done by several persons in furtherance of common intention",
        "When a criminal act is done by several persons in furtherance of the common intention of all, each of such persons is liable for that act as if it were done by him alone.",
        "Same punishment as individual offence",
        Bailable::Unknown,
    ),
    section(
        Code::Ipc,
        "147",
        "Rioting",
        "Whoever is guilty of rioting shall be punished with imprisonment of either description for a term which may extend to two years, or with fine, or with both.",
        "Imprisonment up to 2 years, or fine, or both",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "153A",
        "Promoting enmity between groups",
        "Whoever promotes or attempts to promote, on grounds of religion, race, place of birth, residence, language, caste or community, disharmony or feelings of enmity between different groups.",
        "Imprisonment up to 3 years, or fine, or both",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "295A",
        "Deliberate acts intended to outrage religious feelings",
        "Deliberate and malicious acts intended to outrage religious feelings of any class by insulting its religion or religious beliefs.",
        "Imprisonment up to 3 years, or fine, or both",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "411",
        "Dishonestly receiving stolen property",
        "Whoever dishonestly receives or retains any stolen property, knowing or having reason to believe the same to be stolen property.",
        "Imprisonment up to 3 years, or fine, or both",
        Bailable::Yes,
    ),
    section(
        Code::Ipc,
        "193",
        "Punishment for false evidence",
        "Whoever intentionally gives false evidence in any stage of a judicial proceeding, or fabricates false evidence for the purpose of being used in any stage of a judicial proceeding.",
        "Imprisonment up to 7 years and fine",
        Bailable::No,
    ),
    section(
        Code::Ipc,
        "415",
        "Cheating",
        "Whoever, by deceiving any person, fraudulently or dishonestly induces the person so deceived to deliver any property to any person, or to consent that any person shall retain any property.",
        "Imprisonment up to 1 year, or fine, or both",
        Bailable::Yes,
    ),
    section(
        Code::Ipc,
        "447",
        "Criminal trespass",
        "Whoever commits criminal trespass shall be punished with imprisonment of either description for a term which may extend to three months, or with fine, or with both.",
        "Imprisonment up to 3 months, or fine up to Rs 500, or both",
        Bailable::Yes,
    ),
    section(
        Code::Ipc,
        "279",
        "Rash driving or riding on a public way",
        "Whoever drives any vehicle, or rides, on any public way in a manner so rash or negligent as to endanger human life, or to be likely to cause hurt or injury to any other person.",
        "Imprisonment up to 6 months, or fine up to Rs 1000, or both",
        Bailable::Yes,
    ),
    section(
        Code::Ipc,
        "304A",
        "Causing death by negligence",
        "Whoever causes the death of any person by doing any rash or negligent act not amounting to culpable homicide.",
        "Imprisonment up to 2 years, or fine, or both",
        Bailable::Yes,
    ),
    section(
        Code::Ipc,
        "509",
        "Word or gesture intended to insult the modesty of a woman",
        "Whoever intending to insult the modesty of any woman utters any word, makes any sound or gesture, or exhibits any object, intending that such word or sound shall be heard.",
        "Simple imprisonment up to 3 years, or fine, or both",
        Bailable::Yes,
    ),
];

pub(crate) const BNS_SECTIONS: &[SectionRecord] = &[
    section(
        Code::Bns,
        "103",
        "Murder",
        "Murder under BNS 2023. Same as IPC 302 but with updated provisions for organised crime and terrorism context.",
        "Death or imprisonment for life and fine",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "109",
        "Attempt to murder",
        "Corresponds to IPC 307. Attempt to commit murder.",
        "Imprisonment up to 10 years, or life if hurt caused",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "105",
        "Culpable homicide not amounting to murder",
        "Corresponds to IPC 304.",
        "Imprisonment for life or up to 10 years",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "64",
        "Rape",
        "Corresponds to IPC 376 with enhanced provisions for repeat offenders and public officials.",
        "Minimum 10 years (from 7 under IPC), may extend to life",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "303",
        "Theft",
        "Corresponds to IPC 379. Theft provisions largely unchanged.",
        "Imprisonment up to 3 years, or fine, or both",
        Bailable::Yes,
    ),
    section(
        Code::Bns,
        "305",
        "Theft in dwelling house",
        "Corresponds to IPC 380.",
        "Imprisonment up to 7 years and fine",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "309",
        "Robbery",
        "Corresponds to IPC 392.",
        "Rigorous imprisonment up to 10 years and fine",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "310",
        "Dacoity",
        "Corresponds to IPC 395.",
        "Life imprisonment or rigorous imprisonment up to 10 years",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "318",
        "Cheating",
        "Corresponds to IPC 420/415 combined.",
        "Imprisonment up to 7 years and fine",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "316",
        "Criminal breach of trust",
        "Corresponds to IPC 406.",
        "Imprisonment up to 7 years and fine",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "85",
        "Cruelty by husband or relatives",
        "Corresponds to IPC 498A. Expanded to include mental cruelty.",
        "Imprisonment up to 3 years and fine",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "80",
        "Dowry death",
        "Corresponds to IPC 304B.",
        "Minimum 7 years, may extend to life imprisonment",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "137",
        "Kidnapping",
        "Corresponds to IPC 363.",
        "Imprisonment up to 7 years and fine",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "74",
        "Assault or criminal force on woman to outrage modesty",
        "Corresponds to IPC 354 with additions.",
        "Minimum 1 year, may extend to 5 years and fine",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "115",
        "Voluntarily causing hurt",
        "Corresponds to IPC 323.",
        "Imprisonment up to 1 year, or fine, or both",
        Bailable::Yes,
    ),
    section(
        Code::Bns,
        "117",
        "Voluntarily causing grievous hurt",
        "Corresponds to IPC 325.",
        "Imprisonment up to 7 years and fine",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "126",
        "Wrongful restraint",
        "Corresponds to IPC 341.",
        "Simple imprisonment up to 1 month, or fine",
        Bailable::Yes,
    ),
    section(
        Code::Bns,
        "351",
        "Criminal intimidation",
        "Corresponds to IPC 506.",
        "Imprisonment up to 2 years, or fine, or both",
        Bailable::Yes,
    ),
    section(
        Code::Bns,
        "61",
        "Criminal conspiracy",
        "Corresponds to IPC 120B.",
        "Same as for the offence conspired to commit",
        Bailable::Unknown,
    ),
    section(
        Code::Bns,
        "3(5)",
        "Acts done in furtherance of common intention",
        "Corresponds to IPC 34.",
        "Same punishment as individual offence",
        Bailable::Unknown,
    ),
    section(
        Code::Bns,
        "191",
        "Rioting",
        "Corresponds to IPC 147.",
        "Imprisonment up to 2 years, or fine, or both",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "196",
        "Promoting enmity between groups",
        "Corresponds to IPC 153A.",
        "Imprisonment up to 3 years, or fine, or both",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "302",
        "Dishonestly receiving stolen property",
        "Corresponds to IPC 411.",
        "Imprisonment up to 3 years, or fine, or both",
        Bailable::Yes,
    ),
    section(
        Code::Bns,
        "229",
        "Giving false evidence",
        "Corresponds to IPC 193.",
        "Imprisonment up to 7 years and fine",
        Bailable::No,
    ),
    section(
        Code::Bns,
        "329",
        "Criminal trespass",
        "Corresponds to IPC 447.",
        "Imprisonment up to 3 months, or fine",
        Bailable::Yes,
    ),
    section(
        Code::Bns,
        "281",
        "Rash driving",
        "Corresponds to IPC 279.",
        "Imprisonment up to 6 months, or fine, or both",
        Bailable::Yes,
    ),
    section(
        Code::Bns,
        "106",
        "Causing death by negligence",
        "Corresponds to IPC 304A. Enhanced provisions for hit-and-run cases.",
        "Imprisonment up to 5 years and fine (hit-and-run: up to 10 years)",
        Bailable::Yes,
    ),
    section(
        Code::Bns,
        "79",
        "Acts intended to insult modesty of woman",
        "Corresponds to IPC 509.",
        "Simple imprisonment up to 3 years, or fine, or both",
        Bailable::Yes,
    ),
];
pub(crate) const IPC_TO_BNS: &[MappingRecord] = &[
    ipc_to_bns("302", "103", MappingStatus::Replaced),
    ipc_to_bns("307", "109", MappingStatus::Replaced),
    ipc_to_bns("304", "105", MappingStatus::Replaced),
    ipc_to_bns("376", "64", MappingStatus::Replaced),
    ipc_to_bns("379", "303", MappingStatus::Replaced),
    ipc_to_bns("380", "305", MappingStatus::Replaced),
    ipc_to_bns("392", "309", MappingStatus::Replaced),
    ipc_to_bns("395", "310", MappingStatus::Replaced),
    ipc_to_bns("420", "318", MappingStatus::Replaced),
    ipc_to_bns("406", "316", MappingStatus::Replaced),
    ipc_to_bns("498A", "85", MappingStatus::Replaced),
    ipc_to_bns("304B", "80", MappingStatus::Replaced),
    ipc_to_bns("363", "137", MappingStatus::Replaced),
    ipc_to_bns("354", "74", MappingStatus::Replaced),
    ipc_to_bns("323", "115", MappingStatus::Replaced),
    ipc_to_bns("325", "117", MappingStatus::Replaced),
    ipc_to_bns("341", "126", MappingStatus::Replaced),
    ipc_to_bns("506", "351", MappingStatus::Replaced),
    ipc_to_bns("120B", "61", MappingStatus::Replaced),
    ipc_to_bns("34", "3(5)", MappingStatus::Replaced),
    ipc_to_bns("147", "191", MappingStatus::Replaced),
    ipc_to_bns("153A", "196", MappingStatus::Replaced),
    ipc_to_bns("411", "302", MappingStatus::Replaced),
    ipc_to_bns("193", "229", MappingStatus::Replaced),
    ipc_to_bns("447", "329", MappingStatus::Replaced),
    ipc_to_bns("304A", "106", MappingStatus::Amended),
    ipc_to_bns("509", "79", MappingStatus::Replaced),
    ipc_to_bns("279", "281", MappingStatus::Replaced),
    ipc_to_bns("415", "318", MappingStatus::Replaced),
];
