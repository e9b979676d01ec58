//! Human-readable rendering of sections, transitions, and analyses.
//!
//! Each renderer returns a `String`; `main` decides where it goes.

use chrono::NaiveDate;
use openjudge_core::{
    Code, DatabaseSummary, LEGAL_DISCLAIMER, StatuteMapping, StatuteSection, TRANSITION_DATE,
    governing_code,
};
use openjudge_matcher::CaseAnalysis;

const MAX_TITLE: usize = 60;
const MAX_SECTIONS_SHOWN: usize = 12;

// ── Sections ──

/// A single section as a vertical card.
pub fn section_card(section: &StatuteSection) -> String {
    let mut out = format!("=== {} ===\n{}\n\n", section.citation(), section.title);
    out.push_str(&field("Description", &section.description));
    out.push_str(&field(
        "Punishment",
        section.punishment.as_deref().unwrap_or("See description"),
    ));
    out.push_str(&field("Bailable", section.bailable.as_str()));
    out
}

pub fn not_found(code: Code, section: &str) -> String {
    format!("{code} section {:?} not found.\n", section.trim())
}

/// One line per section: number, bail status, shortened title.
pub fn section_list(code: Code, sections: &[&StatuteSection]) -> String {
    let mut out = format!("{} ({} sections)\n", code.citation(), sections.len());
    for s in sections {
        out.push_str(&format!(
            "  {:<8} {:<13} {}\n",
            s.section_number,
            s.bailable.as_str(),
            shorten(&s.title)
        ));
    }
    out
}

// ── Transitions ──

pub fn transition_row(query: &str, mapping: Option<&StatuteMapping>) -> String {
    match mapping {
        Some(m) => format!(
            "  {:<10} ->  {:<10} [{}]\n",
            m.old_citation(),
            m.new_citation(),
            m.status
        ),
        None => format!("  IPC {:<6} ->  (no mapping)\n", query.trim()),
    }
}

// ── Analysis ──

pub fn analysis_report(analysis: &CaseAnalysis, offence_date: Option<NaiveDate>) -> String {
    let mut out = format!("Summary:\n  {}\n", analysis.summary);

    if analysis.has_matches() {
        let total = analysis.matched_sections.len();
        out.push_str(&format!("\nRelevant sections ({total}):\n"));
        for s in analysis.matched_sections.iter().take(MAX_SECTIONS_SHOWN) {
            out.push_str(&format!("  {:<10} {}\n", s.citation(), shorten(&s.title)));
            out.push_str(&format!(
                "             punishment: {}; {}\n",
                s.punishment.as_deref().unwrap_or("see description"),
                s.bailable.as_str()
            ));
        }
        if total > MAX_SECTIONS_SHOWN {
            out.push_str(&format!("  ... and {} more\n", total - MAX_SECTIONS_SHOWN));
        }
    }

    if !analysis.transition_mappings.is_empty() {
        out.push_str("\nIPC -> BNS transitions:\n");
        for t in &analysis.transition_mappings {
            out.push_str(&format!("  {:<10} ->  {:<10} [{}]\n", t.old, t.new, t.status));
        }
    }

    if let Some(date) = offence_date {
        out.push('\n');
        out.push_str(&charging_note(analysis, date));
    }

    out
}

/// Which code an offence on `date` falls under, and the matched sections of it.
pub fn charging_note(analysis: &CaseAnalysis, date: NaiveDate) -> String {
    let code = governing_code(Code::Ipc, date);
    let when = if date >= TRANSITION_DATE {
        "on or after"
    } else {
        "before"
    };
    let mut out = format!(
        "Offence date {date} is {when} {TRANSITION_DATE}: charged under {}.\n",
        code.citation()
    );
    let charged: Vec<String> = analysis
        .charging_sections(date)
        .iter()
        .map(|s| s.citation())
        .collect();
    if !charged.is_empty() {
        out.push_str(&format!("  Applicable: {}\n", charged.join(", ")));
    }
    out
}

// ── Database check ──

pub fn summary_report(summary: &DatabaseSummary, dangling: &[&StatuteMapping]) -> String {
    let mut out = String::from("Statute tables\n");
    for (code, count) in &summary.sections {
        out.push_str(&field(&format!("{} sections", code), &count.to_string()));
    }
    out.push_str(&field("transitions", &summary.mappings.to_string()));
    out.push_str(&field("  replaced", &summary.replaced.to_string()));
    out.push_str(&field("  amended", &summary.amended.to_string()));
    out.push_str(&field("  repealed", &summary.repealed.to_string()));
    out.push_str(&field("unmapped", &summary.unmapped.to_string()));
    out.push_str(&field("dangling", &summary.dangling.to_string()));
    for m in dangling {
        out.push_str(&format!(
            "  ! {} -> {} does not resolve\n",
            m.old_citation(),
            m.new_citation()
        ));
    }
    out
}

pub fn disclaimer() -> String {
    format!("\nDISCLAIMER: {LEGAL_DISCLAIMER}\n")
}

// ── Helpers ──

fn field(name: &str, value: &str) -> String {
    format!("  {:<14} {}\n", name, value)
}

fn shorten(title: &str) -> String {
    if title.chars().count() > MAX_TITLE {
        let head: String = title.chars().take(MAX_TITLE - 3).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openjudge_core::{Bailable, StatuteDatabase};
    use openjudge_matcher::CaseMatcher;

    #[test]
    fn card_shows_unknown_bail_distinctly() {
        let section = StatuteSection::new("IPC", "34", "Common intention", "Acts.").unwrap();
        let card = section_card(&section);
        assert!(card.starts_with("=== IPC 34 ===\nCommon intention\n"));
        assert!(card.contains("See description"));
        assert!(card.contains("see statute"));

        let card = section_card(&section.with_bailable(Bailable::No));
        assert!(card.contains("non-bailable"));
    }

    #[test]
    fn not_found_message() {
        assert_eq!(not_found(Code::Ipc, " 9999 "), "IPC section \"9999\" not found.\n");
    }

    #[test]
    fn transition_rows() {
        let db = StatuteDatabase::new();
        let row = transition_row("302", db.lookup_transition("302"));
        assert!(row.contains("IPC 302") && row.contains("BNS 103") && row.contains("[replaced]"));
        assert!(transition_row("9999", None).contains("(no mapping)"));
    }

    #[test]
    fn long_titles_shortened() {
        let long = "x".repeat(80);
        let short = shorten(&long);
        assert_eq!(short.chars().count(), MAX_TITLE);
        assert!(short.ends_with("..."));
        assert_eq!(shorten("Murder"), "Murder");
    }

    #[test]
    fn analysis_report_with_date() {
        let matcher = CaseMatcher::new();
        let analysis = matcher.analyze("The accused killed the victim.");
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let report = analysis_report(&analysis, Some(date));
        assert!(report.contains("Relevant sections (2)"));
        assert!(report.contains("IPC 302"));
        assert!(report.contains("charged under BNS 2023"));
        assert!(report.contains("Applicable: BNS 103"));
    }

    #[test]
    fn analysis_report_without_matches() {
        let matcher = CaseMatcher::new();
        let analysis = matcher.analyze("A contract dispute.");
        let report = analysis_report(&analysis, None);
        assert!(report.contains("qualified advocate"));
        assert!(!report.contains("Relevant sections"));
        assert!(!report.contains("transitions"));
    }

    #[test]
    fn summary_lists_counts() {
        let db = StatuteDatabase::new();
        let report = summary_report(&db.summary(), &db.dangling_mappings());
        assert!(report.contains("IPC sections"));
        assert!(report.contains("BNS sections"));
        assert!(!report.contains("does not resolve"));
    }
}
