mod cli;
mod display;
mod logging;
mod output;

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use openjudge_matcher::CaseMatcher;
use serde::Serialize;

use crate::cli::{Cli, Command, OutputFormat};
use crate::output::{AnalyzeOutput, Charging, CheckOutput, LookupOutput, MapRow, SectionsOutput};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level, cli.log_format)?;
    tracing::debug!("openjudge v{}", env!("CARGO_PKG_VERSION"));

    let matcher = CaseMatcher::new();
    print!("{}", render(&cli.command, &matcher, cli.output)?);

    if let Command::Check = cli.command {
        let dangling = matcher.database().dangling_mappings().len();
        if dangling > 0 {
            anyhow::bail!("{dangling} transition mappings do not resolve");
        }
    }

    Ok(())
}

/// Everything a command writes to stdout.
fn render(
    command: &Command,
    matcher: &CaseMatcher,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let db = matcher.database();
    let json = format == OutputFormat::Json;

    let out = match command {
        Command::Lookup { code, section } => {
            let found = db.lookup_section(*code, section);
            if json {
                to_json(&LookupOutput::new(*code, section, found))?
            } else {
                let body = match found {
                    Some(s) => display::section_card(s),
                    None => display::not_found(*code, section),
                };
                body + &display::disclaimer()
            }
        }
        Command::Map { sections } => {
            let rows: Vec<MapRow> = sections
                .iter()
                .map(|s| MapRow {
                    section: s.trim(),
                    mapping: db.lookup_transition(s),
                })
                .collect();
            if json {
                to_json(&rows)?
            } else {
                rows.iter()
                    .map(|row| display::transition_row(row.section, row.mapping))
                    .collect::<String>()
            }
        }
        Command::Sections { code, sorted } => {
            let sections: Vec<_> = if *sorted {
                db.sections_in_document_order(*code)
            } else {
                db.all_sections(*code).iter().collect()
            };
            if json {
                to_json(&SectionsOutput::new(*code, &sections))?
            } else {
                display::section_list(*code, &sections) + &display::disclaimer()
            }
        }
        Command::Analyze { text, offence_date } => {
            let offence_date = *offence_date;
            let text = read_text(text)?;
            let analysis = matcher.analyze(&text);
            if json {
                to_json(&AnalyzeOutput {
                    analysis: &analysis,
                    charging: offence_date.map(|d| Charging::new(&analysis, d)),
                })?
            } else {
                display::analysis_report(&analysis, offence_date) + &display::disclaimer()
            }
        }
        Command::Check => {
            let summary = db.summary();
            let dangling = db.dangling_mappings();
            if json {
                to_json(&CheckOutput {
                    summary: &summary,
                    dangling_mappings: &dangling,
                })?
            } else {
                display::summary_report(&summary, &dangling)
            }
        }
    };

    Ok(out)
}

/// Join positional words, or read stdin when given a single "-".
fn read_text(words: &[String]) -> anyhow::Result<String> {
    if let [only] = words
        && only == "-"
    {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading case description from stdin")?;
        return Ok(buf);
    }
    Ok(words.join(" "))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let out = serde_json::to_string_pretty(value).context("serialising output")?;
    Ok(out + "\n")
}
