use crate::cli::commands::open_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::projection::{
    build_calendar_index, build_map_index, build_media_index, group_by_month,
};
use crate::errors::AppResult;
use crate::store::EntryFilter;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::collections::BTreeMap;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = open_session(cli, cfg, EntryFilter::default())?;
    let store = session.store();
    let entries = store.entries();

    let dated = entries.iter().filter(|e| e.creation_date.is_some()).count();
    let months = group_by_month(entries).len();
    let calendar = build_calendar_index(entries);
    let media = build_media_index(entries);
    let mapped = build_map_index(entries).len();

    let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
    for item in &media {
        *by_type.entry(item.media_type).or_default() += 1;
    }

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        cfg.data_file().display(),
        RESET
    );
    println!(
        "{}• Exported:{} {}",
        CYAN,
        RESET,
        store.export_date().unwrap_or("-")
    );
    println!(
        "{}• Journals:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        store.journals().len(),
        RESET
    );
    println!(
        "{}• Entries:{} {}{}{} ({} dated, {}{}{} undated)",
        CYAN,
        RESET,
        GREEN,
        store.len(),
        RESET,
        dated,
        GREY,
        store.len() - dated,
        RESET
    );
    println!("{}• Timeline groups:{} {}", CYAN, RESET, months);
    println!("{}• Calendar months:{} {}", CYAN, RESET, calendar.len());

    let types = by_type
        .iter()
        .map(|(t, n)| format!("{t}={n}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("{}• Media items:{} {} {}", CYAN, RESET, media.len(), types);
    println!("{}• With location:{} {}", CYAN, RESET, mapped);

    Ok(())
}
