pub mod calendar;
pub mod config;
pub mod export;
pub mod init;
pub mod map;
pub mod media;
pub mod show;
pub mod stats;
pub mod timeline;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{DisplaySettings, Session};
use crate::errors::AppResult;
use crate::models::SurfaceClass;
use crate::render::{TerminalMap, TerminalSurface};
use crate::store::EntryFilter;
use crate::utils::period::parse_period;
use std::io::{self, Stdout};

pub type TerminalSession = Session<TerminalSurface<Stdout>, TerminalMap<Stdout>>;

/// Surface class requested on the command line, or the configured one.
pub(crate) fn surface_class(cli: &Cli, cfg: &Config) -> SurfaceClass {
    if cli.narrow {
        SurfaceClass::Narrow
    } else {
        cfg.surface
    }
}

/// Load the export and start a terminal session scoped to `scope`.
pub(crate) fn open_session(cli: &Cli, cfg: &Config, scope: EntryFilter) -> AppResult<TerminalSession> {
    let mut surface = TerminalSurface::new(io::stdout(), &cfg.title);
    if let Some(w) = cli.width {
        surface = surface.with_width(w);
    }
    let map = TerminalMap::new(io::stdout(), &cfg.map);

    let mut session = Session::open(
        &cfg.data_file(),
        DisplaySettings::from(cfg),
        surface_class(cli, cfg),
        surface,
        map,
    )?
    .with_scope(scope);

    session.start()?;
    Ok(session)
}

/// Entry filter from the common command options.
pub(crate) fn build_scope(
    period: &Option<String>,
    tag: &Option<String>,
    journal: &Option<String>,
    starred: bool,
) -> AppResult<EntryFilter> {
    let period = period.as_deref().map(parse_period).transpose()?;

    Ok(EntryFilter {
        period,
        tag: tag.clone(),
        journal: journal.clone(),
        starred_only: starred,
    })
}
