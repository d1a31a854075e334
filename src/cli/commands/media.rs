use crate::cli::commands::{build_scope, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{MediaFilter, View};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Media { filter, period } = &cli.command {
        let scope = build_scope(period, &None, &None, false)?;
        let mut session = open_session(cli, cfg, scope)?;

        // filter first, so the gallery is drawn once
        session.set_media_filter(MediaFilter::parse(filter))?;
        session.activate(View::Media)?;
    }
    Ok(())
}
