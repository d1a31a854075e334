use crate::cli::commands::{build_scope, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::View;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Timeline {
        period,
        tag,
        journal,
        starred,
    } = &cli.command
    {
        let scope = build_scope(period, tag, journal, *starred)?;
        let mut session = open_session(cli, cfg, scope)?;
        session.activate(View::Timeline)?;
    }
    Ok(())
}
