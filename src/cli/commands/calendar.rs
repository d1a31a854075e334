use crate::cli::commands::{build_scope, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::View;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { period } = &cli.command {
        let scope = build_scope(period, &None, &None, false)?;
        let mut session = open_session(cli, cfg, scope)?;
        session.activate(View::Calendar)?;
    }
    Ok(())
}
