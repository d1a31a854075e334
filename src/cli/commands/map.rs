use crate::cli::commands::{build_scope, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::View;
use crate::ui::messages::info;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Map { period } = &cli.command {
        let scope = build_scope(period, &None, &None, false)?;
        let mut session = open_session(cli, cfg, scope)?;
        session.activate(View::Map)?;

        if session.map().fit_count() == 0 {
            let (lat, lon) = session.settings().default_center;
            info(format!(
                "No entries with location; map stays at {lat:.4}, {lon:.4} (zoom {})",
                session.settings().default_zoom
            ));
        }
    }
    Ok(())
}
