use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::SurfaceClass;
use crate::store::EntryFilter;
use crate::ui::messages::{info, warning};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { uuid } = &cli.command {
        let mut session = open_session(cli, cfg, EntryFilter::default())?;

        if let Some(id) = uuid
            && !session.select(id)?
        {
            warning(format!("No entry with id '{id}'"));
            return Ok(());
        }

        match session.surface_class() {
            // the overlay was already printed by the selection
            SurfaceClass::Narrow => {
                if uuid.is_none() {
                    info("Pass an entry id to open it on a narrow surface.");
                }
            }
            SurfaceClass::Wide => {
                if !session.surface_mut().print_panel()? {
                    info("No entries to show.");
                }
            }
        }
    }
    Ok(())
}
