use crate::cli::commands::build_scope;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DisplaySettings;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::EntryStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        view,
        format,
        file,
        period,
        force,
    } = cmd
    {
        let store = EntryStore::open(&cfg.data_file())?;
        let scope = build_scope(period, &None, &None, false)?;
        let settings = DisplaySettings::from(cfg);

        ExportLogic::export(&store, &scope, &settings, *view, *format, file, *force)?;
    }
    Ok(())
}
