use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This writes the configuration file with default values, plus the
/// `--data` / `--media` overrides given on the command line.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::default();
    if let Some(data) = &cli.data {
        cfg.data_path = data.clone();
    }
    if let Some(media) = &cli.media {
        cfg.media_path = media.clone();
    }

    info("Initializing rJournalView…");
    let path = cfg.init_all(cli.test)?;

    println!("📄 Config file : {}", path.display());
    println!("📖 Journal data: {}", cfg.data_path);
    println!("🖼  Media path  : {}", cfg.media_path);

    if !cfg.data_file().exists() {
        info("No export found yet at the data path; run the journal exporter first.");
    }

    success("rJournalView initialization completed!");
    Ok(())
}
