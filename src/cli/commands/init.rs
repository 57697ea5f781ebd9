use crate::cli::commands::open_store;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    // Create the record table right away so the first `list` works.
    open_store(cfg)?;

    success("artrack initialized.");
    Ok(())
}
