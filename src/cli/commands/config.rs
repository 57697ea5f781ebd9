use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        let file = Config::config_file();

        if *path {
            println!("{}", file.display());
            return Ok(());
        }

        if *print_config {
            if !file.exists() {
                return Err(AppError::Config(format!(
                    "no configuration file at {} (run `artrack init` first)",
                    file.display()
                )));
            }
            let content = fs::read_to_string(&file)?;
            print!("{content}");
        }
    }

    Ok(())
}
