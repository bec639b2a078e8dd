use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit::LogLogic;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        LogLogic::print_log(Path::new(&cfg.data_dir))?;
    }

    Ok(())
}
