use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit::audit;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::open_store;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        project,
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        ExportLogic::export(store.as_ref(), project.as_deref(), format.clone(), file, *force)?;

        let _ = audit(
            Path::new(&cfg.data_dir),
            "export",
            file,
            &format!(
                "Exported {} as {}",
                project.as_deref().unwrap_or("all projects"),
                format.as_str()
            ),
        );
    }
    Ok(())
}
