use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::audit::audit;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the data directory holding the per-project tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.data_dir {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    let data_dir = if let Some(custom) = &cli.data_dir {
        custom.clone()
    } else {
        cfg.data_dir.clone()
    };

    println!("⚙️  Initializing kpitracker…");
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Data dir   : {}", &data_dir);

    let _ = audit(Path::new(&data_dir), "init", &data_dir, "Workspace initialized");

    Ok(())
}
