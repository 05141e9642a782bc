use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty event store
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rTimesheet…");

    let cfg = Config::init_all(cli.store.clone(), cli.test)?;

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Event store : {}", cfg.store);
    println!("🎉 rTimesheet initialization completed!");
    Ok(())
}
