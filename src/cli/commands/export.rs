use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        kind,
        from,
        to,
        format,
        file,
        force,
    } = cmd
    {
        let (report, range) = Core::build_report(cfg, *kind, from, to)?;
        info(format!(
            "Exporting {} report for {} as {}",
            kind.as_str(),
            range.label(),
            format.as_str()
        ));
        ExportLogic::export(&report, &range, *format, file, *force, &cfg.header_lines)?;
    }
    Ok(())
}
