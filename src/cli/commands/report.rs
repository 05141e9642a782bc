use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::model::ReportDocument;
use crate::export::report_to_tables;
use crate::ui::messages::header;
use crate::utils::table::Table;

/// Print a report to the terminal.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        kind,
        from,
        to,
        json,
        plain,
    } = cmd
    {
        let (report, range) = Core::build_report(cfg, *kind, from, to)?;

        if *json {
            let doc = ReportDocument::new(&report, &range);
            println!("{}", serde_json::to_string_pretty(&doc)?);
            return Ok(());
        }

        header(format!("{} {}", kind.title(), range.label()));

        for table in report_to_tables(&report) {
            println!("{}", table.title);
            let t = Table::from_report_table(&table);
            if *plain {
                println!("{}", t.render());
            } else {
                println!("{}", t.render_colored());
            }
        }
    }

    Ok(())
}
