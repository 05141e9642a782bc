use crate::cli::parser::{Commands, TemplateAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::event::default_color;
use crate::store::EventStore;
use crate::ui::messages::{header, info, success};
use crate::utils::date::parse_date_arg;
use crate::utils::table::{Column, Table};
use crate::utils::time::parse_time_arg;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template { action } = cmd {
        let mut store = EventStore::load(cfg.store_path())?;

        match action {
            TemplateAction::Add {
                title,
                start,
                end,
                color,
            } => {
                let tpl = store.add_template(
                    title,
                    &color.clone().unwrap_or_else(default_color),
                    parse_time_arg(start)?,
                    parse_time_arg(end)?,
                )?;
                store.save(cfg.store_path())?;
                success(format!(
                    "Template {} added: {} ({}, {})",
                    tpl.id,
                    tpl.title,
                    tpl.span_str(),
                    tpl.duration
                ));
            }

            TemplateAction::List => {
                if store.templates.is_empty() {
                    info("No templates yet. Create one to quickly add events.");
                    return Ok(());
                }

                header("Templates");
                let mut table = Table::new(vec![
                    Column {
                        header: "Key".into(),
                        width: 4,
                    },
                    Column {
                        header: "ID".into(),
                        width: 14,
                    },
                    Column {
                        header: "Title".into(),
                        width: 16,
                    },
                    Column {
                        header: "Hours".into(),
                        width: 13,
                    },
                    Column {
                        header: "Span".into(),
                        width: 6,
                    },
                ]);
                for (i, t) in store.templates.iter().enumerate() {
                    table.add_row(vec![
                        format!("[{}]", i + 1),
                        t.id.clone(),
                        t.title.clone(),
                        t.span_str(),
                        t.duration.clone(),
                    ]);
                }
                print!("{}", table.render());
            }

            TemplateAction::Del { id } => {
                let removed = store.remove_template(id)?;
                store.save(cfg.store_path())?;
                success(format!("Template {} ({}) has been deleted.", removed.id, removed.title));
            }

            TemplateAction::Apply { key, date } => {
                let day = parse_date_arg(date)?;
                let ev = store.apply_template(key, day)?;
                store.save(cfg.store_path())?;
                success(format!(
                    "Event {} added: {} ({} → {})",
                    ev.id,
                    ev.title,
                    ev.start_str(),
                    ev.end_str()
                ));
            }
        }
    }

    Ok(())
}
