use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::event::{NewEvent, default_color};
use crate::store::EventStore;
use crate::ui::messages::{success, warning};
use crate::utils::time::parse_datetime;

/// Add an event manually.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        start,
        end,
        color,
    } = cmd
    {
        let start = parse_datetime(start)?;
        // day-off markers usually carry no real end
        let end = match end {
            Some(e) => parse_datetime(e)?,
            None => start,
        };

        if end < start {
            warning("End is before start: the event will report a negative duration.");
        }

        let mut store = EventStore::load(cfg.store_path())?;
        let ev = store.add_event(NewEvent {
            title: title.clone(),
            start,
            end,
            color: color.clone().unwrap_or_else(default_color),
        });
        store.save(cfg.store_path())?;

        let tags = ev.tags();
        if tags.is_empty() {
            warning(format!(
                "Title '{}' carries no report tag (n, u, p, d, t, w): \
                 it will not appear in reports.",
                ev.title
            ));
        }

        success(format!(
            "Event {} added: {} ({} → {}) [{}]",
            ev.id,
            ev.title,
            ev.start_str(),
            ev.end_str(),
            tags.letters()
        ));
    }

    Ok(())
}
