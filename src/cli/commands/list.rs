use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::store::EventStore;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let store = EventStore::load(cfg.store_path())?;

        let (events, label) = if *now {
            let today = date::today();
            (store.events_on(today), today.format("%d.%m.%Y").to_string())
        } else if let Some(p) = period {
            let (first, last) = date::period_bounds(p)?;
            (store.events_between(first, last), p.clone())
        } else {
            let today = date::today();
            (store.events_in_month(today)?, today.format("%m.%Y").to_string())
        };

        if events.is_empty() {
            info(format!("No events for {}", label));
            return Ok(());
        }

        header(format!("Events for {}", label));
        print!("{}", events_table(&events).render());
    }
    Ok(())
}

fn events_table(events: &[&Event]) -> Table {
    let mut table = Table::new(vec![
        Column {
            header: "ID".into(),
            width: events.iter().map(|e| e.id.len()).max().unwrap_or(2).max(2),
        },
        Column {
            header: "Title".into(),
            width: events
                .iter()
                .map(|e| e.title.chars().count())
                .max()
                .unwrap_or(5)
                .max(5),
        },
        Column {
            header: "Start".into(),
            width: 16,
        },
        Column {
            header: "End".into(),
            width: 16,
        },
        Column {
            header: "Tags".into(),
            width: 6,
        },
    ]);

    for e in events {
        table.add_row(vec![
            e.id.clone(),
            e.title.clone(),
            e.start_str(),
            e.end_str(),
            e.tags().letters(),
        ]);
    }

    table
}
