use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use uurrooster_core::EventStore;
use uurrooster_core::config::StoreConfig;

use crate::render::{ALL_DAY_MARKER, format_date, format_date_time};

pub async fn run(config: StoreConfig, id: &str) -> Result<()> {
    let mut store = EventStore::new(config);
    store
        .load_data()
        .await
        .with_context(|| format!("Failed to load {}", store.config().fixture()))?;

    let Some(event) = store.get_event(id) else {
        anyhow::bail!("Event '{}' not found", id);
    };

    println!("{}", event.title.bold());
    if !event.location.is_empty() {
        println!("{}", event.location);
    }

    if event.all_day {
        println!("{}  {}", ALL_DAY_MARKER, format_date(&event.start_date_time));
    } else {
        println!("Start  {}", format_date_time(&event.start_date_time));
        println!("Einde  {}", format_date_time(&event.end_date_time));
    }
    println!("{}", format!("[{}]", event.event_type.label()).dimmed());

    Ok(())
}
