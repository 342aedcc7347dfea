use anyhow::Result;
use owo_colors::OwoColorize;
use uurrooster_core::EventStore;
use uurrooster_core::config::StoreConfig;

use crate::render::{Render, format_day};

pub async fn run(config: StoreConfig) -> Result<()> {
    let mut store = EventStore::new(config);

    // A failed load leaves an empty schedule; the error is already logged.
    let _ = store.load_data().await;

    if store.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let mut current_day: Option<String> = None;

    for event in store.events() {
        let day = format_day(&event.start_date_time);

        if current_day.as_ref() != Some(&day) {
            if current_day.is_some() {
                println!();
            }
            println!("{}", day.bold());
            current_day = Some(day);
        }

        println!("  {}", event.render());
    }

    Ok(())
}
