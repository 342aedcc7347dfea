use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use uurrooster_core::config::StoreConfig;

pub async fn run(config: StoreConfig) -> Result<()> {
    let fixture = config.fixture();
    let events = fixture
        .load_events()
        .await
        .with_context(|| format!("Invalid fixture {}", fixture))?;

    let timed_backwards = events
        .iter()
        .filter(|e| !e.all_day && e.end_date_time < e.start_date_time)
        .count();

    println!(
        "{} {} events in {}",
        "✓".green(),
        events.len(),
        fixture
    );

    if timed_backwards > 0 {
        println!(
            "{}",
            format!("  {timed_backwards} timed events end before they start").yellow()
        );
    }

    Ok(())
}
