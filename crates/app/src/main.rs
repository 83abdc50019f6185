use anyhow::{Context, Result};

use pantry_app::config::Settings;
use pantry_app::demo;

fn main() -> Result<()> {
    let settings = Settings::from_env()?;
    pantry_observability::init(settings.log_format);

    let storage = demo::storage().context("failed to build storage inventory")?;
    tracing::info!(titles = storage.len(), "storage inventory built");
    println!("{}", serde_json::to_string_pretty(&storage)?);

    let goods = demo::goods().context("failed to build goods from notes")?;
    tracing::info!(titles = goods.len(), "goods inventory built");
    println!("{}", serde_json::to_string_pretty(&goods)?);

    let today = settings.today();
    let report = demo::report(&goods, today, settings.advance_days);
    tracing::info!(
        %today,
        advance_days = settings.advance_days,
        expiring = report.expiring.len(),
        "walkthrough finished"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
