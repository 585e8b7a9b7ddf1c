use anyhow::{Context, Result};

use momento::api::Backend;
use momento::config::MomentoConfig;

/// Print today's quote.
pub async fn quote(config: &MomentoConfig) -> Result<()> {
    let client = super::client(config)?;
    let quote = client
        .daily_quote()
        .await
        .context("could not fetch today's quote")?;

    println!("{}", quote.attributed());
    if let Some(category) = quote.category.as_deref().filter(|c| !c.is_empty()) {
        println!("  ({category})");
    }
    Ok(())
}
