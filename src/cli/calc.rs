//! CLI `calc` command: offline statistics for any birth date.

use anyhow::Result;
use chrono::Utc;

use momento::model::profile::{parse_birth_date, parse_life_expectancy};
use momento::mortality::compute_stats;

pub fn calc(birth_date: &str, life_expectancy: &str) -> Result<()> {
    let now = Utc::now();
    let birth_date = parse_birth_date(birth_date, now.date_naive())?;
    let years = parse_life_expectancy(life_expectancy)?;

    let stats = compute_stats(birth_date, years, now);

    println!("Born {birth_date}, expecting {years} years");
    println!("{}", "=".repeat(40));
    super::print_stats(&stats);
    Ok(())
}
