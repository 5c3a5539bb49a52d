pub mod completions;
pub mod config;
pub mod dashboard;
pub mod explore;
pub mod export;
pub mod simulate;
pub mod tables;

use std::io;

use anyhow::Result;
use revopt_cli::Panel;
use revopt_core::{MonthBucket, Price};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(io::stdout(), value)
        .map_err(|err| anyhow::anyhow!("serializing output to JSON: {err}"))?;
    println!();
    Ok(())
}

/// Apply optional room / month / price choices on top of the panel defaults.
pub fn apply_selection(
    panel: &mut Panel<'_>,
    room: Option<&str>,
    month: Option<&str>,
    price: Option<f64>,
) -> Result<()> {
    if let Some(room) = room {
        panel.select_room(room)?;
    }
    if let Some(month) = month {
        panel.select_month(month.parse::<MonthBucket>()?)?;
    }
    if let Some(price) = price {
        panel.set_price(Price(price))?;
    }
    Ok(())
}
