use anyhow::Result;
use revopt_cli::{OutputFormat, Session};
use revopt_core::{MonthBucket, Price};
use revopt_viz::render_simulation;
use tracing::info;

use super::print_json;

/// One-shot simulation. An explicit `--price` is used as given; the slider
/// bounds only apply to the interactive panel.
pub fn handle(
    session: &Session,
    room: &str,
    month: &str,
    price: Option<f64>,
    format: OutputFormat,
) -> Result<()> {
    let mut panel = session.panel()?;
    panel.select_room(room)?;
    panel.select_month(month.parse::<MonthBucket>()?)?;

    let proposed = match price {
        Some(value) => Price(value),
        None => panel.recommended_price()?,
    };
    info!("Simulating {room} / {month} at {proposed}");
    let summary = panel.simulation_at(proposed)?;
    match format {
        OutputFormat::Plain => print!("{}", render_simulation(&summary)),
        OutputFormat::Json => print_json(&summary)?,
    }
    Ok(())
}
