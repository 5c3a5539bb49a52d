use anyhow::Result;
use revopt_cli::{OutputFormat, Session};
use revopt_viz::render_dashboard;
use tracing::info;

use super::{apply_selection, print_json};

pub fn handle(
    session: &Session,
    room: Option<&str>,
    month: Option<&str>,
    price: Option<f64>,
    width: usize,
    format: OutputFormat,
) -> Result<()> {
    let mut panel = session.panel()?;
    apply_selection(&mut panel, room, month, price)?;
    info!(
        "Rendering dashboard for {} / {} at {}",
        panel.room(),
        panel.month(),
        panel.price()
    );
    let dashboard = panel.dashboard()?;
    match format {
        OutputFormat::Plain => print!("{}", render_dashboard(&dashboard, width)),
        OutputFormat::Json => print_json(&dashboard)?,
    }
    Ok(())
}
