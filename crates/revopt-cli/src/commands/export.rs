use std::path::Path;

use anyhow::{Context, Result};
use revopt_agg::{export_tables, ExportFormat};
use revopt_cli::Session;
use tracing::info;

pub fn handle(session: &Session, out_dir: &Path, format: &str) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    info!("Exporting tables to {}", out_dir.display());
    let written = export_tables(&session.tables, out_dir, format)
        .with_context(|| format!("exporting tables to {}", out_dir.display()))?;
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
