use std::io;

use anyhow::Result;
use revopt_cli::explore::run_explore;
use revopt_cli::Session;

pub fn handle(session: &Session, width: usize) -> Result<()> {
    let mut panel = session.panel()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_explore(&mut panel, stdin.lock(), &mut stdout, width)
}
