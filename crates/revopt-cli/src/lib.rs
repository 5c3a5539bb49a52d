pub mod cli;
pub mod config;
pub mod explore;
pub mod panel;
pub mod session;
pub mod slider;

pub use cli::{build_cli_command, Cli, Commands, OutputFormat};
pub use config::{load_config, RevoptConfig};
pub use panel::{Panel, PanelView};
pub use session::{Overrides, Session};
pub use slider::Slider;
