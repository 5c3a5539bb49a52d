use std::path::PathBuf;

use anyhow::{Context, Result};
use revopt_agg::PricingTables;
use revopt_core::{Booking, DemandModel};
use revopt_io::{load_bookings, NormalizeOptions, NormalizeReport};
use tracing::{info, warn};

use crate::config::RevoptConfig;
use crate::panel::Panel;
use crate::slider::Slider;

/// Flag values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data: Option<PathBuf>,
    pub elasticity: Option<f64>,
    pub skip_invalid_rows: bool,
}

impl Overrides {
    pub fn apply(&self, mut config: RevoptConfig) -> Result<RevoptConfig> {
        if let Some(path) = &self.data {
            config.data.path = path.clone();
        }
        if let Some(elasticity) = self.elasticity {
            config.simulation.elasticity = elasticity;
        }
        config.validate()?;
        Ok(config)
    }
}

/// The dataset loaded once per run, plus everything derived from it.
///
/// Read-only after construction; every render reads from it.
#[derive(Debug)]
pub struct Session {
    pub config: RevoptConfig,
    pub bookings: Vec<Booking>,
    pub report: NormalizeReport,
    pub tables: PricingTables,
    pub model: DemandModel,
}

impl Session {
    pub fn load(config: RevoptConfig, skip_invalid_rows: bool) -> Result<Self> {
        let path = config.data.path.clone();
        info!("Loading bookings from {}", path.display());
        let options = NormalizeOptions { skip_invalid_rows };
        let data = load_bookings(&path, &options)
            .with_context(|| format!("loading bookings from {}", path.display()))?;
        Self::from_bookings(config, data.bookings, data.report)
    }

    pub fn from_bookings(
        config: RevoptConfig,
        bookings: Vec<Booking>,
        report: NormalizeReport,
    ) -> Result<Self> {
        if report.rejected > 0 {
            warn!("Loaded with issues: {}", report.diagnostics.summary());
            for issue in report.diagnostics.rejected() {
                warn!("{issue}");
            }
        }
        let model = config.demand_model()?;
        let tables = PricingTables::build(&bookings);
        Ok(Self {
            config,
            bookings,
            report,
            tables,
            model,
        })
    }

    pub fn slider(&self) -> Slider {
        self.config.slider()
    }

    pub fn panel(&self) -> Result<Panel<'_>> {
        Ok(Panel::new(
            &self.bookings,
            &self.tables,
            self.model,
            self.slider(),
        )?)
    }
}
