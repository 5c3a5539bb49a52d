use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use polars::prelude::*;
#[cfg(feature = "parquet")]
use polars::prelude::ParquetWriter;
use tracing::info;

use crate::tables::PricingTables;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Parquet,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Parquet => "parquet",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "parquet" => Ok(ExportFormat::Parquet),
            other => Err(anyhow!(
                "unsupported export format '{other}'; use csv or parquet"
            )),
        }
    }
}

pub fn revenue_frame(tables: &PricingTables) -> Result<DataFrame> {
    let rows = &tables.revenue_by_price;
    let df = DataFrame::new(vec![
        Series::new("price", rows.iter().map(|r| r.price.value()).collect::<Vec<_>>()),
        Series::new(
            "bookings",
            rows.iter().map(|r| r.bookings as i64).collect::<Vec<_>>(),
        ),
        Series::new(
            "total_revenue",
            rows.iter()
                .map(|r| r.total_revenue.value())
                .collect::<Vec<_>>(),
        ),
    ])?;
    Ok(df)
}

pub fn comparison_frame(tables: &PricingTables) -> Result<DataFrame> {
    let rows = &tables.price_comparison;
    let df = DataFrame::new(vec![
        Series::new(
            "room_type",
            rows.iter().map(|r| r.room_type.clone()).collect::<Vec<_>>(),
        ),
        Series::new(
            "month",
            rows.iter().map(|r| r.month.to_string()).collect::<Vec<_>>(),
        ),
        Series::new(
            "current_price",
            rows.iter()
                .map(|r| r.current_price.value())
                .collect::<Vec<_>>(),
        ),
        Series::new(
            "recommended_price",
            rows.iter()
                .map(|r| r.recommended_price.value())
                .collect::<Vec<_>>(),
        ),
    ])?;
    Ok(df)
}

pub fn box_frame(tables: &PricingTables) -> Result<DataFrame> {
    let rows = &tables.box_groups;
    let price_col = |name: &str, pick: fn(&crate::boxplot::BoxGroup) -> f64| {
        Series::new(name, rows.iter().map(pick).collect::<Vec<_>>())
    };
    let df = DataFrame::new(vec![
        Series::new(
            "month",
            rows.iter().map(|r| r.month.to_string()).collect::<Vec<_>>(),
        ),
        Series::new(
            "room_type",
            rows.iter().map(|r| r.room_type.clone()).collect::<Vec<_>>(),
        ),
        Series::new(
            "count",
            rows.iter().map(|r| r.count as i64).collect::<Vec<_>>(),
        ),
        price_col("min", |r| r.min.value()),
        price_col("q1", |r| r.q1.value()),
        price_col("median", |r| r.median.value()),
        price_col("q3", |r| r.q3.value()),
        price_col("max", |r| r.max.value()),
    ])?;
    Ok(df)
}

/// Write every derived table into `out_dir`, returning the written paths.
pub fn export_tables(
    tables: &PricingTables,
    out_dir: &Path,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    let frames = [
        ("revenue_by_price", revenue_frame(tables)?),
        ("price_comparison", comparison_frame(tables)?),
        ("box_stats", box_frame(tables)?),
    ];

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let mut written = Vec::with_capacity(frames.len());
    for (name, mut df) in frames {
        let path = out_dir.join(format!("{name}.{}", format.extension()));
        write_frame_atomic(&mut df, &path, format)?;
        info!(path = %path.display(), rows = df.height(), "exported table");
        written.push(path);
    }
    Ok(written)
}

/// Write to a hidden sibling file, then rename it over `output`.
/// The sibling never survives the call.
fn write_frame_atomic(df: &mut DataFrame, output: &Path, format: ExportFormat) -> Result<()> {
    let partial = partial_path(output);
    let result = write_frame(df, &partial, format).and_then(|()| {
        fs::rename(&partial, output)
            .with_context(|| format!("moving {} to {}", partial.display(), output.display()))
    });
    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }
    result
}

fn write_frame(df: &mut DataFrame, path: &Path, format: ExportFormat) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        #[cfg(feature = "parquet")]
        ExportFormat::Parquet => ParquetWriter::new(&mut file)
            .finish(df)
            .map(|_| ())
            .context("writing Parquet file"),
        #[cfg(not(feature = "parquet"))]
        ExportFormat::Parquet => Err(anyhow!(
            "parquet support is disabled; rebuild with the 'parquet' feature"
        )),
        ExportFormat::Csv => CsvWriter::new(&mut file)
            .finish(df)
            .context("writing CSV file"),
    }
}

fn partial_path(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_string());
    output.with_file_name(format!(".{name}.partial"))
}
