//! Tabular views of the derived tables and the selector options.

use std::io::{self, Write};

use anyhow::{bail, Result};
use revopt_agg::{months_for_room, room_types, PriceComparisonRow};
use revopt_cli::{OutputFormat, Session};
use revopt_core::group_thousands;
use tabwriter::TabWriter;

use super::print_json;

pub fn handle_revenue(session: &Session, format: OutputFormat) -> Result<()> {
    let rows = &session.tables.revenue_by_price;
    if format == OutputFormat::Json {
        return print_json(rows);
    }
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "PRICE\tBOOKINGS\tTOTAL REVENUE")?;
    for row in rows {
        writeln!(
            writer,
            "{}\t{}\t{}",
            group_thousands(row.price.value()),
            row.bookings,
            group_thousands(row.total_revenue.value())
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn handle_compare(
    session: &Session,
    room: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let rows: Vec<&PriceComparisonRow> = match room {
        Some(room) => {
            if !session.bookings.iter().any(|b| b.room_type == room) {
                bail!("unknown room type '{room}'");
            }
            session.tables.comparison_for_room(room).collect()
        }
        None => session.tables.price_comparison.iter().collect(),
    };
    if format == OutputFormat::Json {
        return print_json(&rows);
    }
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "ROOM TYPE\tMONTH\tCURRENT PRICE\tRECOMMENDED PRICE")?;
    for row in rows {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            row.room_type,
            row.month,
            group_thousands(row.current_price.value()),
            group_thousands(row.recommended_price.value())
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn handle_rooms(session: &Session) -> Result<()> {
    for room in room_types(&session.bookings) {
        println!("{room}");
    }
    Ok(())
}

pub fn handle_months(session: &Session, room: &str) -> Result<()> {
    let months = months_for_room(&session.bookings, room);
    if months.is_empty() {
        bail!("unknown room type '{room}'");
    }
    for month in months {
        println!("{month}");
    }
    Ok(())
}
