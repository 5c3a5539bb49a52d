//! Line-driven version of the interactive panel.
//!
//! Each accepted command changes one selection and re-renders the
//! comparison chart and the simulation block.

use std::io::{BufRead, Write};

use anyhow::Result;
use revopt_core::{MonthBucket, Price};
use revopt_viz::{render_bars, render_simulation};

use crate::panel::Panel;

const HELP: &str = "\
commands:
  rooms               list room types
  months              list months for the current room
  room <name>         select a room type
  month <YYYY-MM>     select a month
  price <amount>      move the price slider
  show                render the current selection
  help                this text
  quit                leave
";

#[derive(Debug, PartialEq)]
enum Action {
    Rooms,
    Months,
    Room(String),
    Month(String),
    Price(String),
    Show,
    Help,
    Quit,
    Unknown(String),
}

fn parse_action(line: &str) -> Option<Action> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    Some(match word.to_ascii_lowercase().as_str() {
        "rooms" => Action::Rooms,
        "months" => Action::Months,
        "room" => Action::Room(rest.to_string()),
        "month" => Action::Month(rest.to_string()),
        "price" => Action::Price(rest.to_string()),
        "show" => Action::Show,
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        other => Action::Unknown(other.to_string()),
    })
}

fn render<W: Write>(panel: &Panel<'_>, out: &mut W, width: usize) -> Result<()> {
    let view = panel.render()?;
    write!(out, "{}", render_bars(&view.comparison, width))?;
    write!(out, "{}", render_simulation(&view.simulation))?;
    Ok(())
}

fn apply<W: Write>(
    panel: &mut Panel<'_>,
    action: Action,
    out: &mut W,
    width: usize,
) -> Result<()> {
    match action {
        Action::Rooms => writeln!(out, "{}", panel.rooms().join("\n"))?,
        Action::Months => {
            for month in panel.months() {
                writeln!(out, "{month}")?;
            }
        }
        Action::Room(name) => {
            panel.select_room(&name)?;
            render(panel, out, width)?;
        }
        Action::Month(raw) => {
            let month: MonthBucket = raw.parse()?;
            panel.select_month(month)?;
            render(panel, out, width)?;
        }
        Action::Price(raw) => {
            let value: f64 = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("'{raw}' is not a price"))?;
            panel.set_price(Price(value))?;
            render(panel, out, width)?;
        }
        Action::Show => render(panel, out, width)?,
        Action::Help => write!(out, "{HELP}")?,
        Action::Unknown(word) => writeln!(out, "unknown command '{word}'; type help")?,
        Action::Quit => {}
    }
    Ok(())
}

/// Read commands from `input` until EOF or `quit`.
///
/// A bad command prints `error: ...` and leaves the selection unchanged.
pub fn run_explore<R: BufRead, W: Write>(
    panel: &mut Panel<'_>,
    input: R,
    out: &mut W,
    width: usize,
) -> Result<()> {
    render(panel, out, width)?;
    for line in input.lines() {
        let Some(action) = parse_action(&line?) else {
            continue;
        };
        if action == Action::Quit {
            break;
        }
        if let Err(err) = apply(panel, action, out, width) {
            writeln!(out, "error: {err:#}")?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::Slider;
    use chrono::NaiveDate;
    use revopt_agg::PricingTables;
    use revopt_core::{Booking, DemandModel};

    fn booking(price: f64, room: &str, m: u32) -> Booking {
        let check_in = NaiveDate::from_ymd_opt(2024, m, 2).unwrap();
        Booking::new(
            Price(price),
            check_in.and_hms_opt(8, 0, 0).unwrap(),
            check_in,
            room,
        )
    }

    fn run(script: &str) -> String {
        let bookings = vec![
            booking(1000.0, "Deluxe", 1),
            booking(1200.0, "Deluxe", 1),
            booking(1400.0, "Deluxe", 1),
            booking(3000.0, "Suite", 2),
        ];
        let tables = PricingTables::build(&bookings);
        let mut panel =
            Panel::new(&bookings, &tables, DemandModel::default(), Slider::default()).unwrap();
        let mut out = Vec::new();
        run_explore(&mut panel, script.as_bytes(), &mut out, 30).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_words_and_arguments() {
        assert_eq!(parse_action("  "), None);
        assert_eq!(
            parse_action("room  Junior Suite "),
            Some(Action::Room("Junior Suite".into()))
        );
        assert_eq!(parse_action("EXIT"), Some(Action::Quit));
        assert_eq!(parse_action("fly"), Some(Action::Unknown("fly".into())));
    }

    #[test]
    fn initial_render_uses_recommended_price() {
        let out = run("");
        assert!(out.contains("Current vs Recommended Price: Deluxe"));
        assert!(out.contains("Predicted bookings:  3"));
        assert!(out.contains("Predicted revenue:   THB 3,600.00"));
    }

    #[test]
    fn price_and_room_changes_re_render() {
        let out = run("price 2400\nroom Suite\nquit\nprice 900\n");
        assert!(out.contains("Simulation: Deluxe / 2024-01 at THB 2,400.00"));
        assert!(out.contains("Current vs Recommended Price: Suite"));
        assert!(out.contains("Simulation: Suite / 2024-02 at THB 3,000.00"));
        assert!(!out.contains("THB 900.00"));
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let out = run("room Penthouse\nmonth 2024-02\nprice cheap\nprice nan\nmonths\n");
        assert!(out.contains("error: Validation error: unknown room type 'Penthouse'"));
        assert!(out.contains("error: no recommended price for room 'Deluxe' in 2024-02"));
        assert!(out.contains("error: 'cheap' is not a price"));
        assert!(out.contains("error: Validation error: price must be a finite number, got NaN"));
        assert!(out.trim_end().ends_with("2024-01"));
    }
}
