//! Prints where every body of a JSON body table is, once a day for a year,
//! followed by the orbit path of each body on the first day.
//!
//! Usage: `cargo run --example solar_system --features serde [TABLE.json] [YYYY-MM-DD]`

use std::io::{self, Write};

use hifitime::Epoch;
use orrery::{BodyTable, Date};

const DEFAULT_TABLE: &str = include_str!("celestial_body.json");
const DAYS: usize = 365;
const PATH_RESOLUTION: usize = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let table = match args.next() {
        Some(path) => BodyTable::from_json_str(&std::fs::read_to_string(path)?)?,
        None => BodyTable::from_json_str(DEFAULT_TABLE)?,
    };
    let start = match args.next() {
        Some(date) => parse_date(&date)?,
        None => Date::new(2024, 1, 1)?,
    };

    describe_table(&table);

    let mut lock = io::stdout().lock();

    eprintln!("Computing {DAYS} days from {start}...");
    for date in start.days(DAYS) {
        writeln!(&mut lock, "=== {date} (day {}) ===", date.ordinal())?;
        for (id, position) in table.positions_at(date)? {
            let name = table.get(id).map_or("?", |body| body.name());
            writeln!(
                &mut lock,
                "{name:>10}: {:>10.3} {:>10.3} {:>10.3}",
                position.x, position.y, position.z
            )?;
        }
    }

    for (_, body) in table.iter().filter(|(_, body)| body.elements().is_some()) {
        writeln!(&mut lock, "=== Orbit of {} on {start} ===", body.name())?;
        for point in table.orbit_path(body.name(), start, PATH_RESOLUTION)? {
            writeln!(&mut lock, "{:.3} {:.3} {:.3}", point.x, point.y, point.z)?;
        }
    }

    Ok(())
}

fn parse_date(text: &str) -> Result<Date, Box<dyn std::error::Error>> {
    let epoch: Epoch = text.parse()?;
    Ok(Date::from_epoch(epoch)?)
}

fn describe_table(table: &BodyTable) {
    eprintln!("{table}");
    for (id, body) in table.iter() {
        let parent = table
            .parent_of(id)
            .and_then(|parent| table.get(parent))
            .map_or("(none)", |parent| parent.name());
        match body.elements() {
            Some(elements) => eprintln!(
                "{}: orbits {parent}, a = {}, e = {}, period = {:.1} days",
                body.name(),
                elements.semi_major_axis(),
                elements.eccentricity(),
                elements.orbital_period()
            ),
            None => eprintln!("{}: fixed at the origin", body.name()),
        }
    }
}
