//! Reading and writing rosters as JSON Lines.

use crate::person::Person;
use std::io::{self, BufRead, Write};

/// Reads a roster, one JSON object per line. Blank lines are skipped.
///
/// A malformed line maps to an `InvalidData` error naming the 1-based line
/// number, so the caller can point at the offending record.
pub fn read_roster(reader: impl BufRead) -> io::Result<Vec<Person>> {
    let mut roster = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let person: Person = serde_json::from_str(trimmed).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {e}", idx + 1),
            )
        })?;
        roster.push(person);
    }
    Ok(roster)
}

/// Writes a single record as JSON, newline-terminated.
pub fn write_person(mut writer: impl Write, person: &Person, pretty: bool) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, person)?;
    } else {
        serde_json::to_writer(&mut writer, person)?;
    }
    writeln!(writer)
}
