//! Reading station names from interactive input.

use std::io::{self, BufRead, Write};

/// Write the usage prompt shown before reading stations.
pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Enter station names separated by spaces or newlines; the number of stations must be even."
    )?;
    writeln!(
        out,
        "Stations are read in pairs: the first of each pair is the start, the second the destination."
    )?;
    writeln!(out, "Press Enter on an empty line to start the query.")?;
    writeln!(out)?;
    writeln!(out, "Input:")?;
    out.flush()
}

/// Read whitespace-separated station names until a blank line or EOF.
pub fn read_stations<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut stations = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        stations.extend(line.split_whitespace().map(str::to_string));
    }

    Ok(stations)
}
