//! Rendering plane lists for the terminal.

use std::fmt::Write as _;
use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::plane::PlaneList;
use crate::storage;

/// Printed instead of a table when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "List of planes is empty";

const NO_WIDTH: usize = 4;
const DESTINATION_WIDTH: usize = 30;
const NUM_WIDTH: usize = 20;
const TYPE_WIDTH: usize = 15;

/// How a plane list is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Bordered fixed-width table.
    #[default]
    Table,
    /// The same JSON array the data file holds.
    Json,
}

/// Write `planes` to `out` in the requested format.
///
/// An empty list prints [`EMPTY_MESSAGE`] in table format and `[]` in JSON
/// format; both are logged as an empty display attempt.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn display<W: Write>(planes: &PlaneList, format: Format, out: &mut W) -> Result<()> {
    if planes.is_empty() {
        info!("Attempted to display an empty list of planes");
    }

    match format {
        Format::Table if planes.is_empty() => writeln!(out, "{EMPTY_MESSAGE}")?,
        Format::Table => out.write_all(render_table(planes).as_bytes())?,
        Format::Json => {
            out.write_all(&storage::to_pretty_json(planes)?)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Render a bordered table, one row per plane, numbered from 1.
#[must_use]
pub fn render_table(planes: &PlaneList) -> String {
    let line = format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(NO_WIDTH),
        "-".repeat(DESTINATION_WIDTH),
        "-".repeat(NUM_WIDTH),
        "-".repeat(TYPE_WIDTH),
    );

    let mut table = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(table, "{line}");
    let _ = writeln!(
        table,
        "| {:^NO_WIDTH$} | {:^DESTINATION_WIDTH$} | {:^NUM_WIDTH$} | {:^TYPE_WIDTH$} |",
        "No", "Destination", "Flight number", "Aircraft type",
    );
    let _ = writeln!(table, "{line}");

    for (idx, plane) in planes.iter().enumerate() {
        let _ = writeln!(
            table,
            "| {:>NO_WIDTH$} | {:<DESTINATION_WIDTH$} | {:<NUM_WIDTH$} | {:>TYPE_WIDTH$} |",
            idx + 1,
            plane.destination,
            plane.num_text(),
            plane.typ,
        );
        let _ = writeln!(table, "{line}");
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::Plane;

    fn render(planes: &PlaneList, format: Format) -> String {
        let mut out = Vec::new();
        display(planes, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_table_prints_message_only() {
        let output = render(&PlaneList::new(), Format::Table);
        assert_eq!(output, format!("{EMPTY_MESSAGE}\n"));
        assert!(!output.contains('+'));
    }

    #[test]
    fn test_empty_json_prints_empty_array() {
        assert_eq!(render(&PlaneList::new(), Format::Json), "[]\n");
    }

    #[test]
    fn test_table_layout() {
        let mut planes = PlaneList::new();
        planes.add("Moscow", 101, "Boeing 737");

        let output = render(&planes, Format::Table);
        let lines: Vec<&str> = output.lines().collect();

        let border = format!(
            "+-{}-+-{}-+-{}-+-{}-+",
            "-".repeat(4),
            "-".repeat(30),
            "-".repeat(20),
            "-".repeat(15)
        );
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], border);
        assert_eq!(
            lines[1],
            "|  No  |          Destination           |    Flight number     |  Aircraft type  |"
        );
        assert_eq!(lines[2], border);
        assert_eq!(
            lines[3],
            "|    1 | Moscow                         | 101                  |      Boeing 737 |"
        );
        assert_eq!(lines[4], border);
    }

    #[test]
    fn test_rows_are_numbered_in_order() {
        let mut planes = PlaneList::new();
        planes.add("Moscow", 101, "Boeing 737");
        planes.add("Paris", 202, "Airbus A320");

        let table = render_table(&planes);
        let rows: Vec<&str> = table.lines().filter(|l| l.starts_with("| ")).skip(1).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("|    1 | Moscow"));
        assert!(rows[1].starts_with("|    2 | Paris"));
    }

    #[test]
    fn test_border_after_every_row() {
        let planes: PlaneList = (0..3).map(|n| Plane::new("Oslo", n, "ATR 72")).collect();
        let table = render_table(&planes);
        let borders = table.lines().filter(|l| l.starts_with('+')).count();
        assert_eq!(borders, 2 + planes.len());
    }

    #[test]
    fn test_missing_number_renders_blank() {
        let planes: PlaneList = vec![Plane {
            destination: "Kyiv".to_string(),
            num: None,
            typ: "An-148".to_string(),
            extra: serde_json::Map::new(),
        }]
        .into_iter()
        .collect();

        let table = render_table(&planes);
        assert!(table.contains("| Kyiv                           |                      |"));
    }

    #[test]
    fn test_json_format_matches_data_file() {
        let mut planes = PlaneList::new();
        planes.add("Moscow", 101, "Boeing 737");

        let output = render(&planes, Format::Json);
        let parsed: PlaneList = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, planes);
        assert!(output.contains("    {"));
    }

    #[test]
    fn test_format_default() {
        assert_eq!(Format::default(), Format::Table);
    }
}
