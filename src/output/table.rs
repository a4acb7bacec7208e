//! Fixed-width text tables

use prettytable::format::{FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};
use std::io::{self, Write};

/// Borderless layout: space separated, left aligned, dash rule under the titles
fn plain_format() -> TableFormat {
    FormatBuilder::new()
        .column_separator(' ')
        .separators(&[LinePosition::Title], LineSeparator::new('-', '-', '-', '-'))
        .padding(0, 2)
        .build()
}

/// Build a row from plain strings
pub fn text_row<I, S>(cells: I) -> Row
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Row::new(cells.into_iter().map(|c| Cell::new(c.as_ref())).collect())
}

/// New empty table with titles in the plain layout
pub fn new_table<I, S>(titles: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = Table::new();
    table.set_format(plain_format());
    table.set_titles(text_row(titles));
    table
}

/// Write a table, dropping the padding that trails each line
pub fn write_table<W: Write>(table: &Table, out: &mut W) -> io::Result<()> {
    for line in table.to_string().lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
