// src/decode/grid.rs

use std::io::{self, Write};

use super::records::{Bounds, ParsedRecords, Record};

const BLANK: &str = " ";

/// Character canvas indexed `[y][x]`, borrowing glyphs from the records placed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<'a> {
    rows: Vec<Vec<&'a str>>,
}

impl<'a> Grid<'a> {
    /// A blank canvas covering `(0, 0)..=(max_x, max_y)`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            rows: vec![vec![BLANK; bounds.max_x + 1]; bounds.max_y + 1],
        }
    }

    /// Place every record in input order; a later record at the same
    /// coordinate replaces an earlier one.
    pub fn rasterize(parsed: &'a ParsedRecords) -> Self {
        let mut grid = Self::new(parsed.bounds);
        for record in &parsed.records {
            grid.place(record);
        }
        grid
    }

    /// Write `record.glyph` at its coordinate. Returns `false` if it falls outside the grid.
    pub fn place(&mut self, record: &'a Record) -> bool {
        match self
            .rows
            .get_mut(record.y)
            .and_then(|row| row.get_mut(record.x))
        {
            Some(cell) => {
                *cell = record.glyph.as_str();
                true
            }
            None => false,
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Rows top to bottom, cells joined with no separator.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| row.concat())
    }

    /// Print one line per row, each terminated by `\n`.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}
