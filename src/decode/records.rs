// src/decode/records.rs

use std::num::ParseIntError;

use tracing::{debug, instrument};

use crate::error::MalformedRecord;

/// A glyph placed at column `x`, row `y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub x: usize,
    pub glyph: String,
    pub y: usize,
}

impl Record {
    /// Read one `x, glyph, y` group of cleaned cells.
    ///
    /// Only the coordinates can fail; the glyph is taken verbatim.
    pub fn from_cells(x: &str, glyph: &str, y: &str) -> Result<Self, MalformedRecord> {
        let x = parse_coordinate(x).map_err(|source| MalformedRecord::InvalidX {
            value: x.to_string(),
            source,
        })?;
        let y = parse_coordinate(y).map_err(|source| MalformedRecord::InvalidY {
            value: y.to_string(),
            source,
        })?;
        for (axis, value) in [('x', x), ('y', y)] {
            if value.checked_add(1).is_none() {
                return Err(MalformedRecord::Overflow { axis, value });
            }
        }
        Ok(Self {
            x,
            glyph: glyph.to_string(),
            y,
        })
    }
}

/// Base-10 non-negative integer. A negative zero such as `-0` reads as 0.
fn parse_coordinate(cell: &str) -> Result<usize, ParseIntError> {
    match cell.strip_prefix('-') {
        Some(zeros) if !zeros.is_empty() && zeros.bytes().all(|b| b == b'0') => Ok(0),
        _ => cell.parse::<usize>(),
    }
}

/// Largest coordinates seen so far. Starts at (0, 0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub max_x: usize,
    pub max_y: usize,
}

impl Bounds {
    fn include(self, record: &Record) -> Self {
        Self {
            max_x: self.max_x.max(record.x),
            max_y: self.max_y.max(record.y),
        }
    }
}

/// Valid records in input order, plus the bounds they cover.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedRecords {
    pub records: Vec<Record>,
    pub bounds: Bounds,
}

impl ParsedRecords {
    pub fn push(&mut self, record: Record) {
        self.bounds = self.bounds.include(&record);
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Group `cells` into consecutive `(x, glyph, y)` triples.
///
/// A trailing partial group is never looked at. Groups whose x or y is not a
/// non-negative integer are skipped without affecting the bounds.
#[instrument(level = "debug", skip(cells), fields(cell_count = cells.len()))]
pub fn parse_records(cells: &[String]) -> ParsedRecords {
    let groups = cells.chunks_exact(3);
    let ignored_tail = groups.remainder().len();

    let parsed = groups
        .enumerate()
        .fold(ParsedRecords::default(), |mut acc, (idx, group)| {
            match Record::from_cells(&group[0], &group[1], &group[2]) {
                Ok(record) => acc.push(record),
                Err(reason) => debug!(group = idx, %reason, "skipping malformed record"),
            }
            acc
        });

    debug!(
        records = parsed.len(),
        ignored_tail,
        max_x = parsed.bounds.max_x,
        max_y = parsed.bounds.max_y,
        "parsed records"
    );
    parsed
}
