// src/decode/mod.rs

pub mod cells;
pub mod grid;
pub mod records;

use std::io::{self, Write};

use tracing::info;

pub use cells::extract_cells;
pub use grid::Grid;
pub use records::{parse_records, Bounds, ParsedRecords, Record};

/// Extract, parse and rasterize an already-fetched document, writing the grid to `out`.
pub fn render_document<W: Write>(html: &str, out: W) -> io::Result<()> {
    let cells = extract_cells(html);
    let parsed = parse_records(&cells);
    info!(
        cells = cells.len(),
        records = parsed.len(),
        max_x = parsed.bounds.max_x,
        max_y = parsed.bounds.max_y,
        "decoded document"
    );

    let grid = Grid::rasterize(&parsed);
    grid.write_to(out)?;
    info!(width = grid.width(), height = grid.height(), "printed grid");
    Ok(())
}
