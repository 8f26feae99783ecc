use crate::error::SheetsError;
use crate::grid::{Cell, Matrix, column_index, column_label};
use crate::range::parser::RangeDescriptor;

/// Resolved rectangle: 1-based origin plus dimensions.
struct Window {
    start_row: usize,
    start_col: usize,
    rows: usize,
    cols: usize,
}

/// Build the fully padded matrix for a sparse response under a descriptor.
///
/// `raw` is anchored at A1: `raw[0][0]` is the sheet's first cell, rows may
/// be ragged and trailing empty rows omitted. The descriptor picks the
/// rectangle:
///
/// - `None` or fully unbounded: the whole observed extent from A1.
/// - Open-ended (`from` only): from the start cell to the observed extent.
/// - Fully bound: exactly the requested rectangle, corners sorted so that
///   "C5:A1" covers the same cells as "A1:C5".
///
/// Every position of the rectangle gets a cell. Positions the response
/// omitted, including whole missing rows, carry empty content.
pub fn normalize(
    raw: &[Vec<String>],
    descriptor: Option<&RangeDescriptor>,
) -> Result<Matrix, SheetsError> {
    let window = resolve_window(raw, descriptor)?;

    let mut rows = Vec::with_capacity(window.rows);
    for row_offset in 0..window.rows {
        let row_number = window.start_row + row_offset;
        let mut cells = Vec::with_capacity(window.cols);
        for col_offset in 0..window.cols {
            let col_number = window.start_col + col_offset;
            let content = row_number
                .checked_sub(1)
                .and_then(|row_index| raw.get(row_index))
                .and_then(|row| row.get(col_number - 1))
                .cloned()
                .unwrap_or_default();
            cells.push(Cell {
                row: row_number,
                column: column_label(col_number),
                content,
            });
        }
        rows.push(cells);
    }

    Ok(Matrix { rows })
}

/// Observed extent of the sparse response.
///
/// The column extent is the running maximum over ALL rows; any row, not
/// just the first, can be the widest.
fn observed_extent(raw: &[Vec<String>]) -> (usize, usize) {
    let widest = raw.iter().map(Vec::len).max().unwrap_or(0);
    (raw.len(), widest)
}

fn resolve_window(
    raw: &[Vec<String>],
    descriptor: Option<&RangeDescriptor>,
) -> Result<Window, SheetsError> {
    let (row_extent, col_extent) = observed_extent(raw);
    let whole_extent = Window {
        start_row: 1,
        start_col: 1,
        rows: row_extent,
        cols: col_extent,
    };
    let Some(descriptor) = descriptor else {
        return Ok(whole_extent);
    };

    match (
        &descriptor.from.col,
        &descriptor.from.row,
        &descriptor.to.col,
        &descriptor.to.row,
    ) {
        (Some(from_col), Some(from_row), Some(to_col), Some(to_row)) => {
            let from_col = column_index(from_col)?;
            let to_col = column_index(to_col)?;
            Ok(Window {
                start_row: *from_row.min(to_row),
                start_col: from_col.min(to_col),
                rows: from_row.abs_diff(*to_row) + 1,
                cols: from_col.abs_diff(to_col) + 1,
            })
        }
        (Some(from_col), Some(from_row), None, None) => {
            let start_col = column_index(from_col)?;
            // A start past the observed extent has nothing to extend to;
            // saturate to an empty window instead of masking the deficit
            // with absolute values.
            let rows = (row_extent + 1).saturating_sub(*from_row);
            let cols = (col_extent + 1).saturating_sub(start_col);
            Ok(Window {
                start_row: *from_row,
                start_col,
                rows: if cols == 0 { 0 } else { rows },
                cols: if rows == 0 { 0 } else { cols },
            })
        }
        _ => Ok(whole_extent),
    }
}
