use serde::Serialize;

/// One addressed cell: 1-based row number, letter column label, content.
///
/// Empty content is a real value; it marks a position the backend omitted
/// or left blank, as opposed to a position outside the matrix entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub row: usize,
    pub column: String,
    pub content: String,
}

/// Rectangular grid of cells.
///
/// Every row has the same length and addresses are contiguous from the
/// top-left origin, regardless of how ragged the backend response was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Matrix {
    pub rows: Vec<Vec<Cell>>,
}

impl Matrix {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row-major flatten keeping only cells with non-empty content.
    pub fn into_cells(self) -> Vec<Cell> {
        self.rows
            .into_iter()
            .flatten()
            .filter(|cell| !cell.content.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Matrix};

    fn cell(row: usize, column: &str, content: &str) -> Cell {
        Cell {
            row,
            column: column.to_owned(),
            content: content.to_owned(),
        }
    }

    #[test]
    fn counts_follow_the_first_row() {
        let matrix = Matrix {
            rows: vec![
                vec![cell(1, "A", "x"), cell(1, "B", "")],
                vec![cell(2, "A", ""), cell(2, "B", "y")],
            ],
        };
        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.col_count(), 2);
        assert!(!matrix.is_empty());
    }

    #[test]
    fn into_cells_drops_empty_content_in_row_major_order() {
        let matrix = Matrix {
            rows: vec![
                vec![cell(1, "A", "x"), cell(1, "B", "")],
                vec![cell(2, "A", ""), cell(2, "B", "y")],
            ],
        };
        let cells = matrix.into_cells();
        assert_eq!(cells, vec![cell(1, "A", "x"), cell(2, "B", "y")]);
    }

    #[test]
    fn empty_matrix_has_zero_counts() {
        let matrix = Matrix::default();
        assert_eq!(matrix.row_count(), 0);
        assert_eq!(matrix.col_count(), 0);
        assert!(matrix.into_cells().is_empty());
    }
}
