pub mod cell;
pub mod column;

pub use cell::{Cell, Matrix};
pub use column::{column_index, column_label};
