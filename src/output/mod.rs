//! Terminal output

pub mod table;

pub use table::{new_table, text_row, write_table};
