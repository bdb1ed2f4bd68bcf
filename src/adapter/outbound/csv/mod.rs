//! CSV table I/O.
//!
//! Source layout: identity columns `scenario`, `category`, `parameter`, an
//! optional `const` column, then one column per projection year (headers
//! beginning with `20`). Other columns are ignored on read.

mod columns;
pub mod reader;
pub mod writer;

pub use reader::{load_table, parse_number, parse_table};
pub use writer::{save_comparison, save_table, write_comparison, write_table};
