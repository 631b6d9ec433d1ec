//! Products domain module.
//!
//! Product records, their `;`-delimited line format, and the in-memory
//! [`Inventory`] that loads, queries and edits them. Nothing here writes back to
//! disk: every mutation lives for the duration of the process only.

pub mod inventory;
pub mod product;

pub use inventory::{Inventory, LoadError};
pub use product::{
    FIELD_COUNT, FIELD_DELIMITER, LINE_FORMAT, Product, ProductCode, ProductParseError,
    SearchField, StockSummary,
};
