//! Output writers for flattened row collections.
//!
//! Two sibling renderers share the same input contract: a literal dump
//! (one re-parseable line per table) and a SQL renderer emitting one
//! `INSERT` statement block per table.

pub mod errors;
pub mod raw;
pub mod sql;

mod count;

pub use errors::RenderError;
pub use raw::{render_raw, write_raw};
pub use sql::{render_sql, write_sql};
