//! Headless table state shared by the data grid components.
//!
//! Everything here is plain Rust except the debounce hook, so the state
//! machines can be exercised without a renderer.

pub mod client;
pub mod column;
pub mod debounce;
pub mod row;
pub mod selection;

pub use client::{ClientPage, ClientQuery};
pub use column::{resolve_cell, Accessor, Align, Cell, Column, ColumnKind, ACTIONS_COLUMN};
pub use debounce::{use_debounce, DebounceHandle, Debouncer};
pub use row::{render_key, resolve_row_id, RowFn, RowKey, TableRow};
pub use selection::{Ownership, SelectionState};
