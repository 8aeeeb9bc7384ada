//! Dioxus components for the admin dashboard.
//!
//! `components` holds the styled building blocks and the [`DataGrid`]
//! orchestrator; `table` holds the renderer-independent state they drive.

pub mod components;
pub mod table;

pub use components::*;
pub use table::{
    Accessor, Align, Cell, ClientPage, ClientQuery, Column, ColumnKind, DebounceHandle, RowFn,
    RowKey, TableRow, ACTIONS_COLUMN,
};
