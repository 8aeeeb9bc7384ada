pub mod error;

// Dashboard records and analytics payloads
pub mod analytics;
pub mod models;

// Data-table contracts shared by the component library and the pages
pub mod cell;
pub mod common;
pub mod config;
pub mod filter;
pub mod table;

pub use error::*;

pub use analytics::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use filter::*;
pub use models::*;
pub use table::*;
