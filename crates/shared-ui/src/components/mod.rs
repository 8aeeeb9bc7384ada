// Standalone components
pub mod badge;
pub mod button;
pub mod checkbox;
pub mod form_select;
pub mod input;

// Table building blocks (depend on the standalone components)
pub mod filter_bar;
pub mod pagination;
pub mod data_table;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use checkbox::*;
pub use data_table::*;
pub use filter_bar::*;
pub use form_select::*;
pub use input::*;
pub use pagination::*;
