//! Subcommand handlers.

mod replay;
mod services;
mod table;

pub use replay::replay;
pub use services::services;
pub use table::{columns, move_column};
