//! Error types

mod field;
mod remote;
mod table;

pub use field::*;
pub use remote::*;
pub use table::*;
