//! Pure domain models (bills and categories). No I/O, no CLI, no network.

pub mod bill;
pub mod category;

pub use bill::*;
pub use category::*;
