// Re-export all model types
pub use self::catalog::*;
pub use self::filter::*;

mod catalog;
mod filter;
