//! The ESOP / portfolio investment inward remittance declaration: what the declarant
//! fills in, the options they can tick, and the fixed script that lays it all out.

mod assemble;
mod blocks;
pub mod catalog;
mod page_one;
mod page_two;
mod record;

pub use assemble::*;
pub use blocks::*;
pub use catalog::{SelectableOption, INVESTMENTS, PURPOSES};
pub use page_one::*;
pub use page_two::*;
pub use record::*;
