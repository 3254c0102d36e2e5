pub mod catalog;
pub mod listing;

pub use listing::{Host, Listing};
