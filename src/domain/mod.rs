pub mod listing;

pub use listing::{normalize_all, Listing};
