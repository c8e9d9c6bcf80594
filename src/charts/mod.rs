pub mod binning;
pub mod catalog;
pub mod categorical;
pub mod fields;
pub mod pairwise;
pub mod spec;

pub use catalog::PropertyReport;
