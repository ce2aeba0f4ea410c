//! Record and filter models

pub mod filter;
pub mod video;

pub use filter::{CategoryPolicy, DateRange, Panel};
pub use video::VideoRecord;
