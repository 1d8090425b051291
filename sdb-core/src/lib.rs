//! Core types for the sales dashboard.
//!
//! - [`record`]: the immutable fact row and the CSV table loader
//! - [`category`], [`region`], [`period`]: the fixed dimension option sets
//! - [`reference`]: the static state-level sales table shown by the regional chart

pub mod category;
pub mod period;
pub mod record;
pub mod reference;
pub mod region;

pub use category::Category;
pub use period::{Quarter, CURRENT_YEAR, PREVIOUS_YEAR};
pub use record::SalesRecord;
pub use region::Region;
